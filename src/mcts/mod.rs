pub mod algorithm;
pub mod arena;
pub mod backup;
pub mod expansion;
pub mod hyperparameters;
pub mod inspect;
pub mod node;
pub mod policy;
pub mod selection;
pub mod tree;

#[cfg(test)]
pub(crate) mod test_support;
