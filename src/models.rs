pub mod insight;
pub mod transactions;
