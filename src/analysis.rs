pub mod alert;
pub mod features;
pub mod risk;
