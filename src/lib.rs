pub mod application;
pub mod cli;
pub mod domain;

pub use application::ExpenseLedger;
pub use domain::*;
