mod aggregate;
mod category;
mod expense;
mod money;
pub mod validation;

pub use aggregate::*;
pub use category::*;
pub use expense::*;
pub use money::*;
