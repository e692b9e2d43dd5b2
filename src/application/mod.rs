// Application layer: the in-memory ledger and its use cases.
// Any client (the console adapter, tests) goes through `ExpenseLedger`.

pub mod error;
pub mod reporting;
pub mod service;

pub use error::*;
pub use reporting::*;
pub use service::*;
