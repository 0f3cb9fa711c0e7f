pub mod client;
pub mod error;
pub mod types;

pub use client::SolveClient;
pub use error::{SolveError, SolveOutcome};
pub use types::*;
