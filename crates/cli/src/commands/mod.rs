//! Command implementations for the `gunnery` binary
//!
//! Each command owns its CLI args and execution logic.

mod hit;
mod max_transversal;
mod parse;
mod recent;

pub use hit::Hit;
pub use max_transversal::MaxTransversal;
pub use parse::Parse;
pub use recent::Recent;
