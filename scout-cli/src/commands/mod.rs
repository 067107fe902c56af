//! CLI command implementations.

mod expand;
mod resolve;

pub use expand::ExpandCommand;
pub use resolve::ResolveCommand;
