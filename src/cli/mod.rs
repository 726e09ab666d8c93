//! Command-line interface module.

mod args;
pub mod commit;
pub mod generate;
pub mod render;
pub mod serve;

pub use args::{Cli, Commands};
