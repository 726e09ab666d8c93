//! Utility modules.

pub mod exec;
pub mod git;
pub mod html;
pub mod mime;
pub mod path;
