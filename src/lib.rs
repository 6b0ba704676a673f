//! Shelter application library
//!
//! Domain modules for the dog and breed catalog, the field validation rules,
//! and the bootstrap shared by the server and the CLI.

pub mod bootstrap;
pub mod modules;
pub mod utils;

/// Re-export commonly used types
pub use modules::*;
