//! Module system and settings shared by every shelter crate.

pub mod module;
pub mod registry;
pub mod settings;

pub use module::{DbPool, InitCtx, Migration, Module};
pub use registry::ModuleRegistry;
