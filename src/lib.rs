pub mod checker;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use error::{Result, StructureCheckError};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_VIOLATIONS_FOUND: i32 = 1;
pub const EXIT_ERROR: i32 = 2;
