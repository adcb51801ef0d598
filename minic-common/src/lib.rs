//! minic type checker - Common Types and Utilities
//! 
//! This crate contains the identifier types and the toolchain-level
//! error shared by the frontend and the driver.

pub mod error;
pub mod types;

pub use error::CompilerError;
pub use types::*;
