//! Error types and error handling for the parser.
//!
//! This module defines the error types recorded while scanning and
//! parsing. It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for lexical and syntax errors
//! - Error formatting and display functionality
//! - Helpful error messages and suggestions

pub mod errors;
