//! Error types and error reporting for the parser.
//!
//! This module defines the diagnostics produced while parsing. It includes:
//!
//! - Error structures with source position information
//! - The diagnostic variants and their canonical message text
//! - Short suggestions shown alongside rendered diagnostics

pub mod errors;

#[cfg(test)]
mod tests;
