pub mod cli;
pub mod config;
pub mod error;
pub mod message;
pub mod output;
pub mod rules;
pub mod scanner;
pub mod schema;
pub mod scorecard;

pub use error::{A11yLintError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FINDINGS: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
