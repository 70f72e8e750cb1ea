//! nttmul library: application logic for the decimal multiplier binary.

pub mod app;
pub mod config;
pub mod errors;
pub mod input;
