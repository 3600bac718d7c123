// Main library entry point for crosscall.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;
