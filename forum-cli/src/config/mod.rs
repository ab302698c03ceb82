//! Configuration module for the terminal client.
//! Defines and wires application-wide settings and dependencies.
mod dependencies;

pub use dependencies::Dependencies;
