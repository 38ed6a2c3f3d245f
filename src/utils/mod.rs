//! Utility functions.

pub mod alias_generator;
