//! Core domain contracts.

pub mod repositories;
