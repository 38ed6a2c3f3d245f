//! Infrastructure layer: concrete database integrations.

pub mod persistence;
