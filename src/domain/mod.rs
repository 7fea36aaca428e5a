//! Domain types: shape kinds, scene configuration, error taxonomy.

pub mod config;
pub mod error;
pub mod shapes;
