//! Infrastructure layer: database access and schema bootstrap.

pub mod persistence;
