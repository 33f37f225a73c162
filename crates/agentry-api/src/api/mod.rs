//! HTTP API modules

pub mod agents;
