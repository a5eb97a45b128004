//! This module is responsible for turning committed routes into a
//! weighted directed graph.

mod builder;
mod config;

pub use builder::compile;
pub use config::GraphConfig;
