//! CLI command definitions.

pub mod call;
pub mod migrate;
pub mod reset;
pub mod seed;
pub mod serve;
pub mod setup;
