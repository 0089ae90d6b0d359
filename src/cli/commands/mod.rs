//! Command implementations for the parbench CLI

pub mod config;
pub mod run;
pub mod version;
