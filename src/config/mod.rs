//! Configuration management for parbench
//!
//! Layers, lowest priority first: embedded `default-config.toml`, an optional
//! file passed with `--config`, then the `--size` command-line flag.

mod core;

pub use self::core::{BenchConfig, DatasetConfig};
