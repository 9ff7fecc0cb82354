//! # breachscan-core
//!
//! Core types, errors, config, tracing, and constants for the breachscan
//! pipeline.
//!
//! Architecture:
//! - `types` — breach records, categories, flag vectors, severity bands
//! - `errors` — one `thiserror` enum per subsystem, stable error codes
//! - `config` — layered TOML configuration (`breachscan.toml` + env + CLI)
//! - `tracing` — `tracing` setup with `BREACHSCAN_LOG` env filter
//! - `constants` — shared defaults and severity band boundaries

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod types;
