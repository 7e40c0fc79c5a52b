//! Configuration loading and management for the End-of-Service Gratuity Engine.
//!
//! This module provides functionality to load the gratuity accrual policy
//! from YAML files: the accrual tiers, the fixed month length used for the
//! daily rate, the minimum qualifying service and the duration convention.
//!
//! # Example
//!
//! ```no_run
//! use eosg_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/uae").unwrap();
//! println!("Loaded policy: {}", config.policy().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{AccrualTier, DurationConvention, GratuityPolicy};
