//! Policy loading and management for the compensation decision engine.
//!
//! This module provides functionality to load compensation policies from
//! YAML files, including raise eligibility, bonus tiers, and status rules.
//!
//! # Example
//!
//! ```no_run
//! use compensation_engine::config::PolicyLoader;
//!
//! let loader = PolicyLoader::load("./config/default").unwrap();
//! println!("Loaded policy: {}", loader.policy().policy.name);
//! ```

mod loader;
mod types;

pub use loader::PolicyLoader;
pub use types::{
    BonusSchedule, BonusTier, CompensationPolicy, PolicyMetadata, RaisePolicy, StatusPolicy,
    StatusRule,
};
