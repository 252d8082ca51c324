//! Compensation Decision Engine
//!
//! This crate provides a rule-based engine for compensation decisions:
//! raise eligibility under a proposed percentage increase, tiered bonus
//! calculation keyed by performance rating, and status classification
//! from an ordered rating/tenure rule list.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
