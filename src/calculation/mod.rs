//! Calculation logic for the compensation decision engine.
//!
//! This module contains all the decision functions: raise eligibility
//! evaluation, tiered bonus calculation, status classification from the
//! ordered rating/tenure rule list, department salary rollup, and the
//! shared currency rounding helper.
//!
//! Every function here is a pure, terminating computation over its
//! arguments; the only shared input is the immutable policy, so the
//! functions may be invoked concurrently without locking.

mod bonus;
mod raise;
mod rollup;
mod rounding;
mod status;

pub use bonus::{BonusCalculation, calculate_bonus};
pub use raise::{RaiseEvaluation, evaluate_raise};
pub use rollup::{RollupResult, department_rollup};
pub use rounding::{CURRENCY_SCALE, round_currency};
pub use status::{StatusClassification, classify_status};
