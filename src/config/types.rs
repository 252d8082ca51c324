//! Configuration types for compensation policies.
//!
//! This module contains the strongly-typed policy structures that are
//! deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{EngineError, EngineResult};

/// Metadata about the policy.
#[derive(Debug, Clone, Deserialize)]
pub struct PolicyMetadata {
    /// A short code identifying the policy (e.g., "comp_default").
    pub code: String,
    /// The human-readable name of the policy.
    pub name: String,
    /// The version or effective date of the policy.
    pub version: String,
}

/// Raise eligibility policy.
#[derive(Debug, Clone, Deserialize)]
pub struct RaisePolicy {
    /// The minimum performance rating required for a raise to be approved.
    pub minimum_rating: i32,
}

/// A single bonus tier keyed by performance rating.
#[derive(Debug, Clone, Deserialize)]
pub struct BonusTier {
    /// The rating this tier applies to.
    pub rating: i32,
    /// The bonus as a fraction of salary (e.g., 0.15 for 15%).
    pub percentage: Decimal,
}

/// An ordered mapping from rating value to bonus percentage.
///
/// Fixed at construction, immutable thereafter. Ratings without a tier
/// resolve to a percentage of zero -- an unknown rating means "no bonus",
/// not invalid input.
#[derive(Debug, Clone, Deserialize)]
pub struct BonusSchedule {
    /// The configured tiers, one per rating.
    pub tiers: Vec<BonusTier>,
}

impl BonusSchedule {
    /// Returns the bonus percentage for a rating, zero when no tier matches.
    pub fn percentage_for(&self, rating: i32) -> Decimal {
        self.tiers
            .iter()
            .find(|tier| tier.rating == rating)
            .map(|tier| tier.percentage)
            .unwrap_or(Decimal::ZERO)
    }
}

/// A prioritized classification predicate.
///
/// A rule matches when `rating >= minimum_rating` and
/// `years_of_service >= minimum_tenure`.
#[derive(Debug, Clone, Deserialize)]
pub struct StatusRule {
    /// The minimum rating for this rule to match.
    pub minimum_rating: i32,
    /// The minimum completed years of service for this rule to match.
    pub minimum_tenure: i32,
    /// The label returned when this rule is the first match.
    pub label: String,
}

/// Status classification policy.
///
/// Rules are checked strictly in declared order and the first match wins;
/// reordering the list changes behaviour, so the list is preserved exactly
/// as configured. The fallback label makes classification a total function.
#[derive(Debug, Clone, Deserialize)]
pub struct StatusPolicy {
    /// The ordered rule list.
    pub rules: Vec<StatusRule>,
    /// The label returned when no rule matches.
    pub fallback_label: String,
}

/// The complete compensation policy.
///
/// Configured once at engine construction and immutable for the engine's
/// lifetime. [`CompensationPolicy::default`] supplies the built-in table,
/// so the engine is usable without a policy file.
#[derive(Debug, Clone, Deserialize)]
pub struct CompensationPolicy {
    /// Policy metadata.
    pub policy: PolicyMetadata,
    /// Raise eligibility policy.
    pub raise: RaisePolicy,
    /// Bonus schedule.
    pub bonus: BonusSchedule,
    /// Status classification policy.
    pub status: StatusPolicy,
}

impl CompensationPolicy {
    /// Validates the structural invariants of a loaded policy.
    ///
    /// # Returns
    ///
    /// Returns `InvalidPolicy` if:
    /// - Any bonus tier percentage is negative
    /// - Two bonus tiers share the same rating
    /// - Any status rule has a negative tenure floor
    /// - The status rule list is empty
    pub fn validate(&self) -> EngineResult<()> {
        for tier in &self.bonus.tiers {
            if tier.percentage < Decimal::ZERO {
                return Err(EngineError::InvalidPolicy {
                    message: format!(
                        "bonus percentage for rating {} is negative",
                        tier.rating
                    ),
                });
            }
        }

        for (i, tier) in self.bonus.tiers.iter().enumerate() {
            if self.bonus.tiers[..i].iter().any(|t| t.rating == tier.rating) {
                return Err(EngineError::InvalidPolicy {
                    message: format!("duplicate bonus tier for rating {}", tier.rating),
                });
            }
        }

        if self.status.rules.is_empty() {
            return Err(EngineError::InvalidPolicy {
                message: "status rule list is empty".to_string(),
            });
        }

        for rule in &self.status.rules {
            if rule.minimum_tenure < 0 {
                return Err(EngineError::InvalidPolicy {
                    message: format!(
                        "status rule '{}' has a negative tenure floor",
                        rule.label
                    ),
                });
            }
        }

        Ok(())
    }
}

impl Default for CompensationPolicy {
    /// The built-in policy: raise eligibility at rating 4, bonus tiers
    /// {5: 15%, 4: 10%, 3: 5%}, and the four-rule status matrix with
    /// "Under Review" as the fallback label.
    fn default() -> Self {
        Self {
            policy: PolicyMetadata {
                code: "comp_default".to_string(),
                name: "Default Compensation Policy".to_string(),
                version: "2026-01-01".to_string(),
            },
            raise: RaisePolicy { minimum_rating: 4 },
            bonus: BonusSchedule {
                tiers: vec![
                    BonusTier {
                        rating: 5,
                        percentage: Decimal::new(15, 2),
                    },
                    BonusTier {
                        rating: 4,
                        percentage: Decimal::new(10, 2),
                    },
                    BonusTier {
                        rating: 3,
                        percentage: Decimal::new(5, 2),
                    },
                ],
            },
            status: StatusPolicy {
                rules: vec![
                    StatusRule {
                        minimum_rating: 5,
                        minimum_tenure: 5,
                        label: "Senior Star Performer".to_string(),
                    },
                    StatusRule {
                        minimum_rating: 4,
                        minimum_tenure: 3,
                        label: "High Performer".to_string(),
                    },
                    StatusRule {
                        minimum_rating: 3,
                        minimum_tenure: 0,
                        label: "Good Standing".to_string(),
                    },
                    StatusRule {
                        minimum_rating: 2,
                        minimum_tenure: 0,
                        label: "Needs Improvement".to_string(),
                    },
                ],
                fallback_label: "Under Review".to_string(),
            },
        }
    }
}
