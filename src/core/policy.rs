use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_number, validate_range, Validate};
use serde::{Deserialize, Serialize};

pub const DEFAULT_MIN_DAYS: i64 = 1;
pub const DEFAULT_MAX_DAYS: i64 = 30;
pub const DEFAULT_TAX_RATE: f64 = 0.18;

/// Booking limits shared by the validator, the date-picker defaults and the
/// quote. Keeping them in one place keeps those three consistent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookingPolicy {
    pub min_days: i64,
    pub max_days: i64,
    pub tax_rate: f64,
}

impl Default for BookingPolicy {
    fn default() -> Self {
        Self {
            min_days: DEFAULT_MIN_DAYS,
            max_days: DEFAULT_MAX_DAYS,
            tax_rate: DEFAULT_TAX_RATE,
        }
    }
}

impl Validate for BookingPolicy {
    fn validate(&self) -> Result<()> {
        validate_positive_number("policy.min_days", self.min_days, 1)?;
        validate_positive_number("policy.max_days", self.max_days, self.min_days)?;
        validate_range("policy.tax_rate", self.tax_rate, 0.0, 1.0)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_is_valid() {
        let policy = BookingPolicy::default();
        assert_eq!(policy.min_days, 1);
        assert_eq!(policy.max_days, 30);
        assert_eq!(policy.tax_rate, 0.18);
        assert!(policy.validate().is_ok());
    }

    #[test]
    fn test_policy_rejects_inverted_limits() {
        let policy = BookingPolicy {
            min_days: 5,
            max_days: 2,
            ..Default::default()
        };
        assert!(policy.validate().is_err());

        let policy = BookingPolicy {
            min_days: 0,
            ..Default::default()
        };
        assert!(policy.validate().is_err());
    }

    #[test]
    fn test_policy_rejects_tax_out_of_range() {
        let policy = BookingPolicy {
            tax_rate: 18.0,
            ..Default::default()
        };
        assert!(policy.validate().is_err());
    }
}
