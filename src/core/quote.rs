use crate::core::booking::BookingCalendar;
use crate::core::clock::SystemClock;
use crate::core::dates::is_weekend;
use crate::core::pricing::calculate_total_cost_with_tax;
use crate::domain::model::{CostBreakdown, ValidationResult};
use crate::domain::ports::Clock;
use serde::{Deserialize, Serialize};

/// What the booking form shows for a selected car and date range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingQuote {
    pub validation: ValidationResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<CostBreakdown>,
    pub weekend_start: bool,
}

pub struct BookingQuoter<C: Clock = SystemClock> {
    calendar: BookingCalendar<C>,
}

impl<C: Clock> BookingQuoter<C> {
    pub fn new(calendar: BookingCalendar<C>) -> Self {
        Self { calendar }
    }

    pub fn calendar(&self) -> &BookingCalendar<C> {
        &self.calendar
    }

    /// Price is only computed for a range that passes validation.
    pub fn quote(&self, start: &str, end: &str, daily_rate: f64) -> BookingQuote {
        let validation = self.calendar.validate(start, end);
        let cost = match (validation.is_valid, validation.duration) {
            (true, Some(days)) => Some(calculate_total_cost_with_tax(
                daily_rate,
                days,
                self.calendar.policy().tax_rate,
            )),
            _ => None,
        };

        if let Some(cost) = &cost {
            tracing::debug!(days = cost.days, total = cost.total, "Quoted booking");
        }

        BookingQuote {
            validation,
            cost,
            weekend_start: is_weekend(start),
        }
    }
}
