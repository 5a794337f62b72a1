use crate::core::clock::SystemClock;
use crate::core::dates::{add_days, format_date_for_input, parse_calendar_date};
use crate::core::policy::BookingPolicy;
use crate::domain::model::{DateRange, ValidationResult};
use crate::domain::ports::Clock;

pub const START_DATE_INVALID: &str = "Start date is invalid";
pub const END_DATE_INVALID: &str = "End date is invalid";
pub const START_DATE_IN_PAST: &str = "Start date cannot be in the past";
pub const END_NOT_AFTER_START: &str = "End date must be after start date";

fn day_word(n: i64) -> &'static str {
    if n == 1 {
        "day"
    } else {
        "days"
    }
}

/// Booking date rules bound to a policy and a clock.
#[derive(Debug, Clone)]
pub struct BookingCalendar<C: Clock = SystemClock> {
    policy: BookingPolicy,
    clock: C,
}

impl Default for BookingCalendar<SystemClock> {
    fn default() -> Self {
        Self::new(BookingPolicy::default(), SystemClock)
    }
}

impl<C: Clock> BookingCalendar<C> {
    pub fn new(policy: BookingPolicy, clock: C) -> Self {
        Self { policy, clock }
    }

    pub fn policy(&self) -> &BookingPolicy {
        &self.policy
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn min_duration_message(&self) -> String {
        format!(
            "Booking duration must be at least {} {}",
            self.policy.min_days,
            day_word(self.policy.min_days)
        )
    }

    pub fn max_duration_message(&self) -> String {
        format!(
            "Booking duration cannot exceed {} {}",
            self.policy.max_days,
            day_word(self.policy.max_days)
        )
    }

    /// Check a proposed range and collect every problem found.
    ///
    /// Parse failures are reported alone: once either date is unreadable
    /// no range checks run and `duration` stays empty.
    pub fn validate(&self, start: &str, end: &str) -> ValidationResult {
        let mut errors = Vec::new();

        let start_date = parse_calendar_date(start);
        let end_date = parse_calendar_date(end);
        if start_date.is_none() {
            errors.push(START_DATE_INVALID.to_string());
        }
        if end_date.is_none() {
            errors.push(END_DATE_INVALID.to_string());
        }
        let (Some(start_date), Some(end_date)) = (start_date, end_date) else {
            tracing::debug!(start, end, "Booking dates did not parse");
            return ValidationResult {
                is_valid: false,
                errors,
                duration: None,
            };
        };

        let range = DateRange::new(start_date, end_date);
        let today = self.clock.today();
        if range.start < today {
            errors.push(START_DATE_IN_PAST.to_string());
        }
        if range.end <= range.start {
            errors.push(END_NOT_AFTER_START.to_string());
        }

        let duration = range.days();
        if duration < self.policy.min_days {
            errors.push(self.min_duration_message());
        }
        if duration > self.policy.max_days {
            errors.push(self.max_duration_message());
        }

        tracing::debug!(
            %start_date,
            %end_date,
            %today,
            duration,
            error_count = errors.len(),
            "Validated booking dates"
        );

        ValidationResult {
            is_valid: errors.is_empty(),
            errors,
            duration: Some(duration),
        }
    }

    /// Earliest date the picker should offer.
    pub fn min_date(&self) -> String {
        format_date_for_input(Some(self.clock.today()))
    }

    /// Latest date the picker should offer.
    pub fn max_date(&self) -> String {
        format_date_for_input(add_days(self.clock.today(), self.policy.max_days))
    }

    /// End date for the shortest booking the policy allows, i.e.
    /// `start + min_days` (one day under the default policy). `""` if `start`
    /// does not parse.
    pub fn suggested_end_date(&self, start: &str) -> String {
        let end = parse_calendar_date(start).and_then(|d| add_days(d, self.policy.min_days));
        format_date_for_input(end)
    }
}

/// Validate with the default 1–30 day policy.
pub fn validate_booking_dates<C: Clock>(start: &str, end: &str, clock: C) -> ValidationResult {
    BookingCalendar::new(BookingPolicy::default(), clock).validate(start, end)
}

pub fn min_booking_date<C: Clock>(clock: C) -> String {
    BookingCalendar::new(BookingPolicy::default(), clock).min_date()
}

pub fn max_booking_date<C: Clock>(clock: C) -> String {
    BookingCalendar::new(BookingPolicy::default(), clock).max_date()
}

/// The day after `start`, as `YYYY-MM-DD`. Does not read the clock.
pub fn suggested_end_date(start: &str) -> String {
    let end = parse_calendar_date(start).and_then(|d| add_days(d, 1));
    format_date_for_input(end)
}
