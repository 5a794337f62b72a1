pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::TomlConfig;

pub use crate::adapters::{http::ApiClient, session::FileSessionStore, session::MemorySessionStore};
pub use crate::app::auth::AuthContext;
pub use crate::core::booking::{
    max_booking_date, min_booking_date, suggested_end_date, validate_booking_dates, BookingCalendar,
};
pub use crate::core::clock::{FixedClock, SystemClock};
pub use crate::core::dates::{
    calculate_days_between, format_date, format_date_for_input, is_weekend, parse_calendar_date,
    DateInput,
};
pub use crate::core::policy::BookingPolicy;
pub use crate::core::pricing::{calculate_total_cost, calculate_total_cost_with_tax};
pub use crate::core::quote::{BookingQuote, BookingQuoter};
pub use crate::domain::model::{CostBreakdown, DateRange, ValidationResult};
pub use crate::utils::error::{RentalError, Result};
