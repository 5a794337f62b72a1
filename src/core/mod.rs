pub mod booking;
pub mod clock;
pub mod dates;
pub mod policy;
pub mod pricing;
pub mod quote;

pub use crate::domain::model::{CostBreakdown, DateRange, ValidationResult};
pub use crate::domain::ports::Clock;
