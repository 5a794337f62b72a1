use crate::core::policy::DEFAULT_TAX_RATE;
use crate::domain::model::CostBreakdown;

/// Round to cents, halves away from zero.
pub fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Cost for `days` at `daily_rate` with the default 18% tax.
pub fn calculate_total_cost(daily_rate: f64, days: i64) -> CostBreakdown {
    calculate_total_cost_with_tax(daily_rate, days, DEFAULT_TAX_RATE)
}

/// Inputs are not checked: negative or non-finite values flow straight
/// through the arithmetic.
pub fn calculate_total_cost_with_tax(daily_rate: f64, days: i64, tax_rate: f64) -> CostBreakdown {
    let subtotal = daily_rate * days as f64;
    let tax = subtotal * tax_rate;

    CostBreakdown {
        subtotal: round_to_cents(subtotal),
        tax: round_to_cents(tax),
        total: round_to_cents(subtotal + tax),
        days,
    }
}
