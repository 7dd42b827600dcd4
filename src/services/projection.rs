//! Return projection engine
//!
//! Turns investment parameters into a principal/returns/total breakdown.
//! Pure and infallible: inputs are expected to be within the calculator's
//! domain, see [`ProjectionInput::new`].

use crate::models::{InvestmentMode, ProjectionInput, ProjectionResult};

/// Months per year for SIP contributions
const MONTHS_PER_YEAR: f64 = 12.0;

/// Project the value of an investment
pub fn project(input: &ProjectionInput) -> ProjectionResult {
    let (invested, total) = match input.mode {
        InvestmentMode::Sip => sip_values(input.amount, input.annual_rate_percent, input.years),
        InvestmentMode::Lumpsum => {
            lumpsum_values(input.amount, input.annual_rate_percent, input.years)
        }
    };

    ProjectionResult::from_values(invested, total)
}

/// Unrounded (invested, total) for monthly contributions
///
/// Future value of an annuity due: contributions at the start of each month,
/// compounded monthly at `rate / 12`.
pub fn sip_values(monthly_amount: f64, annual_rate_percent: f64, years: u32) -> (f64, f64) {
    let months = f64::from(years) * MONTHS_PER_YEAR;
    let invested = monthly_amount * months;

    // A zero rate would divide by zero below; growth is just the contributions.
    if annual_rate_percent == 0.0 {
        return (invested, invested);
    }

    let monthly_rate = annual_rate_percent / 100.0 / MONTHS_PER_YEAR;
    let growth = (1.0 + monthly_rate).powf(months);
    let total = monthly_amount * ((growth - 1.0) / monthly_rate) * (1.0 + monthly_rate);

    (invested, total)
}

/// Unrounded (invested, total) for a single investment compounded yearly
pub fn lumpsum_values(amount: f64, annual_rate_percent: f64, years: u32) -> (f64, f64) {
    let total = amount * (1.0 + annual_rate_percent / 100.0).powf(f64::from(years));
    (amount, total)
}
