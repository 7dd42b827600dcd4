//! Return projection models
//!
//! Input and output types for the SIP/Lumpsum return calculator, plus the
//! slider ranges that bound the interactive calculator.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Rupees;
use crate::error::{ConsultError, ConsultResult};

/// How the money goes in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum InvestmentMode {
    /// Systematic Investment Plan: a fixed amount every month
    #[default]
    Sip,
    /// One upfront investment
    Lumpsum,
}

impl InvestmentMode {
    /// Parse mode from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "sip" | "monthly" => Some(Self::Sip),
            "lumpsum" | "lump-sum" | "lump_sum" | "onetime" => Some(Self::Lumpsum),
            _ => None,
        }
    }

    /// The other mode
    pub fn toggled(self) -> Self {
        match self {
            Self::Sip => Self::Lumpsum,
            Self::Lumpsum => Self::Sip,
        }
    }

    /// Label for the amount input
    pub fn amount_label(&self) -> &'static str {
        match self {
            Self::Sip => "Monthly Investment",
            Self::Lumpsum => "Total Investment",
        }
    }

    /// Slider bounds for the amount input
    pub fn amount_range(&self) -> SliderRange {
        match self {
            Self::Sip => SIP_AMOUNT_RANGE,
            Self::Lumpsum => LUMPSUM_AMOUNT_RANGE,
        }
    }

    /// Amount the calculator starts from in this mode
    pub fn default_amount(&self) -> f64 {
        self.amount_range().default
    }
}

impl fmt::Display for InvestmentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sip => write!(f, "SIP"),
            Self::Lumpsum => write!(f, "Lumpsum"),
        }
    }
}

/// Bounds, granularity and starting value of one calculator input
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default: f64,
}

/// Monthly SIP amount: ₹500 to ₹1L
pub const SIP_AMOUNT_RANGE: SliderRange = SliderRange {
    min: 500.0,
    max: 100_000.0,
    step: 500.0,
    default: 5_000.0,
};

/// Lumpsum amount: ₹5K to ₹1Cr
pub const LUMPSUM_AMOUNT_RANGE: SliderRange = SliderRange {
    min: 5_000.0,
    max: 10_000_000.0,
    step: 5_000.0,
    default: 100_000.0,
};

/// Expected annual return in percent
pub const RATE_RANGE: SliderRange = SliderRange {
    min: 1.0,
    max: 30.0,
    step: 0.5,
    default: 12.0,
};

/// Investment horizon in years
pub const YEARS_RANGE: SliderRange = SliderRange {
    min: 1.0,
    max: 40.0,
    step: 1.0,
    default: 5.0,
};

/// Longest horizon accepted outside the slider
pub const MAX_YEARS: u32 = 100;

impl SliderRange {
    /// Clamp a value into the range
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    /// Snap a value onto the step grid, then clamp
    pub fn snap(&self, value: f64) -> f64 {
        if !value.is_finite() {
            return self.default;
        }
        let steps = ((value - self.min) / self.step).round();
        self.clamp(self.min + steps * self.step)
    }

    /// Value one step above, clamped
    pub fn step_up(&self, value: f64) -> f64 {
        self.snap(value + self.step)
    }

    /// Value one step below, clamped
    pub fn step_down(&self, value: f64) -> f64 {
        self.snap(value - self.step)
    }

    /// Whether the value lies inside the range
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Position of the value within the range, from 0.0 to 1.0
    pub fn fraction(&self, value: f64) -> f64 {
        if self.max <= self.min {
            return 0.0;
        }
        ((value - self.min) / (self.max - self.min)).clamp(0.0, 1.0)
    }
}

/// Parameters of one projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionInput {
    pub mode: InvestmentMode,
    /// Monthly contribution (SIP) or total investment (Lumpsum)
    pub amount: f64,
    pub annual_rate_percent: f64,
    pub years: u32,
}

impl ProjectionInput {
    /// Build an input, rejecting values outside the calculator's domain
    pub fn new(
        mode: InvestmentMode,
        amount: f64,
        annual_rate_percent: f64,
        years: u32,
    ) -> ConsultResult<Self> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(ConsultError::Validation(format!(
                "Amount must be a positive number, got {}",
                amount
            )));
        }
        if !annual_rate_percent.is_finite() || !(0.0..=100.0).contains(&annual_rate_percent) {
            return Err(ConsultError::Validation(format!(
                "Rate must be between 0 and 100 percent, got {}",
                annual_rate_percent
            )));
        }
        if !(1..=MAX_YEARS).contains(&years) {
            return Err(ConsultError::Validation(format!(
                "Duration must be between 1 and {} years, got {}",
                MAX_YEARS, years
            )));
        }

        Ok(Self {
            mode,
            amount,
            annual_rate_percent,
            years,
        })
    }
}

/// One slice of the invested/returns chart
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartSlice {
    pub label: &'static str,
    pub value: Rupees,
    /// Share of the chart, from 0.0 to 1.0
    pub share: f64,
}

/// Principal/returns/total breakdown, in whole rupees
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProjectionResult {
    pub invested: Rupees,
    pub returns: Rupees,
    pub total: Rupees,
}

impl ProjectionResult {
    /// Build a result from unrounded principal and final value
    ///
    /// Both are rounded first and returns are their difference, so
    /// `total == invested + returns` always holds.
    pub fn from_values(invested: f64, total: f64) -> Self {
        let invested = Rupees::round_from(invested);
        let total = Rupees::round_from(total);
        Self {
            invested,
            returns: total - invested,
            total,
        }
    }

    /// Invested and returns slices for the chart
    ///
    /// Negative values count as zero when computing shares.
    pub fn slices(&self) -> [ChartSlice; 2] {
        let invested = self.invested.value().max(0) as f64;
        let returns = self.returns.value().max(0) as f64;
        let whole = invested + returns;
        let share = |part: f64| if whole > 0.0 { part / whole } else { 0.0 };

        [
            ChartSlice {
                label: "Invested",
                value: self.invested,
                share: share(invested),
            },
            ChartSlice {
                label: "Returns",
                value: self.returns,
                share: share(returns),
            },
        ]
    }
}
