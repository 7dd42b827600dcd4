//! Interactive calculator state
//!
//! The current input tuple of the return calculator. Every setter keeps the
//! values inside their slider ranges, and the result is re-derived from the
//! tuple on demand.

use super::projection::{
    InvestmentMode, ProjectionInput, ProjectionResult, SliderRange, RATE_RANGE, YEARS_RANGE,
};
use crate::services::projection::project;

/// Which calculator input is selected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CalculatorField {
    #[default]
    Amount,
    Rate,
    Years,
}

impl CalculatorField {
    /// Get the next field (for Tab navigation)
    pub fn next(self) -> Self {
        match self {
            Self::Amount => Self::Rate,
            Self::Rate => Self::Years,
            Self::Years => Self::Amount,
        }
    }

    /// Get the previous field (for Shift+Tab navigation)
    pub fn prev(self) -> Self {
        match self {
            Self::Amount => Self::Years,
            Self::Rate => Self::Amount,
            Self::Years => Self::Rate,
        }
    }
}

/// Calculator inputs, always within slider bounds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalculatorState {
    mode: InvestmentMode,
    amount: f64,
    rate: f64,
    years: u32,
    /// Input adjusted by the arrow keys
    pub focused_field: CalculatorField,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new(InvestmentMode::default())
    }
}

impl CalculatorState {
    /// Fresh calculator opened in the given mode
    pub fn new(mode: InvestmentMode) -> Self {
        Self {
            mode,
            amount: mode.default_amount(),
            rate: RATE_RANGE.default,
            years: YEARS_RANGE.default as u32,
            focused_field: CalculatorField::default(),
        }
    }

    pub fn mode(&self) -> InvestmentMode {
        self.mode
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    pub fn years(&self) -> u32 {
        self.years
    }

    /// Switch mode; the amount resets to the new mode's default
    pub fn set_mode(&mut self, mode: InvestmentMode) {
        if self.mode != mode {
            self.mode = mode;
            self.amount = mode.default_amount();
        }
    }

    /// Switch to the other mode
    pub fn toggle_mode(&mut self) {
        self.set_mode(self.mode.toggled());
    }

    pub fn set_amount(&mut self, amount: f64) {
        self.amount = self.mode.amount_range().snap(amount);
    }

    pub fn set_rate(&mut self, rate: f64) {
        self.rate = RATE_RANGE.snap(rate);
    }

    pub fn set_years(&mut self, years: u32) {
        self.years = YEARS_RANGE.snap(years as f64) as u32;
    }

    /// Slider bounds of a field in the current mode
    pub fn range(&self, field: CalculatorField) -> SliderRange {
        match field {
            CalculatorField::Amount => self.mode.amount_range(),
            CalculatorField::Rate => RATE_RANGE,
            CalculatorField::Years => YEARS_RANGE,
        }
    }

    /// Current value of a field
    pub fn value(&self, field: CalculatorField) -> f64 {
        match field {
            CalculatorField::Amount => self.amount,
            CalculatorField::Rate => self.rate,
            CalculatorField::Years => self.years as f64,
        }
    }

    /// Move the focused field one step up
    pub fn increase(&mut self) {
        let field = self.focused_field;
        let next = self.range(field).step_up(self.value(field));
        self.apply(field, next);
    }

    /// Move the focused field one step down
    pub fn decrease(&mut self) {
        let field = self.focused_field;
        let next = self.range(field).step_down(self.value(field));
        self.apply(field, next);
    }

    /// Jump the focused field to its minimum
    pub fn to_min(&mut self) {
        let field = self.focused_field;
        let min = self.range(field).min;
        self.apply(field, min);
    }

    /// Jump the focused field to its maximum
    pub fn to_max(&mut self) {
        let field = self.focused_field;
        let max = self.range(field).max;
        self.apply(field, max);
    }

    fn apply(&mut self, field: CalculatorField, value: f64) {
        match field {
            CalculatorField::Amount => self.set_amount(value),
            CalculatorField::Rate => self.set_rate(value),
            CalculatorField::Years => self.set_years(value.round() as u32),
        }
    }

    /// The projection input for the current tuple
    pub fn input(&self) -> ProjectionInput {
        ProjectionInput {
            mode: self.mode,
            amount: self.amount,
            annual_rate_percent: self.rate,
            years: self.years,
        }
    }

    /// Recompute the projection from the current inputs
    pub fn result(&self) -> ProjectionResult {
        project(&self.input())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let calc = CalculatorState::default();
        assert_eq!(calc.mode(), InvestmentMode::Sip);
        assert_eq!(calc.amount(), 5_000.0);
        assert_eq!(calc.rate(), 12.0);
        assert_eq!(calc.years(), 5);
        assert_eq!(calc.focused_field, CalculatorField::Amount);
    }

    #[test]
    fn test_mode_switch_resets_amount() {
        let mut calc = CalculatorState::default();
        calc.set_amount(20_000.0);
        calc.set_rate(15.0);

        calc.set_mode(InvestmentMode::Lumpsum);
        assert_eq!(calc.amount(), 100_000.0);
        assert_eq!(calc.rate(), 15.0);

        calc.toggle_mode();
        assert_eq!(calc.mode(), InvestmentMode::Sip);
        assert_eq!(calc.amount(), 5_000.0);
    }

    #[test]
    fn test_same_mode_keeps_amount() {
        let mut calc = CalculatorState::default();
        calc.set_amount(20_000.0);
        calc.set_mode(InvestmentMode::Sip);
        assert_eq!(calc.amount(), 20_000.0);
    }

    #[test]
    fn test_setters_clamp() {
        let mut calc = CalculatorState::default();
        calc.set_amount(1_000_000.0);
        assert_eq!(calc.amount(), 100_000.0);
        calc.set_rate(0.2);
        assert_eq!(calc.rate(), 1.0);
        calc.set_years(99);
        assert_eq!(calc.years(), 40);
        calc.set_years(0);
        assert_eq!(calc.years(), 1);
    }

    #[test]
    fn test_step_focused_field() {
        let mut calc = CalculatorState::default();
        calc.increase();
        assert_eq!(calc.amount(), 5_500.0);

        calc.focused_field = calc.focused_field.next();
        calc.decrease();
        assert_eq!(calc.rate(), 11.5);

        calc.focused_field = CalculatorField::Years;
        calc.to_max();
        calc.increase();
        assert_eq!(calc.years(), 40);
        calc.to_min();
        assert_eq!(calc.years(), 1);
    }

    #[test]
    fn test_field_cycle() {
        assert_eq!(CalculatorField::Years.next(), CalculatorField::Amount);
        assert_eq!(CalculatorField::Amount.prev(), CalculatorField::Years);
    }

    #[test]
    fn test_result_tracks_inputs() {
        let mut calc = CalculatorState::default();
        let before = calc.result();
        calc.focused_field = CalculatorField::Years;
        calc.increase();
        let after = calc.result();
        assert!(after.total > before.total);
        assert_eq!(after.invested.value(), 5_000 * 6 * 12);
    }
}
