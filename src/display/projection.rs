//! Calculator result formatting
//!
//! Renders a projection as the input summary, the three result cards and a
//! text bar standing in for the invested/returns chart.

use crate::models::{ProjectionInput, ProjectionResult, Rupees};

use super::report::{format_percentage, format_split_bar, separator};

const WIDTH: usize = 44;
const BAR_WIDTH: usize = 30;

/// Format a rate without a trailing `.0`, e.g. `12 %` or `12.5 %`
pub fn format_rate(rate: f64) -> String {
    format!("{} %", rate)
}

/// Format a duration, e.g. `5 Years`
pub fn format_years(years: u32) -> String {
    if years == 1 {
        "1 Year".to_string()
    } else {
        format!("{} Years", years)
    }
}

/// Format a projection for terminal display
pub fn format_projection_summary(
    input: &ProjectionInput,
    result: &ProjectionResult,
    symbol: &str,
) -> String {
    let amount = Rupees::round_from(input.amount);
    let mut output = String::new();

    output.push_str(&format!("Return Calculator ({})\n", input.mode));
    output.push_str(&separator(WIDTH));
    output.push('\n');
    output.push_str(&format!(
        "{:<24}{:>20}\n",
        input.mode.amount_label(),
        amount.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "{:<24}{:>20}\n",
        "Expected Return (p.a)",
        format_rate(input.annual_rate_percent)
    ));
    output.push_str(&format!(
        "{:<24}{:>20}\n",
        "Time Period",
        format_years(input.years)
    ));
    output.push_str(&separator(WIDTH));
    output.push('\n');

    output.push_str(&format!(
        "{:<24}{:>20}\n",
        "Invested Amount",
        result.invested.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "{:<24}{:>20}\n",
        "Est. Returns",
        result.returns.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "{:<24}{:>20}\n",
        "Total Value",
        result.total.format_with_symbol(symbol)
    ));
    output.push_str(&separator(WIDTH));
    output.push('\n');

    let [invested, returns] = result.slices();
    output.push_str(&format!(
        "{}  {}\n",
        format_split_bar(invested.share, BAR_WIDTH),
        result.total.compact_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "█ {} {}   ░ {} {}\n",
        invested.label,
        format_percentage(invested.share),
        returns.label,
        format_percentage(returns.share)
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::InvestmentMode;
    use crate::services::project;

    #[test]
    fn test_format_rate_and_years() {
        assert_eq!(format_rate(12.0), "12 %");
        assert_eq!(format_rate(7.5), "7.5 %");
        assert_eq!(format_years(1), "1 Year");
        assert_eq!(format_years(40), "40 Years");
    }

    #[test]
    fn test_sip_summary() {
        let input = ProjectionInput::new(InvestmentMode::Sip, 5000.0, 12.0, 5).unwrap();
        let result = project(&input);
        let text = format_projection_summary(&input, &result, "₹");

        assert!(text.starts_with("Return Calculator (SIP)"));
        assert!(text.contains("Monthly Investment"));
        assert!(text.contains("₹ 5,000"));
        assert!(text.contains("₹ 3,00,000"));
        assert!(text.contains("₹ 1,12,432"));
        assert!(text.contains("₹ 4,12,432"));
        assert!(text.contains("₹ 4.12L"));
        assert!(text.contains("Invested 73%"));
    }

    #[test]
    fn test_lumpsum_summary_in_crores() {
        let input =
            ProjectionInput::new(InvestmentMode::Lumpsum, 10_000_000.0, 12.0, 10).unwrap();
        let result = project(&input);
        let text = format_projection_summary(&input, &result, "₹");

        assert!(text.contains("Total Investment"));
        assert!(text.contains("Cr"));
    }
}
