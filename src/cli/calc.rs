//! Calculator CLI commands
//!
//! Runs a single SIP or Lumpsum projection and prints the summary cards,
//! or the raw numbers as JSON.

use clap::{Args, Subcommand};
use serde::Serialize;

use crate::config::settings::Settings;
use crate::display::format_projection_summary;
use crate::error::ConsultResult;
use crate::models::{InvestmentMode, ProjectionInput, ProjectionResult};
use crate::services::project;

/// Parameters shared by both calculator modes
#[derive(Args, Debug, Clone)]
pub struct ProjectionArgs {
    /// Amount in rupees (monthly for SIP, total for Lumpsum) [default: 5000 for SIP, 100000 for Lumpsum]
    #[arg(short, long)]
    pub amount: Option<f64>,
    /// Expected annual return in percent
    #[arg(short, long, default_value_t = 12.0)]
    pub rate: f64,
    /// Investment horizon in years (1 to 100)
    #[arg(short, long, default_value_t = 5)]
    pub years: u32,
    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

/// Calculator subcommands
#[derive(Subcommand, Debug)]
pub enum CalcCommands {
    /// Monthly contributions (Systematic Investment Plan)
    Sip(ProjectionArgs),
    /// Single upfront investment
    Lumpsum(ProjectionArgs),
}

#[derive(Serialize)]
struct ProjectionReport<'a> {
    input: &'a ProjectionInput,
    result: &'a ProjectionResult,
}

/// Handle a calculator command
pub fn handle_calc_command(settings: &Settings, cmd: CalcCommands) -> ConsultResult<()> {
    let (mode, args) = match cmd {
        CalcCommands::Sip(args) => (InvestmentMode::Sip, args),
        CalcCommands::Lumpsum(args) => (InvestmentMode::Lumpsum, args),
    };

    let amount = args.amount.unwrap_or_else(|| mode.default_amount());
    let input = ProjectionInput::new(mode, amount, args.rate, args.years)?;
    let result = project(&input);
    log::debug!("projection {:?} -> {:?}", input, result);

    if args.json {
        let report = ProjectionReport {
            input: &input,
            result: &result,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!(
            "{}",
            format_projection_summary(&input, &result, &settings.currency_symbol)
        );
    }

    Ok(())
}
