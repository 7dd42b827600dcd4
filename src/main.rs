use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;

use fcsons::cli::{
    handle_ask_command, handle_calc_command, handle_contact_command, handle_services_command,
};
use fcsons::config::{paths::ConsultPaths, settings::Settings};
use fcsons::services::CatalogService;

#[derive(Parser)]
#[command(
    name = "fcsons",
    author = "FC and Sons Consulting",
    version,
    about = "FC & Sons Consulting in your terminal",
    long_about = "Browse the services of FC & Sons Consulting, project the growth of \
                  a SIP or a lumpsum investment, send a consultation request and \
                  chat with the AI financial assistant from the command line."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui,

    /// Investment growth calculator
    #[command(subcommand)]
    Calc(fcsons::cli::CalcCommands),

    /// Browse the service catalog
    #[command(subcommand)]
    Services(fcsons::cli::ServicesCommands),

    /// Send a consultation request
    Contact(fcsons::cli::ContactArgs),

    /// Ask the AI financial assistant
    Ask {
        /// Your question
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },

    /// Create the configuration file
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let paths = ConsultPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Tui) => {
            fcsons::tui::run_tui(&settings)?;
        }
        Some(Commands::Calc(cmd)) => {
            handle_calc_command(&settings, cmd)?;
        }
        Some(Commands::Services(cmd)) => {
            handle_services_command(cmd)?;
        }
        Some(Commands::Contact(args)) => {
            handle_contact_command(&settings, args)?;
        }
        Some(Commands::Ask { query }) => {
            handle_ask_command(&settings, &query)?;
        }
        Some(Commands::Init) => {
            println!("Initializing fcsons at: {}", paths.base_dir().display());
            paths.ensure_directories()?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Settings written to {}", paths.settings_file().display());
            println!("Run 'fcsons services list' to see what we offer.");
        }
        Some(Commands::Config) => {
            println!("fcsons Configuration");
            println!("====================");
            println!("Config directory: {}", paths.config_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:  {}", settings.currency_symbol);
            println!("  Contact endpoint: {}", settings.contact_endpoint);
            println!("  Default mode:     {}", settings.calculator.default_mode);
            println!("  Assistant model:  {}", settings.assistant.model);
            println!("  API key variable: {}", settings.assistant.api_key_env);
        }
        None => {
            println!("FC & Sons Consulting - Wealth Management Redefined.");
            println!();
            println!(
                "{} services: Mutual Funds, Insurance, Taxation, Real Estate, Forex and more.",
                CatalogService::new().len()
            );
            println!();
            println!("Run 'fcsons --help' for usage information.");
            println!("Run 'fcsons tui' to launch the interactive interface.");
        }
    }

    Ok(())
}
