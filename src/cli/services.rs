//! Service catalog CLI commands

use clap::Subcommand;

use crate::display::{format_service_details, format_service_list};
use crate::error::ConsultResult;
use crate::services::CatalogService;

/// Catalog subcommands
#[derive(Subcommand, Debug)]
pub enum ServicesCommands {
    /// List all services
    List {
        /// Print the catalog as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the details of one service
    Show {
        /// Service ID or title
        service: String,
        /// Print the service as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Handle a catalog command
pub fn handle_services_command(cmd: ServicesCommands) -> ConsultResult<()> {
    let catalog = CatalogService::new();

    match cmd {
        ServicesCommands::List { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(catalog.all())?);
            } else {
                print!("{}", format_service_list(catalog.all()));
            }
        }

        ServicesCommands::Show { service, json } => {
            let found = catalog.find(&service)?;
            if json {
                println!("{}", serde_json::to_string_pretty(found)?);
            } else {
                print!("{}", format_service_details(found));
            }
        }
    }

    Ok(())
}
