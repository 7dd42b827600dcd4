//! Service catalog display formatting
//!
//! Formats the catalog as a table and a single service as a detail page.

use crate::models::ServiceItem;

use super::report::{separator, wrap_text};

const DETAIL_WIDTH: usize = 72;

/// Format the catalog as a table
pub fn format_service_list(services: &[ServiceItem]) -> String {
    if services.is_empty() {
        return "No services found.".to_string();
    }

    let title_width = services
        .iter()
        .map(|s| s.title.chars().count())
        .max()
        .unwrap_or(5)
        .max(5);

    let mut output = String::new();
    output.push_str(&format!(
        "{:>3}  {:<title_width$}  {}\n",
        "ID",
        "Title",
        "Description",
        title_width = title_width,
    ));
    output.push_str(&format!(
        "{:->3}  {:-<title_width$}  {:-<40}\n",
        "",
        "",
        "",
        title_width = title_width,
    ));

    for service in services {
        output.push_str(&format!(
            "{:>3}  {:<title_width$}  {}\n",
            service.id,
            service.title,
            service.description,
            title_width = title_width,
        ));
    }

    output
}

/// Format one service as a detail page
pub fn format_service_details(service: &ServiceItem) -> String {
    let mut output = String::new();

    output.push_str(&format!("{} {}\n", service.icon.glyph(), service.title));
    output.push_str(&separator(DETAIL_WIDTH));
    output.push('\n');
    for line in wrap_text(service.long_description, DETAIL_WIDTH) {
        output.push_str(&line);
        output.push('\n');
    }
    output.push('\n');

    output.push_str("Key Features\n");
    for feature in service.features {
        output.push_str(&format!("  ✓ {}\n", feature));
    }
    output.push('\n');

    output.push_str(&format!("Ready to optimize your {}?\n", service.title));
    output.push_str(&format!(
        "Book a consultation: fcsons contact --subject \"{}\" ...\n",
        service.title
    ));

    output
}
