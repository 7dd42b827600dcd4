//! Assistant CLI command

use crate::config::settings::Settings;
use crate::error::{ConsultError, ConsultResult};
use crate::services::{AssistantService, ReqwestTransport};

/// Ask the AI assistant a question and print the reply
pub fn handle_ask_command(settings: &Settings, query: &[String]) -> ConsultResult<()> {
    let query = query.join(" ");
    if query.trim().is_empty() {
        return Err(ConsultError::Validation("Question cannot be empty".into()));
    }

    let transport = ReqwestTransport::new();
    let assistant = AssistantService::new(&transport, &settings.assistant);
    let reply = assistant.ask(query.trim());

    if reply.is_error {
        log::warn!("assistant returned a fallback reply");
    }
    println!("{}", reply.text);

    Ok(())
}
