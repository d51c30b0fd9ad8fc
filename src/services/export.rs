use anyhow::Context;

use crate::models::{RenderedClientMessage, StatusTemplates};

pub const BOOKING_PROMPTS_FILE: &str = "booking_prompts.txt";
pub const TEMPLATES_FILE: &str = "templates.txt";
pub const CLIENT_MESSAGES_FILE: &str = "client_messages.csv";

pub fn booking_prompts_txt(text: &str) -> String {
    format!("{}\n", text.trim_end())
}

pub fn templates_txt(templates: &StatusTemplates) -> String {
    let sections = [
        ("CONFIRMATION", &templates.confirm),
        ("REMINDER", &templates.reminder),
        ("RESCHEDULE", &templates.reschedule),
        ("NO-SHOW", &templates.noshow),
    ];

    let body = sections
        .iter()
        .map(|(heading, tpl)| format!("{heading}:\n{}", tpl.as_str()))
        .collect::<Vec<_>>()
        .join("\n\n");

    format!("{body}\n")
}

pub fn client_messages_csv(messages: &[RenderedClientMessage]) -> anyhow::Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    // Written explicitly so an empty upload still yields a header row.
    writer
        .write_record(["name", "phone", "slot", "confirm_message", "reminder_message"])
        .context("failed to write CSV header")?;

    for msg in messages {
        writer
            .write_record([
                &msg.name,
                &msg.phone,
                &msg.slot,
                &msg.confirm_message,
                &msg.reminder_message,
            ])
            .context("failed to write CSV row")?;
    }

    writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("failed to flush CSV: {}", e.error()))
}
