use serde::Deserialize;

use crate::models::{BookingInputs, GenerationRequest, LanguageMode, StatusTemplates, Tone};

const SYSTEM_PROMPT: &str = r#"You are a copywriter for small service businesses that take bookings over WhatsApp.
Write short, warm, ready-to-send messages. Never invent prices, addresses or slots that were not given.
Keep each message under 600 characters and do not add commentary around the messages."#;

const TEMPLATES_FORMAT: &str = r#"Return ONLY valid JSON (no markdown, no explanation) with this exact structure:
{
  "confirm": "booking confirmation message",
  "reminder": "reminder message sent before the appointment",
  "reschedule": "message offering to move the appointment",
  "noshow": "message sent after a missed appointment"
}

The confirm and reminder messages MUST contain the literal placeholders {name} and {slot}.
The reschedule and noshow messages must not contain placeholders."#;

pub const BOOKING_TEMPERATURE: f32 = 0.8;
pub const TEMPLATES_TEMPERATURE: f32 = 0.5;
pub const BOOKING_MAX_TOKENS: u32 = 700;
pub const TEMPLATES_MAX_TOKENS: u32 = 600;

fn tone_line(tone: Tone) -> &'static str {
    match tone {
        Tone::Friendly => "Use a warm, friendly tone. Be personable and upbeat.",
        Tone::Premium => {
            "Use a polished, premium tone. Be courteous and understated, no slang or casual greetings."
        }
        Tone::Caring => "Use a gentle, caring tone. Reassure the client and show you value their time.",
    }
}

fn language_line(mode: LanguageMode) -> &'static str {
    match mode {
        LanguageMode::Mix => "Write in a natural mix of English and Roman Urdu, the way people text in Pakistan.",
        LanguageMode::EnglishOnly => "Write in English only.",
        LanguageMode::RomanUrduOnly => "Write in Roman Urdu only (Urdu in Latin script).",
    }
}

fn style_lines(inputs: &BookingInputs) -> Vec<String> {
    let mut lines = vec![
        tone_line(inputs.tone).to_string(),
        language_line(inputs.language_mode).to_string(),
    ];

    if inputs.include_prep {
        lines.push("Include one short line on how the client should prepare for the visit.".to_string());
    }
    if inputs.include_policy {
        lines.push(
            "Include one short line on the late-arrival and cancellation policy (ask for 24 hours notice)."
                .to_string(),
        );
    }
    if inputs.use_emoji {
        lines.push("Use a few fitting emoji.".to_string());
    } else {
        lines.push("Do not use emoji.".to_string());
    }

    lines
}

pub fn booking_request(inputs: &BookingInputs) -> GenerationRequest {
    let slots = if inputs.slots.is_empty() {
        "- (no fixed slots, invite the client to suggest a time)".to_string()
    } else {
        inputs
            .slots
            .iter()
            .map(|s| format!("- {s}"))
            .collect::<Vec<_>>()
            .join("\n")
    };

    let prompt = format!(
        "Write 4 different WhatsApp booking messages for {brand} offering {service}.\n\n\
         Available slots:\n{slots}\n\n\
         Style:\n{style}\n\n\
         Number them 1 to 4 and separate them with a blank line.",
        brand = inputs.brand,
        service = inputs.service,
        style = style_lines(inputs).join("\n"),
    );

    GenerationRequest::new(prompt, SYSTEM_PROMPT, BOOKING_TEMPERATURE, BOOKING_MAX_TOKENS)
}

pub fn templates_request(inputs: &BookingInputs) -> GenerationRequest {
    let prompt = format!(
        "Write the four status messages {brand} sends for a {service} appointment.\n\n\
         Style:\n{style}\n\n{TEMPLATES_FORMAT}",
        brand = inputs.brand,
        service = inputs.service,
        style = style_lines(inputs).join("\n"),
    );

    GenerationRequest::new(prompt, SYSTEM_PROMPT, TEMPLATES_TEMPERATURE, TEMPLATES_MAX_TOKENS)
}

#[derive(Deserialize)]
struct RawTemplates {
    confirm: String,
    reminder: String,
    reschedule: String,
    #[serde(alias = "no_show", alias = "no-show")]
    noshow: String,
}

impl RawTemplates {
    fn into_templates(self) -> Option<StatusTemplates> {
        let all_present = [&self.confirm, &self.reminder, &self.reschedule, &self.noshow]
            .iter()
            .all(|t| !t.trim().is_empty());
        if !all_present {
            return None;
        }

        Some(StatusTemplates {
            confirm: self.confirm.trim().to_string().into(),
            reminder: self.reminder.trim().to_string().into(),
            reschedule: self.reschedule.trim().to_string().into(),
            noshow: self.noshow.trim().to_string().into(),
        })
    }
}

/// Reads generated templates out of a completion that may wrap its JSON in
/// markdown fences or prose. `None` when no complete set can be found.
pub fn parse_templates_response(response: &str) -> Option<StatusTemplates> {
    if let Ok(raw) = serde_json::from_str::<RawTemplates>(response) {
        return raw.into_templates();
    }

    // Strip markdown code fences
    let cleaned = response
        .trim()
        .strip_prefix("```json")
        .or_else(|| response.trim().strip_prefix("```"))
        .unwrap_or(response.trim());
    let cleaned = cleaned.strip_suffix("```").unwrap_or(cleaned).trim();

    if let Ok(raw) = serde_json::from_str::<RawTemplates>(cleaned) {
        return raw.into_templates();
    }

    // Try to find JSON object in the response
    let start = cleaned.find('{')?;
    let end = cleaned.rfind('}')?;
    if end <= start {
        return None;
    }
    match serde_json::from_str::<RawTemplates>(&cleaned[start..=end]) {
        Ok(raw) => raw.into_templates(),
        Err(e) => {
            tracing::warn!(error = %e, "failed to parse generated templates JSON");
            None
        }
    }
}
