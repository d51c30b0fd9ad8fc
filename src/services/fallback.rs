use crate::models::{StatusTemplates, Tone};

const SPARKLES: char = '✨';
const CALENDAR: char = '📅';

/// Two booking pitches separated by a blank line: a greeting and an
/// urgency variant. `Premium` strips the emoji and swaps the casual
/// greetings for formal ones; other tones get the text as is.
pub fn fallback_booking(service: &str, slots_oneline: &str, brand: &str, tone: Tone) -> String {
    let greeting = format!(
        "Assalamualaikum! {SPARKLES} {brand} here.\n\
         Book your {service} with us this week.\n\
         Available slots: {slots_oneline}\n\
         Reply with your preferred slot and we'll confirm it right away."
    );

    let urgency = format!(
        "Hi! {CALENDAR} {service} slots at {brand} are filling fast.\n\
         Open slots: {slots_oneline}\n\
         Reply now to lock in your time before it's gone."
    );

    let text = format!("{greeting}\n\n{urgency}");

    match tone {
        Tone::Premium => premium_polish(&text),
        Tone::Friendly | Tone::Caring => text,
    }
}

fn premium_polish(text: &str) -> String {
    text.replace(SPARKLES, "")
        .replace(CALENDAR, "")
        .replace("Hi!", "Hello,")
        .replace("Assalamualaikum!", "Greetings,")
}

/// Status templates for confirm/reminder/reschedule/no-show. Confirm and
/// reminder keep `{name}` and `{slot}` for per-client rendering.
pub fn fallback_templates(service: &str, brand: &str) -> StatusTemplates {
    StatusTemplates {
        confirm: format!(
            "Hi {{name}}, your {service} at {brand} is confirmed for {{slot}}. \
             Reply YES to confirm or RESCHEDULE to pick another time."
        )
        .into(),
        reminder: format!(
            "Reminder: {{name}}, your {service} at {brand} is coming up on {{slot}}. \
             See you soon!"
        )
        .into(),
        reschedule: format!(
            "No problem! Reply with a day and time that suits you and {brand} \
             will move your {service} appointment."
        )
        .into(),
        noshow: format!(
            "We missed you today at {brand}. Would you like to rebook your {service}? \
             Reply with a time that works for you."
        )
        .into(),
    }
}
