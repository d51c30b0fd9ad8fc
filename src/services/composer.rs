use serde::Serialize;

use crate::models::{BookingInputs, GenerationError, StatusTemplates};
use crate::services::ai::prompts::{booking_request, parse_templates_response, templates_request};
use crate::services::ai::TextGenerator;
use crate::services::fallback::{fallback_booking, fallback_templates};

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Generated,
    Fallback,
}

#[derive(Debug, Clone, Serialize)]
pub struct Composed {
    pub text: String,
    pub source: Source,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ComposedTemplates {
    pub templates: StatusTemplates,
    pub source: Source,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

fn fallback_note(err: &GenerationError) -> String {
    match err {
        GenerationError::MissingCredential => {
            "No API key configured; showing template text.".to_string()
        }
        GenerationError::Disabled => "AI generation is off; showing template text.".to_string(),
        other => format!("AI generation unavailable ({other}); showing template text."),
    }
}

pub async fn compose_booking(generator: &dyn TextGenerator, inputs: &BookingInputs) -> Composed {
    let result = generator.generate(&booking_request(inputs)).await;

    match result.non_blank() {
        Ok(text) => Composed {
            text,
            source: Source::Generated,
            note: None,
        },
        Err(e) => {
            tracing::info!(reason = %e, service = %inputs.service, "using fallback booking copy");
            Composed {
                text: fallback_booking(
                    &inputs.service,
                    &inputs.slots_oneline(),
                    &inputs.brand,
                    inputs.tone,
                ),
                source: Source::Fallback,
                note: Some(fallback_note(&e)),
            }
        }
    }
}

pub async fn compose_templates(
    generator: &dyn TextGenerator,
    inputs: &BookingInputs,
) -> ComposedTemplates {
    let result = generator.generate(&templates_request(inputs)).await;

    let failure = match result.non_blank() {
        Ok(text) => match parse_templates_response(&text) {
            Some(templates) => {
                return ComposedTemplates {
                    templates,
                    source: Source::Generated,
                    note: None,
                };
            }
            None => "AI returned templates in an unexpected format; showing template text."
                .to_string(),
        },
        Err(e) => fallback_note(&e),
    };

    tracing::info!(reason = %failure, service = %inputs.service, "using fallback status templates");
    ComposedTemplates {
        templates: fallback_templates(&inputs.service, &inputs.brand),
        source: Source::Fallback,
        note: Some(failure),
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;
    use crate::models::{GenerationRequest, GenerationResult, LanguageMode, Tone};
    use crate::services::ai::gateway::OfflineGenerator;

    struct FixedGenerator(GenerationResult);

    #[async_trait]
    impl TextGenerator for FixedGenerator {
        async fn generate(&self, _request: &GenerationRequest) -> GenerationResult {
            self.0.clone()
        }

        fn label(&self) -> &'static str {
            "fixed"
        }
    }

    fn inputs(tone: Tone) -> BookingInputs {
        BookingInputs {
            service: "Haircut".to_string(),
            brand: "TickCom Salon".to_string(),
            slots: vec!["Mon 3PM".to_string(), "Tue 11AM".to_string()],
            tone,
            language_mode: LanguageMode::Mix,
            include_prep: false,
            include_policy: true,
            use_emoji: true,
        }
    }

    #[tokio::test]
    async fn test_generated_booking_passes_through() {
        let generator = FixedGenerator(GenerationResult::Success("1. Book now".into()));
        let composed = compose_booking(&generator, &inputs(Tone::Friendly)).await;
        assert_eq!(composed.source, Source::Generated);
        assert_eq!(composed.text, "1. Book now");
        assert!(composed.note.is_none());
    }

    #[tokio::test]
    async fn test_blank_booking_falls_back() {
        let generator = FixedGenerator(GenerationResult::Success(String::new()));
        let composed = compose_booking(&generator, &inputs(Tone::Friendly)).await;
        assert_eq!(composed.source, Source::Fallback);
        assert_eq!(
            composed.text,
            fallback_booking("Haircut", "Mon 3PM | Tue 11AM", "TickCom Salon", Tone::Friendly)
        );
    }

    #[tokio::test]
    async fn test_missing_credential_is_a_note() {
        let generator = FixedGenerator(GenerationResult::Failure(GenerationError::MissingCredential));
        let composed = compose_booking(&generator, &inputs(Tone::Premium)).await;
        assert_eq!(composed.source, Source::Fallback);
        assert!(composed.text.contains("Greetings,"));
        assert!(composed.note.unwrap().contains("No API key"));
    }

    #[tokio::test]
    async fn test_generated_templates_parsed() {
        let json = r#"{"confirm":"Hi {name}, {slot}","reminder":"{name} {slot}","reschedule":"move?","noshow":"missed"}"#;
        let generator = FixedGenerator(GenerationResult::Success(json.into()));
        let composed = compose_templates(&generator, &inputs(Tone::Caring)).await;
        assert_eq!(composed.source, Source::Generated);
        assert_eq!(composed.templates.reschedule.as_str(), "move?");
    }

    #[tokio::test]
    async fn test_unparseable_templates_fall_back() {
        let generator = FixedGenerator(GenerationResult::Success("Here are some ideas...".into()));
        let composed = compose_templates(&generator, &inputs(Tone::Friendly)).await;
        assert_eq!(composed.source, Source::Fallback);
        assert_eq!(composed.templates, fallback_templates("Haircut", "TickCom Salon"));
        assert!(composed.note.unwrap().contains("unexpected format"));
    }

    #[tokio::test]
    async fn test_offline_generator_is_deterministic() {
        let a = compose_templates(&OfflineGenerator, &inputs(Tone::Friendly)).await;
        let b = compose_templates(&OfflineGenerator, &inputs(Tone::Friendly)).await;
        assert_eq!(a.templates, b.templates);
        assert_eq!(a.source, Source::Fallback);

        let booking = compose_booking(&OfflineGenerator, &inputs(Tone::Friendly)).await;
        assert!(booking.note.unwrap().contains("AI generation is off"));
    }
}
