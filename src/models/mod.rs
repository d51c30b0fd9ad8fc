pub mod booking;
pub mod client;
pub mod generation;
pub mod template;

pub use booking::{BookingInputs, LanguageMode, Tone};
pub use client::{ClientRecord, RenderedClientMessage};
pub use generation::{GenerationError, GenerationRequest, GenerationResult};
pub use template::{MessageTemplate, StatusTemplates};
