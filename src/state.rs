use crate::services::ai::TextGenerator;

pub struct AppState {
    pub generator: Box<dyn TextGenerator>,
}
