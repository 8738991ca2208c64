use std::sync::Arc;

use pulse_types::Showcase;

#[derive(Clone, Default)]
pub struct AppState {
    pub showcase: Arc<Showcase>,
}

impl AppState {
    pub fn new(showcase: Showcase) -> Self {
        Self {
            showcase: Arc::new(showcase),
        }
    }
}
