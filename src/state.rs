use crate::store::MoodStore;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Mutex<MoodStore>>,
}

impl AppState {
    pub fn new(store: MoodStore) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }
}
