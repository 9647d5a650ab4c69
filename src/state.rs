use crate::config::Config;
use crate::flash::Flashes;
use crate::store::WorkoutStore;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub store: Arc<Mutex<WorkoutStore>>,
    pub flashes: Flashes,
}

impl AppState {
    pub fn new(config: Config, store: WorkoutStore) -> Self {
        Self {
            config: Arc::new(config),
            store: Arc::new(Mutex::new(store)),
            flashes: Flashes::default(),
        }
    }
}
