pub mod app;
pub mod config;
pub mod errors;
pub mod flash;
pub mod guides;
pub mod handlers;
pub mod metrics;
pub mod models;
pub mod pdf;
pub mod report;
pub mod state;
pub mod stats;
pub mod store;
pub mod ui;
pub mod validation;

pub use app::router;
pub use config::Config;
pub use state::AppState;
pub use store::WorkoutStore;
