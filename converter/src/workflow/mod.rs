pub mod config;
pub mod runner;

pub use config::{TrackConfig, TrailConfig};
pub use runner::{TrackRunner, TrailRunner, WorkflowResult};
