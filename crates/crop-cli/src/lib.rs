//! Console interface for the crop health estimator

mod advisor;
mod input;
mod log_writer;
mod renderer;
mod session;
mod ui;


pub use advisor::CropAdvisor;
pub use input::InputCollector;
pub use log_writer::{SessionLog, DEFAULT_LOG_FILE};
pub use renderer::{Renderer, TypingRenderer};
pub use session::run_session;
pub use ui::{display_banner, print_action_plan, print_results, print_section};

// Re-export core types
pub use crop_core::{Error, Result};
