mod app;
mod message;
mod screens;
mod state;
mod widgets;

pub use app::{WaterdashApp, run};
pub use message::Message;
pub use state::AppState;
