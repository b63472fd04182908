//! Ratatui front-end. Collects raw form input, hands it to the entity
//! services, and shows rows or status messages in return. It holds no
//! business state of its own.

mod app;
mod forms;
mod helpers;
mod screens;
mod terminal;

pub use app::App;
pub use terminal::run_app;
