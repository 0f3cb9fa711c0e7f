pub mod app;
pub mod config;
pub mod input;
pub mod keybinds;
pub mod samples;
pub mod ui;
pub mod view;

pub use app::App;
pub use config::Config;
