mod app;
mod controls;
mod help;
mod input;
mod log_view;
mod status;
mod theme;

pub use app::render_app;
