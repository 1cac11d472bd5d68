pub mod app;
pub mod canvas_view;
pub mod settings_modal;
pub mod toolbar;
pub mod zoom_controls;
