pub mod menu_bar;
pub mod notice;
pub mod request_window;
pub mod settings_panel;
