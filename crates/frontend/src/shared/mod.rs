pub mod components;
pub mod config;
pub mod dom;
pub mod scroll_spy;
pub mod theme;
