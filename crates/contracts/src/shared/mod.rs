pub mod config;
pub mod mailto;
pub mod navigation;
pub mod validation;
