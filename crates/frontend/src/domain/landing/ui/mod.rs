pub mod about;
pub mod hero;
pub mod services;

pub use about::About;
pub use hero::Hero;
pub use services::Services;
