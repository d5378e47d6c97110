pub mod field_errors;
pub mod form;
pub mod section;
pub mod success_banner;

pub use field_errors::FieldErrors;
pub use form::ContactForm;
pub use section::ContactSection;
pub use success_banner::SuccessBanner;
