pub mod ui;

/// Page sections in document order: `(id, nav title)`.
pub const SECTIONS: &[(&str, &str)] = &[
    ("home", "Home"),
    ("about", "About"),
    ("services", "Services"),
    ("contact", "Contact"),
];
