use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::shared::validation::defaults::CONTACT_FIELDS;
use crate::shared::validation::{contact_field_configs, FieldRuleConfig, RuleSet, RuleError};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SiteConfig {
    pub contact: ContactConfig,
    #[serde(default)]
    pub navigation: NavigationConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
    /// Contact form rules. Empty means the built-in contact rules; otherwise
    /// exactly the fields rendered by the form must be declared.
    #[serde(default)]
    pub fields: Vec<FieldRuleConfig>,
}

/// What a successful submission does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryMode {
    /// Show the success banner only
    #[default]
    Banner,
    /// Open a pre-filled `mailto:` link only
    Mailto,
    Both,
}

impl DeliveryMode {
    pub fn shows_banner(&self) -> bool {
        matches!(self, DeliveryMode::Banner | DeliveryMode::Both)
    }

    pub fn opens_mailto(&self) -> bool {
        matches!(self, DeliveryMode::Mailto | DeliveryMode::Both)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ContactConfig {
    pub recipient: String,
    #[serde(default = "default_subject")]
    pub subject: String,
    #[serde(default)]
    pub delivery: DeliveryMode,
    #[serde(default = "default_success_hide_ms")]
    pub success_hide_ms: u32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct NavigationConfig {
    pub navbar_offset_px: f64,
    pub scroll_spy_offset_px: f64,
    pub scroll_throttle_ms: u32,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            navbar_offset_px: 70.0,
            scroll_spy_offset_px: 100.0,
            scroll_throttle_ms: 16,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub storage_key: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: "darkMode".to_string(),
        }
    }
}

fn default_subject() -> String {
    "Contact from website".to_string()
}

fn default_success_hide_ms() -> u32 {
    5000
}

/// Default configuration embedded in the bundle
pub const DEFAULT_CONFIG: &str = r#"
[contact]
recipient = "hello@example.com"
subject = "Contact from website"
delivery = "banner"
success_hide_ms = 5000

[navigation]
navbar_offset_px = 70.0
scroll_spy_offset_px = 100.0
scroll_throttle_ms = 16

[theme]
storage_key = "darkMode"
"#;

impl SiteConfig {
    /// Compile the contact form rules declared by this config.
    pub fn rule_set(&self) -> Result<RuleSet, RuleError> {
        if self.fields.is_empty() {
            RuleSet::from_config(&contact_field_configs())
        } else {
            RuleSet::from_config(&self.fields)
        }
    }
}

/// The form renders a fixed set of inputs, so the rules must cover each of
/// them and nothing else.
fn check_form_fields(rules: &RuleSet) -> anyhow::Result<()> {
    let missing: Vec<&str> = CONTACT_FIELDS
        .iter()
        .copied()
        .filter(|field| !rules.contains(field))
        .collect();
    if !missing.is_empty() {
        anyhow::bail!("Contact form rules missing field(s): {}", missing.join(", "));
    }

    let unknown: Vec<&str> = rules
        .field_names()
        .filter(|field| !CONTACT_FIELDS.contains(field))
        .collect();
    if !unknown.is_empty() {
        anyhow::bail!(
            "Contact form rules declare field(s) the form does not render: {}",
            unknown.join(", ")
        );
    }

    Ok(())
}

/// Parse a TOML site config and check that its rules compile and match the
/// contact form.
pub fn parse_site_config(contents: &str) -> anyhow::Result<SiteConfig> {
    let config: SiteConfig = toml::from_str(contents).context("Invalid site config")?;
    let rules = config
        .rule_set()
        .context("Invalid contact form rules in site config")?;
    check_form_fields(&rules).context("Invalid contact form rules in site config")?;
    Ok(config)
}

pub fn default_site_config() -> anyhow::Result<SiteConfig> {
    parse_site_config(DEFAULT_CONFIG)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = default_site_config().unwrap();
        assert_eq!(config.contact.recipient, "hello@example.com");
        assert_eq!(config.contact.delivery, DeliveryMode::Banner);
        assert_eq!(config.contact.success_hide_ms, 5000);
        assert_eq!(config.navigation.navbar_offset_px, 70.0);
        assert_eq!(config.navigation.scroll_spy_offset_px, 100.0);
        assert_eq!(config.theme.storage_key, "darkMode");
        assert_eq!(config.rule_set().unwrap().len(), 3);
    }

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config = parse_site_config(
            r#"
            [contact]
            recipient = "me@site.dev"
            delivery = "both"
            "#,
        )
        .unwrap();
        assert!(config.contact.delivery.shows_banner());
        assert!(config.contact.delivery.opens_mailto());
        assert_eq!(config.contact.subject, "Contact from website");
        assert_eq!(config.contact.success_hide_ms, 5000);
        assert_eq!(config.navigation.scroll_throttle_ms, 16);
    }

    #[test]
    fn test_custom_fields() {
        let config = parse_site_config(
            r#"
            [contact]
            recipient = "me@site.dev"

            [[fields]]
            name = "name"
            required = true

            [[fields]]
            name = "email"
            required = true
            pattern = '^[^\s@]+@[^\s@]+$'

            [fields.messages]
            pattern = "Bad email."

            [[fields]]
            name = "message"
            display_name = "Your message"
            max_length = 5
            "#,
        )
        .unwrap();

        let rules = config.rule_set().unwrap();
        let names: Vec<_> = rules.field_names().collect();
        assert_eq!(names, vec!["name", "email", "message"]);

        let email = rules.get("email").unwrap();
        assert_eq!(
            email.message_for(crate::shared::validation::ViolationKind::Pattern),
            "Bad email."
        );
    }

    #[test]
    fn test_fields_outside_the_form_are_rejected() {
        let err = parse_site_config(
            r#"
            [contact]
            recipient = "me@site.dev"

            [[fields]]
            name = "name"
            [[fields]]
            name = "email"
            [[fields]]
            name = "message"
            [[fields]]
            name = "phone"
            required = true
            "#,
        )
        .unwrap_err();
        assert!(format!("{err:#}").contains("phone"));
    }

    #[test]
    fn test_fields_missing_form_inputs_are_rejected() {
        let err = parse_site_config(
            r#"
            [contact]
            recipient = "me@site.dev"

            [[fields]]
            name = "email"
            required = true
            "#,
        )
        .unwrap_err();
        let text = format!("{err:#}");
        assert!(text.contains("missing field(s): name, message"));
    }

    #[test]
    fn test_bad_rules_are_rejected() {
        let err = parse_site_config(
            r#"
            [contact]
            recipient = "me@site.dev"

            [[fields]]
            name = "zip"
            pattern = "[0-9"
            "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("Invalid contact form rules"));
    }

    #[test]
    fn test_missing_contact_section_is_rejected() {
        assert!(parse_site_config("[theme]\nstorage_key = \"x\"").is_err());
    }

    #[test]
    fn test_delivery_modes() {
        assert!(DeliveryMode::Banner.shows_banner());
        assert!(!DeliveryMode::Banner.opens_mailto());
        assert!(!DeliveryMode::Mailto.shows_banner());
        assert!(DeliveryMode::Mailto.opens_mailto());
    }
}
