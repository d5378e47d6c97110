use contracts::shared::config::{NavigationConfig, SiteConfig};
use contracts::shared::validation::RuleSet;
use leptos::prelude::*;

/// Page-level UI state, provided once by `App`.
///
/// The contact form rules live here too so that every component validates
/// against the same compiled `RuleSet`.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub menu_open: RwSignal<bool>,
    pub active_section: RwSignal<Option<String>>,
    pub config: StoredValue<SiteConfig>,
    pub rules: StoredValue<RuleSet>,
}

impl AppGlobalContext {
    pub fn new(config: SiteConfig, rules: RuleSet) -> Self {
        Self {
            menu_open: RwSignal::new(false),
            active_section: RwSignal::new(None),
            config: StoredValue::new(config),
            rules: StoredValue::new(rules),
        }
    }

    pub fn toggle_menu(&self) {
        self.menu_open.update(|open| *open = !*open);
    }

    pub fn close_menu(&self) {
        if self.menu_open.get_untracked() {
            self.menu_open.set(false);
        }
    }

    pub fn set_active_section(&self, id: Option<String>) {
        if self.active_section.with_untracked(|current| *current != id) {
            self.active_section.set(id);
        }
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active_section
            .with(|current| current.as_deref() == Some(id))
    }

    pub fn navigation(&self) -> NavigationConfig {
        self.config.with_value(|config| config.navigation.clone())
    }
}

pub fn use_global_context() -> AppGlobalContext {
    leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found")
}
