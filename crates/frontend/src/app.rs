use contracts::shared::config::SiteConfig;
use contracts::shared::validation::RuleSet;
use leptos::prelude::*;

use crate::domain::contact::ui::ContactSection;
use crate::domain::landing::ui::{About, Hero, Services};
use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use crate::shared::config::load_site_config;
use crate::shared::theme::ThemeProvider;

fn load() -> anyhow::Result<(SiteConfig, RuleSet)> {
    let config = load_site_config()?;
    let rules = config.rule_set()?;
    Ok((config, rules))
}

#[component]
pub fn App() -> impl IntoView {
    let (config, rules) = match load() {
        Ok(loaded) => loaded,
        Err(err) => {
            log::error!("Failed to load site config: {:#}", err);
            return view! {
                <div class="config-error">"Site configuration is invalid. See the console for details."</div>
            }
            .into_any();
        }
    };

    let storage_key = config.theme.storage_key.clone();

    // Provide the page state and compiled form rules to the whole app via context.
    provide_context(AppGlobalContext::new(config, rules));

    view! {
        <ThemeProvider storage_key=storage_key>
            <Shell>
                <Hero />
                <About />
                <Services />
                <ContactSection />
            </Shell>
        </ThemeProvider>
    }
    .into_any()
}
