//! Bistro ordering page

use std::sync::Arc;

use bistro::{fixtures::menu::load_menu, menu::Menu, settings::Settings, storefront::Storefront};
use leptos::prelude::*;
use tracing::info;

mod cart;
mod checkout;
mod menu;
mod notifications;
mod timers;

const MENU_FIXTURE_YAML: &str = include_str!("../../../fixtures/menu/bistro.yml");
const SETTINGS_FIXTURE_YAML: &str = include_str!("../../../fixtures/settings.yml");

/// Parsed application fixtures used by the UI.
#[derive(Debug)]
struct AppData {
    /// Menu shown on the left panel.
    menu: Arc<Menu>,

    /// Order endpoint.
    settings: Arc<Settings>,
}

impl AppData {
    fn load() -> Result<Self, String> {
        let settings = Settings::from_yaml(SETTINGS_FIXTURE_YAML)
            .map_err(|error| format!("Failed to parse settings: {error}"))?;

        let menu = load_menu(MENU_FIXTURE_YAML)
            .map_err(|error| format!("Failed to load menu: {error}"))?;

        if menu.is_empty() {
            return Err("No menu items found in fixture".to_string());
        }

        info!(items = menu.len(), categories = menu.categories().len(), "menu loaded");

        Ok(Self {
            menu: Arc::new(menu),
            settings: Arc::new(settings),
        })
    }
}

/// Main page shell.
#[component]
fn App() -> impl IntoView {
    match AppData::load() {
        Ok(app_data) => {
            let storefront = RwSignal::new(Storefront::new());

            view! {
                <main class="page">
                    <div class="page-header">
                        <h1 class="page-title">"Bistro"</h1>
                    </div>
                    <div class="page-grid">
                        <menu::MenuPanel menu=Arc::clone(&app_data.menu) storefront=storefront />
                        <cart::CartPanel
                            storefront=storefront
                            settings=Arc::clone(&app_data.settings)
                        />
                    </div>
                    <notifications::NotificationStack storefront=storefront />
                </main>
            }
            .into_any()
        }
        Err(error_message) => view! {
            <main class="page">
                <div class="page-header">
                    <h1 class="page-title">"Bistro"</h1>
                </div>
                <div class="error-card">
                    <p class="error-text">{error_message}</p>
                </div>
            </main>
        }
        .into_any(),
    }
}

fn main() {
    console_error_panic_hook::set_once();

    if let Err(error) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logging unavailable: {error}");
    }

    leptos::mount::mount_to_body(App);
}
