use dioxus::prelude::*;

mod actions;
mod bank_icons;
mod components;
mod config;
mod hooks;
mod onboarding;
mod routes;
mod storage;
mod store;
mod types;
mod wallet_transfer;

use config::ClientConfig;
use routes::Route;
use store::{AppStore, PersistentStore};

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn init_logging(config: &ClientConfig) {
    #[cfg(target_os = "android")]
    android_logger::init_once(
        android_logger::Config::default()
            .with_max_level(config.log_level())
            .with_tag("expense-client"),
    );

    #[cfg(not(target_os = "android"))]
    {
        let _ = env_logger::Builder::new()
            .filter_level(config.log_level())
            .try_init();
    }
}

fn main() {
    let config = ClientConfig::from_env();
    init_logging(&config);

    if let Some(dir) = &config.storage_dir {
        storage::set_storage_dir_override(dir.clone());
    }
    log::info!("Starting expense-client, storage at {}", storage::get_storage_dir());

    dioxus::LaunchBuilder::new().with_context(config).launch(App);
}

#[component]
fn App() -> Element {
    let config = use_context::<ClientConfig>();

    use_context_provider(|| {
        let store = AppStore::new(PersistentStore::load());
        if config.seed_demo_data {
            actions::bank_accounts::seed_demo_bank_accounts(&*store);
        }
        store
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}
