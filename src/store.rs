//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Page data is not
//! kept here: each view fetches on mount and drops its copy on unmount.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::ApiClient;
use crate::config::AppConfig;

/// Top-level views, switched by the nav bar
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Page {
    #[default]
    Dashboard,
    Brief,
    Inventory,
    Reviews,
    Changes,
    Menu,
    Admin,
}

impl Page {
    pub const ALL: [Page; 7] = [
        Page::Dashboard,
        Page::Brief,
        Page::Inventory,
        Page::Reviews,
        Page::Changes,
        Page::Menu,
        Page::Admin,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Brief => "Pre-Shift Brief",
            Page::Inventory => "Inventory",
            Page::Reviews => "Reviews",
            Page::Changes => "Changes",
            Page::Menu => "Menu",
            Page::Admin => "Admin",
        }
    }
}

/// Result of the last liveness probe
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BackendStatus {
    #[default]
    Unknown,
    Online,
    Offline,
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Visible view
    pub page: Page,
    pub backend: BackendStatus,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// `Copy` handle that builds a client for the configured backend origin
#[derive(Clone, Copy)]
pub struct ApiHandle(AppStore);

impl ApiHandle {
    pub fn client(&self) -> ApiClient {
        ApiClient::from_config(&self.0.config().read_untracked())
    }
}

pub fn use_api() -> ApiHandle {
    ApiHandle(use_app_store())
}
