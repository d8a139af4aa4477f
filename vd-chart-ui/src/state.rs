//! Application state managed via Dioxus context.
//!
//! `AppState` bundles the reactive signals of the dashboard into a single
//! `Copy` struct provided via `use_context_provider`. Child components
//! retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use log::{debug, error, info};
use vd_api::models::DatasetInfo;
use vd_api::source::load_dashboard;
use vd_api::ApiClient;
use vd_data::{DashboardCharts, FetchGeneration, LOAD_ERROR_MESSAGE};

/// Top-level tabs of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Dashboard,
    AiTools,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::Dashboard, Tab::AiTools];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Dashboard => "📊 Dashboard",
            Tab::AiTools => "🤖 AI Tools",
        }
    }
}

/// Shared state of the dashboard app.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Client for the backend REST API
    pub client: Signal<ApiClient>,
    /// Chart inputs of the last successful refresh (None until loaded)
    pub charts: Signal<Option<DashboardCharts>>,
    /// Dataset index of the last successful refresh
    pub datasets: Signal<Vec<DatasetInfo>>,
    /// Whether a refresh is in flight
    pub loading: Signal<bool>,
    /// Error message if the last refresh failed
    pub error_msg: Signal<Option<String>>,
    pub active_tab: Signal<Tab>,
    /// Token of the newest refresh
    pub generation: Signal<FetchGeneration>,
}

impl AppState {
    pub fn new(backend_url: &str) -> Self {
        Self {
            client: Signal::new(ApiClient::new(backend_url)),
            charts: Signal::new(None),
            datasets: Signal::new(Vec::new()),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            active_tab: Signal::new(Tab::Dashboard),
            generation: Signal::new(FetchGeneration::default()),
        }
    }

    /// Re-fetch every dashboard dataset plus the index.
    ///
    /// Only the newest refresh may update the state; a batch that completes
    /// after a later refresh started is dropped.
    pub fn refresh(mut self) {
        let token = self.generation.write().begin();
        self.loading.set(true);
        self.error_msg.set(None);
        let client = self.client.peek().clone();
        info!("Refreshing dashboard data (request {})", token);

        spawn(async move {
            let result = load_dashboard(&client).await;
            if !self.generation.peek().is_current(token) {
                debug!("Dropping superseded dashboard refresh {}", token);
                return;
            }
            match result {
                Ok(snapshot) => {
                    self.charts.set(Some(DashboardCharts::from_snapshot(&snapshot)));
                    self.datasets.set(snapshot.index);
                    self.error_msg.set(None);
                }
                Err(e) => {
                    error!("Error fetching data: {}", e);
                    self.error_msg.set(Some(LOAD_ERROR_MESSAGE.to_string()));
                }
            }
            self.loading.set(false);
        });
    }

    pub fn backend_url(&self) -> String {
        self.client.read().backend_url().to_string()
    }
}
