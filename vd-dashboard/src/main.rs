//! Visualization dashboard
//!
//! Single-page app over the dataset REST backend: a dashboard tab with six
//! SVG charts and an AI tools tab with the dataset creator, CSV uploader,
//! chart generator and a force-directed network demo.
//!
//! Data flow:
//! 1. On mount: fetch all dashboard datasets plus the dataset index in one
//!    batch (`AppState::refresh`).
//! 2. Any failure replaces the dashboard with an error view and a retry button.
//! 3. Forms trigger the same refresh after a successful create or upload.

use dioxus::prelude::*;
use vd_api::DEFAULT_BACKEND_URL;
use vd_chart::charts::{area, bar, line, pie, scatter};
use vd_chart_ui::components::{
    ChartCard, ChartGenerator, CsvUploader, DatasetCreator, ErrorDisplay, LoadingSpinner,
    NetworkView, SceneView, ServerStatus, TabBar,
};
use vd_chart_ui::state::{AppState, Tab};
use vd_data::sample::demo_graph;
use vd_data::DashboardCharts;

/// Backend base URL, overridable at build time.
const BACKEND_URL: &str = match option_env!("VD_BACKEND_URL") {
    Some(url) => url,
    None => DEFAULT_BACKEND_URL,
};

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("dashboard-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let state = use_context_provider(|| AppState::new(BACKEND_URL));

    use_effect(move || {
        log::info!("Using backend {}", BACKEND_URL);
        state.refresh();
    });

    let loaded = state.charts.read().is_some();
    let error = (state.error_msg)();

    if let Some(message) = error {
        return rsx! {
            div {
                style: "min-height: 100vh; display: flex; align-items: center; justify-content: center; background: #FEF2F2; font-family: sans-serif;",
                div {
                    style: "text-align: center; background: white; padding: 32px; border-radius: 8px; box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);",
                    div { style: "font-size: 3rem;", "⚠️" }
                    h2 { "Error Loading Data" }
                    ErrorDisplay {
                        message,
                        on_retry: move |_| state.refresh(),
                    }
                }
            }
        };
    }

    if !loaded {
        return rsx! {
            div {
                style: "min-height: 100vh; display: flex; align-items: center; justify-content: center; background: #EEF2FF; font-family: sans-serif;",
                LoadingSpinner { message: "Loading AI Visualization Tool Server..." }
            }
        };
    }

    let tab = (state.active_tab)();

    rsx! {
        div {
            style: "min-height: 100vh; background: #EEF2FF; font-family: sans-serif;",
            header {
                style: "background: white; box-shadow: 0 1px 3px rgba(0, 0, 0, 0.1); padding: 24px; text-align: center;",
                h1 { style: "font-size: 2.25rem; margin: 0 0 8px 0; color: #111827;", "🤖 AI Visualization Tool Server" }
                p {
                    style: "color: #4B5563; margin: 0 0 16px 0;",
                    "Self-hosted visualization server for AI agents and data analysis"
                }
                if (state.loading)() {
                    p { style: "color: #6B7280; font-size: 0.875rem;", "Refreshing..." }
                }
            }
            main {
                style: "max-width: 1280px; margin: 0 auto; padding: 32px 16px;",
                TabBar {}
                {match tab {
                    Tab::Dashboard => rsx! { Dashboard {} },
                    Tab::AiTools => rsx! { AiTools {} },
                }}
                Footer {}
            }
        }
    }
}

#[component]
fn Dashboard() -> Element {
    let state = use_context::<AppState>();
    let Some(charts) = state.charts.read().clone() else {
        return rsx! {};
    };
    let DashboardCharts {
        sales,
        quarterly,
        products,
        categories,
        users,
        traffic,
    } = charts;

    rsx! {
        div {
            style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(520px, 1fr)); gap: 32px;",
            ChartCard { title: "📊 Monthly Sales Data",
                p { style: "color: #4B5563;", "Bar chart showing monthly sales and expenses" }
                SceneView { scene: bar::render(&sales, bar::DEFAULT_SIZE) }
            }
            ChartCard { title: "📈 Quarterly Trends",
                p { style: "color: #4B5563;", "Line chart tracking quarterly performance" }
                SceneView { scene: line::render(&quarterly, line::DEFAULT_SIZE) }
            }
            ChartCard { title: "🎯 Product Performance",
                p { style: "color: #4B5563;", "Sales vs Units Sold by Product" }
                SceneView { scene: scatter::render(&products, scatter::DEFAULT_SIZE) }
            }
            ChartCard { title: "🥧 Market Categories",
                p { style: "color: #4B5563;", "Distribution of market share by category" }
                SceneView { scene: pie::render(&categories, pie::DEFAULT_SIZE) }
            }
            ChartCard { title: "👥 User Demographics",
                p { style: "color: #4B5563;", "Age vs Income with satisfaction scores" }
                SceneView { scene: scatter::render(&users, scatter::DEFAULT_SIZE) }
            }
            ChartCard { title: "📉 Website Analytics",
                p { style: "color: #4B5563;", "Visitors, page views, and conversions over time" }
                SceneView { scene: area::render(&traffic, area::DEFAULT_SIZE) }
            }
        }
    }
}

#[component]
fn AiTools() -> Element {
    let graph = use_hook(demo_graph);

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 32px;",
            ServerStatus {}
            div {
                style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(480px, 1fr)); gap: 32px;",
                DatasetCreator {}
                CsvUploader {}
            }
            ChartGenerator {}
            ChartCard { title: "🕸️ Network Graph",
                p { style: "color: #4B5563;", "Force-directed layout; drag a node to pin it" }
                NetworkView { graph }
            }
        }
    }
}

#[component]
fn Footer() -> Element {
    let state = use_context::<AppState>();
    let url = state.backend_url();

    rsx! {
        footer {
            style: "margin-top: 64px; text-align: center; background: white; border-radius: 8px; box-shadow: 0 1px 3px rgba(0, 0, 0, 0.1); padding: 24px;",
            h3 { style: "margin: 0 0 8px 0;", "🛠️ Self-Hosted AI Visualization Tool Server" }
            p {
                style: "color: #4B5563;",
                "Complete visualization toolkit with SVG charts, AI-friendly APIs, and CSV data storage"
            }
            div {
                style: "font-size: 0.75rem; color: #6B7280;",
                "Server URL: "
                code { style: "background: #F3F4F6; padding: 2px 8px; border-radius: 4px;", "{url}" }
            }
        }
    }
}
