//! Backend status panel of the AI tools tab.

use crate::state::AppState;
use dioxus::prelude::*;
use vd_api::models::ChartType;

#[component]
pub fn ServerStatus() -> Element {
    let state = use_context::<AppState>();
    let dataset_count = state.datasets.read().len();
    let chart_types = ChartType::ALL.len();

    let tiles = [
        (dataset_count.to_string(), "Datasets", "#16A34A"),
        (chart_types.to_string(), "Chart Types", "#2563EB"),
        ("✓".to_string(), "AI Ready", "#9333EA"),
        ("🔗".to_string(), "API Active", "#EA580C"),
    ];

    rsx! {
        div {
            style: "background: white; border-radius: 8px; box-shadow: 0 1px 3px rgba(0, 0, 0, 0.1); padding: 24px;",
            h2 {
                style: "font-size: 1.25rem; font-weight: 600; margin: 0 0 16px 0;",
                "🚀 Server Status"
            }
            div {
                style: "display: grid; grid-template-columns: repeat(4, 1fr); gap: 16px;",
                for (value, caption, color) in tiles {
                    div {
                        key: "{caption}",
                        style: "text-align: center; padding: 16px; background: #F9FAFB; border-radius: 8px;",
                        div { style: "font-size: 1.5rem; font-weight: 700; color: {color};", "{value}" }
                        div { style: "font-size: 0.875rem; color: #6B7280;", "{caption}" }
                    }
                }
            }
        }
    }
}
