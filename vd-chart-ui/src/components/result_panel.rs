//! Result of a form submission.

use crate::components::SceneView;
use dioxus::prelude::*;
use vd_chart::charts;
use vd_data::ToolOutcome;

#[derive(Props, Clone, PartialEq)]
pub struct ResultPanelProps {
    pub outcome: ToolOutcome,
}

#[component]
pub fn ResultPanel(props: ResultPanelProps) -> Element {
    let outcome = &props.outcome;
    let (background, border, color) = if outcome.success {
        ("#F0FDF4", "#BBF7D0", "#166534")
    } else {
        ("#FEF2F2", "#FECACA", "#991B1B")
    };
    let preview = outcome
        .preview
        .as_ref()
        .map(|(input, size)| charts::render(input, *size))
        .filter(|scene| !scene.is_empty());

    rsx! {
        div {
            style: "margin-top: 16px; padding: 16px; border-radius: 4px; background: {background}; border: 1px solid {border}; color: {color};",
            h3 { style: "margin: 0 0 8px 0; font-weight: 600;", "{outcome.heading()}" }
            p { style: "margin: 0;", "{outcome.message}" }
            for (label, value) in outcome.details.iter() {
                p {
                    key: "{label}",
                    style: "margin: 4px 0 0 0; font-size: 0.875rem;",
                    strong { "{label}: " }
                    code { "{value}" }
                }
            }
            if let Some(json) = outcome.json.clone() {
                pre {
                    style: "margin-top: 8px; padding: 8px; background: #F3F4F6; color: #1F2937; border-radius: 4px; font-size: 0.75rem; max-height: 240px; overflow: auto;",
                    "{json}"
                }
            }
            if let Some(scene) = preview {
                div {
                    style: "margin-top: 12px; background: white; padding: 8px; border-radius: 4px;",
                    SceneView { scene }
                }
            }
        }
    }
}
