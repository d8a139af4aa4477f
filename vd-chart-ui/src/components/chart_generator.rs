//! Form for generating a chart configuration from a stored dataset.

use crate::components::{ApiExample, ResultPanel};
use crate::state::AppState;
use dioxus::prelude::*;
use log::info;
use vd_api::models::ChartType;
use vd_data::forms::{dataset_options, ChartForm};
use vd_data::{curl, FormKind, ToolOutcome};

const INPUT_STYLE: &str =
    "width: 100%; padding: 6px 8px; border: 1px solid #D1D5DB; border-radius: 4px; box-sizing: border-box;";

#[component]
pub fn ChartGenerator() -> Element {
    let state = use_context::<AppState>();
    let mut form = use_signal(ChartForm::default);
    let mut generating = use_signal(|| false);
    let mut outcome = use_signal(|| None::<ToolOutcome>);
    let mut notice = use_signal(|| None::<String>);

    let on_generate = move |_| {
        let request = match form.read().request() {
            Ok(request) => request,
            Err(e) => {
                notice.set(Some(e.to_string()));
                return;
            }
        };
        notice.set(None);
        outcome.set(None);
        generating.set(true);
        let client = state.client.peek().clone();
        spawn(async move {
            info!("Generating {} chart for {}", request.chart_type, request.dataset_name);
            let result = ToolOutcome::from_result(
                FormKind::GenerateChart,
                client.generate_chart(&request).await,
            );
            outcome.set(Some(result));
            generating.set(false);
        });
    };

    let current = form.read().clone();
    let options = dataset_options(&state.datasets.read());
    let busy = generating();
    let example = curl::generate_chart(&state.backend_url(), &current.to_request());

    rsx! {
        div {
            style: "background: white; border-radius: 8px; box-shadow: 0 1px 3px rgba(0, 0, 0, 0.1); padding: 24px;",
            h2 { style: "font-size: 1.25rem; font-weight: 600; margin: 0 0 16px 0;", "📊 AI Chart Generator" }

            h3 { style: "font-size: 1rem; margin: 0 0 8px 0;", "Chart Type" }
            div {
                style: "display: grid; grid-template-columns: repeat(3, 1fr); gap: 8px; margin-bottom: 16px;",
                for kind in ChartType::GENERATOR {
                    label {
                        key: "{kind}",
                        style: "display: flex; gap: 8px; padding: 8px; border: 1px solid #E5E7EB; border-radius: 4px; cursor: pointer;",
                        input {
                            r#type: "radio",
                            name: "chart-type",
                            value: "{kind}",
                            checked: kind == current.chart_type,
                            onchange: move |_| form.write().chart_type = kind,
                        }
                        div {
                            div { style: "font-weight: 500;", "{kind.label()}" }
                            div { style: "font-size: 0.75rem; color: #6B7280;", "{kind.description()}" }
                        }
                    }
                }
            }

            label {
                "Dataset"
                select {
                    style: INPUT_STYLE,
                    value: "{current.dataset_name}",
                    onchange: move |evt: Event<FormData>| form.write().dataset_name = evt.value(),
                    option { value: "", selected: current.dataset_name.is_empty(), "Select a dataset" }
                    for (value, text) in options {
                        option {
                            key: "{value}",
                            selected: value == current.dataset_name,
                            value: "{value}",
                            "{text}"
                        }
                    }
                }
            }

            div {
                style: "display: flex; gap: 8px; align-items: flex-end; margin-top: 12px;",
                label {
                    style: "flex: 1;",
                    "Chart Title"
                    input {
                        style: INPUT_STYLE,
                        r#type: "text",
                        placeholder: "Enter chart title",
                        value: "{current.title}",
                        oninput: move |evt: Event<FormData>| form.write().title = evt.value(),
                    }
                }
                button {
                    disabled: !current.can_generate(),
                    onclick: move |_| form.write().apply_auto_title(),
                    "Auto"
                }
            }

            div {
                style: "display: grid; grid-template-columns: 1fr 1fr; gap: 12px; margin-top: 12px;",
                label {
                    "Width"
                    input {
                        style: INPUT_STYLE,
                        r#type: "number",
                        min: "1",
                        value: "{current.width}",
                        oninput: move |evt: Event<FormData>| {
                            if let Some(width) = ChartForm::parse_dimension(&evt.value()) {
                                form.write().width = width;
                            }
                        },
                    }
                }
                label {
                    "Height"
                    input {
                        style: INPUT_STYLE,
                        r#type: "number",
                        min: "1",
                        value: "{current.height}",
                        oninput: move |evt: Event<FormData>| {
                            if let Some(height) = ChartForm::parse_dimension(&evt.value()) {
                                form.write().height = height;
                            }
                        },
                    }
                }
            }

            if let Some(message) = notice() {
                p { style: "color: #B91C1C; font-size: 0.875rem;", "{message}" }
            }

            button {
                style: "margin-top: 16px; padding: 8px 24px; background: #3B82F6; color: white; border: none; border-radius: 8px; cursor: pointer;",
                disabled: busy || !current.can_generate(),
                onclick: on_generate,
                if busy { "Generating..." } else { "Generate Chart" }
            }

            if let Some(result) = outcome() {
                ResultPanel { outcome: result }
            }

            ApiExample { command: example }
        }
    }
}
