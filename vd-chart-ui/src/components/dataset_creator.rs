//! Form for creating a sales dataset from editable rows.

use crate::components::{ApiExample, ResultPanel};
use crate::platform;
use crate::state::AppState;
use dioxus::prelude::*;
use log::info;
use vd_data::forms::{SalesDraft, SalesField};
use vd_data::{curl, FormKind, ToolOutcome};

const INPUT_STYLE: &str =
    "width: 100%; padding: 6px 8px; border: 1px solid #D1D5DB; border-radius: 4px; box-sizing: border-box;";

#[component]
pub fn DatasetCreator() -> Element {
    let state = use_context::<AppState>();
    let mut draft = use_signal(SalesDraft::default);
    let mut submitting = use_signal(|| false);
    let mut outcome = use_signal(|| None::<ToolOutcome>);
    let mut notice = use_signal(|| None::<String>);

    let on_submit = move |_| {
        let request = match draft.read().request() {
            Ok(request) => request,
            Err(e) => {
                notice.set(Some(e.to_string()));
                return;
            }
        };
        notice.set(None);
        submitting.set(true);
        let client = state.client.peek().clone();
        spawn(async move {
            info!("Creating dataset {} with {} rows", request.name, request.data.len());
            let result = ToolOutcome::from_result(
                FormKind::CreateDataset,
                client.create_sales_data(&request).await,
            );
            if result.success {
                draft.write().reset();
                state.refresh();
            }
            outcome.set(Some(result));
            submitting.set(false);
        });
    };

    let rows = draft.read().rows.clone();
    let name = draft.read().name.clone();
    let description = draft.read().description.clone();
    let busy = submitting();
    let example = curl::create_sales(&state.backend_url());

    rsx! {
        div {
            style: "background: white; border-radius: 8px; box-shadow: 0 1px 3px rgba(0, 0, 0, 0.1); padding: 24px;",
            h2 { style: "font-size: 1.25rem; font-weight: 600; margin: 0 0 16px 0;", "🤖 AI Data Creator" }

            div {
                style: "display: grid; grid-template-columns: 1fr 1fr; gap: 12px; margin-bottom: 16px;",
                label {
                    "Dataset Name"
                    input {
                        style: INPUT_STYLE,
                        r#type: "text",
                        placeholder: "e.g. my_sales_data",
                        value: "{name}",
                        oninput: move |evt: Event<FormData>| draft.write().name = evt.value(),
                    }
                }
                label {
                    "Description"
                    input {
                        style: INPUT_STYLE,
                        r#type: "text",
                        placeholder: "Optional description",
                        value: "{description}",
                        oninput: move |evt: Event<FormData>| draft.write().description = evt.value(),
                    }
                }
            }

            div {
                style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 8px;",
                h3 { style: "margin: 0; font-size: 1rem;", "Sales Data" }
                div {
                    style: "display: flex; gap: 8px;",
                    button {
                        onclick: move |_| draft.write().fill_sample(platform::random),
                        "Generate Sample"
                    }
                    button {
                        onclick: move |_| draft.write().add_row(),
                        "Add Row"
                    }
                }
            }

            table {
                style: "width: 100%; border-collapse: collapse; font-size: 0.875rem;",
                thead {
                    tr {
                        th { style: "text-align: left;", "Month" }
                        th { style: "text-align: left;", "Sales" }
                        th { style: "text-align: left;", "Expenses" }
                        th {}
                    }
                }
                tbody {
                    for (i, row) in rows.iter().enumerate() {
                        tr {
                            key: "{i}",
                            td {
                                input {
                                    style: INPUT_STYLE,
                                    r#type: "text",
                                    value: "{row.month}",
                                    oninput: move |evt: Event<FormData>| {
                                        draft.write().update(i, SalesField::Month, &evt.value())
                                    },
                                }
                            }
                            td {
                                input {
                                    style: INPUT_STYLE,
                                    r#type: "number",
                                    value: "{row.sales}",
                                    oninput: move |evt: Event<FormData>| {
                                        draft.write().update(i, SalesField::Sales, &evt.value())
                                    },
                                }
                            }
                            td {
                                input {
                                    style: INPUT_STYLE,
                                    r#type: "number",
                                    value: "{row.expenses}",
                                    oninput: move |evt: Event<FormData>| {
                                        draft.write().update(i, SalesField::Expenses, &evt.value())
                                    },
                                }
                            }
                            td {
                                button {
                                    style: "color: #DC2626; background: none; border: none; cursor: pointer;",
                                    onclick: move |_| draft.write().remove(i),
                                    "✕"
                                }
                            }
                        }
                    }
                }
            }

            if let Some(message) = notice() {
                p { style: "color: #B91C1C; font-size: 0.875rem;", "{message}" }
            }

            button {
                style: "margin-top: 16px; width: 100%; padding: 8px 16px; background: #3B82F6; color: white; border: none; border-radius: 4px; cursor: pointer;",
                disabled: busy,
                onclick: on_submit,
                if busy { "Creating..." } else { "Create Dataset" }
            }

            if let Some(result) = outcome() {
                ResultPanel { outcome: result }
            }

            ApiExample { command: example }
        }
    }
}
