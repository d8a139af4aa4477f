//! Form for uploading a CSV file as a new dataset.

use crate::components::{ApiExample, ResultPanel};
use crate::platform;
use crate::state::AppState;
use dioxus::prelude::*;
use log::info;
use vd_data::forms::UploadForm;
use vd_data::{curl, FormKind, ToolOutcome};

const FILE_INPUT_ID: &str = "csv-upload-input";

#[component]
pub fn CsvUploader() -> Element {
    let state = use_context::<AppState>();
    let mut form = use_signal(UploadForm::default);
    let mut uploading = use_signal(|| false);
    let mut outcome = use_signal(|| None::<ToolOutcome>);
    let mut notice = use_signal(|| None::<String>);

    let on_file = move |_: Event<FormData>| {
        let names = platform::selected_file_names(FILE_INPUT_ID);
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let file_name = match form.read().accept(&refs) {
            Ok(name) => name.to_string(),
            Err(e) => {
                notice.set(Some(e.to_string()));
                platform::clear_file_input(FILE_INPUT_ID);
                return;
            }
        };
        notice.set(None);
        outcome.set(None);
        uploading.set(true);
        let dataset_name = form.read().dataset_name.clone();
        let client = state.client.peek().clone();
        spawn(async move {
            let result = match platform::read_selected_file(FILE_INPUT_ID, &file_name).await {
                Ok(contents) => {
                    info!("Uploading {} ({} bytes) as {}", file_name, contents.len(), dataset_name);
                    ToolOutcome::from_result(
                        FormKind::Upload,
                        client.upload_csv(&dataset_name, &file_name, contents).await,
                    )
                }
                Err(e) => {
                    notice.set(Some(e));
                    uploading.set(false);
                    return;
                }
            };
            if result.success {
                form.write().reset();
                state.refresh();
            }
            platform::clear_file_input(FILE_INPUT_ID);
            outcome.set(Some(result));
            uploading.set(false);
        });
    };

    let dataset_name = form.read().dataset_name.clone();
    let busy = uploading();
    let example = curl::upload_csv(&state.backend_url());

    rsx! {
        div {
            style: "background: white; border-radius: 8px; box-shadow: 0 1px 3px rgba(0, 0, 0, 0.1); padding: 24px;",
            h2 { style: "font-size: 1.25rem; font-weight: 600; margin: 0 0 16px 0;", "📁 CSV File Upload" }

            label {
                "Dataset Name"
                input {
                    style: "width: 100%; padding: 6px 8px; border: 1px solid #D1D5DB; border-radius: 4px; box-sizing: border-box; margin-bottom: 16px;",
                    r#type: "text",
                    placeholder: "Enter dataset name",
                    value: "{dataset_name}",
                    oninput: move |evt: Event<FormData>| form.write().dataset_name = evt.value(),
                }
            }

            div {
                style: "border: 2px dashed #D1D5DB; border-radius: 8px; padding: 32px; text-align: center; background: #F9FAFB;",
                if busy {
                    p { "Uploading..." }
                } else {
                    p { style: "margin: 0 0 12px 0;", "Select a CSV file to upload" }
                    input {
                        id: FILE_INPUT_ID,
                        r#type: "file",
                        accept: ".csv,text/csv",
                        onchange: on_file,
                    }
                }
            }

            if let Some(message) = notice() {
                p { style: "color: #B91C1C; font-size: 0.875rem;", "{message}" }
            }

            if let Some(result) = outcome() {
                ResultPanel { outcome: result }
            }

            ApiExample { command: example }
        }
    }
}
