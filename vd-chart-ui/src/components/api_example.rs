//! Example `curl` command shown under a form.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ApiExampleProps {
    pub command: String,
}

#[component]
pub fn ApiExample(props: ApiExampleProps) -> Element {
    rsx! {
        div {
            style: "margin-top: 16px; padding: 12px; background: #F3F4F6; border-radius: 4px;",
            h4 { style: "margin: 0 0 8px 0; font-size: 0.875rem;", "API Example:" }
            pre {
                style: "margin: 0; font-size: 0.75rem; white-space: pre-wrap; overflow-x: auto;",
                code { "{props.command}" }
            }
        }
    }
}
