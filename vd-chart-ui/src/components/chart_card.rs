//! Titled card around one chart.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartCardProps {
    pub title: String,
    pub children: Element,
}

#[component]
pub fn ChartCard(props: ChartCardProps) -> Element {
    rsx! {
        div {
            style: "background: white; border-radius: 8px; box-shadow: 0 1px 3px rgba(0, 0, 0, 0.1); padding: 24px;",
            h2 {
                style: "font-size: 1.25rem; font-weight: 600; margin: 0 0 16px 0; color: #1F2937;",
                "{props.title}"
            }
            {props.children}
        }
    }
}
