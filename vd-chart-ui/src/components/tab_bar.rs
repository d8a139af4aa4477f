//! Tab navigation between the dashboard and the AI tools.

use crate::state::{AppState, Tab};
use dioxus::prelude::*;

#[component]
pub fn TabBar() -> Element {
    let mut state = use_context::<AppState>();
    let active = (state.active_tab)();

    rsx! {
        nav {
            style: "display: flex; gap: 32px; border-bottom: 1px solid #E5E7EB; margin-bottom: 24px;",
            for tab in Tab::ALL {
                button {
                    key: "{tab.label()}",
                    style: if tab == active {
                        "padding: 8px 4px; border: none; background: none; border-bottom: 2px solid #3B82F6; color: #2563EB; font-weight: 500; cursor: pointer;"
                    } else {
                        "padding: 8px 4px; border: none; background: none; border-bottom: 2px solid transparent; color: #6B7280; font-weight: 500; cursor: pointer;"
                    },
                    onclick: move |_| state.active_tab.set(tab),
                    "{tab.label()}"
                }
            }
        }
    }
}
