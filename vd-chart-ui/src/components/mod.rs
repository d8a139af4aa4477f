//! Reusable Dioxus RSX components of the visualization dashboard.

mod api_example;
mod chart_card;
mod chart_generator;
mod csv_uploader;
mod dataset_creator;
mod error_display;
mod loading_spinner;
mod network_view;
mod result_panel;
mod scene_view;
mod server_status;
mod tab_bar;

pub use api_example::ApiExample;
pub use chart_card::ChartCard;
pub use chart_generator::ChartGenerator;
pub use csv_uploader::CsvUploader;
pub use dataset_creator::DatasetCreator;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use network_view::NetworkView;
pub use result_panel::ResultPanel;
pub use scene_view::SceneView;
pub use server_status::ServerStatus;
pub use tab_bar::TabBar;
