//! Chart rendering for the visualization dashboard.
//!
//! Every chart is a pure function from typed input and a canvas size to a
//! [`Scene`]: a flat list of marks in absolute SVG coordinates. The same
//! scene is drawn by the Dioxus components and serialized by [`svg::to_svg`]
//! for the CLI.
//!
//! - `scale`, `axis`, `shape`, `color`: the building blocks
//! - `charts`: bar, line, scatter, pie, area and network renderers
//! - `input`: adapters from backend records to chart inputs
//! - `force`: the node-link layout, driven by `force_graph`
//! - `tooltip`: hover state for a single chart

pub mod axis;
pub mod charts;
pub mod color;
pub mod force;
pub mod frame;
pub mod input;
pub mod scale;
pub mod scene;
pub mod shape;
pub mod svg;
pub mod tooltip;

pub use charts::render;
pub use frame::Size;
pub use input::ChartInput;
pub use scene::{Mark, Scene};
pub use svg::to_svg;
pub use tooltip::HoverState;
