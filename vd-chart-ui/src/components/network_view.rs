//! Animated force-directed network graph with draggable nodes.

use crate::components::SceneView;
use crate::platform;
use dioxus::core::Task;
use dioxus::prelude::*;
use log::debug;
use std::cell::Cell;
use std::rc::Rc;
use vd_chart::charts::network::{node_index, NetworkLayout, DEFAULT_SIZE};
use vd_chart::input::Graph;
use vd_chart::Size;

const SVG_ID: &str = "network-graph";
/// Delay between simulation ticks.
const FRAME_MS: i32 = 16;

#[derive(Props, Clone, PartialEq)]
pub struct NetworkViewProps {
    pub graph: Graph,
    #[props(default = DEFAULT_SIZE)]
    pub size: Size,
}

/// Tick the layout until it cools, redrawing after every tick.
fn animate(mut layout: Signal<NetworkLayout>) -> Task {
    spawn(async move {
        while layout.write().step() {
            platform::sleep_ms(FRAME_MS).await;
        }
        debug!("Network layout settled");
    })
}

/// At most one animation runs per view.
fn restart(running: &Cell<Option<Task>>, layout: Signal<NetworkLayout>) {
    if let Some(task) = running.take() {
        task.cancel();
    }
    running.set(Some(animate(layout)));
}

#[component]
pub fn NetworkView(props: NetworkViewProps) -> Element {
    let graph = props.graph.clone();
    let size = props.size;
    let mut layout = use_signal(|| NetworkLayout::new(graph.clone(), size));
    let running = use_hook(|| Rc::new(Cell::new(None::<Task>)));
    let mut dragging = use_signal(|| None::<usize>);

    let on_graph = running.clone();
    use_effect(use_reactive!(|graph, size| {
        layout.set(NetworkLayout::new(graph, size));
        dragging.set(None);
        restart(&on_graph, layout);
    }));

    let on_drop = running.clone();
    use_drop(move || {
        if let Some(task) = on_drop.take() {
            task.cancel();
        }
    });

    let on_grab = running.clone();
    let on_press = move |(key, _x, _y): (String, f64, f64)| {
        let Some(index) = node_index(&key) else {
            return;
        };
        layout.write().simulation_mut().drag_start(index);
        dragging.set(Some(index));
        restart(&on_grab, layout);
    };

    let on_drag = move |evt: Event<MouseData>| {
        let Some(index) = dragging() else {
            return;
        };
        let p = evt.client_coordinates();
        let (left, top) = platform::element_origin(SVG_ID).unwrap_or((0.0, 0.0));
        layout
            .write()
            .simulation_mut()
            .drag_to(index, p.x - left, p.y - top);
    };

    let mut release = move || {
        if let Some(index) = dragging.take() {
            layout.write().simulation_mut().drag_end(index);
        }
    };

    let scene = layout.read().scene();

    rsx! {
        div {
            style: "display: inline-block;",
            onmousemove: on_drag,
            onmouseup: move |_| release(),
            onmouseleave: move |_| release(),
            SceneView {
                scene,
                id: SVG_ID.to_string(),
                on_press,
            }
        }
    }
}
