//! Live SVG rendering of a chart scene with hover tooltips.

use dioxus::prelude::*;
use vd_chart::scene::{Mark, Shape, Style};
use vd_chart::{HoverState, Scene};
use vd_utils::numbers::svg_number;

#[derive(Props, Clone, PartialEq)]
pub struct SceneViewProps {
    pub scene: Scene,
    /// DOM id of the `<svg>` element
    #[props(default)]
    pub id: Option<String>,
    /// Pressing a keyed mark (used by the network view for dragging)
    #[props(default)]
    pub on_press: Option<EventHandler<(String, f64, f64)>>,
}

/// Renders a [`Scene`] and owns the chart's tooltip.
///
/// A new scene drops the tooltip unless its mark is still there with the
/// same text, so a layout that only moves marks keeps it open.
#[component]
pub fn SceneView(props: SceneViewProps) -> Element {
    let mut hover = use_signal(HoverState::default);
    let scene = props.scene.clone();
    use_effect(use_reactive!(|scene| {
        if !hover.peek().fits(&scene) {
            hover.write().sync(&scene);
        }
    }));

    let width = svg_number(scene.size.width);
    let height = svg_number(scene.size.height);
    let tooltip = hover.read().tooltip().cloned();

    rsx! {
        svg {
            id: props.id.clone(),
            width: "{width}",
            height: "{height}",
            view_box: "0 0 {width} {height}",
            "font-family": "sans-serif",
            style: "max-width: 100%; height: auto;",
            if !scene.gradients.is_empty() {
                defs {
                    for gradient in scene.gradients.iter() {
                        linearGradient {
                            key: "{gradient.id}",
                            id: "{gradient.id}",
                            x1: "0%",
                            y1: "0%",
                            x2: "100%",
                            y2: "0%",
                            for stop in gradient.stops.iter() {
                                stop {
                                    "offset": "{svg_number(stop.offset * 100.0)}%",
                                    "stop-color": "{stop.color}",
                                }
                            }
                        }
                    }
                }
            }
            for (i, mark) in scene.marks.iter().enumerate() {
                MarkView {
                    key: "{i}",
                    mark: mark.clone(),
                    hover,
                    on_press: props.on_press,
                }
            }
        }
        if let Some(tooltip) = tooltip {
            div {
                style: "position: fixed; left: {tooltip.position().0}px; top: {tooltip.position().1}px; background: rgba(0, 0, 0, 0.8); color: white; padding: 8px; border-radius: 4px; font-size: 12px; pointer-events: none; z-index: 1000;",
                for line in tooltip.lines.iter() {
                    div { "{line}" }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct MarkViewProps {
    mark: Mark,
    hover: Signal<HoverState>,
    #[props(!optional)]
    on_press: Option<EventHandler<(String, f64, f64)>>,
}

struct Attrs {
    fill: Option<String>,
    stroke: Option<String>,
    stroke_width: Option<String>,
    stroke_opacity: Option<String>,
    opacity: Option<String>,
    font_size: Option<String>,
    cursor: Option<&'static str>,
    pointer_events: Option<&'static str>,
}

impl Attrs {
    fn of(style: &Style) -> Self {
        Attrs {
            fill: style.fill.clone(),
            stroke: style.stroke.clone(),
            stroke_width: style.stroke_width.map(svg_number),
            stroke_opacity: style.stroke_opacity.map(svg_number),
            opacity: style.opacity.map(svg_number),
            font_size: style.font_size.map(|s| format!("{}px", svg_number(s))),
            cursor: (style.pointer && !style.passive).then_some("pointer"),
            pointer_events: style.passive.then_some("none"),
        }
    }
}

#[component]
fn MarkView(props: MarkViewProps) -> Element {
    let mut hover = props.hover;
    let key = props.mark.key().map(str::to_string);
    let active = key.is_some() && hover.read().active_key() == key.as_deref();
    let mark = if active {
        props.mark.emphasized()
    } else {
        props.mark.clone()
    };
    let a = Attrs::of(&mark.style);
    let class = mark.class;

    let lines = mark.hover.as_ref().map(|h| h.tooltip.clone());
    let enter_key = key.clone();
    let on_enter = move |evt: Event<MouseData>| {
        if let (Some(key), Some(lines)) = (&enter_key, &lines) {
            let p = evt.client_coordinates();
            hover.write().enter(key, lines.clone(), (p.x, p.y));
        }
    };
    let move_key = key.clone();
    let on_move = move |evt: Event<MouseData>| {
        if move_key.is_some() {
            let p = evt.client_coordinates();
            hover.write().move_to((p.x, p.y));
        }
    };
    let leave_key = key.clone();
    let on_leave = move |_: Event<MouseData>| {
        if let Some(key) = &leave_key {
            hover.write().leave(key);
        }
    };
    let press_key = key.clone();
    let on_press = props.on_press;
    let on_down = move |evt: Event<MouseData>| {
        if let (Some(key), Some(handler)) = (&press_key, &on_press) {
            evt.prevent_default();
            let p = evt.client_coordinates();
            handler.call((key.clone(), p.x, p.y));
        }
    };

    let n = svg_number;
    match mark.shape {
        Shape::Rect {
            x,
            y,
            width,
            height,
        } => rsx! {
            rect {
                class,
                x: "{n(x)}",
                y: "{n(y)}",
                width: "{n(width)}",
                height: "{n(height)}",
                "fill": a.fill,
                "stroke": a.stroke,
                "stroke-width": a.stroke_width,
                "stroke-opacity": a.stroke_opacity,
                "opacity": a.opacity,
                "cursor": a.cursor,
                "pointer-events": a.pointer_events,
                onmouseenter: on_enter,
                onmousemove: on_move,
                onmouseleave: on_leave,
                onmousedown: on_down,
            }
        },
        Shape::Circle { cx, cy, r } => rsx! {
            circle {
                class,
                cx: "{n(cx)}",
                cy: "{n(cy)}",
                r: "{n(r)}",
                "fill": a.fill,
                "stroke": a.stroke,
                "stroke-width": a.stroke_width,
                "stroke-opacity": a.stroke_opacity,
                "opacity": a.opacity,
                "cursor": a.cursor,
                "pointer-events": a.pointer_events,
                onmouseenter: on_enter,
                onmousemove: on_move,
                onmouseleave: on_leave,
                onmousedown: on_down,
            }
        },
        Shape::Line { x1, y1, x2, y2 } => rsx! {
            line {
                class,
                x1: "{n(x1)}",
                y1: "{n(y1)}",
                x2: "{n(x2)}",
                y2: "{n(y2)}",
                "fill": a.fill,
                "stroke": a.stroke,
                "stroke-width": a.stroke_width,
                "stroke-opacity": a.stroke_opacity,
                "opacity": a.opacity,
                "pointer-events": a.pointer_events,
            }
        },
        Shape::Path { d } => rsx! {
            path {
                class,
                d: "{d}",
                "fill": a.fill,
                "stroke": a.stroke,
                "stroke-width": a.stroke_width,
                "stroke-opacity": a.stroke_opacity,
                "opacity": a.opacity,
                "cursor": a.cursor,
                "pointer-events": a.pointer_events,
                onmouseenter: on_enter,
                onmousemove: on_move,
                onmouseleave: on_leave,
                onmousedown: on_down,
            }
        },
        Shape::Polyline { points } => {
            let points = points
                .iter()
                .map(|(x, y)| format!("{},{}", n(*x), n(*y)))
                .collect::<Vec<_>>()
                .join(" ");
            rsx! {
                polyline {
                    class,
                    points: "{points}",
                    "fill": a.fill,
                    "stroke": a.stroke,
                    "stroke-width": a.stroke_width,
                    "opacity": a.opacity,
                    "pointer-events": a.pointer_events,
                }
            }
        }
        Shape::Text {
            x,
            y,
            content,
            anchor,
            dy,
            rotate,
        } => {
            let dy = (dy != 0.0).then(|| format!("{}em", n(dy)));
            let transform =
                (rotate != 0.0).then(|| format!("rotate({},{},{})", n(rotate), n(x), n(y)));
            rsx! {
                text {
                    class,
                    x: "{n(x)}",
                    y: "{n(y)}",
                    "dy": dy,
                    "transform": transform,
                    "text-anchor": anchor.as_str(),
                    "fill": a.fill,
                    "opacity": a.opacity,
                    "font-size": a.font_size,
                    "pointer-events": a.pointer_events,
                    "{content}"
                }
            }
        }
    }
}
