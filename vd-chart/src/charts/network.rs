use super::TEXT_COLOR;
use crate::color::{OrdinalScale, CATEGORY10};
use crate::force::{ForceConfig, Simulation};
use crate::frame::Size;
use crate::input::Graph;
use crate::scene::{Anchor, Emphasis, Mark, Scene, Shape, Style};
use vd_utils::numbers::trimmed;

pub const DEFAULT_SIZE: Size = Size::new(600.0, 400.0);
const DEFAULT_NODE_RADIUS: f64 = 8.0;
const LINK_COLOR: &str = "#999";

/// Hover key of node `i`.
pub fn node_key(i: usize) -> String {
    format!("node:{}", i)
}

/// Inverse of [`node_key`].
pub fn node_index(key: &str) -> Option<usize> {
    key.strip_prefix("node:")?.parse().ok()
}

/// A graph paired with the simulation that lays it out.
pub struct NetworkLayout {
    graph: Graph,
    size: Size,
    simulation: Simulation,
}

impl NetworkLayout {
    pub fn new(graph: Graph, size: Size) -> Self {
        let links: Vec<(usize, usize)> = graph
            .resolved_links()
            .into_iter()
            .map(|(s, t, _)| (s, t))
            .collect();
        let simulation = Simulation::new(
            graph.nodes.len(),
            &links,
            ForceConfig::centered(size.width, size.height),
        );
        NetworkLayout {
            graph,
            size,
            simulation,
        }
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn simulation(&self) -> &Simulation {
        &self.simulation
    }

    pub fn simulation_mut(&mut self) -> &mut Simulation {
        &mut self.simulation
    }

    /// Advance one tick; returns whether the layout is still moving.
    pub fn step(&mut self) -> bool {
        self.simulation.step()
    }

    /// Run until the layout cools.
    pub fn settle(&mut self) {
        while self.simulation.step() {}
    }

    pub fn scene(&self) -> Scene {
        render(&self.graph, &self.simulation.positions(), self.size)
    }
}

/// Links, then nodes, then labels, at the given node positions.
///
/// Nodes without a position are left out along with their links and labels.
pub fn render(graph: &Graph, positions: &[(f64, f64)], size: Size) -> Scene {
    let mut scene = Scene::new(size);
    if graph.nodes.is_empty() {
        return scene;
    }
    let mut color = OrdinalScale::new(&CATEGORY10);

    for (s, t, link) in graph.resolved_links() {
        let (Some(&(x1, y1)), Some(&(x2, y2))) = (positions.get(s), positions.get(t)) else {
            continue;
        };
        scene.push(
            Mark::new(
                Shape::Line { x1, y1, x2, y2 },
                Style::stroke(LINK_COLOR, link.value.max(0.0).sqrt() * 2.0)
                    .with_stroke_opacity(0.6),
            )
            .class("link"),
        );
    }

    let placed: Vec<(usize, (f64, f64))> = graph
        .nodes
        .iter()
        .enumerate()
        .filter_map(|(i, _)| positions.get(i).map(|p| (i, *p)))
        .collect();

    for &(i, (cx, cy)) in &placed {
        let node = &graph.nodes[i];
        let r = node.size.unwrap_or(DEFAULT_NODE_RADIUS);
        scene.push(
            Mark::new(
                Shape::Circle { cx, cy, r },
                Style::fill(&color.color(&node.group.to_string()))
                    .with_stroke("#fff", 2.0)
                    .with_pointer(),
            )
            .class("node")
            .hover(
                node_key(i),
                vec![
                    format!("Node: {}", node.id),
                    format!("Group: {}", node.group),
                    format!("Size: {}", trimmed(r, 3)),
                ],
                Emphasis::Grow {
                    r: r + 3.0,
                    stroke_width: Some(3.0),
                },
            ),
        );
    }

    for &(i, (x, y)) in &placed {
        scene.push(
            Mark::new(
                Shape::Text {
                    x,
                    y: y + 5.0,
                    content: graph.nodes[i].id.clone(),
                    anchor: Anchor::Middle,
                    dy: 0.0,
                    rotate: 0.0,
                },
                Style::label(12.0, TEXT_COLOR).passive(),
            )
            .class("node-label"),
        );
    }
    scene
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{GraphLink, GraphNode};
    use crate::svg::to_svg;
    use crate::tooltip::HoverState;

    fn demo() -> Graph {
        let node = |id: &str, group| GraphNode {
            id: id.to_string(),
            group,
            size: None,
        };
        let link = |s: &str, t: &str, value| GraphLink {
            source: s.to_string(),
            target: t.to_string(),
            value,
        };
        Graph {
            nodes: vec![node("A", 1), node("B", 1), node("C", 2)],
            links: vec![link("A", "B", 1.0), link("B", "C", 2.0)],
        }
    }

    #[test]
    fn test_node_key_round_trip() {
        assert_eq!(node_index(&node_key(7)), Some(7));
        assert_eq!(node_index("slice:1"), None);
        assert_eq!(node_index("node:x"), None);
    }

    #[test]
    fn test_empty_graph_renders_nothing() {
        assert!(render(&Graph::default(), &[], DEFAULT_SIZE).is_empty());
    }

    #[test]
    fn test_marks_in_layers() {
        let positions = [(100.0, 100.0), (200.0, 100.0), (300.0, 200.0)];
        let scene = render(&demo(), &positions, DEFAULT_SIZE);
        let classes: Vec<&str> = scene.marks.iter().filter_map(|m| m.class).collect();
        assert_eq!(
            classes,
            vec!["link", "link", "node", "node", "node", "node-label", "node-label", "node-label"]
        );
        let widths: Vec<Option<f64>> = scene.marks_of("link").map(|m| m.style.stroke_width).collect();
        assert_eq!(widths, vec![Some(2.0), Some(2.0 * 2f64.sqrt())]);
        let label = scene.marks_of("node-label").next().unwrap();
        assert!(label.style.passive);
        assert!(matches!(label.shape, Shape::Text { y, .. } if y == 105.0));
    }

    #[test]
    fn test_group_colors_and_tooltip() {
        let positions = [(0.0, 0.0), (10.0, 0.0), (20.0, 0.0)];
        let scene = render(&demo(), &positions, DEFAULT_SIZE);
        let fills: Vec<&str> = scene.marks_of("node").filter_map(|m| m.style.fill.as_deref()).collect();
        assert_eq!(fills, vec![CATEGORY10[0], CATEGORY10[0], CATEGORY10[1]]);
        assert_eq!(
            scene.hover("node:2").unwrap().tooltip,
            vec!["Node: C", "Group: 2", "Size: 8"]
        );
        let hovered = scene.marks_of("node").nth(2).unwrap().emphasized();
        assert!(matches!(hovered.shape, Shape::Circle { r, .. } if r == 11.0));
        assert_eq!(hovered.style.stroke_width, Some(3.0));
    }

    #[test]
    fn test_unknown_link_is_dropped() {
        let mut graph = demo();
        graph.links.push(GraphLink {
            source: "A".to_string(),
            target: "Z".to_string(),
            value: 1.0,
        });
        let positions = [(0.0, 0.0), (10.0, 0.0), (20.0, 0.0)];
        assert_eq!(render(&graph, &positions, DEFAULT_SIZE).marks_of("link").count(), 2);
    }

    #[test]
    fn test_layout_settles_inside_canvas() {
        let mut layout = NetworkLayout::new(demo(), DEFAULT_SIZE);
        assert!(layout.simulation().is_running());
        layout.settle();
        assert!(!layout.step());
        let scene = layout.scene();
        for mark in scene.marks_of("node") {
            let Shape::Circle { cx, cy, .. } = mark.shape else {
                panic!("node is not a circle");
            };
            assert!(cx > 0.0 && cx < 600.0 && cy > 0.0 && cy < 400.0);
        }
        assert_eq!(scene, layout.scene());
    }

    #[test]
    fn test_render_is_idempotent() {
        let mut first = NetworkLayout::new(demo(), DEFAULT_SIZE);
        let mut second = NetworkLayout::new(demo(), DEFAULT_SIZE);
        first.settle();
        second.settle();
        assert_eq!(first.scene(), second.scene());
        assert_eq!(to_svg(&first.scene()), to_svg(&second.scene()));
    }

    #[test]
    fn test_tooltip_survives_layout_ticks() {
        let mut layout = NetworkLayout::new(demo(), DEFAULT_SIZE);
        let before = layout.scene();
        let lines = before.hover("node:0").unwrap().tooltip.clone();
        let mut hover = HoverState::default();
        hover.enter("node:0", lines, (5.0, 5.0));
        for _ in 0..10 {
            layout.step();
        }
        let after = layout.scene();
        assert_ne!(before, after);
        hover.sync(&after);
        assert_eq!(hover.active_key(), Some("node:0"));

        let mut other = demo();
        other.nodes[0].id = "Renamed".to_string();
        hover.sync(&render(&other, &layout.simulation().positions(), DEFAULT_SIZE));
        assert!(hover.tooltip().is_none());
    }
}
