//! Force-directed layout for node-link charts, integrated by `force_graph`.
//!
//! Each tick runs one `ForceGraph::update` (spring attraction along links,
//! charge repulsion between every pair, damped velocities), then pulls the
//! free nodes back to the canvas centre and keeps them on the canvas. A
//! cooling schedule decides when to stop: `alpha` starts at 1 and decays
//! toward `alpha_target`; once it falls below `alpha_min` the layout is
//! settled until something reheats it (for example a drag).

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData, SimulationParameters};
use std::f64::consts::PI;

const INITIAL_RADIUS: f64 = 10.0;
const NODE_MASS: f32 = 10.0;
const DRAG_ALPHA_TARGET: f64 = 0.3;
/// Free nodes stay at least this far inside the canvas.
const EDGE_PADDING: f64 = 10.0;

#[derive(Debug, Clone, PartialEq)]
pub struct ForceConfig {
    pub width: f64,
    pub height: f64,
    /// Seconds of simulated time per tick.
    pub time_step: f32,
    pub alpha_min: f64,
    pub alpha_decay: f64,
}

impl ForceConfig {
    /// Defaults for a canvas of the given size, centred on it.
    pub fn centered(width: f64, height: f64) -> Self {
        let alpha_min = 0.001;
        ForceConfig {
            width,
            height,
            time_step: 0.016,
            alpha_min,
            // reaches alpha_min after 300 ticks
            alpha_decay: 1.0 - alpha_min.powf(1.0 / 300.0),
        }
    }

    pub fn center(&self) -> (f64, f64) {
        (self.width / 2.0, self.height / 2.0)
    }

    /// Charge and spring balance with linked nodes about 80px apart.
    fn parameters() -> SimulationParameters {
        SimulationParameters {
            force_charge: 150.0,
            force_spring: 0.05,
            force_max: 100.0,
            node_speed: 3000.0,
            damping_factor: 0.9,
        }
    }
}

pub struct Simulation {
    config: ForceConfig,
    graph: ForceGraph<usize, ()>,
    /// Graph handle of node `i`.
    handles: Vec<DefaultNodeIdx>,
    alpha: f64,
    alpha_target: f64,
    running: bool,
}

impl Simulation {
    /// `links` are pairs of node indices; out-of-range pairs are ignored.
    ///
    /// Nodes start on a sunflower spiral around the centre so no two share
    /// a position.
    pub fn new(node_count: usize, links: &[(usize, usize)], config: ForceConfig) -> Self {
        let mut graph = ForceGraph::new(ForceConfig::parameters());
        let (cx, cy) = config.center();
        let angle_step = PI * (3.0 - 5f64.sqrt());
        let handles: Vec<DefaultNodeIdx> = (0..node_count)
            .map(|i| {
                let radius = INITIAL_RADIUS * (0.5 + i as f64).sqrt();
                let angle = i as f64 * angle_step;
                graph.add_node(NodeData {
                    x: (cx + radius * angle.cos()) as f32,
                    y: (cy + radius * angle.sin()) as f32,
                    mass: NODE_MASS,
                    is_anchor: false,
                    user_data: i,
                })
            })
            .collect();

        for &(s, t) in links {
            if let (Some(&source), Some(&target)) = (handles.get(s), handles.get(t)) {
                graph.add_edge(source, target, EdgeData::default());
            }
        }

        Simulation {
            config,
            graph,
            handles,
            alpha: 1.0,
            alpha_target: 0.0,
            running: true,
        }
    }

    /// Node positions in input order.
    pub fn positions(&self) -> Vec<(f64, f64)> {
        let mut positions = vec![(0.0, 0.0); self.handles.len()];
        self.graph.visit_nodes(|node| {
            if let Some(p) = positions.get_mut(node.data.user_data) {
                *p = (node.x() as f64, node.y() as f64);
            }
        });
        positions
    }

    pub fn link_count(&self) -> usize {
        let mut count = 0;
        self.graph.visit_edges(|_, _, _| count += 1);
        count
    }

    /// Whether node `index` is held in place.
    pub fn is_pinned(&self, index: usize) -> bool {
        let Some(&handle) = self.handles.get(index) else {
            return false;
        };
        let mut pinned = false;
        self.graph.visit_nodes(|node| {
            if node.index() == handle {
                pinned = node.data.is_anchor;
            }
        });
        pinned
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn alpha_target(&self) -> f64 {
        self.alpha_target
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn restart(&mut self) {
        self.running = true;
    }

    /// Advance one tick; returns whether the simulation is still running.
    pub fn step(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.tick();
        if self.alpha < self.config.alpha_min {
            self.running = false;
        }
        self.running
    }

    /// Cool once, integrate forces once, then re-centre and contain.
    pub fn tick(&mut self) {
        self.alpha += (self.alpha_target - self.alpha) * self.config.alpha_decay;
        if self.handles.is_empty() {
            return;
        }
        self.graph.update(self.config.time_step);
        self.recenter();
    }

    fn recenter(&mut self) {
        let (mut sx, mut sy) = (0.0, 0.0);
        self.graph.visit_nodes(|node| {
            sx += node.x() as f64;
            sy += node.y() as f64;
        });
        let n = self.handles.len() as f64;
        let (cx, cy) = self.config.center();
        let (dx, dy) = (cx - sx / n, cy - sy / n);

        let (w, h) = (self.config.width, self.config.height);
        self.graph.visit_nodes_mut(|node| {
            if node.data.is_anchor {
                return;
            }
            let x = contain(node.data.x as f64 + dx, w);
            let y = contain(node.data.y as f64 + dy, h);
            node.data.x = x as f32;
            node.data.y = y as f32;
        });
    }

    fn place(&mut self, index: usize, at: Option<(f64, f64)>, anchor: bool) {
        let Some(&handle) = self.handles.get(index) else {
            return;
        };
        self.graph.visit_nodes_mut(|node| {
            if node.index() == handle {
                if let Some((x, y)) = at {
                    node.data.x = x as f32;
                    node.data.y = y as f32;
                }
                node.data.is_anchor = anchor;
            }
        });
    }

    /// Pin a node where it is and reheat the layout.
    pub fn drag_start(&mut self, index: usize) {
        self.alpha_target = DRAG_ALPHA_TARGET;
        self.restart();
        self.place(index, None, true);
    }

    pub fn drag_to(&mut self, index: usize, x: f64, y: f64) {
        self.place(index, Some((x, y)), true);
    }

    /// Release a node and let the layout cool again.
    pub fn drag_end(&mut self, index: usize) {
        self.alpha_target = 0.0;
        self.place(index, None, false);
    }
}

/// Clamp a coordinate to the padded span `[0, extent]`; NaN goes to the middle.
fn contain(value: f64, extent: f64) -> f64 {
    if !value.is_finite() {
        return extent / 2.0;
    }
    let lo = EDGE_PADDING.min(extent / 2.0);
    value.clamp(lo, extent - lo)
}
