use std::collections::HashMap;

use crossbeam::channel::Sender;
use egui::{Color32, CursorIcon, FontFamily, FontId, Pos2, Rect, Response, Sense, Stroke, Ui, Vec2};
use fresco::{
    AnimOptions, Easing, EdgeId, MirrorEdge, MirrorNode, NetworkView, NodeId, NodeShape,
};
use rand::Rng;

/// Decorative padding around the content when fitting to screen.
const SCREEN_PADDING: f32 = 0.3;
/// Canvas height outside quiz mode; quiz mode tracks the window.
pub const DEFAULT_HEIGHT: f32 = 600.;

const EDGE_WIDTH: f32 = 2.;
const EDGE_HIT_DISTANCE: f32 = 6.;
const TIP_ANGLE: f32 = std::f32::consts::TAU / 50.;
const TIP_LENGTH: f32 = 12.;
/// Spread of the fallback placement for cards without bundle coordinates.
const SPAWN_SIZE: f32 = 250.;
/// Smallest rect a camera move will frame, so focusing a point still zooms
/// sensibly.
const MIN_FRAME: f32 = 120.;

const COLOR_SELECTED: Color32 = Color32::from_rgb(148, 0, 211);
const COLOR_DOT: Color32 = Color32::GRAY;
const COLOR_CARD: Color32 = Color32::from_rgb(235, 235, 235);
const COLOR_LABEL: Color32 = Color32::BLACK;

/// A click resolved against the canvas content: card first, else relation,
/// else background.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CanvasEvent {
    NodeClick(NodeId),
    EdgeClick(EdgeId),
    BackgroundClick,
}

enum CameraCmd {
    FitAll,
    FitNodes(Vec<NodeId>),
    Focus { id: NodeId, scale: f32 },
}

struct CameraAnim {
    from_zoom: f32,
    to_zoom: f32,
    from_pan: Vec2,
    to_pan: Vec2,
    start: f64,
    duration: f32,
}

/// Painter-based rendering of the mirrored dataset.
///
/// Holds the snapshots the synchronization middleware pushes, a camera with
/// eased animation, and forwards resolved clicks over a channel. Positions
/// are fixed: the bundle's coordinates when present, a random placement
/// otherwise, kept stable across snapshot updates.
pub struct NetworkCanvas {
    nodes: Vec<MirrorNode>,
    edges: Vec<MirrorEdge>,
    positions: HashMap<NodeId, Pos2>,
    selected: Vec<NodeId>,

    zoom: f32,
    pan: Vec2,
    canvas: Rect,
    size_override: Option<Vec2>,
    fixed_height: Option<f32>,
    first_fit: bool,

    pending: Vec<(CameraCmd, AnimOptions)>,
    anim: Option<CameraAnim>,

    events: Sender<CanvasEvent>,
}

impl NetworkCanvas {
    pub fn new(events: Sender<CanvasEvent>, quiz: bool) -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
            positions: HashMap::new(),
            selected: Vec::new(),

            zoom: 1.,
            pan: Vec2::ZERO,
            canvas: Rect::from_min_max(Pos2::ZERO, Pos2::ZERO),
            size_override: None,
            fixed_height: (!quiz).then_some(DEFAULT_HEIGHT),
            first_fit: false,

            pending: Vec::new(),
            anim: None,

            events,
        }
    }

    pub fn ui(&mut self, ui: &mut Ui) -> Response {
        let size = self.desired_size(ui);
        let (response, painter) = ui.allocate_painter(size, Sense::click());
        self.canvas = response.rect;

        if !self.first_fit && !self.nodes.is_empty() {
            // Land on the whole diagram without animating the very first frame.
            if let Some((zoom, pan)) = self.camera_for(self.bounds(None)) {
                self.zoom = zoom;
                self.pan = pan;
            }
            self.first_fit = true;
        }

        let now = ui.input(|i| i.time);
        self.apply_pending(now);
        if self.advance_anim(now) {
            ui.ctx().request_repaint();
        }

        self.handle_pointer(ui, &response);
        self.draw(&painter);

        response
    }

    fn desired_size(&self, ui: &Ui) -> Vec2 {
        if let Some(size) = self.size_override {
            return size;
        }
        match self.fixed_height {
            Some(height) => Vec2::new(ui.available_width(), height),
            None => ui.available_size(),
        }
    }

    fn to_screen(&self, pos: Pos2) -> Pos2 {
        (pos.to_vec2() * self.zoom + self.pan).to_pos2()
    }

    fn screen_radius(&self, node: &MirrorNode) -> f32 {
        node.size * self.zoom
    }

    /// Bounding rect of the given cards (all of them for `None`) in graph
    /// coordinates.
    fn bounds(&self, ids: Option<&[NodeId]>) -> Rect {
        let mut rect = Rect::NOTHING;
        for node in &self.nodes {
            if let Some(ids) = ids {
                if !ids.contains(&node.id) {
                    continue;
                }
            }
            if let Some(pos) = self.positions.get(&node.id) {
                rect = rect.union(Rect::from_center_size(*pos, Vec2::splat(node.size * 2.)));
            }
        }
        rect
    }

    /// Zoom and pan framing `target` inside the canvas, with padding.
    fn camera_for(&self, target: Rect) -> Option<(f32, Vec2)> {
        if !target.is_finite() || self.canvas.width() <= 0. {
            return None;
        }
        let target = Rect::from_center_size(
            target.center(),
            target.size().max(Vec2::splat(MIN_FRAME)),
        );
        let padded = target.size() * (1. + SCREEN_PADDING);
        let zoom = (self.canvas.width() / padded.x).min(self.canvas.height() / padded.y);
        let pan = self.canvas.center().to_vec2() - target.center().to_vec2() * zoom;
        Some((zoom, pan))
    }

    fn apply_pending(&mut self, now: f64) {
        let cmds: Vec<(CameraCmd, AnimOptions)> = self.pending.drain(..).collect();
        for (cmd, options) in cmds {
            let camera = match cmd {
                CameraCmd::FitAll => self.camera_for(self.bounds(None)),
                CameraCmd::FitNodes(ids) => self.camera_for(self.bounds(Some(&ids))),
                CameraCmd::Focus { id, scale } => self.positions.get(&id).map(|pos| {
                    (
                        scale,
                        self.canvas.center().to_vec2() - pos.to_vec2() * scale,
                    )
                }),
            };
            if let Some((zoom, pan)) = camera {
                self.anim = Some(CameraAnim {
                    from_zoom: self.zoom,
                    to_zoom: zoom,
                    from_pan: self.pan,
                    to_pan: pan,
                    start: now,
                    duration: options.duration_ms as f32 / 1000.,
                });
            }
        }
    }

    fn advance_anim(&mut self, now: f64) -> bool {
        let Some(anim) = self.anim.take() else {
            return false;
        };

        let elapsed = (now - anim.start) as f32;
        let t = if anim.duration > 0. {
            (elapsed / anim.duration).clamp(0., 1.)
        } else {
            1.
        };
        let k = ease(Easing::EaseInOutQuad, t);

        self.zoom = anim.from_zoom + (anim.to_zoom - anim.from_zoom) * k;
        self.pan = anim.from_pan + (anim.to_pan - anim.from_pan) * k;

        if t >= 1. {
            return false;
        }
        self.anim = Some(anim);
        true
    }

    fn handle_pointer(&mut self, ui: &Ui, response: &Response) {
        let hovering = response
            .hover_pos()
            .is_some_and(|pos| self.node_at(pos).is_some() || self.edge_at(pos).is_some());
        if hovering {
            ui.output_mut(|o| o.cursor_icon = CursorIcon::PointingHand);
        }

        if !response.clicked() {
            return;
        }
        let Some(pos) = response.interact_pointer_pos() else {
            return;
        };

        let event = if let Some(id) = self.node_at(pos) {
            CanvasEvent::NodeClick(id)
        } else if let Some(id) = self.edge_at(pos) {
            CanvasEvent::EdgeClick(id)
        } else {
            CanvasEvent::BackgroundClick
        };
        self.events.send(event).ok();
    }

    fn node_at(&self, screen_pos: Pos2) -> Option<NodeId> {
        self.nodes.iter().find_map(|node| {
            let center = self.to_screen(*self.positions.get(&node.id)?);
            ((screen_pos - center).length() <= self.screen_radius(node)).then(|| node.id.clone())
        })
    }

    fn edge_at(&self, screen_pos: Pos2) -> Option<EdgeId> {
        self.edges.iter().find_map(|edge| {
            let (origin, effect) = edge.id.endpoints()?;
            let start = self.to_screen(*self.positions.get(&origin)?);
            let end = self.to_screen(*self.positions.get(&effect)?);
            (distance_to_segment(screen_pos, start, end) <= EDGE_HIT_DISTANCE)
                .then(|| edge.id.clone())
        })
    }

    fn draw(&self, painter: &egui::Painter) {
        for edge in &self.edges {
            self.draw_edge(painter, edge);
        }
        for node in &self.nodes {
            self.draw_node(painter, node);
        }
    }

    fn draw_edge(&self, painter: &egui::Painter, edge: &MirrorEdge) {
        let Some((origin, effect)) = edge.id.endpoints() else {
            return;
        };
        let (Some(start), Some(end)) = (
            self.positions.get(&origin).map(|p| self.to_screen(*p)),
            self.positions.get(&effect).map(|p| self.to_screen(*p)),
        ) else {
            return;
        };

        let vec = end - start;
        let length = vec.length();
        if length <= f32::EPSILON {
            return;
        }
        let dir = vec / length;

        let end_radius = self
            .node(&effect)
            .map_or(0., |node| self.screen_radius(node));
        let tip = end - dir * end_radius;

        let stroke = Stroke::new(EDGE_WIDTH * self.zoom.min(1.5), edge.color);
        painter.line_segment([start, tip], stroke);

        if edge.arrows_to {
            let tip_length = TIP_LENGTH * self.zoom.min(1.5);
            painter.line_segment([tip, tip - tip_length * rotate_vector(dir, TIP_ANGLE)], stroke);
            painter.line_segment(
                [tip, tip - tip_length * rotate_vector(dir, -TIP_ANGLE)],
                stroke,
            );
        }
    }

    fn draw_node(&self, painter: &egui::Painter, node: &MirrorNode) {
        let Some(pos) = self.positions.get(&node.id) else {
            return;
        };
        let center = self.to_screen(*pos);
        let radius = self.screen_radius(node);

        match node.shape {
            NodeShape::Dot => {
                painter.circle_filled(center, radius, COLOR_DOT);
            }
            NodeShape::Image => {
                // Card faces are approximated as filled disks; the image path
                // stays on the mirror node for hosts that load textures.
                painter.circle_filled(center, radius, COLOR_CARD);
                painter.circle_stroke(center, radius, Stroke::new(1., Color32::DARK_GRAY));
            }
        }

        if self.selected.contains(&node.id) {
            painter.circle_stroke(center, radius + 2., Stroke::new(2., COLOR_SELECTED));
        }

        if let Some(label) = &node.label {
            self.draw_label(painter, node, center, radius, label);
        }
    }

    fn draw_label(
        &self,
        painter: &egui::Painter,
        node: &MirrorNode,
        center: Pos2,
        radius: f32,
        label: &str,
    ) {
        let font = FontId::new(
            (12. * self.zoom).clamp(8., 24.),
            FontFamily::Proportional,
        );
        let galley = painter.layout_no_wrap(label.to_string(), font, COLOR_LABEL);
        let pos = Pos2::new(
            center.x - galley.size().x / 2.,
            center.y + radius + 2.,
        );
        if let Some(background) = node.font_background {
            let rect = Rect::from_min_size(pos, galley.size()).expand(1.);
            painter.rect_filled(rect, 2., background);
        }
        painter.galley(pos, galley, COLOR_LABEL);
    }

    fn node(&self, id: &NodeId) -> Option<&MirrorNode> {
        self.nodes.iter().find(|n| &n.id == id)
    }
}

impl NetworkView for NetworkCanvas {
    fn set_data(&mut self, nodes: Vec<MirrorNode>, edges: Vec<MirrorEdge>) {
        let mut rng = rand::rng();
        for node in &nodes {
            let fallback = || {
                Pos2::new(
                    rng.random_range(-SPAWN_SIZE..SPAWN_SIZE),
                    rng.random_range(-SPAWN_SIZE..SPAWN_SIZE),
                )
            };
            let pos = node.position.unwrap_or_else(fallback);
            self.positions.entry(node.id.clone()).or_insert(pos);
        }
        self.positions
            .retain(|id, _| nodes.iter().any(|n| &n.id == id));

        self.nodes = nodes;
        self.edges = edges;
    }

    fn select_nodes(&mut self, ids: &[NodeId]) {
        self.selected = ids.to_vec();
    }

    fn focus(&mut self, id: &NodeId, scale: f32, anim: &AnimOptions) {
        self.pending
            .push((CameraCmd::Focus { id: id.clone(), scale }, *anim));
    }

    fn fit(&mut self, nodes: Option<&[NodeId]>, anim: &AnimOptions) {
        let cmd = match nodes {
            Some(ids) => CameraCmd::FitNodes(ids.to_vec()),
            None => CameraCmd::FitAll,
        };
        self.pending.push((cmd, *anim));
    }

    fn set_size(&mut self, width: f32, height: f32) {
        self.size_override = Some(Vec2::new(width, height));
    }
}

fn ease(easing: Easing, t: f32) -> f32 {
    match easing {
        Easing::EaseInOutQuad => {
            if t < 0.5 {
                2. * t * t
            } else {
                1. - (-2. * t + 2.).powi(2) / 2.
            }
        }
    }
}

fn rotate_vector(vec: Vec2, angle: f32) -> Vec2 {
    let cos = angle.cos();
    let sin = angle.sin();
    Vec2::new(cos * vec.x - sin * vec.y, sin * vec.x + cos * vec.y)
}

fn distance_to_segment(p: Pos2, a: Pos2, b: Pos2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_sq();
    if len_sq <= f32::EPSILON {
        return (p - a).length();
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0., 1.);
    (p - (a + ab * t)).length()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_is_monotonic_and_bounded() {
        let mut last = 0.;
        for i in 0..=10 {
            let t = i as f32 / 10.;
            let v = ease(Easing::EaseInOutQuad, t);
            assert!(v >= last);
            last = v;
        }
        assert_eq!(ease(Easing::EaseInOutQuad, 0.), 0.);
        assert_eq!(ease(Easing::EaseInOutQuad, 1.), 1.);
    }

    #[test]
    fn segment_distance() {
        let a = Pos2::new(0., 0.);
        let b = Pos2::new(10., 0.);
        assert_eq!(distance_to_segment(Pos2::new(5., 3.), a, b), 3.);
        assert_eq!(distance_to_segment(Pos2::new(-4., 0.), a, b), 4.);
    }

    #[test]
    fn rotation_preserves_length() {
        let v = Vec2::new(3., 4.);
        let r = rotate_vector(v, 1.2);
        assert!((r.length() - v.length()).abs() < 1e-4);
    }
}
