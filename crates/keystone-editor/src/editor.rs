// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Interactive quadrilateral editor — hit testing, drag state machine, and the
// bitmap/view bookkeeping the hosting view needs to render the quad.

use keystone_core::{
    CoordinateMapper, Corner, EditMode, EditorConfig, Edge, Line, Point, Quadrilateral, Rect,
};
use tracing::{debug, trace};

use crate::listener::EditListener;
use crate::session::{EditSession, SessionKind};

/// Pointer input in view pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down(Point),
    Move(Point),
    Up(Point),
}

/// Whether the editor used the event or the host view should handle it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    Consumed,
    PassThrough,
}

/// Result of one pointer-move while dragging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Accepted,
    /// A tracked corner would have left its safe region; nothing moved.
    Rejected,
}

/// Editor state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditState {
    Idle,
    EditingPoint(Corner),
    EditingEdge(Edge),
}

/// Owns the live quadrilateral (bitmap space) and mutates it from pointer input.
///
/// ```ignore
/// let mut editor = InteractiveEditor::new(EditorConfig::default());
/// editor.set_bitmap_size(4000, 3000);
/// editor.set_view_rect(Rect::new(0.0, 0.0, 1080.0, 810.0));
/// editor.handle_event(PointerEvent::Down(touch));
/// ```
pub struct InteractiveEditor {
    config: EditorConfig,
    mapper: CoordinateMapper,
    quad: Quadrilateral,
    bitmap_size: Option<(u32, u32)>,
    view_rect: Rect,
    session: Option<EditSession>,
    listener: Option<Box<dyn EditListener>>,
}

impl InteractiveEditor {
    pub fn new(config: EditorConfig) -> Self {
        Self {
            config,
            mapper: CoordinateMapper::default(),
            quad: Quadrilateral::default_inset(0, 0),
            bitmap_size: None,
            view_rect: Rect::default(),
            session: None,
            listener: None,
        }
    }

    pub fn set_listener(&mut self, listener: Box<dyn EditListener>) {
        self.listener = Some(listener);
    }

    // -- Configuration --------------------------------------------------------

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn mode(&self) -> EditMode {
        self.config.mode
    }

    /// Change the edit-direction mode. Takes effect on the next pointer-down.
    pub fn set_mode(&mut self, mode: EditMode) {
        debug!(%mode, "Edit mode changed");
        self.config.mode = mode;
    }

    // -- Bitmap and layout ----------------------------------------------------

    /// A new bitmap was loaded: remap and reset the quad to the configured inset.
    pub fn set_bitmap_size(&mut self, width: u32, height: u32) {
        self.cancel_drag();
        self.bitmap_size = Some((width, height));
        self.reconfigure();
        self.quad
            .reset_with_inset(width, height, self.config.border_ratio());
        self.notify_changed();
    }

    /// The bitmap was removed.
    pub fn clear_bitmap(&mut self) {
        self.cancel_drag();
        self.bitmap_size = None;
        self.reconfigure();
    }

    pub fn bitmap_size(&self) -> Option<(u32, u32)> {
        self.bitmap_size
    }

    /// The rectangle the bitmap is displayed in changed. Ends any active drag,
    /// whose view-space state belongs to the old layout.
    pub fn set_view_rect(&mut self, view_rect: Rect) {
        self.cancel_drag();
        self.view_rect = view_rect;
        self.reconfigure();
    }

    pub fn mapper(&self) -> &CoordinateMapper {
        &self.mapper
    }

    fn reconfigure(&mut self) {
        let (w, h) = self.bitmap_size.unwrap_or((0, 0));
        self.mapper.configure(w as i64, h as i64, self.view_rect);
        self.quad.bounding_view_rect = self.mapper.view_rect();
    }

    // -- Quadrilateral access -------------------------------------------------

    /// The live quad in bitmap space.
    pub fn quadrilateral(&self) -> &Quadrilateral {
        &self.quad
    }

    /// A deep copy of the live quad, safe to hand to a background task.
    pub fn snapshot(&self) -> Quadrilateral {
        self.quad.clone()
    }

    /// Replace the four corners (bitmap space).
    pub fn set_quadrilateral(
        &mut self,
        top_left: Point,
        top_right: Point,
        bottom_left: Point,
        bottom_right: Point,
    ) {
        self.quad.top_left = top_left;
        self.quad.top_right = top_right;
        self.quad.bottom_left = bottom_left;
        self.quad.bottom_right = bottom_right;
        self.notify_changed();
    }

    /// Replace the corners from another quad, keeping the current view bounds.
    pub fn set_quad(&mut self, quad: &Quadrilateral) {
        self.set_quadrilateral(quad.top_left, quad.top_right, quad.bottom_left, quad.bottom_right);
    }

    /// Back to the configured inset for the current bitmap.
    pub fn reset_quadrilateral(&mut self) {
        let Some((w, h)) = self.bitmap_size else {
            return;
        };
        self.quad.reset_with_inset(w, h, self.config.border_ratio());
        self.notify_changed();
    }

    /// The live quad in view space, bounded by the view rect.
    pub fn view_quadrilateral(&self) -> Quadrilateral {
        self.mapper.quad_to_view(&self.quad)
    }

    /// The four edges in view space, stretched across the view rect for drawing.
    ///
    /// Order: top, bottom, left, right.
    pub fn guide_lines(&self) -> [Line; 4] {
        let view = self.view_quadrilateral();
        let rect = self.mapper.view_rect();
        Edge::HIT_ORDER.map(|edge| view.edge(edge).extended_across(&rect, edge.orientation()))
    }

    // -- State machine --------------------------------------------------------

    pub fn state(&self) -> EditState {
        match self.session.as_ref().map(EditSession::kind) {
            None => EditState::Idle,
            Some(SessionKind::Point(corner)) => EditState::EditingPoint(corner),
            Some(SessionKind::Edge(edge)) => EditState::EditingEdge(edge),
        }
    }

    pub fn session(&self) -> Option<&EditSession> {
        self.session.as_ref()
    }

    pub fn handle_event(&mut self, event: PointerEvent) -> EventOutcome {
        match event {
            PointerEvent::Down(p) => self.pointer_down(p),
            PointerEvent::Move(p) => match self.pointer_move(p) {
                Some(_) => EventOutcome::Consumed,
                None => EventOutcome::PassThrough,
            },
            PointerEvent::Up(p) => self.pointer_up(p),
        }
    }

    /// Grab the first corner within reach, else the first draggable edge.
    pub fn pointer_down(&mut self, pointer: Point) -> EventOutcome {
        if self.session.is_some() {
            return EventOutcome::Consumed;
        }
        if !self.mapper.is_valid() {
            return EventOutcome::PassThrough;
        }

        let view = self.view_quadrilateral();
        let reach = self.config.hit_radius;
        let mode = self.config.mode;
        let margin = self.config.min_separation;

        let session = if let Some(&corner) = Corner::HIT_ORDER
            .iter()
            .find(|&&c| view.corner(c).distance_to(pointer) < reach)
        {
            EditSession::for_point(&view, corner, pointer, mode, margin)
        } else if let Some(&edge) = draggable_edges(mode)
            .iter()
            .find(|&&e| view.edge(e).distance_from(pointer) < reach)
        {
            EditSession::for_edge(&view, edge, pointer, mode, margin)
        } else {
            trace!(x = pointer.x, y = pointer.y, "Pointer down missed the quad");
            return EventOutcome::PassThrough;
        };

        debug!(kind = ?session.kind(), %mode, "Edit started");
        self.session = Some(session);
        if let Some(listener) = self.listener.as_mut() {
            listener.on_edit_start();
        }
        EventOutcome::Consumed
    }

    /// Apply the pointer delta to the tracked corners. `None` when idle.
    pub fn pointer_move(&mut self, pointer: Point) -> Option<MoveOutcome> {
        let session = self.session.as_mut()?;

        let Some(candidates) = session.propose(pointer) else {
            trace!(x = pointer.x, y = pointer.y, "Move left the safe region; rejected");
            return Some(MoveOutcome::Rejected);
        };

        // Paired corners move at once; check each against the regions derived
        // from the quad as it would be after the move.
        let mut view = self.mapper.quad_to_view(&self.quad);
        for &(corner, position) in &candidates {
            view.set_corner(corner, position);
        }
        if candidates.len() > 1 {
            let margin = self.config.min_separation;
            let fits = candidates
                .iter()
                .all(|&(c, p)| view.safe_region_with_margin(c, margin).contains(p));
            if !fits {
                trace!("Paired move would cross neighbours; rejected");
                return Some(MoveOutcome::Rejected);
            }
        }

        session.commit(&candidates);
        for &(corner, position) in &candidates {
            self.quad.set_corner(corner, self.mapper.to_bitmap(position));
        }
        trace!(x = pointer.x, y = pointer.y, moved = candidates.len(), "Move accepted");
        self.notify_changed();
        Some(MoveOutcome::Accepted)
    }

    /// Finish the drag, if any.
    pub fn pointer_up(&mut self, _pointer: Point) -> EventOutcome {
        if self.session.is_none() {
            return EventOutcome::PassThrough;
        }
        self.end_drag();
        EventOutcome::Consumed
    }

    fn cancel_drag(&mut self) {
        if self.session.is_some() {
            self.end_drag();
        }
    }

    fn end_drag(&mut self) {
        self.session = None;
        debug!("Edit finished");
        if let Some(listener) = self.listener.as_mut() {
            listener.on_edit_end();
        }
    }

    fn notify_changed(&mut self) {
        if let Some(listener) = self.listener.as_mut() {
            listener.on_perspective_changed();
        }
    }
}

/// Edges that may be dragged in `mode`: those perpendicular to the free axis.
fn draggable_edges(mode: EditMode) -> &'static [Edge] {
    match mode {
        EditMode::Free => &[],
        EditMode::HorizontalOnly => &[Edge::Left, Edge::Right],
        EditMode::VerticalOnly => &[Edge::Top, Edge::Bottom],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    const EPS: f32 = 1e-3;

    #[derive(Default)]
    struct Counters {
        changed: Cell<u32>,
        started: Cell<u32>,
        ended: Cell<u32>,
    }

    struct CountingListener(Rc<Counters>);

    impl EditListener for CountingListener {
        fn on_perspective_changed(&mut self) {
            self.0.changed.set(self.0.changed.get() + 1);
        }
        fn on_edit_start(&mut self) {
            self.0.started.set(self.0.started.get() + 1);
        }
        fn on_edit_end(&mut self) {
            self.0.ended.set(self.0.ended.get() + 1);
        }
    }

    /// 250x250 bitmap shown at 2x in a 500x500 view. The default quad sits at
    /// bitmap (12.5, 12.5)-(237.5, 237.5), i.e. view (25, 25)-(475, 475).
    fn editor(mode: EditMode) -> (InteractiveEditor, Rc<Counters>) {
        let mut editor = InteractiveEditor::new(EditorConfig {
            mode,
            ..EditorConfig::default()
        });
        editor.set_view_rect(Rect::new(0.0, 0.0, 500.0, 500.0));
        editor.set_bitmap_size(250, 250);
        let counters = Rc::new(Counters::default());
        editor.set_listener(Box::new(CountingListener(Rc::clone(&counters))));
        (editor, counters)
    }

    #[test]
    fn down_on_corner_starts_point_edit() {
        let (mut editor, counters) = editor(EditMode::Free);
        let outcome = editor.handle_event(PointerEvent::Down(Point::new(30.0, 28.0)));
        assert_eq!(outcome, EventOutcome::Consumed);
        assert_eq!(editor.state(), EditState::EditingPoint(Corner::TopLeft));
        assert_eq!(counters.started.get(), 1);
    }

    #[test]
    fn down_far_from_quad_passes_through() {
        let (mut editor, counters) = editor(EditMode::Free);
        let outcome = editor.handle_event(PointerEvent::Down(Point::new(250.0, 250.0)));
        assert_eq!(outcome, EventOutcome::PassThrough);
        assert_eq!(editor.state(), EditState::Idle);
        assert_eq!(counters.started.get(), 0);
    }

    #[test]
    fn free_mode_does_not_grab_edges() {
        let (mut editor, _) = editor(EditMode::Free);
        // On the left edge, far from both its corners.
        let outcome = editor.handle_event(PointerEvent::Down(Point::new(27.0, 250.0)));
        assert_eq!(outcome, EventOutcome::PassThrough);
    }

    #[test]
    fn no_bitmap_means_no_editing() {
        let mut editor = InteractiveEditor::new(EditorConfig::default());
        editor.set_view_rect(Rect::new(0.0, 0.0, 500.0, 500.0));
        let outcome = editor.handle_event(PointerEvent::Down(Point::new(0.0, 0.0)));
        assert_eq!(outcome, EventOutcome::PassThrough);
        assert_eq!(editor.state(), EditState::Idle);
    }

    #[test]
    fn corner_drag_moves_corner_in_bitmap_space() {
        let (mut editor, counters) = editor(EditMode::Free);
        editor.handle_event(PointerEvent::Down(Point::new(25.0, 25.0)));
        let outcome = editor.pointer_move(Point::new(45.0, 35.0));
        assert_eq!(outcome, Some(MoveOutcome::Accepted));
        // View delta (20, 10) at scale 2 is bitmap delta (10, 5).
        assert!(editor.quadrilateral().top_left.approx_eq(Point::new(22.5, 17.5), EPS));
        assert!(editor.quadrilateral().top_right.approx_eq(Point::new(237.5, 12.5), EPS));
        assert!(counters.changed.get() >= 1);
    }

    #[test]
    fn move_past_neighbour_is_rejected_whole() {
        let (mut editor, _) = editor(EditMode::Free);
        editor.handle_event(PointerEvent::Down(Point::new(25.0, 25.0)));
        let before = editor.snapshot();
        // Diagonal drag whose X overshoots the right side.
        assert_eq!(
            editor.pointer_move(Point::new(480.0, 60.0)),
            Some(MoveOutcome::Rejected)
        );
        assert_eq!(editor.quadrilateral(), &before);

        // The pointer was still tracked: stepping back moves relative to it.
        assert_eq!(
            editor.pointer_move(Point::new(470.0, 60.0)),
            Some(MoveOutcome::Accepted)
        );
        assert!(editor.quadrilateral().top_left.approx_eq(Point::new(7.5, 12.5), EPS));
    }

    #[test]
    fn up_returns_to_idle_and_notifies() {
        let (mut editor, counters) = editor(EditMode::Free);
        editor.handle_event(PointerEvent::Down(Point::new(475.0, 475.0)));
        assert_eq!(editor.state(), EditState::EditingPoint(Corner::BottomRight));
        assert_eq!(editor.handle_event(PointerEvent::Up(Point::new(475.0, 475.0))), EventOutcome::Consumed);
        assert_eq!(editor.state(), EditState::Idle);
        assert!(editor.session().is_none());
        assert_eq!(counters.ended.get(), 1);
        // Move and up while idle go to the host.
        assert_eq!(editor.handle_event(PointerEvent::Move(Point::new(1.0, 1.0))), EventOutcome::PassThrough);
        assert_eq!(editor.handle_event(PointerEvent::Up(Point::new(1.0, 1.0))), EventOutcome::PassThrough);
    }

    #[test]
    fn layout_change_ends_active_drag() {
        let (mut editor, counters) = editor(EditMode::Free);
        editor.handle_event(PointerEvent::Down(Point::new(25.0, 25.0)));
        assert_eq!(editor.state(), EditState::EditingPoint(Corner::TopLeft));
        let before = editor.snapshot();

        editor.set_view_rect(Rect::new(0.0, 0.0, 250.0, 250.0));
        assert_eq!(editor.state(), EditState::Idle);
        assert_eq!(counters.ended.get(), 1);
        assert_eq!(editor.pointer_move(Point::new(60.0, 60.0)), None);
        assert_eq!(editor.quadrilateral().clockwise(), before.clockwise());

        // A fresh drag uses the new 1:1 mapping.
        editor.handle_event(PointerEvent::Down(Point::new(12.5, 12.5)));
        assert_eq!(editor.pointer_move(Point::new(22.5, 17.5)), Some(MoveOutcome::Accepted));
        assert!(editor.quadrilateral().top_left.approx_eq(Point::new(22.5, 17.5), EPS));
    }

    #[test]
    fn reset_uses_configured_border() {
        let mut editor = InteractiveEditor::new(EditorConfig {
            border_percent: 10.0,
            ..EditorConfig::default()
        });
        editor.set_view_rect(Rect::new(0.0, 0.0, 400.0, 200.0));
        editor.set_bitmap_size(400, 200);
        assert!(editor.quadrilateral().top_left.approx_eq(Point::new(40.0, 20.0), EPS));
        assert!(editor.quadrilateral().bottom_right.approx_eq(Point::new(360.0, 180.0), EPS));

        editor.set_quadrilateral(
            Point::new(1.0, 1.0),
            Point::new(399.0, 1.0),
            Point::new(1.0, 199.0),
            Point::new(399.0, 199.0),
        );
        editor.reset_quadrilateral();
        assert!(editor.quadrilateral().top_right.approx_eq(Point::new(360.0, 20.0), EPS));
    }

    #[test]
    fn horizontal_only_point_drag_keeps_y() {
        let (mut editor, _) = editor(EditMode::HorizontalOnly);
        let before = editor.snapshot();
        editor.handle_event(PointerEvent::Down(Point::new(475.0, 25.0)));
        assert_eq!(editor.state(), EditState::EditingPoint(Corner::TopRight));
        for (x, y) in [(460.0, 60.0), (430.0, 10.0), (440.0, 200.0)] {
            assert_eq!(editor.pointer_move(Point::new(x, y)), Some(MoveOutcome::Accepted));
            assert!((editor.quadrilateral().top_right.y - before.top_right.y).abs() < EPS);
        }
        assert!((editor.quadrilateral().top_right.x - 220.0).abs() < EPS);
    }

    #[test]
    fn vertical_only_point_drag_keeps_x() {
        let (mut editor, _) = editor(EditMode::VerticalOnly);
        let before = editor.snapshot();
        editor.handle_event(PointerEvent::Down(Point::new(25.0, 475.0)));
        assert_eq!(editor.state(), EditState::EditingPoint(Corner::BottomLeft));
        assert_eq!(editor.pointer_move(Point::new(80.0, 420.0)), Some(MoveOutcome::Accepted));
        let bl = editor.quadrilateral().bottom_left;
        assert!((bl.x - before.bottom_left.x).abs() < EPS);
        assert!((bl.y - 210.0).abs() < EPS);
    }

    #[test]
    fn horizontal_only_edge_drag_moves_exactly_the_edge_pair() {
        let (mut editor, counters) = editor(EditMode::HorizontalOnly);
        let before = editor.snapshot();
        // Middle of the right edge, away from both corners.
        editor.handle_event(PointerEvent::Down(Point::new(472.0, 250.0)));
        assert_eq!(editor.state(), EditState::EditingEdge(Edge::Right));
        assert_eq!(editor.pointer_move(Point::new(432.0, 270.0)), Some(MoveOutcome::Accepted));

        let quad = editor.quadrilateral();
        assert!(quad.top_right.approx_eq(Point::new(217.5, before.top_right.y), EPS));
        assert!(quad.bottom_right.approx_eq(Point::new(217.5, before.bottom_right.y), EPS));
        assert_eq!(quad.top_left, before.top_left);
        assert_eq!(quad.bottom_left, before.bottom_left);
        assert_eq!(counters.started.get(), 1);
    }

    #[test]
    fn vertical_only_grabs_horizontal_edges_only() {
        let (mut editor, _) = editor(EditMode::VerticalOnly);
        assert_eq!(editor.handle_event(PointerEvent::Down(Point::new(27.0, 250.0))), EventOutcome::PassThrough);
        assert_eq!(editor.handle_event(PointerEvent::Down(Point::new(250.0, 470.0))), EventOutcome::Consumed);
        assert_eq!(editor.state(), EditState::EditingEdge(Edge::Bottom));
    }

    #[test]
    fn edge_pair_is_rejected_together() {
        let (mut editor, _) = editor(EditMode::HorizontalOnly);
        // Pull the bottom-right corner far inwards so the bottom-right leaves
        // its region before the top-right does.
        editor.set_quadrilateral(
            Point::new(12.5, 12.5),
            Point::new(237.5, 12.5),
            Point::new(12.5, 237.5),
            Point::new(150.0, 237.5),
        );
        // Right edge runs from view (475, 25) to (300, 475); grab its middle.
        editor.handle_event(PointerEvent::Down(Point::new(387.5, 250.0)));
        assert_eq!(editor.state(), EditState::EditingEdge(Edge::Right));
        let before = editor.snapshot();
        // Bottom-right would need x >= 30 (left corners at 25 + 5); top-right is fine.
        assert_eq!(editor.pointer_move(Point::new(107.5, 250.0)), Some(MoveOutcome::Rejected));
        assert_eq!(editor.quadrilateral(), &before);
    }

    #[test]
    fn corners_win_over_edges_and_follow_fixed_order() {
        let (mut editor, _) = editor(EditMode::HorizontalOnly);
        // A tiny quad: every corner within reach of the pointer.
        editor.set_quadrilateral(
            Point::new(100.0, 100.0),
            Point::new(104.0, 100.0),
            Point::new(100.0, 104.0),
            Point::new(104.0, 104.0),
        );
        editor.handle_event(PointerEvent::Down(Point::new(204.0, 204.0)));
        assert_eq!(editor.state(), EditState::EditingPoint(Corner::TopLeft));
    }

    #[test]
    fn new_bitmap_resets_quad_and_ends_drag() {
        let (mut editor, counters) = editor(EditMode::Free);
        editor.handle_event(PointerEvent::Down(Point::new(25.0, 25.0)));
        editor.pointer_move(Point::new(60.0, 60.0));
        editor.set_bitmap_size(100, 200);
        assert_eq!(editor.state(), EditState::Idle);
        assert_eq!(counters.ended.get(), 1);
        assert_eq!(editor.quadrilateral(), &Quadrilateral::default_inset(100, 200).with_bounds(editor.mapper().view_rect()));
    }

    #[test]
    fn guide_lines_span_the_view() {
        let (editor, _) = editor(EditMode::Free);
        let [top, bottom, left, right] = editor.guide_lines();
        assert!(top.from.approx_eq(Point::new(0.0, 25.0), EPS));
        assert!(top.to.approx_eq(Point::new(500.0, 25.0), EPS));
        assert!(bottom.to.approx_eq(Point::new(500.0, 475.0), EPS));
        assert!(left.from.approx_eq(Point::new(25.0, 0.0), EPS));
        assert!(right.to.approx_eq(Point::new(475.0, 500.0), EPS));
    }

    /// Deterministic pseudo-random walk; every committed quad must keep each
    /// corner inside the region derived from the other three.
    #[test]
    fn random_drags_never_commit_a_degenerate_quad() {
        let mut seed: u32 = 0x2545_f491;
        let mut next = move |range: f32| {
            seed ^= seed << 13;
            seed ^= seed >> 17;
            seed ^= seed << 5;
            (seed as f32 / u32::MAX as f32 - 0.5) * 2.0 * range
        };

        for mode in [EditMode::Free, EditMode::HorizontalOnly, EditMode::VerticalOnly] {
            let (mut editor, _) = editor(mode);
            let margin = editor.config().min_separation;
            for _ in 0..40 {
                let view = editor.view_quadrilateral();
                let corner = Corner::HIT_ORDER[(next(4.0).abs() as usize).min(3)];
                let grab = view.corner(corner);
                // Aim at the corner or, half the time, at the middle of an edge.
                let target = if next(1.0) > 0.0 {
                    grab
                } else {
                    let edge = if mode == EditMode::VerticalOnly { Edge::Top } else { Edge::Left };
                    view.edge(edge).midpoint()
                };
                editor.handle_event(PointerEvent::Down(target));
                let mut pointer = target;
                for _ in 0..15 {
                    pointer = pointer.offset(next(80.0), next(80.0));
                    if editor.pointer_move(pointer) == Some(MoveOutcome::Accepted) {
                        let view = editor.view_quadrilateral();
                        for c in Corner::HIT_ORDER {
                            let region = view.safe_region_with_margin(c, margin).inset(-EPS);
                            assert!(region.contains(view.corner(c)), "{c:?} escaped in {mode:?}: {view:?}");
                        }
                    }
                }
                editor.handle_event(PointerEvent::Up(pointer));
            }
        }
    }
}
