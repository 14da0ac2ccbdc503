// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Drag session state — which corners are tracked, where each may go, and the
// axis-lock line each must stay on. Built on pointer-down, consumed on
// pointer-move, dropped on pointer-up.

use keystone_core::{Corner, EditMode, Edge, Line, Point, Quadrilateral, Rect};

/// What the pointer grabbed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionKind {
    Point(Corner),
    Edge(Edge),
}

/// A corner being dragged, in view space.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackedPoint {
    pub corner: Corner,
    /// View position when the drag started.
    pub start: Point,
    /// View position after the last accepted move.
    pub position: Point,
    /// Safe region captured when the drag started.
    pub region: Rect,
    /// Axis-lock line the corner must stay on, if any.
    pub constraint: Option<Line>,
}

/// One drag gesture, from pointer-down to pointer-up.
#[derive(Debug, Clone, PartialEq)]
pub struct EditSession {
    kind: SessionKind,
    mode: EditMode,
    tracked: Vec<TrackedPoint>,
    last_pointer: Point,
}

impl EditSession {
    /// Start dragging a single corner of `view_quad`.
    pub fn for_point(
        view_quad: &Quadrilateral,
        corner: Corner,
        pointer: Point,
        mode: EditMode,
        margin: f32,
    ) -> Self {
        let position = view_quad.corner(corner);
        let tracked = TrackedPoint {
            corner,
            start: position,
            position,
            region: view_quad.safe_region_with_margin(corner, margin),
            constraint: axis_line(position, mode),
        };
        Self {
            kind: SessionKind::Point(corner),
            mode,
            tracked: vec![tracked],
            last_pointer: pointer,
        }
    }

    /// Start dragging both endpoints of `edge` together.
    ///
    /// Under an axis lock each endpoint slides along the line joining it to its
    /// own opposite corner on the locked axis, so the two edges meeting the
    /// dragged one keep their direction.
    pub fn for_edge(
        view_quad: &Quadrilateral,
        edge: Edge,
        pointer: Point,
        mode: EditMode,
        margin: f32,
    ) -> Self {
        let (a, b) = edge.endpoints();
        let tracked = [a, b]
            .into_iter()
            .map(|corner| {
                let position = view_quad.corner(corner);
                TrackedPoint {
                    corner,
                    start: position,
                    position,
                    region: view_quad.safe_region_with_margin(corner, margin),
                    constraint: edge_slide_line(view_quad, corner, mode),
                }
            })
            .collect();
        Self {
            kind: SessionKind::Edge(edge),
            mode,
            tracked,
            last_pointer: pointer,
        }
    }

    pub fn kind(&self) -> SessionKind {
        self.kind
    }

    pub fn tracked(&self) -> &[TrackedPoint] {
        &self.tracked
    }

    pub fn last_pointer(&self) -> Point {
        self.last_pointer
    }

    /// Candidate view positions for a pointer at `pointer`.
    ///
    /// Returns `None` when any tracked corner would leave its recorded safe
    /// region; the whole move is then rejected. The remembered pointer is
    /// advanced either way so later deltas stay relative to the finger.
    pub fn propose(&mut self, pointer: Point) -> Option<Vec<(Corner, Point)>> {
        let dx = pointer.x - self.last_pointer.x;
        let dy = pointer.y - self.last_pointer.y;
        self.last_pointer = pointer;

        let mut candidates = Vec::with_capacity(self.tracked.len());
        for tracked in &self.tracked {
            let moved = tracked.position.offset(dx, dy);
            let candidate = match tracked.constraint {
                Some(line) => project_onto(&line, moved, self.mode),
                None => moved,
            };
            if !tracked.region.contains(candidate) {
                return None;
            }
            candidates.push((tracked.corner, candidate));
        }
        Some(candidates)
    }

    /// Record accepted positions.
    pub fn commit(&mut self, accepted: &[(Corner, Point)]) {
        for &(corner, position) in accepted {
            if let Some(tracked) = self.tracked.iter_mut().find(|t| t.corner == corner) {
                tracked.position = position;
            }
        }
    }
}

/// Line through `position` parallel to the free axis, or `None` in free mode.
fn axis_line(position: Point, mode: EditMode) -> Option<Line> {
    match mode {
        EditMode::Free => None,
        EditMode::HorizontalOnly => Some(Line::new(position, position.offset(1.0, 0.0))),
        EditMode::VerticalOnly => Some(Line::new(position, position.offset(0.0, 1.0))),
    }
}

/// Line from `corner` to its opposite corner along the locked axis.
///
/// Falls back to [`axis_line`] when that line cannot be solved along the free
/// axis (the two corners are stacked on it).
fn edge_slide_line(view_quad: &Quadrilateral, corner: Corner, mode: EditMode) -> Option<Line> {
    let position = view_quad.corner(corner);
    let line = match mode {
        EditMode::Free => return None,
        EditMode::HorizontalOnly => {
            Line::new(position, view_quad.corner(corner.horizontal_neighbor()))
        }
        EditMode::VerticalOnly => Line::new(position, view_quad.corner(corner.vertical_neighbor())),
    };
    let solvable = match mode {
        EditMode::HorizontalOnly => line.dx() != 0.0,
        _ => line.dy() != 0.0,
    };
    if solvable { Some(line) } else { axis_line(position, mode) }
}

/// Keep the free coordinate of `candidate` and solve the other from `line`.
fn project_onto(line: &Line, candidate: Point, mode: EditMode) -> Point {
    match mode {
        EditMode::Free => candidate,
        EditMode::HorizontalOnly => match line.y_at(candidate.x) {
            Some(y) => Point::new(candidate.x, y),
            None => Point::new(candidate.x, line.from.y),
        },
        EditMode::VerticalOnly => match line.x_at(candidate.y) {
            Some(x) => Point::new(x, candidate.y),
            None => Point::new(line.from.x, candidate.y),
        },
    }
}
