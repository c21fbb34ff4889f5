//! The scene-object capability set.
//!
//! Every object kind carries an [`ObjectState`] (identity, visibility,
//! position and trail) and implements [`SceneObject`]. The scene only talks to
//! objects through this trait, so new kinds plug in without touching it.

use std::any::Any;
use std::collections::VecDeque;

use crate::bodies::{Ball, ObjectFlags};
use crate::core::{EventQueue, Neighbors, NeighborsMut, SceneConfig, Viewport};
use crate::math::{Point, Vector2};
use crate::render::{Canvas, Color};

/// Read-only scene parameters handed to objects during a step or a render
#[derive(Debug, Clone, Copy)]
pub struct SceneContext<'a> {
    pub config: &'a SceneConfig,
    pub viewport: &'a Viewport,
}

/// What happened to an object during the collision pass
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CollisionOutcome {
    #[default]
    None,

    /// Bounced off another object
    Collided { with: String },

    /// Eliminated by another object; the scene removes it
    Absorbed { by: String },
}

/// Bounded history of past positions, oldest first
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trail {
    points: VecDeque<Point>,
    limit: usize,
}

impl Trail {
    /// Creates an empty trail; `limit == 0` keeps every point
    pub fn new(limit: usize) -> Self {
        Self {
            points: VecDeque::new(),
            limit,
        }
    }

    /// Appends a point, first dropping the oldest ones so the result fits the limit
    pub fn record(&mut self, point: Point) {
        if self.limit > 0 && self.points.len() + 1 > self.limit {
            let excess = self.points.len() + 1 - self.limit;
            self.points.drain(..excess);
        }
        self.points.push_back(point);
    }

    /// Shifts every retained point
    pub fn translate(&mut self, offset: Vector2) {
        for point in self.points.iter_mut() {
            *point += offset;
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Changes the limit. Excess points are trimmed on the next `record`.
    pub fn set_limit(&mut self, limit: usize) {
        self.limit = limit;
    }

    pub fn points(&self) -> impl Iterator<Item = &Point> {
        self.points.iter()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Opacity of the point at `index`: fades in from the oldest point when
    /// a limit is set, fully opaque otherwise
    pub fn alpha(&self, index: usize) -> f64 {
        if self.limit == 0 {
            return 1.0;
        }
        let span = self.limit.min(self.points.len());
        if span == 0 {
            return 1.0;
        }
        index as f64 / span as f64
    }
}

/// State shared by every object kind
#[derive(Debug, Clone)]
pub struct ObjectState {
    name: String,
    enabled: bool,
    position: Point,
    flags: ObjectFlags,
    trail: Trail,
}

impl ObjectState {
    pub fn new(name: impl Into<String>, position: Point) -> Self {
        Self {
            name: name.into(),
            enabled: true,
            position,
            flags: ObjectFlags::empty(),
            trail: Trail::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn position_mut(&mut self) -> &mut Point {
        &mut self.position
    }

    pub fn flags(&self) -> ObjectFlags {
        self.flags
    }

    pub fn flags_mut(&mut self) -> &mut ObjectFlags {
        &mut self.flags
    }

    pub fn is_traced(&self) -> bool {
        self.flags.contains(ObjectFlags::TRACE)
    }

    pub fn trail(&self) -> &Trail {
        &self.trail
    }

    pub fn trail_mut(&mut self) -> &mut Trail {
        &mut self.trail
    }

    /// Appends the current position to the trail when tracing is on
    pub fn record_trace(&mut self) {
        if self.is_traced() {
            self.trail.record(self.position);
        }
    }

    /// Moves the object and its whole trail by `offset`
    pub fn translate(&mut self, offset: Vector2) {
        self.position += offset;
        self.trail.translate(offset);
    }
}

/// Colour of trail dots before fading
const TRAIL_COLOR: Color = Color::rgb(127, 127, 127);

/// Radius of a trail dot in pixels
const TRAIL_DOT_RADIUS: f64 = 1.0;

/// Behaviour every object in a scene provides
pub trait SceneObject: Any {
    fn state(&self) -> &ObjectState;

    fn state_mut(&mut self) -> &mut ObjectState;

    /// Advances the object by one frame. The default only records the trail.
    fn advance(&mut self, _ctx: &SceneContext<'_>, _others: Neighbors<'_>, _events: &mut EventQueue) {
        self.state_mut().record_trace();
    }

    /// Detects and resolves contact with the other objects
    fn resolve_collision(
        &mut self,
        _ctx: &SceneContext<'_>,
        _others: NeighborsMut<'_>,
        _events: &mut EventQueue,
    ) -> CollisionOutcome {
        CollisionOutcome::None
    }

    /// Draws the object itself
    fn draw(&self, ctx: &SceneContext<'_>, canvas: &mut dyn Canvas);

    /// Draws the trail points that fall inside the viewport
    fn draw_trace(&self, ctx: &SceneContext<'_>, canvas: &mut dyn Canvas) {
        let state = self.state();
        if !state.is_traced() {
            return;
        }
        let bounds = ctx.viewport.screen_bounds();
        let trail = state.trail();
        for (index, point) in trail.points().enumerate() {
            let screen = ctx.viewport.to_screen(*point);
            if !bounds.contains_point(screen) {
                continue;
            }
            canvas.fill_circle(screen, TRAIL_DOT_RADIUS, TRAIL_COLOR.with_alpha(trail.alpha(index)));
        }
    }

    /// Pans the object, trail included
    fn translate(&mut self, offset: Vector2) {
        self.state_mut().translate(offset);
    }

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    fn name(&self) -> &str {
        self.state().name()
    }

    fn is_enabled(&self) -> bool {
        self.state().is_enabled()
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.state_mut().set_enabled(enabled);
    }

    fn position(&self) -> Point {
        self.state().position()
    }

    fn is_anchor(&self) -> bool {
        self.state().flags().contains(ObjectFlags::ANCHOR)
    }

    fn trail(&self) -> &Trail {
        self.state().trail()
    }

    fn set_trail_limit(&mut self, limit: usize) {
        self.state_mut().trail_mut().set_limit(limit);
    }
}

impl<'a> dyn SceneObject + 'a {
    /// Downcasts to a ball
    pub fn as_ball(&self) -> Option<&Ball> {
        self.as_any().downcast_ref::<Ball>()
    }

    /// Downcasts to a mutable ball
    pub fn as_ball_mut(&mut self) -> Option<&mut Ball> {
        self.as_any_mut().downcast_mut::<Ball>()
    }
}
