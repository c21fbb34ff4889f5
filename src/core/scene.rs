use tracing::{debug, trace};

use crate::bodies::ObjectFlags;
use crate::core::{
    CollisionOutcome, EventQueue, ForceMode, ObjectEventKind, ObjectStorage, SceneConfig,
    SceneContext, SceneObject, Viewport,
};
use crate::error::SandboxError;
use crate::math::{Point, Vector2};
use crate::render::Canvas;
use crate::Result;

/// Caller-supplied callback run once after every unpaused step
pub type PostStepHook = Box<dyn FnMut(&mut Scene)>;

/// The world: an ordered, name-keyed set of objects plus the regime they
/// are simulated under.
///
/// Each frame [`Scene::draw`] advances every object, then resolves
/// collisions for every object, then runs the post-step hook, then renders
/// trails followed by bodies. Passes walk a snapshot of the names taken when
/// the pass starts, so an object removed mid-pass is simply skipped.
pub struct Scene {
    viewport: Viewport,
    config: SceneConfig,
    objects: ObjectStorage,
    events: EventQueue,
    post_step: Option<PostStepHook>,
    frame: u64,
}

impl Scene {
    /// Creates a scene for a canvas of the given pixel size with default regime parameters
    pub fn new(canvas_width: f64, canvas_height: f64, world_width: f64, padding: f64) -> Result<Self> {
        let config = SceneConfig {
            world_width,
            padding,
            ..SceneConfig::default()
        };
        Self::with_config(canvas_width, canvas_height, config)
    }

    /// Creates a scene with the given configuration
    pub fn with_config(canvas_width: f64, canvas_height: f64, config: SceneConfig) -> Result<Self> {
        config.validate()?;
        let viewport = Viewport::new(canvas_width, canvas_height, config.world_width, config.padding)?;
        debug!(
            canvas_width,
            canvas_height,
            world_width = config.world_width,
            mode = ?config.mode,
            "scene created"
        );
        Ok(Self {
            viewport,
            config,
            objects: ObjectStorage::new(),
            events: EventQueue::new(),
            post_step: None,
            frame: 0,
        })
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    /// Live configuration. World width and padding are fixed at construction.
    pub fn config_mut(&mut self) -> &mut SceneConfig {
        &mut self.config
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Adopts a new canvas size
    pub fn resize(&mut self, canvas_width: f64, canvas_height: f64) -> Result<()> {
        self.viewport.resize(canvas_width, canvas_height)
    }

    /// Number of unpaused steps taken so far
    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    // === Regime parameters ===

    pub fn set_gravity(&mut self, gravity: f64) {
        self.config.gravity = gravity;
    }

    pub fn set_elasticity(&mut self, elasticity: f64) {
        self.config.elasticity = elasticity;
    }

    pub fn set_friction(&mut self, friction: f64) {
        self.config.friction = friction;
    }

    pub fn set_mode(&mut self, mode: ForceMode) {
        self.config.mode = mode;
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.config.paused = paused;
    }

    pub fn is_paused(&self) -> bool {
        self.config.paused
    }

    pub fn set_show_velocity_vector(&mut self, show: bool) {
        self.config.show_velocity_vector = show;
    }

    pub fn set_show_acceleration_vector(&mut self, show: bool) {
        self.config.show_acceleration_vector = show;
    }

    pub fn set_play_sound(&mut self, play: bool) {
        self.config.play_sound = play;
    }

    // === Coordinate transform ===

    /// Drawable width in pixels
    pub fn width(&self) -> f64 {
        self.viewport.width()
    }

    /// Drawable height in pixels
    pub fn height(&self) -> f64 {
        self.viewport.height()
    }

    pub fn scale(&self) -> f64 {
        self.viewport.scale()
    }

    pub fn visible_world_height(&self) -> f64 {
        self.viewport.visible_world_height()
    }

    pub fn to_screen_x(&self, x: f64) -> f64 {
        self.viewport.to_screen_x(x)
    }

    pub fn to_screen_y(&self, y: f64) -> f64 {
        self.viewport.to_screen_y(y)
    }

    pub fn to_world_x(&self, x: f64) -> f64 {
        self.viewport.to_world_x(x)
    }

    pub fn to_world_y(&self, y: f64) -> f64 {
        self.viewport.to_world_y(y)
    }

    // === Object set ===

    /// Registers an object, replacing any object of the same name
    pub fn add(&mut self, object: Box<dyn SceneObject>) -> &mut Self {
        debug!(name = object.name(), "object added");
        self.events.add_object_event(ObjectEventKind::Added, object.name());
        self.objects.insert(object);
        self
    }

    /// Removes an object by name; absent names are ignored
    pub fn remove(&mut self, name: &str) -> &mut Self {
        if self.objects.remove(name).is_some() {
            debug!(name, "object removed");
            self.events.add_object_event(ObjectEventKind::Removed, name);
        }
        self
    }

    /// Stops drawing an object; it keeps being simulated
    pub fn hide(&mut self, name: &str) -> Result<&mut Self> {
        self.objects.get_object_mut(name)?.set_enabled(false);
        Ok(self)
    }

    /// Draws a hidden object again
    pub fn show(&mut self, name: &str) -> Result<&mut Self> {
        self.objects.get_object_mut(name)?.set_enabled(true);
        Ok(self)
    }

    /// Enables only the named object
    pub fn hide_all_but_one(&mut self, name: &str) -> &mut Self {
        for object in self.objects.iter_mut() {
            let keep = object.name() == name;
            object.set_enabled(keep);
        }
        self
    }

    /// Replaces the entry registered under `name`
    pub fn update_by_key(&mut self, name: &str, object: Box<dyn SceneObject>) -> Result<&mut Self> {
        if object.name() != name {
            return Err(SandboxError::InvalidParameter(format!(
                "object {} cannot be stored under key {}",
                object.name(),
                name
            )));
        }
        self.objects.insert(object);
        Ok(self)
    }

    /// Replaces (or inserts) every given object by its own name
    pub fn update<I>(&mut self, objects: I) -> &mut Self
    where
        I: IntoIterator<Item = Box<dyn SceneObject>>,
    {
        for object in objects {
            self.objects.insert(object);
        }
        self
    }

    /// Applies `transform` to every object matching `predicate`.
    ///
    /// The matching set is fixed before the first transform runs.
    pub fn update_with_condition<P, F>(&mut self, predicate: P, mut transform: F) -> usize
    where
        P: Fn(&dyn SceneObject) -> bool,
        F: FnMut(&mut dyn SceneObject),
    {
        let matching: Vec<String> = self
            .objects
            .iter()
            .filter(|object| predicate(&***object))
            .map(|object| object.name().to_owned())
            .collect();
        for name in &matching {
            if let Some(object) = self.objects.get_mut(name) {
                transform(object);
            }
        }
        matching.len()
    }

    /// Removes every object
    pub fn clear(&mut self) -> &mut Self {
        for name in self.objects.names() {
            self.events.add_object_event(ObjectEventKind::Removed, &name);
        }
        self.objects.clear();
        debug!("scene cleared");
        self
    }

    /// Clears the scene and resumes physics
    pub fn stop(&mut self) {
        self.clear();
        self.config.paused = false;
    }

    pub fn get(&self, name: &str) -> Result<&dyn SceneObject> {
        self.objects.get_object(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Result<&mut (dyn SceneObject + 'static)> {
        self.objects.get_object_mut(name)
    }

    pub fn get_ball(&self, name: &str) -> Result<&crate::bodies::Ball> {
        self.get(name)?
            .as_ball()
            .ok_or_else(|| SandboxError::NotABody(name.to_owned()))
    }

    pub fn get_ball_mut(&mut self, name: &str) -> Result<&mut crate::bodies::Ball> {
        self.get_mut(name)?
            .as_ball_mut()
            .ok_or_else(|| SandboxError::NotABody(name.to_owned()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.objects.contains(name)
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Names in draw order
    pub fn names(&self) -> Vec<String> {
        self.objects.names()
    }

    pub fn objects(&self) -> impl Iterator<Item = &dyn SceneObject> {
        self.objects.iter().map(|object| -> &dyn SceneObject { &**object })
    }

    /// The first object flagged as anchor
    pub fn anchor(&self) -> Option<&dyn SceneObject> {
        self.objects().find(|object| object.is_anchor())
    }

    pub fn events(&self) -> &EventQueue {
        &self.events
    }

    pub fn events_mut(&mut self) -> &mut EventQueue {
        &mut self.events
    }

    // === Bulk edits ===

    /// Applies a trail limit to every object and to future spawns
    pub fn set_trail_limit(&mut self, limit: usize) {
        self.config.trail_limit = limit;
        self.update_with_condition(|_| true, |object| object.set_trail_limit(limit));
    }

    /// Sets the mass of every body except the anchor
    pub fn set_body_mass(&mut self, mass: f64) -> Result<usize> {
        let mut result = Ok(());
        let touched = self.update_with_condition(
            |object| !object.is_anchor() && object.as_ball().is_some(),
            |object| {
                if let Some(ball) = object.as_ball_mut() {
                    if let Err(err) = ball.set_mass(mass) {
                        result = Err(err);
                    }
                }
            },
        );
        result.map(|_| touched)
    }

    /// Sets the anchor's mass; a heavy anchor grows from radius 15 to 25
    pub fn set_anchor_mass(&mut self, mass: f64) -> Result<()> {
        let heavy_mass = self.config.anchor_heavy_mass;
        let name = self
            .anchor()
            .map(|anchor| anchor.name().to_owned())
            .ok_or_else(|| SandboxError::ObjectNotFound("anchor".to_owned()))?;
        let anchor = self.get_ball_mut(&name)?;
        anchor.set_mass(mass)?;
        anchor.set_radius(if mass > heavy_mass { 25.0 } else { 15.0 })?;
        Ok(())
    }

    // === Re-centering ===

    /// Pans every object so the named object sits at the world center.
    /// Returns the applied offset, or `None` when it is below the configured epsilon.
    pub fn recenter_on(&mut self, name: &str) -> Result<Option<Vector2>> {
        let position = self.get(name)?.position();
        Ok(self.pan_to_center(position))
    }

    /// Pans every object so the anchor sits at the world center
    pub fn recenter_on_anchor(&mut self) -> Option<Vector2> {
        let position = self.anchor()?.position();
        self.pan_to_center(position)
    }

    fn pan_to_center(&mut self, position: Point) -> Option<Vector2> {
        let offset = self.viewport.world_center() - position;
        if offset.magnitude() <= self.config.recenter_epsilon {
            return None;
        }
        self.update_with_condition(|_| true, |object| object.translate(offset));
        trace!(dx = offset.x, dy = offset.y, "recentered");
        Some(offset)
    }

    // === Frame ===

    /// Installs the callback run after every unpaused step
    pub fn set_post_step(&mut self, hook: PostStepHook) {
        self.post_step = Some(hook);
    }

    pub fn clear_post_step(&mut self) {
        self.post_step = None;
    }

    /// One physics step: advance every object, then resolve every collision,
    /// then run the post-step hook
    pub fn step(&mut self) {
        self.events.clear_step_events();
        let ctx = SceneContext {
            config: &self.config,
            viewport: &self.viewport,
        };

        let names = self.objects.names();
        for name in &names {
            let Some(slot) = self.objects.position(name) else {
                continue;
            };
            if let Some((object, others)) = self.objects.split_at_slot(slot) {
                object.advance(&ctx, others.shared(), &mut self.events);
            }
        }

        let mut absorbed = Vec::new();
        for name in &names {
            let Some(slot) = self.objects.position(name) else {
                continue;
            };
            let outcome = match self.objects.split_at_slot(slot) {
                Some((object, others)) => object.resolve_collision(&ctx, others, &mut self.events),
                None => CollisionOutcome::None,
            };
            if let CollisionOutcome::Absorbed { by } = outcome {
                self.objects.remove(name);
                absorbed.push((name, by));
            }
        }

        for (name, by) in absorbed {
            debug!(name = name.as_str(), by = by.as_str(), "object absorbed");
            self.events.add_object_event(ObjectEventKind::Absorbed, name);
        }

        if let Some(mut hook) = self.post_step.take() {
            hook(self);
            if self.post_step.is_none() {
                self.post_step = Some(hook);
            }
        }

        self.frame += 1;
        trace!(frame = self.frame, objects = self.objects.len(), "step");
    }

    /// Renders enabled objects: every trail first, then every body
    pub fn render(&self, canvas: &mut dyn Canvas) {
        let ctx = SceneContext {
            config: &self.config,
            viewport: &self.viewport,
        };
        let visible: Vec<&dyn SceneObject> = self.objects().filter(|object| object.is_enabled()).collect();
        for object in &visible {
            object.draw_trace(&ctx, canvas);
        }
        for object in &visible {
            object.draw(&ctx, canvas);
        }
    }

    /// One frame: a physics step unless paused, then a render
    pub fn draw(&mut self, canvas: &mut dyn Canvas) {
        if !self.config.paused {
            self.step();
        }
        self.render(canvas);
    }

    /// Names of every object flagged `flag`, in draw order
    pub fn names_with(&self, flag: ObjectFlags) -> Vec<String> {
        self.objects()
            .filter(|object| object.state().flags().contains(flag))
            .map(|object| object.name().to_owned())
            .collect()
    }
}
