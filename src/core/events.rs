use std::collections::VecDeque;

/// Types of contact a body can make during a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionKind {
    /// Bounced off a wall, the ground or the top of the world
    Wall,

    /// Elastic collision with another body
    Body,

    /// Swallowed by the anchor
    Absorbed,
}

/// A contact reported by a body during a step
#[derive(Debug, Clone, PartialEq)]
pub struct CollisionEvent {
    /// The type of contact
    pub kind: CollisionKind,

    /// The body that detected the contact
    pub object: String,

    /// The body it ran into, if any
    pub other: Option<String>,
}

impl CollisionEvent {
    pub fn wall(object: &str) -> Self {
        Self {
            kind: CollisionKind::Wall,
            object: object.to_owned(),
            other: None,
        }
    }

    pub fn between(kind: CollisionKind, object: &str, other: &str) -> Self {
        Self {
            kind,
            object: object.to_owned(),
            other: Some(other.to_owned()),
        }
    }
}

/// Types of object lifecycle events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectEventKind {
    /// An object has been registered (or replaced) in the scene
    Added,

    /// An object has been removed by the caller
    Removed,

    /// An object was eliminated by the anchor during a step
    Absorbed,
}

/// An event related to a single object
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectEvent {
    pub kind: ObjectEventKind,
    pub name: String,
}

/// Sounds the presentation layer is asked to play
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    WallHit,
    BallHit,
    Absorbed,
}

/// Side effects requested by the scene, drained by the presentation layer
#[derive(Debug, Default)]
pub struct EventQueue {
    collision_events: VecDeque<CollisionEvent>,
    object_events: VecDeque<ObjectEvent>,
    sound_cues: VecDeque<SoundCue>,
}

impl EventQueue {
    /// Creates a new empty event queue
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_collision_event(&mut self, event: CollisionEvent) {
        self.collision_events.push_back(event);
    }

    pub fn add_object_event(&mut self, kind: ObjectEventKind, name: &str) {
        self.object_events.push_back(ObjectEvent {
            kind,
            name: name.to_owned(),
        });
    }

    pub fn add_sound_cue(&mut self, cue: SoundCue) {
        self.sound_cues.push_back(cue);
    }

    /// Gets the next collision event from the queue
    pub fn next_collision_event(&mut self) -> Option<CollisionEvent> {
        self.collision_events.pop_front()
    }

    /// Gets the next object event from the queue
    pub fn next_object_event(&mut self) -> Option<ObjectEvent> {
        self.object_events.pop_front()
    }

    /// Takes every pending sound cue, oldest first
    pub fn drain_sound_cues(&mut self) -> Vec<SoundCue> {
        self.sound_cues.drain(..).collect()
    }

    pub fn collision_events(&self) -> impl Iterator<Item = &CollisionEvent> {
        self.collision_events.iter()
    }

    pub fn object_events(&self) -> impl Iterator<Item = &ObjectEvent> {
        self.object_events.iter()
    }

    pub fn sound_cues(&self) -> impl Iterator<Item = &SoundCue> {
        self.sound_cues.iter()
    }

    /// Gets all collision events of a specific kind
    pub fn collision_events_of_kind(&self, kind: CollisionKind) -> Vec<&CollisionEvent> {
        self.collision_events
            .iter()
            .filter(|e| e.kind == kind)
            .collect()
    }

    /// Gets all collision events involving a specific object
    pub fn collision_events_for(&self, name: &str) -> Vec<&CollisionEvent> {
        self.collision_events
            .iter()
            .filter(|e| e.object == name || e.other.as_deref() == Some(name))
            .collect()
    }

    /// Returns whether the queue is empty
    pub fn is_empty(&self) -> bool {
        self.collision_events.is_empty() && self.object_events.is_empty() && self.sound_cues.is_empty()
    }

    /// Takes every pending object event, oldest first
    pub fn drain_object_events(&mut self) -> Vec<ObjectEvent> {
        self.object_events.drain(..).collect()
    }

    /// Drops the previous frame's collision events and sound cues. Object
    /// events stay queued until they are taken.
    pub fn clear_step_events(&mut self) {
        self.collision_events.clear();
        self.sound_cues.clear();
    }

    /// Clears all events from the queue
    pub fn clear(&mut self) {
        self.collision_events.clear();
        self.object_events.clear();
        self.sound_cues.clear();
    }
}
