use approx::{assert_abs_diff_eq, assert_relative_eq};
use gravity_sandbox::{
    core::{hooks, CollisionEvent, CollisionKind, ObjectEventKind, SoundCue, SpawnOptions, ANCHOR_NAME},
    error::SandboxError,
    math::{Circle, Point, Vector2},
    render::DrawCommand,
    Ball, BallOptions, ForceMode, ObjectFlags, RecordingCanvas, Scene, SceneConfig, SceneObject,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

// 1000 x 600 world at scale 1
fn scene_with(config: SceneConfig) -> Scene {
    Scene::with_config(1004.0, 604.0, config).unwrap()
}

fn weightless() -> Scene {
    scene_with(SceneConfig { gravity: 0.0, ..SceneConfig::default() })
}

fn space() -> Scene {
    scene_with(SceneConfig::for_mode(ForceMode::SpaceGravity))
}

fn ball(name: &str, options: BallOptions) -> Box<dyn SceneObject> {
    Box::new(Ball::new(name, options).unwrap())
}

fn resting(name: &str, x: f64, y: f64) -> Box<dyn SceneObject> {
    ball(name, BallOptions { center: Point::new(x, y), ..BallOptions::default() })
}

#[test]
fn test_trail_keeps_last_positions() {
    let mut scene = weightless();
    scene.add(ball(
        "b",
        BallOptions {
            center: Point::new(100.0, 100.0),
            speed: 5.0,
            trace: true,
            trace_limit: 3,
            ..BallOptions::default()
        },
    ));

    // Construction already moved the ball to x = 105
    assert_relative_eq!(scene.get("b").unwrap().position().x, 105.0);

    for _ in 0..5 {
        scene.step();
    }
    let trail: Vec<f64> = scene.get("b").unwrap().trail().points().map(|p| p.x).collect();
    assert_eq!(trail.len(), 3);
    assert_relative_eq!(trail[0], 115.0);
    assert_relative_eq!(trail[1], 120.0);
    assert_relative_eq!(trail[2], 125.0);
    assert_relative_eq!(scene.get("b").unwrap().position().x, 130.0);
}

#[test]
fn test_untraced_ball_records_nothing() {
    let mut scene = weightless();
    scene.add(ball("b", BallOptions { center: Point::new(100.0, 100.0), speed: 1.0, ..BallOptions::default() }));
    scene.step();
    assert!(scene.get("b").unwrap().trail().is_empty());
}

#[test]
fn test_surface_gravity_accelerates_down() {
    let mut scene = scene_with(SceneConfig::default());
    scene.add(resting("b", 500.0, 300.0));
    scene.step();
    scene.step();
    let b = scene.get_ball("b").unwrap();
    assert_relative_eq!(b.velocity().y, -0.8, epsilon = 1e-12);
    assert_relative_eq!(b.position().y, 300.0 - 0.4 - 0.8, epsilon = 1e-12);
}

#[test]
fn test_ground_bounce_queues_event_and_sound() {
    let mut scene = scene_with(SceneConfig { play_sound: true, ..SceneConfig::default() });
    scene.add(ball(
        "b",
        BallOptions { center: Point::new(500.0, 3.0), speed: 5.0, angle: 270.0, ..BallOptions::default() },
    ));
    scene.step();

    let b = scene.get_ball("b").unwrap();
    assert_relative_eq!(b.position().y, 5.0);
    assert_relative_eq!(b.velocity().y, 5.4 * 0.9, epsilon = 1e-9);
    assert_eq!(scene.events().collision_events_of_kind(CollisionKind::Wall).len(), 1);
    assert_eq!(scene.events_mut().drain_sound_cues(), vec![SoundCue::WallHit]);
}

#[test]
fn test_quiet_scene_queues_no_sound() {
    let mut scene = scene_with(SceneConfig::default());
    scene.add(ball(
        "b",
        BallOptions { center: Point::new(500.0, 3.0), speed: 5.0, angle: 270.0, ..BallOptions::default() },
    ));
    scene.step();
    assert_eq!(scene.events().collision_events().count(), 1);
    assert_eq!(scene.events().sound_cues().count(), 0);
}

#[test]
fn test_anchor_absorbs_touching_body() {
    let mut scene = space();
    scene.spawn_anchor(2000.0).unwrap();
    scene.add(resting("doomed", 510.0, 300.0));
    scene.add(resting("safe", 100.0, 100.0));

    scene.step();

    assert!(!scene.contains("doomed"));
    assert!(scene.contains(ANCHOR_NAME));
    assert!(scene.contains("safe"));
    assert_eq!(scene.len(), 2);
    assert!(scene
        .events()
        .object_events()
        .any(|e| e.kind == ObjectEventKind::Absorbed && e.name == "doomed"));
    let absorbed = scene.events().collision_events_of_kind(CollisionKind::Absorbed);
    assert_eq!(absorbed.len(), 1);
    assert_eq!(absorbed[0].other.as_deref(), Some(ANCHOR_NAME));
}

#[test]
fn test_surface_mode_anchor_only_bounces() {
    let mut scene = weightless();
    scene.add(ball(
        ANCHOR_NAME,
        BallOptions { center: Point::new(500.0, 300.0), radius: 15.0, mass: 2000.0, ..BallOptions::default() },
    ));
    scene.add(resting("b", 510.0, 300.0));
    scene.step();
    assert!(scene.contains("b"));
    assert_eq!(scene.events().collision_events_of_kind(CollisionKind::Body).len(), 1);
}

#[test]
fn test_recenter_translates_body_and_trail() {
    let mut scene = space();
    scene.add(ball(
        "target",
        BallOptions { center: Point::new(497.0, 302.0), trace: true, ..BallOptions::default() },
    ));
    scene.add(ball(
        "other",
        BallOptions { center: Point::new(100.0, 100.0), trace: true, ..BallOptions::default() },
    ));
    scene.set_gravity(0.0);
    scene.step();

    let offset = scene.recenter_on("target").unwrap().unwrap();
    assert_relative_eq!(offset.x, 3.0, epsilon = 1e-9);
    assert_relative_eq!(offset.y, -2.0, epsilon = 1e-9);

    let target = scene.get("target").unwrap();
    assert_relative_eq!(target.position().x, 500.0, epsilon = 1e-9);
    assert_relative_eq!(target.position().y, 300.0, epsilon = 1e-9);
    let trail: Vec<Point> = target.trail().points().copied().collect();
    assert_relative_eq!(trail[0].x, 500.0, epsilon = 1e-9);
    assert_relative_eq!(trail[0].y, 300.0, epsilon = 1e-9);

    let other = scene.get("other").unwrap();
    assert_relative_eq!(other.position().x, 103.0, epsilon = 1e-9);
    assert_relative_eq!(other.trail().points().next().unwrap().y, 98.0, epsilon = 1e-9);

    // Already centred
    assert_eq!(scene.recenter_on("target").unwrap(), None);
    assert!(matches!(scene.recenter_on("ghost"), Err(SandboxError::ObjectNotFound(_))));
}

#[test]
fn test_lock_anchor_keeps_anchor_centred() {
    let mut scene = space();
    scene.set_post_step(hooks::lock_anchor());
    scene.spawn_anchor(2000.0).unwrap();
    scene.add(ball("heavy", BallOptions { center: Point::new(300.0, 300.0), mass: 1.0e5, ..BallOptions::default() }));

    for _ in 0..3 {
        scene.step();
        let sun = scene.get(ANCHOR_NAME).unwrap().position();
        assert_abs_diff_eq!(sun.x, 500.0, epsilon = 1e-9);
        assert_abs_diff_eq!(sun.y, 300.0, epsilon = 1e-9);
    }
    assert_eq!(scene.frame_count(), 3);
}

#[test]
fn test_hide_and_show() {
    let mut scene = weightless();
    scene.add(ball("a", BallOptions { center: Point::new(100.0, 100.0), speed: 1.0, ..BallOptions::default() }));
    scene.add(resting("b", 300.0, 100.0));

    scene.hide("a").unwrap();
    let mut canvas = RecordingCanvas::new();
    scene.draw(&mut canvas);
    assert_eq!(canvas.commands().len(), 1);

    // Hidden objects are still simulated
    assert_relative_eq!(scene.get("a").unwrap().position().x, 102.0);

    scene.show("a").unwrap();
    canvas.clear();
    scene.render(&mut canvas);
    assert_eq!(canvas.commands().len(), 2);

    assert!(matches!(scene.hide("ghost"), Err(SandboxError::ObjectNotFound(_))));
    assert!(matches!(scene.show("ghost"), Err(SandboxError::ObjectNotFound(_))));

    scene.hide_all_but_one("b");
    assert!(!scene.get("a").unwrap().is_enabled());
    assert!(scene.get("b").unwrap().is_enabled());
}

#[test]
fn test_remove_missing_is_noop() {
    let mut scene = weightless();
    scene.add(resting("a", 100.0, 100.0));
    scene.remove("ghost");
    assert_eq!(scene.len(), 1);
    scene.remove("a");
    assert!(scene.is_empty());
}

#[test]
fn test_readd_replaces_in_place() {
    let mut scene = weightless();
    scene.add(resting("a", 100.0, 100.0));
    scene.add(resting("b", 200.0, 100.0));
    scene.add(resting("a", 400.0, 100.0));
    assert_eq!(scene.names(), vec!["a", "b"]);
    assert_relative_eq!(scene.get("a").unwrap().position().x, 400.0);
}

#[test]
fn test_update_by_key_requires_matching_name() {
    let mut scene = weightless();
    scene.add(resting("a", 100.0, 100.0));
    assert!(scene.update_by_key("a", resting("a", 150.0, 100.0)).is_ok());
    assert_relative_eq!(scene.get("a").unwrap().position().x, 150.0);
    assert!(matches!(
        scene.update_by_key("a", resting("b", 150.0, 100.0)),
        Err(SandboxError::InvalidParameter(_))
    ));
}

#[test]
fn test_update_with_condition() {
    let mut scene = weightless();
    scene.add(resting("left-1", 100.0, 100.0));
    scene.add(resting("left-2", 200.0, 100.0));
    scene.add(resting("right", 800.0, 100.0));

    let touched = scene.update_with_condition(
        |object| object.position().x < 500.0,
        |object| {
            if let Some(ball) = object.as_ball_mut() {
                ball.set_velocity(Vector2::new(0.0, 1.0));
            }
        },
    );
    assert_eq!(touched, 2);
    assert_eq!(scene.get_ball("left-2").unwrap().velocity(), Vector2::new(0.0, 1.0));
    assert_eq!(scene.get_ball("right").unwrap().velocity(), Vector2::zero());
}

#[test]
fn test_pause_freezes_physics_but_renders() {
    let mut scene = weightless();
    scene.add(ball("a", BallOptions { center: Point::new(100.0, 100.0), speed: 2.0, ..BallOptions::default() }));
    scene.set_paused(true);

    let mut canvas = RecordingCanvas::new();
    scene.draw(&mut canvas);
    scene.draw(&mut canvas);

    assert_eq!(scene.frame_count(), 0);
    assert_relative_eq!(scene.get("a").unwrap().position().x, 102.0);
    assert_eq!(canvas.commands().len(), 2);
}

#[test]
fn test_trails_render_before_bodies() {
    let mut scene = weightless();
    for (name, x) in [("a", 100.0), ("b", 300.0)] {
        scene.add(ball(
            name,
            BallOptions { center: Point::new(x, 100.0), speed: 3.0, trace: true, ..BallOptions::default() },
        ));
    }
    scene.step();
    scene.step();

    let mut canvas = RecordingCanvas::new();
    scene.render(&mut canvas);

    let is_dot = |command: &DrawCommand| matches!(command, DrawCommand::Circle { radius, .. } if *radius == 1.0);
    let commands = canvas.commands();
    assert_eq!(commands.iter().filter(|c| is_dot(c)).count(), 4);
    let last_dot = commands.iter().rposition(|c| is_dot(c)).unwrap();
    let first_body = commands.iter().position(|c| !is_dot(c)).unwrap();
    assert!(last_dot < first_body);
}

#[test]
fn test_trail_points_off_screen_are_skipped() {
    let mut scene = weightless();
    scene.add(ball(
        "b",
        BallOptions { center: Point::new(100.0, 100.0), trace: true, ..BallOptions::default() },
    ));
    scene.step();
    scene.recenter_on("b").unwrap();
    scene.update_with_condition(|_| true, |object| object.translate(Vector2::new(-2000.0, 0.0)));

    let mut canvas = RecordingCanvas::new();
    scene.render(&mut canvas);
    assert!(!canvas
        .commands()
        .iter()
        .any(|c| matches!(c, DrawCommand::Circle { radius, .. } if *radius == 1.0)));
}

#[test]
fn test_anchor_drawn_as_gradient() {
    let mut scene = space();
    scene.spawn_anchor(2000.0).unwrap();
    let mut canvas = RecordingCanvas::new();
    scene.render(&mut canvas);
    assert!(canvas
        .commands()
        .iter()
        .any(|c| matches!(c, DrawCommand::RadialGradient { radius, .. } if *radius == 15.0)));
}

#[test]
fn test_velocity_overlay() {
    let mut scene = scene_with(SceneConfig {
        gravity: 0.0,
        show_velocity_vector: true,
        ..SceneConfig::default()
    });
    scene.add(ball("a", BallOptions { center: Point::new(100.0, 100.0), speed: 2.0, ..BallOptions::default() }));
    let mut canvas = RecordingCanvas::new();
    scene.render(&mut canvas);

    let arrow = canvas
        .commands()
        .iter()
        .find_map(|c| match c {
            DrawCommand::Arrow { from, to, .. } => Some((*from, *to)),
            _ => None,
        })
        .unwrap();
    // radius 5 * speed 2 * 2
    assert_relative_eq!(Vector2::between(arrow.0, arrow.1).magnitude(), 20.0, epsilon = 1.0);
}

#[test]
fn test_velocity_overlay_length_follows_launch_speed() {
    let mut scene = scene_with(SceneConfig {
        gravity: 0.0,
        show_velocity_vector: true,
        ..SceneConfig::default()
    });
    scene.add(ball("a", BallOptions { center: Point::new(100.0, 100.0), speed: 2.0, ..BallOptions::default() }));
    scene.get_ball_mut("a").unwrap().set_velocity(Vector2::new(0.0, 6.0));
    let mut canvas = RecordingCanvas::new();
    scene.render(&mut canvas);

    let (from, to) = canvas
        .commands()
        .iter()
        .find_map(|c| match c {
            DrawCommand::Arrow { from, to, .. } => Some((*from, *to)),
            _ => None,
        })
        .unwrap();
    // Points along the current velocity, sized by the launch speed
    let arrow = Vector2::between(from, to);
    assert_relative_eq!(arrow.magnitude(), 20.0, epsilon = 1.0);
    assert!(arrow.y < 0.0, "screen y grows downward");
    assert_abs_diff_eq!(arrow.x, 0.0, epsilon = 1.0);
}

#[test]
fn test_spawning_is_reproducible() {
    let mut first = scene_with(SceneConfig::default());
    let mut second = scene_with(SceneConfig::default());
    first.populate(&mut StdRng::seed_from_u64(1), 10).unwrap();
    second.populate(&mut StdRng::seed_from_u64(1), 10).unwrap();

    assert_eq!(first.len(), 10);
    assert_eq!(first.names(), (0..10).map(|i| format!("ball-{}", i)).collect::<Vec<_>>());
    for name in first.names() {
        let a = first.get_ball(&name).unwrap();
        let b = second.get_ball(&name).unwrap();
        assert_eq!(a.position(), b.position());
        assert!(a.radius() >= 3.0 && a.radius() <= 15.0);
        assert_relative_eq!(a.mass(), a.radius() * 10.0);
        assert!(a.launch_speed() < 5.0);
        assert_eq!(a.trail().limit(), 100);
    }
    assert!(first.anchor().is_none());
}

#[test]
fn test_space_populate_adds_anchor() {
    let mut scene = space();
    scene.populate(&mut StdRng::seed_from_u64(3), 5).unwrap();
    assert_eq!(scene.len(), 6);
    let anchor = scene.anchor().unwrap();
    assert_eq!(anchor.name(), ANCHOR_NAME);
    assert_relative_eq!(scene.get_ball(ANCHOR_NAME).unwrap().mass(), 2000.0);
}

#[test]
fn test_spawn_generates_unique_names() {
    let mut scene = weightless();
    let mut rng = StdRng::seed_from_u64(11);
    let a = scene.spawn_ball(&mut rng, SpawnOptions::default()).unwrap();
    let b = scene.spawn_ball(&mut rng, SpawnOptions::default()).unwrap();
    assert!(a.starts_with("ball-"));
    assert_ne!(a, b);
    assert!(scene
        .events()
        .object_events()
        .filter(|e| e.kind == ObjectEventKind::Added)
        .count()
        >= 2);
}

#[test]
fn test_spawn_on_occupied_spot_fails() {
    let mut scene = weightless();
    scene.add(ball("block", BallOptions { center: Point::new(500.0, 300.0), radius: 20.0, ..BallOptions::default() }));
    assert!(!scene.can_place(&Circle::new(Point::new(510.0, 300.0), 3.0)));
    assert!(scene.can_place(&Circle::new(Point::new(100.0, 300.0), 3.0)));

    let result = scene.spawn_ball(&mut StdRng::seed_from_u64(5), SpawnOptions::at(Point::new(505.0, 300.0)));
    assert_eq!(result, Err(SandboxError::PlacementFailed { attempts: 1 }));
    assert_eq!(scene.len(), 1);
}

#[test]
fn test_spawn_gives_up_on_full_world() {
    let mut scene = scene_with(SceneConfig { placement_attempts: 5, ..SceneConfig::default() });
    scene.add(ball("world", BallOptions { center: Point::new(500.0, 300.0), radius: 2000.0, ..BallOptions::default() }));
    let result = scene.spawn_ball(&mut StdRng::seed_from_u64(5), SpawnOptions::default());
    assert_eq!(result, Err(SandboxError::PlacementFailed { attempts: 5 }));
}

#[test]
fn test_anchor_mass_controls_size() {
    let mut scene = space();
    assert!(matches!(scene.set_anchor_mass(3000.0), Err(SandboxError::ObjectNotFound(_))));

    scene.spawn_anchor(2000.0).unwrap();
    scene.set_anchor_mass(6000.0).unwrap();
    let anchor = scene.get_ball(ANCHOR_NAME).unwrap();
    assert_relative_eq!(anchor.radius(), 25.0);
    assert_relative_eq!(anchor.mass(), 6000.0);

    scene.set_anchor_mass(3000.0).unwrap();
    assert_relative_eq!(scene.get_ball(ANCHOR_NAME).unwrap().radius(), 15.0);
}

#[test]
fn test_bulk_edits_skip_anchor() {
    let mut scene = space();
    scene.spawn_anchor(2000.0).unwrap();
    scene.add(resting("a", 100.0, 100.0));
    scene.add(resting("b", 200.0, 100.0));

    assert_eq!(scene.set_body_mass(70.0).unwrap(), 2);
    assert_relative_eq!(scene.get_ball("a").unwrap().mass(), 70.0);
    assert_relative_eq!(scene.get_ball(ANCHOR_NAME).unwrap().mass(), 2000.0);
    assert!(scene.set_body_mass(-1.0).is_err());

    scene.set_trail_limit(7);
    assert_eq!(scene.config().trail_limit, 7);
    assert!(scene.objects().all(|object| object.trail().limit() == 7));
}

#[test]
fn test_stop_clears_and_resumes() {
    let mut scene = weightless();
    scene.add(resting("a", 100.0, 100.0));
    scene.set_paused(true);
    scene.stop();
    assert!(scene.is_empty());
    assert!(!scene.is_paused());
    assert!(scene
        .events()
        .object_events()
        .any(|e| e.kind == ObjectEventKind::Removed && e.name == "a"));
}

#[test]
fn test_lookup_errors() {
    let scene = weightless();
    assert!(matches!(scene.get("ghost"), Err(SandboxError::ObjectNotFound(_))));
    assert!(matches!(scene.get_ball("ghost"), Err(SandboxError::ObjectNotFound(_))));
    assert!(Scene::new(3.0, 3.0, 1000.0, 2.0).is_err());
}

#[test]
fn test_object_events_outlive_steps() {
    let mut scene = weightless();
    scene.add(resting("a", 100.0, 100.0));
    scene.step();
    scene.step();

    let added = scene.events_mut().next_object_event().unwrap();
    assert_eq!(added.kind, ObjectEventKind::Added);
    assert_eq!(added.name, "a");
    assert!(scene.events_mut().next_object_event().is_none());

    scene.add(resting("b", 300.0, 100.0)).remove("b");
    scene.step();
    let kinds: Vec<ObjectEventKind> = scene.events_mut().drain_object_events().into_iter().map(|e| e.kind).collect();
    assert_eq!(kinds, vec![ObjectEventKind::Added, ObjectEventKind::Removed]);
}

#[test]
fn test_collision_events_reset_each_step() {
    let mut scene = scene_with(SceneConfig { play_sound: true, ..SceneConfig::default() });
    scene.add(ball(
        "b",
        BallOptions { center: Point::new(500.0, 3.0), speed: 5.0, angle: 270.0, ..BallOptions::default() },
    ));
    scene.add(resting("idle", 200.0, 300.0));
    scene.step();

    assert_eq!(scene.events().collision_events_for("b").len(), 1);
    assert!(scene.events().collision_events_for("idle").is_empty());
    assert_eq!(scene.events().sound_cues().count(), 1);

    // Rising away from the ground: nothing new, the old bounce is gone
    scene.step();
    assert!(scene.events().collision_events_for("b").is_empty());
    assert_eq!(scene.events().sound_cues().count(), 0);
}

#[test]
fn test_next_collision_event_pops_in_order() {
    let mut scene = weightless();
    scene.add(ball(
        "left",
        BallOptions { center: Point::new(8.0, 300.0), speed: 5.0, angle: 180.0, ..BallOptions::default() },
    ));
    scene.add(ball(
        "right",
        BallOptions { center: Point::new(992.0, 300.0), speed: 5.0, ..BallOptions::default() },
    ));
    scene.step();

    assert_eq!(scene.events_mut().next_collision_event(), Some(CollisionEvent::wall("left")));
    assert_eq!(scene.events_mut().next_collision_event(), Some(CollisionEvent::wall("right")));
    assert_eq!(scene.events_mut().next_collision_event(), None);
}

#[test]
fn test_clear_post_step_stops_hook() {
    use std::cell::Cell;
    use std::rc::Rc;

    let mut scene = weightless();
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    scene.set_post_step(Box::new(move |_| counter.set(counter.get() + 1)));

    scene.step();
    scene.step();
    assert_eq!(calls.get(), 2);

    scene.clear_post_step();
    scene.step();
    assert_eq!(calls.get(), 2);
    assert_eq!(scene.frame_count(), 3);
}

#[test]
fn test_follow_centres_named_object() {
    let mut scene = weightless();
    scene.set_post_step(hooks::follow("lead"));

    // Nothing to follow yet
    scene.add(resting("other", 100.0, 100.0));
    scene.step();
    assert_relative_eq!(scene.get("other").unwrap().position().x, 100.0);

    scene.add(ball("lead", BallOptions { center: Point::new(400.0, 250.0), speed: 3.0, ..BallOptions::default() }));
    scene.step();
    let lead = scene.get("lead").unwrap().position();
    assert_relative_eq!(lead.x, 500.0, epsilon = 1e-9);
    assert_relative_eq!(lead.y, 300.0, epsilon = 1e-9);
    // lead moved to x = 406 before being pulled back by 94
    let other = scene.get("other").unwrap().position();
    assert_relative_eq!(other.x, 194.0, epsilon = 1e-9);
    assert_relative_eq!(other.y, 150.0, epsilon = 1e-9);

    scene.remove("lead");
    scene.step();
    assert_relative_eq!(scene.get("other").unwrap().position().x, 194.0, epsilon = 1e-9);
}

#[test]
fn test_names_with_flag() {
    let mut scene = weightless();
    scene.add(ball("traced", BallOptions { center: Point::new(100.0, 100.0), trace: true, ..BallOptions::default() }));
    scene.add(resting("plain", 300.0, 100.0));

    assert_eq!(scene.names_with(ObjectFlags::TRACE), vec!["traced".to_owned()]);
    assert!(scene.names_with(ObjectFlags::ANCHOR).is_empty());

    scene.get_ball_mut("plain").unwrap().set_trace(true);
    assert_eq!(scene.names_with(ObjectFlags::TRACE), vec!["traced".to_owned(), "plain".to_owned()]);

    scene.get_ball_mut("plain").unwrap().set_anchor(true);
    assert_eq!(scene.names_with(ObjectFlags::ANCHOR), vec!["plain".to_owned()]);
    assert_eq!(scene.anchor().unwrap().name(), "plain");

    scene.get_ball_mut("plain").unwrap().set_anchor(false);
    assert!(scene.anchor().is_none());
}
