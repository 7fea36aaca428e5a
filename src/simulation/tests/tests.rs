use super::*;

const DT: f32 = 1.0 / 60.0;

fn spawn_sphere(scene: &mut SceneCore, x: f32) -> BodyId {
    scene
        .spawn_shape(ShapeKind::Sphere, Vec3::new(x, 0.0, 0.0), 1.0, None)
        .unwrap()
}

#[test]
fn queued_spawn_lands_on_next_frame() {
    let mut scene = SceneCore::new();
    scene
        .queue_spawn_named("cone", Vec3::new(1.0, 2.0, 3.0), 1.0, Some(0xff0000))
        .unwrap();

    assert_eq!(scene.pending_commands(), 1);
    assert_eq!(scene.total_shape_count(), 0);
    assert_eq!(scene.live_body_count(), 0);

    scene.frame(DT, 0.0);

    assert_eq!(scene.pending_commands(), 0);
    assert_eq!(scene.total_shape_count(), 1);
    assert_eq!(scene.shape_breakdown().get(ShapeKind::Cone), 1);
    assert_eq!(scene.frame_count(), 1);
}

#[test]
fn queue_rejects_unknown_kind_immediately() {
    let mut scene = SceneCore::new();
    let err = scene
        .queue_spawn_named("cube", Vec3::ZERO, 1.0, None)
        .unwrap_err();

    assert!(matches!(err, ShapeError::InvalidArgument(_)));
    assert_eq!(scene.pending_commands(), 0);
}

#[test]
fn commands_apply_even_when_dt_is_zero() {
    let mut scene = SceneCore::new();
    scene.queue(SceneCommand::SpawnRandom {
        kind: ShapeKind::Torus,
    });

    scene.frame(0.0, 0.0);

    assert_eq!(scene.live_body_count(), 1);
    assert_eq!(scene.shapes().shape_count(ShapeKind::Torus), 1);
}

#[test]
fn commands_apply_in_queue_order() {
    let mut scene = SceneCore::new();
    let id = spawn_sphere(&mut scene, 0.0);

    // Clear first, then spawn: the new shape survives.
    scene.queue(SceneCommand::Clear);
    scene.queue(SceneCommand::SpawnRandom {
        kind: ShapeKind::Octahedron,
    });
    assert_eq!(scene.apply_pending_commands(), 2);

    assert!(scene.body(id).is_none());
    assert_eq!(scene.live_body_count(), 1);
    assert_eq!(scene.shapes().live_instance_count(), 1);
}

#[test]
fn removing_unknown_body_does_not_count_as_applied() {
    let mut scene = SceneCore::new();
    scene.queue(SceneCommand::Remove { id: BodyId(999) });
    assert_eq!(scene.apply_pending_commands(), 0);
}

#[test]
fn initial_population_spawns_the_default_mix() {
    let mut scene = SceneCore::new();
    assert_eq!(scene.populate_initial_shapes(), 35);

    let breakdown = scene.shape_breakdown();
    assert_eq!(breakdown.get(ShapeKind::Sphere), 12);
    assert_eq!(breakdown.get(ShapeKind::Cone), 8);
    assert_eq!(breakdown.get(ShapeKind::Cylinder), 6);
    assert_eq!(breakdown.get(ShapeKind::Torus), 4);
    assert_eq!(breakdown.get(ShapeKind::Octahedron), 5);
    assert_eq!(breakdown.total(), 35);
    assert_eq!(scene.live_body_count(), 35);
}

#[test]
fn initial_population_stops_at_pool_capacity() {
    let config = SceneConfig {
        max_instances_per_type: 3,
        ..SceneConfig::default()
    };
    let mut scene = SceneCore::with_config(config).unwrap();

    assert_eq!(scene.populate_initial_shapes(), 15);
    assert_eq!(scene.shape_breakdown().get(ShapeKind::Sphere), 3);
}

#[test]
fn frames_keep_a_populated_scene_finite() {
    let mut scene = SceneCore::new();
    scene.populate_initial_shapes();

    for i in 0..300 {
        scene.frame(DT, i as f32 * DT);
    }

    for body in scene.physics().bodies() {
        assert!(body.is_finite(), "body {:?} went non-finite", body.id);
    }
}

#[test]
fn extract_aabbs_packs_one_record_per_body() {
    let mut scene = SceneCore::new();
    let a = spawn_sphere(&mut scene, -10.0);
    let b = spawn_sphere(&mut scene, 10.0);

    assert_eq!(scene.extract_aabbs(), 2);
    let buffer = scene.aabb_buffer();
    assert_eq!(buffer.len(), 2 * AABB_STRIDE);

    assert_eq!(buffer[0].to_bits(), a.0);
    assert_eq!(buffer[AABB_STRIDE].to_bits(), b.0);

    let aabb = scene.aabb(a).unwrap();
    assert_eq!(&buffer[1..4], &aabb.min.to_array());
    assert_eq!(&buffer[4..7], &aabb.max.to_array());

    scene.clear();
    assert_eq!(scene.extract_aabbs(), 0);
    assert!(scene.aabb_buffer().is_empty());
}

#[test]
fn extract_aabbs_keeps_large_ids_exact() {
    let mut scene = SceneCore::new();
    let mut ids = Vec::new();
    for x in [-20.0, 0.0, 20.0] {
        ids.push(spawn_sphere(&mut scene, x));
    }
    // Ids past 2^24 are not representable as f32 values.
    let big = (1u32 << 24) + 1;
    scene.physics_mut().body_mut(ids[1]).unwrap().id = BodyId(big);

    scene.extract_aabbs();
    let buffer = scene.aabb_buffer();
    assert_eq!(buffer[AABB_STRIDE].to_bits(), big);
}

#[test]
fn perf_stats_fill_only_when_enabled() {
    let mut scene = SceneCore::new();
    for x in [-5.0, 0.0, 5.0] {
        scene.queue(SceneCommand::Spawn {
            kind: ShapeKind::Sphere,
            position: Vec3::new(x, 0.0, 0.0),
            scale: 1.0,
            color: None,
        });
    }

    scene.frame(DT, 0.0);
    assert_eq!(scene.perf_stats().commands_applied(), 0);
    assert_eq!(scene.perf_stats().body_count(), 0);

    scene.enable_perf_metrics(true);
    scene.queue(SceneCommand::SpawnRandom {
        kind: ShapeKind::Cone,
    });
    scene.frame(DT, DT);

    let stats = scene.perf_stats();
    assert_eq!(stats.commands_applied(), 1);
    assert_eq!(stats.body_count(), 4);
    assert_eq!(stats.slot_count(), 4);
    assert_eq!(stats.pair_checks(), 6);
    assert!(stats.frame_ms() >= 0.0);

    scene.enable_perf_metrics(false);
    assert_eq!(scene.perf_stats().pair_checks(), 0);
}

#[test]
fn settings_update_world_and_config() {
    let mut scene = SceneCore::new();

    scene.set_gravity(0.0, -1.0, 0.0);
    scene.set_attraction_constant(0.5);
    scene.set_damping(0.9).unwrap();
    scene
        .set_bounds(Vec3::splat(-10.0), Vec3::splat(10.0))
        .unwrap();

    assert_eq!(scene.physics().gravity(), Vec3::new(0.0, -1.0, 0.0));
    assert_eq!(scene.physics().damping(), 0.9);
    assert_eq!(scene.config().attraction_constant, 0.5);
    assert_eq!(scene.config().bounds_max, [10.0; 3]);

    let reloaded = SceneConfig::from_json(&scene.config_json()).unwrap();
    assert_eq!(&reloaded, scene.config());
}

#[test]
fn invalid_settings_leave_state_alone() {
    let mut scene = SceneCore::new();

    assert!(scene.set_damping(1.5).is_err());
    assert!(scene.set_damping(0.0).is_err());
    assert!(scene
        .set_bounds(Vec3::splat(5.0), Vec3::splat(-5.0))
        .is_err());

    assert_eq!(scene.config(), &SceneConfig::default());
    assert_eq!(scene.physics().damping(), 0.98);
}

#[test]
fn config_json_builds_matching_scene() {
    let scene =
        SceneCore::from_config_json(r#"{"maxInstancesPerType": 4, "recycleSlots": true}"#).unwrap();

    assert_eq!(scene.shapes().max_instances_per_type(), 4);
    assert!(scene.shapes().recycles_slots());
    assert_eq!(scene.physics().damping(), 0.98);

    assert!(SceneCore::from_config_json(r#"{"damping": 2.0}"#).is_err());
    assert!(SceneCore::from_config_json("not json").is_err());
}

#[test]
fn dirty_mask_reports_touched_pools_once() {
    let mut scene = SceneCore::new();
    scene
        .spawn_shape(ShapeKind::Cylinder, Vec3::ZERO, 1.0, None)
        .unwrap();

    assert_eq!(scene.take_dirty_mask(), 1 << ShapeKind::Cylinder.id());
    assert_eq!(scene.take_dirty_mask(), 0);

    scene.frame(DT, 0.0);
    assert_eq!(scene.take_dirty_mask(), 1 << ShapeKind::Cylinder.id());
}

#[test]
fn body_at_picks_nearby_body() {
    let mut scene = SceneCore::new();
    let id = spawn_sphere(&mut scene, 15.0);

    assert_eq!(scene.body_at(Vec3::new(14.0, 0.0, 0.0), 2.0), Some(id));
    assert_eq!(scene.body_at(Vec3::new(-15.0, 0.0, 0.0), 2.0), None);
}
