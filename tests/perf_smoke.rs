use shapefield_engine::SceneCore;

#[test]
fn perf_smoke_frame() {
    let mut scene = SceneCore::new();
    scene.enable_perf_metrics(true);
    scene.populate_initial_shapes();

    scene.frame(1.0 / 60.0, 0.0);

    let stats = scene.perf_stats();
    assert!(stats.frame_ms() >= 0.0);
    assert!(stats.physics_ms() >= 0.0);
    assert_eq!(stats.body_count(), 35);
    assert_eq!(stats.pair_checks(), 35 * 34 / 2);
}
