use spring_lerp::{NoOpStepObserver, Spring, SpringConfig, SpringGroup, StepObserver, Vec2, VecSpring};

#[derive(Default)]
struct CountingObserver {
    premults: usize,
    updates: Vec<usize>,
    completed: usize,
    last_decay: f64,
}

impl StepObserver for CountingObserver {
    fn on_premult(&mut self, _factor_dt: f64, decay: f64) {
        self.premults += 1;
        self.last_decay = decay;
    }

    fn on_spring_updated(&mut self, index: usize) {
        self.updates.push(index);
    }

    fn on_step_complete(&mut self) {
        self.completed += 1;
    }
}

#[test]
fn group_step_matches_individual_updates() {
    let config: SpringConfig<f32> = SpringConfig::new().with_factor(8.0);
    let mut group = SpringGroup::new();
    let mut loose = [
        VecSpring::toward(Vec2::new(0.0f32, 0.0), Vec2::new(10.0, 5.0)),
        VecSpring::toward(Vec2::new(-4.0, 2.0), Vec2::new(0.0, 0.0)),
    ];
    for s in &loose {
        group.add(*s);
    }

    for _ in 0..120 {
        group.step(1.0 / 60.0, &config, &mut NoOpStepObserver);
        for s in loose.iter_mut() {
            s.update(8.0, 1.0 / 60.0);
        }
    }

    assert_eq!(group.spring(0), &loose[0]);
    assert_eq!(group.spring(1), &loose[1]);
}

#[test]
fn observer_sees_every_spring() {
    let config: SpringConfig<f64> = SpringConfig::new();
    let mut group: SpringGroup<Vec2<f64>> = SpringGroup::with_capacity(3);
    for i in 0..3 {
        group.add(VecSpring::at(Vec2::new(i as f64, 0.0)));
    }
    let mut observer = CountingObserver::default();
    group.step(0.1, &config, &mut observer);
    group.step(0.1, &config, &mut observer);

    assert_eq!(observer.premults, 2);
    assert_eq!(observer.completed, 2);
    assert_eq!(observer.updates, vec![0, 1, 2, 0, 1, 2]);
    assert!((observer.last_decay - (-1.0f64).exp()).abs() < 1e-12);
}

#[test]
fn group_settles_on_shared_target() {
    let config = SpringConfig::from_settle_time(0.5f32, 0.1).unwrap();
    let mut group = SpringGroup::new();
    group.add(VecSpring::at(Vec2::new(0.0f32, 0.0)));
    group.add(VecSpring::at(Vec2::new(100.0, -100.0)));
    group.set_all_targets(Vec2::new(20.0, 20.0));
    assert!(!group.is_settled(0.01, 0.01));

    for _ in 0..600 {
        group.step(1.0 / 60.0, &config, &mut NoOpStepObserver);
    }
    assert!(group.is_settled(0.01, 0.01));
    for p in group.positions() {
        assert!((p.x - 20.0).abs() < 0.01);
        assert!((p.y - 20.0).abs() < 0.01);
    }
}

#[test]
fn step_premult_shares_decay_with_outside_springs() {
    let config: SpringConfig<f32> = SpringConfig::new().with_factor(6.0);
    let premult = config.premult(1.0 / 50.0);
    let mut by_config = SpringGroup::new();
    let mut by_premult = SpringGroup::new();
    let mut outside: Spring<f32> = Spring::new();
    by_config.add(VecSpring::toward(Vec2::new(0.0f32, 0.0), Vec2::new(4.0, -4.0)));
    by_premult.add(VecSpring::toward(Vec2::new(0.0f32, 0.0), Vec2::new(4.0, -4.0)));
    outside.set_target(4.0);

    let mut observer = CountingObserver::default();
    for _ in 0..50 {
        by_config.step(1.0 / 50.0, &config, &mut NoOpStepObserver);
        by_premult.step_premult(&premult, &mut observer);
        outside.update_premult(&premult);
    }

    assert_eq!(by_config.spring(0), by_premult.spring(0));
    assert_eq!(by_premult.spring(0).position().x, outside.position());
    assert_eq!(observer.premults, 50);
    assert_eq!(observer.last_decay, premult.decay() as f64);
}

#[test]
fn add_remove_and_targets() {
    let mut group: SpringGroup<Vec2<f32>> = SpringGroup::new();
    assert!(group.is_empty());
    let a = group.add(VecSpring::new());
    let b = group.add(VecSpring::at(Vec2::new(1.0, 1.0)));
    assert_eq!((a, b), (0, 1));
    assert_eq!(group.len(), 2);

    group.set_target(b, Vec2::new(3.0, 3.0));
    assert_eq!(group.spring(b).target(), Vec2::new(3.0, 3.0));

    group.spring_mut(a).force_position(Vec2::new(-1.0, 0.0));
    assert_eq!(group.spring(a).position(), Vec2::new(-1.0, 0.0));

    let removed = group.remove(a);
    assert_eq!(removed.position(), Vec2::new(-1.0, 0.0));
    assert_eq!(group.len(), 1);
    assert_eq!(group.spring(0).target(), Vec2::new(3.0, 3.0));

    group.clear();
    assert!(group.is_empty());
}
