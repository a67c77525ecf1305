use spring_lerp::{Spring, SpringConfig, SpringError};

#[test]
fn settle_time_gives_requested_convergence() {
    let config = SpringConfig::from_settle_time(0.5f64, 0.1).unwrap();
    let mut spring: Spring<f64> = Spring::new();
    spring.set_target(1.0);
    // 30 frames at 60 Hz is exactly the settle time.
    for _ in 0..30 {
        spring.update(config.factor(), 1.0 / 60.0);
    }
    assert!((spring.position() - 0.9).abs() < 1e-9, "position = {}", spring.position());
}

#[test]
fn settle_time_single_step() {
    let config = SpringConfig::from_settle_time(2.0f32, 0.25).unwrap();
    let mut spring: Spring<f32> = Spring::new();
    spring.set_target(-8.0);
    spring.update(config.factor(), 2.0);
    assert!((spring.position() - (-6.0)).abs() < 1e-4);
}

#[test]
fn settle_time_rejects_bad_input() {
    assert_eq!(SpringConfig::from_settle_time(0.0f32, 0.1), Err(SpringError::InvalidSettleTime));
    assert_eq!(SpringConfig::from_settle_time(-1.0f32, 0.1), Err(SpringError::InvalidSettleTime));
    assert_eq!(
        SpringConfig::from_settle_time(f32::INFINITY, 0.1),
        Err(SpringError::InvalidSettleTime)
    );
    assert_eq!(
        SpringConfig::from_settle_time(1.0f32, 0.0),
        Err(SpringError::InvalidRemainingFraction)
    );
    assert_eq!(
        SpringConfig::from_settle_time(1.0f32, 1.0),
        Err(SpringError::InvalidRemainingFraction)
    );
}

#[test]
fn settle_time_rejects_factor_overflow() {
    assert_eq!(
        SpringConfig::from_settle_time(1e-39f32, 0.1),
        Err(SpringError::InvalidSettleTime)
    );
    // Still representable in f64.
    let config = SpringConfig::from_settle_time(1e-39f64, 0.1).unwrap();
    let mut spring: Spring<f64> = Spring::at(1.0);
    spring.set_target(2.0);
    spring.update(config.factor(), 0.0);
    assert_eq!(spring.position(), 1.0);
    assert_eq!(spring.velocity(), 0.0);
}

#[test]
fn try_with_factor_validates() {
    assert!(SpringConfig::<f32>::new().try_with_factor(4.0).is_ok());
    assert_eq!(
        SpringConfig::<f32>::new().try_with_factor(-0.5),
        Err(SpringError::InvalidFactor)
    );
    assert_eq!(
        SpringConfig::<f32>::new().try_with_factor(f32::INFINITY),
        Err(SpringError::InvalidFactor)
    );
}

#[test]
fn try_premult_validates_timestep() {
    let config: SpringConfig<f64> = SpringConfig::new().with_factor(5.0);
    let premult = config.try_premult(0.2).unwrap();
    assert_eq!(premult.factor_dt(), 1.0);
    assert_eq!(config.try_premult(-0.1), Err(SpringError::InvalidTimestep));
    assert_eq!(config.try_premult(f64::NAN), Err(SpringError::InvalidTimestep));
}

#[test]
fn error_messages() {
    assert_eq!(
        SpringError::InvalidFactor.to_string(),
        "stiffness factor must be finite and non-negative"
    );
    assert_eq!(
        SpringError::SettleTimeDidNotConverge { iterations: 100 }.to_string(),
        "factor search did not converge after 100 iterations"
    );
}
