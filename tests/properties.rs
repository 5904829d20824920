//! Randomized invariants of the step pipeline.

use proptest::prelude::*;
use simple_physics::{Ball, BoundaryMode, Engine, EngineConfig, Vec2};

const WIDTH: f64 = 400.0;
const HEIGHT: f64 = 600.0;

fn zero_gravity(boundary: BoundaryMode) -> EngineConfig {
    EngineConfig {
        gravity: Vec2::ZERO,
        boundary,
        ..EngineConfig::default()
    }
}

/// A dynamic ball somewhere inside the world with a moderate velocity.
fn dynamic_ball(restitution: std::ops::RangeInclusive<f64>) -> impl Strategy<Value = Ball> {
    (
        30.0..370.0f64,
        30.0..570.0f64,
        5.0..25.0f64,
        -300.0..300.0f64,
        -300.0..300.0f64,
        0.5..10.0f64,
        restitution,
    )
        .prop_map(|(x, y, r, vx, vy, mass, e)| Ball::new(x, y, r, vx, vy, "#00FFFF", mass, e))
}

fn momentum(balls: &[Ball]) -> Vec2 {
    balls.iter().fold(Vec2::ZERO, |total, ball| total + ball.momentum())
}

proptest! {
    #[test]
    fn kinetic_energy_never_grows_without_gravity(
        balls in prop::collection::vec(dynamic_ball(0.0..=1.0), 2..6),
        steps in 1usize..60,
    ) {
        let mut engine = Engine::with_config(
            WIDTH,
            HEIGHT,
            balls,
            Vec::new(),
            zero_gravity(BoundaryMode::Walls),
        );
        let mut energy = engine.kinetic_energy();
        for _ in 0..steps {
            engine.update();
            let next = engine.kinetic_energy();
            prop_assert!(
                next <= energy * (1.0 + 1e-9) + 1e-9,
                "energy rose from {} to {}",
                energy,
                next
            );
            energy = next;
        }
    }

    #[test]
    fn elastic_pair_conserves_momentum(
        (x, y) in (150.0..250.0f64, 250.0..350.0f64),
        offset in (-30.0..30.0f64, -30.0..30.0f64),
        velocities in (-60.0..60.0f64, -60.0..60.0f64, -60.0..60.0f64, -60.0..60.0f64),
        masses in (0.5..10.0f64, 0.5..10.0f64),
    ) {
        let (vax, vay, vbx, vby) = velocities;
        let balls = vec![
            Ball::new(x, y, 20.0, vax, vay, "#FF0000", masses.0, 1.0),
            Ball::new(x + offset.0, y + offset.1, 20.0, vbx, vby, "#0000FF", masses.1, 1.0),
        ];
        let before = momentum(&balls);
        let mut engine = Engine::with_config(
            WIDTH,
            HEIGHT,
            balls,
            Vec::new(),
            zero_gravity(BoundaryMode::ClampOnly),
        );
        engine.update();
        let after = engine.momentum();

        let tolerance = 1e-9 * (1.0 + before.magnitude());
        prop_assert!((after - before).magnitude() < tolerance, "{:?} -> {:?}", before, after);
    }

    #[test]
    fn fixed_ball_is_never_written(
        anchor in (20.0..380.0f64, 20.0..580.0f64, 5.0..40.0f64, 0.0..2.0f64),
        balls in prop::collection::vec(dynamic_ball(0.0..=2.0), 1..6),
    ) {
        let fixed = Ball::fixed(anchor.0, anchor.1, anchor.2, "#888888", anchor.3);
        let mut all = vec![fixed.clone()];
        all.extend(balls);
        let mut engine = Engine::new(WIDTH, HEIGHT, all, Vec::new());
        for _ in 0..120 {
            engine.update();
            prop_assert_eq!(&engine.balls()[0], &fixed);
        }
    }

    #[test]
    fn dropped_ball_stays_inside_the_world(
        ball in dynamic_ball(0.0..=1.0),
        boundary in prop_oneof![Just(BoundaryMode::Walls), Just(BoundaryMode::ClampOnly)],
    ) {
        let config = EngineConfig { boundary, ..EngineConfig::default() };
        let mut engine = Engine::with_config(WIDTH, HEIGHT, vec![ball], Vec::new(), config);
        for _ in 0..600 {
            engine.update();
            let ball = &engine.balls()[0];
            let (p, r) = (ball.position, ball.radius());
            prop_assert!(p.x >= -r && p.x <= WIDTH + r, "x escaped: {:?}", p);
            prop_assert!(p.y >= -r && p.y <= HEIGHT + r, "y escaped: {:?}", p);
        }
    }
}
