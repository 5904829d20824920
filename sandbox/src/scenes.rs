use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use simple_physics::{Ball, Block, BoundaryMode, Engine, EngineConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scene {
    /// A single ball dropped onto a floor block.
    Drop,
    /// Balls tossed into a pit made of three wall blocks.
    Pit,
    /// Empty world that a fountain keeps filling.
    Fountain,
}

impl Scene {
    pub const ALL: [Scene; 3] = [Scene::Drop, Scene::Pit, Scene::Fountain];

    pub fn from_name(name: &str) -> Option<Scene> {
        Scene::ALL.into_iter().find(|scene| scene.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self {
            Scene::Drop => "drop",
            Scene::Pit => "pit",
            Scene::Fountain => "fountain",
        }
    }

    pub fn build(self, config: EngineConfig) -> Engine {
        match self {
            Scene::Drop => create_drop(config),
            Scene::Pit => create_pit(800.0, 600.0, config),
            Scene::Fountain => Engine::with_config(800.0, 600.0, Vec::new(), Vec::new(), config),
        }
    }
}

fn create_drop(config: EngineConfig) -> Engine {
    let ball = Ball::new(100.0, 0.0, 25.0, 0.0, 0.0, "#00FFFF", 3.0, 0.8);
    let floor = Block::new(0.0, 580.0, 400.0, 20.0, "#000000", 0.5);
    let config = EngineConfig {
        boundary: BoundaryMode::ClampOnly,
        ..config
    };
    Engine::with_config(400.0, 600.0, vec![ball], vec![floor], config)
}

fn create_pit(width: f64, height: f64, config: EngineConfig) -> Engine {
    // Left wall, floor raised off the bottom, right wall
    let blocks = vec![
        Block::new(20.0, 0.0, 20.0, height, "#000000", 0.5),
        Block::new(0.0, height - 200.0, width, 20.0, "#000000", 0.5),
        Block::new(width - 100.0, 0.0, 20.0, height, "#000000", 0.5),
    ];

    let palette = ["#00FFFF", "#740093", "#FF8800", "#22AA22"];
    let balls = (0..20)
        .map(|i| {
            let radius = 10.0 + (i % 4) as f64 * 5.0;
            let x = 80.0 + (i % 10) as f64 * 60.0;
            let y = 50.0 + (i / 10) as f64 * 70.0 + (i % 5) as f64 * 10.0;
            let vx = if i % 2 == 0 { 150.0 } else { -150.0 };
            Ball::new(x, y, radius, vx, 0.0, palette[i % palette.len()], 1.0 + radius / 10.0, 0.8)
        })
        .collect();

    let config = EngineConfig {
        boundary: BoundaryMode::ClampOnly,
        ..config
    };
    Engine::with_config(width, height, balls, blocks, config)
}

/// What a click places as a ball.
#[derive(Debug, Clone)]
pub struct BallParams {
    pub radius: f64,
    pub color: String,
    pub restitution: f64,
    pub mass: f64,
    pub fixed: bool,
}

impl Default for BallParams {
    fn default() -> Self {
        BallParams {
            radius: 30.0,
            color: "#00FFFF".to_string(),
            restitution: 0.5,
            mass: 3.0,
            fixed: false,
        }
    }
}

impl BallParams {
    pub fn spawn(&self, x: f64, y: f64) -> Ball {
        let mass = if self.fixed { 0.0 } else { self.mass };
        Ball::new(x, y, self.radius, 0.0, 0.0, self.color.as_str(), mass, self.restitution)
    }
}

/// What a click places as a block, centered on the cursor.
#[derive(Debug, Clone)]
pub struct BoxParams {
    pub width: f64,
    pub height: f64,
    pub color: String,
    pub restitution: f64,
}

impl Default for BoxParams {
    fn default() -> Self {
        BoxParams {
            width: 100.0,
            height: 100.0,
            color: "#000000".to_string(),
            restitution: 1.0,
        }
    }
}

impl BoxParams {
    pub fn spawn(&self, x: f64, y: f64) -> Block {
        Block::new(
            x - self.width / 2.0,
            y - self.height / 2.0,
            self.width,
            self.height,
            self.color.as_str(),
            self.restitution,
        )
    }
}

/// Drops a fresh ball near the top center every time it is pumped.
/// Once `max_balls` is reached the oldest ball is retired.
pub struct Fountain {
    rng: Pcg32,
    pub params: BallParams,
    pub max_balls: usize,
}

impl Fountain {
    pub fn new(seed: u64) -> Self {
        Fountain {
            rng: Pcg32::seed_from_u64(seed),
            params: BallParams::default(),
            max_balls: 300,
        }
    }

    pub fn pump(&mut self, engine: &mut Engine) {
        if engine.balls().len() >= self.max_balls {
            engine.remove_ball(0);
        }
        // Jitter keeps stacked spawns from sharing a center
        let x = engine.width() / 2.0 + self.rng.random_range(0.5..1.5);
        let y = engine.height() / 6.0 + self.rng.random_range(0.5..1.5);
        engine.add_ball(self.params.spawn(x, y));
    }
}
