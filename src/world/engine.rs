//! The simulation driver: owns a [`World`], steps it and keeps the render
//! snapshot hosts draw from.

use crate::collision::{detect_contacts, Contact, Resolver, SpatialGrid};
use crate::common::{BoundaryMode, BroadPhase, ConfigError, EngineConfig};
use crate::integration::{contain, integrate};
use crate::math::vec2::Vec2;
use crate::objects::{Ball, Block};
use crate::render::{Manifest, Surface};

use super::physics_world::World;

/// Steps a world of balls and blocks.
///
/// Ticking and drawing are independent: `update` advances physics only,
/// `update_manifest` also refreshes the snapshot `draw` paints from, so a
/// host can tick often and draw at its own cadence.
#[derive(Debug, Clone)]
pub struct Engine {
    world: World,
    config: EngineConfig,
    resolver: Resolver,
    grid: Option<SpatialGrid>,
    // Contacts found by the most recent step
    contacts: Vec<Contact>,
    manifest: Manifest,
    ticks: u64,
}

impl Engine {
    /// Creates an engine with [`EngineConfig::default`].
    pub fn new(width: f64, height: f64, balls: Vec<Ball>, blocks: Vec<Block>) -> Self {
        Self::with_config(width, height, balls, blocks, EngineConfig::default())
    }

    /// # Panics
    /// If the world size is not positive, or the config selects a grid
    /// broad phase with a non-positive cell size. Use
    /// [`Engine::try_with_config`] for configs from untrusted input.
    pub fn with_config(
        width: f64,
        height: f64,
        balls: Vec<Ball>,
        blocks: Vec<Block>,
        config: EngineConfig,
    ) -> Self {
        let world = World::with_bodies(width, height, balls, blocks);
        let grid = match config.broad_phase {
            BroadPhase::BruteForce => None,
            BroadPhase::Grid { cell_size } => Some(SpatialGrid::new(world.bounds(), cell_size)),
        };
        let manifest = Manifest::capture(width, height, world.balls(), world.blocks());

        log::info!(
            "engine created: {}x{} world, {} balls, {} blocks, {:?} boundary, {:?} broad phase",
            width,
            height,
            world.balls().len(),
            world.blocks().len(),
            config.boundary,
            config.broad_phase
        );

        Engine {
            world,
            resolver: Resolver::from_config(&config),
            config,
            grid,
            contacts: Vec::new(),
            manifest,
            ticks: 0,
        }
    }

    /// Validates the world size and `config` before building the engine.
    pub fn try_with_config(
        width: f64,
        height: f64,
        balls: Vec<Ball>,
        blocks: Vec<Block>,
        config: EngineConfig,
    ) -> Result<Self, ConfigError> {
        for (field, value) in [("width", width), ("height", height)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::Invalid {
                    field,
                    reason: format!("{value} is not a positive size"),
                });
            }
        }
        config.validate()?;
        Ok(Self::with_config(width, height, balls, blocks, config))
    }

    pub fn add_ball(&mut self, ball: Ball) {
        let index = self.world.add_ball(ball);
        log::debug!("added ball {index}");
    }

    pub fn add_block(&mut self, block: Block) {
        let index = self.world.add_block(block);
        log::debug!("added block {index}");
    }

    /// Removes a ball; later balls shift down one index. The stored
    /// contacts are dropped since their indices no longer apply.
    pub fn remove_ball(&mut self, index: usize) -> Option<Ball> {
        let removed = self.world.remove_ball(index)?;
        self.contacts.clear();
        log::debug!("removed ball {index}");
        Some(removed)
    }

    /// Removes a block; later blocks shift down one index.
    pub fn remove_block(&mut self, index: usize) -> Option<Block> {
        let removed = self.world.remove_block(index)?;
        self.contacts.clear();
        log::debug!("removed block {index}");
        Some(removed)
    }

    /// Advances the simulation by `config.time_step`.
    pub fn update(&mut self) {
        self.step(self.config.time_step);
    }

    /// [`update`](Engine::update), then captures a fresh manifest.
    pub fn update_manifest(&mut self) {
        self.update();
        self.refresh_manifest();
    }

    /// One tick: integrate, detect, resolve, then clamp anything that
    /// escaped the world. A `dt` that is not a positive finite number is
    /// ignored.
    pub fn step(&mut self, dt: f64) {
        if !(dt.is_finite() && dt > 0.0) {
            log::trace!("ignoring step with dt={dt}");
            return;
        }

        let gravity = self.config.gravity;
        let damping = self.config.damping;
        for ball in self.world.balls_mut() {
            integrate(ball, gravity, damping, dt);
        }

        let walls = match self.config.boundary {
            BoundaryMode::Walls => Some((self.world.width(), self.world.height())),
            BoundaryMode::ClampOnly => None,
        };
        let bounds = self.world.bounds();
        let (balls, blocks) = self.world.bodies_mut();

        detect_contacts(balls, blocks, walls, self.grid.as_mut(), &mut self.contacts);
        self.resolver.resolve_all(&self.contacts, balls, blocks);

        let mut escaped = 0;
        for ball in balls.iter_mut() {
            if contain(ball, &bounds) {
                escaped += 1;
            }
        }
        if escaped > 0 {
            log::warn!(
                "{escaped} ball(s) left the world on tick {} and were clamped back",
                self.ticks + 1
            );
        }

        self.ticks += 1;
    }

    /// Captures the current world into the manifest without stepping.
    pub fn refresh_manifest(&mut self) {
        self.manifest = Manifest::capture(
            self.world.width(),
            self.world.height(),
            self.world.balls(),
            self.world.blocks(),
        );
    }

    /// Paints the current manifest. Never touches the world.
    pub fn draw(&self, surface: &mut impl Surface) {
        self.manifest.paint(surface);
    }

    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn balls(&self) -> &[Ball] {
        self.world.balls()
    }

    pub fn blocks(&self) -> &[Block] {
        self.world.blocks()
    }

    pub fn width(&self) -> f64 {
        self.world.width()
    }

    pub fn height(&self) -> f64 {
        self.world.height()
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Contacts detected during the last step, in resolution order.
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    /// Completed steps since construction.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Total kinetic energy of the dynamic balls.
    pub fn kinetic_energy(&self) -> f64 {
        self.world.balls().iter().map(Ball::kinetic_energy).sum()
    }

    /// Total linear momentum of the dynamic balls.
    pub fn momentum(&self) -> Vec2 {
        self.world
            .balls()
            .iter()
            .fold(Vec2::ZERO, |total, ball| total + ball.momentum())
    }
}
