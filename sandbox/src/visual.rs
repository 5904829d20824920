use ggez::event::{self, EventHandler};
use ggez::glam::Vec2 as GVec2;
use ggez::graphics::{self, Canvas, DrawMode, DrawParam, Mesh, Quad, Rect};
use ggez::input::keyboard::{KeyCode, KeyInput};
use ggez::input::mouse::MouseButton;
use ggez::{Context, GameResult};
use simple_physics::{Color, Engine, EngineConfig, FrameLimiter, Surface, Vec2};

use crate::scenes::{BallParams, BoxParams, Fountain, Scene};

const DRAW_FPS: f64 = 165.0;
// Radius of the shared circle mesh; each ball scales it
const MESH_RADIUS: f32 = 64.0;

/// Paints engine manifests onto a ggez canvas.
struct CanvasSurface<'a> {
    canvas: &'a mut Canvas,
    circle: &'a Mesh,
}

fn to_ggez(color: &Color) -> graphics::Color {
    match color.rgb() {
        Some((r, g, b)) => graphics::Color::from_rgb(r, g, b),
        None => graphics::Color::BLACK,
    }
}

fn rect(origin: Vec2, size: Vec2) -> Rect {
    Rect::new(origin.x as f32, origin.y as f32, size.x as f32, size.y as f32)
}

impl Surface for CanvasSurface<'_> {
    fn clear(&mut self, width: f64, height: f64) {
        self.canvas.draw(
            &Quad,
            DrawParam::new()
                .dest_rect(rect(Vec2::ZERO, Vec2::new(width, height)))
                .color(graphics::Color::WHITE),
        );
    }

    fn fill_circle(&mut self, center: Vec2, radius: f64, color: &Color) {
        let scale = radius as f32 / MESH_RADIUS;
        self.canvas.draw(
            self.circle,
            DrawParam::new()
                .dest(GVec2::new(center.x as f32, center.y as f32))
                .scale(GVec2::new(scale, scale))
                .color(to_ggez(color)),
        );
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: &Color) {
        self.canvas.draw(
            &Quad,
            DrawParam::new()
                .dest_rect(rect(origin, size))
                .color(to_ggez(color)),
        );
    }
}

struct MainState {
    engine: Engine,
    limiter: FrameLimiter,
    tick_rate: u32,
    fountain: Option<Fountain>,
    ball_params: BallParams,
    box_params: BoxParams,
    circle: Mesh,
}

/// Physics ticks per second for a given step length.
fn tick_rate(time_step: f64) -> u32 {
    if time_step.is_finite() && time_step > 0.0 {
        (1.0 / time_step).round().clamp(1.0, 1000.0) as u32
    } else {
        60
    }
}

impl MainState {
    fn new(ctx: &mut Context, scene: Scene, engine: Engine) -> GameResult<MainState> {
        let circle = Mesh::new_circle(
            ctx,
            DrawMode::fill(),
            GVec2::new(0.0, 0.0),
            MESH_RADIUS,
            0.5,
            graphics::Color::WHITE,
        )?;

        Ok(MainState {
            tick_rate: tick_rate(engine.config().time_step),
            engine,
            limiter: FrameLimiter::new(DRAW_FPS),
            fountain: (scene == Scene::Fountain).then(|| Fountain::new(42)),
            ball_params: BallParams::default(),
            box_params: BoxParams::default(),
            circle,
        })
    }
}

impl EventHandler for MainState {
    fn update(&mut self, ctx: &mut Context) -> GameResult {
        let mut due = 0;
        while ctx.time.check_update_time(self.tick_rate) {
            due += 1;
        }
        if due == 0 {
            return Ok(());
        }

        // Only the last tick of a frame that is due to be drawn refreshes the manifest
        let draw_due = self.limiter.ready(ctx.time.time_since_start());
        if draw_due {
            if let Some(fountain) = self.fountain.as_mut() {
                fountain.pump(&mut self.engine);
            }
        }
        for tick in 1..=due {
            if draw_due && tick == due {
                self.engine.update_manifest();
            } else {
                self.engine.update();
            }
        }
        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> GameResult {
        let mut canvas = Canvas::from_frame(ctx, graphics::Color::WHITE);
        let mut surface = CanvasSurface {
            canvas: &mut canvas,
            circle: &self.circle,
        };
        self.engine.draw(&mut surface);
        canvas.finish(ctx)?;
        Ok(())
    }

    fn mouse_button_down_event(
        &mut self,
        _ctx: &mut Context,
        button: MouseButton,
        x: f32,
        y: f32,
    ) -> GameResult {
        let (x, y) = (x as f64, y as f64);
        match button {
            MouseButton::Left => self.engine.add_ball(self.ball_params.spawn(x, y)),
            MouseButton::Right => self.engine.add_block(self.box_params.spawn(x, y)),
            _ => {}
        }
        Ok(())
    }

    fn key_down_event(
        &mut self,
        ctx: &mut Context,
        input: KeyInput,
        _repeated: bool,
    ) -> GameResult {
        match input.keycode {
            Some(KeyCode::Escape) => ctx.request_quit(),
            Some(KeyCode::F) => {
                self.ball_params.fixed = !self.ball_params.fixed;
                log::info!("click spawns fixed balls: {}", self.ball_params.fixed);
            }
            Some(KeyCode::Back) => {
                let count = self.engine.balls().len();
                if count > 0 {
                    self.engine.remove_ball(count - 1);
                }
            }
            _ => {}
        }
        Ok(())
    }
}

pub fn run_visual(scene: Scene, config: EngineConfig) -> GameResult {
    let engine = scene.build(config);
    let (width, height) = (engine.width() as f32, engine.height() as f32);

    let cb = ggez::ContextBuilder::new("physics_sandbox", "simple_physics")
        .window_setup(ggez::conf::WindowSetup::default().title("Physics Sandbox"))
        .window_mode(ggez::conf::WindowMode::default().dimensions(width, height));

    let (mut ctx, event_loop) = cb.build()?;
    let state = MainState::new(&mut ctx, scene, engine)?;
    event::run(ctx, event_loop, state)
}
