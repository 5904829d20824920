use simple_physics::{ConfigError, EngineConfig};
use std::env;

mod scenes;
mod visual;

use scenes::{Fountain, Scene};

fn main() {
    env_logger::init();
    let args: Vec<String> = env::args().collect();

    // Check if first arg is "visual"
    if args.len() > 1 && args[1] == "visual" {
        let name = args.get(2).map(String::as_str).unwrap_or("pit");
        let Some(scene) = parse_scene(name) else {
            return;
        };
        let config = match load_config(args.get(3).map(String::as_str)) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error loading config: {}", e);
                return;
            }
        };

        println!("Running scene: {}", scene.name());
        if let Err(e) = visual::run_visual(scene, config) {
            eprintln!("Error running visual scene: {}", e);
        }
        return;
    }

    let name = args.get(1).map(String::as_str).unwrap_or("drop");
    let Some(scene) = parse_scene(name) else {
        return;
    };
    let config = match load_config(args.get(2).map(String::as_str)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            return;
        }
    };

    println!("Running scene: {}", scene.name());
    run_headless(scene, config);
}

fn parse_scene(name: &str) -> Option<Scene> {
    let scene = Scene::from_name(name);
    if scene.is_none() {
        let available: Vec<&str> = Scene::ALL.iter().map(|s| s.name()).collect();
        println!("Unknown scene: {}. Available scenes: {}", name, available.join(", "));
    }
    scene
}

fn load_config(path: Option<&str>) -> Result<EngineConfig, ConfigError> {
    let config = match path {
        Some(path) => {
            log::info!("loading engine config from {path}");
            EngineConfig::load(path)?
        }
        None => EngineConfig::default(),
    };
    if config.time_step <= 0.0 {
        log::warn!("time_step is {}; updates will not advance the simulation", config.time_step);
    }
    Ok(config)
}

fn run_headless(scene: Scene, config: EngineConfig) {
    let mut engine = scene.build(config);
    let mut fountain = (scene == Scene::Fountain).then(|| Fountain::new(42));

    // Simulate three seconds
    let time_step = engine.config().time_step;
    let steps = if time_step > 0.0 { (3.0 / time_step).round() as usize } else { 0 };
    for frame in 0..steps {
        if let Some(fountain) = fountain.as_mut() {
            if frame % 10 == 0 {
                fountain.pump(&mut engine);
            }
        }
        engine.update();

        if frame % 60 == 0 {
            println!(
                "Frame {}: {} balls, {} contacts, kinetic energy {:.1}",
                frame,
                engine.balls().len(),
                engine.contacts().len(),
                engine.kinetic_energy()
            );
            if let Some(ball) = engine.balls().first() {
                println!("  first ball at ({:.2}, {:.2})", ball.position.x, ball.position.y);
            }
        }
    }
    println!("Simulation finished after {} ticks.", engine.ticks());
}
