//! Headless tankworld simulation.
//!
//! Usage: cargo run --release -- [OPTIONS]
//!
//! Options:
//!   --config <PATH>   Session config JSON (default: built-in defaults)
//!   --ticks <N>       Number of frames to simulate (default: 600)
//!   --dt <SECS>       Frame delta in seconds (default: 0.016)
//!   --speed <U/S>     Player speed along its circular path (default: 12.0)
//!   --radius <M>      Radius of the player's path (default: 80.0)

use std::path::PathBuf;
use std::time::Instant;

use glam::Vec3;

use tankworld::core::{logging, Result};
use tankworld::navigation::NoNavigation;
use tankworld::session::{GameSession, SessionConfig};
use tankworld::spawning::{PrototypeLibrary, SpawnArea, WaveDefinition, WaveEvent};

fn main() {
    logging::init();

    if let Err(e) = run() {
        log::error!("Simulation failed: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let config_path = parse_str_arg(&args, "--config").map(PathBuf::from);
    let ticks = parse_usize_arg(&args, "--ticks").unwrap_or(600);
    let dt = parse_f32_arg(&args, "--dt").unwrap_or(0.016);
    let speed = parse_f32_arg(&args, "--speed").unwrap_or(12.0);
    let path_radius = parse_f32_arg(&args, "--radius").unwrap_or(80.0);

    let mut config = match &config_path {
        Some(path) => SessionConfig::load_json(path)?,
        None => SessionConfig::default(),
    };
    if config.spawner.spawn_areas.is_empty() {
        config.spawner.spawn_areas = vec![
            SpawnArea { min_height_from_ground: 0.5, ..SpawnArea::new(Vec3::new(15.0, 0.0, 15.0), 5.0) },
            SpawnArea { min_height_from_ground: 0.5, ..SpawnArea::new(Vec3::new(-15.0, 0.0, 15.0), 5.0) },
        ];
    }

    let (library, waves) = demo_waves();

    println!("=== Tankworld Simulation ===");
    println!("Ticks: {} x {}s", ticks, dt);
    println!("Path:  radius {}m at {}m/s", path_radius, speed);
    println!("Waves: {}", waves.len());
    println!();

    let mut session = GameSession::new(config, waves, library, Box::new(NoNavigation))?;
    println!("Seed:  {}", session.streamer().config().world_seed);

    let waves_finished = std::rc::Rc::new(std::cell::Cell::new(0usize));
    let counter = waves_finished.clone();
    session.spawner_mut().subscribe(move |event| {
        if let WaveEvent::WaveCompleted { .. } = event {
            counter.set(counter.get() + 1);
        }
    });

    let start = Instant::now();
    let mut chunks_created = 0usize;
    let mut chunks_destroyed = 0usize;
    let mut spawned = 0usize;

    for frame in 0..ticks {
        let t = frame as f32 * dt;
        let angle = t * speed / path_radius.max(1.0);
        let player = Vec3::new(angle.cos() * path_radius, 0.0, angle.sin() * path_radius);

        let update = session.update(dt, player);
        if let Some(stream) = &update.stream {
            chunks_created += stream.created.len();
            chunks_destroyed += stream.destroyed.len();
        }
        spawned += update.spawned.len();
    }

    let elapsed = start.elapsed();
    let spawner = session.spawner();
    let pooled: usize = spawner
        .pools()
        .library()
        .iter()
        .map(|p| spawner.pools().pooled_count(p.id))
        .sum();

    println!();
    println!("=== Summary ===");
    println!("Simulated:        {:.2}s in {:.2?}", session.clock().elapsed_secs(), elapsed);
    println!("Chunks active:    {}", session.streamer().chunk_count());
    println!("Chunks created:   {}", chunks_created);
    println!("Chunks destroyed: {}", chunks_destroyed);
    println!("Nav rebuilds:     {}", session.rebuilder().rebuild_count());
    println!("Waves finished:   {}/{}", waves_finished.get(), spawner.total_wave_count());
    println!("Spawner state:    {:?}", spawner.state());
    println!("Entities spawned: {}", spawned);
    println!("Entities active:  {}", spawner.active_entity_count());
    println!("Entities pooled:  {}", pooled);

    Ok(())
}

fn demo_waves() -> (PrototypeLibrary, Vec<WaveDefinition>) {
    let mut library = PrototypeLibrary::new();
    let light = library.register("LightTank");
    let heavy = library.register("HeavyTank");
    let artillery = library.register("Artillery");

    let waves = vec![
        WaveDefinition::new("Scouts").with_spawn(light, 4),
        WaveDefinition::new("Assault")
            .with_spawn(light, 6)
            .with_spawn(heavy, 2),
        WaveDefinition::new("Siege")
            .with_spawn(heavy, 3)
            .with_spawn(artillery, 2)
            .with_delay(5.0),
    ];
    (library, waves)
}

fn parse_f32_arg(args: &[String], flag: &str) -> Option<f32> {
    args.iter().position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .and_then(|s| s.parse().ok())
}

fn parse_usize_arg(args: &[String], flag: &str) -> Option<usize> {
    args.iter().position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .and_then(|s| s.parse().ok())
}

fn parse_str_arg(args: &[String], flag: &str) -> Option<String> {
    args.iter().position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .cloned()
}
