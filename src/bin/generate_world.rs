//! World walk binary — streams a world strip and reports what was generated.
//!
//! Usage: cargo run --release --bin generate_world -- [OPTIONS]
//!
//! Options:
//!   --seed <SEED>     World seed (default: 12345)
//!   --span <PX>       Initially generated span in world units (default: 800)
//!   --buffer <PX>     Lookahead buffer around the viewpoint (default: 1600)
//!   --walk <PX>       Distance the viewpoint walks to the right (default: 5000)
//!   --step <PX>       Viewpoint advance per tick (default: 25)
//!   --out <DIR>       Write a manifest.json with generation stats

use std::path::{Path, PathBuf};
use std::time::Instant;

use serde_json::json;

use wayfield::generation::GenerationConfig;
use wayfield::streaming::WorldStreamer;
use wayfield::world::{Layer, WorldCollection};

fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .format_timestamp_millis()
    .init();

    let args: Vec<String> = std::env::args().collect();
    let seed = parse_u32_arg(&args, "--seed").unwrap_or(12345);
    let span = parse_i32_arg(&args, "--span").unwrap_or(800);
    let buffer = parse_i32_arg(&args, "--buffer").unwrap_or(1600);
    let walk = parse_f32_arg(&args, "--walk").unwrap_or(5000.0);
    let step = parse_f32_arg(&args, "--step").unwrap_or(25.0);
    let out_dir = parse_str_arg(&args, "--out");

    let config = GenerationConfig::from_seed(seed);
    let mut streamer = WorldStreamer::new(&config, buffer, 0, span);
    let mut world = WorldCollection::new();

    let start = Instant::now();
    let primed = streamer.prime(&mut world);
    log::info!(
        "primed [{}, {}]: {} entities",
        streamer.generated_min_x(),
        streamer.generated_max_x(),
        primed.placed
    );

    let mut pos = 0.0_f32;
    let mut ticks = 0u32;
    while pos <= walk {
        streamer.update(pos, &mut world);
        pos += step;
        ticks += 1;
    }
    let elapsed = start.elapsed();

    log::info!(
        "walked {}px in {} ticks: bounds [{}, {}], {} entities ({} static, {} foliage, {} fruit) in {:.1?}",
        walk,
        ticks,
        streamer.generated_min_x(),
        streamer.generated_max_x(),
        world.len(),
        world.layer_len(Layer::Static),
        world.layer_len(Layer::Foliage),
        world.layer_len(Layer::Default),
        elapsed
    );

    if let Some(dir) = out_dir {
        let dir = PathBuf::from(dir);
        if let Err(err) = write_manifest(&dir, seed, &streamer, &world) {
            log::error!("failed to write manifest: {}", err);
            std::process::exit(1);
        }
        log::info!("wrote {}", dir.join("manifest.json").display());
    }
}

fn write_manifest(
    dir: &Path,
    seed: u32,
    streamer: &WorldStreamer,
    world: &WorldCollection,
) -> wayfield::core::Result<()> {
    std::fs::create_dir_all(dir)?;

    let manifest = json!({
        "seed": seed,
        "generated_min_x": streamer.generated_min_x(),
        "generated_max_x": streamer.generated_max_x(),
        "entities": {
            "total": world.len(),
            "static": world.layer_len(Layer::Static),
            "foliage": world.layer_len(Layer::Foliage),
            "default": world.layer_len(Layer::Default),
        },
    });

    std::fs::write(
        dir.join("manifest.json"),
        serde_json::to_string_pretty(&manifest)?,
    )?;
    Ok(())
}

fn parse_str_arg(args: &[String], flag: &str) -> Option<String> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .cloned()
}

fn parse_u32_arg(args: &[String], flag: &str) -> Option<u32> {
    parse_str_arg(args, flag)?.parse().ok()
}

fn parse_i32_arg(args: &[String], flag: &str) -> Option<i32> {
    parse_str_arg(args, flag)?.parse().ok()
}

fn parse_f32_arg(args: &[String], flag: &str) -> Option<f32> {
    parse_str_arg(args, flag)?.parse().ok()
}
