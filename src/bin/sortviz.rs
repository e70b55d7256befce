//! 排序动画回放
//!
//! 生成轨迹后在虚拟时钟上按间隔逐步回放，打印最终状态（可选逐帧输出）。

use clap::Parser;
use sortviz_rs::algo::Algorithm;
use sortviz_rs::playback::{PlaybackConfig, Player, PlayerWorld};
use sortviz_rs::sim::{SimTime, Simulator};
use sortviz_rs::trace::{Trace, Value};
use sortviz_rs::viz::{SnapshotPolicy, render_frame};
use std::fs;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "sortviz", about = "Replay a sorting algorithm step by step")]
struct Args {
    /// Path to a JSON playback config; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// bubble, insertion or quick
    #[arg(long)]
    algorithm: Option<String>,

    /// Number of random values
    #[arg(long)]
    size: Option<usize>,

    /// Interval between ticks (ms)
    #[arg(long)]
    speed_ms: Option<u64>,

    /// Seed for the random values
    #[arg(long)]
    seed: Option<u64>,

    /// Explicit comma-separated values, e.g. 3,1,2
    #[arg(long, value_delimiter = ',')]
    values: Option<Vec<Value>>,

    /// Replay a trace JSON instead of generating one
    #[arg(long)]
    replay: Option<PathBuf>,

    /// Stop the clock at this time (ms); the run is left paused
    #[arg(long)]
    until_ms: Option<u64>,

    /// Print every frame as text
    #[arg(long)]
    frames: bool,

    /// Write the per-tick frames as JSON
    #[arg(long)]
    frames_json: Option<PathBuf>,

    /// Write the generated trace as JSON
    #[arg(long)]
    trace_json: Option<PathBuf>,

    /// Keep sorted marks across snapshots
    #[arg(long)]
    keep_sorted: bool,
}

fn load_config(args: &Args) -> PlaybackConfig {
    let mut cfg = match &args.config {
        Some(path) => {
            let raw = fs::read_to_string(path).expect("read config json");
            PlaybackConfig::from_json_str(&raw).expect("parse config json")
        }
        None => PlaybackConfig::default(),
    };
    if let Some(name) = &args.algorithm {
        cfg.algorithm = name.parse::<Algorithm>().expect("parse --algorithm");
    }
    if let Some(size) = args.size {
        cfg.size = size;
    }
    if let Some(speed) = args.speed_ms {
        cfg.speed_ms = speed;
    }
    if args.seed.is_some() {
        cfg.seed = args.seed;
    }
    if args.keep_sorted {
        cfg.snapshot_policy = SnapshotPolicy::KeepSorted;
    }
    cfg
}

fn main() {
    // 初始化 tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .init();

    let args = Args::parse();
    let cfg = load_config(&args);
    info!(?cfg, "配置");

    let player = match args.values.clone() {
        Some(values) => Player::with_values(cfg.clone(), values),
        None => Player::new(cfg.clone()),
    };
    let initial: Vec<Value> = player.values().to_vec();

    let mut sim = Simulator::default();
    let mut world = PlayerWorld::new(player);
    if args.frames || args.frames_json.is_some() {
        world = world.with_frames();
    }

    match &args.replay {
        Some(path) => {
            let raw = fs::read_to_string(path).expect("read trace json");
            let trace: Trace = serde_json::from_str(&raw).expect("parse trace json");
            world
                .player
                .play_trace(trace, &mut sim)
                .expect("replay trace");
        }
        None => {
            world.player.play(&mut sim);
        }
    }

    if let Some(path) = &args.trace_json {
        let trace = world.player.store().trace().expect("trace loaded");
        let json = serde_json::to_string_pretty(trace).expect("serialize trace");
        fs::write(path, json).expect("write trace json");
        eprintln!("wrote trace to {}", path.display());
    }

    match args.until_ms {
        Some(ms) => {
            sim.run_until(SimTime::from_millis(ms), &mut world);
            world.player.pause(&mut sim);
        }
        None => sim.run(&mut world),
    }

    if let Some(log) = &world.frames {
        if args.frames {
            for f in &log.frames {
                println!("t={}ms cursor={} {}", f.t_ms, f.cursor, f.event.kind());
                print!("{}", render_frame(&f.values, &f.highlights));
            }
        }
        if let Some(path) = &args.frames_json {
            let json = serde_json::to_string_pretty(&log.frames).expect("serialize frames");
            fs::write(path, json).expect("write frames json");
            eprintln!("wrote frames to {}", path.display());
        }
    }

    let p = &world.player;
    println!("algorithm={} initial={:?}", p.config().algorithm, initial);
    print!("{}", render_frame(p.values(), &p.highlights()));
    println!(
        "done @ {}ms, values={:?}, running={}, applied={}, cursor={}/{}",
        sim.now().as_millis(),
        p.values(),
        p.is_running(),
        p.applied(),
        p.store().cursor(),
        p.store().len()
    );
}
