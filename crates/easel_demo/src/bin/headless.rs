//! Headless driver for the dual-scope demo
//!
//! Mounts the component, pumps a fixed frame budget of logical time, and
//! prints a JSON summary of the run.
//!
//! Run with: cargo run -p easel_demo --bin easel-headless -- --frames 120

use anyhow::Result;
use clap::Parser;
use easel_demo::{DemoConfig, HeadlessRunConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "easel-headless",
    about = "Run the dual-scope demo without a window"
)]
struct Args {
    /// Scene width in pixels
    #[arg(long, default_value_t = 800.0)]
    width: f32,

    /// Scene height in pixels
    #[arg(long, default_value_t = 400.0)]
    height: f32,

    /// Frames to execute
    #[arg(long, default_value_t = 120)]
    frames: u32,

    /// Logical milliseconds per frame
    #[arg(long, default_value_t = 16)]
    tick_ms: u64,

    /// Build the scenes without registering frame callbacks
    #[arg(long)]
    frozen: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let config = DemoConfig {
        width: args.width,
        height: args.height,
        animated: !args.frozen,
    };
    let report = easel_demo::headless::run_demo(
        config,
        HeadlessRunConfig {
            max_frames: args.frames,
            tick_ms: args.tick_ms,
        },
    )?;

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
