// Stridewatch — Demo Entry Point
//
// Wires the system together the way the firmware would, with the hardware
// collaborators replaced by host-side stand-ins:
//   1. Parse session parameters (leg length, body weight, cadence, duration).
//   2. Configure the (simulated) gyro.
//   3. Start the periodic tick source — sample-due mailbox + seconds counter.
//   4. Spawn the sampler task (pipeline) and the display task (console).
//   5. Run until Ctrl+C or the requested duration elapses.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;

use stridewatch::clock::{self, TickSource};
use stridewatch::config::{
    SessionConfig, DEFAULT_BODY_WEIGHT_KG, DEFAULT_LEG_LENGTH_M, SAMPLE_PERIOD_MS,
    SECOND_PERIOD_MS,
};
use stridewatch::drivers::gyro::{RateGyro, SimulatedGyro};
use stridewatch::pipeline::Pipeline;
use stridewatch::tasks;
use stridewatch::tasks::display::ConsoleSurface;

#[derive(Parser, Debug)]
#[command(name = "stridewatch")]
#[command(about = "Walking telemetry from a simulated leg-worn gyro", long_about = None)]
struct Args {
    /// Wearer leg length in metres
    #[arg(long, default_value_t = DEFAULT_LEG_LENGTH_M)]
    leg_length: f32,

    /// Wearer body weight in kilograms
    #[arg(long, default_value_t = DEFAULT_BODY_WEIGHT_KG)]
    weight: f32,

    /// Sample period in milliseconds
    #[arg(long, default_value_t = SAMPLE_PERIOD_MS)]
    sample_period_ms: u64,

    /// Session duration in seconds (runs until Ctrl+C if omitted)
    #[arg(short, long)]
    duration: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    anyhow::ensure!(args.leg_length > 0.0, "leg length must be positive");
    anyhow::ensure!(args.weight > 0.0, "body weight must be positive");
    anyhow::ensure!(args.sample_period_ms > 0, "sample period must be positive");

    log::info!(
        "Stridewatch starting — leg {:.2} m, weight {:.1} kg, cadence {} ms",
        args.leg_length,
        args.weight,
        args.sample_period_ms
    );

    // ---- Sensor -----------------------------------------------------------
    let mut gyro = SimulatedGyro::walking();
    gyro.configure()?;

    let pipeline = Pipeline::new(&SessionConfig {
        leg_length_m: args.leg_length,
        body_weight_kg: args.weight,
    });

    // ---- Shared state -----------------------------------------------------
    let running = Arc::new(AtomicBool::new(true));

    let ctrlc_running = Arc::clone(&running);
    ctrlc::set_handler(move || {
        log::info!("Ctrl+C received — stopping session");
        ctrlc_running.store(false, Ordering::SeqCst);
    })?;

    // ---- Tick source ------------------------------------------------------
    let ticks = TickSource::new();
    clock::spawn_tickers(
        &ticks,
        Duration::from_millis(args.sample_period_ms),
        Duration::from_millis(SECOND_PERIOD_MS),
        Arc::clone(&running),
    )?;

    // ---- Channels ---------------------------------------------------------
    let (snapshot_tx, snapshot_rx) = mpsc::channel();

    // ---- Spawn tasks ------------------------------------------------------
    let sampler_running = Arc::clone(&running);
    let sampler = thread::Builder::new().name("sampler".into()).spawn(move || {
        tasks::sampler::sampler_task(gyro, pipeline, ticks, sampler_running, snapshot_tx);
    })?;

    let display = thread::Builder::new().name("display".into()).spawn(move || {
        tasks::display::display_task(snapshot_rx, ConsoleSurface);
    })?;

    // ---- Wait out the session ---------------------------------------------
    let started = Instant::now();
    while running.load(Ordering::SeqCst) {
        if let Some(limit) = args.duration {
            if started.elapsed() >= Duration::from_secs(limit) {
                log::info!("Requested duration elapsed — stopping session");
                running.store(false, Ordering::SeqCst);
                break;
            }
        }
        thread::sleep(Duration::from_millis(100));
    }
    running.store(false, Ordering::SeqCst);

    let _ = sampler.join();
    let _ = display.join();

    log::info!("Session ended");
    Ok(())
}
