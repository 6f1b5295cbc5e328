//! # Car Console Binary
//!
//! Runs the console's simulation loop until killed.
//!
//! # Usage
//!
//! ```bash
//! # On the board (sysfs GPIO, reference wiring)
//! car_console
//!
//! # Custom wiring and more logging
//! car_console --config console.toml -vv
//!
//! # Without hardware
//! car_console --simulate --json
//! ```

use car_common::config::{ConsoleConfig, LogLevel};
use car_common::io::registry::IoRegistry;
use car_console::audio::{AudioOutput, LogAudio};
use car_console::media::SystemMedia;
use car_console::{StartupError, build_car};
use car_hal::HalCore;
use car_hal::drivers::{DEFAULT_DRIVER, default_registry};
use clap::{ArgAction, Parser};
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Car console controller
#[derive(Parser, Debug)]
#[command(name = "car_console")]
#[command(version)]
#[command(about = "Car console controller: buttons, lamps and layered audio")]
#[command(long_about = None)]
struct Args {
    /// Increase verbosity (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Configuration file; built-in defaults when omitted
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// GPIO driver to use
    #[arg(short, long, default_value = DEFAULT_DRIVER)]
    driver: String,

    /// Force the simulation driver and log-only audio
    #[arg(short = 's', long, conflicts_with = "driver")]
    simulate: bool,

    /// Output logs in JSON format
    #[arg(long)]
    json: bool,
}

fn main() {
    let args = Args::parse();
    if let Err(e) = run(&args) {
        // Startup may fail before the configured subscriber is installed.
        let _ = tracing_subscriber::fmt().try_init();
        error!("Car console startup failed: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), StartupError> {
    let install_dir = change_to_install_dir()?;
    let config = ConsoleConfig::load_or_default(args.config.as_deref())?;
    setup_tracing(args, config.shared.log_level);

    info!(
        "{} v{} starting in {}",
        config.shared.service_name,
        env!("CARGO_PKG_VERSION"),
        install_dir.display()
    );

    let registry = IoRegistry::from_config(&config.io)?;
    info!(
        "IoRegistry built: {} inputs, {} outputs",
        registry.input_count, registry.output_count
    );

    let driver_name = if args.simulate {
        info!("Simulation mode enabled");
        "simulation"
    } else {
        args.driver.as_str()
    };
    let driver = default_registry().create_driver(driver_name)?;
    let mut hal = HalCore::new(registry, driver);

    let media = SystemMedia::new(config.media.clone())?;
    let audio = open_audio(&config, args.simulate)?;
    let mut car = build_car(&mut hal, media, audio, config.simulation.frequency_hz)?;

    car.run()
}

/// Make relative asset and mount paths resolve against the executable.
fn change_to_install_dir() -> Result<PathBuf, StartupError> {
    let exe = std::env::current_exe().map_err(StartupError::InstallDir)?;
    let dir = exe
        .parent()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    std::env::set_current_dir(&dir).map_err(StartupError::InstallDir)?;
    Ok(dir)
}

#[cfg(feature = "playback")]
fn open_audio(config: &ConsoleConfig, simulate: bool) -> Result<Box<dyn AudioOutput>, StartupError> {
    if simulate {
        return Ok(Box::new(LogAudio::new()));
    }
    let audio = car_console::audio::RodioAudio::new(&config.audio.sounds_dir)?;
    Ok(Box::new(audio))
}

#[cfg(not(feature = "playback"))]
fn open_audio(config: &ConsoleConfig, _simulate: bool) -> Result<Box<dyn AudioOutput>, StartupError> {
    info!(
        "Built without the 'playback' feature; sounds from {} are logged only",
        config.audio.sounds_dir.display()
    );
    Ok(Box::new(LogAudio::new()))
}

/// Setup tracing subscriber: config level, raised once per `-v`.
fn setup_tracing(args: &Args, base: LogLevel) {
    let level: tracing::Level = base.raised(args.verbose).into();
    let filter = EnvFilter::from_default_env().add_directive(level.into());

    if args.json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
