mod animation;
mod cli;
mod error;
mod launch;
mod rainbow_pulse;

use std::io;
use std::process::ExitCode;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

use led_strip::{mirror, Clock, Led, LedDriver, Sk9822};
use particle_simulation::ParticleSystem;
use rand::rngs::StdRng;
use rand::SeedableRng;

use animation::{Animation, Launch, Particles, RainbowPulse};
use cli::{AnimationKind, Command, Config};
use error::AppError;

fn open_driver(config: &Config) -> Result<Box<dyn LedDriver>, AppError> {
    log::info!(
        "Protocol {:?} on {} with {} LEDs",
        config.protocol,
        config.device,
        config.num_leds
    );
    if config.device == "-" {
        Ok(Box::new(Sk9822::new(io::stdout(), config.num_leds)))
    } else {
        Ok(Box::new(Sk9822::open(
            &config.device,
            config.num_leds,
            config.speed_hz,
        )?))
    }
}

fn build_animation(config: &Config) -> Result<Box<dyn Animation>, AppError> {
    let animation: Box<dyn Animation> = match config.animation {
        AnimationKind::RainbowPulse => Box::new(RainbowPulse::new(Clock::default())),
        AnimationKind::Launch => Box::new(Launch::new(Clock::default())),
        AnimationKind::Particles => {
            let system = match config.seed {
                Some(seed) => {
                    let mut rng = StdRng::seed_from_u64(seed);
                    ParticleSystem::new(config.num_leds, &config.particles, &mut rng)?
                }
                None => ParticleSystem::new(config.num_leds, &config.particles, &mut rand::rng())?,
            };
            log::info!(
                "✓ Initialized {} particles, total energy {:.3}",
                system.mobile_count(),
                system.total_energy()
            );
            Box::new(Particles::new(system, Clock::default()))
        }
    };
    log::info!("✓ Animation: {}", animation.name());
    Ok(animation)
}

/// Play frames until `running` is cleared or the frame limit is reached,
/// then blank the strip
fn play(
    driver: &mut dyn LedDriver,
    animation: &mut dyn Animation,
    config: &Config,
    running: &AtomicBool,
) -> Result<u64, AppError> {
    let mut leds = vec![Led::OFF; config.num_leds];

    let mut frame: u64 = 0;
    while running.load(Ordering::SeqCst) && !config.frames.is_some_and(|limit| frame >= limit) {
        animation.run(&mut leds)?;
        if config.mirror {
            mirror(&mut leds);
        }
        driver.update(&leds)?;
        thread::sleep(config.time_step);
        frame += 1;
    }

    log::info!("Stopped after {} frames, clearing strip", frame);
    leds.fill(Led::OFF);
    driver.update(&leds)?;
    Ok(frame)
}

fn run(config: &Config) -> Result<(), AppError> {
    let running = Arc::new(AtomicBool::new(true));
    let handler_flag = Arc::clone(&running);
    ctrlc::set_handler(move || handler_flag.store(false, Ordering::SeqCst))?;

    let mut driver = open_driver(config)?;
    let mut animation = build_animation(config)?;
    play(driver.as_mut(), animation.as_mut(), config, &running)?;
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args();
    let program = args.next().unwrap_or_else(|| "led-particles".to_string());

    let config = match cli::parse_args(args) {
        Ok(Command::Run(config)) => config,
        Ok(Command::Help) => {
            println!("{}", cli::usage(&program));
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("{}", cli::usage(&program));
            return ExitCode::FAILURE;
        }
    };

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
