//! Command line parsing

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use led_strip::DEFAULT_SPEED_HZ;
use particle_simulation::ParticleParams;

/// Which animation to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationKind {
    RainbowPulse,
    Launch,
    Particles,
}

impl FromStr for AnimationKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "rainbow_pulse" => Ok(AnimationKind::RainbowPulse),
            "launch" => Ok(AnimationKind::Launch),
            "particles" => Ok(AnimationKind::Particles),
            _ => Err(()),
        }
    }
}

/// LED wire protocol; both use the same 32-bit frame encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Protocol {
    Apa102,
    Sk9822,
}

impl FromStr for Protocol {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "apa102" => Ok(Protocol::Apa102),
            "sk9822" => Ok(Protocol::Sk9822),
            _ => Err(()),
        }
    }
}

/// Runtime configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// SPI device node, or `-` for stdout
    pub device: String,
    /// SPI clock in Hz
    pub speed_hz: u32,
    pub num_leds: usize,
    pub animation: AnimationKind,
    pub protocol: Protocol,
    /// Pause between frames
    pub time_step: Duration,
    pub particles: ParticleParams,
    pub seed: Option<u64>,
    /// Stop after this many frames; run forever when `None`
    pub frames: Option<u64>,
    pub mirror: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            device: "/dev/spidev0.0".to_string(),
            speed_hz: DEFAULT_SPEED_HZ,
            num_leds: 288,
            animation: AnimationKind::RainbowPulse,
            protocol: Protocol::Apa102,
            time_step: Duration::from_millis(10),
            particles: ParticleParams::default(),
            seed: None,
            frames: None,
            mirror: false,
        }
    }
}

/// Result of parsing the command line
#[derive(Debug, PartialEq)]
pub enum Command {
    Run(Config),
    Help,
}

#[derive(Debug, PartialEq, Eq)]
pub enum CliError {
    MissingValue(String),
    InvalidValue { option: String, value: String },
    UnknownOption(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::MissingValue(option) => write!(f, "{} requires a value", option),
            CliError::InvalidValue { option, value } => {
                write!(f, "invalid value for {}: {}", option, value)
            }
            CliError::UnknownOption(option) => write!(f, "unknown option: {}", option),
        }
    }
}

impl std::error::Error for CliError {}

pub fn usage(program: &str) -> String {
    format!(
        "Syntax: {program}\
         \n\t [-d device | -]\
         \n\t [-s device_speed_hz]\
         \n\t [-l num_leds]\
         \n\t [-a {{ rainbow_pulse | launch | particles }} ]\
         \n\t [-p {{ apa102 | sk9822 }} ]\
         \n\t [-t time_step_ms]\
         \n\t [--particles count] [--velocity min max] [--size min max]\
         \n\t [--seed n] [--frames n] [--mirror]"
    )
}

fn next_value<I: Iterator<Item = String>>(args: &mut I, option: &str) -> Result<String, CliError> {
    args.next()
        .ok_or_else(|| CliError::MissingValue(option.to_string()))
}

fn parse_value<T: FromStr, I: Iterator<Item = String>>(
    args: &mut I,
    option: &str,
) -> Result<T, CliError> {
    let value = next_value(args, option)?;
    value.parse().map_err(|_| CliError::InvalidValue {
        option: option.to_string(),
        value,
    })
}

/// Parse arguments (without the program name)
pub fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Command, CliError> {
    let mut args = args.into_iter();
    let mut config = Config::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-d" | "--device" => config.device = next_value(&mut args, &arg)?,
            "-s" | "--speed" => config.speed_hz = parse_value(&mut args, &arg)?,
            "-l" | "--leds" => config.num_leds = parse_value(&mut args, &arg)?,
            "-a" | "--animation" => config.animation = parse_value(&mut args, &arg)?,
            "-p" | "--protocol" => config.protocol = parse_value(&mut args, &arg)?,
            "-t" | "--time-step" => {
                let ms: f64 = parse_value(&mut args, &arg)?;
                if !ms.is_finite() || ms < 0.0 {
                    return Err(CliError::InvalidValue {
                        option: arg,
                        value: ms.to_string(),
                    });
                }
                config.time_step = Duration::from_secs_f64(ms / 1000.0);
            }
            "--particles" => config.particles.particle_count = parse_value(&mut args, &arg)?,
            "--velocity" => {
                config.particles.min_velocity = parse_value(&mut args, &arg)?;
                config.particles.max_velocity = parse_value(&mut args, &arg)?;
            }
            "--size" => {
                config.particles.min_size = parse_value(&mut args, &arg)?;
                config.particles.max_size = parse_value(&mut args, &arg)?;
            }
            "--seed" => config.seed = Some(parse_value(&mut args, &arg)?),
            "--frames" => config.frames = Some(parse_value(&mut args, &arg)?),
            "--mirror" => config.mirror = true,
            "-h" | "--help" => return Ok(Command::Help),
            _ => return Err(CliError::UnknownOption(arg)),
        }
    }

    if config.num_leds == 0 {
        return Err(CliError::InvalidValue {
            option: "-l".to_string(),
            value: "0".to_string(),
        });
    }
    if config.speed_hz == 0 {
        return Err(CliError::InvalidValue {
            option: "-s".to_string(),
            value: "0".to_string(),
        });
    }
    Ok(Command::Run(config))
}
