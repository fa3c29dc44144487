//! LED Driver abstraction layer
//!
//! Provides a trait-based abstraction for LED strip drivers, plus the
//! SK9822 / APA102 serializer used on SPI-attached strips.

use std::io::Write;
use std::path::Path;

use spidev::{SpiModeFlags, Spidev, SpidevOptions};

use crate::{DriverError, Led};

/// SPI clock used when none is given
pub const DEFAULT_SPEED_HZ: u32 = 1_000_000;

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
pub trait LedDriver {
    /// Send one finished frame to the strip
    fn update(&mut self, leds: &[Led]) -> Result<(), DriverError>;
}

/// Map a [0, 1] channel to a byte, saturating outside the range
#[inline]
pub fn level(value: f32) -> u8 {
    if value < 0.0 {
        0
    } else if value > 1.0 {
        255
    } else {
        (value * 255.0).round() as u8
    }
}

/// Number of 32-bit words in a frame for `num_leds` LEDs
///
/// One start word, one word per LED, then enough zero words to clock the
/// data through the whole chain.
pub const fn frame_words(num_leds: usize) -> usize {
    num_leds + 2 + num_leds / 64
}

/// Encode a frame into 32-bit words
pub fn encode_frame(leds: &[Led]) -> Vec<[u8; 4]> {
    let mut words = vec![[0u8; 4]; frame_words(leds.len())];
    for (word, led) in words[1..].iter_mut().zip(leds) {
        *word = [
            0xe0 | ((level(led.brightness) >> 3) & 0x1f),
            level(led.colour.b),
            level(led.colour.g),
            level(led.colour.r),
        ];
    }
    words
}

/// SK9822 / APA102 strip driver writing whole frames to `W`
pub struct Sk9822<W: Write> {
    writer: W,
    num_leds: usize,
}

impl<W: Write> Sk9822<W> {
    pub fn new(writer: W, num_leds: usize) -> Self {
        log::info!("SK9822 driver ready for {} LEDs", num_leds);
        Self { writer, num_leds }
    }

    pub fn num_leds(&self) -> usize {
        self.num_leds
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// SPI settings for the strip: mode 0 without chip select, 8-bit words
pub fn spi_options(speed_hz: u32) -> SpidevOptions {
    SpidevOptions::new()
        .mode(SpiModeFlags::SPI_MODE_0 | SpiModeFlags::SPI_NO_CS)
        .bits_per_word(8)
        .max_speed_hz(speed_hz)
        .build()
}

impl Sk9822<Spidev> {
    /// Open and configure an SPI device node such as `/dev/spidev0.0`
    pub fn open(
        path: impl AsRef<Path>,
        num_leds: usize,
        speed_hz: u32,
    ) -> Result<Self, DriverError> {
        let path = path.as_ref();
        log::info!("Opening LED device {} at {} Hz", path.display(), speed_hz);
        let mut spi = Spidev::open(path)?;
        spi.configure(&spi_options(speed_hz))?;
        Ok(Self::new(spi, num_leds))
    }
}

impl<W: Write> LedDriver for Sk9822<W> {
    fn update(&mut self, leds: &[Led]) -> Result<(), DriverError> {
        if leds.len() != self.num_leds {
            return Err(DriverError::LengthMismatch {
                expected: self.num_leds,
                actual: leds.len(),
            });
        }
        let words = encode_frame(leds);
        self.writer.write_all(bytemuck::cast_slice(&words))?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Rgb;

    #[test]
    fn test_level_saturates() {
        assert_eq!(level(-0.5), 0);
        assert_eq!(level(0.0), 0);
        assert_eq!(level(0.5), 128);
        assert_eq!(level(1.0), 255);
        assert_eq!(level(3.0), 255);
    }

    #[test]
    fn test_frame_size() {
        assert_eq!(frame_words(0), 2);
        assert_eq!(frame_words(10), 12);
        assert_eq!(frame_words(288), 288 + 2 + 4);
    }

    #[test]
    fn test_encode_frame_layout() {
        let leds = [
            Led::new(1.0, Rgb::new(1.0, 0.5, 0.0)),
            Led::new(0.5, Rgb::new(0.0, 0.0, 1.0)),
            Led::OFF,
        ];
        let words = encode_frame(&leds);
        assert_eq!(words.len(), 5);
        assert_eq!(words[0], [0, 0, 0, 0]);
        // Header carries the top 5 bits of the brightness, then B, G, R
        assert_eq!(words[1], [0xff, 0, 128, 255]);
        assert_eq!(words[2], [0xe0 | (128 >> 3), 255, 0, 0]);
        assert_eq!(words[3], [0xe0, 0, 0, 0]);
        assert_eq!(words[4], [0, 0, 0, 0]);
    }

    #[test]
    fn test_spi_options() {
        let options = spi_options(DEFAULT_SPEED_HZ);
        assert_eq!(options.max_speed_hz, Some(1_000_000));
        assert_eq!(options.bits_per_word, Some(8));
        assert_eq!(
            options.spi_mode,
            Some(SpiModeFlags::SPI_MODE_0 | SpiModeFlags::SPI_NO_CS)
        );
    }

    #[test]
    fn test_update_writes_whole_frame() {
        let leds = vec![Led::new(1.0, Rgb::WHITE); 70];
        let mut driver = Sk9822::new(Vec::new(), leds.len());
        driver.update(&leds).unwrap();
        let bytes = driver.into_inner();
        assert_eq!(bytes.len(), 4 * (70 + 2 + 1));
        assert_eq!(&bytes[..8], &[0, 0, 0, 0, 0xff, 0xff, 0xff, 0xff]);
        assert!(bytes[4 * 71..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_update_rejects_wrong_length() {
        let mut driver = Sk9822::new(Vec::new(), 4);
        let err = driver.update(&[Led::OFF; 3]).unwrap_err();
        assert!(matches!(
            err,
            DriverError::LengthMismatch {
                expected: 4,
                actual: 3
            }
        ));
        assert!(driver.into_inner().is_empty());
    }
}
