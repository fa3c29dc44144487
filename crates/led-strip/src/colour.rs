//! Linear RGB and HSV colour types

/// RGB color in linear space with values nominally in [0, 1]
///
/// Channels are not clamped: additive blending may push them above 1 and the
/// driver saturates on output.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0.0, 0.0, 0.0);
    pub const WHITE: Rgb = Rgb::new(1.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Add `other * amount` to this colour, channel by channel
    #[inline]
    pub fn add_scaled(&mut self, other: &Rgb, amount: f32) {
        self.r += other.r * amount;
        self.g += other.g * amount;
        self.b += other.b * amount;
    }
}

/// Hue / saturation / value colour
///
/// Hue is in turns: only the fractional part is used, so 1.25 and 0.25 are
/// the same hue.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Hsv {
    pub h: f32,
    pub s: f32,
    pub v: f32,
}

impl Hsv {
    pub const fn new(h: f32, s: f32, v: f32) -> Self {
        Self { h, s, v }
    }

    /// Convert to linear RGB (six-sector hexcone model)
    pub fn to_rgb(self) -> Rgb {
        let h = (self.h - self.h.floor()) * 6.0;
        let s = self.s.clamp(0.0, 1.0);
        let v = self.v.clamp(0.0, 1.0);
        let sector = h as u32;
        let angle = h - sector as f32;
        let p = v * (1.0 - s);
        let q = v * (1.0 - s * angle);
        let t = v * (1.0 - s * (1.0 - angle));
        match sector {
            0 => Rgb::new(v, t, p),
            1 => Rgb::new(q, v, p),
            2 => Rgb::new(p, v, t),
            3 => Rgb::new(p, q, v),
            4 => Rgb::new(t, p, v),
            _ => Rgb::new(v, p, q),
        }
    }
}

impl From<Hsv> for Rgb {
    fn from(hsv: Hsv) -> Self {
        hsv.to_rgb()
    }
}
