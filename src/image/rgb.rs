use serde::{Deserialize, Serialize};

/// 8-bit RGB pixel. Equality is structural over the three channels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[u8; 3]", into = "[u8; 3]")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    #[inline]
    pub const fn gray(v: u8) -> Self {
        Self::new(v, v, v)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(c: [u8; 3]) -> Self {
        Self::new(c[0], c[1], c[2])
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(p: Rgb) -> Self {
        [p.r, p.g, p.b]
    }
}

impl From<image::Rgb<u8>> for Rgb {
    fn from(p: image::Rgb<u8>) -> Self {
        Self::from(p.0)
    }
}

/// Per-channel arithmetic mean of a pixel set.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct MeanColor {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl From<Rgb> for MeanColor {
    fn from(p: Rgb) -> Self {
        Self {
            r: f64::from(p.r),
            g: f64::from(p.g),
            b: f64::from(p.b),
        }
    }
}
