use std::fmt;

/// Colors as the drawing backend understands them. Hue arithmetic only;
/// no color-space conversion happens here.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Color {
    /// Hue in degrees, saturation and lightness in percent, alpha in [0, 1].
    Hsla { h: f32, s: f32, l: f32, a: f32 },
    Rgba { r: u8, g: u8, b: u8, a: f32 },
    Hex(&'static str),
    Transparent,
}

impl Color {
    pub const TRANSPARENT_BLACK: Color = Color::Rgba {
        r: 0,
        g: 0,
        b: 0,
        a: 0.0,
    };

    #[inline]
    pub fn hsla(h: f32, s: f32, l: f32, a: f32) -> Self {
        Color::Hsla { h, s, l, a }
    }

    #[inline]
    pub fn white(a: f32) -> Self {
        Color::Rgba {
            r: 255,
            g: 255,
            b: 255,
            a,
        }
    }

    /// CSS color string accepted by Canvas2D fill and stroke styles.
    pub fn css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Color::Hsla { h, s, l, a } => write!(f, "hsla({},{}%,{}%,{})", h, s, l, a),
            Color::Rgba { r, g, b, a } => write!(f, "rgba({},{},{},{})", r, g, b, a),
            Color::Hex(hex) => f.write_str(hex),
            Color::Transparent => f.write_str("transparent"),
        }
    }
}

/// Wrap a hue into `[0, 360)`.
#[inline]
pub fn wrap_hue(h: f32) -> f32 {
    // rem_euclid rounds tiny negatives up to exactly 360
    let w = h.rem_euclid(360.0);
    if w >= 360.0 {
        0.0
    } else {
        w
    }
}
