/// A themeable color. Oklch is the authoring form (perceptually uniform,
/// pleasant to interpolate); Rgb is the terminal wire form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    Oklch { l: f32, c: f32, h: f32 },
    Rgb { r: u8, g: u8, b: u8 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Scale each channel toward black. `strength` 0.0 leaves the color
    /// untouched, 1.0 is black. Used for dimmed overlay backdrops.
    pub fn dimmed(self, strength: f32) -> Self {
        let keep = (1.0 - strength).clamp(0.0, 1.0);
        Self {
            r: (self.r as f32 * keep) as u8,
            g: (self.g as f32 * keep) as u8,
            b: (self.b as f32 * keep) as u8,
        }
    }
}

impl Color {
    pub fn oklch(l: f32, c: f32, h: f32) -> Self {
        Self::Oklch { l, c, h }
    }

    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb { r, g, b }
    }

    pub fn to_rgb(&self) -> Rgb {
        match self {
            Self::Rgb { r, g, b } => Rgb::new(*r, *g, *b),
            Self::Oklch { l, c, h } => oklch_to_rgb(*l, *c, *h),
        }
    }

    /// Oklch components of this color, converting from sRGB when needed.
    pub fn to_oklch(&self) -> (f32, f32, f32) {
        match self {
            Self::Oklch { l, c, h } => (*l, *c, *h),
            Self::Rgb { r, g, b } => {
                use palette::{IntoColor, Oklch, Srgb};
                let srgb = Srgb::new(*r as f32 / 255.0, *g as f32 / 255.0, *b as f32 / 255.0);
                let oklch: Oklch = srgb.into_color();
                (oklch.l, oklch.chroma, oklch.hue.into_positive_degrees())
            }
        }
    }
}

fn oklch_to_rgb(l: f32, c: f32, h: f32) -> Rgb {
    use palette::{IntoColor, Oklch, Srgb};

    let oklch = Oklch::new(l, c, h);
    let srgb: Srgb = oklch.into_color();
    let (r, g, b) = srgb.into_format::<u8>().into_components();

    Rgb::new(r, g, b)
}
