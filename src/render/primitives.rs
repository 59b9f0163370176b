use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Builds a color from 8-bit channels.
    #[must_use]
    pub fn rgba8(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self::rgba(
            f64::from(red) / 255.0,
            f64::from(green) / 255.0,
            f64::from(blue) / 255.0,
            f64::from(alpha) / 255.0,
        )
    }

    /// Parses `#rrggbb` or `#rrggbbaa`.
    pub fn from_hex(hex: &str) -> ChartResult<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if !(digits.len() == 6 || digits.len() == 8) || !digits.is_ascii() {
            return Err(ChartError::InvalidData(format!(
                "color `{hex}` must be #rrggbb or #rrggbbaa"
            )));
        }

        let channel = |offset: usize| {
            u8::from_str_radix(&digits[offset..offset + 2], 16).map_err(|_| {
                ChartError::InvalidData(format!("color `{hex}` has a non-hex channel"))
            })
        };
        let alpha = if digits.len() == 8 { channel(6)? } else { 255 };
        Ok(Self::rgba8(channel(0)?, channel(2)?, channel(4)?, alpha))
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Fill source for `DrawingSurface::fill_path`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Paint {
    Solid(Color),
    /// Linear gradient from `start` at pixel Y `top` to `end` at `bottom`.
    VerticalGradient {
        top: f64,
        bottom: f64,
        start: Color,
        end: Color,
    },
}

impl Paint {
    pub fn validate(self) -> ChartResult<()> {
        match self {
            Self::Solid(color) => color.validate(),
            Self::VerticalGradient {
                top,
                bottom,
                start,
                end,
            } => {
                if !top.is_finite() || !bottom.is_finite() {
                    return Err(ChartError::InvalidData(
                        "gradient extent must be finite".to_owned(),
                    ));
                }
                start.validate()?;
                end.validate()
            }
        }
    }
}

/// Font used for labels and readouts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Font {
    pub family: &'static str,
    pub size_px: f64,
}

impl Font {
    #[must_use]
    pub const fn new(family: &'static str, size_px: f64) -> Self {
        Self { family, size_px }
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.size_px.is_finite() || self.size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Snaps `pos` so odd-width strokes land on device pixel centres.
#[must_use]
pub fn sharp_pixel(pos: f64, pixel_ratio: f64, thickness: f64) -> f64 {
    if thickness.rem_euclid(2.0) == 0.0 {
        return pos;
    }
    pos + pixel_ratio / 2.0
}

#[cfg(test)]
mod tests {
    use super::{Color, sharp_pixel};

    #[test]
    fn hex_colors_parse_with_optional_alpha() {
        let green = Color::from_hex("#24a599").expect("rgb");
        assert!((green.red - 36.0 / 255.0).abs() <= 1e-12);
        assert_eq!(green.alpha, 1.0);

        let translucent = Color::from_hex("#ffffff33").expect("rgba");
        assert!((translucent.alpha - 0.2).abs() <= 1e-12);

        assert!(Color::from_hex("#fff").is_err());
        assert!(Color::from_hex("#gg0000").is_err());
    }

    #[test]
    fn sharp_pixel_offsets_odd_widths_only() {
        assert_eq!(sharp_pixel(10.0, 2.0, 1.0), 11.0);
        assert_eq!(sharp_pixel(10.0, 2.0, 2.0), 10.0);
        assert_eq!(sharp_pixel(10.0, 1.0, 3.0), 10.5);
    }
}
