use std::{fmt, result::Result as StdResult, str::FromStr};

use serde::{Deserialize, Deserializer, de};

use crate::error::{Error, Result};

/// An RGBA colour with 8 bits per channel. Alpha 255 is opaque.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Colour {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

/// Macro to create an opaque [`Colour`] from a hex string at compile time.
#[macro_export]
macro_rules! rgb {
    ($hex:literal) => {{
        const fn hex_char_to_num(c: u8) -> u8 {
            match c {
                b'0'..=b'9' => c - b'0',
                b'a'..=b'f' => c - b'a' + 10,
                b'A'..=b'F' => c - b'A' + 10,
                _ => panic!("Invalid hex character"),
            }
        }

        const fn parse_hex_byte(high: u8, low: u8) -> u8 {
            hex_char_to_num(high) * 16 + hex_char_to_num(low)
        }

        const BYTES: &[u8] = $hex.as_bytes();
        const START: usize = if BYTES[0] == b'#' { 1 } else { 0 };
        const _: () = assert!(BYTES.len() - START == 6, "hex colour must be 6 digits");

        $crate::style::Colour::rgb(
            parse_hex_byte(BYTES[START], BYTES[START + 1]),
            parse_hex_byte(BYTES[START + 2], BYTES[START + 3]),
            parse_hex_byte(BYTES[START + 4], BYTES[START + 5]),
        )
    }};
}

impl Colour {
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// Opaque green, used for the debug outline of window rects.
    pub const GREEN: Self = Self::rgb(0, 255, 0);
    /// Opaque blue, used for the debug outline of content rects.
    pub const BLUE: Self = Self::rgb(0, 0, 255);
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);

    /// An opaque colour.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// A colour with an explicit alpha channel.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse "#RRGGBB", "RRGGBB", "#RRGGBBAA" or "RRGGBBAA".
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.trim_start_matches('#');
        if !digits.is_ascii() || (digits.len() != 6 && digits.len() != 8) {
            return Err(Error::Invalid(format!("bad hex colour: {hex:?}")));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|_| Error::Invalid(format!("bad hex colour: {hex:?}")))
        };
        let a = if digits.len() == 8 { channel(6)? } else { 255 };
        Ok(Self::rgba(channel(0)?, channel(2)?, channel(4)?, a))
    }

    /// Return the same colour with a different alpha.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// The highlight tone of a bevel: the per-channel average of this colour
    /// and white, weighted one to two. Alpha is preserved.
    pub const fn bevel_light(self) -> Self {
        const fn mix(c: u8) -> u8 {
            ((c as u16 + 255 + 255) / 3) as u8
        }
        Self {
            r: mix(self.r),
            g: mix(self.g),
            b: mix(self.b),
            a: self.a,
        }
    }

    /// Composite this colour over `dst` using source-over blending.
    pub fn over(self, dst: Self) -> Self {
        if self.a == 255 || dst.a == 0 {
            return self;
        }
        if self.a == 0 {
            return dst;
        }
        let sa = self.a as u32;
        let da = dst.a as u32;
        let inv = 255 - sa;
        // Output alpha scaled by 255.
        let oa = sa * 255 + da * inv;
        let channel = |s: u8, d: u8| ((s as u32 * sa * 255 + d as u32 * da * inv) / oa) as u8;
        Self {
            r: channel(self.r, dst.r),
            g: channel(self.g, dst.g),
            b: channel(self.b, dst.b),
            a: ((oa + 127) / 255) as u8,
        }
    }
}

impl fmt::Debug for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(
                f,
                "#{:02x}{:02x}{:02x}{:02x}",
                self.r, self.g, self.b, self.a
            )
        }
    }
}

impl FromStr for Colour {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl From<(u8, u8, u8)> for Colour {
    fn from(v: (u8, u8, u8)) -> Self {
        Self::rgb(v.0, v.1, v.2)
    }
}

/// Serialized forms accepted for a colour.
#[derive(Deserialize)]
#[serde(untagged)]
enum ColourRepr {
    /// A hex string.
    Hex(String),
    /// An `[r, g, b]` or `[r, g, b, a]` array.
    Channels(Vec<u8>),
}

impl ColourRepr {
    /// Convert to a colour, reporting malformed input.
    fn into_colour(self) -> Result<Colour> {
        match self {
            Self::Hex(s) => Colour::from_hex(&s),
            Self::Channels(c) => match c.as_slice() {
                [r, g, b] => Ok(Colour::rgb(*r, *g, *b)),
                [r, g, b, a] => Ok(Colour::rgba(*r, *g, *b, *a)),
                _ => Err(Error::Invalid(format!(
                    "colour needs 3 or 4 channels, got {}",
                    c.len()
                ))),
            },
        }
    }
}

impl<'de> Deserialize<'de> for Colour {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> StdResult<Self, D::Error> {
        ColourRepr::deserialize(deserializer)?
            .into_colour()
            .map_err(de::Error::custom)
    }
}

/// A window background: either a colour, or transparent meaning "do not paint".
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Background {
    /// Paint nothing behind the window.
    Transparent,
    /// Fill the window rect with a colour.
    Colour(Colour),
}

impl From<Background> for Option<Colour> {
    fn from(b: Background) -> Self {
        match b {
            Background::Transparent => None,
            Background::Colour(c) => Some(c),
        }
    }
}

impl From<Colour> for Background {
    fn from(c: Colour) -> Self {
        Self::Colour(c)
    }
}

impl From<Option<Colour>> for Background {
    fn from(c: Option<Colour>) -> Self {
        c.map_or(Self::Transparent, Self::Colour)
    }
}

impl<'de> Deserialize<'de> for Background {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> StdResult<Self, D::Error> {
        match ColourRepr::deserialize(deserializer)? {
            ColourRepr::Hex(s) if s.eq_ignore_ascii_case("transparent") => Ok(Self::Transparent),
            repr => repr
                .into_colour()
                .map(Self::Colour)
                .map_err(de::Error::custom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex() -> Result<()> {
        assert_eq!(Colour::from_hex("#d3d1cb")?, Colour::rgb(0xd3, 0xd1, 0xcb));
        assert_eq!(Colour::from_hex("00000080")?, Colour::rgba(0, 0, 0, 0x80));
        assert!(Colour::from_hex("#12345").is_err());
        assert!(Colour::from_hex("#zz0000").is_err());
        assert_eq!(rgb!("#484848"), Colour::rgb(0x48, 0x48, 0x48));
        Ok(())
    }

    #[test]
    fn bevel_light_averages_with_white() {
        assert_eq!(
            Colour::rgb(0x48, 0x48, 0x48).bevel_light(),
            Colour::rgb(194, 194, 194)
        );
        assert_eq!(Colour::WHITE.bevel_light(), Colour::WHITE);
        assert_eq!(Colour::BLACK.bevel_light(), Colour::rgb(170, 170, 170));
    }

    #[test]
    fn over() {
        let red = Colour::rgb(255, 0, 0);
        assert_eq!(red.over(Colour::WHITE), red);
        assert_eq!(Colour::TRANSPARENT.over(red), red);
        let half = Colour::rgba(0, 0, 255, 128).over(Colour::WHITE);
        assert_eq!(half.a, 255);
        assert_eq!(half.b, 255);
        assert!(half.r > 120 && half.r < 130);
        assert_eq!(red.with_alpha(10).over(Colour::TRANSPARENT).a, 10);
    }

    #[test]
    fn deserialize() -> Result<()> {
        let c: Colour = serde_json::from_str("[1, 2, 3]")?;
        assert_eq!(c, Colour::rgb(1, 2, 3));
        let c: Colour = serde_json::from_str("\"#ffffff\"")?;
        assert_eq!(c, Colour::WHITE);
        let b: Background = serde_json::from_str("\"transparent\"")?;
        assert_eq!(b, Background::Transparent);
        let b: Background = serde_json::from_str("[0, 0, 0, 0]")?;
        assert_eq!(b, Background::Colour(Colour::TRANSPARENT));
        assert!(serde_json::from_str::<Colour>("[1, 2]").is_err());
        Ok(())
    }
}
