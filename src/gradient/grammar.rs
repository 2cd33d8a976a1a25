use crate::{color::Rgba, DecodeError};

// Bit widths of the packed gradient flags byte, most significant first:
// spread, then color space, then stop count.
pub(crate) const SPREAD_BITS: u8 = 2;
pub(crate) const COLOR_SPACE_BITS: u8 = 2;
pub(crate) const COLOR_COUNT_BITS: u8 = 4;

/// Largest stop count the 4-bit flags field can encode. Callers that know
/// the document's shape version may cap further (pre-Shape4 caps at 8);
/// the decoder itself never does.
pub const MAX_COLOR_COUNT: u8 = (1 << COLOR_COUNT_BITS) - 1;

/// Behavior of the ramp beyond its defined extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradientSpread {
    Pad = 0,
    Reflect = 1,
    Repeat = 2,
}

impl TryFrom<u8> for GradientSpread {
    type Error = DecodeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        let val = match value {
            0 => Self::Pad,
            1 => Self::Reflect,
            2 => Self::Repeat,
            foreign => {
                return Err(DecodeError::InvalidEnumValue {
                    field: "gradient spread",
                    value: foreign,
                })
            }
        };

        Ok(val)
    }
}

/// Channel interpretation used when interpolating between stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSpace {
    StandardRgb = 0,
    LinearRgb = 1,
}

impl TryFrom<u8> for ColorSpace {
    type Error = DecodeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        let val = match value {
            0 => Self::StandardRgb,
            1 => Self::LinearRgb,
            foreign => {
                return Err(DecodeError::InvalidEnumValue {
                    field: "color space",
                    value: foreign,
                })
            }
        };

        Ok(val)
    }
}

/// One (position, color) sample along the ramp. `ratio` spans the full byte
/// range; stops arrive in wire order and are not resorted here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorStop {
    pub ratio: u8,
    pub color: Rgba,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gradient {
    pub spread: GradientSpread,
    pub color_space: ColorSpace,
    pub colors: Vec<ColorStop>,
}

/// One interpolation key of a shape tween: the stop as it appears in the
/// base shape and in the morphed shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MorphColorStop {
    pub ratio: u8,
    pub color: Rgba,
    pub morph_ratio: u8,
    pub morph_color: Rgba,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MorphGradient {
    pub spread: GradientSpread,
    pub color_space: ColorSpace,
    pub colors: Vec<MorphColorStop>,
}
