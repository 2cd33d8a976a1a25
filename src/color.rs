use crate::{cursor::ByteCursor, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Straight (non-premultiplied) 8-bit RGBA.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl From<Rgb> for Rgba {
    /// Fill variants without an alpha channel are implicitly opaque.
    fn from(Rgb { r, g, b }: Rgb) -> Self {
        Self {
            r,
            g,
            b,
            a: u8::MAX,
        }
    }
}

pub fn decode_rgb(cursor: &mut ByteCursor<'_>) -> Result<Rgb> {
    Ok(Rgb {
        r: cursor.read_u8()?,
        g: cursor.read_u8()?,
        b: cursor.read_u8()?,
    })
}

pub fn decode_rgba(cursor: &mut ByteCursor<'_>) -> Result<Rgba> {
    Ok(Rgba {
        r: cursor.read_u8()?,
        g: cursor.read_u8()?,
        b: cursor.read_u8()?,
        a: cursor.read_u8()?,
    })
}
