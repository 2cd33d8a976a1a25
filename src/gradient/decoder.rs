use log::trace;

use crate::{
    color::{decode_rgb, decode_rgba},
    cursor::ByteCursor,
    gradient::grammar::{
        ColorSpace, ColorStop, Gradient, GradientSpread, MorphColorStop, MorphGradient,
        COLOR_COUNT_BITS, COLOR_SPACE_BITS, SPREAD_BITS,
    },
    Result,
};

const fn low_mask(bits: u8) -> u8 {
    (1 << bits) - 1
}

pub fn decode_color_stop(cursor: &mut ByteCursor<'_>, with_alpha: bool) -> Result<ColorStop> {
    let ratio = cursor.read_u8()?;

    let color = if with_alpha {
        decode_rgba(cursor)?
    } else {
        decode_rgb(cursor)?.into()
    };

    Ok(ColorStop { ratio, color })
}

/// Both gradient shapes open with the same packed byte,
/// `spread:2 | color_space:2 | count:4`, most significant bits first.
///
/// Shape-version rules (pre-Shape4 ignores spread/color-space and caps the
/// count at 8) belong to the tag parser that knows the version; the raw
/// decoded values are returned as-is.
fn decode_gradient_flags(cursor: &mut ByteCursor<'_>) -> Result<(GradientSpread, ColorSpace, u8)> {
    let flags = cursor.read_u8()?;

    let spread_id = (flags >> (COLOR_SPACE_BITS + COLOR_COUNT_BITS)) & low_mask(SPREAD_BITS);
    let color_space_id = (flags >> COLOR_COUNT_BITS) & low_mask(COLOR_SPACE_BITS);
    let color_count = flags & low_mask(COLOR_COUNT_BITS);

    let spread = GradientSpread::try_from(spread_id)?;
    let color_space = ColorSpace::try_from(color_space_id)?;

    trace!("gradient flags: {spread:?}, {color_space:?}, {color_count} stop(s)");

    Ok((spread, color_space, color_count))
}

pub fn decode_gradient(cursor: &mut ByteCursor<'_>, with_alpha: bool) -> Result<Gradient> {
    let (spread, color_space, color_count) = decode_gradient_flags(cursor)?;

    let colors = (0..color_count)
        .map(|_| decode_color_stop(cursor, with_alpha))
        .collect::<Result<Vec<_>>>()?;

    Ok(Gradient {
        spread,
        color_space,
        colors,
    })
}

/// The base stop and its morph counterpart are encoded back-to-back with no
/// delimiter; the pairing is purely positional.
pub fn decode_morph_color_stop(
    cursor: &mut ByteCursor<'_>,
    with_alpha: bool,
) -> Result<MorphColorStop> {
    let ColorStop { ratio, color } = decode_color_stop(cursor, with_alpha)?;
    let ColorStop {
        ratio: morph_ratio,
        color: morph_color,
    } = decode_color_stop(cursor, with_alpha)?;

    Ok(MorphColorStop {
        ratio,
        color,
        morph_ratio,
        morph_color,
    })
}

pub fn decode_morph_gradient(
    cursor: &mut ByteCursor<'_>,
    with_alpha: bool,
) -> Result<MorphGradient> {
    let (spread, color_space, color_count) = decode_gradient_flags(cursor)?;

    let colors = (0..color_count)
        .map(|_| decode_morph_color_stop(cursor, with_alpha))
        .collect::<Result<Vec<_>>>()?;

    Ok(MorphGradient {
        spread,
        color_space,
        colors,
    })
}
