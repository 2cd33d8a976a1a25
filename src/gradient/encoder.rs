use std::io::{Result, Write};

use crate::{
    color::Rgba,
    gradient::grammar::{
        ColorStop, Gradient, MorphColorStop, MorphGradient, COLOR_COUNT_BITS, COLOR_SPACE_BITS,
        MAX_COLOR_COUNT,
    },
};

pub fn encode_color_stop<W: Write>(w: &mut W, stop: &ColorStop, with_alpha: bool) -> Result<()> {
    let Rgba { r, g, b, a } = stop.color;

    w.write_all(&[stop.ratio, r, g, b])?;
    if with_alpha {
        w.write_all(&[a])?;
    }

    Ok(())
}

pub fn encode_gradient<W: Write>(w: &mut W, gradient: &Gradient, with_alpha: bool) -> Result<()> {
    debug_assert!(gradient.colors.len() <= MAX_COLOR_COUNT as usize);

    w.write_all(&[gradient_flags(
        gradient.spread as u8,
        gradient.color_space as u8,
        gradient.colors.len() as u8,
    )])?;

    for stop in &gradient.colors {
        encode_color_stop(w, stop, with_alpha)?;
    }

    Ok(())
}

pub fn encode_morph_color_stop<W: Write>(
    w: &mut W,
    stop: &MorphColorStop,
    with_alpha: bool,
) -> Result<()> {
    let MorphColorStop {
        ratio,
        color,
        morph_ratio,
        morph_color,
    } = *stop;

    encode_color_stop(w, &ColorStop { ratio, color }, with_alpha)?;
    encode_color_stop(
        w,
        &ColorStop {
            ratio: morph_ratio,
            color: morph_color,
        },
        with_alpha,
    )?;

    Ok(())
}

pub fn encode_morph_gradient<W: Write>(
    w: &mut W,
    gradient: &MorphGradient,
    with_alpha: bool,
) -> Result<()> {
    debug_assert!(gradient.colors.len() <= MAX_COLOR_COUNT as usize);

    w.write_all(&[gradient_flags(
        gradient.spread as u8,
        gradient.color_space as u8,
        gradient.colors.len() as u8,
    )])?;

    for stop in &gradient.colors {
        encode_morph_color_stop(w, stop, with_alpha)?;
    }

    Ok(())
}

const fn gradient_flags(spread_id: u8, color_space_id: u8, color_count: u8) -> u8 {
    spread_id << (COLOR_SPACE_BITS + COLOR_COUNT_BITS) | color_space_id << COLOR_COUNT_BITS
        | color_count
}
