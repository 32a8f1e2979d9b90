/*
 * Copyright © 2025, United States Government, as represented by the Administrator of
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License. You may obtain a copy
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

use std::path::Path;
use ab_glyph::{Font,FontVec,PxScale};
use image::Pixel;
use imageproc::drawing::{draw_text_mut, text_size, Canvas};
use tracing::{debug,info,warn};
use tilenum_common::fs::{filepath_contents, find_file_in_dirs};

use crate::config::LabelConfig;
use crate::errors::{Result,TilenumError};

/// 3x5 digit glyphs, one u8 per row with the 3 low bits being the pixel columns (msb = left)
const DIGIT_GLYPHS: [[u8;5];10] = [
    [0b111, 0b101, 0b101, 0b101, 0b111], // 0
    [0b010, 0b110, 0b010, 0b010, 0b111], // 1
    [0b111, 0b001, 0b111, 0b100, 0b111], // 2
    [0b111, 0b001, 0b111, 0b001, 0b111], // 3
    [0b101, 0b101, 0b111, 0b001, 0b001], // 4
    [0b111, 0b100, 0b111, 0b001, 0b111], // 5
    [0b111, 0b100, 0b111, 0b101, 0b111], // 6
    [0b111, 0b001, 0b001, 0b001, 0b001], // 7
    [0b111, 0b101, 0b111, 0b101, 0b111], // 8
    [0b111, 0b101, 0b111, 0b001, 0b111], // 9
];
const GLYPH_W: u32 = 3;
const GLYPH_H: u32 = 5;

/// the font used to render tile labels. This is either a scalable TrueType/OpenType font found on
/// the system or a built-in blocky digit font that does not need any external resources
pub enum LabelFont {
    Outline { font: FontVec, scale: PxScale },
    Digits { scale: u32 },
}

impl LabelFont {
    /// load a scalable font file, `size` being the pixel size of the em square
    pub fn from_file (path: impl AsRef<Path>, size: f32)->Result<LabelFont> {
        let data = filepath_contents( &path.as_ref())?;
        let font = FontVec::try_from_vec( data)?;
        let scale = em_px_scale( &font, size)?;
        Ok( LabelFont::Outline { font, scale } )
    }

    /// the built-in fallback font with glyph pixels scaled to approximate `size`
    pub fn builtin (size: f32)->LabelFont {
        let scale = (size / 6.0).round().max(1.0) as u32;
        LabelFont::Digits { scale }
    }

    pub fn is_builtin (&self)->bool {
        matches!( self, LabelFont::Digits{..})
    }

    /// width and height of the rendered text in pixels
    pub fn text_size (&self, text: &str)->(u32,u32) {
        match self {
            LabelFont::Outline { font, scale } => text_size( *scale, font, text),
            LabelFont::Digits { scale } => {
                let n = text.chars().count() as u32;
                if n == 0 {
                    (0,0)
                } else {
                    (n * GLYPH_W * scale + (n-1) * scale, GLYPH_H * scale)
                }
            }
        }
    }

    /// draw `text` with its upper left corner at (x,y). Pixels outside the canvas are clipped
    pub fn draw_text<C> (&self, canvas: &mut C, color: C::Pixel, x: i32, y: i32, text: &str)
        where C: Canvas, <C::Pixel as Pixel>::Subpixel: Into<f32> + imageproc::definitions::Clamp<f32>
    {
        match self {
            LabelFont::Outline { font, scale } => draw_text_mut( canvas, color, x, y, *scale, font, text),
            LabelFont::Digits { scale } => draw_digits( canvas, color, x, y, *scale, text),
        }
    }
}

/// ab_glyph scales by line height, we want the em square to be `size` pixels
fn em_px_scale (font: &FontVec, size: f32)->Result<PxScale> {
    if !(size > 0.0) {
        return Err( TilenumError::IllegalArgument(format!("invalid font size {size}")))
    }
    let upem = font.units_per_em().ok_or( TilenumError::OpFailed("font has no units_per_em".into()))?;
    Ok( PxScale::from( size * font.height_unscaled() / upem) )
}

fn draw_digits<C: Canvas> (canvas: &mut C, color: C::Pixel, x: i32, y: i32, scale: u32, text: &str) {
    let (w,h) = canvas.dimensions();
    let s = scale as i32;
    let advance = ((GLYPH_W + 1) * scale) as i32;

    let mut x0 = x;
    for c in text.chars() {
        if let Some(d) = c.to_digit(10) {
            for (row, bits) in DIGIT_GLYPHS[d as usize].iter().enumerate() {
                for col in 0..GLYPH_W {
                    if bits & (1 << (GLYPH_W - 1 - col)) != 0 {
                        let px = x0 + col as i32 * s;
                        let py = y + row as i32 * s;
                        for yy in py..py+s {
                            for xx in px..px+s {
                                if xx >= 0 && yy >= 0 && (xx as u32) < w && (yy as u32) < h {
                                    canvas.draw_pixel( xx as u32, yy as u32, color);
                                }
                            }
                        }
                    }
                }
            }
        }
        x0 += advance;
    }
}

/// find the first loadable font from the configured candidates, falling back to the built-in digit font
pub fn load_label_font (config: &LabelConfig)->LabelFont {
    for name in &config.font_names {
        if let Some(path) = find_file_in_dirs( &[name], &config.font_dirs) {
            match LabelFont::from_file( &path, config.font_size) {
                Ok(font) => {
                    info!("using label font {path:?}");
                    return font
                }
                Err(e) => warn!("ignoring font {path:?}: {e}")
            }
        } else {
            debug!("font {name} not found");
        }
    }

    info!("no label font found, using built-in digits");
    LabelFont::builtin( config.font_size)
}
