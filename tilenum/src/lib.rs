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

//! overlay sequential tile indices onto grid-aligned tileset images
//! this mostly wraps the external 'image' and 'imageproc' crates

use std::{io::{self,Write}, path::{Path,PathBuf}};
use image::{DynamicImage, GenericImageView, ImageFormat, RgbaImage, ImageError};
use imageproc::{drawing::{draw_filled_rect_mut, Blend}, rect::Rect};
use tracing::{debug,info};
use tilenum_common::fs::sibling_path_with_suffix;

mod errors;
pub use errors::{Result,TilenumError};

pub mod config;
pub use config::{LabelConfig, load_label_config, DEFAULT_CELL_SIZE};

mod font;
pub use font::{LabelFont, load_label_font};

/// what gets appended to the source file stem if no explicit output path is given
pub const NUMBERED_SUFFIX: &str = "-numbered.png";

/* #region grid ******************************************************************************************************/

/// the grid of complete square cells of an image. Partial cells at the right and bottom border are not part of it
#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub struct TileGrid {
    pub cols: u32,
    pub rows: u32,
    pub cell_size: u32,
}

/// a single grid cell with its 1-based row-major index
#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub struct TileCell {
    pub index: u32,
    pub row: u32,
    pub col: u32,
}

impl TileGrid {
    pub fn new (width: u32, height: u32, cell_size: u32)->Result<Self> {
        if cell_size == 0 { return Err( TilenumError::IllegalArgument("cell size has to be > 0".into())) }
        Ok( TileGrid { cols: width / cell_size, rows: height / cell_size, cell_size } )
    }

    pub fn len (&self)->u32 { self.cols * self.rows }

    pub fn is_empty (&self)->bool { self.len() == 0 }

    /// 1-based row-major tile index of the cell at (row,col)
    #[inline]
    pub fn index (&self, row: u32, col: u32)->u32 { row * self.cols + col + 1 }

    /// all cells in row-major order (left to right, top to bottom)
    pub fn cells (&self)->impl Iterator<Item=TileCell> + use<> {
        let grid = *self;
        (0..grid.rows).flat_map( move |row| {
            (0..grid.cols).map( move |col| TileCell { index: grid.index( row, col), row, col })
        })
    }

    /// pixel position of the upper left corner of a cell
    pub fn cell_origin (&self, cell: &TileCell)->(u32,u32) {
        (cell.col * self.cell_size, cell.row * self.cell_size)
    }
}

/* #endregion grid */

/* #region reference grid printing ***********************************************************************************/

/// print the textual tile index reference to stdout
pub fn print_tile_grid (width: u32, height: u32, cell_size: u32)->Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_tile_grid( &mut out, width, height, cell_size)?;
    out.flush()?;
    Ok(())
}

/// write the reference grid. Each row line has its 1-based row number followed by all tile indices right justified
/// to 3 chars, e.g. for a 64x32 image with 16px tiles
/// ```text
/// Row  1:   1   2   3   4 
/// Row  2:   5   6   7   8 
/// ```
pub fn write_tile_grid<W: Write> (w: &mut W, width: u32, height: u32, cell_size: u32)->Result<()> {
    let grid = TileGrid::new( width, height, cell_size)?;

    writeln!( w, "\nTILE NUMBER REFERENCE GRID:")?;
    writeln!( w, "Each number represents a tile index (1-based, left to right, top to bottom)")?;
    writeln!( w)?;

    // rows are printed even if they have no complete cells
    for row in 0..grid.rows {
        write!( w, "Row {:2}: ", row + 1)?;
        for col in 0..grid.cols {
            write!( w, "{:3} ", grid.index( row, col))?;
        }
        writeln!( w)?;
    }

    writeln!( w, "\nTOTAL TILES: {}", grid.len())?;
    Ok(())
}

/* #endregion reference grid printing */

/* #region labeling **************************************************************************************************/

/// get image dimensions without decoding pixel data. A missing file is reported as `TilenumError::NotFound`
pub fn read_tile_dimensions (path: impl AsRef<Path>)->Result<(u32,u32)> {
    let path = path.as_ref();
    match image::image_dimensions( path) {
        Ok(dim) => Ok(dim),
        Err(ImageError::IoError(e)) if e.kind() == io::ErrorKind::NotFound => {
            Err( TilenumError::NotFound( path.display().to_string()))
        }
        Err(e) => Err( e.into())
    }
}

/// `<dir>/<stem>-numbered.png` for a given source image path
pub fn default_output_path (src_path: impl AsRef<Path>)->PathBuf {
    sibling_path_with_suffix( src_path, NUMBERED_SUFFIX)
}

/// return an RGBA copy of `img` with all grid cells labeled by their tile index.
/// The label background is alpha blended over the tile art (it darkens opaque tiles instead of replacing
/// them with a fixed translucent color). Only fully transparent tiles end up with the plain background color
pub fn label_image (img: &DynamicImage, font: &LabelFont, config: &LabelConfig)->Result<RgbaImage> {
    config.check()?;
    let (width,height) = img.dimensions();
    let grid = TileGrid::new( width, height, config.cell_size)?;

    let mut numbered = img.to_rgba8();
    let bg = config.background_rgba();
    let fg = config.text_rgba();
    let pad = config.padding;

    for cell in grid.cells() {
        let (x0,y0) = grid.cell_origin( &cell);
        let x = x0 as i32 + config.text_offset;
        let y = y0 as i32 + config.text_offset;
        let text = cell.index.to_string();

        let (tw,th) = font.text_size( &text);
        let rect = Rect::at( x - pad, y - pad).of_size( tw + 2*pad as u32, th + 2*pad as u32);

        // the background is alpha blended so that the tile art shines through, the text is drawn opaque
        let mut blended = Blend( numbered);
        draw_filled_rect_mut( &mut blended, rect, bg);
        numbered = blended.0;

        font.draw_text( &mut numbered, fg, x, y, &text);
    }

    debug!("labeled {} tiles of {}x{} image", grid.len(), width, height);
    Ok( numbered )
}

/// label all tiles of the image at `src_path` and store the result as PNG, overwriting existing files.
/// Returns `Ok(false)` without writing anything if the source is not a regular file (directories count as
/// not found). Other failures
/// (decoding, font loading, encoding) are returned as errors
pub fn label_tiles (src_path: impl AsRef<Path>, cell_size: u32, output_path: Option<&Path>)->Result<bool> {
    let config = LabelConfig::default().with_cell_size( cell_size);
    label_tiles_with_config( src_path, &config, output_path)
}

pub fn label_tiles_with_config (src_path: impl AsRef<Path>, config: &LabelConfig, output_path: Option<&Path>)->Result<bool> {
    let src_path = src_path.as_ref();
    if !src_path.is_file() {
        println!("ERROR: Tileset file not found: {}", src_path.display());
        return Ok(false)
    }
    config.check()?;

    let img = image::open( src_path)?;
    let (width,height) = img.dimensions();
    let grid = TileGrid::new( width, height, config.cell_size)?;

    println!("Processing tileset: {width}x{height} pixels");
    println!("Tiles per row: {}, Tiles per column: {}", grid.cols, grid.rows);
    println!("Total tiles: {}", grid.len());

    let font = load_label_font( config);
    let numbered = label_image( &img, &font, config)?;

    let output_path = match output_path {
        Some(path) => path.to_path_buf(),
        None => default_output_path( src_path)
    };
    numbered.save_with_format( &output_path, ImageFormat::Png)?;
    info!("saved {output_path:?}");

    println!("SUCCESS: Numbered tileset saved as: {}", output_path.display());
    Ok(true)
}

/* #endregion labeling */

/* #region legend ****************************************************************************************************/

/// print the road tile identification guide for a created numbered tileset to stdout
pub fn print_legend (output_name: &str)->Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_legend( &mut out, output_name)?;
    out.flush()?;
    Ok(())
}

/// write the guide that asks the user to map tile indices of `output_name` to road tile names
pub fn write_legend<W: Write> (w: &mut W, output_name: &str)->Result<()> {
    writeln!( w, "\n🎉 Numbered tileset created successfully!")?;
    writeln!( w, "📖 ROAD TILE IDENTIFICATION GUIDE:")?;
    writeln!( w, "\nLook at your new '{output_name}' file and identify:")?;
    writeln!( w, "• STRAIGHT_NS: Vertical straight road")?;
    writeln!( w, "• STRAIGHT_EW: Horizontal straight road")?;
    writeln!( w, "• CORNER_NE/SE/SW/NW: Corner pieces")?;
    writeln!( w, "• T_NORTH/EAST/SOUTH/WEST: T-junctions")?;
    writeln!( w, "• CROSS: 4-way intersection")?;
    writeln!( w, "• DEAD_END_N/E/S/W: Dead ends")?;
    writeln!( w, "\n📝 Reply with: 'STRAIGHT_NS = 35, STRAIGHT_EW = 36, ...'")?;
    Ok(())
}

/* #endregion legend */
