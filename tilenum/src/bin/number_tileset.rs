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
use anyhow::Result;
use tracing_subscriber::EnvFilter;
use tilenum_common::{define_cli, check_cli, fs::filename};
use tilenum::{
    default_output_path, label_tiles_with_config, load_label_config, print_legend, print_tile_grid, read_tile_dimensions,
    LabelConfig, TilenumError
};

define_cli! { ARGS [about="create a copy of a tileset image with numbered tiles and print the tile index grid"] =
    cell_size: Option<u32> [help="tile edge length in pixels (default 16)", long, short],
    font_size: Option<f32> [help="label font size in pixels (default 12)", long],
    config: Option<String> [help="pathname of RON label config file", long],
    output: Option<String> [help="pathname of numbered output image (default <src>-numbered.png)", long, short],
    src_file: String [help="pathname of tileset image", default_value="assets/img/tileset/tileset-v1.png"]
}

fn main()->Result<()> {
    check_cli!(ARGS);

    // note this only succeeds if there is no global subscriber set yet
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())  // use RUST_LOG to set max level
        .with_writer(std::io::stderr)
        .try_init();

    let config = get_config()?;
    let src_path = Path::new( &ARGS.src_file);

    match read_tile_dimensions( src_path) {
        Ok((width,height)) => {
            println!("Found tileset: {width}x{height} pixels");
            if let Err(e) = run( src_path, width, height, &config) {
                println!("ERROR: {e}");
            }
        }
        Err(TilenumError::NotFound(_)) => {
            println!("ERROR: Could not find tileset file: {}", src_path.display());
            println!("Make sure you're running this from the directory that contains the tileset path");
        }
        Err(e) => println!("ERROR: {e}")
    }

    Ok(())
}

fn get_config()->Result<LabelConfig> {
    let mut config = if let Some(path) = &ARGS.config {
        load_label_config( path)?
    } else {
        LabelConfig::default()
    };

    if let Some(cell_size) = ARGS.cell_size { config.cell_size = cell_size }
    if let Some(font_size) = ARGS.font_size { config.font_size = font_size }
    config.check()?;

    Ok(config)
}

fn run (src_path: &Path, width: u32, height: u32, config: &LabelConfig)->tilenum::Result<()> {
    print_tile_grid( width, height, config.cell_size)?;

    let output_path = ARGS.output.as_ref().map( |p| Path::new(p).to_path_buf());
    if label_tiles_with_config( src_path, config, output_path.as_deref())? {
        let output_path = output_path.unwrap_or_else( || default_output_path( src_path));
        print_legend( filename( &output_path).unwrap_or("numbered"))?;
    }

    Ok(())
}
