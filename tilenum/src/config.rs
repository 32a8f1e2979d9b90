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
use serde::{Serialize,Deserialize};
use image::Rgba;

use crate::errors::{Result,TilenumError};

pub const DEFAULT_CELL_SIZE: u32 = 16;
pub const DEFAULT_FONT_SIZE: f32 = 12.0;

/// rendering parameters for tile labels. All fields have defaults so that config files only need to
/// specify what they change, e.g.
/// ```text
/// ( cell_size: 32, font_names: ["DejaVuSansMono-Bold.ttf"] )
/// ```
#[derive(Debug,Clone,Serialize,Deserialize,PartialEq)]
#[serde(default)]
pub struct LabelConfig {
    /// edge length of square tiles in pixels
    pub cell_size: u32,

    /// font pixel height
    pub font_size: f32,

    /// label origin relative to the upper left corner of its tile
    pub text_offset: i32,

    /// background margin around the label text bounds
    pub padding: i32,

    pub text_color: [u8;4],
    pub background_color: [u8;4],

    /// candidate font files in order of preference
    pub font_names: Vec<String>,

    /// where to look for relative `font_names`
    pub font_dirs: Vec<String>,
}

impl Default for LabelConfig {
    fn default()->Self {
        LabelConfig {
            cell_size: DEFAULT_CELL_SIZE,
            font_size: DEFAULT_FONT_SIZE,
            text_offset: 2,
            padding: 1,
            text_color: [255, 255, 0, 255],
            background_color: [0, 0, 0, 180],
            font_names: vec![ "DejaVuSans-Bold.ttf".to_string(), "arial.ttf".to_string() ],
            font_dirs: default_font_dirs(),
        }
    }
}

impl LabelConfig {
    pub fn with_cell_size (mut self, cell_size: u32)->Self {
        self.cell_size = cell_size;
        self
    }

    pub fn text_rgba (&self)->Rgba<u8> { Rgba(self.text_color) }

    pub fn background_rgba (&self)->Rgba<u8> { Rgba(self.background_color) }

    pub fn check (&self)->Result<()> {
        if self.cell_size == 0 {
            return Err( TilenumError::IllegalArgument("cell size has to be > 0".into()))
        }
        if !(self.font_size > 0.0) {
            return Err( TilenumError::IllegalArgument(format!("invalid font size {}", self.font_size)))
        }
        if self.padding < 0 {
            return Err( TilenumError::IllegalArgument(format!("negative label padding {}", self.padding)))
        }
        Ok(())
    }
}

/// load a RON label config. Fields not specified in the file keep their defaults
pub fn load_label_config (path: impl AsRef<Path>)->Result<LabelConfig> {
    let config: LabelConfig = tilenum_common::load_config( path)?;
    config.check()?;
    Ok(config)
}

fn default_font_dirs()->Vec<String> {
    let mut dirs: Vec<String> = vec![
        "fonts".into(),
        "assets/fonts".into(),
    ];

    if cfg!(target_os = "windows") {
        dirs.push( "C:\\Windows\\Fonts".into());
    } else if cfg!(target_os = "macos") {
        dirs.push( "/Library/Fonts".into());
        dirs.push( "/System/Library/Fonts/Supplemental".into());
    } else {
        dirs.push( "/usr/share/fonts/truetype/dejavu".into());
        dirs.push( "/usr/share/fonts/TTF".into());
        dirs.push( "/usr/share/fonts/dejavu".into());
        dirs.push( "/usr/share/fonts/truetype/msttcorefonts".into());
    }

    dirs
}
