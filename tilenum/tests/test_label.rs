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
#![allow(unused)]

use std::path::{Path,PathBuf};
use image::{DynamicImage, GenericImageView, Rgb, RgbImage, Rgba, RgbaImage};
use tilenum::{
    default_output_path, label_image, label_tiles, label_tiles_with_config, read_tile_dimensions, write_legend,
    LabelConfig, LabelFont, TilenumError
};

// run with "cargo test test_xx -- --nocapture"

const WHITE: Rgba<u8> = Rgba([255,255,255,255]);
const YELLOW: Rgba<u8> = Rgba([255,255,0,255]);

fn builtin_config()->LabelConfig {
    LabelConfig { font_names: vec![], font_dirs: vec![], ..LabelConfig::default() }
}

fn write_tileset (dir: &Path, name: &str, width: u32, height: u32)->PathBuf {
    let img = RgbaImage::from_fn( width, height, |x,y| {
        if (x/16 + y/16) % 2 == 0 { WHITE } else { Rgba([40, 120, 40, 255]) }
    });
    let path = dir.join( name);
    img.save( &path).unwrap();
    path
}

#[test]
fn test_missing_source() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("nope.png");

    let res = label_tiles( &src, 16, None).unwrap();
    assert!( !res);
    assert!( !default_output_path( &src).exists());
    assert_eq!( std::fs::read_dir( dir.path()).unwrap().count(), 0);

    assert!( matches!( read_tile_dimensions( &src), Err(TilenumError::NotFound(_))));
}

#[test]
fn test_directory_source_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("tiles.png");
    std::fs::create_dir( &src).unwrap();

    assert!( !label_tiles( &src, 16, None).unwrap());
    assert!( !default_output_path( &src).exists());
}

#[test]
fn test_label_transparent_tile() {
    let src = DynamicImage::ImageRgba8( RgbaImage::new( 16, 16));
    let config = builtin_config();
    let img = label_image( &src, &LabelFont::builtin( config.font_size), &config).unwrap();

    assert_eq!( *img.get_pixel( 1, 1), Rgba([0,0,0,180]));
    assert_eq!( *img.get_pixel( 4, 2), YELLOW);
    assert_eq!( *img.get_pixel( 15, 15), Rgba([0,0,0,0]));
}

#[test]
fn test_legend() {
    let mut buf: Vec<u8> = Vec::new();
    write_legend( &mut buf, "tileset-v1-numbered.png").unwrap();
    let s = String::from_utf8( buf).unwrap();

    assert!( s.starts_with("\n🎉 Numbered tileset created successfully!\n"));
    assert!( s.contains("\nLook at your new 'tileset-v1-numbered.png' file and identify:\n"));
    for name in ["STRAIGHT_NS", "STRAIGHT_EW", "CORNER_NE/SE/SW/NW", "T_NORTH/EAST/SOUTH/WEST", "CROSS", "DEAD_END_N/E/S/W"] {
        assert!( s.contains( &format!("• {name}: ")), "missing {name}");
    }
    assert!( s.ends_with("'STRAIGHT_NS = 35, STRAIGHT_EW = 36, ...'\n"));
}

#[test]
fn test_undecodable_source() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("garbage.png");
    std::fs::write( &src, b"this is not a png").unwrap();

    match read_tile_dimensions( &src) {
        Err(e @ TilenumError::ImageError(_)) => assert!( e.to_string().starts_with("Image error: ")),
        other => panic!("unexpected result {other:?}")
    }
}

#[test]
fn test_default_output_path() {
    assert_eq!( default_output_path("assets/img/tileset/tileset-v1.png"), PathBuf::from("assets/img/tileset/tileset-v1-numbered.png"));
    assert_eq!( default_output_path("tiles"), PathBuf::from("tiles-numbered.png"));
}

#[test]
fn test_label_keeps_dimensions() {
    let dir = tempfile::tempdir().unwrap();
    let src = write_tileset( dir.path(), "tileset.png", 64, 32);
    assert_eq!( read_tile_dimensions( &src).unwrap(), (64,32));

    assert!( label_tiles( &src, 16, None).unwrap());

    let out = dir.path().join("tileset-numbered.png");
    assert!( out.is_file());
    let img = image::open( &out).unwrap();
    assert_eq!( img.dimensions(), (64,32));
}

#[test]
fn test_label_explicit_output() {
    let dir = tempfile::tempdir().unwrap();
    let src = write_tileset( dir.path(), "tileset.png", 48, 48);
    let out = dir.path().join("reference.png");

    assert!( label_tiles_with_config( &src, &builtin_config(), Some(&out)).unwrap());
    assert!( out.is_file());
    assert!( !dir.path().join("tileset-numbered.png").exists());
    assert_eq!( image::open( &out).unwrap().dimensions(), (48,48));
}

#[test]
fn test_label_rgb_source() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("rgb.png");
    RgbImage::from_pixel( 32, 16, Rgb([10,20,30])).save( &src).unwrap();

    assert!( label_tiles_with_config( &src, &builtin_config(), None).unwrap());
    let img = image::open( dir.path().join("rgb-numbered.png")).unwrap();
    assert_eq!( img.dimensions(), (32,16));
}

#[test]
fn test_label_pixels() {
    let src = DynamicImage::ImageRgba8( RgbaImage::from_pixel( 33, 16, WHITE));
    let config = builtin_config();
    let font = LabelFont::builtin( config.font_size);
    let img = label_image( &src, &font, &config).unwrap();

    assert_eq!( img.dimensions(), (33,16));

    // label "1" at (2,2) with 2x2 glyph pixels, its top stroke is the middle glyph column
    assert_eq!( *img.get_pixel( 4, 2), YELLOW);
    assert_eq!( *img.get_pixel( 5, 3), YELLOW);

    // padding is darkened, not replaced
    let bg = img.get_pixel( 1, 1);
    assert!( bg[0] < 128 && bg[0] == bg[1] && bg[1] == bg[2]);
    assert!( bg[0] > 0); // blended, not overwritten with black

    // tile area outside the label stays untouched
    assert_eq!( *img.get_pixel( 15, 15), WHITE);

    // second tile has its label at (18,2)
    assert_eq!( *img.get_pixel( 20, 2), Rgba([255,255,0,255]));

    // the trailing partial column is not labeled
    assert_eq!( *img.get_pixel( 32, 1), WHITE);
}

#[test]
fn test_label_is_deterministic() {
    let dir = tempfile::tempdir().unwrap();
    let src = write_tileset( dir.path(), "tileset.png", 64, 64);
    let out = default_output_path( &src);

    assert!( label_tiles( &src, 16, None).unwrap());
    let first = image::open( &out).unwrap().to_rgba8();

    assert!( label_tiles( &src, 16, None).unwrap());
    let second = image::open( &out).unwrap().to_rgba8();

    assert_eq!( first.dimensions(), second.dimensions());
    assert!( first.as_raw() == second.as_raw());
}

#[test]
fn test_label_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("label.ron");
    std::fs::write( &path, "(cell_size: 32, font_names: [])").unwrap();

    let config = tilenum::load_label_config( &path).unwrap();
    assert_eq!( config.cell_size, 32);
    assert!( config.font_names.is_empty());
    assert_eq!( config.font_size, 12.0);
    assert_eq!( config.background_color, [0,0,0,180]);

    std::fs::write( &path, "(cell_size: 0)").unwrap();
    assert!( matches!( tilenum::load_label_config( &path), Err(TilenumError::IllegalArgument(_))));
}
