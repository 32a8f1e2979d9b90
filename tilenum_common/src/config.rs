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
use serde::de::DeserializeOwned;

use crate::define_error;
use crate::fs::filepath_contents;

define_error!{ pub ConfigError =
    IOError(#[from] std::io::Error) : "IO error: {0}",
    RonError(#[from] ron::error::SpannedError) : "config parse error: {0}"
}

/// load a RON config file and deserialize it into `C`. Fields that are marked as `#[serde(default)]` in
/// `C` can be omitted from the file
pub fn load_config<C,P> (path: P)->Result<C,ConfigError> where C: DeserializeOwned, P: AsRef<Path> {
    let data = filepath_contents( &path.as_ref())?;
    Ok( ron::de::from_bytes( data.as_slice())? )
}
