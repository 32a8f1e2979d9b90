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

use std::fs::File;
use std::io::{self, Read, ErrorKind};
use std::path::{Path,PathBuf};

use crate::macros::io_error;

type Result<T> = std::result::Result<T,std::io::Error>;

pub fn filename<'a,T: AsRef<Path>> (path: &'a T)->Option<&'a str> {
    path.as_ref().file_name().and_then(|ostr| ostr.to_str())
}

pub fn filepath_contents <P: AsRef<Path>> (path: &P) -> Result<Vec<u8>> {
    let mut file = File::open(path)?;
    let md = file.metadata()?;
    let len = md.len();
    if len > 0 {
        let mut contents: Vec<u8> = Vec::with_capacity(len as usize);
        file.read_to_end(&mut contents)?;
        Ok(contents)

    } else { Err(io_error!(ErrorKind::Other, "file empty: {:?}", path.as_ref())) }
}

/// replace the extension of `path` by `suffix`, keeping the directory part. This follows the usual
/// "last dot" rule: "a/b.tar.gz" with suffix "-x.png" becomes "a/b.tar-x.png", a path without extension
/// just gets the suffix appended
pub fn sibling_path_with_suffix (path: impl AsRef<Path>, suffix: &str)->PathBuf {
    let path = path.as_ref();
    match path.file_stem() {
        Some(stem) => {
            let mut fname = stem.to_os_string();
            fname.push( suffix);
            path.with_file_name( fname)
        }
        None => { // empty path or something ending in ".."
            let mut p = path.as_os_str().to_os_string();
            p.push( suffix);
            PathBuf::from(p)
        }
    }
}

/// return the first regular file that matches any of the given names. Each name is first checked as
/// a path of its own (relative to cwd or absolute) and then looked up in `dirs` (in order).
/// Names take precedence over dirs, i.e. all dirs are searched for the first name before we try the second
pub fn find_file_in_dirs <N,D> (names: &[N], dirs: &[D])->Option<PathBuf> where N: AsRef<Path>, D: AsRef<Path> {
    for name in names {
        let name = name.as_ref();
        if name.is_file() { return Some( name.to_path_buf()) }

        if name.is_relative() {
            for dir in dirs {
                let path = dir.as_ref().join( name);
                if path.is_file() { return Some(path) }
            }
        }
    }
    None
}
