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

use std::{ffi::OsString, fs::{self,File}, io::{BufWriter,Write}, path::{Path,PathBuf}};
use tracing::info;

use crate::{
    aggregate::{CatalogDocument, CategoryNode},
    errors::{persistence_error, OdinSatCatError, Result}
};

/// JSON text of the document. serde_json keeps non-ASCII chars as they are
pub fn catalog_document_to_string (doc: &[CategoryNode], pretty: bool)->Result<String> {
    let s = if pretty { serde_json::to_string_pretty( doc)? } else { serde_json::to_string( doc)? };
    Ok(s)
}

/// write the document as UTF-8 JSON to `path`. Missing parent dirs are created. We write to a sibling
/// temp file and rename it so that readers never see a partially written document
pub fn write_catalog_document (doc: &[CategoryNode], path: impl AsRef<Path>, pretty: bool)->Result<()> {
    let path = path.as_ref();
    let json = catalog_document_to_string( doc, pretty)?;

    if let Some(dir) = path.parent().filter( |p| !p.as_os_str().is_empty()) {
        fs::create_dir_all( dir).map_err(|e| persistence_error!("cannot create dir {dir:?}: {e}"))?;
    }

    let tmp_path = temp_path_for( path);
    write_file( &tmp_path, json.as_bytes())
        .and_then( |_| fs::rename( &tmp_path, path))
        .map_err(|e| {
            let _ = fs::remove_file( &tmp_path);
            persistence_error!("cannot write {path:?}: {e}")
        })?;

    info!("saved {} categories to {path:?}", doc.len());
    Ok(())
}

pub fn read_catalog_document (path: impl AsRef<Path>)->Result<CatalogDocument> {
    let data = fs::read( path.as_ref())?;
    Ok( serde_json::from_slice( &data)? )
}

fn temp_path_for (path: &Path)->PathBuf {
    let mut fname: OsString = path.file_name().map( |n| n.to_os_string()).unwrap_or_else( || "catalog".into());
    fname.push(".tmp");
    path.with_file_name( fname)
}

fn write_file (path: &Path, data: &[u8])->std::io::Result<()> {
    let mut w = BufWriter::new( File::create( path)?);
    w.write_all( data)?;
    w.write_all( b"\n")?;
    w.flush()
}
