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

//! odin_satcat creates the satellite category catalog used by the globe viewer. For each configured
//! source it retrieves a CelesTrak style 3-line TLE text, extracts name and NORAD catalog number of
//! each satellite and lists them under the category of the source. Categories and satellites are
//! sorted by name and the result is saved as JSON:
//! ```json
//! [ { "name": "GPS OPERATIONAL", "id": 1, "children": [ { "name": "GPS BIIF-1  (PRN 25)", "id": "36585" }, ..] }, ..]
//! ```

use std::{fs, path::{Path,PathBuf}};
use serde::{Serialize,Deserialize};

pub mod errors;
use errors::{config_error, OdinSatCatError, Result};

pub mod extract;
pub mod catalog;
pub mod source;
pub mod aggregate;
pub mod persist;

use extract::{FixedWidthLayout, TleExtractor};
use catalog::{BuiltinCatalog, SourceEntry};
use source::{is_http_locator, TleSource};
use aggregate::{aggregate, CatalogDocument};
use persist::write_catalog_document;

/// what to retrieve and where to store the result. If loaded with [`load_config`], relative `output`,
/// `cache_dir` and (non-URL) source paths are relative to the directory of the config file
#[derive(Serialize,Deserialize,Debug,Clone)]
pub struct SatCatConfig {
    /// pathname of the JSON document
    pub output: PathBuf,

    /// indented JSON if true
    #[serde(default="default_pretty")]
    pub pretty: bool,

    /// if set we keep a copy of each downloaded TLE text here
    #[serde(default)]
    pub cache_dir: Option<PathBuf>,

    #[serde(default)]
    pub layout: FixedWidthLayout,

    pub sources: Vec<SourceEntry>,
}

fn default_pretty()->bool { true }

impl SatCatConfig {
    pub fn new (output: impl Into<PathBuf>, sources: Vec<SourceEntry>)->Self {
        SatCatConfig { output: output.into(), pretty: true, cache_dir: None, layout: FixedWidthLayout::default(), sources }
    }

    pub fn from_builtin (catalog: BuiltinCatalog)->Self {
        SatCatConfig::new( catalog.default_output(), catalog.entries())
    }

    /// make relative output, cache_dir and file source paths relative to `dir`. URLs are not changed
    pub fn resolve_relative_to (&mut self, dir: &Path) {
        if self.output.is_relative() { self.output = dir.join( &self.output) }

        self.cache_dir = self.cache_dir.take().map( |p| if p.is_relative() { dir.join( p) } else { p });

        for entry in &mut self.sources {
            if !is_http_locator( &entry.locator) && !entry.locator.starts_with("file://") && Path::new( &entry.locator).is_relative() {
                entry.locator = dir.join( &entry.locator).to_string_lossy().into_owned();
            }
        }
    }
}

impl Default for SatCatConfig {
    fn default()->Self { SatCatConfig::from_builtin( BuiltinCatalog::Select) }
}

/// load a RON config such as `configs/satcat.ron`. Unreadable or malformed files are a `ConfigError`
pub fn load_config<P: AsRef<Path>> (path: P)->Result<SatCatConfig> {
    let path = path.as_ref();
    let data = fs::read( path).map_err(|e| config_error!("cannot read config {path:?}: {e}"))?;
    let mut config: SatCatConfig = ron::de::from_bytes( data.as_slice())
        .map_err(|e| config_error!("invalid config {path:?}: {e}"))?;

    if config.sources.is_empty() {
        return Err( config_error!("no sources in {path:?}"))
    }

    if let Some(dir) = path.parent() {
        config.resolve_relative_to( dir);
    }
    Ok(config)
}

/// run the whole pipeline: retrieve and aggregate all configured sources, then write the document.
/// Nothing is written if any of the sources cannot be retrieved
pub async fn run<S> (config: &SatCatConfig, source: &S)->Result<CatalogDocument> where S: TleSource + Sync + ?Sized {
    let extractor = TleExtractor::new( config.layout);
    let doc = aggregate( source, &config.sources, &extractor).await?;
    write_catalog_document( &doc, &config.output, config.pretty)?;
    Ok(doc)
}
