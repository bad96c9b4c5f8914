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

//! retrieval of raw TLE texts. Whatever fails here is fatal for the whole run - there are no retries

use std::{fs, path::{Path,PathBuf}};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{debug,warn};

use crate::errors::{retrieval_error, OdinSatCatError, Result};

/// something that turns a source locator into the raw text of a TLE catalog
#[async_trait]
pub trait TleSource {
    async fn fetch_text (&self, locator: &str)->Result<String>;
}

/// retrieve TLE texts via HTTP GET, optionally keeping a copy of each downloaded text in a cache dir
pub struct HttpTleSource {
    client: Client,
    cache_dir: Option<PathBuf>,
}

impl HttpTleSource {
    pub fn new (cache_dir: Option<PathBuf>)->Self {
        HttpTleSource { client: Client::new(), cache_dir }
    }

    pub fn with_client (client: Client, cache_dir: Option<PathBuf>)->Self {
        HttpTleSource { client, cache_dir }
    }

    fn store_in_cache (&self, url: &str, text: &str)->Result<()> {
        if let Some(dir) = &self.cache_dir {
            if let Some(fname) = cache_file_name( url) {
                fs::create_dir_all( dir)?;
                let path = dir.join( fname);
                fs::write( &path, text.as_bytes())?;
                debug!("cached {url} in {path:?}");
            }
        }
        Ok(())
    }
}

#[async_trait]
impl TleSource for HttpTleSource {
    async fn fetch_text (&self, url: &str)->Result<String> {
        let response = self.client.get( url).send().await
            .map_err(|e| retrieval_error!("GET {url} failed: {e}"))?;

        match response.status() {
            StatusCode::OK => {
                let text = response.text().await.map_err(|e| retrieval_error!("failed to read response of {url}: {e}"))?;
                if let Err(e) = self.store_in_cache( url, &text) {
                    warn!("failed to cache {url}: {e}"); // not fatal
                }
                Ok(text)
            }
            StatusCode::NOT_FOUND => Err( retrieval_error!("not found {url}")),
            other => Err( retrieval_error!("GET {url} response status {other:?}"))
        }
    }
}

/// read TLE texts from the local filesystem. Locators are paths or file:// URLs, relative paths are
/// resolved against the optional base dir
#[derive(Debug,Default)]
pub struct FileTleSource {
    base_dir: Option<PathBuf>,
}

impl FileTleSource {
    pub fn new (base_dir: Option<PathBuf>)->Self {
        FileTleSource { base_dir }
    }

    pub fn resolve (&self, locator: &str)->PathBuf {
        let path = Path::new( locator.strip_prefix("file://").unwrap_or( locator));
        match &self.base_dir {
            Some(dir) if path.is_relative() => dir.join( path),
            _ => path.to_path_buf()
        }
    }
}

#[async_trait]
impl TleSource for FileTleSource {
    async fn fetch_text (&self, locator: &str)->Result<String> {
        let path = self.resolve( locator);
        fs::read_to_string( &path).map_err(|e| retrieval_error!("failed to read {path:?}: {e}"))
    }
}

/// the source we use for configured catalogs: http(s) locators are downloaded, everything else is a file
pub struct DefaultTleSource {
    http: HttpTleSource,
    file: FileTleSource,
}

impl DefaultTleSource {
    pub fn new (cache_dir: Option<PathBuf>, base_dir: Option<PathBuf>)->Self {
        DefaultTleSource { http: HttpTleSource::new( cache_dir), file: FileTleSource::new( base_dir) }
    }
}

#[async_trait]
impl TleSource for DefaultTleSource {
    async fn fetch_text (&self, locator: &str)->Result<String> {
        if is_http_locator( locator) {
            self.http.fetch_text( locator).await
        } else {
            self.file.fetch_text( locator).await
        }
    }
}

pub fn is_http_locator (locator: &str)->bool {
    locator.starts_with("http://") || locator.starts_with("https://")
}

/// name of the file we keep the text of `url` in. This is the last path element plus the (sanitized)
/// query, so that "gp.php?GROUP=weather&FORMAT=tle" and "gp.php?GROUP=gps-ops&FORMAT=tle" do not collide
pub fn cache_file_name (url: &str)->Option<String> {
    let fname = url_file_name( url)?;
    let query = url.split('#').next().and_then( |u| u.split_once('?')).map( |(_,q)| q).unwrap_or("");

    if query.is_empty() {
        Some( fname.to_string())
    } else {
        let query: String = query.chars()
            .map( |c| if c.is_ascii_alphanumeric() || matches!( c, '.' | '-' | '=') { c } else { '_' })
            .collect();
        Some( format!("{fname}_{query}"))
    }
}

/// last path element of a URL without query or fragment, e.g. "gps-ops.txt"
pub fn url_file_name (url: &str)->Option<&str> {
    let url = url.split(['?','#']).next().unwrap_or( url);
    let path = url.split_once("://").map( |(_,rest)| rest).unwrap_or( url);
    match path.split_once('/') {
        Some((_host, p)) => p.rsplit('/').next().filter( |name| !name.is_empty()),
        None => None
    }
}
