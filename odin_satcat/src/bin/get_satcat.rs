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

//! one-shot tool to create the satellite category JSON for the globe viewer.
//! Without arguments this retrieves the built-in "select" catalog and writes `selectCategories.json`

use std::path::PathBuf;
use clap::Parser;
use lazy_static::lazy_static;
use tracing_subscriber::EnvFilter;
use anyhow::Result;

use odin_satcat::{load_config, run, SatCatConfig, catalog::BuiltinCatalog, source::DefaultTleSource};

#[derive(Parser)]
#[command(about="satellite category catalog generator")]
struct CliOpts {
    /// pathname of SatCatConfig (RON) file. Overrides --catalog. Relative paths in it are relative to its dir
    #[arg(long)]
    config: Option<PathBuf>,

    /// built-in catalog to retrieve
    #[arg(long, value_enum, default_value="select")]
    catalog: BuiltinCatalog,

    /// pathname of output JSON (overrides config)
    #[arg(long)]
    output: Option<PathBuf>,

    /// directory to keep downloaded TLE texts in (overrides config)
    #[arg(long)]
    cache_dir: Option<PathBuf>,

    /// write compact instead of indented JSON
    #[arg(long)]
    compact: bool,
}

lazy_static! { static ref ARGS: CliOpts = CliOpts::parse(); }

#[tokio::main(flavor="current_thread")]
async fn main()->Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter( EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))) // RUST_LOG overrides
        .try_init();

    let config = get_config()?;
    let source = DefaultTleSource::new( config.cache_dir.clone(), None); // config paths are already resolved

    println!("retrieving {} categories..", config.sources.len());
    let doc = run( &config, &source).await?;

    let n_sats: usize = doc.iter().map( |c| c.children.len()).sum();
    println!("saved {} categories with {} satellites to {:?}", doc.len(), n_sats, config.output);

    Ok(())
}

fn get_config()->Result<SatCatConfig> {
    let mut config = match &ARGS.config {
        Some(path) => load_config( path)?,
        None => SatCatConfig::from_builtin( ARGS.catalog)
    };

    if let Some(output) = &ARGS.output { config.output = output.clone() }
    if let Some(cache_dir) = &ARGS.cache_dir { config.cache_dir = Some(cache_dir.clone()) }
    if ARGS.compact { config.pretty = false }

    Ok(config)
}
