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

use serde::{Serialize,Deserialize};
use tracing::{info,warn};

use crate::{
    catalog::SourceEntry,
    errors::Result,
    extract::{SatelliteRecord, TleExtractor},
    source::TleSource
};

/// the satellites of one source, in the shape the viewer expects
#[derive(Serialize,Deserialize,Debug,Clone,PartialEq,Eq)]
pub struct CategoryNode {
    pub name: String,
    pub id: i64,
    pub children: Vec<SatelliteRecord>,
}

/// the persisted artifact - category nodes sorted by name
pub type CatalogDocument = Vec<CategoryNode>;

/// create the node for `entry` with children sorted by display name
pub fn build_category (entry: &SourceEntry, mut records: Vec<SatelliteRecord>)->CategoryNode {
    sort_records( &mut records);
    CategoryNode { name: entry.category_name.clone(), id: entry.category_id, children: records }
}

/// sort by (case sensitive) display name. Records with the same name are ordered by catalog number
pub fn sort_records (records: &mut [SatelliteRecord]) {
    records.sort_by( |a,b| {
        a.display_name.cmp( &b.display_name).then_with(|| a.catalog_number.cmp( &b.catalog_number))
    });
}

/// sort by (case sensitive) category name, same names are ordered by id
pub fn sort_categories (nodes: &mut [CategoryNode]) {
    nodes.sort_by( |a,b| a.name.cmp( &b.name).then_with(|| a.id.cmp( &b.id)));
}

/// retrieve, extract and sort all `entries` one after the other. The first retrieval error aborts.
/// Satellites listed by several sources show up in each of the respective categories
pub async fn aggregate<S> (source: &S, entries: &[SourceEntry], extractor: &TleExtractor)->Result<CatalogDocument>
    where S: TleSource + Sync + ?Sized
{
    let mut nodes: CatalogDocument = Vec::with_capacity( entries.len());

    for entry in entries {
        info!("retrieving {} from {}", entry.category_name, entry.locator);
        let text = source.fetch_text( &entry.locator).await?;
        nodes.push( category_from_text( entry, &text, extractor));
    }

    sort_categories( &mut nodes);
    Ok(nodes)
}

/// the same as [`aggregate`] for texts we already have
pub fn aggregate_texts<'a,I> (entries_with_texts: I, extractor: &TleExtractor)->CatalogDocument
    where I: IntoIterator<Item=(&'a SourceEntry, &'a str)>
{
    let mut nodes: CatalogDocument = entries_with_texts.into_iter()
        .map( |(entry,text)| category_from_text( entry, text, extractor))
        .collect();

    sort_categories( &mut nodes);
    nodes
}

fn category_from_text (entry: &SourceEntry, text: &str, extractor: &TleExtractor)->CategoryNode {
    let extraction = extractor.extract( text);
    if extraction.trailing_lines > 0 {
        warn!("ignoring {} trailing line(s) of incomplete TLE group in {}", extraction.trailing_lines, entry.locator);
    }
    info!("{}: {} satellites", entry.category_name, extraction.records.len());

    build_category( entry, extraction.records)
}
