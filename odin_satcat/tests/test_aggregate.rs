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

use std::{collections::HashMap, sync::Mutex};
use async_trait::async_trait;

use odin_satcat::{
    aggregate::{aggregate, aggregate_texts, build_category, sort_categories, sort_records, CategoryNode},
    catalog::SourceEntry,
    errors::{OdinSatCatError, Result},
    extract::{SatelliteRecord, TleExtractor},
    source::TleSource
};

/* #region test-data *************************************************************/

const WEATHER: &'static str = "\
NOAA 21 (JPSS-2)
1 54234U 22150A   25076.92835707  .00000366  00000-0  19403-3 0  9994
2 54234  98.7204  17.0432 0002710  72.7407 287.4066 14.19556514121811
GOES 18
1 51850U 22021A   25076.50000000 -.00000100  00000-0  00000+0 0  9990
2 51850   0.0200  90.0000 0001000 200.0000 100.0000  1.00270000 11000
METOP-C
1 43689U 18087A   25076.50000000  .00000100  00000-0  60000-4 0  9992
2 43689  98.6800 140.0000 0002000  80.0000 280.0000 14.21500000330000
";

const GPS: &'static str = "\
GPS BIIR-2  (PRN 13)
1 24876U 97035A   25076.50000000  .00000000  00000-0  00000+0 0  9999
2 24876  55.5000 100.0000 0050000  50.0000 310.0000  2.00560000200000
GPS BIIF-1  (PRN 25)
1 36585U 10022A   25076.50000000 -.00000050  00000-0  00000+0 0  9998
2 36585  54.9000 200.0000 0100000  60.0000 300.0000  2.00570000100000
";

// NOAA 21 is a weather and an earth resource satellite
const RESOURCE: &'static str = "\
NOAA 21 (JPSS-2)
1 54234U 22150A   25076.92835707  .00000366  00000-0  19403-3 0  9994
2 54234  98.7204  17.0432 0002710  72.7407 287.4066 14.19556514121811
";

/// serves texts from memory and records the order in which locators were requested
struct MemTleSource {
    texts: HashMap<String,String>,
    requested: Mutex<Vec<String>>,
}

impl MemTleSource {
    fn new (texts: &[(&str,&str)])->Self {
        let texts = texts.iter().map( |(k,v)| (k.to_string(), v.to_string())).collect();
        MemTleSource { texts, requested: Mutex::new( Vec::new()) }
    }

    fn requested (&self)->Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl TleSource for MemTleSource {
    async fn fetch_text (&self, locator: &str)->Result<String> {
        self.requested.lock().unwrap().push( locator.to_string());
        self.texts.get( locator).cloned().ok_or( OdinSatCatError::RetrievalError( format!("no such source {locator}")))
    }
}

fn entries()->Vec<SourceEntry> {
    vec![
        SourceEntry::new( "mem:weather", "Weather", 2),
        SourceEntry::new( "mem:gps", "GPS Operational", 1),
    ]
}

/* #endregion test-data */

#[test]
fn test_build_category() {
    let records = vec![
        SatelliteRecord::new( "ZARYA", "25544"),
        SatelliteRecord::new( "AQUA", "27424"),
        SatelliteRecord::new( "aqua", "00001"),
        SatelliteRecord::new( "AQUA", "11111"),
    ];
    let node = build_category( &SourceEntry::new( "x", "Stations", 0), records);

    assert_eq!( node.name, "Stations");
    assert_eq!( node.id, 0);

    // case sensitive, ties ordered by catalog number
    let ids: Vec<&str> = node.children.iter().map( |r| r.catalog_number.as_str()).collect();
    assert_eq!( ids, vec!["11111", "27424", "25544", "00001"]);
}

#[test]
fn test_category_order() {
    let weather = entries()[0].clone();
    let gps = entries()[1].clone();
    let doc = aggregate_texts( [(&weather, WEATHER), (&gps, GPS)], &TleExtractor::default());

    let names: Vec<&str> = doc.iter().map( |c| c.name.as_str()).collect();
    assert_eq!( names, vec!["GPS Operational", "Weather"]);

    let weather_sats: Vec<&str> = doc[1].children.iter().map( |r| r.display_name.as_str()).collect();
    assert_eq!( weather_sats, vec!["GOES 18", "METOP-C", "NOAA 21 (JPSS-2)"]);
}

#[test]
fn test_sort_idempotence() {
    let mut records = TleExtractor::default().extract( &format!("{WEATHER}{GPS}")).records;
    sort_records( &mut records);
    let once = records.clone();
    sort_records( &mut records);
    assert_eq!( records, once);

    let mut nodes: Vec<CategoryNode> = vec![
        CategoryNode { name: "b".into(), id: 2, children: vec![] },
        CategoryNode { name: "B".into(), id: 1, children: vec![] },
        CategoryNode { name: "a".into(), id: 3, children: vec![] },
        CategoryNode { name: "a".into(), id: 0, children: vec![] },
    ];
    sort_categories( &mut nodes);
    let once = nodes.clone();
    sort_categories( &mut nodes);
    assert_eq!( nodes, once);

    let keys: Vec<(&str,i64)> = nodes.iter().map( |n| (n.name.as_str(), n.id)).collect();
    assert_eq!( keys, vec![("B",1), ("a",0), ("a",3), ("b",2)]);
}

#[test]
fn test_input_order_independence() {
    let e = entries();
    let extractor = TleExtractor::default();

    let doc1 = aggregate_texts( [(&e[0], WEATHER), (&e[1], GPS)], &extractor);
    let doc2 = aggregate_texts( [(&e[1], GPS), (&e[0], WEATHER)], &extractor);
    assert_eq!( doc1, doc2);
}

#[test]
fn test_no_deduplication() {
    let weather = SourceEntry::new( "mem:weather", "WEATHER", 2);
    let resource = SourceEntry::new( "mem:resource", "EARTH RESOURCES", 7);
    let doc = aggregate_texts( [(&weather, WEATHER), (&resource, RESOURCE)], &TleExtractor::default());

    let n = doc.iter()
        .flat_map( |c| c.children.iter())
        .filter( |r| r.catalog_number == "54234")
        .count();
    assert_eq!( n, 2);
}

#[tokio::test]
async fn test_aggregate_sequential() {
    let source = MemTleSource::new( &[("mem:weather", WEATHER), ("mem:gps", GPS)]);
    let doc = aggregate( &source, &entries(), &TleExtractor::default()).await.unwrap();

    // sources are retrieved in configured order, output is sorted
    assert_eq!( source.requested(), vec!["mem:weather", "mem:gps"]);
    assert_eq!( doc[0].name, "GPS Operational");
    assert_eq!( doc[0].children.len(), 2);
    assert_eq!( doc[1].children.len(), 3);
}

#[tokio::test]
async fn test_aggregate_fail_fast() {
    let source = MemTleSource::new( &[("mem:weather", WEATHER), ("mem:gps", GPS)]);
    let mut entries = entries();
    entries.insert( 1, SourceEntry::new( "mem:missing", "Missing", 9));

    let res = aggregate( &source, &entries, &TleExtractor::default()).await;
    assert!( matches!( res, Err(OdinSatCatError::RetrievalError(_))));

    // nothing after the failed source is requested
    assert_eq!( source.requested(), vec!["mem:weather", "mem:missing"]);
}
