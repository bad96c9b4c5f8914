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
use clap::ValueEnum;

pub const CELESTRAK_ELEMENTS_URL: &'static str = "https://www.celestrak.com/NORAD/elements";

/// a configured TLE text resource and the category its satellites are listed under
#[derive(Serialize,Deserialize,Debug,Clone,PartialEq,Eq)]
pub struct SourceEntry {
    /// http(s) URL, file:// URL or filesystem path of the TLE text
    pub locator: String,
    pub category_name: String,
    pub category_id: i64,
}

impl SourceEntry {
    pub fn new (locator: impl ToString, category_name: impl ToString, category_id: i64)->Self {
        SourceEntry { locator: locator.to_string(), category_name: category_name.to_string(), category_id }
    }

    /// entry for a CelesTrak element set name such as "gps-ops"
    pub fn celestrak (set_name: &str, category_name: impl ToString, category_id: i64)->Self {
        SourceEntry::new( format!("{CELESTRAK_ELEMENTS_URL}/{set_name}.txt"), category_name, category_id)
    }
}

/// the built-in source catalogs
#[derive(ValueEnum,Debug,Clone,Copy,PartialEq,Eq)]
pub enum BuiltinCatalog {
    /// the categories offered for selection in the viewer
    Select,
    /// example list of CelesTrak special-interest element sets. Category names and ids are our own
    /// choice, adapt to what the viewer should offer
    Celestrak,
}

impl BuiltinCatalog {
    pub fn entries (&self)->Vec<SourceEntry> {
        match self {
            BuiltinCatalog::Select => select_categories(),
            BuiltinCatalog::Celestrak => celestrak_categories(),
        }
    }

    /// the output file name the viewer expects for this catalog
    pub fn default_output (&self)->&'static str {
        match self {
            BuiltinCatalog::Select => "selectCategories.json",
            BuiltinCatalog::Celestrak => "categories.json",
        }
    }
}

pub fn select_categories ()->Vec<SourceEntry> {
    vec![
        SourceEntry::celestrak( "gps-ops", "GPS OPERATIONAL", 1),
        SourceEntry::celestrak( "weather", "WEATHER", 2),
        SourceEntry::celestrak( "starlink", "STARLINK", 3),
    ]
}

// example (element set, category) list - ids are assigned in listing order starting at 1
const CELESTRAK_SETS: &[(&str,&str)] = &[
    ("stations", "SPACE STATIONS"),
    ("visual", "100 BRIGHTEST"),
    ("active", "ACTIVE SATELLITES"),
    ("weather", "WEATHER"),
    ("noaa", "NOAA"),
    ("goes", "GOES"),
    ("resource", "EARTH RESOURCES"),
    ("sarsat", "SEARCH & RESCUE"),
    ("dmc", "DISASTER MONITORING"),
    ("tdrss", "TRACKING AND DATA RELAY"),
    ("argos", "ARGOS DATA COLLECTION"),
    ("planet", "PLANET"),
    ("spire", "SPIRE"),
    ("geo", "GEOSTATIONARY"),
    ("intelsat", "INTELSAT"),
    ("ses", "SES"),
    ("iridium-NEXT", "IRIDIUM NEXT"),
    ("starlink", "STARLINK"),
    ("oneweb", "ONEWEB"),
    ("orbcomm", "ORBCOMM"),
    ("globalstar", "GLOBALSTAR"),
    ("amateur", "AMATEUR RADIO"),
    ("gps-ops", "GPS OPERATIONAL"),
    ("glo-ops", "GLONASS OPERATIONAL"),
    ("galileo", "GALILEO"),
    ("beidou", "BEIDOU"),
    ("sbas", "SATELLITE-BASED AUGMENTATION SYSTEM"),
    ("science", "SPACE & EARTH SCIENCE"),
    ("geodetic", "GEODETIC"),
    ("engineering", "ENGINEERING"),
    ("education", "EDUCATION"),
    ("military", "MISCELLANEOUS MILITARY"),
    ("radar", "RADAR CALIBRATION"),
    ("cubesat", "CUBESATS"),
    ("other", "OTHER"),
];

pub fn celestrak_categories ()->Vec<SourceEntry> {
    CELESTRAK_SETS.iter().enumerate()
        .map( |(i,(set_name,category_name))| SourceEntry::celestrak( set_name, category_name, i as i64 + 1))
        .collect()
}
