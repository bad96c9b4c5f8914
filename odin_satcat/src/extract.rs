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

//! extraction of satellite records from 3-line TLE catalog texts such as the CelesTrak element sets:
//! ```text
//! ISS (ZARYA)
//! 1 25544U 98067A   25076.92835707  .00016717  00000-0  10270-3 0  9994
//! 2 25544  51.6400 208.9163 0006317  69.9862  25.2906 15.49560532 12181
//! ```
//! We only need the (fixed width) name from the first line and the NORAD catalog number from the
//! second one, the orbital elements are not parsed.

use serde::{Serialize,Deserialize};

/// number of lines that make up one catalog record (name line plus the two TLE lines)
pub const LINES_PER_GROUP: usize = 3;

/// the fixed column positions we extract from. Columns count chars, not bytes
#[derive(Serialize,Deserialize,Debug,Clone,Copy,PartialEq,Eq)]
#[serde(default)]
pub struct FixedWidthLayout {
    /// width of the name field at the start of the name line
    pub name_width: usize,

    /// start of the catalog number within TLE line 1 (after line number and blank)
    pub catalog_number_offset: usize,

    /// width of the catalog number field within TLE line 1
    pub catalog_number_width: usize,
}

impl Default for FixedWidthLayout {
    fn default()->Self {
        FixedWidthLayout { name_width: 23, catalog_number_offset: 2, catalog_number_width: 5 }
    }
}

/// what we keep of a TLE group
#[derive(Serialize,Deserialize,Debug,Clone,PartialEq,Eq)]
pub struct SatelliteRecord {
    #[serde(rename="name")]
    pub display_name: String,

    /// NORAD catalog number as it appears in the TLE. This is a string since some catalogs use
    /// non-numeric prefixes (e.g. alpha-5 numbers)
    #[serde(rename="id")]
    pub catalog_number: String,
}

impl SatelliteRecord {
    pub fn new (display_name: impl ToString, catalog_number: impl ToString)->Self {
        SatelliteRecord { display_name: display_name.to_string(), catalog_number: catalog_number.to_string() }
    }
}

/// result of extracting records from a single source text
#[derive(Debug,Clone,PartialEq,Eq,Default)]
pub struct Extraction {
    /// records in source text order
    pub records: Vec<SatelliteRecord>,

    /// number of lines in an incomplete last group (0, 1 or 2). Those lines did not produce a record
    pub trailing_lines: usize,
}

#[derive(Debug,Clone,Copy,Default)]
pub struct TleExtractor {
    layout: FixedWidthLayout
}

impl TleExtractor {
    pub fn new (layout: FixedWidthLayout)->Self {
        TleExtractor { layout }
    }

    /// extract records from 3-line groups. Blank lines are skipped and do not count towards the group
    /// position, a trailing group with less than 3 lines is dropped (see [`Extraction::trailing_lines`])
    pub fn extract (&self, text: &str)->Extraction {
        let mut records: Vec<SatelliteRecord> = Vec::with_capacity( text.len() / 160);
        let mut n_lines: usize = 0;
        let mut name: &str = "";
        let mut catalog_number: &str = "";

        for line in text.lines().filter(|l| !l.trim().is_empty()) {
            match n_lines % LINES_PER_GROUP {
                0 => name = fixed_field( line, 0, self.layout.name_width),
                1 => catalog_number = fixed_field( line, self.layout.catalog_number_offset, self.layout.catalog_number_width),
                _ => records.push( SatelliteRecord::new( name.trim(), catalog_number))
            }
            n_lines += 1;
        }

        Extraction { records, trailing_lines: n_lines % LINES_PER_GROUP }
    }
}

/// extract records using the standard TLE layout
pub fn extract (text: &str)->Vec<SatelliteRecord> {
    TleExtractor::default().extract( text).records
}

/// get the `width` chars starting at char position `offset`. If the line is too short this returns
/// whatever is left (which might be empty)
pub fn fixed_field (line: &str, offset: usize, width: usize)->&str {
    let start = byte_pos( line, offset);
    let end = start + byte_pos( &line[start..], width);
    &line[start..end]
}

fn byte_pos (s: &str, n_chars: usize)->usize {
    s.char_indices().nth(n_chars).map( |(i,_)| i).unwrap_or( s.len())
}

