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

use thiserror::Error;

pub type Result<T> = std::result::Result<T, OdinSatCatError>;

#[derive(Error,Debug)]
pub enum OdinSatCatError {

    /// a source could not be retrieved. This is fatal for the whole run
    #[error("retrieval error {0}")]
    RetrievalError( String ),

    /// the catalog document could not be written. Also fatal
    #[error("persistence error {0}")]
    PersistenceError( String ),

    #[error("config error {0}")]
    ConfigError( String ),

    #[error("IO error {0}")]
    IOError( #[from] std::io::Error),

    #[error("JSON error {0}")]
    JsonError( #[from] serde_json::Error),
}

macro_rules! retrieval_error {
    ($fmt:literal $(, $arg:expr )* ) => {
        OdinSatCatError::RetrievalError( format!( $fmt $(, $arg)* ))
    };
}
pub (crate) use retrieval_error;

macro_rules! persistence_error {
    ($fmt:literal $(, $arg:expr )* ) => {
        OdinSatCatError::PersistenceError( format!( $fmt $(, $arg)* ))
    };
}
pub (crate) use persistence_error;

macro_rules! config_error {
    ($fmt:literal $(, $arg:expr )* ) => {
        OdinSatCatError::ConfigError( format!( $fmt $(, $arg)* ))
    };
}
pub (crate) use config_error;
