// Copyright (c) 2024 RBB S.r.l
// opensource@mintlayer.org
// SPDX-License-Identifier: MIT
// Licensed under the MIT License;
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// https://github.com/mintlayer/mintlayer-core/blob/master/LICENSE
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::commitment::HashType;

pub const DEFAULT_MAX_COLLECTION_ID_LEN: usize = 256;

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Covenant configuration as written in a TOML file. Missing fields take their defaults.
#[must_use]
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CovenantConfigFile {
    /// Hash algorithm used for new commitments.
    pub commitment_hash: Option<HashType>,
    /// Maximum size of a collection id accepted when minting.
    pub max_collection_id_len: Option<usize>,
}

impl CovenantConfigFile {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn read(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CovenantConfig {
    pub commitment_hash: HashType,
    pub max_collection_id_len: usize,
}

impl CovenantConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_commitment_hash(mut self, commitment_hash: HashType) -> Self {
        self.commitment_hash = commitment_hash;
        self
    }

    pub fn with_max_collection_id_len(mut self, max_collection_id_len: usize) -> Self {
        self.max_collection_id_len = max_collection_id_len;
        self
    }
}

impl Default for CovenantConfig {
    fn default() -> Self {
        Self {
            commitment_hash: HashType::Sha256,
            max_collection_id_len: DEFAULT_MAX_COLLECTION_ID_LEN,
        }
    }
}

impl From<CovenantConfigFile> for CovenantConfig {
    fn from(config_file: CovenantConfigFile) -> Self {
        let CovenantConfigFile {
            commitment_hash,
            max_collection_id_len,
        } = config_file;

        Self {
            commitment_hash: commitment_hash.unwrap_or_default(),
            max_collection_id_len: max_collection_id_len.unwrap_or(DEFAULT_MAX_COLLECTION_ID_LEN),
        }
    }
}
