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

use logging::log;

use crate::{
    commitment::HashChallenge,
    config::CovenantConfig,
    state::{ConstructionError, MintOrdinal},
};

/// Builds mint outputs according to a [`CovenantConfig`].
#[derive(Debug, Clone, Default)]
pub struct OrdinalMinter {
    config: CovenantConfig,
}

impl OrdinalMinter {
    pub fn new(config: CovenantConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CovenantConfig {
        &self.config
    }

    /// Lock a new output in `collection_id` to `secret`.
    pub fn mint(
        &self,
        collection_id: impl Into<Vec<u8>>,
        secret: &[u8],
    ) -> Result<MintOrdinal, ConstructionError> {
        let commitment = HashChallenge::from_preimage(self.config.commitment_hash, secret);
        self.mint_with_commitment(collection_id, commitment)
    }

    /// Lock a new output to a digest computed elsewhere with the configured algorithm.
    pub fn mint_with_digest(
        &self,
        collection_id: impl Into<Vec<u8>>,
        digest: &[u8],
    ) -> Result<MintOrdinal, ConstructionError> {
        let commitment = HashChallenge::from_digest(self.config.commitment_hash, digest)?;
        self.mint_with_commitment(collection_id, commitment)
    }

    fn mint_with_commitment(
        &self,
        collection_id: impl Into<Vec<u8>>,
        commitment: HashChallenge,
    ) -> Result<MintOrdinal, ConstructionError> {
        let instance = MintOrdinal::new_with_config(&self.config, collection_id, commitment)?;
        log::debug!(
            "Minted output in collection {} locked to {}",
            instance.collection_id(),
            instance.commitment()
        );
        Ok(instance)
    }
}
