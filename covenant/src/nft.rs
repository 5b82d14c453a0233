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

//! Ownership of a minted ordinal, guarded by its locked output.

use logging::log;
use serialization::{Decode, Encode};

use crate::{evaluator::ValidationError, locked_output::LockedOutput};

#[derive(thiserror::Error, Debug, PartialEq, Eq, Clone)]
pub enum TransferError {
    #[error("Unlock of collection {collection} rejected: {error}")]
    Rejected {
        collection: String,
        error: ValidationError,
    },
}

/// Opaque owner identifier, e.g. an encoded destination.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Encode, Decode)]
pub struct OwnerId(Vec<u8>);

impl OwnerId {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

/// A minted ordinal: its current owner plus the output locking it.
///
/// The lock is never modified. A transfer produces the successor ordinal with the same lock
/// and a new owner. Consuming the predecessor exactly once is up to the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub struct OrdinalNft<L> {
    lock: L,
    owner: OwnerId,
}

impl<L: LockedOutput> OrdinalNft<L> {
    pub fn new(lock: L, owner: OwnerId) -> Self {
        Self { lock, owner }
    }

    pub fn lock(&self) -> &L {
        &self.lock
    }

    pub fn owner(&self) -> &OwnerId {
        &self.owner
    }

    /// Spend this ordinal to `new_owner`. Ownership only moves if the lock accepts `witness`.
    pub fn transfer(
        &self,
        witness: &L::Witness,
        new_owner: OwnerId,
    ) -> Result<Self, TransferError>
    where
        L: Clone,
    {
        let collection = self.lock.collection_id().to_string();

        match self.lock.validate(witness) {
            Ok(()) => {
                log::info!(
                    "Ordinal of collection {collection} transferred to {}",
                    hex::encode(new_owner.as_bytes())
                );
                Ok(Self {
                    lock: self.lock.clone(),
                    owner: new_owner,
                })
            }
            Err(error) => {
                log::warn!("Ordinal transfer in collection {collection} rejected: {error}");
                Err(TransferError::Rejected { collection, error })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        commitment::HashType, evaluator::Preimage, locked_output::CollectionLock,
        state::MintOrdinal,
    };

    #[test]
    fn transfer_with_valid_preimage() {
        logging::init_test_logging();

        let lock = MintOrdinal::from_secret(b"models".to_vec(), b"secret", HashType::Sha256)
            .unwrap();
        let nft = OrdinalNft::new(lock.clone(), OwnerId::new(b"alice".to_vec()));

        let next = nft
            .transfer(&Preimage::new(b"secret".to_vec()), OwnerId::new(b"bob".to_vec()))
            .unwrap();
        assert_eq!(next.owner(), &OwnerId::new(b"bob".to_vec()));
        assert_eq!(next.lock(), &lock);
        assert_eq!(nft.owner(), &OwnerId::new(b"alice".to_vec()));
    }

    #[test]
    fn transfer_with_wrong_preimage() {
        logging::init_test_logging();

        let lock = MintOrdinal::from_secret(b"models".to_vec(), b"secret", HashType::Sha256)
            .unwrap();
        let nft = OrdinalNft::new(lock, OwnerId::new(b"alice".to_vec()));

        let err = nft
            .transfer(&Preimage::new(b"guess".to_vec()), OwnerId::new(b"bob".to_vec()))
            .unwrap_err();
        assert_eq!(
            err,
            TransferError::Rejected {
                collection: hex::encode(b"models"),
                error: ValidationError::PreimageMismatch,
            }
        );
        assert_eq!(nft.owner(), &OwnerId::new(b"alice".to_vec()));
    }

    #[test]
    fn collection_lock_transfer_needs_no_witness() {
        let nft = OrdinalNft::new(
            CollectionLock::new(b"3d".to_vec()).unwrap(),
            OwnerId::new(b"alice".to_vec()),
        );

        let next = nft.transfer(&(), OwnerId::new(b"carol".to_vec())).unwrap();
        assert_eq!(next.owner().as_bytes(), b"carol");
    }
}
