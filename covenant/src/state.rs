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

//! Immutable state carried by a locked mint output.

use serialization::{Decode, Encode};
use utils::ensure;

use crate::{
    commitment::{CommitmentError, HashChallenge, HashType},
    config::CovenantConfig,
};

#[derive(thiserror::Error, Debug, PartialEq, Eq, Clone)]
pub enum ConstructionError {
    #[error("Collection id must not be empty")]
    EmptyCollectionId,

    #[error("Collection id of {len} bytes exceeds the maximum of {max}")]
    CollectionIdTooLong { len: usize, max: usize },

    #[error(transparent)]
    Commitment(#[from] CommitmentError),
}

/// Opaque identifier of the collection a minted item belongs to.
///
/// Values built with [`CollectionId::new`] are never empty. Decoding does not check this, so
/// anything read back from storage is re-checked at spend time.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Encode, Decode)]
pub struct CollectionId(Vec<u8>);

impl CollectionId {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Result<Self, ConstructionError> {
        let bytes = bytes.into();
        ensure!(!bytes.is_empty(), ConstructionError::EmptyCollectionId);
        Ok(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<[u8]> for CollectionId {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl std::fmt::Display for CollectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&hex::encode(&self.0))
    }
}

/// A locked mint output: the collection it belongs to and the commitment a spender must open.
///
/// There are no mutators. Identity is the `(collection_id, commitment)` pair fixed at
/// construction, and every valid spend replays it unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Encode, Decode)]
pub struct MintOrdinal {
    collection_id: CollectionId,
    commitment: HashChallenge,
}

impl MintOrdinal {
    pub fn new(
        collection_id: impl Into<Vec<u8>>,
        commitment: HashChallenge,
    ) -> Result<Self, ConstructionError> {
        Ok(Self {
            collection_id: CollectionId::new(collection_id)?,
            commitment,
        })
    }

    /// Same as [`MintOrdinal::new`], additionally enforcing the configured size limit.
    pub fn new_with_config(
        config: &CovenantConfig,
        collection_id: impl Into<Vec<u8>>,
        commitment: HashChallenge,
    ) -> Result<Self, ConstructionError> {
        let collection_id = CollectionId::new(collection_id)?;
        ensure!(
            collection_id.len() <= config.max_collection_id_len,
            ConstructionError::CollectionIdTooLong {
                len: collection_id.len(),
                max: config.max_collection_id_len,
            }
        );

        Ok(Self {
            collection_id,
            commitment,
        })
    }

    /// Lock the output to `secret`, committing with `hash_type`.
    pub fn from_secret(
        collection_id: impl Into<Vec<u8>>,
        secret: &[u8],
        hash_type: HashType,
    ) -> Result<Self, ConstructionError> {
        Self::new(
            collection_id,
            HashChallenge::from_preimage(hash_type, secret),
        )
    }

    /// The deployment shape where a single SHA-256 digest is both the collection id and the
    /// commitment.
    pub fn self_committed(digest: [u8; 32]) -> Self {
        Self {
            collection_id: CollectionId(digest.to_vec()),
            commitment: HashChallenge::Sha256(digest),
        }
    }

    pub fn collection_id(&self) -> &CollectionId {
        &self.collection_id
    }

    pub fn commitment(&self) -> &HashChallenge {
        &self.commitment
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serialization::hex::{HexDecode, HexEncode};
    use test_utils::random::{make_seedable_rng, Rng, Seed};

    use super::*;

    #[rstest]
    #[trace]
    #[case(Seed::from_entropy())]
    fn construction_preserves_collection_id(#[case] seed: Seed) {
        let mut rng = make_seedable_rng(seed);
        let collection_id = test_utils::random_bytes(&mut rng, 1..300);
        let commitment = HashChallenge::Sha256(rng.gen());

        let instance = MintOrdinal::new(collection_id.clone(), commitment).unwrap();
        assert_eq!(instance.collection_id().as_bytes(), collection_id.as_slice());
        assert_eq!(instance.commitment(), &commitment);
    }

    #[test]
    fn empty_collection_id() {
        let commitment = HashChallenge::from_preimage(HashType::Sha256, b"hello world");
        assert_eq!(
            MintOrdinal::new(Vec::new(), commitment),
            Err(ConstructionError::EmptyCollectionId)
        );
        assert_eq!(
            CollectionId::new(b"".as_slice()),
            Err(ConstructionError::EmptyCollectionId)
        );
    }

    #[rstest]
    #[case(1, 1, true)]
    #[case(16, 16, true)]
    #[case(17, 16, false)]
    #[case(0, 16, false)]
    fn collection_id_limit(#[case] len: usize, #[case] max: usize, #[case] ok: bool) {
        let config = CovenantConfig {
            max_collection_id_len: max,
            ..CovenantConfig::default()
        };
        let commitment = HashChallenge::Sha1([0; 20]);

        let result = MintOrdinal::new_with_config(&config, vec![0xab; len], commitment);
        assert_eq!(result.is_ok(), ok);
        if len > max {
            assert_eq!(
                result,
                Err(ConstructionError::CollectionIdTooLong { len, max })
            );
        }
    }

    #[test]
    fn self_committed_uses_digest_for_both() {
        let digest = crypto::hash::sha256(b"hello world");
        let instance = MintOrdinal::self_committed(digest);
        assert_eq!(instance.collection_id().as_bytes(), digest.as_slice());
        assert_eq!(instance.commitment(), &HashChallenge::Sha256(digest));
    }

    #[test]
    fn decoding_does_not_enforce_non_empty() {
        // compact length 0, followed by the Sha256 variant and 32 zero bytes
        let encoded = format!("0000{}", "00".repeat(32));
        let instance = MintOrdinal::hex_decode_all(encoded).unwrap();
        assert!(instance.collection_id().is_empty());
    }

    #[rstest]
    #[trace]
    #[case(Seed::from_entropy())]
    fn storage_round_trip(#[case] seed: Seed) {
        let mut rng = make_seedable_rng(seed);
        let instance = MintOrdinal::from_secret(
            test_utils::random_bytes(&mut rng, 1..64),
            &test_utils::random_bytes(&mut rng, 0..64),
            HashType::Hash160,
        )
        .unwrap();

        assert_eq!(
            MintOrdinal::hex_decode_all(instance.hex_encode()).unwrap(),
            instance
        );
    }

    #[test]
    fn self_committed_storage_encoding() {
        let digest_hex = "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9";
        let instance = MintOrdinal::self_committed(crypto::hash::sha256(b"hello world"));

        // compact length 32, the collection id, the Sha256 variant, the digest
        let expected = format!("80{digest_hex}00{digest_hex}");
        assert_eq!(instance.hex_encode(), expected);
        assert_eq!(MintOrdinal::hex_decode_all(expected).unwrap(), instance);
    }
}
