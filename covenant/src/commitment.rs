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

use crypto::hash::{self, hash, hash160, hash256, sha256};
use serialization::{Decode, Encode};

/// Hash algorithm a commitment is computed with.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Encode,
    Decode,
    serde::Serialize,
    serde::Deserialize,
    strum::EnumIter,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum HashType {
    #[default]
    Sha256,
    Hash256,
    Hash160,
    Ripemd160,
    Sha1,
}

impl HashType {
    pub const fn digest_len(&self) -> usize {
        match self {
            HashType::Sha256 | HashType::Hash256 => 32,
            HashType::Hash160 | HashType::Ripemd160 | HashType::Sha1 => 20,
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq, Clone)]
pub enum CommitmentError {
    #[error("Digest of {actual} bytes provided for {hash_type} which produces {expected} bytes")]
    IncorrectHashSize {
        hash_type: HashType,
        expected: usize,
        actual: usize,
    },
}

/// The digest a spender's preimage has to hash to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Encode, Decode)]
pub enum HashChallenge {
    #[codec(index = 0)]
    Sha256([u8; 32]),
    #[codec(index = 1)]
    Hash256([u8; 32]),
    #[codec(index = 2)]
    Hash160([u8; 20]),
    #[codec(index = 3)]
    Ripemd160([u8; 20]),
    #[codec(index = 4)]
    Sha1([u8; 20]),
}

impl HashChallenge {
    /// Commit to `preimage` using the given algorithm.
    pub fn from_preimage(hash_type: HashType, preimage: &[u8]) -> Self {
        match hash_type {
            HashType::Sha256 => Self::Sha256(sha256(preimage)),
            HashType::Hash256 => Self::Hash256(hash256(preimage)),
            HashType::Hash160 => Self::Hash160(hash160(preimage)),
            HashType::Ripemd160 => Self::Ripemd160(hash::<hash::Ripemd160, _>(preimage).into()),
            HashType::Sha1 => Self::Sha1(hash::<hash::Sha1, _>(preimage).into()),
        }
    }

    /// Wrap an already computed digest, checking its length against the algorithm.
    pub fn from_digest(hash_type: HashType, digest: &[u8]) -> Result<Self, CommitmentError> {
        let size_error = || CommitmentError::IncorrectHashSize {
            hash_type,
            expected: hash_type.digest_len(),
            actual: digest.len(),
        };

        let challenge = match hash_type {
            HashType::Sha256 => Self::Sha256(digest.try_into().map_err(|_| size_error())?),
            HashType::Hash256 => Self::Hash256(digest.try_into().map_err(|_| size_error())?),
            HashType::Hash160 => Self::Hash160(digest.try_into().map_err(|_| size_error())?),
            HashType::Ripemd160 => Self::Ripemd160(digest.try_into().map_err(|_| size_error())?),
            HashType::Sha1 => Self::Sha1(digest.try_into().map_err(|_| size_error())?),
        };
        Ok(challenge)
    }

    pub fn hash_type(&self) -> HashType {
        match self {
            Self::Sha256(_) => HashType::Sha256,
            Self::Hash256(_) => HashType::Hash256,
            Self::Hash160(_) => HashType::Hash160,
            Self::Ripemd160(_) => HashType::Ripemd160,
            Self::Sha1(_) => HashType::Sha1,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Sha256(d) | Self::Hash256(d) => d.as_slice(),
            Self::Hash160(d) | Self::Ripemd160(d) | Self::Sha1(d) => d.as_slice(),
        }
    }
}

impl std::fmt::Display for HashChallenge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.hash_type(), hex::encode(self.as_bytes()))
    }
}
