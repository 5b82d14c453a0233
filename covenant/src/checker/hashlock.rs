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

use crypto::util::eq::SliceEqualityCheckMitigated;

use crate::commitment::HashChallenge;

#[derive(thiserror::Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum HashlockError {
    #[error("Preimage doesn't match the hash")]
    HashMismatch,
}

impl From<std::convert::Infallible> for HashlockError {
    fn from(value: std::convert::Infallible) -> Self {
        match value {}
    }
}

/// Checks a spender's preimage against a hash challenge.
///
/// Implementations hold no state between calls.
pub trait HashlockChecker {
    type Error: std::error::Error;

    fn check_hashlock(
        &self,
        hash_challenge: &HashChallenge,
        preimage: &[u8],
    ) -> Result<(), Self::Error>;
}

/// Accepts any preimage. Used by the collection-only lock.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpHashlockChecker;

impl HashlockChecker for NoOpHashlockChecker {
    type Error = std::convert::Infallible;

    fn check_hashlock(
        &self,
        _hash_challenge: &HashChallenge,
        _preimage: &[u8],
    ) -> Result<(), Self::Error> {
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StandardHashlockChecker;

impl HashlockChecker for StandardHashlockChecker {
    type Error = HashlockError;

    fn check_hashlock(
        &self,
        hash_challenge: &HashChallenge,
        preimage: &[u8],
    ) -> Result<(), Self::Error> {
        let actual = HashChallenge::from_preimage(hash_challenge.hash_type(), preimage);
        ensure_hashes_equal(actual.as_bytes(), hash_challenge.as_bytes())
    }
}

fn ensure_hashes_equal(left: &[u8], right: &[u8]) -> Result<(), HashlockError> {
    left.mitigated_eq(right).then_some(()).ok_or(HashlockError::HashMismatch)
}
