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

//! Covenant for ordinal mint outputs.
//!
//! A [`MintOrdinal`] binds a collection id and a hash commitment at construction. Spending it
//! requires a preimage of the commitment, checked by an [`Evaluator`]. The NFT ownership
//! record ([`OrdinalNft`]) calls into the lock through the [`LockedOutput`] trait and only
//! moves ownership when the lock accepts.

pub mod checker;
pub mod commitment;
pub mod config;
pub mod evaluator;
pub mod locked_output;
pub mod minter;
pub mod nft;
pub mod state;

pub use checker::{HashlockChecker, HashlockError, NoOpHashlockChecker, StandardHashlockChecker};
pub use commitment::{CommitmentError, HashChallenge, HashType};
pub use config::{ConfigError, CovenantConfig, CovenantConfigFile};
pub use evaluator::{
    CollectionOnlyEvaluator, Decision, EvaluationStage, Evaluator, Preimage, StandardEvaluator,
    ValidationError,
};
pub use locked_output::{CollectionLock, LockedOutput};
pub use minter::OrdinalMinter;
pub use nft::{OrdinalNft, OwnerId, TransferError};
pub use state::{CollectionId, ConstructionError, MintOrdinal};

#[cfg(test)]
mod tests;
