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

//! The unlock predicate of a mint output.

use utils::ensure;

use crate::{
    checker::{HashlockChecker, HashlockError, NoOpHashlockChecker, StandardHashlockChecker},
    state::{CollectionId, MintOrdinal},
};

#[derive(thiserror::Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum ValidationError {
    #[error("Collection id is required")]
    MissingCollection,

    #[error("Hash does not match")]
    PreimageMismatch,
}

impl From<HashlockError> for ValidationError {
    fn from(value: HashlockError) -> Self {
        match value {
            HashlockError::HashMismatch => ValidationError::PreimageMismatch,
        }
    }
}

impl From<std::convert::Infallible> for ValidationError {
    fn from(value: std::convert::Infallible) -> Self {
        match value {}
    }
}

/// Witness data presented by the spender.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Preimage(Vec<u8>);

impl Preimage {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl From<&[u8]> for Preimage {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl From<Vec<u8>> for Preimage {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

/// Progress of a single evaluation. A failing check ends the evaluation instead of advancing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum EvaluationStage {
    Start,
    CollectionChecked,
    CommitmentChecked,
    Accepted,
}

/// Outcome of an evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Accepted,
    Rejected(ValidationError),
}

impl Decision {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Decision::Accepted)
    }

    pub fn into_result(self) -> Result<(), ValidationError> {
        match self {
            Decision::Accepted => Ok(()),
            Decision::Rejected(e) => Err(e),
        }
    }
}

impl From<Result<(), ValidationError>> for Decision {
    fn from(result: Result<(), ValidationError>) -> Self {
        match result {
            Ok(()) => Decision::Accepted,
            Err(e) => Decision::Rejected(e),
        }
    }
}

/// The collection precondition shared by every mint lock.
pub fn check_collection(collection_id: &CollectionId) -> Result<(), ValidationError> {
    ensure!(!collection_id.is_empty(), ValidationError::MissingCollection);
    Ok(())
}

/// Evaluates the unlock predicate of a [`MintOrdinal`].
///
/// The evaluator is stateless; one instance can be shared by any number of threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct Evaluator<H> {
    hashlock_checker: H,
}

/// Evaluator checking the collection and the preimage.
pub type StandardEvaluator = Evaluator<StandardHashlockChecker>;

/// Evaluator checking the collection only. Any preimage is accepted.
pub type CollectionOnlyEvaluator = Evaluator<NoOpHashlockChecker>;

impl StandardEvaluator {
    pub const fn standard() -> Self {
        Self::custom(StandardHashlockChecker)
    }
}

impl CollectionOnlyEvaluator {
    pub const fn collection_only() -> Self {
        Self::custom(NoOpHashlockChecker)
    }
}

impl<H> Evaluator<H> {
    pub const fn custom(hashlock_checker: H) -> Self {
        Self { hashlock_checker }
    }
}

impl<H> Evaluator<H>
where
    H: HashlockChecker,
    ValidationError: From<H::Error>,
{
    pub fn evaluate(
        &self,
        instance: &MintOrdinal,
        witness: &Preimage,
    ) -> Result<(), ValidationError> {
        self.evaluate_with_observer(instance, witness, |_| ())
    }

    pub fn evaluate_decision(&self, instance: &MintOrdinal, witness: &Preimage) -> Decision {
        self.evaluate(instance, witness).into()
    }

    /// Evaluate, reporting every stage reached to `on_stage`.
    ///
    /// Checks run in a fixed order and the first failing one determines the error.
    pub fn evaluate_with_observer(
        &self,
        instance: &MintOrdinal,
        witness: &Preimage,
        mut on_stage: impl FnMut(EvaluationStage),
    ) -> Result<(), ValidationError> {
        on_stage(EvaluationStage::Start);

        check_collection(instance.collection_id())?;
        on_stage(EvaluationStage::CollectionChecked);

        self.hashlock_checker.check_hashlock(instance.commitment(), witness.as_bytes())?;
        on_stage(EvaluationStage::CommitmentChecked);

        on_stage(EvaluationStage::Accepted);
        Ok(())
    }
}
