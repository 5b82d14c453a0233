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

use serialization::{Decode, Encode};

use crate::{
    evaluator::{check_collection, Preimage, StandardEvaluator, ValidationError},
    state::{CollectionId, ConstructionError, MintOrdinal},
};

/// An output that can only be spent by presenting a witness satisfying its condition.
pub trait LockedOutput {
    type Witness;

    fn collection_id(&self) -> &CollectionId;

    fn validate(&self, witness: &Self::Witness) -> Result<(), ValidationError>;
}

impl LockedOutput for MintOrdinal {
    type Witness = Preimage;

    fn collection_id(&self) -> &CollectionId {
        MintOrdinal::collection_id(self)
    }

    fn validate(&self, witness: &Preimage) -> Result<(), ValidationError> {
        StandardEvaluator::standard().evaluate(self, witness)
    }
}

/// Mint output whose only condition is belonging to a collection. It needs no witness.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Encode, Decode)]
pub struct CollectionLock {
    collection_id: CollectionId,
}

impl CollectionLock {
    pub fn new(collection_id: impl Into<Vec<u8>>) -> Result<Self, ConstructionError> {
        Ok(Self {
            collection_id: CollectionId::new(collection_id)?,
        })
    }
}

impl LockedOutput for CollectionLock {
    type Witness = ();

    fn collection_id(&self) -> &CollectionId {
        &self.collection_id
    }

    fn validate(&self, _witness: &()) -> Result<(), ValidationError> {
        check_collection(&self.collection_id)
    }
}
