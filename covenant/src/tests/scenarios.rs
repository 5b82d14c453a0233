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

use super::*;

fn hello_world_instance() -> MintOrdinal {
    MintOrdinal::self_committed(crypto::hash::sha256(b"hello world"))
}

#[test]
fn unlock_with_correct_message() {
    let instance = hello_world_instance();

    let decision = StandardEvaluator::standard()
        .evaluate_decision(&instance, &Preimage::from(b"hello world".as_slice()));
    assert_eq!(decision, Decision::Accepted);
}

#[test]
fn unlock_with_wrong_message() {
    let instance = hello_world_instance();

    let decision = StandardEvaluator::standard()
        .evaluate_decision(&instance, &Preimage::new(b"wrong message".to_vec()));
    assert_eq!(
        decision,
        Decision::Rejected(ValidationError::PreimageMismatch)
    );
    assert_eq!(
        decision.into_result().unwrap_err().to_string(),
        "Hash does not match"
    );
}

#[test]
fn deploy_with_empty_collection() {
    let commitment = HashChallenge::from_preimage(HashType::Sha256, b"hello world");

    assert_eq!(
        MintOrdinal::new(b"".to_vec(), commitment),
        Err(ConstructionError::EmptyCollectionId)
    );
}

#[test]
fn retry_after_rejection() {
    // a rejected spend leaves the instance usable for a corrected attempt
    let instance = hello_world_instance();
    let evaluator = StandardEvaluator::standard();

    assert_eq!(
        instance.validate(&Preimage::new(b"hello".to_vec())),
        Err(ValidationError::PreimageMismatch)
    );
    assert_eq!(
        evaluator.evaluate(&instance, &Preimage::new(b"hello world".to_vec())),
        Ok(())
    );
}
