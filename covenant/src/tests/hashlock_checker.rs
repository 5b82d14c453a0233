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

use strum::IntoEnumIterator;

use super::*;

#[rstest]
#[case([209, 246, 177, 232, 51, 84, 228, 19, 240, 217, 24, 152, 165, 219, 108, 141, 8, 142, 84, 141, 210, 128, 132, 209, 44, 87, 61, 197, 94, 173, 23, 113],
       [157, 6, 130, 9, 15, 13, 14, 19, 25, 16, 83, 196, 241, 85, 78, 166, 172, 66, 16, 178])]
#[case([210, 113, 99, 52, 113, 86, 243, 93, 79, 167, 173, 105, 136, 98, 82, 162, 163, 239, 167, 61, 196, 35, 89, 207, 141, 122, 124, 185, 158, 223, 164, 0],
       [88, 191, 177, 197, 195, 183, 137, 75, 159, 176, 107, 61, 24, 82, 36, 199, 155, 216, 221, 120])]
fn check_hashlock_160(#[case] preimage: [u8; 32], #[case] hash: [u8; 20]) {
    let checker = StandardHashlockChecker;
    checker.check_hashlock(&HashChallenge::Hash160(hash), &preimage).unwrap();
}

#[rstest]
#[trace]
#[case(Seed::from_entropy())]
fn matching_preimage_any_hash(#[case] seed: Seed) {
    let mut rng = make_seedable_rng(seed);
    let preimage = test_utils::random_bytes(&mut rng, 0..200);

    for hash_type in HashType::iter() {
        let challenge = HashChallenge::from_preimage(hash_type, &preimage);
        assert_eq!(
            StandardHashlockChecker.check_hashlock(&challenge, &preimage),
            Ok(())
        );
    }
}

#[rstest]
#[trace]
#[case(Seed::from_entropy())]
fn random_challenge_mismatch(#[case] seed: Seed) {
    let mut rng = make_seedable_rng(seed);

    let preimage: [u8; 32] = rng.gen();
    let challenge = HashChallenge::Hash160(rng.gen());

    assert_eq!(
        StandardHashlockChecker.check_hashlock(&challenge, &preimage),
        Err(HashlockError::HashMismatch)
    );
}

#[rstest]
#[trace]
#[case(Seed::from_entropy())]
fn single_bit_flip_in_preimage(#[case] seed: Seed) {
    let mut rng = make_seedable_rng(seed);

    let preimage = test_utils::random_bytes(&mut rng, 1..100);
    let hash_type = HashType::iter()
        .nth(rng.gen_range(0..HashType::iter().count()))
        .unwrap();
    let challenge = HashChallenge::from_preimage(hash_type, &preimage);

    let mut tampered = preimage.clone();
    let idx = rng.gen_range(0..tampered.len());
    tampered[idx] ^= 1u8 << rng.gen_range(0..8);

    assert_eq!(
        StandardHashlockChecker.check_hashlock(&challenge, &tampered),
        Err(HashlockError::HashMismatch)
    );
}

#[rstest]
#[trace]
#[case(Seed::from_entropy())]
fn noop_checker_accepts_anything(#[case] seed: Seed) {
    let mut rng = make_seedable_rng(seed);

    let preimage = test_utils::random_bytes(&mut rng, 0..100);
    let challenge = HashChallenge::Sha256(rng.gen());

    assert_eq!(NoOpHashlockChecker.check_hashlock(&challenge, &preimage), Ok(()));
}
