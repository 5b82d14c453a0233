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

pub mod random;

use randomness::Rng;

/// Generate random bytes with a length picked from `len_range`.
pub fn random_bytes(rng: &mut impl Rng, len_range: std::ops::Range<usize>) -> Vec<u8> {
    let len = rng.gen_range(len_range);
    (0..len).map(|_| rng.gen::<u8>()).collect()
}

pub fn gen_different_value<T, G>(orig_val: &T, mut gen: G) -> T
where
    T: Eq,
    G: FnMut() -> T,
{
    for _ in 0..1000 {
        let val = gen();

        if val != *orig_val {
            return val;
        }
    }

    panic!("Failed to generate a value");
}

#[macro_export]
macro_rules! assert_matches {
    ($in:expr, $pattern:pat $(if $guard:expr)? $(,)?) => {
        match $in {
            $pattern $(if $guard)? => {}
            ref other => panic!(
                "Assertion failed: expression {:?} doesn't match pattern {}",
                other,
                stringify!($pattern)
            ),
        }
    };
}
