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

/// Equality of byte slices that always inspects every byte, so the time taken does not
/// depend on the position of the first differing byte.
pub trait SliceEqualityCheckMitigated {
    fn mitigated_eq(&self, other: &Self) -> bool;
}

impl SliceEqualityCheckMitigated for [u8] {
    #[inline(never)]
    fn mitigated_eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }

        let diff = self.iter().zip(other.iter()).fold(0u8, |acc, (a, b)| acc | (a ^ b));
        std::hint::black_box(diff) == 0
    }
}

impl<const N: usize> SliceEqualityCheckMitigated for [u8; N] {
    fn mitigated_eq(&self, other: &Self) -> bool {
        self.as_slice().mitigated_eq(other.as_slice())
    }
}
