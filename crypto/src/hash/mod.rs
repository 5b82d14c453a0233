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

use generic_array::GenericArray;

pub use ripemd::Ripemd160;
pub use sha1::Sha1;
pub use sha2::{Digest, Sha256};

/// Hash the given bytes with the digest `D`.
pub fn hash<D: Digest, T: AsRef<[u8]>>(in_bytes: T) -> GenericArray<u8, D::OutputSize> {
    let mut hasher = D::new();
    hasher.update(in_bytes);
    hasher.finalize()
}

pub fn sha256<T: AsRef<[u8]>>(in_bytes: T) -> [u8; 32] {
    hash::<Sha256, _>(in_bytes).into()
}

/// Bitcoin-style HASH160, i.e. `RIPEMD160(SHA256(data))`.
pub fn hash160<T: AsRef<[u8]>>(in_bytes: T) -> [u8; 20] {
    hash::<Ripemd160, _>(hash::<Sha256, _>(in_bytes)).into()
}

/// Bitcoin-style HASH256, i.e. `SHA256(SHA256(data))`.
pub fn hash256<T: AsRef<[u8]>>(in_bytes: T) -> [u8; 32] {
    hash::<Sha256, _>(hash::<Sha256, _>(in_bytes)).into()
}
