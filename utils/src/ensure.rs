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

//! Early exit from a function unless a condition holds.

/// Early exit if given condition is not satisfied.
///
/// * `ensure!(cond)` returns from the enclosing function with [`None`] if `cond` fails
/// * `ensure!(cond, err)` returns from the function with [`Err`]`(err)` if `cond` fails
///
/// ```
/// # use utils::ensure;
/// # #[derive(PartialEq, Eq, Debug)]
/// enum LabelError {
///     Empty,
///     TooLong,
/// }
///
/// fn check_label(label: &[u8]) -> Result<usize, LabelError> {
///     ensure!(!label.is_empty(), LabelError::Empty);
///     ensure!(label.len() <= 8, LabelError::TooLong);
///     Ok(label.len())
/// }
///
/// fn first_byte(label: &[u8]) -> Option<u8> {
///     ensure!(!label.is_empty());
///     Some(label[0])
/// }
///
/// assert_eq!(check_label(b"ord"), Ok(3));
/// assert_eq!(check_label(b""), Err(LabelError::Empty));
/// assert_eq!(check_label(b"0123456789"), Err(LabelError::TooLong));
/// assert_eq!(first_byte(b""), None);
/// ```
///
/// The error expression is only evaluated when the condition fails.
#[macro_export]
macro_rules! ensure {
    ($cond:expr $(,)?) => {
        $cond.then_some(())?
    };
    ($cond:expr, $err:expr $(,)?) => {
        $cond.then_some(()).ok_or_else(|| $err)?
    };
}
