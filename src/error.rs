/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

///
/// Errors that can occur while applying a matrix transform operation
///
/// Only two operations can fail: `inverse()` on a degenerate matrix, and
/// `rotate_from_vector()` on a vector with no direction. Everything else is a
/// total function over finite inputs.
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum TransformError {
    /// The matrix has a determinant too close to 0 to compute an inverse
    NotInvertible,

    /// Both components of the direction vector are 0, so the rotation angle is undefined
    ZeroVector,
}
