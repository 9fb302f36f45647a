/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

/// Smallest determinant magnitude we consider invertible (matrices with a determinant closer to 0 than this collapse space and cannot be inverted)
pub const MIN_DETERMINANT: f64 = 1e-10;
