/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::transformer::*;
use crate::error::*;
use crate::matrix::*;

///
/// Transformer that leaves every matrix untouched
///
/// Used where transform support is deliberately disabled: callers keep the
/// same `MatrixTransformer` call sites and get their input back from every
/// operation (`multiply` returns its first argument). Nothing is ever
/// inspected, so no operation can fail.
///
pub struct NullTransformer;

impl MatrixTransformer for NullTransformer {
    fn flip_x(&self, matrix: &AffineMatrix) -> AffineMatrix {
        *matrix
    }

    fn flip_y(&self, matrix: &AffineMatrix) -> AffineMatrix {
        *matrix
    }

    fn inverse(&self, matrix: &AffineMatrix) -> Result<AffineMatrix, TransformError> {
        Ok(*matrix)
    }

    fn multiply(&self, a: &AffineMatrix, _b: &AffineMatrix) -> AffineMatrix {
        *a
    }

    fn rotate(&self, matrix: &AffineMatrix, _degrees: f64) -> AffineMatrix {
        *matrix
    }

    fn rotate_from_vector(&self, matrix: &AffineMatrix, _x: f64, _y: f64) -> Result<AffineMatrix, TransformError> {
        Ok(*matrix)
    }

    fn scale_non_uniform(&self, matrix: &AffineMatrix, _scale_x: f64, _scale_y: f64) -> AffineMatrix {
        *matrix
    }

    fn skew_x(&self, matrix: &AffineMatrix, _degrees: f64) -> AffineMatrix {
        *matrix
    }

    fn skew_y(&self, matrix: &AffineMatrix, _degrees: f64) -> AffineMatrix {
        *matrix
    }

    fn translate(&self, matrix: &AffineMatrix, _x: f64, _y: f64) -> AffineMatrix {
        *matrix
    }
}
