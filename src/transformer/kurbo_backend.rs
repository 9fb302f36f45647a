/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::transformer::*;
use crate::consts::*;
use crate::error::*;
use crate::matrix::*;

use kurbo::{Affine, Vec2};

use std::f64;

///
/// Transformer that carries out each operation using `kurbo::Affine` as the
/// underlying 2D affine primitive
///
/// Each call converts the input matrix to a transient `Affine`, concatenates
/// the requested transform onto it, and reads the six coefficients back out.
/// Nothing is held between calls.
///
/// `Affine::inverse()` will happily divide by a vanishing determinant, so this
/// backend checks the determinant itself before inverting rather than passing
/// a garbage matrix back to the caller.
///
pub struct KurboTransformer;

impl From<AffineMatrix> for Affine {
    fn from(matrix: AffineMatrix) -> Affine {
        Affine::new([
            matrix.scale_x,
            matrix.shear_y,
            matrix.shear_x,
            matrix.scale_y,
            matrix.translate_x,
            matrix.translate_y,
        ])
    }
}

impl From<Affine> for AffineMatrix {
    fn from(affine: Affine) -> AffineMatrix {
        let [a, b, c, d, e, f] = affine.as_coeffs();

        AffineMatrix::new(a, b, c, d, e, f)
    }
}

impl MatrixTransformer for KurboTransformer {
    fn flip_x(&self, matrix: &AffineMatrix) -> AffineMatrix {
        (Affine::from(*matrix) * Affine::FLIP_X).into()
    }

    fn flip_y(&self, matrix: &AffineMatrix) -> AffineMatrix {
        (Affine::from(*matrix) * Affine::FLIP_Y).into()
    }

    fn inverse(&self, matrix: &AffineMatrix) -> Result<AffineMatrix, TransformError> {
        let affine = Affine::from(*matrix);

        if affine.determinant().abs() < MIN_DETERMINANT {
            Err(TransformError::NotInvertible)
        } else {
            Ok(affine.inverse().into())
        }
    }

    fn multiply(&self, a: &AffineMatrix, b: &AffineMatrix) -> AffineMatrix {
        (Affine::from(*a) * Affine::from(*b)).into()
    }

    fn rotate(&self, matrix: &AffineMatrix, degrees: f64) -> AffineMatrix {
        Affine::from(*matrix)
            .pre_rotate(degrees / 180.0 * f64::consts::PI)
            .into()
    }

    fn rotate_from_vector(&self, matrix: &AffineMatrix, x: f64, y: f64) -> Result<AffineMatrix, TransformError> {
        if x == 0.0 && y == 0.0 {
            return Err(TransformError::ZeroVector);
        }

        Ok(Affine::from(*matrix).pre_rotate(f64::atan2(y, x)).into())
    }

    fn scale_non_uniform(&self, matrix: &AffineMatrix, scale_x: f64, scale_y: f64) -> AffineMatrix {
        (Affine::from(*matrix) * Affine::scale_non_uniform(scale_x, scale_y)).into()
    }

    fn skew_x(&self, matrix: &AffineMatrix, degrees: f64) -> AffineMatrix {
        let tan = f64::tan(degrees / 180.0 * f64::consts::PI);

        (Affine::from(*matrix) * Affine::skew(tan, 0.0)).into()
    }

    fn skew_y(&self, matrix: &AffineMatrix, degrees: f64) -> AffineMatrix {
        let tan = f64::tan(degrees / 180.0 * f64::consts::PI);

        (Affine::from(*matrix) * Affine::skew(0.0, tan)).into()
    }

    fn translate(&self, matrix: &AffineMatrix, x: f64, y: f64) -> AffineMatrix {
        Affine::from(*matrix).pre_translate(Vec2::new(x, y)).into()
    }
}
