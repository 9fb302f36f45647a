/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::transformer::*;
use crate::consts::*;
use crate::error::*;
use crate::matrix::*;

use std::f64;

///
/// Transformer that computes every operation with closed-form arithmetic
///
/// This has no dependency on a host geometry primitive, so it works in
/// restricted environments where `KurboTransformer` can't be used. The two
/// produce the same results to within floating-point rounding.
///
pub struct SoftwareTransformer;

impl SoftwareTransformer {
    ///
    /// Composes a matrix with a rotation by an angle in radians
    ///
    fn rotate_radians(&self, matrix: &AffineMatrix, radians: f64) -> AffineMatrix {
        let cos = f64::cos(radians);
        let sin = f64::sin(radians);

        self.multiply(matrix, &AffineMatrix::new(cos, sin, -sin, cos, 0.0, 0.0))
    }
}

impl MatrixTransformer for SoftwareTransformer {
    fn flip_x(&self, matrix: &AffineMatrix) -> AffineMatrix {
        self.multiply(matrix, &AffineMatrix::FLIP_X)
    }

    fn flip_y(&self, matrix: &AffineMatrix) -> AffineMatrix {
        self.multiply(matrix, &AffineMatrix::FLIP_Y)
    }

    fn inverse(&self, matrix: &AffineMatrix) -> Result<AffineMatrix, TransformError> {
        let det = matrix.determinant();

        if det.abs() < MIN_DETERMINANT {
            return Err(TransformError::NotInvertible);
        }

        // Adjugate of the linear part over the determinant, with the
        // translation mapped back through it
        let inv_det = 1.0 / det;

        Ok(AffineMatrix {
            scale_x: matrix.scale_y * inv_det,
            shear_y: -matrix.shear_y * inv_det,
            shear_x: -matrix.shear_x * inv_det,
            scale_y: matrix.scale_x * inv_det,
            translate_x: (matrix.shear_x * matrix.translate_y - matrix.scale_y * matrix.translate_x) * inv_det,
            translate_y: (matrix.shear_y * matrix.translate_x - matrix.scale_x * matrix.translate_y) * inv_det,
        })
    }

    fn multiply(&self, a: &AffineMatrix, b: &AffineMatrix) -> AffineMatrix {
        // 3x3 product with the bottom rows fixed at 0 0 1
        AffineMatrix {
            scale_x: a.scale_x * b.scale_x + a.shear_x * b.shear_y,
            shear_y: a.shear_y * b.scale_x + a.scale_y * b.shear_y,
            shear_x: a.scale_x * b.shear_x + a.shear_x * b.scale_y,
            scale_y: a.shear_y * b.shear_x + a.scale_y * b.scale_y,
            translate_x: a.scale_x * b.translate_x + a.shear_x * b.translate_y + a.translate_x,
            translate_y: a.shear_y * b.translate_x + a.scale_y * b.translate_y + a.translate_y,
        }
    }

    fn rotate(&self, matrix: &AffineMatrix, degrees: f64) -> AffineMatrix {
        self.rotate_radians(matrix, degrees / 180.0 * f64::consts::PI)
    }

    fn rotate_from_vector(&self, matrix: &AffineMatrix, x: f64, y: f64) -> Result<AffineMatrix, TransformError> {
        if x == 0.0 && y == 0.0 {
            return Err(TransformError::ZeroVector);
        }

        Ok(self.rotate_radians(matrix, f64::atan2(y, x)))
    }

    fn scale_non_uniform(&self, matrix: &AffineMatrix, scale_x: f64, scale_y: f64) -> AffineMatrix {
        self.multiply(matrix, &AffineMatrix::new(scale_x, 0.0, 0.0, scale_y, 0.0, 0.0))
    }

    fn skew_x(&self, matrix: &AffineMatrix, degrees: f64) -> AffineMatrix {
        let tan = f64::tan(degrees / 180.0 * f64::consts::PI);

        self.multiply(matrix, &AffineMatrix::new(1.0, 0.0, tan, 1.0, 0.0, 0.0))
    }

    fn skew_y(&self, matrix: &AffineMatrix, degrees: f64) -> AffineMatrix {
        let tan = f64::tan(degrees / 180.0 * f64::consts::PI);

        self.multiply(matrix, &AffineMatrix::new(1.0, tan, 0.0, 1.0, 0.0, 0.0))
    }

    fn translate(&self, matrix: &AffineMatrix, x: f64, y: f64) -> AffineMatrix {
        self.multiply(matrix, &AffineMatrix::new(1.0, 0.0, 0.0, 1.0, x, y))
    }
}
