/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::consts::*;

///
/// Represents a 2D affine transformation matrix
///
/// The six fields are laid out as the left two columns of a 3x3 matrix whose
/// bottom row is always `0 0 1`:
///
/// ```text
/// | scale_x  shear_x  translate_x |
/// | shear_y  scale_y  translate_y |
/// |    0        0          1      |
/// ```
///
/// This is a plain value type: any six finite values form a legal matrix, and
/// whether a matrix can be inverted is a derived query rather than something
/// enforced on construction. The fields are public so that a matrix can be
/// edited in place before it's handed to a transformer, but every
/// `MatrixTransformer` operation treats its inputs as read-only and returns a
/// new value.
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct AffineMatrix {
    pub scale_x: f64,
    pub shear_y: f64,
    pub shear_x: f64,
    pub scale_y: f64,
    pub translate_x: f64,
    pub translate_y: f64,
}

impl AffineMatrix {
    /// The identity transform
    pub const IDENTITY: AffineMatrix = AffineMatrix {
        scale_x: 1.0,
        shear_y: 0.0,
        shear_x: 0.0,
        scale_y: 1.0,
        translate_x: 0.0,
        translate_y: 0.0,
    };

    /// Reflection across the vertical axis (negates the horizontal direction)
    pub const FLIP_X: AffineMatrix = AffineMatrix {
        scale_x: -1.0,
        shear_y: 0.0,
        shear_x: 0.0,
        scale_y: 1.0,
        translate_x: 0.0,
        translate_y: 0.0,
    };

    /// Reflection across the horizontal axis (negates the vertical direction)
    pub const FLIP_Y: AffineMatrix = AffineMatrix {
        scale_x: 1.0,
        shear_y: 0.0,
        shear_x: 0.0,
        scale_y: -1.0,
        translate_x: 0.0,
        translate_y: 0.0,
    };

    ///
    /// Creates a matrix from its six values, given in `a b c d e f` column order
    /// (the order used by an SVG `matrix()` transform)
    ///
    pub fn new(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> AffineMatrix {
        AffineMatrix {
            scale_x: a,
            shear_y: b,
            shear_x: c,
            scale_y: d,
            translate_x: e,
            translate_y: f,
        }
    }

    ///
    /// Creates the identity transform
    ///
    pub fn identity() -> AffineMatrix {
        Self::IDENTITY
    }

    ///
    /// Computes the determinant of the linear part of this matrix
    ///
    #[inline]
    pub fn determinant(&self) -> f64 {
        self.scale_x * self.scale_y - self.shear_x * self.shear_y
    }

    ///
    /// True if this matrix has an inverse (the determinant is far enough from 0
    /// that the inverse can be computed)
    ///
    #[inline]
    pub fn is_invertible(&self) -> bool {
        self.determinant().abs() >= MIN_DETERMINANT
    }

    ///
    /// Applies this transformation to a point, returning the transformed point
    ///
    pub fn transform_point(&self, x: f64, y: f64) -> (f64, f64) {
        (
            x * self.scale_x + y * self.shear_x + self.translate_x,
            x * self.shear_y + y * self.scale_y + self.translate_y,
        )
    }
}
