/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::error::*;
use crate::matrix::*;

///
/// Trait implemented by the backends that carry out affine matrix operations
///
/// Every operation is a pure function: the input matrices are never changed,
/// and each call returns a newly built `AffineMatrix`. Operations that add a
/// transform to a matrix post-multiply it (`rotate(m, 90)` computes
/// `m * rotation(90)`), so the new transform applies before anything `m`
/// already does. Matrix composition is not commutative, which makes this
/// ordering part of the contract rather than an implementation detail.
///
/// Angles are supplied in degrees.
///
pub trait MatrixTransformer {
    ///
    /// Returns the matrix composed with a reflection across the vertical axis
    ///
    fn flip_x(&self, matrix: &AffineMatrix) -> AffineMatrix;

    ///
    /// Returns the matrix composed with a reflection across the horizontal axis
    ///
    fn flip_y(&self, matrix: &AffineMatrix) -> AffineMatrix;

    ///
    /// Returns the matrix that undoes this one, so `multiply(m, inverse(m))` is
    /// the identity. Fails with `TransformError::NotInvertible` when the
    /// determinant is too close to 0 for an inverse to exist.
    ///
    fn inverse(&self, matrix: &AffineMatrix) -> Result<AffineMatrix, TransformError>;

    ///
    /// Returns the composition `a * b`: the result applies `b`'s transform
    /// first and then `a`'s
    ///
    fn multiply(&self, a: &AffineMatrix, b: &AffineMatrix) -> AffineMatrix;

    ///
    /// Returns the matrix composed with a rotation. A positive angle rotates
    /// the positive x axis towards the positive y axis, so `rotate(identity, 90)`
    /// maps the point `(1, 0)` to `(0, 1)`.
    ///
    fn rotate(&self, matrix: &AffineMatrix, degrees: f64) -> AffineMatrix;

    ///
    /// Returns the matrix composed with a rotation by the angle of the vector
    /// `(x, y)`, resolved with the two-argument arctangent so every quadrant
    /// and axis-aligned direction works. Fails with `TransformError::ZeroVector`
    /// when both components are 0, as the angle is undefined for a vector with
    /// no direction (a single zero component is fine: the angle is still
    /// well-defined).
    ///
    fn rotate_from_vector(&self, matrix: &AffineMatrix, x: f64, y: f64) -> Result<AffineMatrix, TransformError>;

    ///
    /// Returns the matrix composed with a uniform scale
    ///
    fn scale(&self, matrix: &AffineMatrix, factor: f64) -> AffineMatrix {
        self.scale_non_uniform(matrix, factor, factor)
    }

    ///
    /// Returns the matrix composed with a scale that can differ per axis. Zero
    /// and negative factors are legal (a negative factor flips that axis).
    ///
    fn scale_non_uniform(&self, matrix: &AffineMatrix, scale_x: f64, scale_y: f64) -> AffineMatrix;

    ///
    /// Returns the matrix composed with a shear along the x axis by the tangent
    /// of the angle. Angles close to ±90° drive the tangent towards infinity:
    /// the resulting values are allowed to become huge or NaN.
    ///
    fn skew_x(&self, matrix: &AffineMatrix, degrees: f64) -> AffineMatrix;

    ///
    /// Returns the matrix composed with a shear along the y axis
    ///
    fn skew_y(&self, matrix: &AffineMatrix, degrees: f64) -> AffineMatrix;

    ///
    /// Returns the matrix composed with a translation. The offset passes
    /// through the matrix's linear part, so translating a scaled or sheared
    /// matrix moves by the transformed offset rather than the raw one.
    ///
    fn translate(&self, matrix: &AffineMatrix, x: f64, y: f64) -> AffineMatrix;
}
