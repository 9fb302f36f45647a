/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # Affine transformation matrices
//!
//! `flo_affine` supplies the 2D affine transformation matrix type used to implement
//! coordinate space transforms, along with the operations that compose, invert and
//! decompose it. The matrix itself is a plain value type with six fields: everything
//! interesting happens in an implementation of the `MatrixTransformer` trait.
//!
//! There are three implementations of `MatrixTransformer`. `SoftwareTransformer`
//! computes every operation with closed-form arithmetic and has no dependencies, so
//! it can run anywhere. `KurboTransformer` adapts each operation onto `kurbo::Affine`,
//! which is useful where the rest of an application already works with kurbo's
//! geometry types. `NullTransformer` passes every matrix through unchanged, for
//! environments where transform support is deliberately disabled.
//!
//! A caller picks one transformer and holds on to it: all three implement the same
//! contract, every operation returns a new matrix rather than mutating its input,
//! and the software and kurbo implementations produce results that agree to within
//! floating-point rounding.
//!
#![warn(bare_trait_objects)]

#[macro_use]
extern crate serde_derive;

mod consts;
mod error;
mod matrix;
mod transformer;

pub use self::consts::*;
pub use self::error::*;
pub use self::matrix::*;
pub use self::transformer::*;
