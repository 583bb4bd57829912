//! Immutable mathematical vectors
//!
//! This library provides vector value types for physics simulations, graphics
//! and geometry utilities that do not need a full linear algebra stack:
//!
//! * `GenericVector<N, T>`: a vector of `N` components, supporting addition,
//!   subtraction, scaling, scalar products, division by a number, real powers
//!   of the magnitude and normalization.
//! * `Vector3<T>`: a 3-vector with named coordinates, the vector product, and
//!   spherical/cylindrical coordinates.
//! * `LorentzVector<T>`: a relativistic (t, x, y, z) 4-vector whose scalar
//!   product uses the Minkowski metric.
//!
//! All vectors are immutable: every operation returns a new value, so they can
//! be shared freely between threads.
//!
//! When both operands are known at compile time, the usual operators apply.
//! `v * k` scales by a number, `v * u` is the scalar product, and `v / k`
//! divides by a number. Vector/vector division simply does not compile. For
//! operands that are only known at run time, the `Vector` trait provides
//! length-checked counterparts which accept any `VectorLike` sequence and
//! report failures as a `VectorError`.
//!
//! ```
//! use vectors::{GenericVector, Vector, Vector3, VectorError};
//!
//! let v = Vector3::new(1., 2., 3.);
//! let u = Vector3::new(7., 4., 2.);
//! assert_eq!(v + u, Vector3::new(8., 6., 5.));
//! assert_eq!(v * u, 21.);
//! assert_eq!(v.cross(&u), Vector3::new(-8., 19., -10.));
//! assert_eq!(v.pow(2.), 14.);
//!
//! let long = GenericVector::new([1., 2., 3., 4., 5.]);
//! assert_eq!(
//!     v.try_add(&long),
//!     Err(VectorError::Dimension { expected: 3, actual: 5 })
//! );
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod linalg;
pub mod numeric;

pub use crate::{
    error::{Result, VectorError},
    linalg::{
        euclidean_product, GenericVector, LorentzVector, Operand, Product, Vector, Vector3,
        VectorLike,
    },
    numeric::{Component, Float, RealComponent},
};
