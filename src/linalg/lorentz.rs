//! This module implements relativistic 4-vectors and the Minkowski metric

use crate::{
    error::Result,
    linalg::{euclidean_product, GenericVector, Vector, Vector3, VectorLike},
    numeric::{Component, Float, RealComponent},
};

/// 4-vector dimension
pub const LORENTZ_DIM: usize = 4;

/// Convenience const for accessing the time coordinate of a 4-vector
pub const TIME: usize = 0;

/// Convenience const for accessing the X coordinate of a 4-vector
pub const X: usize = 1;

/// Convenience const for accessing the Y coordinate of a 4-vector
pub const Y: usize = 2;

/// Convenience const for accessing the Z coordinate of a 4-vector
pub const Z: usize = 3;

/// Relativistic 4-vector (t, x, y, z)
///
/// Addition, subtraction and scaling work componentwise as for any other
/// vector, but the scalar product uses the Minkowski metric with signature
/// (+, -, -, -). Since powers and magnitudes are derived from the scalar
/// product, `magnitude()` is the Minkowski interval, which is NaN for
/// space-like vectors. The spherical and cylindrical coordinates are those of
/// the spatial part.
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LorentzVector<T = Float>(GenericVector<LORENTZ_DIM, T>);
//
impl<T: Component> LorentzVector<T> {
    // ### CONSTRUCTION ###

    /// Build a 4-vector from its time and space coordinates
    pub fn new(t: T, x: T, y: T, z: T) -> Self {
        Self(GenericVector::new([t, x, y, z]))
    }

    /// Build a 4-vector from its time coordinate and spatial part
    pub fn from_time_space(t: T, xyz: Vector3<T>) -> Self {
        Self::new(t, xyz.x(), xyz.y(), xyz.z())
    }

    // ### COMPONENT ACCESS ###

    /// Time coordinate
    pub fn t(&self) -> T {
        self.0[TIME]
    }

    /// X coordinate
    pub fn x(&self) -> T {
        self.0[X]
    }

    /// Y coordinate
    pub fn y(&self) -> T {
        self.0[Y]
    }

    /// Z coordinate
    pub fn z(&self) -> T {
        self.0[Z]
    }

    /// Get the spatial part of the 4-vector
    pub fn xyz(&self) -> Vector3<T> {
        Vector3::new(self.x(), self.y(), self.z())
    }

    // ### METRIC ###

    /// Covariant form (t, -x, -y, -z) of this contravariant 4-vector
    pub fn covariant(&self) -> Self {
        Self::new(self.t(), -self.x(), -self.y(), -self.z())
    }
}
//
impl<T: RealComponent> LorentzVector<T> {
    /// Spherical radius of the spatial part
    pub fn r(&self) -> T {
        self.xyz().r()
    }

    /// Azimuthal angle of the spatial part
    pub fn phi(&self) -> T {
        self.xyz().phi()
    }

    /// Zenith angle of the spatial part
    pub fn theta(&self) -> Result<T> {
        self.xyz().theta()
    }

    /// Cylindrical radius of the spatial part
    pub fn rho(&self) -> Result<T> {
        self.xyz().rho()
    }
}

impl<T: Component> VectorLike<T> for LorentzVector<T> {
    fn components(&self) -> &[T] {
        self.0.components()
    }
}

impl<T: Component> Vector<T> for LorentzVector<T> {
    const DIMENSION: usize = LORENTZ_DIM;

    fn rebuild(component: impl FnMut(usize) -> T) -> Self {
        Self(GenericVector::rebuild(component))
    }

    /// Minkowski scalar product, t·t' - x·x' - y·y' - z·z'
    ///
    /// Panics if `rhs` has fewer than 4 components.
    fn inner_product(lhs: &[T], rhs: &[T]) -> T {
        let rhs = Self::rebuild(|i| rhs[i]).covariant();
        euclidean_product(lhs, rhs.components())
    }
}

impl_vector_operators!([T: Component] LorentzVector<T>);

impl<T: Component> From<GenericVector<LORENTZ_DIM, T>> for LorentzVector<T> {
    fn from(vector: GenericVector<LORENTZ_DIM, T>) -> Self {
        Self(vector)
    }
}

impl<T: Component> From<LorentzVector<T>> for GenericVector<LORENTZ_DIM, T> {
    fn from(vector: LorentzVector<T>) -> Self {
        vector.0
    }
}

impl<T: Component> From<[T; LORENTZ_DIM]> for LorentzVector<T> {
    fn from(components: [T; LORENTZ_DIM]) -> Self {
        Self(GenericVector::new(components))
    }
}
