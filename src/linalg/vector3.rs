//! Vectors of 3-dimensional space, with spherical and cylindrical coordinates

use crate::{
    error::{Result, VectorError},
    linalg::{GenericVector, Vector, VectorLike},
    numeric::{Component, Float, RealComponent},
};
use prefix_num_ops::real::{cos, sin};

/// 3-dimensional vector with named components x, y and z
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vector3<T = Float>(GenericVector<3, T>);
//
impl<T: Component> Vector3<T> {
    // ### CONSTRUCTION ###

    /// Build a vector from its Cartesian coordinates
    pub fn new(x: T, y: T, z: T) -> Self {
        Self(GenericVector::new([x, y, z]))
    }

    // ### COMPONENT ACCESS ###

    /// X coordinate
    pub fn x(&self) -> T {
        self.0[0]
    }

    /// Y coordinate
    pub fn y(&self) -> T {
        self.0[1]
    }

    /// Z coordinate
    pub fn z(&self) -> T {
        self.0[2]
    }

    // ### VECTOR PRODUCT ###

    /// Vector (cross) product, which anticommutes
    pub fn vector_product(&self, other: &Self) -> Self {
        let (v, u) = (self, other);
        Self::new(
            v.y() * u.z() - u.y() * v.z(),
            v.z() * u.x() - u.z() * v.x(),
            v.x() * u.y() - u.x() * v.y(),
        )
    }

    /// Alias of `vector_product`
    pub fn cross(&self, other: &Self) -> Self {
        self.vector_product(other)
    }
}
//
impl<T: RealComponent> Vector3<T> {
    /// Build a vector from spherical coordinates (radius, zenith, azimuth)
    pub fn from_spherical(r: T, theta: T, phi: T) -> Self {
        let rho = r * sin(theta);
        Self::new(rho * cos(phi), rho * sin(phi), r * cos(theta))
    }

    /// Build a vector from cylindrical coordinates (radius, azimuth, height)
    pub fn from_cylindrical(rho: T, phi: T, z: T) -> Self {
        Self::new(rho * cos(phi), rho * sin(phi), z)
    }

    // ### COORDINATE SYSTEMS ###

    /// Spherical radius, which is the magnitude
    pub fn r(&self) -> T {
        self.magnitude()
    }

    /// Azimuthal angle in (-π, π]
    pub fn phi(&self) -> T {
        self.y().atan2(self.x())
    }

    /// Zenith angle in [0, π], undefined at the origin
    pub fn theta(&self) -> Result<T> {
        let r = self.r();
        if r.is_zero() {
            return Err(VectorError::zero_magnitude("zenith angle"));
        }
        // Rounding may push |z| slightly above r on the z axis
        let cos_theta = (self.z() / r).max(-T::one()).min(T::one());
        Ok(cos_theta.acos())
    }

    /// Cylindrical radius, undefined at the origin like the zenith angle
    pub fn rho(&self) -> Result<T> {
        Ok(self.r() * sin(self.theta()?))
    }
}

impl<T: Component> VectorLike<T> for Vector3<T> {
    fn components(&self) -> &[T] {
        self.0.components()
    }
}

impl<T: Component> Vector<T> for Vector3<T> {
    const DIMENSION: usize = 3;

    fn rebuild(component: impl FnMut(usize) -> T) -> Self {
        Self(GenericVector::rebuild(component))
    }
}

impl_vector_operators!([T: Component] Vector3<T>);

impl<T: Component> From<GenericVector<3, T>> for Vector3<T> {
    fn from(vector: GenericVector<3, T>) -> Self {
        Self(vector)
    }
}

impl<T: Component> From<Vector3<T>> for GenericVector<3, T> {
    fn from(vector: Vector3<T>) -> Self {
        vector.0
    }
}

impl<T: Component> From<[T; 3]> for Vector3<T> {
    fn from(components: [T; 3]) -> Self {
        Self(GenericVector::new(components))
    }
}
