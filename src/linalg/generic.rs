//! Vectors of arbitrary (but fixed) dimension

use crate::{
    error::{Result, VectorError},
    linalg::{Vector, VectorLike},
    numeric::{Component, Float},
};
use nalgebra::SVector;

/// Vector of `N` components of type `T`
///
/// This is the general-purpose vector type, and the storage which the
/// specialized vector types are built upon.
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GenericVector<const N: usize, T = Float>(SVector<T, N>);
//
impl<const N: usize, T: Component> GenericVector<N, T> {
    /// Build a vector from its components
    pub fn new(components: [T; N]) -> Self {
        Self(SVector::from_iterator(components))
    }

    /// Access the underlying nalgebra column
    pub fn as_inner(&self) -> &SVector<T, N> {
        &self.0
    }

    /// Turn into the underlying nalgebra column
    pub fn into_inner(self) -> SVector<T, N> {
        self.0
    }
}

impl<const N: usize, T: Component> VectorLike<T> for GenericVector<N, T> {
    fn components(&self) -> &[T] {
        self.0.as_slice()
    }
}

impl<const N: usize, T: Component> Vector<T> for GenericVector<N, T> {
    const DIMENSION: usize = N;

    fn rebuild(mut component: impl FnMut(usize) -> T) -> Self {
        Self(SVector::from_fn(|row, _col| component(row)))
    }
}

impl_vector_operators!([const N: usize, T: Component] GenericVector<N, T>);

impl<const N: usize, T: Component> From<[T; N]> for GenericVector<N, T> {
    fn from(components: [T; N]) -> Self {
        Self::new(components)
    }
}

impl<const N: usize, T: Component> From<SVector<T, N>> for GenericVector<N, T> {
    fn from(inner: SVector<T, N>) -> Self {
        Self(inner)
    }
}

impl<const N: usize, T: Component> TryFrom<&[T]> for GenericVector<N, T> {
    type Error = VectorError;

    fn try_from(components: &[T]) -> Result<Self> {
        Self::try_from_components(components)
    }
}
