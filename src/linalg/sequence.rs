//! Ordered numeric sequences which vectors can be combined with
//!
//! Binary vector operations do not care whether their right-hand operand is
//! another vector, a plain array or a nalgebra column: all they need is a
//! fixed-length run of components, and that is what `VectorLike` captures.
//! Lengths are only compared when two sequences actually meet.

use crate::error::{Result, VectorError};
use nalgebra::{SVector, Scalar};

/// Anything that can be viewed as an ordered sequence of numeric components
pub trait VectorLike<T> {
    /// Components of the sequence, in order
    fn components(&self) -> &[T];
}

impl<T> VectorLike<T> for [T] {
    fn components(&self) -> &[T] {
        self
    }
}

impl<T, const M: usize> VectorLike<T> for [T; M] {
    fn components(&self) -> &[T] {
        &self[..]
    }
}

impl<T> VectorLike<T> for Vec<T> {
    fn components(&self) -> &[T] {
        &self[..]
    }
}

impl<T: Scalar, const M: usize> VectorLike<T> for SVector<T, M> {
    fn components(&self) -> &[T] {
        self.as_slice()
    }
}

/// Access the components of `other`, checking that there are `expected` of them
pub(crate) fn matching_components<T, R>(expected: usize, other: &R) -> Result<&[T]>
where
    R: VectorLike<T> + ?Sized,
{
    let components = other.components();
    if components.len() == expected {
        Ok(components)
    } else {
        Err(VectorError::dimension(expected, components.len()))
    }
}

/// Right-hand operand of a dynamically dispatched multiplication or division
///
/// When the kind of operand is statically known, the `*` and `/` operators
/// should be preferred. This is for call sites that only find out at run time
/// whether they hold a number or a sequence.
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Operand<'a, T> {
    /// A single number
    Scalar(T),

    /// A sequence of components
    Sequence(&'a [T]),
}
//
impl<'a, T> Operand<'a, T> {
    /// Wrap any vector-like sequence
    pub fn sequence<R: VectorLike<T> + ?Sized>(sequence: &'a R) -> Self {
        Operand::Sequence(sequence.components())
    }
}

/// Outcome of a dynamically dispatched multiplication
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Product<V, T> {
    /// The vector was scaled by a number
    Scaled(V),

    /// The vector was combined with a sequence into a scalar product
    Scalar(T),
}
//
impl<V, T> Product<V, T> {
    /// Extract the scaled vector, if that is what the product produced
    pub fn scaled(self) -> Option<V> {
        match self {
            Product::Scaled(vector) => Some(vector),
            Product::Scalar(_) => None,
        }
    }

    /// Extract the scalar product, if that is what the product produced
    pub fn scalar(self) -> Option<T> {
        match self {
            Product::Scaled(_) => None,
            Product::Scalar(number) => Some(number),
        }
    }
}
