//! Vector types and the operations they share
//!
//! All vector types are thin wrappers around a fixed-size nalgebra column.
//! What they have in common is expressed by the `Vector` trait, whose
//! provided methods implement every operation in terms of two primitives that
//! each type supplies: a `rebuild` factory, so that results keep the concrete
//! type of the left operand, and an `inner_product`, so that specialized
//! vectors can change the metric without touching anything else.

use crate::{
    error::{Result, VectorError},
    numeric::{functions::half, Component, RealComponent},
};

pub use self::sequence::{Operand, Product, VectorLike};
use self::sequence::matching_components;

/// Implement the statically dispatched operators of a vector type
///
/// The type must implement `Vector` and `VectorLike`, with component type `T`.
///
macro_rules! impl_vector_operators {
    ([$($generics:tt)*] $type:ty) => {
        impl<$($generics)*> std::ops::Add for $type {
            type Output = Self;

            fn add(self, rhs: Self) -> Self {
                let lhs = $crate::linalg::VectorLike::components(&self);
                let rhs = $crate::linalg::VectorLike::components(&rhs);
                <Self as $crate::linalg::Vector<T>>::rebuild(|i| lhs[i] + rhs[i])
            }
        }

        impl<$($generics)*> std::ops::Sub for $type {
            type Output = Self;

            fn sub(self, rhs: Self) -> Self {
                let lhs = $crate::linalg::VectorLike::components(&self);
                let rhs = $crate::linalg::VectorLike::components(&rhs);
                <Self as $crate::linalg::Vector<T>>::rebuild(|i| lhs[i] - rhs[i])
            }
        }

        impl<$($generics)*> std::ops::Neg for $type {
            type Output = Self;

            fn neg(self) -> Self {
                <Self as $crate::linalg::Vector<T>>::negate(&self)
            }
        }

        // Scaling by a number
        impl<$($generics)*> std::ops::Mul<T> for $type {
            type Output = Self;

            fn mul(self, factor: T) -> Self {
                <Self as $crate::linalg::Vector<T>>::scale(&self, factor)
            }
        }

        // Scalar product, using the metric of the vector type
        impl<$($generics)*> std::ops::Mul for $type {
            type Output = T;

            fn mul(self, rhs: Self) -> T {
                <Self as $crate::linalg::Vector<T>>::inner_product(
                    $crate::linalg::VectorLike::components(&self),
                    $crate::linalg::VectorLike::components(&rhs),
                )
            }
        }

        // Componentwise division, which only makes sense for real components
        impl<$($generics)*> std::ops::Div<T> for $type
        where
            T: $crate::numeric::RealComponent,
        {
            type Output = Self;

            fn div(self, divisor: T) -> Self {
                let lhs = $crate::linalg::VectorLike::components(&self);
                <Self as $crate::linalg::Vector<T>>::rebuild(|i| lhs[i] / divisor)
            }
        }

        impl<$($generics)*> std::ops::Index<usize> for $type {
            type Output = T;

            fn index(&self, index: usize) -> &T {
                &$crate::linalg::VectorLike::components(self)[index]
            }
        }

        impl<$($generics)*> std::fmt::Display for $type
        where
            T: std::fmt::Display,
        {
            fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(fmt, "(")?;
                for (idx, component) in $crate::linalg::VectorLike::components(self).iter().enumerate() {
                    if idx > 0 {
                        write!(fmt, ", ")?;
                    }
                    write!(fmt, "{}", component)?;
                }
                write!(fmt, ")")
            }
        }
    };
}

pub mod generic;
pub mod lorentz;
pub mod sequence;
pub mod vector3;

pub use self::{generic::GenericVector, lorentz::LorentzVector, vector3::Vector3};

/// Euclidean scalar product of two equally long component slices
pub fn euclidean_product<T: Component>(lhs: &[T], rhs: &[T]) -> T {
    debug_assert_eq!(lhs.len(), rhs.len());
    lhs.iter()
        .zip(rhs.iter())
        .fold(T::zero(), |acc, (&l, &r)| acc + l * r)
}

/// Immutable mathematical vector of fixed dimension
///
/// Every operation returns a new value. Operations which combine a vector
/// with an arbitrary `VectorLike` sequence check lengths first and fail with
/// `VectorError::Dimension` on mismatch, before anything is computed.
///
pub trait Vector<T: Component>: VectorLike<T> + Copy + PartialEq {
    /// Number of components
    const DIMENSION: usize;

    // ### PRIMITIVES ###

    /// Build a vector of this type, querying each component by index
    fn rebuild(component: impl FnMut(usize) -> T) -> Self;

    /// Scalar product of two component slices of length `DIMENSION`
    ///
    /// This is the metric of the vector type. The Euclidean product is used
    /// unless a vector type overrides it. Lengths are not checked here, use
    /// `scalar_product` for operands of unknown length.
    ///
    /// # Panics
    ///
    /// Implementations may panic if either slice is shorter than `DIMENSION`.
    ///
    fn inner_product(lhs: &[T], rhs: &[T]) -> T {
        euclidean_product(lhs, rhs)
    }

    // ### CONSTRUCTION ###

    /// Copy-construct a vector from a sequence of matching length
    fn try_from_components<R>(components: &R) -> Result<Self>
    where
        R: VectorLike<T> + ?Sized,
    {
        let components = matching_components(Self::DIMENSION, components)?;
        Ok(Self::rebuild(|i| components[i]))
    }

    /// Number of components
    fn dimension(&self) -> usize {
        Self::DIMENSION
    }

    // ### ELEMENTWISE OPERATIONS ###

    /// Add a sequence of the same length, componentwise
    fn try_add<R>(&self, other: &R) -> Result<Self>
    where
        R: VectorLike<T> + ?Sized,
    {
        let rhs = matching_components(self.dimension(), other)?;
        let lhs = self.components();
        Ok(Self::rebuild(|i| lhs[i] + rhs[i]))
    }

    /// Subtract a sequence of the same length, componentwise
    fn try_sub<R>(&self, other: &R) -> Result<Self>
    where
        R: VectorLike<T> + ?Sized,
    {
        let rhs = matching_components(self.dimension(), other)?;
        let lhs = self.components();
        Ok(Self::rebuild(|i| lhs[i] - rhs[i]))
    }

    /// Multiply every component by a number
    fn scale(&self, factor: T) -> Self {
        let lhs = self.components();
        Self::rebuild(|i| lhs[i] * factor)
    }

    /// Identity, provided for symmetry with `negate`
    fn pos(&self) -> Self {
        *self
    }

    /// Opposite vector, i.e. the vector scaled by -1
    fn negate(&self) -> Self {
        self.scale(-T::one())
    }

    // ### PRODUCTS ###

    /// Scalar product with a sequence of the same length
    fn scalar_product<R>(&self, other: &R) -> Result<T>
    where
        R: VectorLike<T> + ?Sized,
    {
        let rhs = matching_components(self.dimension(), other)?;
        Ok(Self::inner_product(self.components(), rhs))
    }

    /// Alias of `scalar_product`
    fn dot<R>(&self, other: &R) -> Result<T>
    where
        R: VectorLike<T> + ?Sized,
    {
        self.scalar_product(other)
    }

    /// Multiply by a number (scaling) or by a sequence (scalar product)
    fn multiply(&self, operand: Operand<'_, T>) -> Result<Product<Self, T>> {
        match operand {
            Operand::Scalar(factor) => Ok(Product::Scaled(self.scale(factor))),
            Operand::Sequence(sequence) => self.scalar_product(sequence).map(Product::Scalar),
        }
    }

    /// Divide by a number, componentwise
    ///
    /// Dividing a vector by another sequence has no meaning in this model and
    /// is reported as `VectorError::UnsupportedOperation`. Division by a zero
    /// number follows IEEE arithmetic.
    ///
    fn divide(&self, operand: Operand<'_, T>) -> Result<Self>
    where
        T: RealComponent,
    {
        match operand {
            Operand::Scalar(divisor) => {
                let lhs = self.components();
                Ok(Self::rebuild(|i| lhs[i] / divisor))
            }
            Operand::Sequence(_) => Err(VectorError::unsupported("division of a vector by a vector")),
        }
    }

    // ### MAGNITUDE ###

    /// Raise the vector to a real power, `(v·v)^(power/2)`
    ///
    /// This is the magnitude raised to `power`, derived directly from the
    /// scalar product so that `v.pow(2) == v * v`. The scalar product is that
    /// of the vector type, so this is not necessarily Euclidean.
    ///
    fn pow(&self, power: T) -> T
    where
        T: RealComponent,
    {
        let components = self.components();
        Self::inner_product(components, components).powf(half(power))
    }

    /// Magnitude of the vector, `v.pow(1)`
    fn magnitude(&self) -> T
    where
        T: RealComponent,
    {
        self.pow(T::one())
    }

    /// Alias of `magnitude`
    fn length(&self) -> T
    where
        T: RealComponent,
    {
        self.magnitude()
    }

    /// Vector of magnitude 1 pointing in the same direction
    ///
    /// Fails when the magnitude is zero, or when it is not a finite number,
    /// as happens for space-like 4-vectors.
    ///
    fn unit(&self) -> Result<Self>
    where
        T: RealComponent,
    {
        let magnitude = self.magnitude();
        if magnitude.is_zero() {
            return Err(VectorError::zero_magnitude("unit vector"));
        }
        // NaN fails both comparisons
        if !(magnitude > T::zero() && magnitude <= T::max_value()) {
            return Err(VectorError::undefined_magnitude("unit vector"));
        }
        self.divide(Operand::Scalar(magnitude))
    }
}

/// Allow builtin numbers to scale vectors from the left, as in `3. * v`
macro_rules! impl_left_scaling {
    ($($scalar:ty),*) => {$(
        impl<const N: usize> std::ops::Mul<GenericVector<N, $scalar>> for $scalar {
            type Output = GenericVector<N, $scalar>;

            fn mul(self, rhs: GenericVector<N, $scalar>) -> Self::Output {
                rhs * self
            }
        }

        impl std::ops::Mul<Vector3<$scalar>> for $scalar {
            type Output = Vector3<$scalar>;

            fn mul(self, rhs: Vector3<$scalar>) -> Self::Output {
                rhs * self
            }
        }

        impl std::ops::Mul<LorentzVector<$scalar>> for $scalar {
            type Output = LorentzVector<$scalar>;

            fn mul(self, rhs: LorentzVector<$scalar>) -> Self::Output {
                rhs * self
            }
        }
    )*};
}
//
impl_left_scaling!(f32, f64, i32, i64);
