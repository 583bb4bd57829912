//! Basic numerical concepts used throughout the library

use nalgebra::Scalar;
use num_traits::{real::Real, Num};
use std::ops::Neg;

// Default floating-point precision is configured here
/// Default component type of all vector types
#[cfg(feature = "f32")]
pub type Float = f32;
/// Default component type of all vector types
#[cfg(not(feature = "f32"))]
pub type Float = f64;

/// Numbers which can be stored as vector components
///
/// This is everything that vector addition, scaling and scalar products need:
/// a signed ring that nalgebra can store. Integers qualify, so integer
/// vectors support every operation except division and those involving real
/// exponentiation, which require `RealComponent`:
///
/// ```compile_fail
/// use vectors::Vector3;
///
/// let halved = Vector3::new(1, 2, 3) / 2;
/// ```
///
/// ```
/// use vectors::Vector3;
///
/// assert_eq!(Vector3::new(1., 2., 3.) / 2., Vector3::new(0.5, 1.0, 1.5));
/// ```
///
pub trait Component: Scalar + Copy + Num + Neg<Output = Self> {}
//
impl<T> Component for T where T: Scalar + Copy + Num + Neg<Output = Self> {}

/// Components which additionally support real exponentiation and trigonometry
///
/// Division, magnitudes, unit vectors and coordinate angles require this.
///
pub trait RealComponent: Component + Real {}
//
impl<T> RealComponent for T where T: Component + Real {}

/// Mathematical functions
pub mod functions {
    use super::RealComponent;

    /// Half of a real number, without requiring a literal of the right type
    pub fn half<T: RealComponent>(x: T) -> T {
        x / (T::one() + T::one())
    }
}
