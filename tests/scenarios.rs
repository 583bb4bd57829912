//! Worked examples of every public vector operation

use approx::assert_relative_eq;
use std::f64::consts::FRAC_PI_3;
use vectors::{GenericVector, LorentzVector, Operand, Product, Vector, Vector3, VectorError};

#[test]
fn elementwise_and_scalar_products() -> eyre::Result<()> {
    let v = GenericVector::new([1., 2., 3.]);
    let u = GenericVector::new([7., 4., 2.]);

    assert_eq!(v + u, GenericVector::new([8., 6., 5.]));
    assert_eq!(v - u, GenericVector::new([-6., -2., 1.]));
    assert_eq!(v.try_add(&u)?, GenericVector::new([8., 6., 5.]));
    assert_eq!(v.try_sub(&[7., 4., 2.])?, GenericVector::new([-6., -2., 1.]));
    assert_eq!(v.scalar_product(&u)?, 21.);
    assert_eq!(v.dot(&u)?, 21.);
    assert_eq!(u.dot(&v)?, 21.);
    assert_eq!(v * u, 21.);
    assert_eq!(v.multiply(Operand::sequence(&u))?, Product::Scalar(21.));
    Ok(())
}

#[test]
fn scaling() -> eyre::Result<()> {
    let v = GenericVector::new([1., 2., 3.]);
    let u = GenericVector::new([7., 4., 2.]);

    assert_eq!(v * 5., GenericVector::new([5., 10., 15.]));
    assert_eq!(3. * u, GenericVector::new([21., 12., 6.]));
    assert_eq!(u * 10.3, 10.3 * u);
    assert_eq!(
        v.multiply(Operand::Scalar(5.))?,
        Product::Scaled(GenericVector::new([5., 10., 15.]))
    );
    assert_eq!(v / 2., GenericVector::new([0.5, 1.0, 1.5]));
    assert_eq!(v.divide(Operand::Scalar(2.))?, GenericVector::new([0.5, 1.0, 1.5]));
    Ok(())
}

#[test]
fn vector_division_is_rejected() {
    let v = GenericVector::new([1., 2., 3.]);
    let u = GenericVector::new([7., 4., 2.]);
    let error = v.divide(Operand::sequence(&u)).unwrap_err();
    assert!(matches!(error, VectorError::UnsupportedOperation { .. }));
}

#[test]
fn powers_and_magnitude() -> eyre::Result<()> {
    let v = GenericVector::new([1., 2., 3.]);

    assert_eq!(v.pow(2.), 14.);
    assert_eq!(v.pow(2.), v * v);
    assert_relative_eq!(v.magnitude(), 14f64.sqrt(), max_relative = 1e-15);
    assert_eq!(v.length(), v.magnitude());
    assert_relative_eq!(v.pow(-3.), 1. / v.pow(3.), max_relative = 1e-12);

    let unit = v.unit()?;
    assert_eq!(unit, v / v.magnitude());
    assert_relative_eq!(unit.magnitude(), 1., max_relative = 1e-15);
    Ok(())
}

#[test]
fn unary_operations() {
    let v = GenericVector::new([1., 2., 3.]);
    assert_eq!(v.pos(), v);
    assert_eq!(-v, -1. * v);
    assert_eq!(-GenericVector::new([7., 4., 2.]), GenericVector::new([-7., -4., -2.]));
}

#[test]
fn vector_product() {
    let v = Vector3::new(1., 2., 3.);
    let u = Vector3::new(7., 4., 2.);
    assert_eq!(v.vector_product(&u), Vector3::new(-8., 19., -10.));
    assert_eq!(v.cross(&u), -u.cross(&v));
}

#[test]
fn coordinate_systems() -> eyre::Result<()> {
    let w = Vector3::new(2., 2. * 3f64.sqrt(), 3.);
    assert_relative_eq!(w.r(), 5., max_relative = 1e-15);
    assert_relative_eq!(w.phi(), FRAC_PI_3, max_relative = 1e-15);
    assert_relative_eq!(w.theta()?.cos(), 3. / 5., max_relative = 1e-12);
    assert_relative_eq!(w.rho()?, 4., max_relative = 1e-12);
    Ok(())
}

#[test]
fn minkowski_scalar_product() -> eyre::Result<()> {
    let v = LorentzVector::new(1., 2., 3., 4.);
    let u = LorentzVector::new(4., 3., 2., 1.);
    assert_eq!(v.covariant(), LorentzVector::new(1., -2., -3., -4.));
    assert_eq!(v.scalar_product(&u)?, 1. * 4. - 2. * 3. - 3. * 2. - 4. * 1.);
    assert_eq!(v * u, -12.);
    assert_eq!(v + u, LorentzVector::new(5., 5., 5., 5.));
    Ok(())
}

#[test]
fn five_dimensional() -> eyre::Result<()> {
    let v = GenericVector::new([4., -6., 7., 2.4, 10.]);
    assert_eq!(v.dimension(), 5);
    assert_relative_eq!(v.dot(&[5., 4., 3., 2., 1.])?, 31.8, max_relative = 1e-12);
    assert_eq!(
        v.dot(&[1., 2., 3.]),
        Err(VectorError::Dimension {
            expected: 5,
            actual: 3
        })
    );
    Ok(())
}

#[test]
fn dimension_mismatch() {
    let v = Vector3::new(1., 2., 3.);
    let long = [1., 2., 3., 4., 5.];
    let expected = Err(VectorError::Dimension {
        expected: 3,
        actual: 5,
    });
    assert_eq!(v.try_add(&long), expected);
    assert_eq!(v.try_sub(&long), expected);
    assert_eq!(v.dot(&long), Err(VectorError::Dimension { expected: 3, actual: 5 }));
    assert_eq!(
        v.multiply(Operand::sequence(&long)),
        Err(VectorError::Dimension { expected: 3, actual: 5 })
    );
    assert_eq!(Vector3::try_from_components(&long), expected);
}

#[test]
fn errors_convert_into_reports() {
    let failed = || -> eyre::Result<Vector3> { Ok(Vector3::new(0., 0., 0.).unit()?) };
    let report = failed().unwrap_err();
    assert_eq!(
        report.downcast_ref::<VectorError>(),
        Some(&VectorError::ZeroMagnitude {
            operation: "unit vector"
        })
    );
}

#[test]
fn integer_vectors() -> eyre::Result<()> {
    let v = Vector3::new(1, 2, 3);
    let u = Vector3::new(7, 4, 2);
    assert_eq!(v + u, Vector3::new(8, 6, 5));
    assert_eq!(v * u, 21);
    assert_eq!(3 * u, Vector3::new(21, 12, 6));
    assert_eq!(v.cross(&u), Vector3::new(-8, 19, -10));
    assert_eq!(v.dot(&vec![1, 1, 1])?, 6);
    Ok(())
}
