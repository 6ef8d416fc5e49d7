use approx::assert_relative_eq;
use bayliss::{BaylissTaper, TaperError, DEFAULT_TERMS};
use nalgebra::Vector2;
use num::complex::Complex64;

// End-to-end run of the conventional -30 dB, 17-term design over a unit
// aperture, exercising the full public surface at once.
#[test]
fn canonical_30db_design() {
    let taper = BaylissTaper::new(-30.0, DEFAULT_TERMS).unwrap();
    assert_eq!(taper.terms(), 17);
    assert_eq!(taper.coefficients().len(), 17);
    assert_eq!(taper.roots().len(), 18);
    assert_relative_eq!(taper.sidelobe_db(), -30.0);

    let points = [
        Vector2::new(0.0, 0.0),
        Vector2::new(1.0, 0.0),
        Vector2::new(2.0, 0.0),
    ];
    let g = taper.evaluate(&points, Some(1.0)).unwrap();

    assert_eq!(g.len(), points.len());
    // origin: removable singularity, exact zero
    assert_eq!(g[0], Complex64::new(0.0, 0.0));
    // aperture rim on the x-axis: nonzero, purely imaginary
    assert_eq!(g[1].re, 0.0);
    assert!(g[1].im != 0.0 && g[1].im.is_finite());
    // outside the aperture: exact zero
    assert_eq!(g[2], Complex64::new(0.0, 0.0));
}

#[test]
fn weights_track_sidelobe_level() {
    // Different target levels must produce genuinely different tapers.
    let deep = BaylissTaper::with_default_terms(-40.0).unwrap();
    let shallow = BaylissTaper::with_default_terms(-20.0).unwrap();
    let point = [Vector2::new(0.5, 0.0)];
    let gd = deep.evaluate(&point, Some(1.0)).unwrap();
    let gs = shallow.evaluate(&point, Some(1.0)).unwrap();
    assert!((gd[0].im - gs[0].im).abs() > 1e-6);
}

#[test]
fn invocations_are_independent() {
    // Same inputs, fresh state each call: results are bitwise identical.
    let a = BaylissTaper::new(-35.0, 12).unwrap();
    let b = BaylissTaper::new(-35.0, 12).unwrap();
    assert_eq!(a.coefficients(), b.coefficients());
    assert_eq!(a.roots(), b.roots());

    let points = [Vector2::new(0.2, 0.7), Vector2::new(-0.4, 0.1)];
    assert_eq!(
        a.evaluate(&points, Some(1.0)).unwrap(),
        b.evaluate(&points, Some(1.0)).unwrap()
    );
}

#[test]
fn validation_happens_at_the_boundary() {
    assert!(matches!(
        BaylissTaper::new(-30.0, 0),
        Err(TaperError::InvalidTermCount)
    ));
    assert!(matches!(
        BaylissTaper::new(3.0, DEFAULT_TERMS),
        Err(TaperError::InvalidSidelobeLevel(_))
    ));
}
