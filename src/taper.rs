use std::f64::consts::PI;

use nalgebra::Vector2;
use ndarray::Array1;
use num::complex::Complex64;

use crate::{
    error::{TaperError, TaperResult},
    special::{bessel_j1, bessel_j1_prime_zeros},
};

// Bayliss amplitude tapering for a circular aperture. The taper shapes a
// difference beam: odd symmetry about the y-axis, a null on boresight,
// and near-in sidelobes pushed down to a chosen level by moving the
// first four pattern zeros off their natural locations.
// Sources:
// [1] E. T. Bayliss, "Design of Monopulse Antenna Difference Patterns
//     with Low Sidelobes", Bell System Technical Journal 47 (1968)
// [2] R. S. Elliott, Antenna Theory and Design, ch. 6 (tabulates the
//     polynomial fits used below)

/// Default number of series terms. Larger counts track the ideal
/// pattern further out at the cost of hotter edge illumination.
pub const DEFAULT_TERMS: usize = 17;

// Fourth-degree polynomial fits in the sidelobe level (dB, negative),
// one row per parameter: A, the four moved zeros ξ1..ξ4, and the beam
// peak position p0. Fit fidelity holds over roughly -15 to -45 dB.
const PARAMETER_FITS: [[f64; 5]; 6] = [
    [0.30387530, -0.05042922, -0.00027989, -0.00000343, -0.00000002],
    [0.98583020, -0.03338850, 0.00014064, 0.00000190, 0.00000001],
    [2.00337487, -0.01141548, 0.00041590, 0.00000373, 0.00000001],
    [3.00636321, -0.00683394, 0.00029281, 0.00000161, 0.00000000],
    [4.00518423, -0.00501795, 0.00021735, 0.00000088, 0.00000000],
    [0.47972120, -0.01456692, -0.00018739, -0.00000218, -0.00000001],
];

// Factors this small in the coefficient denominators mean an asymptotic
// zero location has collided with a root.
const DEGENERACY_EPS: f64 = 1e-12;

fn polyval(coeffs: &[f64; 5], x: f64) -> f64 {
    coeffs[0] + x * (coeffs[1] + x * (coeffs[2] + x * (coeffs[3] + x * coeffs[4])))
}

/// Scalar parameters of the Bayliss design at a given sidelobe level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitParameters {
    /// Asymptotic zero-envelope parameter
    pub A: f64,
    /// The four moved zero locations ξ1..ξ4
    pub xi: [f64; 4],
    /// Beam peak position. Not consumed by the coefficient computation;
    /// kept because callers locating the difference-lobe maximum want it.
    pub p0: f64,
}

/// Evaluate the six parameter fits at `sidelobe_db` (negative dB).
/// Outside roughly -15 to -45 dB the fits lose fidelity; no clamping is
/// applied here.
pub fn fit_parameters(sidelobe_db: f64) -> FitParameters {
    FitParameters {
        A: polyval(&PARAMETER_FITS[0], sidelobe_db),
        xi: [
            polyval(&PARAMETER_FITS[1], sidelobe_db),
            polyval(&PARAMETER_FITS[2], sidelobe_db),
            polyval(&PARAMETER_FITS[3], sidelobe_db),
            polyval(&PARAMETER_FITS[4], sidelobe_db),
        ],
        p0: polyval(&PARAMETER_FITS[5], sidelobe_db),
    }
}

/// A computed Bayliss taper: series coefficients B and root locations μ
/// for one (sidelobe level, term count) design. Construction does all
/// the numerical work; evaluation is a weighted Bessel sum per point.
#[derive(Debug, Clone)]
pub struct BaylissTaper {
    sidelobe_db: f64,
    // N purely imaginary series coefficients
    coefficients: Array1<Complex64>,
    // N+1 zeros of J1', divided by π, strictly increasing
    roots: Array1<f64>,
}

impl BaylissTaper {
    /// Compute the taper coefficients for a target near-in sidelobe
    /// level in dB (strictly negative) and a series term count N.
    pub fn new(sidelobe_db: f64, terms: usize) -> TaperResult<BaylissTaper> {
        if terms < 1 {
            return Err(TaperError::InvalidTermCount);
        }
        if !(sidelobe_db < 0.0) || !sidelobe_db.is_finite() {
            return Err(TaperError::InvalidSidelobeLevel(sidelobe_db));
        }

        let N = terms;
        let μ: Vec<f64> = bessel_j1_prime_zeros(N + 1)
            .into_iter()
            .map(|z| z / PI)
            .collect();

        let params = fit_parameters(sidelobe_db);

        // Zero locations: ξ1..ξ4 are the moved near-in zeros, the rest
        // sit on the asymptotic envelope sqrt(A² + k²).
        let mut Z = vec![0.0; N + 1];
        for (idx, ξ) in params.xi.iter().enumerate() {
            let k = idx + 1;
            if k <= N {
                Z[k] = *ξ;
            }
        }
        for (k, z) in Z.iter_mut().enumerate().skip(5) {
            *z = (params.A * params.A + (k as f64) * (k as f64)).sqrt();
        }

        // Dilation matching the outermost zero to the outermost root
        let σ = μ[N] / Z[N];

        let mut B = Vec::with_capacity(N);
        for m in 0..N {
            let mut num = 1.0;
            for k in 1..N {
                let z = σ * Z[k + 1];
                num *= 1.0 - (μ[m] / z) * (μ[m] / z);
            }

            let mut den = 1.0;
            for j in 0..N {
                if j == m {
                    // removable singularity: the j = m factor is skipped
                    // rather than computed as 0/0
                    continue;
                }
                let factor = 1.0 - (μ[m] / μ[j]) * (μ[m] / μ[j]);
                if factor.abs() < DEGENERACY_EPS {
                    return Err(TaperError::NumericDegeneracy { term: m, factor });
                }
                den *= factor;
            }

            // B[m] = -i · 2μ[m]² / J1(πμ[m]) · num / den, no overall
            // normalization (C = 1)
            let scale = 2.0 * μ[m] * μ[m] / bessel_j1(PI * μ[m]);
            B.push(Complex64::new(0.0, -scale * num / den));
        }

        Ok(BaylissTaper {
            sidelobe_db,
            coefficients: Array1::from(B),
            roots: Array1::from(μ),
        })
    }

    /// `new` with the conventional 17-term series.
    pub fn with_default_terms(sidelobe_db: f64) -> TaperResult<BaylissTaper> {
        Self::new(sidelobe_db, DEFAULT_TERMS)
    }

    pub fn sidelobe_db(&self) -> f64 {
        self.sidelobe_db
    }

    pub fn terms(&self) -> usize {
        self.coefficients.len()
    }

    /// The N series coefficients B, purely imaginary.
    pub fn coefficients(&self) -> &Array1<Complex64> {
        &self.coefficients
    }

    /// The N+1 roots μ: zeros of J1' divided by π, strictly increasing.
    pub fn roots(&self) -> &Array1<f64> {
        &self.roots
    }

    /// Evaluate the (unnormalized) taper at each point of the aperture
    /// plane, in input order. Points outside the aperture weigh exactly
    /// zero. With `radius` omitted the aperture radius is the largest
    /// point distance from the origin.
    pub fn evaluate(
        &self,
        points: &[Vector2<f64>],
        radius: Option<f64>,
    ) -> TaperResult<Array1<Complex64>> {
        let a = match radius {
            Some(r) => {
                if !(r > 0.0) || !r.is_finite() {
                    return Err(TaperError::InvalidRadius(r));
                }
                r
            }
            None => points.iter().map(|p| p.norm()).fold(0.0, f64::max),
        };

        let g = points
            .iter()
            .map(|point| self.weight_at(*point, a))
            .collect();
        Ok(g)
    }

    fn weight_at(&self, point: Vector2<f64>, a: f64) -> Complex64 {
        let ρ2 = point.norm_squared();
        if ρ2 > a * a {
            return Complex64::new(0.0, 0.0);
        }
        let ρ = ρ2.sqrt();
        if ρ == 0.0 {
            // the x/ρ direction cosine is a removable singularity: the
            // sum is finite and scaled by x, so the weight is zero
            return Complex64::new(0.0, 0.0);
        }

        let p = PI * ρ / a;
        let c = point.x / ρ;
        let sum: Complex64 = self
            .coefficients
            .iter()
            .zip(self.roots.iter())
            .map(|(b, μ)| *b * bessel_j1(μ * p))
            .sum();
        sum * c
    }
}
