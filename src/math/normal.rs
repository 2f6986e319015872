//! Standard normal PDF and CDF at double precision.
//!
//! The CDF uses the Hart (1968) rational approximation in the form given by
//! West (2005), "Better approximations to cumulative normal functions":
//! a degree-6/7 rational kernel below 5*sqrt(2) and a continued-fraction
//! expansion for the far tail. The error is at machine-epsilon level in
//! absolute terms everywhere; relative accuracy is full precision near the
//! center and thins with the shrinking tail mass, to about ten significant
//! digits by |x| = 5 and about eight in the far tail. Uses `mul_add` (FMA)
//! Horner evaluation for the polynomial chains.

const INV_SQRT_2PI: f64 = 0.398_942_280_401_432_7;
const SQRT_2PI: f64 = 2.506_628_274_631_000_5;

/// Standard normal probability density function.
#[inline]
pub fn normal_pdf(x: f64) -> f64 {
    INV_SQRT_2PI * (-0.5 * x * x).exp()
}

/// Standard normal cumulative distribution function.
///
/// Total over all finite inputs: the tail saturates to exactly `0.0` / `1.0`
/// beyond |x| = 37, where the true mass is below the smallest positive
/// double. On the upper side `1.0` is reached by rounding already near
/// x = 8.3, where the complement falls under half an ulp. Symmetry
/// `Phi(-x) = 1 - Phi(x)` holds by reflection.
///
/// # Examples
/// ```rust
/// use greeks_engine::math::normal_cdf;
///
/// assert_eq!(normal_cdf(0.0), 0.5);
/// assert!((normal_cdf(1.0) - 0.841344746068543).abs() < 1e-12);
/// assert_eq!(normal_cdf(-40.0), 0.0);
/// ```
#[inline]
pub fn normal_cdf(x: f64) -> f64 {
    // Numerator and denominator of the Hart rational kernel, highest
    // degree first.
    const N: [f64; 7] = [
        3.526_249_659_989_109e-2,
        0.700_383_064_443_688,
        6.373_962_203_531_65,
        33.912_866_078_383,
        112.079_291_497_871,
        221.213_596_169_931,
        220.206_867_912_376,
    ];
    const D: [f64; 8] = [
        8.838_834_764_831_84e-2,
        1.755_667_163_182_64,
        16.064_177_579_207,
        86.780_732_202_946_1,
        296.564_248_779_674,
        637.333_633_378_831,
        793.826_512_519_948,
        440.413_735_824_752,
    ];

    if x.is_nan() {
        return f64::NAN;
    }

    let z = x.abs();
    let tail = if z > 37.0 {
        0.0
    } else {
        let e = (-0.5 * z * z).exp();
        if z < 7.071_067_811_865_48 {
            let num = N[0]
                .mul_add(z, N[1])
                .mul_add(z, N[2])
                .mul_add(z, N[3])
                .mul_add(z, N[4])
                .mul_add(z, N[5])
                .mul_add(z, N[6]);
            let den = D[0]
                .mul_add(z, D[1])
                .mul_add(z, D[2])
                .mul_add(z, D[3])
                .mul_add(z, D[4])
                .mul_add(z, D[5])
                .mul_add(z, D[6])
                .mul_add(z, D[7]);
            e * num / den
        } else {
            // Continued-fraction expansion of the Mills ratio.
            let cf = z + 1.0 / (z + 2.0 / (z + 3.0 / (z + 4.0 / (z + 0.65))));
            e / (SQRT_2PI * cf)
        }
    };

    if x > 0.0 { 1.0 - tail } else { tail }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Reference values from NIST / Abramowitz & Stegun Table 26.1
    const CDF_REFERENCE: &[(f64, f64)] = &[
        (-5.0, 2.8665157187919391e-7),
        (-4.0, 3.1671241833119979e-5),
        (-3.0, 0.0013498980316300946),
        (-2.0, 0.02275013194817921),
        (-1.0, 0.15865525393145702),
        (-0.5, 0.30853753872598690),
        (0.0, 0.5),
        (0.5, 0.69146246127401310),
        (1.0, 0.84134474606854298),
        (2.0, 0.97724986805182079),
        (3.0, 0.99865010196837),
        (4.0, 0.99996832875816688),
        (5.0, 0.99999971334842808),
    ];

    #[test]
    fn cdf_matches_reference_table() {
        // The kernel is minimax in absolute error, so relative accuracy
        // thins as the tail mass shrinks: full precision through |x| = 3,
        // still better than nine digits at the |x| = 4 and 5 rows.
        for &(x, expected) in CDF_REFERENCE {
            let got = normal_cdf(x);
            let abs = (got - expected).abs();
            let rel = abs / expected;
            if x.abs() <= 3.0 {
                assert!(
                    rel < 1.0e-13,
                    "x={x} expected={expected} got={got} rel={rel}"
                );
            } else {
                assert!(
                    abs < 1.0e-15,
                    "x={x} expected={expected} got={got} abs={abs}"
                );
                assert!(
                    rel < 1.0e-9,
                    "x={x} expected={expected} got={got} rel={rel}"
                );
            }
        }
    }

    #[test]
    fn cdf_far_tail_keeps_eight_digits() {
        // Continued-fraction branch; the 0.65-terminated fraction is the
        // accuracy floor, worst a little past the 5*sqrt(2) crossover.
        let expected = 6.22096057427178e-16;
        let got = normal_cdf(-8.0);
        let rel = ((got - expected) / expected).abs();
        assert!(rel < 1.0e-7, "got={got} rel={rel}");
        assert!((normal_cdf(8.0) - (1.0 - expected)).abs() < 1.0e-15);
    }

    #[test]
    fn cdf_tail_stays_inside_the_mills_ratio_bounds() {
        // z/(z^2+1) < (1 - Phi(z))/phi(z) < 1/z for every z > 0.
        for &z in &[7.5, 8.0, 9.0, 10.0, 12.0, 16.0, 24.0, 32.0] {
            let tail = normal_cdf(-z);
            let pdf = normal_pdf(z);
            assert!(tail > pdf * z / (z * z + 1.0), "z={z} tail={tail}");
            assert!(tail < pdf / z, "z={z} tail={tail}");
        }
    }

    #[test]
    fn cdf_symmetry() {
        for i in 0..=360 {
            let x = i as f64 / 10.0;
            let sum = normal_cdf(x) + normal_cdf(-x);
            assert!((sum - 1.0).abs() < 1e-15, "x={x} sum={sum}");
        }
    }

    #[test]
    fn cdf_is_monotone_non_decreasing() {
        let mut prev = normal_cdf(-12.0);
        for i in -1199..=1200 {
            let x = i as f64 / 100.0;
            let cur = normal_cdf(x);
            assert!(cur + 1e-15 >= prev, "x={x} prev={prev} cur={cur}");
            prev = cur;
        }
    }

    #[test]
    fn cdf_saturates_in_the_far_tail() {
        assert_eq!(normal_cdf(-40.0), 0.0);
        assert_eq!(normal_cdf(40.0), 1.0);
        assert!(normal_cdf(-36.5) > 0.0);
        // The complement is under half an ulp of 1.0 from about 8.3 on.
        assert_eq!(normal_cdf(9.0), 1.0);
        assert!(normal_cdf(8.0) < 1.0);
        assert!(normal_cdf(f64::NAN).is_nan());
    }

    #[test]
    fn pdf_known_values() {
        assert!((normal_pdf(0.0) - 0.3989422804014327).abs() < 1e-16);
        assert!((normal_pdf(1.0) - 0.24197072451914337).abs() < 1e-15);
        assert!((normal_pdf(2.0) - 0.05399096651318806).abs() < 1e-15);
        for i in 0..=60 {
            let x = i as f64 / 10.0;
            assert_eq!(normal_pdf(x), normal_pdf(-x), "pdf symmetry at x={x}");
        }
    }
}
