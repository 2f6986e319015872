//! Cross-checks the normal-distribution primitives against `statrs` and
//! against each other.

use statrs::distribution::{Continuous, ContinuousCDF, Normal};

use greeks_engine::math::{normal_cdf, normal_pdf};

#[test]
fn cdf_matches_statrs_across_six_sigmas() {
    // The budget covers the oracle too: statrs's erf carries errors of its
    // own around 1e-12 (e.g. at x = -2).
    let n = Normal::new(0.0, 1.0).expect("normal distribution should be valid");
    for i in -600..=600 {
        let x = i as f64 / 100.0;
        let got = normal_cdf(x);
        let reference = n.cdf(x);
        assert!(
            (got - reference).abs() < 1e-11,
            "x={x} got={got} statrs={reference}"
        );
    }
}

#[test]
fn pdf_matches_statrs_across_six_sigmas() {
    let n = Normal::new(0.0, 1.0).expect("normal distribution should be valid");
    for i in -600..=600 {
        let x = i as f64 / 100.0;
        let got = normal_pdf(x);
        let reference = n.pdf(x);
        assert!(
            (got - reference).abs() < 1e-14,
            "x={x} got={got} statrs={reference}"
        );
    }
}

#[test]
fn cdf_central_difference_recovers_the_pdf() {
    let h = 1e-6;
    for i in -12..=12 {
        let x = i as f64 / 4.0;
        let slope = (normal_cdf(x + h) - normal_cdf(x - h)) / (2.0 * h);
        assert!(
            (slope - normal_pdf(x)).abs() < 1e-8,
            "x={x} slope={slope} pdf={}",
            normal_pdf(x)
        );
    }
}
