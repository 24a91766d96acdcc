// Reference values for the Landau kernels.
//
// Expected values are the CERNLIB DENLAN approximation evaluated in double precision
// with the same coefficient tables and operation order. The approximation itself is
// accurate to roughly 1e-7 against the exact density; these tests pin the kernels to
// the approximation, not to the exact integral.

mod util;

mod landau_reference_tests {
    use super::util::{assert_rel_close, assert_slice_rel_close};
    use minarrow::{Bitmask, vec64};

    use landau_kernels::kernels::scientific::distributions::univariate::landau::{
        LandauMixture, LandauRegime, landau, landau_fit, landau_pdf, landau_pdf_scalar,
        landau_regime,
    };

    const TOL: f64 = 1e-12;

    #[test]
    fn landau_pdf_standard_table() {
        let table: &[(f64, f64)] = &[
            (-6.0, 1.705107444566063e-64),
            (-5.6, 2.4801562772894127e-43),
            (-5.5, 3.050206023135767e-39),
            (-4.0, 3.3899538569407677e-09),
            (-3.0, 0.0006737286156950518),
            (-2.0, 0.04398547840678685),
            (-1.5, 0.10055075165541248),
            (-1.0, 0.1513919113594072),
            (-0.5, 0.17733354727436876),
            (0.0, 0.1788541609),
            (0.25, 0.17331968995860203),
            (0.5, 0.165232275368718),
            (1.0, 0.145206637130862),
            (2.0, 0.10491298949080555),
            (3.0, 0.07424765455676448),
            (4.0, 0.05326865720512383),
            (5.0, 0.03916341957924748),
            (7.5, 0.02028649487562636),
            (10.0, 0.011976487387064033),
            (12.0, 0.008421789054153419),
            (20.0, 0.0030049793941023563),
            (30.0, 0.0012986714062997668),
            (50.0, 0.00044964946739746024),
            (100.0, 0.00010761122391164614),
            (200.0, 2.611912443049517e-05),
            (300.0, 1.1471525661173316e-05),
            (500.0, 4.085712742384644e-06),
            (1000.0, 1.0120571850657366e-06),
            (1e4, 1.0016593207054192e-08),
            (1e6, 1.00002578591665e-12),
        ];
        let x: Vec<f64> = table.iter().map(|&(v, _)| v).collect();
        let expect: Vec<f64> = table.iter().map(|&(_, e)| e).collect();
        let got = landau_pdf(&x, 1.0, 0.0, None, None).unwrap();
        assert_slice_rel_close(&got, &expect, TOL);
    }

    #[test]
    fn landau_pdf_table_touches_every_regime() {
        let probes = [-6.0, -3.0, 0.0, 3.0, 7.5, 20.0, 100.0, 1000.0];
        let regimes: Vec<LandauRegime> = probes.iter().map(|&v| landau_regime(v)).collect();
        assert_eq!(
            regimes,
            vec![
                LandauRegime::LeftTail,
                LandauRegime::Rational1,
                LandauRegime::Rational2,
                LandauRegime::Rational3,
                LandauRegime::Rational4,
                LandauRegime::Rational5,
                LandauRegime::Rational6,
                LandauRegime::RightTail,
            ]
        );
    }

    #[test]
    fn landau_pdf_scaled_shifted() {
        let x = vec64![-2.0, 0.0, 1.5, 3.0, 10.0, 40.0];
        let expect = vec64![
            0.05027537582770624,
            0.08866677363718438,
            0.08665984497930102,
            0.072603318565431,
            0.02276242006808676,
            0.0015827274582228
        ];
        let got = landau_pdf(&x, 2.0, 1.0, None, None).unwrap();
        assert_slice_rel_close(&got, &expect, TOL);
    }

    #[test]
    fn landau_location_scale() {
        let x = vec64![-2.0, 0.0, 1.5, 3.0, 10.0, 40.0];
        let expect = vec64![
            1.705107444566063e-64,
            0.04398547840678685,
            0.145206637130862,
            0.05326865720512383,
            0.0037296910799010674,
            0.00017936765503610068
        ];
        let got = landau(&x, 1.0, 0.5, None, None).unwrap();
        assert_slice_rel_close(&got, &expect, TOL);
    }

    #[test]
    fn landau_location_scale_wide_peak() {
        let x = vec64![2.0, 7.0];
        let got = landau(&x, 3.0, 1.5, None, None).unwrap();
        assert_slice_rel_close(&got, &[0.17173276947867627, 0.08327284411497086], TOL);
    }

    #[test]
    fn landau_fit_two_peaks() {
        let x = vec64![-2.0, 0.0, 1.5, 3.0, 10.0, 40.0];
        let expect = vec64![
            1.3559815427763072e-07,
            4.425496985306487,
            15.439402232682003,
            9.348895786728882,
            4.569488687622329,
            0.18558225408117357
        ];
        let m = LandauMixture::from_params(&[100.0, 1.0, 0.5, 40.0, 6.0, 2.0]);
        let got = landau_fit(&x, &m, None, None).unwrap();
        assert_slice_rel_close(&got, &expect, TOL);
    }

    #[test]
    fn landau_fit_dead_component() {
        // second component has sigma < 0 and contributes nothing
        let x = vec64![1.0];
        let m = LandauMixture::from_params(&[2.0, 0.0, 1.0, 3.0, 5.0, -1.0]);
        let got = landau_fit(&x, &m, None, None).unwrap();
        assert_rel_close(got.data[0], 0.290413274261724, TOL);
    }

    #[test]
    fn landau_pdf_peak_value() {
        let x = vec64![-0.22278];
        let got = landau_pdf(&x, 1.0, 0.0, None, None).unwrap();
        assert_rel_close(got.data[0], 0.1806556336344668, 1e-10);
    }

    #[test]
    fn landau_pdf_with_nulls() {
        let x = vec64![-2.0, 0.0, 2.0, 10.0];
        let mut mask = Bitmask::new_set_all(4, true);
        mask.set(1, false);
        mask.set(3, false);
        let got = landau_pdf(&x, 1.0, 0.0, Some(&mask), Some(2)).unwrap();
        assert_rel_close(got.data[0], 0.04398547840678685, TOL);
        assert!(got.data[1].is_nan());
        assert_rel_close(got.data[2], 0.10491298949080555, TOL);
        assert!(got.data[3].is_nan());
        let out_mask = got.null_mask.as_ref().unwrap();
        assert!(out_mask.get(0) && !out_mask.get(1) && out_mask.get(2) && !out_mask.get(3));
    }

    #[test]
    fn landau_pdf_special_inputs() {
        let x = vec64![f64::NAN, f64::INFINITY, f64::NEG_INFINITY];
        let got = landau_pdf(&x, 1.0, 0.0, None, None).unwrap();
        assert!(got.data[0].is_nan());
        assert_eq!(got.data[1], 0.0);
        assert_eq!(got.data[2], 0.0);
        assert!(landau_pdf_scalar(f64::NAN, 1.0, 0.0).is_nan());
    }
}
