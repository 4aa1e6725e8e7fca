//! Cross-module regression tests for tone-engine.
//!
//! Each test guards a property that a caller relies on across module
//! boundaries and documents what a failure would mean.

#[cfg(test)]
mod domain_tests {
    use std::thread;

    use crate::api::ToneAnalyzer;
    use crate::color::{
        estimate_cct, linear_to_srgb, lms_to_xyz, rgb_to_xyz, rgb_to_ycbcr, srgb_to_linear,
        xyz_to_chromaticity, xyz_to_lms, xyz_to_rgb, ycbcr_to_rgb, Chromaticity, Lab, Rgb8, Xyz,
    };
    use crate::image::{GrayImage, RgbImage};
    use crate::shade::{
        calculate_shade_steps, find_best_shade_match, interpret_brightness, ShadeGuide,
        VITA_SHADES,
    };
    use crate::sharpness::{
        analyze_sharpness, analyze_sharpness_from_gray, apply_laplacian_filter,
        normalize_sharpness_score, sharpness_verdict, SharpnessVerdict,
    };

    /// Every 5th value per channel plus the values next to both extremes.
    fn cube_samples() -> impl Iterator<Item = Rgb8> {
        let steps: Vec<u8> = (0..=255u8).step_by(5).chain([1, 254]).collect();
        let s2 = steps.clone();
        let s3 = steps.clone();
        steps.into_iter().flat_map(move |r| {
            let s3 = s3.clone();
            s2.clone()
                .into_iter()
                .flat_map(move |g| s3.clone().into_iter().map(move |b| Rgb8::new(r, g, b)))
        })
    }

    fn within_one(a: Rgb8, b: Rgb8) -> bool {
        a.to_bytes()
            .iter()
            .zip(b.to_bytes())
            .all(|(&x, y)| (x as i16 - y as i16).abs() <= 1)
    }

    // ========================================================================
    // Conversion round trips
    // ========================================================================

    /// If this breaks, it means: the XYZ matrices are no longer an inverse
    /// pair, or the transfer function encode/decode drifted apart.
    #[test]
    fn test_xyz_round_trip_over_cube() {
        for c in cube_samples() {
            let back = xyz_to_rgb(rgb_to_xyz(c));
            assert!(within_one(back, c), "{c:?} -> {back:?}");
        }
    }

    /// If this breaks, it means: the cone matrix inverse is wrong, so
    /// adaptation done in LMS would shift colors.
    #[test]
    fn test_lms_round_trip_over_cube() {
        for c in cube_samples() {
            let xyz = rgb_to_xyz(c);
            let back = xyz_to_rgb(lms_to_xyz(xyz_to_lms(xyz)));
            assert!(within_one(back, c), "{c:?} -> {back:?}");
        }
    }

    /// If this breaks, it means: YCbCr coefficients or offsets changed on
    /// one side only.
    #[test]
    fn test_ycbcr_round_trip_over_cube() {
        for c in cube_samples() {
            let back = ycbcr_to_rgb(rgb_to_ycbcr(c));
            assert!(within_one(back, c), "{c:?} -> {back:?}");
        }
    }

    #[test]
    fn test_transfer_round_trip_all_bytes() {
        for v in 0..=255u8 {
            let back = linear_to_srgb(srgb_to_linear(v));
            assert!((back as i16 - v as i16).abs() <= 1, "{v} -> {back}");
        }
        assert_eq!(srgb_to_linear(0), 0.0);
        assert_eq!(srgb_to_linear(255), 1.0);
        assert_eq!(linear_to_srgb(0.5), 188);
    }

    // ========================================================================
    // Anchors
    // ========================================================================

    /// If this breaks, it means: the white point or the XYZ scale changed,
    /// and every Lab value (and therefore every shade match) moves with it.
    #[test]
    fn test_white_point_and_cct_anchor() {
        let white = rgb_to_xyz(Rgb8::WHITE);
        assert!((white.x - 95.047).abs() < 1.0);
        assert!((white.y - 100.0).abs() < 1.0);
        assert!((white.z - 108.883).abs() < 1.0);
        assert_eq!(rgb_to_xyz(Rgb8::BLACK), Xyz::new(0.0, 0.0, 0.0));

        assert!((estimate_cct(Chromaticity::D65) - 6500.0).abs() < 150.0);
        assert!((estimate_cct(xyz_to_chromaticity(white)) - 6500.0).abs() < 150.0);
        assert_eq!(
            xyz_to_chromaticity(rgb_to_xyz(Rgb8::BLACK)),
            Chromaticity::new(0.0, 0.0)
        );
    }

    /// If this breaks, it means: Lab conversion and the VITA table disagree
    /// on scale; white would no longer land near the bleached shades.
    #[test]
    fn test_white_lab_is_lightness_100() {
        let lab = Lab::from(rgb_to_xyz(Rgb8::WHITE));
        assert!((lab.l - 100.0).abs() < 0.1);
        assert!(lab.a.abs() < 0.1 && lab.b.abs() < 0.1);
        assert_eq!(find_best_shade_match(lab, false).id, "0M1");
    }

    // ========================================================================
    // Sharpness policy
    // ========================================================================

    /// If this breaks, it means: a photo could be told "score 31" while
    /// being rejected, or the score curve lost monotonicity.
    #[test]
    fn test_score_verdict_agreement_dense() {
        let mut prev = 0u8;
        for i in 0..=24_000u32 {
            let v = i as f64 * 0.05;
            let score = normalize_sharpness_score(v);
            let (lo, hi) = sharpness_verdict(v).score_range();
            assert!((lo..=hi).contains(&score), "variance {v}: score {score}");
            assert!(score >= prev, "score fell at variance {v}");
            prev = score;
        }
    }

    /// If this breaks, it means: the filter writes border pixels, which
    /// would pull interior-only variance toward whatever it wrote.
    #[test]
    fn test_border_guarantee_random_like_input() {
        let (w, h) = (13, 9);
        let data: Vec<u8> = (0..w * h).map(|i| ((i * 97 + 13) % 251) as u8).collect();
        let out = apply_laplacian_filter(&GrayImage::new(&data, w, h).unwrap());
        for x in 0..w {
            assert_eq!(out[x], 0.0);
            assert_eq!(out[(h - 1) * w + x], 0.0);
        }
        for y in 0..h {
            assert_eq!(out[y * w], 0.0);
            assert_eq!(out[y * w + w - 1], 0.0);
        }
    }

    /// If this breaks, it means: RGB analysis is no longer a thin luma step
    /// in front of grayscale analysis.
    #[test]
    fn test_rgb_and_gray_paths_agree_exactly() {
        let (w, h) = (31, 17);
        let gray: Vec<u8> = (0..w * h).map(|i| ((i * 31) % 256) as u8).collect();
        let rgb: Vec<u8> = gray.iter().flat_map(|&v| [v, v, v]).collect();
        let a = analyze_sharpness(&RgbImage::new(&rgb, w, h).unwrap());
        let b = analyze_sharpness_from_gray(&GrayImage::new(&gray, w, h).unwrap());
        assert_eq!(a.laplacian_variance.to_bits(), b.laplacian_variance.to_bits());
        assert_eq!(a, b);
    }

    #[test]
    fn test_uniform_gray_scenario() {
        let data = vec![128u8; 20 * 20];
        let result = analyze_sharpness_from_gray(&GrayImage::new(&data, 20, 20).unwrap());
        assert!(result.laplacian_variance.abs() < 1e-9);
        assert!(result.score < 30);
        assert_eq!(result.verdict, SharpnessVerdict::Rejected);
    }

    // ========================================================================
    // Shade guide
    // ========================================================================

    /// If this breaks, it means: step direction flipped, and "two shades
    /// brighter" after whitening would be reported as darker.
    #[test]
    fn test_steps_are_antisymmetric() {
        for a in VITA_SHADES.iter() {
            for b in VITA_SHADES.iter() {
                assert_eq!(
                    calculate_shade_steps(&a.id, &b.id),
                    -calculate_shade_steps(&b.id, &a.id)
                );
            }
        }
        assert!(calculate_shade_steps("A3", "A1") > 0);
        assert!(calculate_shade_steps("A1", "A3") < 0);
    }

    /// If this breaks, it means: a step toward a brighter shade no longer
    /// moves toward a brighter brightness band.
    #[test]
    fn test_steps_and_brightness_agree() {
        for a in VITA_SHADES.iter().filter(|e| !e.is_bleached()) {
            for b in VITA_SHADES.iter().filter(|e| !e.is_bleached()) {
                if calculate_shade_steps(&a.id, &b.id) > 0 {
                    let (from, to) = (interpret_brightness(&a.id), interpret_brightness(&b.id));
                    assert!(to.level <= from.level, "{} -> {}", a.id, b.id);
                }
            }
        }
    }

    /// If this breaks, it means: the shared guide or the matcher picked up
    /// hidden state; parallel callers must see identical answers.
    #[test]
    fn test_concurrent_matching_is_consistent() {
        let probes: Vec<Lab> = (0..40)
            .map(|i| {
                let t = i as f32;
                Lab::new(58.0 + t * 0.7, -0.5 + t * 0.1, 8.0 + t * 0.4)
            })
            .collect();
        let expected: Vec<_> = probes
            .iter()
            .map(|&lab| find_best_shade_match(lab, skip_bleached(lab)))
            .collect();

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let probes = probes.clone();
                thread::spawn(move || {
                    probes
                        .iter()
                        .map(|&lab| find_best_shade_match(lab, skip_bleached(lab)))
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
        assert!(std::ptr::eq(ShadeGuide::vita(), ShadeGuide::vita()));
    }

    fn skip_bleached(lab: Lab) -> bool {
        (lab.l * 10.0) as i32 % 2 == 0
    }

    /// If this breaks, it means: the analyzer is not shareable across
    /// threads, or its output depends on call order.
    #[test]
    fn test_shared_analyzer_across_threads() {
        let (w, h) = (24, 24);
        let data: Vec<u8> = (0..w * h)
            .flat_map(|i| {
                if (i % w / 2 + i / w / 2) % 2 == 0 {
                    [240u8, 232, 210]
                } else {
                    [120u8, 110, 85]
                }
            })
            .collect();
        let analyzer = ToneAnalyzer::new().exclude_bleached(true);
        let expected = analyzer.analyze(&RgbImage::new(&data, w, h).unwrap()).unwrap();

        thread::scope(|s| {
            for _ in 0..4 {
                s.spawn(|| {
                    let image = RgbImage::new(&data, w, h).unwrap();
                    assert_eq!(analyzer.analyze(&image).unwrap(), expected);
                });
            }
        });
    }
}
