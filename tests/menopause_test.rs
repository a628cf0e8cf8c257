#[cfg(test)]
mod tests {
    use repro_calc::{ClinicalCalculators, MenopauseInput, MenopauseStage};

    fn round1(value: f64) -> f64 {
        (value * 10.0).round() / 10.0
    }

    #[test]
    fn test_late_transition_prediction_at_45() {
        let calculators = ClinicalCalculators::new();
        let result = calculators
            .predict_menopause_timing(
                &MenopauseInput::new(45, 0.3)
                    .with_bmi(26.0)
                    .with_family_history("normal")
                    .with_ethnicity("caucasian")
                    .with_parity(2),
            )
            .unwrap();

        // No factor fires: parity > 0, BMI under 30, normal history,
        // unmatched ethnicity
        assert!(result.risk_factors.is_empty());
        assert!(result.protective_factors.is_empty());

        let years_remaining = (3.8 + 0.4 * 0.3_f64.ln() - 0.02 * 45.0).exp().clamp(0.5, 15.0);
        assert_eq!(result.predicted_age, round1(45.0 + years_remaining));
        assert_eq!(result.time_to_menopause_years, round1(years_remaining));

        // AMH in (0.1, 0.5] with the reproductive branches failed
        assert_eq!(result.current_stage, MenopauseStage::LateTransition);
        // Years remain but AMH is at most 0.5
        assert!(!result.fertility_window_remaining);
    }

    #[test]
    fn test_unmeasurable_amh_short_circuits() {
        let calculators = ClinicalCalculators::new();
        let result = calculators
            .predict_menopause_timing(&MenopauseInput::new(50, 0.005))
            .unwrap();

        // Near-menopause branch: half a year out, minus nulliparity 0.8
        assert_eq!(result.predicted_age, round1(50.5 - 0.8));
        assert_eq!(result.time_to_menopause_years, 0.0);
        assert!(!result.fertility_window_remaining);
        assert_eq!(result.current_stage, MenopauseStage::EarlyPostmenopause);
    }

    #[test]
    fn test_factor_bookkeeping() {
        let calculators = ClinicalCalculators::new();
        let base = calculators
            .predict_menopause_timing(&MenopauseInput::new(42, 1.5).with_parity(1))
            .unwrap();
        let adjusted = calculators
            .predict_menopause_timing(
                &MenopauseInput::new(42, 1.5)
                    .with_smoking(true)
                    .with_bmi(32.0)
                    .with_family_history("early")
                    .with_ethnicity("Chinese-American"),
            )
            .unwrap();

        // smoking -1.8, family history -2.1, nulliparity -0.8,
        // BMI over 30 +0.6, Chinese ethnicity +0.9
        let expected = base.predicted_age - 1.8 - 2.1 - 0.8 + 0.6 + 0.9;
        assert_eq!(adjusted.predicted_age, round1(expected));

        assert_eq!(
            adjusted.risk_factors,
            vec!["Current smoking", "Family history of early menopause", "Nulliparity"]
        );
        assert_eq!(adjusted.protective_factors, vec!["Higher BMI", "Chinese ethnicity"]);
    }

    #[test]
    fn test_ethnicity_substring_first_match_wins() {
        let calculators = ClinicalCalculators::new();
        let chinese = calculators
            .predict_menopause_timing(&MenopauseInput::new(40, 2.0).with_parity(1).with_ethnicity("chinese"))
            .unwrap();
        let both = calculators
            .predict_menopause_timing(
                &MenopauseInput::new(40, 2.0).with_parity(1).with_ethnicity("Chinese and Japanese"),
            )
            .unwrap();

        // The chinese arm shadows the japanese one
        assert_eq!(both.predicted_age, chinese.predicted_age);
        assert_eq!(both.protective_factors, vec!["Chinese ethnicity"]);
    }

    #[test]
    fn test_stage_classification() {
        let calculators = ClinicalCalculators::new();
        let cases = [
            (30, 3.0, MenopauseStage::Reproductive),
            (43, 1.5, MenopauseStage::Reproductive),
            (48, 0.8, MenopauseStage::EarlyTransition),
            (50, 0.3, MenopauseStage::LateTransition),
            (55, 0.05, MenopauseStage::EarlyPostmenopause),
            (70, 0.05, MenopauseStage::LatePostmenopause),
        ];
        for (age, amh, expected) in cases {
            let result = calculators
                .predict_menopause_timing(&MenopauseInput::new(age, amh).with_parity(1))
                .unwrap();
            assert_eq!(result.current_stage, expected, "age {age}, AMH {amh}");
        }
    }

    #[test]
    fn test_confidence_interval_clamped_and_ordered() {
        let calculators = ClinicalCalculators::new();
        for (age, amh) in [(25, 8.0), (38, 1.0), (45, 0.3), (52, 0.05), (60, 0.001)] {
            let result = calculators
                .predict_menopause_timing(&MenopauseInput::new(age, amh))
                .unwrap();
            let (lower, upper) = result.confidence_interval;
            assert!((40.0..=65.0).contains(&lower), "lower {lower} at age {age}");
            assert!((40.0..=65.0).contains(&upper), "upper {upper} at age {age}");
            assert!(lower <= upper);
        }
    }

    #[test]
    fn test_fertility_window_requires_time_and_amh() {
        let calculators = ClinicalCalculators::new();
        // Plenty of time and AMH above 0.5
        let open = calculators
            .predict_menopause_timing(&MenopauseInput::new(35, 2.5).with_parity(1))
            .unwrap();
        assert!(open.fertility_window_remaining);
        assert!(open.time_to_menopause_years > 2.0);

        // Years remain but AMH sits at or below the 0.5 gate
        let amh_gated = calculators
            .predict_menopause_timing(&MenopauseInput::new(45, 0.4).with_parity(1))
            .unwrap();
        assert!(amh_gated.time_to_menopause_years > 2.0);
        assert!(!amh_gated.fertility_window_remaining);

        // Unmeasurable AMH leaves no time either
        let out_of_time = calculators
            .predict_menopause_timing(&MenopauseInput::new(52, 0.005))
            .unwrap();
        assert_eq!(out_of_time.time_to_menopause_years, 0.0);
        assert!(!out_of_time.fertility_window_remaining);
    }

    #[test]
    fn test_smoking_adds_cessation_recommendation() {
        let calculators = ClinicalCalculators::new();
        let result = calculators
            .predict_menopause_timing(&MenopauseInput::new(44, 0.8).with_smoking(true).with_parity(2))
            .unwrap();

        assert!(result
            .recommendations
            .iter()
            .any(|r| r.contains("Smoking cessation")));
        assert!(result.risk_factors.contains(&"Current smoking".to_string()));
    }

    #[test]
    fn test_identical_inputs_identical_results() {
        let calculators = ClinicalCalculators::new();
        let input = MenopauseInput::new(45, 0.3).with_bmi(31.0).with_smoking(true);
        let first = calculators.predict_menopause_timing(&input).unwrap();
        let second = calculators.predict_menopause_timing(&input).unwrap();
        assert_eq!(first, second);
    }
}
