#[cfg(test)]
mod tests {
    use rand::Rng;
    use repro_calc::{
        CalculatorConfig, ClinicalCalculators, OvarianReserveCategory, ReserveInput,
    };

    #[test]
    fn test_low_reserve_assessment_at_38() {
        let calculators = ClinicalCalculators::new();
        let result = calculators
            .assess_ovarian_reserve(&ReserveInput::new(38, 0.8).with_fsh(12.0).with_afc(6))
            .unwrap();

        // AMH below 1.0 classifies low; FSH 12 and AFC 6 fire no override
        assert_eq!(result.category, OvarianReserveCategory::Low);
        // Age 38 snaps to the 40 row; 0.8 interpolates between the 25th
        // (0.7) and 50th (1.2) breakpoints
        assert_eq!(result.percentile, 30);
        assert_eq!(result.confidence_interval, (20, 40));
        assert!(result.clinical_interpretation.contains("Low ovarian reserve"));
        assert_eq!(result.recommendations.len(), 5);
        assert!(result.evidence_base.contains_key("guidelines"));
    }

    #[test]
    fn test_max_tabulated_age_uses_row_directly() {
        let calculators = ClinicalCalculators::new();
        let result = calculators
            .assess_ovarian_reserve(&ReserveInput::new(45, 1.8))
            .unwrap();

        // 45 is the oldest row; 1.8 is exactly its 95th breakpoint
        assert_eq!(result.percentile, 95);
        assert_eq!(result.confidence_interval, (85, 99));
        assert_eq!(result.category, OvarianReserveCategory::Normal);
    }

    #[test]
    fn test_percentile_floor_keeps_ci_above_zero() {
        let calculators = ClinicalCalculators::new();
        let result = calculators
            .assess_ovarian_reserve(&ReserveInput::new(30, 0.05))
            .unwrap();

        assert_eq!(result.percentile, 5);
        // Lower bound clamps to 1, not 5 - 10
        assert_eq!(result.confidence_interval, (1, 15));
        assert_eq!(result.category, OvarianReserveCategory::VeryLow);
    }

    #[test]
    fn test_fsh_override_worsens_category() {
        let calculators = ClinicalCalculators::new();
        let result = calculators
            .assess_ovarian_reserve(&ReserveInput::new(35, 2.5).with_fsh(18.0))
            .unwrap();
        assert_eq!(result.category, OvarianReserveCategory::Low);

        // Even far above 20, the first override arm wins while the
        // category is not already very low
        let result = calculators
            .assess_ovarian_reserve(&ReserveInput::new(35, 2.5).with_fsh(25.0))
            .unwrap();
        assert_eq!(result.category, OvarianReserveCategory::Low);
    }

    #[test]
    fn test_high_afc_overrides_low_amh() {
        let calculators = ClinicalCalculators::new();
        let result = calculators
            .assess_ovarian_reserve(&ReserveInput::new(30, 0.3).with_afc(25))
            .unwrap();
        assert_eq!(result.category, OvarianReserveCategory::High);
        assert!(result
            .recommendations
            .iter()
            .any(|r| r.contains("ovarian hyperstimulation")));
    }

    #[test]
    fn test_percentile_monotonic_in_amh() {
        let calculators = ClinicalCalculators::new();
        let mut rng = rand::rng();

        for age in [22, 27, 30, 33, 38, 41, 45, 52] {
            let mut amh_values: Vec<f64> = (0..200).map(|_| rng.random_range(0.0..13.0)).collect();
            amh_values.sort_by(|a, b| a.partial_cmp(b).unwrap());

            let percentiles: Vec<u8> = amh_values
                .iter()
                .map(|&amh| {
                    calculators
                        .assess_ovarian_reserve(&ReserveInput::new(age, amh))
                        .unwrap()
                        .percentile
                })
                .collect();
            assert!(
                percentiles.windows(2).all(|w| w[0] <= w[1]),
                "percentile not monotonic at age {age}"
            );
        }
    }

    #[test]
    fn test_category_monotonic_in_amh() {
        let calculators = ClinicalCalculators::new();
        let amh_values = [0.1, 0.4, 0.6, 0.9, 1.5, 3.0, 5.0, 7.9, 9.5, 12.0];

        let categories: Vec<OvarianReserveCategory> = amh_values
            .iter()
            .map(|&amh| {
                calculators
                    .assess_ovarian_reserve(&ReserveInput::new(34, amh))
                    .unwrap()
                    .category
            })
            .collect();
        assert!(categories.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_ci_brackets_percentile() {
        let calculators = ClinicalCalculators::new();
        let mut rng = rand::rng();

        for _ in 0..100 {
            let age = rng.random_range(18..=60);
            let amh = rng.random_range(0.0..13.0);
            let result = calculators
                .assess_ovarian_reserve(&ReserveInput::new(age, amh))
                .unwrap();
            let (lower, upper) = result.confidence_interval;
            assert!(lower >= 1 && upper <= 99);
            assert!(lower <= result.percentile && result.percentile <= upper);
        }
    }

    #[test]
    fn test_identical_inputs_identical_results() {
        let calculators = ClinicalCalculators::new();
        let input = ReserveInput::new(38, 0.8).with_fsh(12.0).with_afc(6);
        let first = calculators.assess_ovarian_reserve(&input).unwrap();
        let second = calculators.assess_ovarian_reserve(&input).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_strict_validation_rejects_negative_amh() {
        let calculators = ClinicalCalculators::new().with_config(CalculatorConfig {
            validate_inputs: true,
            ..Default::default()
        });
        assert!(calculators
            .assess_ovarian_reserve(&ReserveInput::new(30, -0.5))
            .is_err());
        // Default config keeps the permissive behavior
        assert!(ClinicalCalculators::new()
            .assess_ovarian_reserve(&ReserveInput::new(30, -0.5))
            .is_ok());
    }
}
