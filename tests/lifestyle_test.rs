#[cfg(test)]
mod tests {
    use repro_calc::models::FactorImpact;
    use repro_calc::{ActivityLevel, ClinicalCalculators, LifestyleInput, SmokingStatus};

    #[test]
    fn test_neutral_inputs_return_population_baseline() {
        let calculators = ClinicalCalculators::new();
        let estimate = calculators
            .estimate_menopause_age(&LifestyleInput::new(45))
            .unwrap();

        assert_eq!(estimate.estimated_menopause_age, 51.0);
        assert_eq!(estimate.baseline_age, 51.0);
        assert_eq!(estimate.years_until_menopause, 6.0);
        assert!(estimate.adjustments.is_empty());
        assert!(estimate.cycle_changes_note.is_none());
    }

    #[test]
    fn test_maternal_age_mirrored_at_seventy_percent() {
        let calculators = ClinicalCalculators::new();
        let estimate = calculators
            .estimate_menopause_age(&LifestyleInput::new(30).with_mothers_menopause_age(45))
            .unwrap();

        // (45 - 51) * 0.7 = -4.2
        assert_eq!(estimate.estimated_menopause_age, 46.8);
        assert_eq!(estimate.years_until_menopause, 16.8);
        assert_eq!(estimate.adjustments.len(), 1);
        let genetic = &estimate.adjustments[0];
        assert_eq!(genetic.factor, "Genetics (mother's age)");
        assert_eq!(genetic.adjustment_years, -4.2);
        assert_eq!(genetic.impact, FactorImpact::High);
    }

    #[test]
    fn test_estimate_clamps_to_upper_bound() {
        let calculators = ClinicalCalculators::new();
        let estimate = calculators
            .estimate_menopause_age(
                &LifestyleInput::new(40)
                    .with_mothers_menopause_age(65)
                    .with_exercise(ActivityLevel::High),
            )
            .unwrap();

        // 51 + 9.8 + 0.5 would be 61.3
        assert_eq!(estimate.estimated_menopause_age, 60.0);
    }

    #[test]
    fn test_estimate_clamps_to_lower_bound() {
        let calculators = ClinicalCalculators::new();
        let estimate = calculators
            .estimate_menopause_age(
                &LifestyleInput::new(38)
                    .with_mothers_menopause_age(40)
                    .with_smoking(SmokingStatus::Current)
                    .with_bmi(17.0)
                    .with_exercise(ActivityLevel::Low)
                    .with_stress(ActivityLevel::High),
            )
            .unwrap();

        // Every penalty stacked drives the raw estimate below 40
        assert_eq!(estimate.estimated_menopause_age, 40.0);
        assert_eq!(estimate.adjustments.len(), 5);
    }

    #[test]
    fn test_former_smoking_penalized_less_than_current() {
        let calculators = ClinicalCalculators::new();
        let former = calculators
            .estimate_menopause_age(&LifestyleInput::new(45).with_smoking(SmokingStatus::Former))
            .unwrap();
        let current = calculators
            .estimate_menopause_age(&LifestyleInput::new(45).with_smoking(SmokingStatus::Current))
            .unwrap();

        assert_eq!(former.estimated_menopause_age, 50.5);
        assert_eq!(current.estimated_menopause_age, 49.0);
        assert_eq!(former.adjustments[0].impact, FactorImpact::Low);
        assert_eq!(current.adjustments[0].impact, FactorImpact::High);
    }

    #[test]
    fn test_obesity_delays_and_underweight_advances() {
        let calculators = ClinicalCalculators::new();
        let obese = calculators
            .estimate_menopause_age(&LifestyleInput::new(45).with_bmi(32.0))
            .unwrap();
        let underweight = calculators
            .estimate_menopause_age(&LifestyleInput::new(45).with_bmi(17.5))
            .unwrap();
        let normal = calculators
            .estimate_menopause_age(&LifestyleInput::new(45).with_bmi(23.0))
            .unwrap();

        assert_eq!(obese.estimated_menopause_age, 51.5);
        assert_eq!(underweight.estimated_menopause_age, 50.0);
        assert_eq!(normal.estimated_menopause_age, 51.0);
        assert!(normal.adjustments.is_empty());
    }

    #[test]
    fn test_cycle_changes_note_requires_age_forty() {
        let calculators = ClinicalCalculators::new();
        let younger = calculators
            .estimate_menopause_age(&LifestyleInput::new(38).with_cycle_changes(true))
            .unwrap();
        let older = calculators
            .estimate_menopause_age(&LifestyleInput::new(42).with_cycle_changes(true))
            .unwrap();

        assert!(younger.cycle_changes_note.is_none());
        assert!(
            older
                .cycle_changes_note
                .as_deref()
                .unwrap()
                .contains("perimenopause")
        );
    }

    #[test]
    fn test_years_until_menopause_floors_at_zero() {
        let calculators = ClinicalCalculators::new();
        let estimate = calculators
            .estimate_menopause_age(&LifestyleInput::new(58).with_smoking(SmokingStatus::Current))
            .unwrap();

        assert!(estimate.estimated_menopause_age < 58.0);
        assert_eq!(estimate.years_until_menopause, 0.0);
    }
}
