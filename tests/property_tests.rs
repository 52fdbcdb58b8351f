/// Property-based tests using proptest
/// Tests invariants that should hold for the cost estimator over all inputs
use process_cost_api::estimator::{CalculatorInputs, Period, TimeUnit};
use proptest::prelude::*;

fn any_time_unit() -> impl Strategy<Value = TimeUnit> {
    prop::sample::select(TimeUnit::ALL.to_vec())
}

fn any_period() -> impl Strategy<Value = Period> {
    prop::sample::select(Period::ALL.to_vec())
}

prop_compose! {
    fn any_inputs()(
        time_unit in any_time_unit(),
        period in any_period(),
        process_time in 0.0f64..=100.0,
        process_count in 0.0f64..=100.0,
        wage in 0.0f64..=1000.0,
    ) -> CalculatorInputs {
        CalculatorInputs { time_unit, period, process_time, process_count, wage }
    }
}

// Property: estimate equals the closed-form derivation
proptest! {
    #[test]
    fn estimate_matches_closed_form(inputs in any_inputs()) {
        let expected = inputs.process_time
            * inputs.process_count
            * inputs.time_unit.seconds_per_unit()
            * inputs.period.days_per_period()
            / 3600.0
            * inputs.wage;
        prop_assert_eq!(inputs.estimate(), expected);
    }

    #[test]
    fn estimate_is_never_negative(inputs in any_inputs()) {
        prop_assert!(inputs.estimate() >= 0.0);
    }

    #[test]
    fn estimate_is_pure(inputs in any_inputs()) {
        // Same inputs, same output, no hidden state between calls
        prop_assert_eq!(inputs.estimate(), inputs.estimate());
    }
}

// Property: a zero factor annihilates the estimate exactly
proptest! {
    #[test]
    fn zero_process_time_yields_zero(mut inputs in any_inputs()) {
        inputs.process_time = 0.0;
        prop_assert_eq!(inputs.estimate(), 0.0);
    }

    #[test]
    fn zero_process_count_yields_zero(mut inputs in any_inputs()) {
        inputs.process_count = 0.0;
        prop_assert_eq!(inputs.estimate(), 0.0);
    }

    #[test]
    fn zero_wage_yields_zero(mut inputs in any_inputs()) {
        inputs.wage = 0.0;
        prop_assert_eq!(inputs.estimate(), 0.0);
    }
}

// Property: cost is monotone in the unit and period multipliers
proptest! {
    #[test]
    fn coarser_time_unit_never_cheaper(mut inputs in any_inputs()) {
        inputs.time_unit = TimeUnit::Seconds;
        let seconds = inputs.estimate();
        inputs.time_unit = TimeUnit::Minutes;
        let minutes = inputs.estimate();
        inputs.time_unit = TimeUnit::Hours;
        let hours = inputs.estimate();

        prop_assert!(seconds <= minutes);
        prop_assert!(minutes <= hours);
    }

    #[test]
    fn longer_period_never_cheaper(mut inputs in any_inputs()) {
        inputs.period = Period::Day;
        let day = inputs.estimate();
        inputs.period = Period::Week;
        let week = inputs.estimate();
        inputs.period = Period::Year;
        let year = inputs.estimate();

        prop_assert!(day <= week);
        prop_assert!(week <= year);
    }
}

// Property: estimate scales linearly with wage
proptest! {
    #[test]
    fn wage_scales_linearly(
        time_unit in any_time_unit(),
        period in any_period(),
        process_time in 0.0f64..=100.0,
        process_count in 0.0f64..=100.0,
        wage in 0.01f64..=500.0,
    ) {
        let base = CalculatorInputs { time_unit, period, process_time, process_count, wage };
        let doubled = CalculatorInputs { wage: wage * 2.0, ..base };

        let single = base.estimate();
        let double = doubled.estimate();
        let tolerance = 1e-9 * single.abs().max(1.0);
        prop_assert!((double - 2.0 * single).abs() <= tolerance);
    }
}

// Property: label parsing never panics and only accepts the UI vocabulary
proptest! {
    #[test]
    fn label_parsing_never_panics(label in "\\PC*") {
        let _ = TimeUnit::parse_label(&label);
        let _ = Period::parse_label(&label);
    }

    #[test]
    fn arbitrary_lowercase_labels_rejected(label in "[a-z]{1,12}") {
        // UI labels are capitalized; anything else maps to no variant
        prop_assert_eq!(TimeUnit::parse_label(&label), None);
        prop_assert_eq!(Period::parse_label(&label), None);
    }
}
