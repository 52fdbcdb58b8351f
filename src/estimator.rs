use serde::{Deserialize, Serialize};

/// Unit the user measures a single process run in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeUnit {
    Seconds,
    Minutes,
    Hours,
}

impl TimeUnit {
    pub const ALL: [TimeUnit; 3] = [TimeUnit::Seconds, TimeUnit::Minutes, TimeUnit::Hours];

    /// Seconds represented by one unit.
    pub fn seconds_per_unit(self) -> f64 {
        match self {
            TimeUnit::Seconds => 1.0,
            TimeUnit::Minutes => 60.0,
            TimeUnit::Hours => 3600.0,
        }
    }

    /// Parses a UI label. Unrecognized labels yield `None`; callers treat
    /// that as a zero multiplier rather than an error.
    pub fn parse_label(label: &str) -> Option<Self> {
        match label {
            "Seconds" => Some(TimeUnit::Seconds),
            "Minutes" => Some(TimeUnit::Minutes),
            "Hours" => Some(TimeUnit::Hours),
            _ => None,
        }
    }
}

/// Period the process count is measured over.
///
/// Periods are approximated with fixed day-counts (Month=30, Year=365).
/// This is an intentional simplification, not a calendar computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Period {
    #[serde(rename = "Work Day")]
    WorkDay,
    Day,
    #[serde(rename = "Work Week")]
    WorkWeek,
    Week,
    Month,
    Quarter,
    Year,
}

impl Period {
    pub const ALL: [Period; 7] = [
        Period::WorkDay,
        Period::Day,
        Period::WorkWeek,
        Period::Week,
        Period::Month,
        Period::Quarter,
        Period::Year,
    ];

    /// Days represented by one period.
    pub fn days_per_period(self) -> f64 {
        match self {
            Period::WorkDay => 1.0,
            Period::Day => 1.0,
            Period::WorkWeek => 5.0,
            Period::Week => 7.0,
            Period::Month => 30.0,
            Period::Quarter => 90.0,
            Period::Year => 365.0,
        }
    }

    /// Parses a UI label. Unrecognized labels yield `None`; callers treat
    /// that as a zero multiplier rather than an error.
    pub fn parse_label(label: &str) -> Option<Self> {
        match label {
            "Work Day" => Some(Period::WorkDay),
            "Day" => Some(Period::Day),
            "Work Week" => Some(Period::WorkWeek),
            "Week" => Some(Period::Week),
            "Month" => Some(Period::Month),
            "Quarter" => Some(Period::Quarter),
            "Year" => Some(Period::Year),
            _ => None,
        }
    }
}

/// Raw calculator inputs, as held by the form driving the estimator.
///
/// All five fields must be present for a valid estimate; the estimate is
/// recomputed on every change, never cached independently of its inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorInputs {
    pub time_unit: TimeUnit,
    pub period: Period,
    pub process_time: f64,
    pub process_count: f64,
    pub wage: f64,
}

impl CalculatorInputs {
    /// Estimates the labor cost of the process per period, in currency.
    ///
    /// Pure and deterministic: identical inputs always yield identical output.
    pub fn estimate(&self) -> f64 {
        let seconds_per_period = self.process_time
            * self.process_count
            * self.time_unit.seconds_per_unit()
            * self.period.days_per_period();
        let hours = seconds_per_period / 3600.0;
        hours * self.wage
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(
        time_unit: TimeUnit,
        period: Period,
        process_time: f64,
        process_count: f64,
        wage: f64,
    ) -> CalculatorInputs {
        CalculatorInputs {
            time_unit,
            period,
            process_time,
            process_count,
            wage,
        }
    }

    #[test]
    fn default_slider_values_estimate() {
        // 45 seconds x 50 runs per day at $32.03/h
        let cost = inputs(TimeUnit::Seconds, Period::Day, 45.0, 50.0, 32.03).estimate();
        assert!((cost - 20.01875).abs() < 1e-9);
    }

    #[test]
    fn hours_per_year_estimate() {
        // 10 hours x 2 runs per year at $50/h = 365000
        let cost = inputs(TimeUnit::Hours, Period::Year, 10.0, 2.0, 50.0).estimate();
        assert!((cost - 365_000.0).abs() < 1e-6);
    }

    #[test]
    fn zero_inputs_yield_zero_cost() {
        for (t, c, w) in [(0.0, 50.0, 32.0), (45.0, 0.0, 32.0), (45.0, 50.0, 0.0)] {
            let cost = inputs(TimeUnit::Minutes, Period::Month, t, c, w).estimate();
            assert_eq!(cost, 0.0);
        }
    }

    #[test]
    fn estimate_matches_formula_for_all_enum_combinations() {
        for unit in TimeUnit::ALL {
            for period in Period::ALL {
                let i = inputs(unit, period, 12.5, 7.0, 21.5);
                let expected =
                    12.5 * 7.0 * unit.seconds_per_unit() * period.days_per_period() / 3600.0 * 21.5;
                assert_eq!(i.estimate(), expected, "{:?}/{:?}", unit, period);
            }
        }
    }

    #[test]
    fn estimate_is_deterministic() {
        let i = inputs(TimeUnit::Minutes, Period::WorkWeek, 3.0, 40.0, 28.75);
        assert_eq!(i.estimate(), i.estimate());
    }

    #[test]
    fn labels_round_trip_through_parse() {
        for unit in TimeUnit::ALL {
            let label = serde_json::to_value(unit).unwrap();
            assert_eq!(TimeUnit::parse_label(label.as_str().unwrap()), Some(unit));
        }
        for period in Period::ALL {
            let label = serde_json::to_value(period).unwrap();
            assert_eq!(Period::parse_label(label.as_str().unwrap()), Some(period));
        }
    }

    #[test]
    fn unknown_labels_parse_to_none() {
        assert_eq!(TimeUnit::parse_label("Fortnights"), None);
        assert_eq!(Period::parse_label("Decade"), None);
    }

    #[test]
    fn period_labels_match_ui_strings() {
        let parsed: Period = serde_json::from_str("\"Work Week\"").unwrap();
        assert_eq!(parsed, Period::WorkWeek);
        assert_eq!(serde_json::to_string(&Period::WorkDay).unwrap(), "\"Work Day\"");
    }
}
