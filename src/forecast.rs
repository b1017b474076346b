// Aligns multi-method forecast series and confidence bounds into
// year-indexed frames for layered area/line charts. No statistics here:
// only index alignment and absence-on-short-series.

/// Lower/upper 95% bound pair for one forecast year.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundPair {
    pub lower_95: Option<f64>,
    pub upper_95: Option<f64>,
}

/// One chart point per forecast year. A method appears only when its
/// series actually covers this year's index; a short series means the
/// field is absent, not zero and not carried forward.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastFrame {
    pub year: i64,
    methods: Vec<(String, f64)>,
    pub lower_95: Option<f64>,
    pub upper_95: Option<f64>,
}

impl ForecastFrame {
    pub fn method(&self, name: &str) -> Option<f64> {
        self.methods
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| *v)
    }

    pub fn methods(&self) -> impl Iterator<Item = (&str, f64)> {
        self.methods.iter().map(|(n, v)| (n.as_str(), *v))
    }
}

/// One frame per entry of `years`, positionally aligned with every method
/// series and the bound sequence. Series longer than `years` are cut at
/// the year count; shorter ones simply stop contributing.
pub fn compose(
    years: &[i64],
    methods: &[(String, Vec<f64>)],
    bounds: &[BoundPair],
) -> Vec<ForecastFrame> {
    years
        .iter()
        .enumerate()
        .map(|(i, &year)| {
            let present: Vec<(String, f64)> = methods
                .iter()
                .filter_map(|(name, series)| {
                    series.get(i).map(|&value| (name.clone(), value))
                })
                .collect();
            let bound = bounds.get(i).copied().unwrap_or_default();
            ForecastFrame {
                year,
                methods: present,
                lower_95: bound.lower_95,
                upper_95: bound.upper_95,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn methods(pairs: &[(&str, &[f64])]) -> Vec<(String, Vec<f64>)> {
        pairs
            .iter()
            .map(|(n, s)| (n.to_string(), s.to_vec()))
            .collect()
    }

    #[test]
    fn short_series_goes_absent_not_zero() {
        let years = [2026, 2027, 2028];
        let methods = methods(&[
            ("ensemble", &[10.0, 11.0, 12.0][..]),
            ("linear", &[10.0, 11.0][..]),
        ]);
        let frames = compose(&years, &methods, &[]);

        assert_eq!(frames.len(), 3);
        assert_eq!(frames[2].year, 2028);
        assert_eq!(frames[2].method("ensemble"), Some(12.0));
        assert_eq!(frames[2].method("linear"), None);
        assert_eq!(frames[1].method("linear"), Some(11.0));
    }

    #[test]
    fn bounds_follow_the_same_alignment() {
        let years = [2026, 2027];
        let bounds = [BoundPair {
            lower_95: Some(9.0),
            upper_95: Some(12.0),
        }];
        let frames = compose(&years, &[], &bounds);

        assert_eq!(frames[0].lower_95, Some(9.0));
        assert_eq!(frames[0].upper_95, Some(12.0));
        assert_eq!(frames[1].lower_95, None);
        assert_eq!(frames[1].upper_95, None);
    }

    #[test]
    fn year_sequence_bounds_the_frame_count() {
        let years = [2026];
        let methods = methods(&[("ensemble", &[1.0, 2.0, 3.0][..])]);
        let frames = compose(&years, &methods, &[]);
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].method("ensemble"), Some(1.0));
    }

    #[test]
    fn empty_years_yield_no_frames() {
        assert!(compose(&[], &methods(&[("ensemble", &[1.0][..])]), &[]).is_empty());
    }
}
