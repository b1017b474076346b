// Pivots flat per-(period, category) records into one point per period
// for multi-series time charts.
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub struct FlatRecord {
    pub period: String,
    pub category: String,
    pub value: f64,
}

/// One chart point: the period key plus one entry per category observed
/// for that period. Categories never observed stay absent, not zero.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupedPoint {
    pub period: String,
    values: Vec<(String, f64)>,
}

impl GroupedPoint {
    pub fn get(&self, category: &str) -> Option<f64> {
        self.values
            .iter()
            .find(|(c, _)| c == category)
            .map(|(_, v)| *v)
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(|(c, _)| c.as_str())
    }

    fn set(&mut self, category: String, value: f64) {
        // Last write wins for a repeated (period, category) pair.
        if let Some(slot) = self.values.iter_mut().find(|(c, _)| *c == category) {
            slot.1 = value;
        } else {
            self.values.push((category, value));
        }
    }
}

/// Merges records into one point per distinct period, in first-seen
/// order. Duplicate (period, category) pairs resolve last-write-wins;
/// that is documented behavior, not incidental.
pub fn group_by_period(records: impl IntoIterator<Item = FlatRecord>) -> Vec<GroupedPoint> {
    let mut points: Vec<GroupedPoint> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for record in records {
        let slot = match index.get(&record.period) {
            Some(&i) => i,
            None => {
                index.insert(record.period.clone(), points.len());
                points.push(GroupedPoint {
                    period: record.period,
                    values: Vec::new(),
                });
                points.len() - 1
            }
        };
        points[slot].set(record.category, record.value);
    }

    points
}

/// Distinct category keys in first-seen order, for building one chart
/// series per category.
pub fn distinct_categories(records: &[FlatRecord]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for record in records {
        if !seen.iter().any(|c| c == &record.category) {
            seen.push(record.category.clone());
        }
    }
    seen
}
