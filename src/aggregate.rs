use std::collections::{BTreeMap, BTreeSet};

use crate::models::{Dataset, Measurement, MetricAverages, SummaryRow};

/// Decimal places for gauge values.
pub const GAUGE_DECIMALS: i32 = 2;
/// Decimal places for summary table cells.
pub const TABLE_DECIMALS: i32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupBy {
    Team,
    Athlete,
}

impl GroupBy {
    fn key<'a, M: Measurement>(&self, row: &'a M) -> &'a str {
        match self {
            GroupBy::Team => row.team(),
            GroupBy::Athlete => row.name(),
        }
    }
}

/// Arithmetic mean of the present values, or zero when there are none.
///
/// Every aggregate in the dashboard goes through here so nothing undefined
/// ever reaches a chart or table.
pub fn mean_or_zero<I>(values: I) -> f64
where
    I: IntoIterator<Item = Option<f64>>,
{
    let (sum, count) = values
        .into_iter()
        .flatten()
        .filter(|value| value.is_finite())
        .fold((0.0, 0usize), |(sum, count), value| (sum + value, count + 1));

    if count == 0 {
        return 0.0;
    }

    let mean = sum / count as f64;
    if mean.is_finite() {
        mean
    } else {
        0.0
    }
}

pub fn round_to(value: f64, decimals: i32) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

fn group_means<R, F>(rows: &[R], group: GroupBy, value: F) -> BTreeMap<String, f64>
where
    R: Measurement,
    F: Fn(&R) -> Option<f64>,
{
    let mut groups: BTreeMap<String, Vec<Option<f64>>> = BTreeMap::new();

    for row in rows {
        let key = group.key(row);
        if key.is_empty() {
            continue;
        }
        groups.entry(key.to_string()).or_default().push(value(row));
    }

    groups
        .into_iter()
        .map(|(key, values)| (key, mean_or_zero(values)))
        .collect()
}

/// Scope-wide means, rounded for the gauges.
pub fn overall_averages(dataset: &Dataset) -> MetricAverages {
    MetricAverages {
        readiness: round_to(
            mean_or_zero(dataset.readiness.iter().map(|r| r.score)),
            GAUGE_DECIMALS,
        ),
        hours: round_to(
            mean_or_zero(dataset.sleep.iter().map(|r| r.hours)),
            GAUGE_DECIMALS,
        ),
        quality: round_to(
            mean_or_zero(dataset.sleep.iter().map(|r| r.quality)),
            GAUGE_DECIMALS,
        ),
        calories: round_to(
            mean_or_zero(dataset.nutrition.iter().map(|r| r.calories)),
            GAUGE_DECIMALS,
        ),
    }
}

/// One row per distinct key found in any of the three tables, in key order.
pub fn summarize_by(dataset: &Dataset, group: GroupBy) -> Vec<SummaryRow> {
    let readiness = group_means(&dataset.readiness, group, |r| r.score);
    let hours = group_means(&dataset.sleep, group, |r| r.hours);
    let quality = group_means(&dataset.sleep, group, |r| r.quality);
    let calories = group_means(&dataset.nutrition, group, |r| r.calories);

    let keys: BTreeSet<&String> = readiness
        .keys()
        .chain(hours.keys())
        .chain(calories.keys())
        .collect();

    let cell = |map: &BTreeMap<String, f64>, key: &str| {
        round_to(map.get(key).copied().unwrap_or(0.0), TABLE_DECIMALS)
    };

    keys.into_iter()
        .map(|key| SummaryRow {
            key: key.clone(),
            readiness: cell(&readiness, key.as_str()),
            hours: cell(&hours, key.as_str()),
            quality: cell(&quality, key.as_str()),
            calories: cell(&calories, key.as_str()),
        })
        .collect()
}

/// Distinct team names from the readiness table, sorted.
pub fn team_names(dataset: &Dataset) -> Vec<String> {
    dataset
        .readiness
        .iter()
        .map(|r| r.team.clone())
        .filter(|team| !team.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
