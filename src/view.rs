use serde::Serialize;

use crate::aggregate::{overall_averages, summarize_by, team_names, GroupBy};
use crate::models::{Dataset, MetricAverages, Scope, SummaryRow};
use crate::normalize::{filter_scope, normalize_scope};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gauge {
    Readiness,
    SleepQuality,
    SleepHours,
    Nutrition,
}

impl Gauge {
    /// Display order, left to right.
    pub const ALL: [Gauge; 4] = [
        Gauge::Readiness,
        Gauge::SleepQuality,
        Gauge::SleepHours,
        Gauge::Nutrition,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Gauge::Readiness => "Readiness",
            Gauge::SleepQuality => "Sleep Quality",
            Gauge::SleepHours => "Sleep Hours",
            Gauge::Nutrition => "Nutrition",
        }
    }

    pub fn range(&self) -> [f64; 2] {
        match self {
            Gauge::Readiness => [0.0, 100.0],
            Gauge::SleepQuality => [0.0, 10.0],
            Gauge::SleepHours => [0.0, 12.0],
            Gauge::Nutrition => [0.0, 4000.0],
        }
    }

    pub fn bar_color(&self) -> &'static str {
        match self {
            Gauge::Readiness => "yellow",
            Gauge::SleepQuality => "purple",
            Gauge::SleepHours => "blue",
            Gauge::Nutrition => "orange",
        }
    }

    pub fn value(&self, averages: &MetricAverages) -> f64 {
        match self {
            Gauge::Readiness => averages.readiness,
            Gauge::SleepQuality => averages.quality,
            Gauge::SleepHours => averages.hours,
            Gauge::Nutrition => averages.calories,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GaugeIndicator {
    pub title: &'static str,
    pub mode: &'static str,
    pub value: f64,
    pub range: [f64; 2],
    pub bar_color: &'static str,
    pub row: u8,
    pub col: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartLayout {
    pub width: u32,
    pub height: u32,
    pub show_legend: bool,
    pub plot_bgcolor: &'static str,
    pub paper_bgcolor: &'static str,
    pub font_color: &'static str,
    pub horizontal_spacing: f64,
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self {
            width: 1100,
            height: 300,
            show_legend: false,
            plot_bgcolor: "rgba(0,0,0,0)",
            paper_bgcolor: "rgba(0,0,0,0)",
            font_color: "white",
            horizontal_spacing: 0.12,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartDescription {
    pub indicators: Vec<GaugeIndicator>,
    pub layout: ChartLayout,
}

/// Everything the presentation layer needs to draw one dashboard page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub scope: Scope,
    pub chart: ChartDescription,
    pub rows: Vec<SummaryRow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_names: Option<Vec<String>>,
}

pub fn build_chart(averages: &MetricAverages) -> ChartDescription {
    let indicators = Gauge::ALL
        .iter()
        .zip(1u8..)
        .map(|(gauge, col)| GaugeIndicator {
            title: gauge.title(),
            mode: "gauge+number",
            value: gauge.value(averages),
            range: gauge.range(),
            bar_color: gauge.bar_color(),
            row: 1,
            col,
        })
        .collect();

    ChartDescription {
        indicators,
        layout: ChartLayout::default(),
    }
}

/// Assembles the view for `scope` from a normalized dataset.
///
/// All teams are tabulated per team, a team per athlete, and an athlete
/// gets a single row of their own means. An unknown team or athlete
/// produces zeroed gauges and no rows.
pub fn build_view(dataset: &Dataset, scope: Scope) -> DashboardView {
    let scope = normalize_scope(scope);
    let scoped = filter_scope(dataset, &scope);
    let averages = overall_averages(&scoped);

    let (rows, names) = match &scope {
        Scope::All => (
            summarize_by(&scoped, GroupBy::Team),
            Some(team_names(&scoped)),
        ),
        Scope::Team(_) => (summarize_by(&scoped, GroupBy::Athlete), None),
        // Scoped rows all share the athlete's name, so this is at most one row.
        Scope::Athlete(_) => (summarize_by(&scoped, GroupBy::Athlete), None),
    };

    DashboardView {
        scope,
        chart: build_chart(&averages),
        rows,
        team_names: names,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NutritionRecord, ReadinessRecord, SleepRecord};
    use crate::normalize::normalize_dataset;

    fn sample() -> Dataset {
        normalize_dataset(Dataset {
            readiness: vec![
                ReadinessRecord {
                    name: "Avery".to_string(),
                    team: "Football".to_string(),
                    score: Some(80.0),
                },
                ReadinessRecord {
                    name: "Jules".to_string(),
                    team: "football".to_string(),
                    score: Some(60.0),
                },
                ReadinessRecord {
                    name: "Kiara".to_string(),
                    team: "Soccer".to_string(),
                    score: Some(90.0),
                },
            ],
            sleep: vec![
                SleepRecord {
                    name: "Avery".to_string(),
                    team: "football".to_string(),
                    hours: Some(7.0),
                    quality: Some(6.0),
                },
                SleepRecord {
                    name: "Avery".to_string(),
                    team: "football".to_string(),
                    hours: None,
                    quality: Some(7.0),
                },
                SleepRecord {
                    name: "Avery".to_string(),
                    team: "football".to_string(),
                    hours: Some(9.0),
                    quality: None,
                },
            ],
            nutrition: vec![NutritionRecord {
                name: "Kiara".to_string(),
                team: "soccer".to_string(),
                calories: Some(3100.0),
            }],
        })
    }

    #[test]
    fn chart_has_four_fixed_gauges() {
        let chart = build_chart(&MetricAverages {
            readiness: 70.0,
            hours: 8.0,
            quality: 6.5,
            calories: 2500.0,
        });

        let titles: Vec<&str> = chart.indicators.iter().map(|g| g.title).collect();
        assert_eq!(
            titles,
            vec!["Readiness", "Sleep Quality", "Sleep Hours", "Nutrition"]
        );
        assert_eq!(chart.indicators[0].range, [0.0, 100.0]);
        assert_eq!(chart.indicators[1].value, 6.5);
        assert_eq!(chart.indicators[2].value, 8.0);
        assert_eq!(chart.indicators[3].range, [0.0, 4000.0]);
        assert_eq!(chart.indicators[3].col, 4);
    }

    #[test]
    fn admin_view_tabulates_teams() {
        let view = build_view(&sample(), Scope::All);
        assert_eq!(view.rows.len(), 2);
        assert_eq!(view.rows[0].key, "football");
        assert_eq!(view.rows[0].readiness, 70.0);
        assert_eq!(view.rows[0].hours, 8.0);
        assert_eq!(
            view.team_names,
            Some(vec!["football".to_string(), "soccer".to_string()])
        );
        assert_eq!(view.chart.indicators[0].value, 76.67);
    }

    #[test]
    fn team_view_tabulates_athletes() {
        let view = build_view(&sample(), Scope::Team(" FOOTBALL ".to_string()));
        assert_eq!(view.scope, Scope::Team("football".to_string()));
        let keys: Vec<&str> = view.rows.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, vec!["Avery", "Jules"]);
        assert_eq!(view.rows[0].hours, 8.0);
        assert_eq!(view.chart.indicators[0].value, 70.0);
        assert_eq!(view.chart.indicators[3].value, 0.0);
        assert!(view.team_names.is_none());
    }

    #[test]
    fn athlete_view_has_single_row() {
        let view = build_view(&sample(), Scope::Athlete("Avery".to_string()));
        assert_eq!(view.rows.len(), 1);
        assert_eq!(view.rows[0].readiness, 80.0);
        assert_eq!(view.rows[0].quality, 6.5);
        assert_eq!(view.chart.indicators[2].value, 8.0);
    }

    #[test]
    fn athlete_row_matches_team_table() {
        let dataset = normalize_dataset(Dataset {
            readiness: vec![
                ReadinessRecord {
                    name: "A".to_string(),
                    team: "x".to_string(),
                    score: Some(7.0),
                },
                ReadinessRecord {
                    name: "A".to_string(),
                    team: "x".to_string(),
                    score: Some(7.098),
                },
            ],
            ..Dataset::default()
        });

        let athlete = build_view(&dataset, Scope::Athlete("A".to_string()));
        let team = build_view(&dataset, Scope::Team("x".to_string()));
        assert_eq!(athlete.chart.indicators[0].value, 7.05);
        assert_eq!(athlete.rows[0].readiness, 7.0);
        assert_eq!(athlete.rows, team.rows);
    }

    #[test]
    fn unknown_scope_is_all_zero() {
        for scope in [
            Scope::Team("rowing".to_string()),
            Scope::Athlete("Nobody".to_string()),
        ] {
            let view = build_view(&sample(), scope);
            assert!(view.rows.is_empty());
            assert!(view.chart.indicators.iter().all(|g| g.value == 0.0));
        }
    }

    #[test]
    fn view_serializes_for_templates() {
        let view = build_view(&sample(), Scope::Team("soccer".to_string()));
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["scope"]["kind"], "team");
        assert_eq!(json["scope"]["name"], "soccer");
        assert_eq!(json["chart"]["indicators"][0]["mode"], "gauge+number");
        assert_eq!(json["chart"]["layout"]["width"], 1100);
        assert_eq!(json["rows"][0]["key"], "Kiara");
        assert!(json.get("team_names").is_none());
    }
}
