use serde::Serialize;

#[derive(Debug, Clone, PartialEq)]
pub struct ReadinessRecord {
    pub name: String,
    pub team: String,
    pub score: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SleepRecord {
    pub name: String,
    pub team: String,
    pub hours: Option<f64>,
    pub quality: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NutritionRecord {
    pub name: String,
    pub team: String,
    pub calories: Option<f64>,
}

/// Common view over the three measurement tables.
pub trait Measurement {
    fn name(&self) -> &str;
    fn team(&self) -> &str;
}

impl Measurement for ReadinessRecord {
    fn name(&self) -> &str {
        &self.name
    }

    fn team(&self) -> &str {
        &self.team
    }
}

impl Measurement for SleepRecord {
    fn name(&self) -> &str {
        &self.name
    }

    fn team(&self) -> &str {
        &self.team
    }
}

impl Measurement for NutritionRecord {
    fn name(&self) -> &str {
        &self.name
    }

    fn team(&self) -> &str {
        &self.team
    }
}

/// The three tables as loaded for a single request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub readiness: Vec<ReadinessRecord>,
    pub sleep: Vec<SleepRecord>,
    pub nutrition: Vec<NutritionRecord>,
}

/// Rows a dashboard view covers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "name", rename_all = "snake_case")]
pub enum Scope {
    All,
    Team(String),
    Athlete(String),
}

impl Scope {
    pub fn label(&self) -> String {
        match self {
            Scope::All => "all teams".to_string(),
            Scope::Team(team) => format!("team {team}"),
            Scope::Athlete(name) => format!("athlete {name}"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct MetricAverages {
    pub readiness: f64,
    pub hours: f64,
    pub quality: f64,
    pub calories: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    pub key: String,
    pub readiness: f64,
    pub hours: f64,
    pub quality: f64,
    pub calories: f64,
}
