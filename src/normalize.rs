use crate::models::{Dataset, NutritionRecord, ReadinessRecord, Scope, SleepRecord};

/// Parses a metric cell, treating anything that is not a finite number as missing.
pub fn coerce_numeric(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|value| value.is_finite())
}

pub fn normalize_team(team: &str) -> String {
    team.trim().to_lowercase()
}

pub fn normalize_name(name: &str) -> String {
    name.trim().to_string()
}

fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

pub fn normalize_dataset(dataset: Dataset) -> Dataset {
    Dataset {
        readiness: dataset
            .readiness
            .into_iter()
            .map(|row| ReadinessRecord {
                name: normalize_name(&row.name),
                team: normalize_team(&row.team),
                score: finite(row.score),
            })
            .collect(),
        sleep: dataset
            .sleep
            .into_iter()
            .map(|row| SleepRecord {
                name: normalize_name(&row.name),
                team: normalize_team(&row.team),
                hours: finite(row.hours),
                quality: finite(row.quality),
            })
            .collect(),
        nutrition: dataset
            .nutrition
            .into_iter()
            .map(|row| NutritionRecord {
                name: normalize_name(&row.name),
                team: normalize_team(&row.team),
                calories: finite(row.calories),
            })
            .collect(),
    }
}

/// Normalizes the scope key the same way row keys are normalized.
pub fn normalize_scope(scope: Scope) -> Scope {
    match scope {
        Scope::All => Scope::All,
        Scope::Team(team) => Scope::Team(normalize_team(&team)),
        Scope::Athlete(name) => Scope::Athlete(normalize_name(&name)),
    }
}

/// Keeps the rows of a normalized dataset that fall inside `scope`.
pub fn filter_scope(dataset: &Dataset, scope: &Scope) -> Dataset {
    match normalize_scope(scope.clone()) {
        Scope::All => dataset.clone(),
        Scope::Team(team) => Dataset {
            readiness: dataset.readiness.iter().filter(|r| r.team == team).cloned().collect(),
            sleep: dataset.sleep.iter().filter(|r| r.team == team).cloned().collect(),
            nutrition: dataset.nutrition.iter().filter(|r| r.team == team).cloned().collect(),
        },
        Scope::Athlete(name) => Dataset {
            readiness: dataset.readiness.iter().filter(|r| r.name == name).cloned().collect(),
            sleep: dataset.sleep.iter().filter(|r| r.name == name).cloned().collect(),
            nutrition: dataset.nutrition.iter().filter(|r| r.name == name).cloned().collect(),
        },
    }
}
