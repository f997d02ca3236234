use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::models::{Dataset, NutritionRecord, ReadinessRecord, SleepRecord};
use crate::normalize::coerce_numeric;

pub const READINESS_FILE: &str = "readiness.csv";
pub const SLEEP_FILE: &str = "sleep.csv";
pub const NUTRITION_FILE: &str = "nutrition.csv";

const KEY_COLUMNS: [&str; 2] = ["Name", "Team"];

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to open {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("CSV error in {path}: {source}")]
    Csv { path: String, source: csv::Error },

    #[error("{path} is missing required column {column:?}")]
    MissingColumn { path: String, column: &'static str },
}

/// Locations of the three measurement tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    pub readiness: PathBuf,
    pub sleep: PathBuf,
    pub nutrition: PathBuf,
}

impl DataPaths {
    pub fn from_dir(dir: &Path) -> Self {
        Self {
            readiness: dir.join(READINESS_FILE),
            sleep: dir.join(SLEEP_FILE),
            nutrition: dir.join(NUTRITION_FILE),
        }
    }
}

// Metric cells stay text here; coercion decides what counts as a number.
#[derive(Debug, Deserialize)]
struct RawReadiness {
    #[serde(rename = "Name", default)]
    name: String,
    #[serde(rename = "Team", default)]
    team: String,
    #[serde(rename = "Score", default)]
    score: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawSleep {
    #[serde(rename = "Name", default)]
    name: String,
    #[serde(rename = "Team", default)]
    team: String,
    #[serde(rename = "Hours", default)]
    hours: Option<String>,
    #[serde(rename = "Quality", default)]
    quality: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawNutrition {
    #[serde(rename = "Name", default)]
    name: String,
    #[serde(rename = "Team", default)]
    team: String,
    #[serde(rename = "Calorie Intake", default)]
    calories: Option<String>,
}

fn metric(cell: Option<String>) -> Option<f64> {
    cell.as_deref().and_then(coerce_numeric)
}

fn open_reader<R: Read>(rdr: R, label: &str) -> Result<csv::Reader<R>, LoadError> {
    // Short records keep their leading cells; absent trailing cells read as missing.
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(rdr);
    let headers = reader.headers().map_err(|source| LoadError::Csv {
        path: label.to_string(),
        source,
    })?;

    for column in KEY_COLUMNS {
        if !headers.iter().any(|header| header == column) {
            return Err(LoadError::MissingColumn {
                path: label.to_string(),
                column,
            });
        }
    }

    Ok(reader)
}

fn read_rows<R, T>(rdr: R, label: &str) -> Result<Vec<T>, LoadError>
where
    R: Read,
    T: DeserializeOwned,
{
    let mut reader = open_reader(rdr, label)?;
    let mut rows = Vec::new();

    for result in reader.deserialize::<T>() {
        match result {
            Ok(row) => rows.push(row),
            Err(e) => warn!("skipping malformed row in {}: {}", label, e),
        }
    }

    Ok(rows)
}

pub fn load_readiness_from_reader<R: Read>(
    rdr: R,
    label: &str,
) -> Result<Vec<ReadinessRecord>, LoadError> {
    let rows = read_rows::<R, RawReadiness>(rdr, label)?;
    Ok(rows
        .into_iter()
        .map(|raw| ReadinessRecord {
            name: raw.name,
            team: raw.team,
            score: metric(raw.score),
        })
        .collect())
}

pub fn load_sleep_from_reader<R: Read>(rdr: R, label: &str) -> Result<Vec<SleepRecord>, LoadError> {
    let rows = read_rows::<R, RawSleep>(rdr, label)?;
    Ok(rows
        .into_iter()
        .map(|raw| SleepRecord {
            name: raw.name,
            team: raw.team,
            hours: metric(raw.hours),
            quality: metric(raw.quality),
        })
        .collect())
}

pub fn load_nutrition_from_reader<R: Read>(
    rdr: R,
    label: &str,
) -> Result<Vec<NutritionRecord>, LoadError> {
    let rows = read_rows::<R, RawNutrition>(rdr, label)?;
    Ok(rows
        .into_iter()
        .map(|raw| NutritionRecord {
            name: raw.name,
            team: raw.team,
            calories: metric(raw.calories),
        })
        .collect())
}

fn open(path: &Path) -> Result<File, LoadError> {
    File::open(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })
}

/// Reads all three tables from disk. Nothing is cached between calls.
pub fn load_dataset(paths: &DataPaths) -> Result<Dataset, LoadError> {
    let readiness =
        load_readiness_from_reader(open(&paths.readiness)?, &paths.readiness.display().to_string())?;
    let sleep = load_sleep_from_reader(open(&paths.sleep)?, &paths.sleep.display().to_string())?;
    let nutrition =
        load_nutrition_from_reader(open(&paths.nutrition)?, &paths.nutrition.display().to_string())?;

    debug!(
        readiness = readiness.len(),
        sleep = sleep.len(),
        nutrition = nutrition.len(),
        "loaded measurement tables"
    );

    Ok(Dataset {
        readiness,
        sleep,
        nutrition,
    })
}
