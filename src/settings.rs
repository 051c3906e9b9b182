use std::path::PathBuf;

use config::Config;
use serde::Deserialize;

use crate::Result;

/// Environment prefix, e.g. `JOBS_CLASSIFY_INPUT=data/all.csv`.
pub const ENV_PREFIX: &str = "JOBS";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub classify_input: PathBuf,
    pub classify_output: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            classify_input: PathBuf::from("csv_files/merged_jobs.csv"),
            classify_output: PathBuf::from("csv_files/jobs_by_tier.xlsx"),
        }
    }
}

impl Settings {
    pub fn load() -> Result<Self> {
        let settings = Config::builder()
            .add_source(config::Environment::with_prefix(ENV_PREFIX))
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_fixed_paths() {
        let s = Settings::default();
        assert_eq!(s.classify_input, PathBuf::from("csv_files/merged_jobs.csv"));
        assert_eq!(s.classify_output, PathBuf::from("csv_files/jobs_by_tier.xlsx"));
    }

    #[test]
    fn empty_source_falls_back_to_defaults() {
        let s: Settings = Config::builder().build().unwrap().try_deserialize().unwrap();
        assert_eq!(s.classify_output, PathBuf::from("csv_files/jobs_by_tier.xlsx"));
    }
}
