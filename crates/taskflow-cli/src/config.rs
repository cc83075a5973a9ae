use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Deserialize, Debug, Default)]
pub struct Config {
    /// Where the task snapshot is persisted between runs.
    #[serde(default)]
    pub data_file: Option<PathBuf>,
    /// Seed a brand-new data file with sample categories and tasks.
    #[serde(default)]
    pub sample_data: bool,
}

impl Config {
    pub fn new() -> Result<Self, figment::Error> {
        Figment::new()
            .merge(Toml::file("taskflow.toml"))
            .merge(Env::prefixed("TASKFLOW_"))
            .extract()
    }
}
