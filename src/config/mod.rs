pub mod cli;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    self, validate_export_formats, validate_positive_number, validate_range, validate_url,
    Validate,
};
use clap::Parser;
use serde::{Deserialize, Serialize};

/// Filename of the raw overview dump, relative to the output path.
pub const OVERVIEW_DUMP_FILE: &str = "overview_dump.html";

pub const EXPORT_FORMATS: &[&str] = &["json", "csv"];

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "staffdir")]
#[command(about = "Scrapes room, office hour and email from a staff directory")]
pub struct CliConfig {
    #[arg(long, default_value = "https://www.htl-salzburg.ac.at/lehrerinnen.html")]
    pub overview_url: String,

    #[arg(long, default_value = "https://www.htl-salzburg.ac.at")]
    pub base_url: String,

    #[arg(long, default_value = "/lehrerinnen-details")]
    pub detail_prefix: String,

    #[arg(long, default_value = "5")]
    pub max_items: usize,

    #[arg(long, help = "Process every discovered link, ignoring --max-items")]
    pub all: bool,

    #[arg(long, default_value = "4")]
    pub concurrent_requests: usize,

    #[arg(long, default_value = "15")]
    pub timeout_secs: u64,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    #[arg(long, help = "Write the raw overview page to the output path")]
    pub dump_overview: bool,

    #[arg(long, value_delimiter = ',', help = "Export formats: json, csv")]
    pub export: Vec<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn overview_url(&self) -> &str {
        &self.overview_url
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn detail_prefix(&self) -> &str {
        &self.detail_prefix
    }

    fn max_items(&self) -> Option<usize> {
        if self.all {
            None
        } else {
            Some(self.max_items)
        }
    }

    fn concurrent_requests(&self) -> usize {
        self.concurrent_requests
    }

    fn dump_overview_path(&self) -> Option<&str> {
        self.dump_overview.then_some(OVERVIEW_DUMP_FILE)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("overview_url", &self.overview_url)?;
        validate_url("base_url", &self.base_url)?;
        validation::validate_path_prefix("detail_prefix", &self.detail_prefix)?;
        validate_positive_number("concurrent_requests", self.concurrent_requests, 1)?;
        validate_range("timeout_secs", self.timeout_secs, 1, 300)?;
        validate_export_formats("export", &self.export, EXPORT_FORMATS)?;
        Ok(())
    }
}
