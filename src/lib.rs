pub mod adapters;
#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{cli::LocalStorage, CliConfig};

pub use adapters::HttpFetcher;
pub use crate::core::{extract::LinkExtractor, pipeline::ScrapePipeline};
pub use domain::model::{ScrapeFailure, ScrapeReport, StaffLink, StaffRecord};
pub use domain::ports::{ConfigProvider, PageFetcher, Storage};
pub use utils::error::{FetchError, Result, ScrapeError};
