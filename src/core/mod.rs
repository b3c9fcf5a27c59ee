pub mod extract;
pub mod pipeline;

pub use crate::domain::model::{ScrapeFailure, ScrapeReport, StaffLink, StaffRecord};
pub use crate::domain::ports::{ConfigProvider, PageFetcher, Storage};
pub use crate::utils::error::Result;
