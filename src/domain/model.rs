use serde::{Deserialize, Serialize};

/// One entry discovered on the overview page: display name plus the
/// site-relative path of the detail page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaffLink {
    pub name: String,
    pub relative_path: String,
}

/// Assembled result for one staff member. A field that did not match on the
/// detail page stays `None`; an empty string would lose the distinction
/// between "absent" and "present but empty".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffRecord {
    pub name: String,
    pub source_url: String,
    pub room: Option<String>,
    pub office_hour: Option<String>,
    pub email: Option<String>,
}

/// A detail-page fetch that failed, attributable to its source link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrapeFailure {
    pub name: String,
    pub url: String,
    pub reason: String,
}

/// Outcome of one pipeline run. Records and failures each keep the
/// truncated link order.
#[derive(Debug, Clone, Default)]
pub struct ScrapeReport {
    pub records: Vec<StaffRecord>,
    pub failures: Vec<ScrapeFailure>,
    pub cancelled: bool,
}

impl ScrapeReport {
    pub fn cancelled_empty() -> Self {
        Self {
            cancelled: true,
            ..Self::default()
        }
    }
}
