use crate::core::extract::{extract_email, extract_office_hour, extract_room, LinkExtractor};
use crate::core::{ConfigProvider, PageFetcher, ScrapeFailure, ScrapeReport, StaffLink, StaffRecord, Storage};
use crate::utils::error::{Result, ScrapeError};
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

enum ItemOutcome {
    Record(StaffRecord),
    Failed(ScrapeFailure),
    Skipped,
}

/// Two-stage scrape: overview page -> detail links -> detail pages.
///
/// The fetcher is injected so tests can run the whole pipeline against an
/// in-memory double. Detail fetches fan out under a semaphore and join back
/// into link order; one link failing never aborts the batch.
pub struct ScrapePipeline<F, C, S> {
    fetcher: Arc<F>,
    config: C,
    storage: S,
    links: LinkExtractor,
}

impl<F, C, S> ScrapePipeline<F, C, S>
where
    F: PageFetcher + 'static,
    C: ConfigProvider,
    S: Storage,
{
    pub fn new(fetcher: Arc<F>, config: C, storage: S) -> Result<Self> {
        let links = LinkExtractor::new(config.detail_prefix())?;
        Ok(Self {
            fetcher,
            config,
            storage,
            links,
        })
    }

    /// Runs one full scrape. An overview-fetch failure is fatal; detail-page
    /// failures are collected into the report. Once `cancel` fires, no new
    /// fetches are issued and completed records are returned as-is.
    pub async fn run(&self, cancel: CancellationToken) -> Result<ScrapeReport> {
        if cancel.is_cancelled() {
            tracing::warn!("Run cancelled before the overview fetch");
            return Ok(ScrapeReport::cancelled_empty());
        }

        tracing::info!("Fetching overview page: {}", self.config.overview_url());
        let overview = self
            .fetcher
            .fetch(self.config.overview_url())
            .await
            .map_err(ScrapeError::Overview)?;
        tracing::debug!("Overview page loaded ({} bytes)", overview.len());

        if let Some(path) = self.config.dump_overview_path() {
            // Dumps are a debugging aid; a failed write must not sink the run.
            match self.storage.write_file(path, overview.as_bytes()).await {
                Ok(()) => tracing::info!("Overview dump written to: {}", path),
                Err(e) => tracing::warn!("Failed to write overview dump: {}", e),
            }
        }

        let mut links: Vec<StaffLink> = self.links.extract(&overview).collect();
        tracing::info!("Discovered {} detail links", links.len());

        if let Some(limit) = self.config.max_items() {
            links.truncate(limit);
        }

        if links.is_empty() {
            return Ok(ScrapeReport {
                cancelled: cancel.is_cancelled(),
                ..ScrapeReport::default()
            });
        }

        let total = links.len();
        let semaphore = Arc::new(Semaphore::new(self.config.concurrent_requests().max(1)));
        let mut tasks = JoinSet::new();

        for (index, link) in links.into_iter().enumerate() {
            let fetcher = Arc::clone(&self.fetcher);
            let semaphore = Arc::clone(&semaphore);
            let cancel = cancel.clone();
            let url = format!("{}{}", self.config.base_url(), link.relative_path);

            tasks.spawn(async move {
                let Ok(_permit) = semaphore.acquire().await else {
                    return (index, ItemOutcome::Skipped);
                };
                if cancel.is_cancelled() {
                    return (index, ItemOutcome::Skipped);
                }

                let body = tokio::select! {
                    _ = cancel.cancelled() => return (index, ItemOutcome::Skipped),
                    body = fetcher.fetch(&url) => body,
                };

                match body {
                    Ok(html) => {
                        let record = StaffRecord {
                            name: link.name,
                            source_url: url,
                            room: extract_room(&html),
                            office_hour: extract_office_hour(&html),
                            email: extract_email(&html),
                        };
                        (index, ItemOutcome::Record(record))
                    }
                    Err(e) => {
                        tracing::warn!("Detail fetch failed for {}: {}", link.name, e);
                        (
                            index,
                            ItemOutcome::Failed(ScrapeFailure {
                                name: link.name,
                                url,
                                reason: e.to_string(),
                            }),
                        )
                    }
                }
            });
        }

        // One slot per link index, written exactly once, so output order is
        // the truncated link order regardless of completion order.
        let mut slots: Vec<Option<ItemOutcome>> = (0..total).map(|_| None).collect();
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((index, outcome)) => slots[index] = Some(outcome),
                Err(e) => tracing::error!("Detail task panicked: {}", e),
            }
        }

        let mut report = ScrapeReport::default();
        for slot in slots {
            match slot {
                Some(ItemOutcome::Record(record)) => report.records.push(record),
                Some(ItemOutcome::Failed(failure)) => report.failures.push(failure),
                Some(ItemOutcome::Skipped) | None => report.cancelled = true,
            }
        }
        report.cancelled |= cancel.is_cancelled();

        tracing::info!(
            "Scrape finished: {} records, {} failures{}",
            report.records.len(),
            report.failures.len(),
            if report.cancelled { " (cancelled)" } else { "" }
        );
        Ok(report)
    }
}
