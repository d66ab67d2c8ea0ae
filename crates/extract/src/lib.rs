pub mod assemble;
pub mod fields;
pub mod prompt;
pub mod recognize;
pub mod schema;

pub use assemble::Assembler;
pub use fields::FieldTable;
pub use recognize::{FieldChain, Matcher};
pub use schema::{Demographics, IncomeGroup, SiteIntelligence, SiteRequest, TrafficType};

use anyhow::Result;
use segment::Segmenter;

/// Largest batch one research response is expected to cover.
pub const MAX_SITES_PER_BATCH: usize = 20;

/// The full extraction pipeline: segment the raw response once, then
/// assemble one record per requested site, in input order.
pub struct IntelligenceExtractor {
    segmenter: Segmenter,
    assembler: Assembler,
}

impl IntelligenceExtractor {
    pub fn new() -> Self {
        Self {
            segmenter: Segmenter::default(),
            assembler: Assembler::new(),
        }
    }

    /// Extract one record per site from the raw response text.
    ///
    /// Adverse text never fails: a site whose section is missing or
    /// garbled gets a default-populated record and does not affect any
    /// other site. The only errors are precondition violations on the
    /// request list itself.
    pub fn extract(&self, raw: &str, sites: &[SiteRequest]) -> Result<Vec<SiteIntelligence>> {
        if sites.is_empty() {
            anyhow::bail!("at least one site is required");
        }
        if sites.len() > MAX_SITES_PER_BATCH {
            anyhow::bail!(
                "batch of {} sites exceeds the limit of {}",
                sites.len(),
                MAX_SITES_PER_BATCH
            );
        }

        let site_ids: Vec<String> = sites.iter().map(|s| s.site_id.clone()).collect();
        let sections = self.segmenter.split(raw, &site_ids);

        let records: Vec<SiteIntelligence> = sites
            .iter()
            .zip(&sections)
            .map(|(site, section)| {
                tracing::debug!(
                    "site {}: attributed {} chars of response text",
                    site.site_id,
                    section.text.len()
                );
                self.assembler.assemble(&section.text, site)
            })
            .collect();

        tracing::info!(
            "extracted {} records from a {} char response",
            records.len(),
            raw.len()
        );
        Ok(records)
    }
}

impl Default for IntelligenceExtractor {
    fn default() -> Self {
        Self::new()
    }
}
