pub mod section;
pub mod segmenter;

pub use section::SiteSection;
pub use segmenter::{Segmenter, SegmenterConfig};

/// Split a raw research response into per-site sections using the
/// default configuration.
pub fn segment_document(raw: &str, site_ids: &[String]) -> Vec<SiteSection> {
    Segmenter::default().split(raw, site_ids)
}
