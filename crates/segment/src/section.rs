use serde::{Deserialize, Serialize};

/// The portion of a raw research response attributed to one site.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteSection {
    pub site_id: String,
    pub text: String,
}

impl SiteSection {
    pub fn new(site_id: String, text: String) -> Self {
        Self { site_id, text }
    }

    /// True when no text could be attributed to this site.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}
