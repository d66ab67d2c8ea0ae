use regex::Regex;

use crate::section::SiteSection;

pub struct SegmenterConfig {
    /// Minimum accepted span length; shorter matches are treated as
    /// accidental (a bare marker with no content behind it).
    pub min_section_len: usize,
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self {
            min_section_len: 100,
        }
    }
}

/// One boundary-detection strategy: where a site's block starts and the
/// marker that ends it.
struct Boundary {
    start: Regex,
    end: Regex,
}

pub struct Segmenter {
    config: SegmenterConfig,
}

impl Segmenter {
    pub fn new(config: SegmenterConfig) -> Self {
        Self { config }
    }

    /// Attribute one section of `raw` to each site id, in input order.
    ///
    /// A section may be empty when no boundary strategy matched. For a
    /// single-site batch the whole response is assumed to describe that
    /// site, so the full text is returned instead.
    pub fn split(&self, raw: &str, site_ids: &[String]) -> Vec<SiteSection> {
        site_ids
            .iter()
            .map(|id| {
                let text = match self.section_for(raw, id) {
                    Some(span) => span.to_string(),
                    None if site_ids.len() == 1 => raw.to_string(),
                    None => {
                        tracing::debug!("no section found for site {}", id);
                        String::new()
                    }
                };
                SiteSection::new(id.clone(), text)
            })
            .collect()
    }

    fn section_for<'a>(&self, raw: &'a str, site_id: &str) -> Option<&'a str> {
        for boundary in strategies(site_id) {
            if let Some(span) = span_between(raw, &boundary) {
                if span.len() > self.config.min_section_len {
                    return Some(span);
                }
            }
        }
        None
    }
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::new(SegmenterConfig::default())
    }
}

/// Boundary strategies for one site id, most specific first:
/// an explicit `Site ID:` marker, a loose marker tolerating a dropped
/// id prefix, then any literal occurrence of the token.
fn strategies(site_id: &str) -> Vec<Boundary> {
    let token = regex::escape(site_id);
    // Split "BB-101" into its non-numeric prefix and its digits so the
    // end markers can match any id of the same shape.
    let prefix: String = site_id.chars().take_while(|c| !c.is_ascii_digit()).collect();
    let digits: String = site_id.chars().filter(|c| c.is_ascii_digit()).collect();
    let shape = format!(r"{}\d+", regex::escape(&prefix));

    let mut out = vec![Boundary {
        start: Regex::new(&format!(r"(?i)Site\s*ID\s*:\s*{token}\b")).unwrap(),
        end: Regex::new(&format!(r"(?i)Site\s*ID\s*:\s*{shape}|🔹")).unwrap(),
    }];

    if !digits.is_empty() {
        out.push(Boundary {
            start: Regex::new(&format!(r"(?i)Site\s*ID\s*:?\s*{digits}\b")).unwrap(),
            end: Regex::new(r"(?i)Site\s*ID\s*:?\s*\d").unwrap(),
        });
    }

    out.push(Boundary {
        start: Regex::new(&format!(r"(?i){token}\b")).unwrap(),
        end: Regex::new(&format!(r"(?i){shape}")).unwrap(),
    });

    out
}

/// Span from the start marker up to (not including) the next end marker,
/// or to the end of the document. The regex crate has no lookahead, so
/// the end marker is located with a second search past the start match.
fn span_between<'a>(raw: &'a str, boundary: &Boundary) -> Option<&'a str> {
    let start = boundary.start.find(raw)?;
    let tail = &raw[start.end()..];
    let stop = boundary
        .end
        .find(tail)
        .map(|m| start.end() + m.start())
        .unwrap_or(raw.len());
    Some(&raw[start.start()..stop])
}
