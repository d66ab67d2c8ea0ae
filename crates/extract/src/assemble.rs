use crate::fields::{FieldTable, MAX_DESCRIPTION_CHARS, MAX_LOCATION_TAGS};
use crate::schema::{Demographics, IncomeGroup, SiteIntelligence, SiteRequest, TrafficType};

/// Builds one structured record from a site's section of the response.
///
/// Assembly is infallible: fields the recognizers cannot find resolve to
/// their declared defaults. Identifier and coordinates are copied from
/// the request, which is authoritative, never from the text.
pub struct Assembler {
    fields: FieldTable,
}

impl Assembler {
    pub fn new() -> Self {
        Self {
            fields: FieldTable::new(),
        }
    }

    pub fn assemble(&self, section: &str, request: &SiteRequest) -> SiteIntelligence {
        let f = &self.fields;

        let daily_impressions = f.daily_impressions.count(section);
        // Saturating: an absurdly large count in the text must not panic
        // the engine.
        let monthly_impressions = if daily_impressions > 0 {
            daily_impressions.saturating_mul(30)
        } else {
            0
        };

        let income_group = f
            .income_group
            .capture(section)
            .and_then(|v| IncomeGroup::parse(&v))
            .unwrap_or(IncomeGroup::Unknown);

        let traffic_type = f
            .traffic_type
            .capture(section)
            .and_then(|v| TrafficType::parse(&v))
            .unwrap_or(TrafficType::Unknown);

        SiteIntelligence {
            site_id: request.site_id.clone(),
            site_name: request.site_name.clone(),
            latitude: request.latitude,
            longitude: request.longitude,
            demographics: Demographics {
                age_range: f.age_range.text(section),
                gender: f.gender.text(section),
            },
            daily_reach: f.daily_reach.count(section),
            daily_impressions,
            dwell_time: f.dwell_time.text(section),
            income_group,
            unique_selling_point: f.unique_selling_point.text(section),
            peak_traffic: f.peak_traffic.text(section),
            location_tags: split_tags(&f.location_tags.text(section)),
            reach_frequency: f.reach_frequency.count(section),
            monthly_impressions,
            population: f.population.count(section),
            description: truncate_chars(&f.description.text(section), MAX_DESCRIPTION_CHARS),
            traffic_type,
        }
    }
}

impl Default for Assembler {
    fn default() -> Self {
        Self::new()
    }
}

/// Split a comma-separated tag line, trimming each piece and keeping at
/// most the first five. Pieces are kept verbatim, empty ones included.
fn split_tags(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|t| t.trim().to_string())
        .take(MAX_LOCATION_TAGS)
        .collect()
}

/// Truncate to at most `max` characters, on a char boundary.
fn truncate_chars(value: &str, max: usize) -> String {
    match value.char_indices().nth(max) {
        Some((idx, _)) => value[..idx].to_string(),
        None => value.to_string(),
    }
}
