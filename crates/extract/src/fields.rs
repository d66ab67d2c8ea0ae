use crate::recognize::{FieldChain, Matcher};

/// Declarative extraction schema: one strategy chain per output field,
/// with its label synonyms and default in one place.
pub struct FieldTable {
    pub age_range: FieldChain,
    pub gender: FieldChain,
    pub daily_reach: FieldChain,
    pub daily_impressions: FieldChain,
    pub population: FieldChain,
    pub dwell_time: FieldChain,
    pub income_group: FieldChain,
    pub unique_selling_point: FieldChain,
    pub location_tags: FieldChain,
    pub peak_traffic: FieldChain,
    pub traffic_type: FieldChain,
    pub description: FieldChain,
    pub reach_frequency: FieldChain,
}

/// Upper bound on the location-type tag list.
pub const MAX_LOCATION_TAGS: usize = 5;

/// Character cap applied to the free-text description.
pub const MAX_DESCRIPTION_CHARS: usize = 300;

impl FieldTable {
    pub fn new() -> Self {
        Self {
            age_range: FieldChain::new(
                vec![
                    Matcher::pattern(r"(?i)Age Range\s*:\s*(\d+\s*[-–]\s*\d+)"),
                    Matcher::pattern(r"(?i)Age\s*:\s*(\d+\s*[-–]\s*\d+)"),
                    Matcher::pattern(r"(?i)(\d+\s*[-–]\s*\d+)\s*years?"),
                ],
                "Unknown",
            ),
            gender: FieldChain::new(
                vec![
                    Matcher::pattern(
                        r"(?i)Target Audience Demographics\s*:[\s\S]*?\b(male|female|mixed)\b[-\s]*(?:dominant|majority|bias)?",
                    ),
                    Matcher::pattern(r"(?i)\b(male|female|mixed)\b[-\s]*(?:dominant|majority|bias)"),
                    Matcher::pattern(r"(?i)gender\s*:?\s*\b(male|female|mixed)\b"),
                ],
                "Unknown",
            ),
            daily_reach: FieldChain::numeric(&[
                "Estimated Daily Reach",
                "Daily Reach",
                "Reach",
                "daily audience",
            ]),
            daily_impressions: FieldChain::numeric(&[
                "Estimated Daily Impressions",
                "Daily Impressions",
                "Impressions",
                "daily views",
            ]),
            population: FieldChain::numeric(&[
                "Population",
                "population catchment",
                "local population",
                "residents",
            ]),
            dwell_time: FieldChain::new(
                vec![
                    Matcher::labeled("Dwell Time"),
                    Matcher::labeled("Viewing Time"),
                    Matcher::pattern(r"(?i)(\d+\s*[-–]\s*\d+\s*seconds)"),
                    Matcher::labeled("dwell"),
                ],
                "No data",
            ),
            income_group: FieldChain::new(
                vec![
                    Matcher::pattern(r"(?i)Income Group\s*:\s*(Low Income|Mid Income|High Income)"),
                    Matcher::pattern(r"(?i)Income Level\s*:\s*(Low Income|Mid Income|High Income)"),
                    // Last resort: the literal appearing anywhere at all.
                    Matcher::constrained(&["Low Income", "Mid Income", "High Income"]),
                ],
                "No data",
            ),
            unique_selling_point: FieldChain::labeled(
                &["USP", "Unique Selling Point", "Key Advantage", "advantage"],
                "No data available",
            ),
            location_tags: FieldChain::labeled(
                &["Location Types", "Area Type", "Zone Type", "location category"],
                "No data",
            ),
            peak_traffic: FieldChain::labeled(
                &[
                    "Peak Traffic Hours and Patterns",
                    "Peak Hours",
                    "Traffic Hours",
                    "busy hours",
                ],
                "No data",
            ),
            traffic_type: FieldChain::new(
                vec![
                    Matcher::pattern(r"(?i)Traffic Type\s*:\s*(Pedestrian Dominant|Vehicle Dominant)"),
                    Matcher::pattern(r"(?i)Dominant Traffic\s*:\s*(Pedestrian|Vehicle)"),
                    Matcher::constrained(&["Pedestrian Dominant", "Vehicle Dominant"]),
                ],
                "No data",
            ),
            description: FieldChain::new(
                vec![
                    Matcher::multiline("Description"),
                    Matcher::multiline("Area Description"),
                    Matcher::multiline("Location Description"),
                    Matcher::pattern(r"(?i)This (?:area|location)\s*:?\s*([^\n\r]+)"),
                ],
                "No description available",
            ),
            reach_frequency: FieldChain::new(
                vec![
                    Matcher::numeric("Daily Frequency"),
                    Matcher::numeric("Frequency"),
                    Matcher::numeric("frequency of target audience"),
                    // No direct frequency line: read the reference row of
                    // the audience-category table instead.
                    Matcher::table_cell("Adults 0+", 4),
                ],
                "0",
            ),
        }
    }
}

impl Default for FieldTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_section_resolves_every_text_field_to_its_default() {
        let table = FieldTable::new();
        assert_eq!(table.age_range.text(""), "Unknown");
        assert_eq!(table.gender.text(""), "Unknown");
        assert_eq!(table.dwell_time.text(""), "No data");
        assert_eq!(table.income_group.text(""), "No data");
        assert_eq!(table.unique_selling_point.text(""), "No data available");
        assert_eq!(table.location_tags.text(""), "No data");
        assert_eq!(table.peak_traffic.text(""), "No data");
        assert_eq!(table.traffic_type.text(""), "No data");
        assert_eq!(table.description.text(""), "No description available");
        assert_eq!(table.daily_reach.count(""), 0);
        assert_eq!(table.daily_impressions.count(""), 0);
        assert_eq!(table.population.count(""), 0);
        assert_eq!(table.reach_frequency.count(""), 0);
    }

    #[test]
    fn age_range_accepts_bare_digit_ranges() {
        let table = FieldTable::new();
        assert_eq!(table.age_range.text("Age Range: 18-50"), "18-50");
        assert_eq!(table.age_range.text("skews to 25-44 years"), "25-44");
    }

    #[test]
    fn gender_token_requires_word_boundaries() {
        let table = FieldTable::new();
        assert_eq!(table.gender.text("female-dominant crowd"), "female");
        // "male" inside "female" must not match on its own.
        assert_eq!(table.gender.text("gender: female"), "female");
        assert_eq!(table.gender.text("mixed majority footfall"), "mixed");
    }

    #[test]
    fn income_literal_without_label_is_recognized() {
        let table = FieldTable::new();
        let section = "a largely High Income catchment near the golf course";
        assert_eq!(table.income_group.text(section), "High Income");
    }

    #[test]
    fn traffic_type_literal_without_label_is_recognized() {
        let table = FieldTable::new();
        let section = "footfall data marks this zone Pedestrian Dominant overall";
        assert_eq!(table.traffic_type.text(section), "Pedestrian Dominant");
    }

    #[test]
    fn description_spans_following_lines_until_blank() {
        let table = FieldTable::new();
        let section = "Description: A dense commercial hub.\nOffices and retail share the block.\n\nTraffic Type: Vehicle Dominant";
        let value = table.description.text(section);
        assert!(value.contains("dense commercial hub"));
        assert!(value.contains("share the block"));
        assert!(!value.contains("Vehicle Dominant"));
    }

    #[test]
    fn frequency_prefers_direct_line_over_table() {
        let table = FieldTable::new();
        let section = "Daily Frequency: 6\nAdults 0+  183000  95000  41000  4";
        assert_eq!(table.reach_frequency.count(section), 6);
    }

    #[test]
    fn frequency_falls_back_to_audience_table() {
        let table = FieldTable::new();
        let section = "Audience Category  Impr  Target Impr  Target Reach  Freq\n\
                       Adults 0+  183000  95000  41000  4";
        assert_eq!(table.reach_frequency.count(section), 4);
    }
}
