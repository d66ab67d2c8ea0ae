use serde::{Deserialize, Serialize};
use std::fmt;

/// One requested billboard site. Supplied by the caller and copied
/// verbatim into the output record; never extracted from text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteRequest {
    pub site_id: String,
    pub site_name: String,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Demographics {
    #[serde(rename = "age")]
    pub age_range: String,
    pub gender: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IncomeGroup {
    #[serde(rename = "Low Income")]
    Low,
    #[serde(rename = "Mid Income")]
    Mid,
    #[serde(rename = "High Income")]
    High,
    #[serde(rename = "No data")]
    Unknown,
}

impl IncomeGroup {
    /// Parse one of the three canonical literals; anything else is None.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "low income" => Some(Self::Low),
            "mid income" => Some(Self::Mid),
            "high income" => Some(Self::High),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low Income",
            Self::Mid => "Mid Income",
            Self::High => "High Income",
            Self::Unknown => "No data",
        }
    }
}

impl fmt::Display for IncomeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrafficType {
    #[serde(rename = "Pedestrian Dominant")]
    PedestrianDominant,
    #[serde(rename = "Vehicle Dominant")]
    VehicleDominant,
    #[serde(rename = "No data")]
    Unknown,
}

impl TrafficType {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "pedestrian dominant" | "pedestrian" => Some(Self::PedestrianDominant),
            "vehicle dominant" | "vehicle" => Some(Self::VehicleDominant),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PedestrianDominant => "Pedestrian Dominant",
            Self::VehicleDominant => "Vehicle Dominant",
            Self::Unknown => "No data",
        }
    }
}

impl fmt::Display for TrafficType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The structured intelligence record produced for one site.
///
/// Every field is always populated; missing data is represented by the
/// per-field default sentinel, never by omission. Counts are unsigned so
/// negative or fractional values cannot be represented at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteIntelligence {
    pub site_id: String,
    #[serde(rename = "location_name")]
    pub site_name: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(rename = "target_audience_demographics")]
    pub demographics: Demographics,
    #[serde(rename = "estimated_daily_reach")]
    pub daily_reach: u64,
    #[serde(rename = "estimated_daily_impressions")]
    pub daily_impressions: u64,
    pub dwell_time: String,
    pub income_group: IncomeGroup,
    pub unique_selling_point: String,
    #[serde(rename = "peak_traffic_hours")]
    pub peak_traffic: String,
    #[serde(rename = "location_types")]
    pub location_tags: Vec<String>,
    #[serde(rename = "estimated_reach_frequency")]
    pub reach_frequency: u64,
    pub monthly_impressions: u64,
    pub population: u64,
    pub description: String,
    pub traffic_type: TrafficType,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn income_group_parses_canonical_literals_only() {
        assert_eq!(IncomeGroup::parse("High Income"), Some(IncomeGroup::High));
        assert_eq!(IncomeGroup::parse("  low income "), Some(IncomeGroup::Low));
        assert_eq!(IncomeGroup::parse("Middle Class"), None);
    }

    #[test]
    fn enums_serialize_to_wire_literals() {
        let json = serde_json::to_string(&IncomeGroup::Unknown).unwrap();
        assert_eq!(json, "\"No data\"");
        let json = serde_json::to_string(&TrafficType::PedestrianDominant).unwrap();
        assert_eq!(json, "\"Pedestrian Dominant\"");
    }
}
