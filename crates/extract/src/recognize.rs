use regex::Regex;

/// One recognition attempt for a field. Strategy chains are built from
/// these and tried in order, first hit wins.
pub enum Matcher {
    /// First capture group of the pattern is the value.
    Pattern(Regex),
    /// Nth capture group of a table-row pattern is the value; used to
    /// read a fixed cell out of the audience-category table.
    TableRow { pattern: Regex, group: usize },
}

impl Matcher {
    pub fn pattern(pattern: &str) -> Self {
        Self::Pattern(Regex::new(pattern).unwrap())
    }

    /// `<label>: <value>` on a single line.
    pub fn labeled(label: &str) -> Self {
        Self::pattern(&format!(r"(?i){}\s*:\s*([^\n\r]+)", regex::escape(label)))
    }

    /// A label followed by an integer, tolerating comma/decimal noise.
    pub fn numeric(label: &str) -> Self {
        Self::pattern(&format!(
            r"(?i){}\s*:\s*([\d,]+(?:\.\d+)?)",
            regex::escape(label)
        ))
    }

    /// A label whose value continues over immediately following
    /// non-blank lines.
    pub fn multiline(label: &str) -> Self {
        Self::pattern(&format!(
            r"(?i){}\s*:\s*([^\n\r]+(?:\n[^\n\r]+)*)",
            regex::escape(label)
        ))
    }

    /// One of a closed set of literals, anywhere in the section.
    pub fn constrained(values: &[&str]) -> Self {
        let alternation = values
            .iter()
            .map(|v| regex::escape(v))
            .collect::<Vec<_>>()
            .join("|");
        Self::pattern(&format!(r"(?i)({alternation})"))
    }

    /// The `column`-th numeric cell of the table row starting with
    /// `row_label`. Tolerates markdown pipes between cells.
    pub fn table_cell(row_label: &str, column: usize) -> Self {
        let mut pattern = format!(r"(?im)^[^\w\n]*{}", regex::escape(row_label));
        for _ in 0..column {
            pattern.push_str(r"[^\d\n]+([\d,]+)");
        }
        Self::TableRow {
            pattern: Regex::new(&pattern).unwrap(),
            group: column,
        }
    }

    fn capture(&self, section: &str) -> Option<String> {
        let (pattern, group) = match self {
            Self::Pattern(re) => (re, 1),
            Self::TableRow { pattern, group } => (pattern, *group),
        };
        pattern
            .captures(section)
            .and_then(|caps| caps.get(group))
            .map(|m| m.as_str().trim().to_string())
    }
}

/// Ordered extraction attempts for one output field, with the value the
/// field takes when none of them match.
pub struct FieldChain {
    matchers: Vec<Matcher>,
    default: &'static str,
}

impl FieldChain {
    pub fn new(matchers: Vec<Matcher>, default: &'static str) -> Self {
        Self { matchers, default }
    }

    pub fn labeled(labels: &[&str], default: &'static str) -> Self {
        Self::new(labels.iter().map(|l| Matcher::labeled(l)).collect(), default)
    }

    pub fn numeric(labels: &[&str]) -> Self {
        Self::new(labels.iter().map(|l| Matcher::numeric(l)).collect(), "0")
    }

    pub fn default_value(&self) -> &'static str {
        self.default
    }

    /// First matcher producing a non-empty trimmed capture wins.
    pub fn capture(&self, section: &str) -> Option<String> {
        self.matchers
            .iter()
            .filter_map(|m| m.capture(section))
            .find(|v| !v.is_empty())
    }

    /// Captured text, or the field's default.
    pub fn text(&self, section: &str) -> String {
        self.capture(section)
            .unwrap_or_else(|| self.default.to_string())
    }

    /// Captured value as a count; absent or unparseable text is 0.
    pub fn count(&self, section: &str) -> u64 {
        self.capture(section)
            .map(|v| parse_count(&v))
            .unwrap_or(0)
    }
}

/// Parse a base-10 count, dropping comma grouping and any fractional
/// tail. Failures are treated as "not found", never as errors.
pub fn parse_count(value: &str) -> u64 {
    let cleaned = value.trim().replace(',', "");
    let integral = cleaned.split('.').next().unwrap_or("");
    integral.parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labeled_chain_prefers_earlier_synonyms() {
        let chain = FieldChain::labeled(&["Peak Traffic Hours and Patterns", "Peak Hours"], "No data");
        let section = "Peak Hours: 5PM-8PM\nPeak Traffic Hours and Patterns: 9AM-11AM weekdays";
        assert_eq!(chain.text(section), "9AM-11AM weekdays");
    }

    #[test]
    fn labeled_chain_falls_back_to_default() {
        let chain = FieldChain::labeled(&["Dwell Time"], "No data");
        assert_eq!(chain.text("nothing relevant here"), "No data");
    }

    #[test]
    fn numeric_chain_strips_commas_and_decimals() {
        let chain = FieldChain::numeric(&["Estimated Daily Reach", "Reach"]);
        assert_eq!(chain.count("Estimated Daily Reach: 1,250,000"), 1_250_000);
        assert_eq!(chain.count("Reach: 45000.7"), 45000);
        assert_eq!(chain.count("Reach: lots"), 0);
    }

    #[test]
    fn constrained_matches_without_a_label() {
        let chain = FieldChain::new(
            vec![Matcher::constrained(&["Pedestrian Dominant", "Vehicle Dominant"])],
            "No data",
        );
        let section = "the corridor is clearly Vehicle Dominant at rush hour";
        assert_eq!(chain.text(section), "Vehicle Dominant");
    }

    #[test]
    fn table_cell_reads_the_requested_column() {
        let chain = FieldChain::new(vec![Matcher::table_cell("Adults 0+", 4)], "0");
        let section = "Audience Category  Impressions  Target Impr  Target Reach  Frequency\n\
                       Adults 0+  183000  95000  41000  4\n\
                       Adults 21+  150000  80000  35000  3";
        assert_eq!(chain.count(section), 4);
    }

    #[test]
    fn table_cell_tolerates_markdown_pipes() {
        let chain = FieldChain::new(vec![Matcher::table_cell("Adults 0+", 4)], "0");
        let section = "| Adults 0+ | 183,000 | 95,000 | 41,000 | 4 |";
        assert_eq!(chain.count(section), 4);
    }

    #[test]
    fn parse_count_never_panics() {
        assert_eq!(parse_count(""), 0);
        assert_eq!(parse_count("12,500"), 12_500);
        assert_eq!(parse_count("3.14159"), 3);
        assert_eq!(parse_count("-5"), 0);
    }
}
