use std::collections::BTreeMap;

use crate::Vintage;

/// Section names in document order. `geography` is always first.
pub const SECTION_NAMES: [&str; 10] = [
    "geography",
    "demographics",
    "economics",
    "education",
    "employment",
    "families",
    "health",
    "housing",
    "sociocultural",
    "veterans",
];

/// Topic name to its metrics, e.g. `population` -> `total`.
pub type Topic = BTreeMap<String, Metric>;

/// Topic name to topic body within one section.
pub type Section = BTreeMap<String, Topic>;

/// Summary for one geography in one vintage.
///
/// Field order is the serialized section order. Only `geography` and
/// `demographics` are populated today; the other sections stay empty.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct SummaryDocument {
    pub geography: GeographySection,
    pub demographics: Section,
    pub economics: Section,
    pub education: Section,
    pub employment: Section,
    pub families: Section,
    pub health: Section,
    pub housing: Section,
    pub sociocultural: Section,
    pub veterans: Section,
}

impl SummaryDocument {
    pub(crate) fn new(geography: GeographySection) -> Self {
        Self {
            geography,
            demographics: Section::new(),
            economics: Section::new(),
            education: Section::new(),
            employment: Section::new(),
            families: Section::new(),
            health: Section::new(),
            housing: Section::new(),
            sociocultural: Section::new(),
            veterans: Section::new(),
        }
    }

    /// Looks up a statistical section by name. `geography` is not one.
    pub fn section(&self, name: &str) -> Option<&Section> {
        match name {
            "demographics" => Some(&self.demographics),
            "economics" => Some(&self.economics),
            "education" => Some(&self.education),
            "employment" => Some(&self.employment),
            "families" => Some(&self.families),
            "health" => Some(&self.health),
            "housing" => Some(&self.housing),
            "sociocultural" => Some(&self.sociocultural),
            "veterans" => Some(&self.veterans),
            _ => None,
        }
    }

    pub fn metric(&self, section: &str, topic: &str, metric: &str) -> Option<&Metric> {
        self.section(section)?.get(topic)?.get(metric)
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct GeographySection {
    pub release: Vintage,
    pub name: Option<String>,
    pub pretty_name: Option<String>,
    pub stusab: String,
    pub sumlevel: Option<String>,
    pub land_area: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum MetricNumber {
    Integer(i64),
    Decimal(f64),
}

/// Value for this geography plus comparison slots.
///
/// The comparison slots are not populated yet and always serialize as null.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct MetricValues {
    pub this: Option<MetricNumber>,
    pub county: Option<MetricNumber>,
    pub state: Option<MetricNumber>,
    pub nation: Option<MetricNumber>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Metric {
    pub table_id: String,
    pub universe: Option<String>,
    #[serde(rename = "name")]
    pub display_name: Option<String>,
    pub values: MetricValues,
}

impl Metric {
    pub(crate) fn new(table_id: &str, this: Option<MetricNumber>) -> Self {
        Self {
            table_id: table_id.to_string(),
            universe: None,
            display_name: None,
            values: MetricValues {
                this,
                county: None,
                state: None,
                nation: None,
            },
        }
    }
}
