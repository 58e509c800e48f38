use serde::Serialize;

/// Identifier used when a feed entry carries no usable link.
pub const MISSING_ID: &str = "N/A";
/// Placeholder for any detail field whose source element is absent.
pub const NOT_AVAILABLE: &str = "not available";
/// The listing feed carries no status, so every listed trial reads as ongoing.
pub const DEFAULT_STATUS: &str = "ongoing";
pub const UNKNOWN: &str = "unknown";

/// One trial as listed in the syndication feed.
///
/// Every field is populated, either with source data or a sentinel, so
/// renderers never branch on missing values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrialRecord {
    pub id: String,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "estado")]
    pub status: String,
    #[serde(rename = "fase")]
    pub phase: String,
    #[serde(rename = "ubicacion")]
    pub location: String,
}

/// A trial read from its detail document: the listing fields plus the
/// structured data only the detail document carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrialDetail {
    #[serde(flatten)]
    pub record: TrialRecord,
    #[serde(rename = "resumen")]
    pub summary: String,
    #[serde(rename = "tipo_estudio")]
    pub study_type: String,
    #[serde(rename = "patrocinador")]
    pub sponsor: String,
    #[serde(rename = "fecha_inicio")]
    pub start_date: String,
    #[serde(rename = "condiciones")]
    pub conditions: Vec<String>,
    #[serde(rename = "intervenciones")]
    pub interventions: Vec<String>,
    #[serde(rename = "centros")]
    pub facilities: Vec<String>,
    #[serde(rename = "criterios_elegibilidad")]
    pub eligibility: String,
}
