use crate::model::{TrialDetail, TrialRecord, NOT_AVAILABLE};
use crate::parser::infer::InferenceStrategy;
use crate::parser::xml::Element;

/// Build a detailed trial from a `<clinical_study>` document.
///
/// `requested_id` is used when the document does not state its own id.
/// Status and phase come from the document's structured elements when
/// present; the inference strategy only fills the gaps.
pub fn extract(
    doc: &Element,
    requested_id: &str,
    inference: &dyn InferenceStrategy,
) -> TrialDetail {
    let title = doc
        .find_text("brief_title")
        .or_else(|| doc.find_text("official_title"))
        .unwrap_or_default();

    let record = TrialRecord {
        id: doc
            .find_text("id_info/nct_id")
            .unwrap_or_else(|| requested_id.to_string()),
        status: doc
            .find_text("overall_status")
            .unwrap_or_else(|| inference.status(&title)),
        phase: doc
            .find_text("phase")
            .unwrap_or_else(|| inference.phase(&title)),
        location: doc
            .find_text("location/facility/address/country")
            .unwrap_or_else(|| inference.location(&title)),
        title,
    };

    TrialDetail {
        record,
        summary: or_not_available(doc, "brief_summary/textblock"),
        study_type: or_not_available(doc, "study_type"),
        sponsor: or_not_available(doc, "sponsors/lead_sponsor/agency"),
        start_date: or_not_available(doc, "start_date"),
        conditions: doc.find_all_text("condition"),
        interventions: doc.find_all_text("intervention/intervention_name"),
        facilities: doc.find_all_text("location/facility/name"),
        eligibility: or_not_available(doc, "eligibility/criteria/textblock"),
    }
}

fn or_not_available(doc: &Element, path: &str) -> String {
    doc.find_text(path)
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}
