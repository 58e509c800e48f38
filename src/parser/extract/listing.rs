use crate::model::{TrialRecord, MISSING_ID};
use crate::parser::infer::InferenceStrategy;
use crate::parser::xml::Element;

/// Build a record from one feed `<item>`. Never fails: absent elements fall
/// back to their defaults.
pub fn extract(item: &Element, inference: &dyn InferenceStrategy) -> TrialRecord {
    let title = item.find_text("title").unwrap_or_default();
    let link = item.find_text("link").unwrap_or_default();

    TrialRecord {
        id: trial_id_from_link(&link),
        status: inference.status(&title),
        phase: inference.phase(&title),
        location: inference.location(&title),
        title,
    }
}

/// Last non-empty path segment of the link, or `N/A`.
pub fn trial_id_from_link(link: &str) -> String {
    link.split('/')
        .filter(|s| !s.trim().is_empty())
        .last()
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| MISSING_ID.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::infer::TitleHeuristics;
    use crate::parser::xml::parse;

    fn item(xml: &str) -> TrialRecord {
        let doc = parse(xml).unwrap();
        extract(&doc, &TitleHeuristics)
    }

    #[test]
    fn id_from_trailing_segment() {
        assert_eq!(
            trial_id_from_link("https://clinicaltrials.gov/ct2/show/NCT04368728"),
            "NCT04368728"
        );
        assert_eq!(
            trial_id_from_link("https://clinicaltrials.gov/ct2/show/NCT04368728/"),
            "NCT04368728"
        );
    }

    #[test]
    fn empty_link_gives_sentinel() {
        assert_eq!(trial_id_from_link(""), "N/A");
        assert_eq!(trial_id_from_link("///"), "N/A");
    }

    #[test]
    fn full_item() {
        let r = item(
            "<item><title>Study of Drug X Phase 3 in Diabetes</title>\
             <link>https://clinicaltrials.gov/ct2/show/NCT00000001</link></item>",
        );
        assert_eq!(r.id, "NCT00000001");
        assert_eq!(r.title, "Study of Drug X Phase 3 in Diabetes");
        assert_eq!(r.status, "ongoing");
        assert_eq!(r.phase, "3");
        assert_eq!(r.location, "unknown");
    }

    #[test]
    fn missing_link_and_title() {
        let r = item("<item><description>no title, no link</description></item>");
        assert_eq!(r.id, "N/A");
        assert_eq!(r.title, "");
        assert_eq!(r.phase, "unknown");
    }

    #[test]
    fn blank_link_element() {
        let r = item("<item><title>Phase 1</title><link>   </link></item>");
        assert_eq!(r.id, "N/A");
    }
}
