pub mod detail;
pub mod listing;

use tracing::debug;

use super::infer::InferenceStrategy;
use super::xml::Element;
use crate::model::TrialRecord;

/// Extract one record per `<item>` in the feed, in feed order.
pub fn extract_feed(doc: &Element, inference: &dyn InferenceStrategy) -> Vec<TrialRecord> {
    let records: Vec<TrialRecord> = doc
        .descendants("item")
        .into_iter()
        .map(|item| listing::extract(item, inference))
        .collect();
    debug!("Extracted {} records from feed", records.len());
    records
}

/// Number of entries in the feed.
pub fn count_entries(doc: &Element) -> usize {
    doc.descendants("item").len()
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::infer::TitleHeuristics;
    use crate::parser::xml::parse;

    fn feed(fixture: &str) -> Element {
        let xml = std::fs::read_to_string(format!("tests/fixtures/{}.xml", fixture)).unwrap();
        parse(&xml).unwrap()
    }

    #[test]
    fn semaglutide_feed() {
        let doc = feed("feed_semaglutide");
        let records = extract_feed(&doc, &TitleHeuristics);
        assert_eq!(records.len(), 4);
        let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["NCT04368728", "NCT03548935", "N/A", "NCT05040971"]);
        assert_eq!(records[0].phase, "3");
        assert_eq!(records[1].phase, "unknown");
        assert!(records.iter().all(|r| r.status == "ongoing"));
        assert!(records.iter().all(|r| r.location == "unknown"));
        assert_eq!(count_entries(&doc), records.len());
    }

    #[test]
    fn empty_feed() {
        let doc = feed("feed_empty");
        assert!(extract_feed(&doc, &TitleHeuristics).is_empty());
        assert_eq!(count_entries(&doc), 0);
    }
}
