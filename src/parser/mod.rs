pub mod extract;
pub mod infer;
pub mod xml;

use crate::error::Result;
use crate::model::{TrialDetail, TrialRecord};
use infer::InferenceStrategy;

/// Two-pass pipeline: feed text → element tree → records.
pub fn process_feed(xml: &str, inference: &dyn InferenceStrategy) -> Result<Vec<TrialRecord>> {
    let doc = xml::parse(xml)?;
    Ok(extract::extract_feed(&doc, inference))
}

/// Same two passes for a single detail document.
pub fn process_detail(
    xml: &str,
    requested_id: &str,
    inference: &dyn InferenceStrategy,
) -> Result<TrialDetail> {
    let doc = xml::parse(xml)?;
    Ok(extract::detail::extract(&doc, requested_id, inference))
}

/// Count feed entries without building records.
pub fn count_feed_entries(xml: &str) -> Result<usize> {
    let doc = xml::parse(xml)?;
    Ok(extract::count_entries(&doc))
}
