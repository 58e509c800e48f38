use serde::Serialize;

use crate::error::{Result, TrialError};
use crate::model::{TrialDetail, TrialRecord};

#[derive(Serialize)]
struct Listing<'a> {
    resultados: &'a [TrialRecord],
}

/// `{"resultados": [...]}` with every extracted field.
pub fn render_listing(records: &[TrialRecord]) -> Result<Vec<u8>> {
    to_json(&Listing {
        resultados: records,
    })
}

pub fn render_detail(detail: &TrialDetail) -> Result<Vec<u8>> {
    to_json(detail)
}

fn to_json<T: Serialize>(value: &T) -> Result<Vec<u8>> {
    serde_json::to_vec_pretty(value).map_err(|e| TrialError::Render {
        format: "json",
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_keeps_order_and_fields() {
        let records = vec![
            TrialRecord {
                id: "NCT2".into(),
                title: "Second".into(),
                status: "ongoing".into(),
                phase: "3".into(),
                location: "unknown".into(),
            },
            TrialRecord {
                id: "NCT1".into(),
                title: "First".into(),
                status: "ongoing".into(),
                phase: "unknown".into(),
                location: "unknown".into(),
            },
        ];
        let body = render_listing(&records).unwrap();
        let v: serde_json::Value = serde_json::from_slice(&body).unwrap();
        let list = v["resultados"].as_array().unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0]["id"], "NCT2");
        assert_eq!(list[1]["titulo"], "First");
        assert_eq!(list[0]["fase"], "3");
    }

    #[test]
    fn empty_listing() {
        let body = render_listing(&[]).unwrap();
        let v: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(v, serde_json::json!({ "resultados": [] }));
    }
}
