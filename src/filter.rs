use crate::model::TrialRecord;

/// Optional per-request predicates. Unset or blank criteria match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    status: Option<String>,
    phase: Option<String>,
    location: Option<String>,
}

impl FilterCriteria {
    pub fn new(status: Option<&str>, phase: Option<&str>, location: Option<&str>) -> Self {
        FilterCriteria {
            status: normalize(status),
            phase: normalize(phase),
            location: normalize(location),
        }
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn phase(&self) -> Option<&str> {
        self.phase.as_deref()
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.phase.is_none() && self.location.is_none()
    }

    /// Status and location match by substring, phase by equality.
    pub fn matches(&self, record: &TrialRecord) -> bool {
        let contains = |value: &str, wanted: &Option<String>| {
            wanted
                .as_deref()
                .map_or(true, |w| value.to_lowercase().contains(w))
        };
        let phase_ok = self
            .phase
            .as_deref()
            .map_or(true, |p| record.phase.to_lowercase() == p);

        contains(&record.status, &self.status)
            && phase_ok
            && contains(&record.location, &self.location)
    }
}

fn normalize(value: Option<&str>) -> Option<String> {
    value
        .map(|v| v.trim().to_lowercase())
        .filter(|v| !v.is_empty())
}

/// Keep the records that satisfy every criterion, in their original order.
pub fn apply(records: Vec<TrialRecord>, criteria: &FilterCriteria) -> Vec<TrialRecord> {
    if criteria.is_empty() {
        return records;
    }
    records.into_iter().filter(|r| criteria.matches(r)).collect()
}
