use crate::model::{DEFAULT_STATUS, UNKNOWN};

/// Derives attributes the listing feed does not carry.
///
/// Feed entries only have a title and a link, so anything beyond that is a
/// guess. Implementations decide how much to guess.
pub trait InferenceStrategy {
    fn status(&self, title: &str) -> String;
    fn phase(&self, title: &str) -> String;
    fn location(&self, title: &str) -> String;
}

/// Title marker (matched case-insensitively) and the phase it implies.
/// First match wins.
pub const PHASE_RULES: &[(&str, &str)] = &[("phase 3", "3")];

/// Coarse title-based heuristics: phase from [`PHASE_RULES`], a fixed status
/// and an unknown location.
#[derive(Debug, Clone, Copy, Default)]
pub struct TitleHeuristics;

impl InferenceStrategy for TitleHeuristics {
    fn status(&self, _title: &str) -> String {
        DEFAULT_STATUS.to_string()
    }

    fn phase(&self, title: &str) -> String {
        let lower = title.to_lowercase();
        PHASE_RULES
            .iter()
            .find(|(marker, _)| lower.contains(marker))
            .map(|(_, phase)| phase.to_string())
            .unwrap_or_else(|| UNKNOWN.to_string())
    }

    fn location(&self, _title: &str) -> String {
        UNKNOWN.to_string()
    }
}
