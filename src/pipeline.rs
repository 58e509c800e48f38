use serde::Serialize;
use tracing::info;

use crate::error::{Result, TrialError};
use crate::feed::{DocumentSource, Endpoints};
use crate::filter::{self, FilterCriteria};
use crate::model::{TrialDetail, TrialRecord};
use crate::parser::{self, infer::InferenceStrategy, infer::TitleHeuristics};
use crate::render::{Format, RenderContext, Rendered};

/// A listing query. At least one of molecule and pathology is non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    molecule: String,
    pathology: String,
}

impl SearchQuery {
    pub fn new(molecule: Option<&str>, pathology: Option<&str>) -> Result<Self> {
        let molecule = molecule.unwrap_or_default().trim().to_string();
        let pathology = pathology.unwrap_or_default().trim().to_string();
        if molecule.is_empty() && pathology.is_empty() {
            return Err(TrialError::Validation(
                "at least one of 'molecula' or 'patologia' is required".into(),
            ));
        }
        Ok(SearchQuery {
            molecule,
            pathology,
        })
    }
}

/// Entry counts for two molecules under the same pathology.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comparison {
    #[serde(rename = "molecula_a")]
    pub molecule_a: String,
    #[serde(rename = "ensayos_a")]
    pub count_a: usize,
    #[serde(rename = "molecula_b")]
    pub molecule_b: String,
    #[serde(rename = "ensayos_b")]
    pub count_b: usize,
    #[serde(rename = "patologia")]
    pub pathology: String,
}

/// Fetch → extract → filter → render, one remote document per step.
pub struct TrialPipeline<S> {
    source: S,
    endpoints: Endpoints,
    inference: Box<dyn InferenceStrategy + Send + Sync>,
}

impl<S: DocumentSource> TrialPipeline<S> {
    pub fn new(source: S, endpoints: Endpoints) -> Self {
        TrialPipeline {
            source,
            endpoints,
            inference: Box::new(TitleHeuristics),
        }
    }

    pub fn with_inference(mut self, strategy: impl InferenceStrategy + Send + Sync + 'static) -> Self {
        self.inference = Box::new(strategy);
        self
    }

    /// Fetch the listing feed and extract every entry.
    pub async fn listing(&self, query: &SearchQuery) -> Result<Vec<TrialRecord>> {
        let url = self.endpoints.listing_url(&query.molecule, &query.pathology);
        let xml = self.source.fetch(&url).await?;
        parser::process_feed(&xml, self.inference.as_ref())
    }

    pub async fn search(
        &self,
        query: &SearchQuery,
        criteria: &FilterCriteria,
        format: Format,
    ) -> Result<Rendered> {
        info!(
            "Searching molecule={:?} pathology={:?} format={}",
            query.molecule, query.pathology, format
        );
        let records = self.listing(query).await?;
        let total = records.len();
        let records = filter::apply(records, criteria);
        info!("{} of {} feed entries pass the filters", records.len(), total);

        let ctx = RenderContext {
            molecule: query.molecule.clone(),
            pathology: query.pathology.clone(),
            criteria: criteria.clone(),
        };
        format.render(&records, &ctx)
    }

    pub async fn detail(&self, id: &str) -> Result<TrialDetail> {
        let id = id.trim();
        if id.is_empty() {
            return Err(TrialError::Validation("trial id is required".into()));
        }
        info!("Fetching detail for {}", id);
        let xml = self.source.fetch(&self.endpoints.detail_url(id)).await?;
        parser::process_detail(&xml, id, self.inference.as_ref())
    }

    /// Count feed entries for two molecules. The fetches run one after the other.
    pub async fn compare(
        &self,
        molecule_a: &str,
        molecule_b: &str,
        pathology: &str,
    ) -> Result<Comparison> {
        let molecule_a = molecule_a.trim();
        let molecule_b = molecule_b.trim();
        if molecule_a.is_empty() || molecule_b.is_empty() {
            return Err(TrialError::Validation(
                "both molecules are required for a comparison".into(),
            ));
        }
        let pathology = pathology.trim();

        let count_a = self.count(molecule_a, pathology).await?;
        let count_b = self.count(molecule_b, pathology).await?;
        info!(
            "Compared {} ({}) vs {} ({})",
            molecule_a, count_a, molecule_b, count_b
        );

        Ok(Comparison {
            molecule_a: molecule_a.to_string(),
            count_a,
            molecule_b: molecule_b.to_string(),
            count_b,
            pathology: pathology.to_string(),
        })
    }

    async fn count(&self, molecule: &str, pathology: &str) -> Result<usize> {
        let url = self.endpoints.listing_url(molecule, pathology);
        let xml = self.source.fetch(&url).await?;
        parser::count_feed_entries(&xml)
    }
}

// ── Tests ──
