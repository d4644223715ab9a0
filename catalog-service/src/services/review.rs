use crate::models::error::CatalogError;
use crate::models::responses::{Review, ReviewPage};
use crate::utils::config::ReviewConfig;
use serde::Deserialize;
use tracing::{info, warn};

#[derive(Debug, Deserialize)]
struct Fault {
    #[serde(default)]
    faultstring: String,
}

/// Body returned by the review API, either a result set or a fault.
#[derive(Debug, Deserialize)]
struct ReviewApiResponse {
    fault: Option<Fault>,
    #[serde(default)]
    num_results: i64,
    results: Option<Vec<Review>>,
}

impl ReviewApiResponse {
    fn into_page(self, title: &str) -> Result<ReviewPage, CatalogError> {
        if let Some(fault) = self.fault {
            return Err(CatalogError::UpstreamFault(fault.faultstring));
        }

        Ok(ReviewPage {
            title: title.to_string(),
            has_results: self.num_results > 0,
            reviews: self.results.unwrap_or_default(),
        })
    }
}

#[derive(Clone)]
pub struct ReviewClient {
    client: reqwest::Client,
    url: String,
    api_key: Option<String>,
}

impl ReviewClient {
    pub fn new(config: &ReviewConfig) -> Result<Self, CatalogError> {
        if config.api_key.is_none() {
            warn!("API_KEY is not set, review lookups will be rejected upstream");
        }

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            client,
            url: config.url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    pub async fn reviews_for(&self, title: &str) -> Result<ReviewPage, CatalogError> {
        info!("Looking up reviews for {:?}", title);

        let mut params = vec![("title", title)];
        if let Some(ref key) = self.api_key {
            params.push(("api-key", key.as_str()));
        }

        let body: ReviewApiResponse = self
            .client
            .get(&self.url)
            .query(&params)
            .send()
            .await?
            .json()
            .await?;

        body.into_page(title)
    }
}
