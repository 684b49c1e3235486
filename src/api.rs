//! Client for the finance service HTTP contract.
//!
//! Every write is a JSON `POST`; the only read is the full category list.
//! Status codes are not consulted: the decoded body is the answer.

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde::Serialize;
use web_sys::RequestCredentials;

use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult};
use crate::models::{Category, IncomeEntry, NewCategory, SavingEntry, WriteAck, WriteOutcome};

pub const ADD_INCOME_PATH: &str = "/finance/add_income";
pub const ADD_SAVING_PATH: &str = "/finance/add_saving";
pub const ADD_CATEGORY_PATH: &str = "/finance/add_category";
pub const CATEGORIES_PATH: &str = "/user/categories";

/// One method per endpoint of the finance service.
#[async_trait(?Send)]
pub trait FinanceApi {
    async fn add_income(&self, entry: &IncomeEntry) -> ApiResult<WriteAck>;

    async fn add_saving(&self, entry: &SavingEntry) -> ApiResult<WriteAck>;

    /// Only transport failures are errors here; an unreadable body yields
    /// [`WriteOutcome::Unconfirmed`].
    async fn add_category(&self, category: &NewCategory) -> ApiResult<WriteOutcome>;

    async fn list_categories(&self) -> ApiResult<Vec<Category>>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpFinanceApi {
    base_url: String,
}

impl HttpFinanceApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.api_base_url.clone())
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn post_json<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> ApiResult<Response> {
        let url = self.url(path);
        tracing::debug!(%url, "POST");

        let request = Request::post(&url)
            .credentials(RequestCredentials::Include)
            .json(body)
            .map_err(|e| ApiError::transport(path, e))?;

        let resp = request.send().await.map_err(|e| ApiError::transport(path, e))?;
        tracing::debug!(%url, status = resp.status(), "response received");
        Ok(resp)
    }

    async fn post_for_ack<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> ApiResult<WriteAck> {
        let resp = self.post_json(path, body).await?;
        resp.json::<WriteAck>()
            .await
            .map_err(|e| ApiError::decode(path, e))
    }
}

#[async_trait(?Send)]
impl FinanceApi for HttpFinanceApi {
    async fn add_income(&self, entry: &IncomeEntry) -> ApiResult<WriteAck> {
        self.post_for_ack(ADD_INCOME_PATH, entry).await
    }

    async fn add_saving(&self, entry: &SavingEntry) -> ApiResult<WriteAck> {
        self.post_for_ack(ADD_SAVING_PATH, entry).await
    }

    async fn add_category(&self, category: &NewCategory) -> ApiResult<WriteOutcome> {
        let resp = self.post_json(ADD_CATEGORY_PATH, category).await?;
        let ack = resp.json::<WriteAck>().await.ok();
        Ok(WriteOutcome::from_ack(ack))
    }

    async fn list_categories(&self) -> ApiResult<Vec<Category>> {
        let url = self.url(CATEGORIES_PATH);
        tracing::debug!(%url, "GET");

        let resp = Request::get(&url)
            .credentials(RequestCredentials::Include)
            .send()
            .await
            .map_err(|e| ApiError::transport(CATEGORIES_PATH, e))?;

        resp.json::<Vec<Category>>()
            .await
            .map_err(|e| ApiError::decode(CATEGORIES_PATH, e))
    }
}
