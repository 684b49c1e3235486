//! Finanzas web client: records income, savings and budget categories
//! against the finance service and keeps the category list in sync.

pub mod api;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod sync;
pub mod view;

pub use api::{FinanceApi, HttpFinanceApi};
pub use config::{ClientConfig, RefreshPolicy};
pub use error::{ApiError, ApiResult};
pub use models::{Amount, Category, CategoryCard, StatusMessage, WriteAck, WriteOutcome};
pub use sync::{CategorySynchronizer, RefreshOutcome, RenderTarget};
