//! The three user-triggered writes.
//!
//! Input strings are forwarded exactly as typed; the service does the
//! validating. Each flow issues one request and never retries.

use crate::api::FinanceApi;
use crate::config::RefreshPolicy;
use crate::error::ApiResult;
use crate::models::{IncomeEntry, NewCategory, SavingEntry, StatusMessage, WriteAck, WriteOutcome};
use crate::sync::{CategorySynchronizer, RefreshOutcome, RenderTarget};

fn status_for(ack: WriteAck, success: StatusMessage, endpoint: &str) -> StatusMessage {
    if ack.ok {
        tracing::info!(endpoint, "write acknowledged");
        success
    } else {
        tracing::warn!(endpoint, reason = ?ack.error, "write rejected by service");
        StatusMessage::Failed
    }
}

/// Submits an income amount and returns the status text to show.
///
/// A transport or decode failure is returned as an error and no status
/// should be shown for it.
pub async fn add_income<A: FinanceApi + ?Sized>(api: &A, amount: &str) -> ApiResult<StatusMessage> {
    tracing::debug!(amount, "submitting income");
    let entry = IncomeEntry {
        amount: amount.into(),
    };
    let ack = api.add_income(&entry).await?;
    Ok(status_for(ack, StatusMessage::IncomeSaved, "add_income"))
}

pub async fn add_saving<A: FinanceApi + ?Sized>(api: &A, amount: &str) -> ApiResult<StatusMessage> {
    tracing::debug!(amount, "submitting saving");
    let entry = SavingEntry {
        amount: amount.into(),
    };
    let ack = api.add_saving(&entry).await?;
    Ok(status_for(ack, StatusMessage::SavingSaved, "add_saving"))
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategorySubmission {
    pub write: WriteOutcome,
    /// `None` when the policy skipped the refresh.
    pub refresh: Option<RefreshOutcome>,
}

/// Creates a category, then redraws the list according to `policy`.
///
/// With [`RefreshPolicy::Always`] the list is re-fetched whatever the service
/// answered, as long as the write itself reached it. A transport failure on
/// the write aborts before any refresh.
pub async fn add_category<A, T>(
    api: &A,
    sync: &CategorySynchronizer,
    target: &T,
    policy: RefreshPolicy,
    name: &str,
    monthly: &str,
) -> ApiResult<CategorySubmission>
where
    A: FinanceApi + ?Sized,
    T: RenderTarget + ?Sized,
{
    tracing::debug!(name, monthly, "submitting category");
    let category = NewCategory {
        name: name.to_string(),
        monthly_goal: monthly.into(),
    };

    let write = api.add_category(&category).await?;
    match &write {
        WriteOutcome::Accepted => tracing::info!(name, "category created"),
        WriteOutcome::Rejected { reason } => {
            tracing::warn!(name, ?reason, "category rejected by service")
        }
        WriteOutcome::Unconfirmed => tracing::debug!(name, "category write not acknowledged"),
    }

    let should_refresh = match policy {
        RefreshPolicy::Always => true,
        RefreshPolicy::OnConfirmedSuccess => write.is_accepted(),
    };
    if !should_refresh {
        return Ok(CategorySubmission {
            write,
            refresh: None,
        });
    }

    let refresh = sync.refresh(api, target).await?;
    Ok(CategorySubmission {
        write,
        refresh: Some(refresh),
    })
}
