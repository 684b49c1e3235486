//! In-memory stand-in for the finance service.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;

use async_trait::async_trait;
use futures::channel::oneshot;
use serde_json::{json, Value};

use finanzas_frontend::api::{ADD_INCOME_PATH, ADD_SAVING_PATH, CATEGORIES_PATH};
use finanzas_frontend::models::{IncomeEntry, NewCategory, SavingEntry};
use finanzas_frontend::{ApiError, ApiResult, Category, FinanceApi, WriteAck, WriteOutcome};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    AddIncome(Value),
    AddSaving(Value),
    AddCategory(Value),
    ListCategories,
}

/// Records every request and answers from scripted replies.
///
/// Writes answer `{"ok": true}` unless a reply was queued; queue
/// `Err(ApiError::Decode)` to stand for a body that is not JSON. Category listings
/// answer with the stored categories unless a gate was queued, in which case
/// the listing waits until the test sends the gated reply.
#[derive(Default)]
pub struct FakeFinanceApi {
    calls: RefCell<Vec<Call>>,
    write_replies: RefCell<VecDeque<ApiResult<Value>>>,
    list_gates: RefCell<VecDeque<oneshot::Receiver<ApiResult<Value>>>>,
    categories: RefCell<Vec<Value>>,
}

impl FakeFinanceApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_categories(categories: Value) -> Self {
        let fake = Self::new();
        fake.set_categories(categories);
        fake
    }

    pub fn set_categories(&self, categories: Value) {
        *self.categories.borrow_mut() = categories.as_array().cloned().unwrap_or_default();
    }

    pub fn reply_to_next_write(&self, reply: ApiResult<Value>) {
        self.write_replies.borrow_mut().push_back(reply);
    }

    /// Holds the next category listing until the returned sender fires.
    pub fn gate_next_listing(&self) -> oneshot::Sender<ApiResult<Value>> {
        let (tx, rx) = oneshot::channel();
        self.list_gates.borrow_mut().push_back(rx);
        tx
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn listing_count(&self) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|c| **c == Call::ListCategories)
            .count()
    }

    fn next_write_reply(&self) -> ApiResult<Value> {
        self.write_replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok(json!({ "ok": true })))
    }

    fn ack(&self, endpoint: &str) -> ApiResult<WriteAck> {
        let body = self.next_write_reply()?;
        serde_json::from_value(body).map_err(|e| ApiError::decode(endpoint, e))
    }
}

#[async_trait(?Send)]
impl FinanceApi for FakeFinanceApi {
    async fn add_income(&self, entry: &IncomeEntry) -> ApiResult<WriteAck> {
        self.calls
            .borrow_mut()
            .push(Call::AddIncome(serde_json::to_value(entry).unwrap()));
        self.ack(ADD_INCOME_PATH)
    }

    async fn add_saving(&self, entry: &SavingEntry) -> ApiResult<WriteAck> {
        self.calls
            .borrow_mut()
            .push(Call::AddSaving(serde_json::to_value(entry).unwrap()));
        self.ack(ADD_SAVING_PATH)
    }

    async fn add_category(&self, category: &NewCategory) -> ApiResult<WriteOutcome> {
        let body = serde_json::to_value(category).unwrap();
        self.calls.borrow_mut().push(Call::AddCategory(body.clone()));

        // a non-JSON body is scripted as a decode error and leaves the write unconfirmed
        let ack = match self.next_write_reply() {
            Ok(reply) => serde_json::from_value::<WriteAck>(reply).ok(),
            Err(ApiError::Decode { .. }) => None,
            Err(err) => return Err(err),
        };
        if ack.as_ref().map_or(false, |a| a.ok) {
            self.categories.borrow_mut().push(body);
        }
        Ok(WriteOutcome::from_ack(ack))
    }

    async fn list_categories(&self) -> ApiResult<Vec<Category>> {
        self.calls.borrow_mut().push(Call::ListCategories);

        let gate = self.list_gates.borrow_mut().pop_front();
        let body = match gate {
            Some(rx) => rx
                .await
                .unwrap_or_else(|_| Err(ApiError::transport(CATEGORIES_PATH, "gate dropped")))?,
            None => Value::Array(self.categories.borrow().clone()),
        };
        serde_json::from_value(body).map_err(|e| ApiError::decode(CATEGORIES_PATH, e))
    }
}
