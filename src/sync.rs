//! Full-list category refresh.
//!
//! Every refresh fetches the whole collection and replaces the rendered list
//! wholesale. Refreshes are numbered when issued; a response is dropped if a
//! later-issued refresh has already been rendered.

use std::cell::{Cell, RefCell};

use yew::UseStateHandle;

use crate::api::FinanceApi;
use crate::error::ApiResult;
use crate::models::{Category, CategoryCard};

/// Owner-supplied place the category list is drawn into.
pub trait RenderTarget {
    fn replace_all(&self, cards: Vec<CategoryCard>);
}

impl RenderTarget for UseStateHandle<Vec<CategoryCard>> {
    fn replace_all(&self, cards: Vec<CategoryCard>) {
        self.set(cards);
    }
}

impl RenderTarget for RefCell<Vec<CategoryCard>> {
    fn replace_all(&self, cards: Vec<CategoryCard>) {
        *self.borrow_mut() = cards;
    }
}

/// One card per category, in service order.
pub fn render_categories(categories: &[Category]) -> Vec<CategoryCard> {
    categories
        .iter()
        .map(|c| CategoryCard {
            name: c.name.clone(),
            monthly_goal: c.monthly_goal.to_string(),
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RefreshTicket(u64);

impl RefreshTicket {
    pub fn sequence(&self) -> u64 {
        self.0
    }
}

/// Monotonic numbering of refreshes. Single-threaded.
#[derive(Debug, Default)]
pub struct RefreshSequence {
    issued: Cell<u64>,
    rendered: Cell<u64>,
}

impl RefreshSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self) -> RefreshTicket {
        let next = self.issued.get() + 1;
        self.issued.set(next);
        RefreshTicket(next)
    }

    /// Returns true and records the ticket as rendered if nothing newer has
    /// been rendered yet.
    pub fn admit(&self, ticket: RefreshTicket) -> bool {
        if ticket.0 <= self.rendered.get() {
            return false;
        }
        self.rendered.set(ticket.0);
        true
    }

    pub fn latest_rendered(&self) -> u64 {
        self.rendered.get()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    Rendered { count: usize, sequence: u64 },
    /// A later refresh already drew the list; this response was dropped.
    Superseded { sequence: u64, latest: u64 },
}

#[derive(Debug, Default)]
pub struct CategorySynchronizer {
    sequence: RefreshSequence,
}

impl CategorySynchronizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetches the category list and redraws `target` with it.
    ///
    /// On error the previous render is left in place.
    pub async fn refresh<A, T>(&self, api: &A, target: &T) -> ApiResult<RefreshOutcome>
    where
        A: FinanceApi + ?Sized,
        T: RenderTarget + ?Sized,
    {
        let ticket = self.sequence.issue();
        tracing::debug!(sequence = ticket.sequence(), "category refresh issued");

        let categories = match api.list_categories().await {
            Ok(categories) => categories,
            Err(err) => {
                tracing::error!(sequence = ticket.sequence(), error = %err, "category refresh failed");
                return Err(err);
            }
        };

        if !self.sequence.admit(ticket) {
            let latest = self.sequence.latest_rendered();
            tracing::debug!(
                sequence = ticket.sequence(),
                latest,
                "discarding stale category list"
            );
            return Ok(RefreshOutcome::Superseded {
                sequence: ticket.sequence(),
                latest,
            });
        }

        let cards = render_categories(&categories);
        let count = cards.len();
        target.replace_all(cards);
        tracing::info!(sequence = ticket.sequence(), count, "category list rendered");

        Ok(RefreshOutcome::Rendered {
            count,
            sequence: ticket.sequence(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Amount;
    use pretty_assertions::assert_eq;

    fn category(name: &str, goal: &str) -> Category {
        Category {
            name: name.to_string(),
            monthly_goal: Amount::Text(goal.to_string()),
        }
    }

    #[test]
    fn test_render_preserves_service_order() {
        let cards = render_categories(&[category("Rent", "500"), category("Food", "200")]);
        assert_eq!(
            cards,
            vec![
                CategoryCard {
                    name: "Rent".into(),
                    monthly_goal: "500".into()
                },
                CategoryCard {
                    name: "Food".into(),
                    monthly_goal: "200".into()
                },
            ]
        );
    }

    #[test]
    fn test_render_empty_collection() {
        assert!(render_categories(&[]).is_empty());
    }

    #[test]
    fn test_sequence_admits_in_issue_order() {
        let seq = RefreshSequence::new();
        let first = seq.issue();
        let second = seq.issue();

        assert!(seq.admit(first));
        assert!(seq.admit(second));
        assert_eq!(seq.latest_rendered(), 2);
    }

    #[test]
    fn test_sequence_drops_older_ticket_after_newer_rendered() {
        let seq = RefreshSequence::new();
        let first = seq.issue();
        let second = seq.issue();

        assert!(seq.admit(second));
        assert!(!seq.admit(first));
        assert_eq!(seq.latest_rendered(), second.sequence());
        assert_eq!(seq.issue().sequence(), 3);
    }

    #[test]
    fn test_refcell_target_is_replaced_not_appended() {
        let target = RefCell::new(render_categories(&[category("Old", "1")]));
        target.replace_all(render_categories(&[category("New", "2")]));
        assert_eq!(target.borrow().len(), 1);
        assert_eq!(target.borrow()[0].name, "New");
    }
}
