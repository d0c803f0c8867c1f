//! Admin surface: elite curation and the simulated market sync.

use crate::clock::Scheduler;
use crate::config;
use crate::controller::CollectionController;
use crate::models::{Card, CardId};

/// The rows shown in the admin table plus the size of the full collection.
#[derive(Debug, Clone)]
pub struct AdminPreview<'a> {
    pub rows: Vec<&'a Card>,
    pub total: usize,
}

impl AdminPreview<'_> {
    pub fn summary(&self) -> String {
        format!(
            "Displaying top {} of {} records.",
            self.rows.len(),
            self.total
        )
    }
}

/// The first [`config::ADMIN_PREVIEW_LIMIT`] cards. Display-only truncation.
pub fn admin_preview(cards: &[Card]) -> AdminPreview<'_> {
    AdminPreview {
        rows: cards.iter().take(config::ADMIN_PREVIEW_LIMIT).collect(),
        total: cards.len(),
    }
}

// ---------------------------------------------------------------------------
// AdminPanel
// ---------------------------------------------------------------------------

/// Mutating admin operations bound to a controller.
pub struct AdminPanel<'a> {
    controller: &'a mut CollectionController,
    scheduler: &'a dyn Scheduler,
}

impl<'a> AdminPanel<'a> {
    pub fn new(controller: &'a mut CollectionController, scheduler: &'a dyn Scheduler) -> Self {
        Self {
            controller,
            scheduler,
        }
    }

    pub fn preview(&self) -> AdminPreview<'_> {
        admin_preview(self.controller.cards())
    }

    pub fn toggle_elite_status(&mut self, id: &CardId) -> bool {
        self.controller.toggle_elite_status(id)
    }

    pub fn is_refreshing(&self) -> bool {
        self.controller.is_refreshing()
    }

    /// Run the simulated market sync to completion.
    ///
    /// Waits out the configured delay on the scheduler, then jitters every
    /// market price. Returns the number of cards updated, or 0 if a refresh
    /// was already in flight.
    pub fn refresh_market_prices(&mut self) -> usize {
        if !self.controller.begin_refresh() {
            return 0;
        }
        self.scheduler.sleep(self.controller.refresh_delay());
        self.controller.complete_refresh()
    }
}
