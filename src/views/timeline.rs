//! Per-era buckets for the chronological view.

use crate::config;
use crate::controller::CollectionController;
use crate::models::{Card, Era, EraDescriptor};

/// Cards of exactly `era`, at most [`config::ERA_BUCKET_LIMIT`].
pub fn by_era(cards: &[Card], era: Era) -> Vec<&Card> {
    cards
        .iter()
        .filter(|c| c.era == era)
        .take(config::ERA_BUCKET_LIMIT)
        .collect()
}

/// One timeline column.
#[derive(Debug, Clone)]
pub struct EraBucket<'a> {
    pub era: &'a EraDescriptor,
    pub cards: Vec<&'a Card>,
}

impl EraBucket<'_> {
    /// True when the era has no records to show.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// One bucket per descriptor, in the order of `eras`.
pub fn timeline<'a>(cards: &'a [Card], eras: &'a [EraDescriptor]) -> Vec<EraBucket<'a>> {
    eras.iter()
        .map(|era| EraBucket {
            era,
            cards: by_era(cards, era.id),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// TimelineView
// ---------------------------------------------------------------------------

pub struct TimelineView<'a> {
    controller: &'a CollectionController,
}

impl<'a> TimelineView<'a> {
    pub fn new(controller: &'a CollectionController) -> Self {
        Self { controller }
    }

    pub fn buckets(&self) -> Vec<EraBucket<'a>> {
        timeline(self.controller.cards(), self.controller.eras())
    }

    pub fn by_era(&self, era: Era) -> Vec<&'a Card> {
        by_era(self.controller.cards(), era)
    }
}
