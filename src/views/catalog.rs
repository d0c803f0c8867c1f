//! Grid, featured and detail projections.

use crate::config;
use crate::controller::CollectionController;
use crate::models::{Card, CardId, PricePoint};

/// Elite cards whose name contains `query`, ignoring case.
///
/// An empty query matches every elite card.
pub fn filtered_grid<'c>(cards: &'c [Card], query: &str) -> Vec<&'c Card> {
    let needle = query.to_lowercase();
    cards
        .iter()
        .filter(|c| c.is_elite && c.name.to_lowercase().contains(&needle))
        .collect()
}

/// The first elite cards of the collection, at most [`config::FEATURED_LIMIT`].
pub fn featured(cards: &[Card]) -> Vec<&Card> {
    cards
        .iter()
        .filter(|c| c.is_elite)
        .take(config::FEATURED_LIMIT)
        .collect()
}

/// The data series plotted on a card's detail chart.
pub fn price_series(card: &Card) -> &[PricePoint] {
    &card.price_history
}

// ---------------------------------------------------------------------------
// CatalogView
// ---------------------------------------------------------------------------

/// Catalog reads bound to the controller's current state.
pub struct CatalogView<'a> {
    controller: &'a CollectionController,
}

impl<'a> CatalogView<'a> {
    pub fn new(controller: &'a CollectionController) -> Self {
        Self { controller }
    }

    /// The grid contents for the active search query.
    pub fn grid(&self) -> Vec<&'a Card> {
        filtered_grid(self.controller.cards(), self.controller.search_query())
    }

    pub fn featured(&self) -> Vec<&'a Card> {
        featured(self.controller.cards())
    }

    /// Chart series for a card, or `None` for an unknown id.
    pub fn price_series(&self, id: &CardId) -> Option<&'a [PricePoint]> {
        self.controller.card(id).map(price_series)
    }

    /// Market value of a card converted at the session exchange rate.
    pub fn market_value_inr(&self, id: &CardId) -> Option<f64> {
        let rate = self.controller.exchange_rate();
        self.controller
            .card(id)
            .map(|c| crate::format::inr_value(c.market_price.usd, rate))
    }
}
