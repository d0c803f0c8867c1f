//! The collection state controller.
//!
//! Owns the card collection and all view state around it (search query,
//! selection, compare set, view mode, admin visibility, refresh status).
//! Every mutation goes through a method here; each effective change bumps a
//! version counter and is broadcast to subscribed observers.
//!
//! Operations addressed by id never fail. Unknown ids, a full compare set
//! and duplicate compare entries are silent no-ops.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use rand::{Rng, RngCore};

use crate::clock::Clock;
use crate::config;
use crate::error::{Result, VaultError};
use crate::models::{Card, CardId, EraDescriptor, ViewMode};

/// Handle returned by [`CollectionController::subscribe`].
pub type SubscriptionId = u64;

type Observer = Box<dyn FnMut(&StateChange) + Send>;

// ---------------------------------------------------------------------------
// StateChange
// ---------------------------------------------------------------------------

/// Which part of the state a mutation touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateChange {
    SearchQuery,
    Selection,
    Compare,
    ViewMode,
    AdminPanel,
    EliteToggled(CardId),
    RefreshStarted,
    RefreshAborted,
    PricesRefreshed { updated: usize },
}

/// Apply the market jitter to a USD amount for a uniform draw `u` in `[0, 1)`.
///
/// The result is rounded to a whole dollar and always falls within
/// `[round(old * 0.9775), round(old * 1.0275)]`.
pub fn jitter_price(old_usd: f64, u: f64) -> f64 {
    (old_usd * (1.0 + (u - config::JITTER_CENTER) * config::JITTER_SPAN)).round()
}

// ---------------------------------------------------------------------------
// CollectionController
// ---------------------------------------------------------------------------

pub struct CollectionController {
    cards: Vec<Card>,
    eras: Vec<EraDescriptor>,
    selected: Option<CardId>,
    compare: Vec<CardId>,
    view_mode: ViewMode,
    search_query: String,
    admin_open: bool,
    refreshing: bool,
    version: u64,
    exchange_rate: f64,
    refresh_delay: Duration,
    rng: Box<dyn RngCore + Send>,
    clock: Arc<dyn Clock>,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: SubscriptionId,
}

impl CollectionController {
    /// Take ownership of a seeded collection after checking its invariants.
    ///
    /// Fails if the exchange rate is not a positive finite number, the era
    /// table is empty, two cards share an id, or any card fails
    /// [`Card::validate`].
    pub fn new(
        cards: Vec<Card>,
        eras: Vec<EraDescriptor>,
        exchange_rate: f64,
        refresh_delay: Duration,
        rng: Box<dyn RngCore + Send>,
        clock: Arc<dyn Clock>,
    ) -> Result<Self> {
        if !exchange_rate.is_finite() || exchange_rate <= 0.0 {
            return Err(VaultError::InvalidArgument(format!(
                "Exchange rate must be a positive number, got {}",
                exchange_rate
            )));
        }
        if eras.is_empty() {
            return Err(VaultError::InvalidArgument(
                "Era table must not be empty".to_string(),
            ));
        }

        let mut seen: HashSet<&CardId> = HashSet::with_capacity(cards.len());
        for card in &cards {
            card.validate()?;
            if !seen.insert(&card.id) {
                return Err(VaultError::InvalidArgument(format!(
                    "Duplicate card id '{}'",
                    card.id
                )));
            }
        }

        Ok(Self {
            cards,
            eras,
            selected: None,
            compare: Vec::with_capacity(config::COMPARE_CAPACITY),
            view_mode: ViewMode::default(),
            search_query: String::new(),
            admin_open: false,
            refreshing: false,
            version: 0,
            exchange_rate,
            refresh_delay,
            rng,
            clock,
            observers: Vec::new(),
            next_subscription: 1,
        })
    }

    // -- Reads -------------------------------------------------------------

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn eras(&self) -> &[EraDescriptor] {
        &self.eras
    }

    pub fn card(&self, id: &CardId) -> Option<&Card> {
        self.cards.iter().find(|c| &c.id == id)
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    /// The selected card, read through to the live record.
    pub fn selected_card(&self) -> Option<&Card> {
        self.selected.as_ref().and_then(|id| self.card(id))
    }

    /// Compare entries in insertion order, read through to the live records.
    pub fn compare_set(&self) -> Vec<&Card> {
        self.compare.iter().filter_map(|id| self.card(id)).collect()
    }

    pub fn compare_ids(&self) -> &[CardId] {
        &self.compare
    }

    pub fn is_refreshing(&self) -> bool {
        self.refreshing
    }

    pub fn is_admin_open(&self) -> bool {
        self.admin_open
    }

    pub fn exchange_rate(&self) -> f64 {
        self.exchange_rate
    }

    pub fn refresh_delay(&self) -> Duration {
        self.refresh_delay
    }

    /// Monotonic counter of effective mutations, usable as a memoization key.
    pub fn version(&self) -> u64 {
        self.version
    }

    // -- Observers ---------------------------------------------------------

    /// Register a callback invoked after every effective state change.
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&StateChange) + Send + 'static,
    {
        let id = self.next_subscription;
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove a callback. Returns `false` if the id was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sid, _)| *sid != id);
        self.observers.len() != before
    }

    fn changed(&mut self, change: StateChange) {
        self.version += 1;
        log::debug!("State change v{}: {:?}", self.version, change);
        for (_, observer) in self.observers.iter_mut() {
            observer(&change);
        }
    }

    // -- Search / selection / view -----------------------------------------

    /// Replace the search query verbatim. Case folding happens at match time.
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        let query = query.into();
        if query == self.search_query {
            return;
        }
        self.search_query = query;
        self.changed(StateChange::SearchQuery);
    }

    /// Select a card by id, or clear the selection with `None`.
    ///
    /// Selecting an id that is not in the collection is ignored.
    pub fn select_card(&mut self, id: Option<&CardId>) {
        let next = match id {
            Some(id) if self.card(id).is_some() => Some(id.clone()),
            Some(_) => return,
            None => None,
        };
        if next == self.selected {
            return;
        }
        self.selected = next;
        self.changed(StateChange::Selection);
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        if mode == self.view_mode {
            return;
        }
        self.view_mode = mode;
        self.changed(StateChange::ViewMode);
    }

    pub fn set_admin_open(&mut self, open: bool) {
        if open == self.admin_open {
            return;
        }
        self.admin_open = open;
        self.changed(StateChange::AdminPanel);
    }

    pub fn toggle_admin(&mut self) {
        self.set_admin_open(!self.admin_open);
    }

    // -- Compare set -------------------------------------------------------

    /// Append a card to the compare set.
    ///
    /// Returns `false` without changing anything when the set is full, the
    /// card is already present, or the id is unknown.
    pub fn add_to_compare(&mut self, id: &CardId) -> bool {
        if self.compare.len() >= config::COMPARE_CAPACITY
            || self.compare.contains(id)
            || self.card(id).is_none()
        {
            return false;
        }
        self.compare.push(id.clone());
        self.changed(StateChange::Compare);
        true
    }

    pub fn remove_from_compare(&mut self, id: &CardId) -> bool {
        let before = self.compare.len();
        self.compare.retain(|c| c != id);
        if self.compare.len() == before {
            return false;
        }
        self.changed(StateChange::Compare);
        true
    }

    pub fn clear_compare(&mut self) {
        if self.compare.is_empty() {
            return;
        }
        self.compare.clear();
        self.changed(StateChange::Compare);
    }

    // -- Admin mutations ---------------------------------------------------

    /// Flip the elite flag on one card. Unknown ids are ignored.
    pub fn toggle_elite_status(&mut self, id: &CardId) -> bool {
        let Some(card) = self.cards.iter_mut().find(|c| &c.id == id) else {
            return false;
        };
        card.is_elite = !card.is_elite;
        self.changed(StateChange::EliteToggled(id.clone()));
        true
    }

    /// Mark a price refresh as in flight.
    ///
    /// Returns `false` if one is already running; the caller must then not
    /// call [`complete_refresh`](Self::complete_refresh) for this attempt.
    pub fn begin_refresh(&mut self) -> bool {
        if self.refreshing {
            log::debug!("Price refresh already in flight; ignoring trigger");
            return false;
        }
        self.refreshing = true;
        self.changed(StateChange::RefreshStarted);
        true
    }

    /// Clear the in-flight flag without touching any price.
    ///
    /// Used when a pending refresh is abandoned before it completes. Returns
    /// `false` if no refresh was in flight.
    pub fn abort_refresh(&mut self) -> bool {
        if !self.refreshing {
            return false;
        }
        self.refreshing = false;
        log::debug!("Price refresh abandoned before completion");
        self.changed(StateChange::RefreshAborted);
        true
    }

    /// Apply the market jitter to every card and clear the in-flight flag.
    ///
    /// Each card's `marketPrice.lastUpdated` is stamped with the clock's
    /// current time, moved forward past the previous stamp if the clock has
    /// not advanced. Returns the number of cards updated, or 0 if no refresh
    /// was in flight.
    pub fn complete_refresh(&mut self) -> usize {
        if !self.refreshing {
            return 0;
        }

        let now = self.clock.now();
        let rate = self.exchange_rate;
        for card in self.cards.iter_mut() {
            let price = &mut card.market_price;
            let u: f64 = self.rng.gen();
            price.usd = jitter_price(price.usd, u);
            price.inr = price.usd * rate;
            price.last_updated = if now > price.last_updated {
                now
            } else {
                price.last_updated + chrono::Duration::milliseconds(1)
            };
        }

        let updated = self.cards.len();
        self.refreshing = false;
        log::info!("Market prices refreshed for {} cards", updated);
        self.changed(StateChange::PricesRefreshed { updated });
        updated
    }
}
