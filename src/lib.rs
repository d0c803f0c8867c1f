//! View-state model for a collectible trading-card catalog.
//!
//! Holds a fixed, in-memory card collection together with the state a
//! catalog front end coordinates around it: search query, selected card,
//! a bounded comparison set, the grid/timeline view mode, and a mock admin
//! surface that curates elite cards and simulates a market price sync.
//! Rendering is left to the caller; this crate produces the data it draws.
//!
//! # Quick start
//!
//! ```
//! use card_vault::CardVault;
//!
//! let mut vault = CardVault::builder().rng_seed(42).build().unwrap();
//!
//! vault.controller_mut().set_search_query("charizard");
//! let grid = vault.catalog().grid();
//! assert!(grid.iter().all(|c| c.name.to_lowercase().contains("charizard")));
//!
//! let first = vault.controller().cards()[0].id.clone();
//! vault.controller_mut().add_to_compare(&first);
//! assert_eq!(vault.controller().compare_set().len(), 1);
//! ```

#[cfg(feature = "async")]
pub mod async_client;
pub mod clock;
pub mod config;
pub mod controller;
pub mod error;
pub mod format;
pub mod models;
pub mod seed;
pub mod views;

#[cfg(feature = "async")]
pub use async_client::AsyncCardVault;
pub use clock::{Clock, ManualClock, Scheduler, SystemClock, ThreadSleeper};
pub use controller::{CollectionController, StateChange, SubscriptionId};
pub use error::{Result, VaultError};
pub use models::{Card, CardId, Era, EraDescriptor, ViewMode};

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

// ---------------------------------------------------------------------------
// CardVaultBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`CardVault`].
///
/// Every dependency has a default: the generated seed collection, the
/// built-in era table, the wall clock, a real thread sleep, and an
/// entropy-seeded random source.
pub struct CardVaultBuilder {
    cards: Option<Vec<Card>>,
    eras: Option<Vec<EraDescriptor>>,
    exchange_rate: f64,
    refresh_delay: Duration,
    rng_seed: Option<u64>,
    clock: Option<Arc<dyn Clock>>,
    scheduler: Option<Arc<dyn Scheduler>>,
}

impl Default for CardVaultBuilder {
    fn default() -> Self {
        Self {
            cards: None,
            eras: None,
            exchange_rate: config::USD_TO_INR,
            refresh_delay: config::REFRESH_DELAY,
            rng_seed: None,
            clock: None,
            scheduler: None,
        }
    }
}

impl CardVaultBuilder {
    /// Start from this collection instead of the generated seed data.
    pub fn cards(mut self, cards: Vec<Card>) -> Self {
        self.cards = Some(cards);
        self
    }

    /// Replace the era table used by the timeline.
    pub fn eras(mut self, eras: Vec<EraDescriptor>) -> Self {
        self.eras = Some(eras);
        self
    }

    /// Set the USD to INR rate for the session. Defaults to 83.5.
    pub fn exchange_rate(mut self, rate: f64) -> Self {
        self.exchange_rate = rate;
        self
    }

    /// Set the simulated latency of the market sync. Defaults to 2 seconds.
    pub fn refresh_delay(mut self, delay: Duration) -> Self {
        self.refresh_delay = delay;
        self
    }

    /// Seed the random source so seed data and price jitter are reproducible.
    pub fn rng_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    /// Set the time source used for price stamps and seed generation.
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Set what the blocking market sync waits on.
    pub fn scheduler(mut self, scheduler: Arc<dyn Scheduler>) -> Self {
        self.scheduler = Some(scheduler);
        self
    }

    /// Build the vault, generating seed cards if none were supplied.
    ///
    /// Fails with [`VaultError::InvalidArgument`] if the collection or
    /// configuration breaks an invariant (see [`CollectionController::new`]).
    pub fn build(self) -> Result<CardVault> {
        let mut rng: Box<dyn RngCore + Send> = match self.rng_seed {
            Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
            None => Box::new(StdRng::from_entropy()),
        };
        let clock = self.clock.unwrap_or_else(|| Arc::new(SystemClock));
        let scheduler = self.scheduler.unwrap_or_else(|| Arc::new(ThreadSleeper));

        let cards = match self.cards {
            Some(cards) => cards,
            None => seed::seed_cards(&mut *rng, self.exchange_rate, clock.now()),
        };
        let eras = self.eras.unwrap_or_else(config::eras);

        let controller = CollectionController::new(
            cards,
            eras,
            self.exchange_rate,
            self.refresh_delay,
            rng,
            clock,
        )?;
        log::debug!(
            "Card vault ready with {} cards across {} eras",
            controller.cards().len(),
            controller.eras().len()
        );

        Ok(CardVault {
            controller,
            scheduler,
        })
    }
}

// ---------------------------------------------------------------------------
// CardVault
// ---------------------------------------------------------------------------

/// The main entry point.
///
/// Owns the [`CollectionController`] and hands out lightweight borrowing
/// views over it: [`catalog`](Self::catalog) and [`timeline`](Self::timeline)
/// for reads, [`admin`](Self::admin) for curation and the market sync.
pub struct CardVault {
    controller: CollectionController,
    scheduler: Arc<dyn Scheduler>,
}

impl CardVault {
    pub fn builder() -> CardVaultBuilder {
        CardVaultBuilder::default()
    }

    // -- View accessors ----------------------------------------------------

    /// Grid, featured and detail reads for the current state.
    pub fn catalog(&self) -> views::CatalogView<'_> {
        views::CatalogView::new(&self.controller)
    }

    /// Era buckets for the chronological view.
    pub fn timeline(&self) -> views::TimelineView<'_> {
        views::TimelineView::new(&self.controller)
    }

    /// The admin surface. Its market sync blocks on the configured scheduler.
    pub fn admin(&mut self) -> views::AdminPanel<'_> {
        views::AdminPanel::new(&mut self.controller, &*self.scheduler)
    }

    // -- Utility -----------------------------------------------------------

    /// Look up a card, failing with [`VaultError::NotFound`] for unknown ids.
    pub fn get_card(&self, id: &CardId) -> Result<&Card> {
        self.controller
            .card(id)
            .ok_or_else(|| VaultError::NotFound(format!("Card '{}'", id)))
    }

    /// Serialize the current collection as a JSON array of card records.
    pub fn export_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self.controller.cards())?)
    }

    pub fn controller(&self) -> &CollectionController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut CollectionController {
        &mut self.controller
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for CardVault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = &self.controller;
        write!(
            f,
            "CardVault(cards={}, elite={}, view={}, compare={}/{}, refreshing={})",
            c.cards().len(),
            c.cards().iter().filter(|card| card.is_elite).count(),
            c.view_mode(),
            c.compare_ids().len(),
            config::COMPARE_CAPACITY,
            c.is_refreshing()
        )
    }
}
