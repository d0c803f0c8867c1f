//! Async wrapper around [`CardVault`] for use in Tokio runtimes.
//!
//! The market sync waits on a Tokio timer instead of blocking a thread, and
//! the vault lock is released while it waits, so every read and command
//! stays available during a refresh. A second refresh triggered while one
//! is in flight returns immediately without touching prices.
//!
//! # Example
//!
//! ```no_run
//! use card_vault::{AsyncCardVault, CardVault};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let vault = AsyncCardVault::new(CardVault::builder().build().unwrap());
//!
//!     let updated = vault.refresh_market_prices().await.unwrap();
//!     println!("refreshed {updated} cards");
//!
//!     let featured = vault.run(|v| v.catalog().featured().len()).unwrap();
//!     println!("{featured} featured cards");
//! }
//! ```

use std::sync::{Arc, Mutex, MutexGuard};

use crate::error::{Result, VaultError};
use crate::CardVault;

/// Shareable async handle to a [`CardVault`].
///
/// Cloning is cheap; clones refer to the same vault.
#[derive(Clone)]
pub struct AsyncCardVault {
    inner: Arc<Mutex<CardVault>>,
}

impl AsyncCardVault {
    pub fn new(vault: CardVault) -> Self {
        Self {
            inner: Arc::new(Mutex::new(vault)),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, CardVault>> {
        self.inner
            .lock()
            .map_err(|_| VaultError::Runtime("Vault lock poisoned".into()))
    }

    /// Run a synchronous operation against the vault.
    ///
    /// The closure must not block; the lock is held for its duration.
    pub fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut CardVault) -> T,
    {
        let mut guard = self.lock()?;
        Ok(f(&mut guard))
    }

    pub fn is_refreshing(&self) -> Result<bool> {
        Ok(self.lock()?.controller().is_refreshing())
    }

    /// Run the simulated market sync.
    ///
    /// Returns the number of cards updated, or 0 if a refresh was already in
    /// flight when this one was triggered. Dropping the future before the
    /// delay elapses abandons the refresh: prices stay as they were and the
    /// in-flight flag is cleared.
    pub async fn refresh_market_prices(&self) -> Result<usize> {
        let delay = {
            let mut guard = self.lock()?;
            let controller = guard.controller_mut();
            if !controller.begin_refresh() {
                return Ok(0);
            }
            controller.refresh_delay()
        };
        let pending = PendingRefresh {
            inner: Arc::clone(&self.inner),
            armed: true,
        };

        tokio::time::sleep(delay).await;

        pending.finish()
    }
}

// ---------------------------------------------------------------------------
// PendingRefresh — clears the in-flight flag if the refresh is abandoned
// ---------------------------------------------------------------------------

struct PendingRefresh {
    inner: Arc<Mutex<CardVault>>,
    armed: bool,
}

impl PendingRefresh {
    fn finish(mut self) -> Result<usize> {
        self.armed = false;
        let mut guard = self
            .inner
            .lock()
            .map_err(|_| VaultError::Runtime("Vault lock poisoned".into()))?;
        Ok(guard.controller_mut().complete_refresh())
    }
}

impl Drop for PendingRefresh {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        let mut guard = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        guard.controller_mut().abort_refresh();
    }
}
