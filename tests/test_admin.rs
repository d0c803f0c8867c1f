//! Admin surface: elite toggling, preview and the simulated market sync.

mod common;

use card_vault::controller::jitter_price;
use card_vault::models::Era;
use card_vault::views::admin_preview;
use card_vault::{CardId, CardVault, StateChange};
use chrono::Duration;

fn id(s: &str) -> CardId {
    CardId::from(s)
}

// ---------------------------------------------------------------------------
// toggle_elite_status
// ---------------------------------------------------------------------------

#[test]
fn toggle_twice_restores_card_exactly() {
    let (mut vault, _clock) = common::vault_with(common::abcd());
    let before = vault.get_card(&id("b")).unwrap().clone();

    assert!(vault.admin().toggle_elite_status(&id("b")));
    let flipped = vault.get_card(&id("b")).unwrap().clone();
    assert_eq!(flipped.is_elite, !before.is_elite);
    assert_eq!(
        card_vault::Card {
            is_elite: before.is_elite,
            ..flipped
        },
        before
    );

    assert!(vault.admin().toggle_elite_status(&id("b")));
    assert_eq!(vault.get_card(&id("b")).unwrap(), &before);
}

#[test]
fn toggle_unknown_id_changes_nothing() {
    let (mut vault, _clock) = common::vault_with(common::abcd());
    let before = vault.controller().cards().to_vec();

    assert!(!vault.admin().toggle_elite_status(&id("ghost")));
    assert_eq!(vault.controller().cards(), &before[..]);
    assert_eq!(vault.controller().version(), 0);
}

// ---------------------------------------------------------------------------
// Preview
// ---------------------------------------------------------------------------

#[test]
fn preview_shows_first_fifteen_of_all() {
    let vault = CardVault::builder().rng_seed(11).build().unwrap();
    let preview = admin_preview(vault.controller().cards());

    assert_eq!(preview.rows.len(), 15);
    assert_eq!(preview.total, 50);
    assert_eq!(preview.rows[0].name, "Charizard 1st Edition Shadowless");
    assert_eq!(preview.summary(), "Displaying top 15 of 50 records.");
}

#[test]
fn preview_of_small_collection_shows_everything() {
    let (mut vault, _clock) = common::vault_with(common::abcd());
    let admin = vault.admin();
    let preview = admin.preview();
    assert_eq!(preview.rows.len(), 4);
    assert_eq!(preview.total, 4);
}

// ---------------------------------------------------------------------------
// jitter_price
// ---------------------------------------------------------------------------

#[test]
fn jitter_extremes_match_documented_range() {
    assert_eq!(jitter_price(10_000.0, 0.0), 9_775.0);
    assert_eq!(jitter_price(10_000.0, 0.45), 10_000.0);
    // u never reaches 1.0; the upper bound is approached from below.
    assert!(jitter_price(10_000.0, 0.999_999) <= 10_275.0);
}

// ---------------------------------------------------------------------------
// refresh_market_prices
// ---------------------------------------------------------------------------

#[test]
fn refresh_keeps_prices_within_jitter_bounds() {
    let cards: Vec<_> = (0..40)
        .map(|i| {
            common::make_card(
                &format!("c{i}"),
                &format!("Card {i}"),
                true,
                Era::Sm,
                500.0 + f64::from(i) * 1234.0,
            )
        })
        .collect();
    let (mut vault, _clock) = common::vault_with(cards);

    for _ in 0..5 {
        let before: Vec<f64> = vault
            .controller()
            .cards()
            .iter()
            .map(|c| c.market_price.usd)
            .collect();

        assert_eq!(vault.admin().refresh_market_prices(), 40);

        for (old, card) in before.iter().zip(vault.controller().cards()) {
            let new = card.market_price.usd;
            assert!(new >= (old * 0.9775).round(), "{new} below range of {old}");
            assert!(new <= (old * 1.0275).round(), "{new} above range of {old}");
            assert_eq!(new, new.round());
        }
    }
}

#[test]
fn refresh_stamps_strictly_increasing_times() {
    let (mut vault, clock) = common::vault_with(common::abcd());
    let before: Vec<_> = vault
        .controller()
        .cards()
        .iter()
        .map(|c| c.market_price.last_updated)
        .collect();

    vault.admin().refresh_market_prices();
    let first: Vec<_> = vault
        .controller()
        .cards()
        .iter()
        .map(|c| c.market_price.last_updated)
        .collect();
    assert!(before.iter().zip(&first).all(|(b, a)| a > b));
    // The manual clock doubles as the scheduler, so the delay moved it.
    assert_eq!(first[0], common::epoch() + Duration::seconds(2));

    // Even a clock pinned in the past cannot make stamps go backwards.
    clock.set(common::epoch());
    vault.controller_mut().begin_refresh();
    vault.controller_mut().complete_refresh();
    let second: Vec<_> = vault
        .controller()
        .cards()
        .iter()
        .map(|c| c.market_price.last_updated)
        .collect();
    assert!(first.iter().zip(&second).all(|(b, a)| a > b));
}

#[test]
fn refresh_keeps_inr_in_step_with_usd() {
    let (mut vault, _clock) = common::vault_with(common::abcd());
    vault.admin().refresh_market_prices();

    let rate = vault.controller().exchange_rate();
    for card in vault.controller().cards() {
        assert_eq!(card.market_price.inr, card.market_price.usd * rate);
    }
}

#[test]
fn refresh_leaves_retail_and_flags_alone() {
    let (mut vault, _clock) = common::vault_with(common::abcd());
    let before = vault.controller().cards().to_vec();

    vault.admin().refresh_market_prices();

    for (old, new) in before.iter().zip(vault.controller().cards()) {
        assert_eq!(old.retail_price, new.retail_price);
        assert_eq!(old.is_elite, new.is_elite);
        assert_eq!(old.price_history, new.price_history);
    }
}

#[test]
fn refresh_in_flight_rejects_reentry() {
    let (mut vault, _clock) = common::vault_with(common::abcd());
    let c = vault.controller_mut();

    assert!(c.begin_refresh());
    assert!(c.is_refreshing());
    assert!(!c.begin_refresh());

    // Reads stay available while the refresh is pending.
    assert_eq!(c.cards().len(), 4);

    assert_eq!(c.complete_refresh(), 4);
    assert!(!c.is_refreshing());
    assert_eq!(c.complete_refresh(), 0);
}

#[test]
fn refresh_notifies_start_and_completion() {
    let (mut vault, _clock) = common::vault_with(common::abcd());
    let seen = std::sync::Arc::new(std::sync::Mutex::new(Vec::new()));
    let sink = seen.clone();
    vault
        .controller_mut()
        .subscribe(move |change| sink.lock().unwrap().push(change.clone()));

    vault.admin().refresh_market_prices();

    assert_eq!(
        *seen.lock().unwrap(),
        vec![
            StateChange::RefreshStarted,
            StateChange::PricesRefreshed { updated: 4 },
        ]
    );
}

#[test]
fn abort_clears_flag_without_touching_prices() {
    let (mut vault, _clock) = common::vault_with(common::abcd());
    let before = vault.controller().cards().to_vec();
    let seen = std::sync::Arc::new(std::sync::Mutex::new(Vec::new()));
    let sink = seen.clone();
    let c = vault.controller_mut();
    c.subscribe(move |change| sink.lock().unwrap().push(change.clone()));

    assert!(!c.abort_refresh());
    assert!(c.begin_refresh());
    assert!(c.abort_refresh());
    assert!(!c.is_refreshing());
    assert_eq!(c.complete_refresh(), 0);
    assert_eq!(c.cards(), &before[..]);

    assert_eq!(
        *seen.lock().unwrap(),
        vec![StateChange::RefreshStarted, StateChange::RefreshAborted]
    );
}

#[test]
fn seeded_refresh_is_reproducible() {
    let run = || {
        let (mut vault, _clock) = common::vault_with(common::abcd());
        vault.admin().refresh_market_prices();
        vault
            .controller()
            .cards()
            .iter()
            .map(|c| c.market_price.usd)
            .collect::<Vec<_>>()
    };
    assert_eq!(run(), run());
}
