//! Shared test fixtures for the card-vault integration tests.
//!
//! Provides small hand-built collections with known ids, names and elite
//! flags, plus a vault builder pinned to a manual clock and a fixed seed.

#![allow(dead_code)]

use std::sync::Arc;

use card_vault::models::{Card, CardId, CardImages, Era, PriceData, PricePoint};
use card_vault::{CardVault, ManualClock};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
}

/// Build a card with sensible defaults for everything but the fields tests
/// care about.
pub fn make_card(id: &str, name: &str, is_elite: bool, era: Era, usd: f64) -> Card {
    Card {
        id: CardId::new(id),
        name: name.to_string(),
        set: "Base Set".to_string(),
        year: 1999,
        language: "English".to_string(),
        edition: "1st Edition".to_string(),
        psa_grade: Some(10),
        bgs_grade: None,
        rarity: vec!["Holo".to_string()],
        images: CardImages {
            small: format!("https://img.test/{id}/small"),
            large: format!("https://img.test/{id}/large"),
        },
        retail_price: PriceData::from_usd((usd * 0.9).round(), 83.5, epoch()),
        market_price: PriceData::from_usd(usd, 83.5, epoch()),
        price_history: vec![
            PricePoint {
                date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
                price: usd * 0.8,
            },
            PricePoint {
                date: NaiveDate::from_ymd_opt(2023, 2, 1).unwrap(),
                price: usd * 0.9,
            },
        ],
        provenance: "Test fixture".to_string(),
        scarcity_score: 90,
        notes: String::new(),
        is_elite,
        era,
    }
}

/// A(elite, "Foo"), B(non-elite, "Foobar"), C(elite, "Bar"), D(elite, "Baz").
pub fn abcd() -> Vec<Card> {
    vec![
        make_card("a", "Foo", true, Era::Classic, 1000.0),
        make_card("b", "Foobar", false, Era::Classic, 2000.0),
        make_card("c", "Bar", true, Era::Neo, 3000.0),
        make_card("d", "Baz", true, Era::Neo, 4000.0),
    ]
}

/// A vault over `cards` with a fixed seed and a manual clock that also
/// serves as the scheduler.
pub fn vault_with(cards: Vec<Card>) -> (CardVault, Arc<ManualClock>) {
    init_logging();
    let clock = Arc::new(ManualClock::new(epoch()));
    let vault = CardVault::builder()
        .cards(cards)
        .rng_seed(42)
        .clock(clock.clone())
        .scheduler(clock.clone())
        .build()
        .unwrap();
    (vault, clock)
}

pub fn ids(cards: &[&Card]) -> Vec<String> {
    cards.iter().map(|c| c.id.as_str().to_string()).collect()
}
