//! Card repository: the synthetic collection the catalog starts from.
//!
//! Cards are generated once at startup with a randomized twelve-month price
//! history. Every draw goes through the caller's random source, so a seeded
//! generator yields the same collection every time.

use std::collections::HashSet;

use chrono::{DateTime, NaiveDate, Utc};
use rand::{Rng, RngCore};

use crate::config;
use crate::error::Result;
use crate::models::{Card, CardId, CardImages, Era, PriceData, PricePoint};

const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const ID_LEN: usize = 9;

/// Market quotes in the seed data are stamped at this instant (2024-01-01).
const SEED_MARKET_STAMP: i64 = 1_704_067_200;

// ---------------------------------------------------------------------------
// CardSpec
// ---------------------------------------------------------------------------

/// The per-card overrides used to build a seed record.
///
/// Anything not listed here takes the catalog default (PSA 10, English
/// 1st Edition, scarcity 95, elite).
#[derive(Debug, Clone)]
pub struct CardSpec {
    pub name: String,
    pub set: String,
    pub year: i32,
    pub market_usd: f64,
    pub era: Era,
    pub rarity: Option<Vec<String>>,
}

impl CardSpec {
    pub fn new(name: &str, set: &str, year: i32, market_usd: f64, era: Era) -> Self {
        Self {
            name: name.to_string(),
            set: set.to_string(),
            year,
            market_usd,
            era,
            rarity: None,
        }
    }

    pub fn rarity(mut self, labels: &[&str]) -> Self {
        self.rarity = Some(labels.iter().map(|l| l.to_string()).collect());
        self
    }
}

// ---------------------------------------------------------------------------
// CardFactory
// ---------------------------------------------------------------------------

/// Builds seed cards, guaranteeing id uniqueness for everything it creates.
pub struct CardFactory<'a> {
    rng: &'a mut dyn RngCore,
    rate: f64,
    now: DateTime<Utc>,
    issued: HashSet<CardId>,
}

impl<'a> CardFactory<'a> {
    pub fn new(rng: &'a mut dyn RngCore, rate: f64, now: DateTime<Utc>) -> Self {
        Self {
            rng,
            rate,
            now,
            issued: HashSet::new(),
        }
    }

    /// Build a complete card record from `spec`.
    pub fn create(&mut self, spec: CardSpec) -> Card {
        let base = spec.market_usd;
        let retail_usd = (base * 0.9).round();
        let market_stamp = DateTime::from_timestamp(SEED_MARKET_STAMP, 0).unwrap_or(self.now);
        let slug = spec.name.replace(' ', "%20");

        Card {
            id: self.next_id(),
            images: CardImages {
                small: format!("{}/{}/400/560", config::IMAGE_BASE, slug),
                large: format!("{}/{}/800/1120", config::IMAGE_BASE, slug),
            },
            name: spec.name,
            set: spec.set,
            year: spec.year,
            language: "English".to_string(),
            edition: "1st Edition".to_string(),
            psa_grade: Some(10),
            bgs_grade: None,
            rarity: spec
                .rarity
                .unwrap_or_else(|| vec!["Rare Holo".to_string(), "Vintage".to_string()]),
            retail_price: PriceData {
                usd: retail_usd,
                inr: (retail_usd * self.rate).round(),
                currency: "USD".to_string(),
                last_updated: self.now,
            },
            market_price: PriceData::from_usd(base, self.rate, market_stamp),
            price_history: price_history(&mut *self.rng, base),
            provenance: "Heritage Auctions Oct 2023".to_string(),
            scarcity_score: 95,
            notes: "A grail among grails. Stunning condition.".to_string(),
            is_elite: true,
            era: spec.era,
        }
    }

    fn next_id(&mut self) -> CardId {
        loop {
            let raw: String = (0..ID_LEN)
                .map(|_| ID_ALPHABET[self.rng.gen_range(0..ID_ALPHABET.len())] as char)
                .collect();
            let id = CardId::new(raw);
            if self.issued.insert(id.clone()) {
                return id;
            }
        }
    }
}

/// Twelve monthly points for 2023, drifting upward from 70% of `base`.
pub fn price_history(rng: &mut dyn RngCore, base: f64) -> Vec<PricePoint> {
    let mut current = base * 0.7;
    (1..=12)
        .filter_map(|month| {
            current += (rng.gen::<f64>() - 0.4) * (base * 0.1);
            NaiveDate::from_ymd_opt(2023, month, 1).map(|date| PricePoint {
                date,
                price: current.round(),
            })
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Seed collection
// ---------------------------------------------------------------------------

/// The fifty-card launch collection: ten named grails followed by forty
/// numbered chase cards alternating between the BW and SM eras.
pub fn seed_cards(rng: &mut dyn RngCore, rate: f64, now: DateTime<Utc>) -> Vec<Card> {
    let mut specs = vec![
        CardSpec::new("Charizard 1st Edition Shadowless", "Base Set", 1999, 350_000.0, Era::Classic)
            .rarity(&["Holo", "1st Edition"]),
        CardSpec::new("Illustrator Pikachu", "CoroCoro Promo", 1998, 5_275_000.0, Era::Classic)
            .rarity(&["Unique", "Promo"]),
        CardSpec::new("Lugia 1st Edition", "Neo Genesis", 2000, 129_000.0, Era::Neo),
        CardSpec::new("Umbreon VMAX Alt Art", "Evolving Skies", 2021, 1_200.0, Era::Swsh)
            .rarity(&["Secret Rare"]),
        CardSpec::new("Gold Star Rayquaza", "EX Deoxys", 2005, 45_000.0, Era::Ex)
            .rarity(&["Gold Star"]),
        CardSpec::new("Tropical Mega Battle Trainer", "Tropical Mega Battle", 1999, 65_000.0, Era::Classic)
            .rarity(&["Trophy"]),
        CardSpec::new("Shining Charizard", "Neo Destiny", 2002, 15_000.0, Era::Neo)
            .rarity(&["Shining"]),
        CardSpec::new("Crystal Charizard", "Skyridge", 2003, 28_000.0, Era::ESeries)
            .rarity(&["Crystal"]),
        CardSpec::new("Mario Pikachu Special Box", "XY Promo", 2016, 5_000.0, Era::Xy)
            .rarity(&["Full Art", "Promo"]),
        CardSpec::new("Poncho-wearing Pikachu Rayquaza", "XY Promo", 2015, 4_200.0, Era::Xy),
    ];

    specs.extend((0..40).map(|i: i32| {
        CardSpec::new(
            &format!("Elite Chase Card #{}", i + 11),
            "Base Set",
            2000 + i,
            500.0 + f64::from(i) * 200.0,
            if i % 2 == 0 { Era::Bw } else { Era::Sm },
        )
    }));

    let mut factory = CardFactory::new(rng, rate, now);
    let cards: Vec<Card> = specs.into_iter().map(|s| factory.create(s)).collect();
    log::debug!("Generated {} seed cards", cards.len());
    cards
}

/// Parse a collection from a JSON array of camelCase card records.
pub fn load_cards_json(json: &str) -> Result<Vec<Card>> {
    let cards: Vec<Card> = serde_json::from_str(json)?;
    Ok(cards)
}

