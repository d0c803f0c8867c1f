//! Era buckets for the chronological view.

mod common;

use card_vault::config;
use card_vault::models::Era;
use card_vault::views::{by_era, timeline};
use card_vault::CardVault;

#[test]
fn by_era_matches_exactly_and_caps_at_three() {
    let cards: Vec<_> = (0..6)
        .map(|i| {
            let era = if i % 2 == 0 { Era::Bw } else { Era::Sm };
            common::make_card(&format!("c{i}"), &format!("Card {i}"), i != 2, era, 100.0)
        })
        .collect();

    assert_eq!(common::ids(&by_era(&cards, Era::Bw)), vec!["c0", "c2", "c4"]);
    assert_eq!(common::ids(&by_era(&cards, Era::Sm)), vec!["c1", "c3", "c5"]);
    assert!(by_era(&cards, Era::Dp).is_empty());

    let mut more = cards.clone();
    more.push(common::make_card("c6", "Card 6", true, Era::Bw, 100.0));
    assert_eq!(common::ids(&by_era(&more, Era::Bw)), vec!["c0", "c2", "c4"]);
}

#[test]
fn by_era_ignores_elite_flag() {
    let cards = common::abcd();
    assert_eq!(common::ids(&by_era(&cards, Era::Classic)), vec!["a", "b"]);
}

#[test]
fn timeline_has_one_bucket_per_era_in_table_order() {
    let cards = common::abcd();
    let eras = config::eras();
    let buckets = timeline(&cards, &eras);

    assert_eq!(buckets.len(), 10);
    let order: Vec<Era> = buckets.iter().map(|b| b.era.id).collect();
    assert_eq!(order, Era::ALL.to_vec());

    assert_eq!(common::ids(&buckets[0].cards), vec!["a", "b"]);
    assert_eq!(common::ids(&buckets[1].cards), vec!["c", "d"]);
    assert!(buckets[2..].iter().all(|b| b.is_empty()));
}

#[test]
fn seeded_timeline_buckets() {
    let vault = CardVault::builder().rng_seed(5).build().unwrap();
    let view = vault.timeline();
    let buckets = view.buckets();

    let classic = &buckets[0];
    assert_eq!(classic.era.label, "Classic Era (1996-2000)");
    assert_eq!(classic.cards.len(), 3);
    assert_eq!(classic.cards[0].name, "Charizard 1st Edition Shadowless");

    let dp = buckets.iter().find(|b| b.era.id == Era::Dp).unwrap();
    assert!(dp.is_empty());

    let bw = view.by_era(Era::Bw);
    assert_eq!(bw[0].name, "Elite Chase Card #11");
    assert_eq!(bw.len(), 3);
}

#[test]
fn era_ids_round_trip_through_strings() {
    for era in Era::ALL {
        assert_eq!(era.as_str().parse::<Era>().unwrap(), era);
    }
    assert!("Gen9".parse::<Era>().is_err());
    assert_eq!(Era::ESeries.to_string(), "E-Series");
}
