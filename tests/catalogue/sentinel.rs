//! Sentinel-mode (wildcard-by-sentinel, prefix-on-text) catalogue behavior

use crate::common::{book_query, seed_sentinel, titles};
use folio::Genre;

#[test]
fn prefix_of_title_matches() {
    let catalogue = seed_sentinel();
    let query = book_query("Life", "Martel", "Yann", 2003, Genre::Adventure);
    assert_eq!(titles(&catalogue.find(&query)), vec!["Life of Pi"]);
}

#[test]
fn query_longer_than_field_fails() {
    let catalogue = seed_sentinel();
    let query = book_query("Life of Pi: The Illustrated Edition", "", "", 0, Genre::Unspecified);
    assert!(catalogue.find(&query).is_empty());
}

#[test]
fn all_sentinel_query_returns_every_record_in_insertion_order() {
    let catalogue = seed_sentinel();
    let query = book_query("", "", "", 0, Genre::Unspecified);
    let hits = catalogue.find(&query);
    assert_eq!(hits.len(), catalogue.len());
    for (hit, stored) in hits.iter().zip(catalogue.iter()) {
        assert!(std::ptr::eq(*hit, stored));
    }
}

#[test]
fn year_constrains_while_genre_sentinel_does_not() {
    let catalogue = seed_sentinel();
    let query = book_query("", "", "", 1960, Genre::Unspecified);
    assert_eq!(titles(&catalogue.find(&query)), vec!["To Kill a Mockingbird"]);
}

#[test]
fn year_and_genre_must_both_hold() {
    let catalogue = seed_sentinel();
    let query = book_query("", "", "", 1960, Genre::Romance);
    assert!(catalogue.find(&query).is_empty());
}

#[test]
fn prefix_comparison_is_case_insensitive() {
    let catalogue = seed_sentinel();
    let query = book_query("", "KING", "", 0, Genre::Horror);
    assert_eq!(titles(&catalogue.find(&query)), vec!["Carrie", "It: A Novel"]);
}

#[test]
fn genre_alone_selects_its_records() {
    let catalogue = seed_sentinel();
    let query = book_query("", "", "", 0, Genre::SciFi);
    assert_eq!(
        titles(&catalogue.find(&query)),
        vec!["2001: A Space Odyssey", "Ender's Game"]
    );
}
