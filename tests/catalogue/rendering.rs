//! The textual rendering contract
//!
//! The rendered form is the de facto interchange format: key order, quoting
//! and casing are asserted byte-for-byte.

use crate::common::{book_query, render_search, seed_presence, seed_sentinel};
use folio::{
    AttributeBag, BaseAttributes, FictionAttributes, Genre, Key, Kind, TypedRecord, Value,
};

#[test]
fn bag_renders_keys_in_ordinal_order() {
    let bag = AttributeBag::from_pairs([
        (Key::Genre, Value::Genre(Genre::Adventure)),
        (Key::Year, Value::Int(2003)),
        (Key::First, Value::from("Yann")),
        (Key::Last, Value::from("Martel")),
        (Key::Title, Value::from("Life of Pi")),
        (Key::Kind, Value::Kind(Kind::Fiction)),
    ])
    .unwrap();

    assert_eq!(
        bag.to_string(),
        "{KIND: fiction, TITLE: 'Life of Pi', LAST: 'Martel', FIRST: 'Yann', \
         YEAR: 2003, GENRE: adventure}"
    );
}

#[test]
fn typed_record_renders_through_its_bag_view() {
    let record = TypedRecord::Fiction(FictionAttributes::new(
        BaseAttributes::new("The Call of the Wild", "London", "Jack"),
        1903,
        Genre::Adventure,
    ));
    assert_eq!(
        record.to_string(),
        "{TITLE: 'The Call of the Wild', LAST: 'London', FIRST: 'Jack', \
         YEAR: 1903, GENRE: adventure}"
    );
}

#[test]
fn harness_output_with_matches() {
    let catalogue = seed_sentinel();
    let output = render_search(&catalogue, &book_query("", "King", "", 0, Genre::Horror));
    assert_eq!(
        output,
        "Find {TITLE: '', LAST: 'King', FIRST: '', YEAR: 0, GENRE: unspecified}\n\
         Matches:\n\
         \x20 {TITLE: 'Carrie', LAST: 'King', FIRST: 'Stephen', YEAR: 1974, GENRE: horror}\n\
         \x20 {TITLE: 'It: A Novel', LAST: 'King', FIRST: 'Stephen', YEAR: 1986, GENRE: horror}\n"
    );
}

#[test]
fn harness_output_without_matches() {
    let catalogue = seed_presence();
    let query = AttributeBag::from_pairs([(Key::Last, Value::from("Orwell"))]).unwrap();
    let output = render_search(&catalogue, &query);
    assert_eq!(
        output,
        "Find {LAST: 'Orwell'}\nNo matches.\n"
    );
}

#[test]
fn empty_query_renders_as_empty_braces() {
    let catalogue = seed_presence();
    let output = render_search(&catalogue, &AttributeBag::empty());
    assert!(output.starts_with("Find {}\nMatches:\n"));
}
