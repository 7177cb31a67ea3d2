//! Tagged-variant records and kind-filtered search

use folio::{
    BaseAttributes, CookbookAttributes, FictionAttributes, Genre, HowtoAttributes, Region,
    Subject, TypedCatalogue, TypedRecord,
};

fn seed() -> TypedCatalogue {
    let mut c = TypedCatalogue::new();
    c.add(TypedRecord::Fiction(FictionAttributes::new(
        BaseAttributes::new("Life of Pi", "Martel", "Yann"),
        2003,
        Genre::Adventure,
    )));
    c.add(TypedRecord::Fiction(FictionAttributes::new(
        BaseAttributes::new("Carrie", "King", "Stephen"),
        1974,
        Genre::Horror,
    )));
    c.add(TypedRecord::Fiction(FictionAttributes::new(
        BaseAttributes::new("It: A Novel", "King", "Stephen"),
        1986,
        Genre::Horror,
    )));
    c.add(TypedRecord::Cookbook(CookbookAttributes::new(
        BaseAttributes::new("The Woks of Life", "Leung", "Bill"),
        Region::China,
    )));
    c.add(TypedRecord::Cookbook(CookbookAttributes::new(
        BaseAttributes::new("Mastering the Art of French Cooking", "Child", "Julia"),
        Region::France,
    )));
    c.add(TypedRecord::Howto(HowtoAttributes::new(
        BaseAttributes::new("On Writing: A Memoir of the Craft", "King", "Stephen"),
        Subject::Writing,
    )));
    c
}

fn fiction_query(title: &str, last: &str, first: &str, year: i64, genre: Genre) -> TypedRecord {
    TypedRecord::Fiction(FictionAttributes::new(
        BaseAttributes::new(title, last, first),
        year,
        genre,
    ))
}

#[test]
fn prefix_query_finds_fiction_record() {
    let catalogue = seed();
    let hits = catalogue.find_of_kind(&fiction_query("Life", "Martel", "Yann", 2003, Genre::Adventure));
    assert_eq!(hits.len(), 1);
    assert_eq!(
        hits[0],
        &TypedRecord::Fiction(FictionAttributes::new(
            BaseAttributes::new("Life of Pi", "Martel", "Yann"),
            2003,
            Genre::Adventure,
        ))
    );
}

#[test]
fn kind_gate_excludes_other_kinds_sharing_the_base() {
    let catalogue = seed();
    // King wrote fiction and a how-to; a fiction query must not see the how-to
    let hits = catalogue.find_of_kind(&fiction_query("", "King", "", 0, Genre::Unspecified));
    assert_eq!(hits.len(), 2);
    assert!(hits.iter().all(|r| r.kind() == folio::Kind::Fiction));
}

#[test]
fn results_keep_insertion_order() {
    let catalogue = seed();
    let hits = catalogue.find_of_kind(&fiction_query("", "King", "", 0, Genre::Horror));
    let titles: Vec<_> = hits
        .iter()
        .map(|r| match r {
            TypedRecord::Fiction(attrs) => attrs.base.title.clone(),
            _ => unreachable!("kind gate admits only fiction"),
        })
        .collect();
    assert_eq!(titles, vec!["Carrie", "It: A Novel"]);
}

#[test]
fn cookbook_exact_query_matches() {
    let catalogue = seed();
    let query = TypedRecord::Cookbook(CookbookAttributes::new(
        BaseAttributes::new("Mastering the Art of French Cooking", "Child", "Julia"),
        Region::France,
    ));
    assert_eq!(catalogue.find_of_kind(&query).len(), 1);
}

#[test]
fn unconstrained_howto_query_sees_only_howto_records() {
    let catalogue = seed();
    let query = TypedRecord::Howto(HowtoAttributes::new(
        BaseAttributes::default(),
        Subject::Unspecified,
    ));
    let hits = catalogue.find_of_kind(&query);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].kind(), folio::Kind::Howto);
}

#[test]
fn catalogue_survives_serde_roundtrip() {
    let catalogue = seed();
    let json = serde_json::to_string(&catalogue).unwrap();
    let restored: TypedCatalogue = serde_json::from_str(&json).unwrap();
    let before: Vec<_> = catalogue.iter().collect();
    let after: Vec<_> = restored.iter().collect();
    assert_eq!(before, after);
}

#[test]
fn no_match_is_an_empty_result() {
    let catalogue = seed();
    let hits = catalogue.find_of_kind(&fiction_query("1984", "Orwell", "George", 0, Genre::Classics));
    assert!(hits.is_empty());
}
