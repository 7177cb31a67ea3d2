//! Shared seed data and harness helpers for the catalogue tests

use folio::{
    AttributeBag, Catalogue, Genre, Key, Kind, MatchMode, Record, Region, Subject, Value,
};

pub fn fiction(title: &str, last: &str, first: &str, year: i64, genre: Genre) -> Record {
    Record::new(
        AttributeBag::from_pairs([
            (Key::Kind, Value::Kind(Kind::Fiction)),
            (Key::Title, Value::from(title)),
            (Key::Last, Value::from(last)),
            (Key::First, Value::from(first)),
            (Key::Year, Value::Int(year)),
            (Key::Genre, Value::Genre(genre)),
        ])
        .expect("seed data is schema-correct"),
    )
}

pub fn cookbook(title: &str, last: &str, first: &str, region: Region) -> Record {
    Record::new(
        AttributeBag::from_pairs([
            (Key::Kind, Value::Kind(Kind::Cookbook)),
            (Key::Title, Value::from(title)),
            (Key::Last, Value::from(last)),
            (Key::First, Value::from(first)),
            (Key::Region, Value::Region(region)),
        ])
        .expect("seed data is schema-correct"),
    )
}

pub fn howto(title: &str, last: &str, first: &str, subject: Subject) -> Record {
    Record::new(
        AttributeBag::from_pairs([
            (Key::Kind, Value::Kind(Kind::Howto)),
            (Key::Title, Value::from(title)),
            (Key::Last, Value::from(last)),
            (Key::First, Value::from(first)),
            (Key::Subject, Value::Subject(subject)),
        ])
        .expect("seed data is schema-correct"),
    )
}

/// Five-field book record for the sentinel-mode catalogue
pub fn book(title: &str, last: &str, first: &str, year: i64, genre: Genre) -> Record {
    Record::new(
        AttributeBag::from_pairs([
            (Key::Title, Value::from(title)),
            (Key::Last, Value::from(last)),
            (Key::First, Value::from(first)),
            (Key::Year, Value::Int(year)),
            (Key::Genre, Value::Genre(genre)),
        ])
        .expect("seed data is schema-correct"),
    )
}

/// Five-field query with explicit sentinels, mirroring `book`
pub fn book_query(title: &str, last: &str, first: &str, year: i64, genre: Genre) -> AttributeBag {
    AttributeBag::from_pairs([
        (Key::Title, Value::from(title)),
        (Key::Last, Value::from(last)),
        (Key::First, Value::from(first)),
        (Key::Year, Value::Int(year)),
        (Key::Genre, Value::Genre(genre)),
    ])
    .expect("query data is schema-correct")
}

/// The mixed presence-mode seed list (insertion order matters)
pub fn seed_presence() -> Catalogue {
    let mut c = Catalogue::new(MatchMode::Presence);
    c.add(fiction("Life of Pi", "Martel", "Yann", 2003, Genre::Adventure));
    c.add(fiction("The Call of the Wild", "London", "Jack", 1903, Genre::Adventure));
    c.add(fiction("To Kill a Mockingbird", "Lee", "Harper", 1960, Genre::Classics));
    c.add(fiction("Little Women", "Alcott", "Louisa", 1868, Genre::Classics));
    c.add(fiction("Carrie", "King", "Stephen", 1974, Genre::Horror));
    c.add(fiction("It: A Novel", "King", "Stephen", 1986, Genre::Horror));
    c.add(fiction("2001: A Space Odyssey", "Clarke", "Arthur", 1968, Genre::SciFi));
    c.add(cookbook("The Wok of Life", "Leung", "Bill", Region::China));
    c.add(cookbook(
        "Mastering the Art of French Cooking",
        "Child",
        "Julia",
        Region::France,
    ));
    c.add(howto(
        "On Writing: A Memoir of the Craft",
        "King",
        "Stephen",
        Subject::Writing,
    ));
    c
}

/// The fixed-field sentinel-mode seed list
pub fn seed_sentinel() -> Catalogue {
    let mut c = Catalogue::new(MatchMode::Sentinel);
    c.add(book("Life of Pi", "Martel", "Yann", 2003, Genre::Adventure));
    c.add(book("The Call of the Wild", "London", "Jack", 1903, Genre::Adventure));
    c.add(book("To Kill a Mockingbird", "Lee", "Harper", 1960, Genre::Classics));
    c.add(book("Little Women", "Alcott", "Louisa", 1868, Genre::Classics));
    c.add(book("Carrie", "King", "Stephen", 1974, Genre::Horror));
    c.add(book("It: A Novel", "King", "Stephen", 1986, Genre::Horror));
    c.add(book("Frankenstein", "Shelley", "Mary", 1818, Genre::Horror));
    c.add(book("2001: A Space Odyssey", "Clarke", "Arthur", 1968, Genre::SciFi));
    c.add(book("Ender's Game", "Card", "Orson", 1985, Genre::SciFi));
    c
}

/// Render a search the way the harness prints it
pub fn render_search(catalogue: &Catalogue, query: &AttributeBag) -> String {
    let mut out = format!("Find {query}\n");
    let matches = catalogue.find(query);
    if matches.is_empty() {
        out.push_str("No matches.\n");
    } else {
        out.push_str("Matches:\n");
        for record in matches {
            out.push_str(&format!("  {record}\n"));
        }
    }
    out
}

/// Titles of the matched records, in result order
pub fn titles(matches: &[&Record]) -> Vec<String> {
    matches
        .iter()
        .map(|r| {
            r.attributes()
                .get(Key::Title)
                .and_then(|v| v.as_text())
                .unwrap_or_default()
                .to_string()
        })
        .collect()
}
