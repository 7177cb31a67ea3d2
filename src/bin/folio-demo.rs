//! Demo harness: seeds the catalogues with sample data and prints search
//! results in the canonical textual form.
//!
//! Logging goes to stderr via `tracing-subscriber` (set `RUST_LOG` to see
//! catalogue scan events); search output goes to stdout.

use folio::{
    AttributeBag, BaseAttributes, Catalogue, CookbookAttributes, FictionAttributes, Genre,
    HowtoAttributes, Key, Kind, MatchMode, Record, Region, Subject, TypedCatalogue, TypedRecord,
    Value,
};
use tracing_subscriber::EnvFilter;

fn main() -> folio::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let presence = seed_presence()?;
    run_presence_queries(&presence)?;

    let sentinel = seed_sentinel()?;
    run_sentinel_queries(&sentinel)?;

    let typed = seed_typed();
    run_typed_queries(&typed);

    Ok(())
}

fn search(catalogue: &Catalogue, query: &AttributeBag) {
    println!("\nFind {query}");
    let matches = catalogue.find(query);
    if matches.is_empty() {
        println!("No matches.");
    } else {
        println!("Matches:");
        for record in matches {
            println!("  {record}");
        }
    }
}

fn search_typed(catalogue: &TypedCatalogue, query: &TypedRecord) {
    println!("\nFind {query}");
    let matches = catalogue.find_of_kind(query);
    if matches.is_empty() {
        println!("No matches.");
    } else {
        println!("Matches:");
        for record in matches {
            println!("  {record}");
        }
    }
}

// ---- Presence-mode catalogue (dynamic attribute bags) ----

fn fiction(
    title: &str,
    last: &str,
    first: &str,
    year: i64,
    genre: Genre,
) -> folio::Result<Record> {
    Ok(Record::new(AttributeBag::from_pairs([
        (Key::Kind, Value::Kind(Kind::Fiction)),
        (Key::Title, Value::from(title)),
        (Key::Last, Value::from(last)),
        (Key::First, Value::from(first)),
        (Key::Year, Value::Int(year)),
        (Key::Genre, Value::Genre(genre)),
    ])?))
}

fn cookbook(title: &str, last: &str, first: &str, region: Region) -> folio::Result<Record> {
    Ok(Record::new(AttributeBag::from_pairs([
        (Key::Kind, Value::Kind(Kind::Cookbook)),
        (Key::Title, Value::from(title)),
        (Key::Last, Value::from(last)),
        (Key::First, Value::from(first)),
        (Key::Region, Value::Region(region)),
    ])?))
}

fn howto(title: &str, last: &str, first: &str, subject: Subject) -> folio::Result<Record> {
    Ok(Record::new(AttributeBag::from_pairs([
        (Key::Kind, Value::Kind(Kind::Howto)),
        (Key::Title, Value::from(title)),
        (Key::Last, Value::from(last)),
        (Key::First, Value::from(first)),
        (Key::Subject, Value::Subject(subject)),
    ])?))
}

fn seed_presence() -> folio::Result<Catalogue> {
    let mut c = Catalogue::new(MatchMode::Presence);

    c.add(fiction("Life of Pi", "Martel", "Yann", 2003, Genre::Adventure)?);
    c.add(fiction("The Call of the Wild", "London", "Jack", 1903, Genre::Adventure)?);
    c.add(fiction("To Kill a Mockingbird", "Lee", "Harper", 1960, Genre::Classics)?);
    c.add(fiction("Little Women", "Alcott", "Louisa", 1868, Genre::Classics)?);
    c.add(fiction(
        "The Adventures of Sherlock Holmes",
        "Doyle",
        "Conan",
        1892,
        Genre::Detective,
    )?);
    c.add(fiction(
        "And Then There Were None",
        "Christie",
        "Agatha",
        1939,
        Genre::Detective,
    )?);
    c.add(fiction("Carrie", "King", "Stephen", 1974, Genre::Horror)?);
    c.add(fiction("It: A Novel", "King", "Stephen", 1986, Genre::Horror)?);
    c.add(fiction("Frankenstein", "Shelley", "Mary", 1818, Genre::Horror)?);
    c.add(fiction("2001: A Space Odyssey", "Clarke", "Arthur", 1968, Genre::SciFi)?);
    c.add(fiction("Ender's Game", "Card", "Orson", 1985, Genre::SciFi)?);

    c.add(cookbook("The Wok of Life", "Leung", "Bill", Region::China)?);
    c.add(cookbook("Chinese Cooking for Dummies", "Yan", "Martin", Region::China)?);
    c.add(cookbook(
        "Mastering the Art of French Cooking",
        "Child",
        "Julia",
        Region::France,
    )?);
    c.add(cookbook("Vegetarian India", "Jaffrey", "Madhur", Region::India)?);
    c.add(cookbook("Made in India", "Sodha", "Meera", Region::India)?);
    c.add(cookbook(
        "Essentials of Classic Italian Cooking",
        "Hazan",
        "Marcella",
        Region::Italy,
    )?);
    c.add(cookbook(
        "The Complete Italian Cookbook",
        "Mazzocco",
        "Manuela",
        Region::Italy,
    )?);
    c.add(cookbook("Food for Life", "Batmanglij", "Najmieh", Region::Persia)?);
    c.add(cookbook("The New Orleans Kitchen", "Devillier", "Justin", Region::Us)?);
    c.add(cookbook("Rodney Scott's World of BBQ", "Scott", "Rodney", Region::Us)?);

    c.add(howto(
        "On Writing: A Memoir of the Craft",
        "King",
        "Stephen",
        Subject::Writing,
    )?);

    tracing::info!(target: "folio::demo", records = c.len(), "Presence catalogue seeded");
    Ok(c)
}

fn run_presence_queries(c: &Catalogue) -> folio::Result<()> {
    search(
        c,
        &AttributeBag::from_pairs([
            (Key::Kind, Value::Kind(Kind::Fiction)),
            (Key::Title, Value::from("Life of Pi")),
            (Key::Last, Value::from("Martel")),
            (Key::First, Value::from("Yann")),
            (Key::Year, Value::Int(2003)),
            (Key::Genre, Value::Genre(Genre::Adventure)),
        ])?,
    );

    search(
        c,
        &AttributeBag::from_pairs([
            (Key::Kind, Value::Kind(Kind::Fiction)),
            (Key::Last, Value::from("KING")),
            (Key::Genre, Value::Genre(Genre::Horror)),
        ])?,
    );

    search(
        c,
        &AttributeBag::from_pairs([
            (Key::Kind, Value::Kind(Kind::Fiction)),
            (Key::Title, Value::from("1984")),
            (Key::Last, Value::from("Orwell")),
            (Key::First, Value::from("George")),
            (Key::Genre, Value::Genre(Genre::Classics)),
        ])?,
    );

    search(
        c,
        &AttributeBag::from_pairs([
            (Key::Kind, Value::Kind(Kind::Fiction)),
            (Key::Year, Value::Int(1960)),
            (Key::Genre, Value::Genre(Genre::Romance)),
        ])?,
    );

    search(
        c,
        &AttributeBag::from_pairs([
            (Key::Kind, Value::Kind(Kind::Fiction)),
            (Key::Year, Value::Int(1960)),
        ])?,
    );

    search(
        c,
        &AttributeBag::from_pairs([
            (Key::Kind, Value::Kind(Kind::Fiction)),
            (Key::Genre, Value::Genre(Genre::SciFi)),
        ])?,
    );

    search(
        c,
        &AttributeBag::from_pairs([(Key::Kind, Value::Kind(Kind::Fiction))])?,
    );

    search(
        c,
        &AttributeBag::from_pairs([
            (Key::Kind, Value::Kind(Kind::Cookbook)),
            (Key::Title, Value::from("Mastering the Art of French Cooking")),
            (Key::Last, Value::from("Child")),
            (Key::First, Value::from("Julia")),
            (Key::Region, Value::Region(Region::France)),
        ])?,
    );

    search(
        c,
        &AttributeBag::from_pairs([(Key::Region, Value::Region(Region::China))])?,
    );

    search(
        c,
        &AttributeBag::from_pairs([
            (Key::Kind, Value::Kind(Kind::Cookbook)),
            (Key::Last, Value::from("Leung")),
            (Key::Region, Value::Region(Region::Mexico)),
        ])?,
    );

    search(
        c,
        &AttributeBag::from_pairs([
            (Key::Kind, Value::Kind(Kind::Cookbook)),
            (Key::Last, Value::from("Scott")),
            (Key::First, Value::from("Rodney")),
        ])?,
    );

    search(
        c,
        &AttributeBag::from_pairs([(Key::Last, Value::from("King"))])?,
    );

    Ok(())
}

// ---- Sentinel-mode catalogue (fixed five-field book records) ----

fn book(title: &str, last: &str, first: &str, year: i64, genre: Genre) -> folio::Result<Record> {
    Ok(Record::new(AttributeBag::from_pairs([
        (Key::Title, Value::from(title)),
        (Key::Last, Value::from(last)),
        (Key::First, Value::from(first)),
        (Key::Year, Value::Int(year)),
        (Key::Genre, Value::Genre(genre)),
    ])?))
}

fn book_query(
    title: &str,
    last: &str,
    first: &str,
    year: i64,
    genre: Genre,
) -> folio::Result<AttributeBag> {
    AttributeBag::from_pairs([
        (Key::Title, Value::from(title)),
        (Key::Last, Value::from(last)),
        (Key::First, Value::from(first)),
        (Key::Year, Value::Int(year)),
        (Key::Genre, Value::Genre(genre)),
    ])
}

fn seed_sentinel() -> folio::Result<Catalogue> {
    let mut c = Catalogue::new(MatchMode::Sentinel);

    c.add(book("Life of Pi", "Martel", "Yann", 2003, Genre::Adventure)?);
    c.add(book("The Call of the Wild", "London", "Jack", 1903, Genre::Adventure)?);
    c.add(book("To Kill a Mockingbird", "Lee", "Harper", 1960, Genre::Classics)?);
    c.add(book("Little Women", "Alcott", "Louisa", 1868, Genre::Classics)?);
    c.add(book(
        "The Adventures of Sherlock Holmes",
        "Doyle",
        "Conan",
        1892,
        Genre::Detective,
    )?);
    c.add(book(
        "And Then There Were None",
        "Christie",
        "Agatha",
        1939,
        Genre::Detective,
    )?);
    c.add(book("Carrie", "King", "Stephen", 1974, Genre::Horror)?);
    c.add(book("It: A Novel", "King", "Stephen", 1986, Genre::Horror)?);
    c.add(book("Frankenstein", "Shelley", "Mary", 1818, Genre::Horror)?);
    c.add(book("2001: A Space Odyssey", "Clarke", "Arthur", 1968, Genre::SciFi)?);
    c.add(book("Ender's Game", "Card", "Orson", 1985, Genre::SciFi)?);

    tracing::info!(target: "folio::demo", records = c.len(), "Sentinel catalogue seeded");
    Ok(c)
}

fn run_sentinel_queries(c: &Catalogue) -> folio::Result<()> {
    search(c, &book_query("Life of Pi", "Martel", "Yann", 2003, Genre::Adventure)?);
    search(c, &book_query("", "King", "", 0, Genre::Horror)?);
    search(c, &book_query("1984", "Orwell", "George", 0, Genre::Classics)?);
    search(c, &book_query("", "", "", 1960, Genre::Romance)?);
    search(c, &book_query("", "", "", 1960, Genre::Unspecified)?);
    search(c, &book_query("", "", "", 0, Genre::SciFi)?);
    search(c, &book_query("", "", "", 0, Genre::Unspecified)?);
    Ok(())
}

// ---- Typed catalogue (tagged-variant records) ----

fn seed_typed() -> TypedCatalogue {
    let mut c = TypedCatalogue::new();

    c.add(TypedRecord::Fiction(FictionAttributes::new(
        BaseAttributes::new("Life of Pi", "Martel", "Yann"),
        2003,
        Genre::Adventure,
    )));
    c.add(TypedRecord::Fiction(FictionAttributes::new(
        BaseAttributes::new("The Call of the Wild", "London", "Jack"),
        1903,
        Genre::Adventure,
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

    tracing::info!(target: "folio::demo", records = c.len(), "Typed catalogue seeded");
    c
}

fn run_typed_queries(c: &TypedCatalogue) {
    search_typed(
        c,
        &TypedRecord::Fiction(FictionAttributes::new(
            BaseAttributes::new("Life", "Martel", "Yann"),
            2003,
            Genre::Adventure,
        )),
    );

    search_typed(
        c,
        &TypedRecord::Fiction(FictionAttributes::new(
            BaseAttributes::new("", "King", ""),
            0,
            Genre::Horror,
        )),
    );

    search_typed(
        c,
        &TypedRecord::Cookbook(CookbookAttributes::new(
            BaseAttributes::new("Mastering the Art of French Cooking", "Child", "Julia"),
            Region::France,
        )),
    );

    search_typed(
        c,
        &TypedRecord::Howto(HowtoAttributes::new(
            BaseAttributes::new("", "King", ""),
            Subject::Unspecified,
        )),
    );
}
