use libris_ingest::Record;
use libris_ingest::mappers::{author_from_record, book_from_record, magazine_from_record};

#[test]
fn book_record_maps_field_for_field() {
    let record = Record::from_pairs([
        ("Titel", "a title"),
        ("ISBN-Nummer", "111-234-340"),
        ("Autoren", "a@x.com,b@x.com"),
        ("Kurzbeschreibung", "d"),
    ]);
    let book = book_from_record(&record);
    assert_eq!(book.title, "a title");
    assert_eq!(book.isbn, "111-234-340");
    assert_eq!(book.authors, ["a@x.com", "b@x.com"]);
    assert_eq!(book.description, "d");
}

#[test]
fn book_mapping_is_deterministic() {
    let record = Record::from_pairs([
        ("Titel", "a title"),
        ("ISBN-Nummer", "111-234-340"),
        ("Autoren", "a@x.com"),
        ("Kurzbeschreibung", "d"),
    ]);
    let first = book_from_record(&record);
    let second = book_from_record(&record);
    assert_eq!(first.title, second.title);
    assert_eq!(first.authors, second.authors);
    assert_eq!(first.description, second.description);
}

#[test]
fn author_tokens_keep_surrounding_whitespace() {
    // The comma split is naive on purpose; tokens are not trimmed.
    let record = Record::from_pairs([("Autoren", "a@x.com, b@x.com")]);
    let book = book_from_record(&record);
    assert_eq!(book.authors, ["a@x.com", " b@x.com"]);
}

#[test]
fn missing_optional_column_yields_empty_field() {
    let record = Record::from_pairs([("Titel", "no description"), ("ISBN-Nummer", "1")]);
    let book = book_from_record(&record);
    assert_eq!(book.description, "");
    assert_eq!(book.title, "no description");
}

#[test]
fn magazine_record_uses_its_own_column_names() {
    let record = Record::from_pairs([
        ("Titel", "a magazine"),
        ("ISBN-Nummer", "222-111"),
        ("Autor", "a@x.com,b@x.com"),
        ("Erscheinungsdatum", "21.05.2011"),
    ]);
    let magazine = magazine_from_record(&record);
    assert_eq!(magazine.title, "a magazine");
    assert_eq!(magazine.isbn, "222-111");
    assert_eq!(magazine.authors, ["a@x.com", "b@x.com"]);
    assert_eq!(magazine.publication_date, "21.05.2011");
}

#[test]
fn author_record_maps_name_fields() {
    let record = Record::from_pairs([
        ("Emailadresse", "ada@library.com"),
        ("Vorname", "Ada"),
        ("Nachname", "Lovelace"),
    ]);
    let author = author_from_record(&record);
    assert_eq!(author.email, "ada@library.com");
    assert_eq!(author.first_name, "Ada");
    assert_eq!(author.last_name, "Lovelace");
}

#[test]
fn empty_author_field_yields_one_empty_token() {
    // "".split(',') has one empty element; preserved for parity with the
    // source format's behavior.
    let record = Record::from_pairs([("Autoren", "")]);
    let book = book_from_record(&record);
    assert_eq!(book.authors, [""]);
}
