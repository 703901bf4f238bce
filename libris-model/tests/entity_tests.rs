use libris_model::{Author, Book, Magazine};

fn book(isbn: &str, title: &str) -> Book {
    Book::new(title, isbn, vec!["a@library.com".to_string()], "a description")
}

// ── ISBN-only equality ───────────────────────────────────────────

#[test]
fn books_with_same_isbn_are_equal_regardless_of_other_fields() {
    let a = book("111-222", "First Title");
    let b = Book::new("Completely Different", "111-222", vec![], "other");
    assert_eq!(a, b);
}

#[test]
fn books_with_different_isbn_are_unequal_even_if_otherwise_identical() {
    let a = book("111-222", "Same Title");
    let b = book("333-444", "Same Title");
    assert_ne!(a, b);
}

#[test]
fn magazines_with_same_isbn_are_equal() {
    let a = Magazine::new("Weekly", "555-666", vec![], "21.05.2011");
    let b = Magazine::new("Monthly", "555-666", vec!["x@y.z".to_string()], "01.01.1999");
    assert_eq!(a, b);
}

#[test]
fn magazines_with_different_isbn_are_unequal() {
    let a = Magazine::new("Weekly", "555-666", vec![], "21.05.2011");
    let b = Magazine::new("Weekly", "555-667", vec![], "21.05.2011");
    assert_ne!(a, b);
}

// ── Wire format ──────────────────────────────────────────────────

#[test]
fn book_serializes_with_plain_field_names() {
    let json = serde_json::to_value(book("111-222", "A Title")).unwrap();
    assert_eq!(json["title"], "A Title");
    assert_eq!(json["isbn"], "111-222");
    assert_eq!(json["authors"][0], "a@library.com");
    assert_eq!(json["description"], "a description");
}

#[test]
fn magazine_publication_date_is_camel_case_on_the_wire() {
    let json = serde_json::to_value(Magazine::new("Weekly", "1", vec![], "21.05.2011")).unwrap();
    assert_eq!(json["publicationDate"], "21.05.2011");
    assert!(json.get("publication_date").is_none());
}

#[test]
fn author_names_are_camel_case_on_the_wire() {
    let json = serde_json::to_value(Author::new("a@b.c", "Ada", "Lovelace")).unwrap();
    assert_eq!(json["firstName"], "Ada");
    assert_eq!(json["lastName"], "Lovelace");
}

#[test]
fn book_round_trips_through_json() {
    let original = book("111-222", "A Title");
    let back: Book = serde_json::from_str(&serde_json::to_string(&original).unwrap()).unwrap();
    assert_eq!(back.title, original.title);
    assert_eq!(back.authors, original.authors);
}

// ── Display ──────────────────────────────────────────────────────

#[test]
fn book_display_includes_all_fields() {
    let rendered = book("111-222", "A Title").to_string();
    assert!(rendered.contains("title='A Title'"));
    assert!(rendered.contains("isbn='111-222'"));
    assert!(rendered.contains("a@library.com"));
}
