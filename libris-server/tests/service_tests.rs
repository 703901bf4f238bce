use libris_model::{Book, Order};
use libris_server::CatalogService;
use libris_store::DocumentStore;

fn test_service() -> CatalogService<Book> {
    let store = DocumentStore::open_in_memory().unwrap();
    CatalogService::new(store.collection("books", "isbn").unwrap())
}

fn book(isbn: &str, title: &str, authors: &[&str]) -> Book {
    Book::new(
        title,
        isbn,
        authors.iter().map(|a| a.to_string()).collect(),
        "",
    )
}

#[test]
fn find_all_uses_native_order_without_implicit_sort() {
    let books = test_service();
    books.create(&book("2", "zebra", &[])).unwrap();
    books.create(&book("1", "aardvark", &[])).unwrap();

    let titles: Vec<_> = books
        .find_all()
        .unwrap()
        .into_iter()
        .map(|b| b.title)
        .collect();
    assert_eq!(titles, ["zebra", "aardvark"]);
}

#[test]
fn find_by_isbn_absent_is_none() {
    let books = test_service();
    assert!(books.find_by_isbn("404").unwrap().is_none());
}

#[test]
fn ordered_queries_are_exact_reversals_for_distinct_titles() {
    let books = test_service();
    for (isbn, title) in [("1", "m"), ("2", "a"), ("3", "z"), ("4", "q")] {
        books.create(&book(isbn, title, &[])).unwrap();
    }

    let asc = books.find_ordered_by_title(Order::Ascending).unwrap();
    let mut desc = books.find_ordered_by_title(Order::Descending).unwrap();
    desc.reverse();

    let asc_isbns: Vec<_> = asc.into_iter().map(|b| b.isbn).collect();
    let desc_isbns: Vec<_> = desc.into_iter().map(|b| b.isbn).collect();
    assert_eq!(asc_isbns, desc_isbns);
}

#[test]
fn find_by_author_excludes_non_verbatim_tokens() {
    let books = test_service();
    books
        .create(&book("1", "One", &["author2@library.com"]))
        .unwrap();
    books
        .create(&book("2", "Two", &[" author2@library.com"]))
        .unwrap();

    // The untrimmed token from the naive comma split is a different element.
    let hits = books.find_by_author("author2@library.com").unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].isbn, "1");
}

#[test]
fn create_propagates_duplicate_isbn() {
    let books = test_service();
    books.create(&book("1", "One", &[])).unwrap();
    let err = books.create(&book("1", "Other", &[])).unwrap_err();
    assert!(err.is_duplicate_key());
}
