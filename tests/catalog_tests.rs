//! Book and reader registry flows

mod common;

use biblioteca::{
    error::AppError,
    models::{book::CreateBook, reader::CreateReader},
};

#[tokio::test]
async fn registered_book_is_listed_and_searchable() {
    let app = common::setup().await;
    let admin = common::admin_session();

    let book = app
        .services
        .books
        .register(
            &admin,
            CreateBook {
                title: "Dune".to_string(),
                author: "Herbert".to_string(),
                year: 1965,
            },
        )
        .await
        .unwrap();
    assert!(book.available);
    assert_eq!(book.availability_label(), "Available");

    let listed = app.services.books.list().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].title, "Dune");
    assert_eq!(listed[0].year, 1965);

    // Case-insensitive substring match on title or author
    let by_title = app.services.books.search("dune").await.unwrap();
    assert_eq!(by_title.len(), 1);
    let by_author = app.services.books.search("herb").await.unwrap();
    assert_eq!(by_author.len(), 1);

    // No match is an empty result, not an error
    let no_match = app.services.books.search("nomatch").await.unwrap();
    assert!(no_match.is_empty());
}

#[tokio::test]
async fn invalid_book_touches_no_storage() {
    let app = common::setup().await;
    let admin = common::admin_session();

    let err = app
        .services
        .books
        .register(
            &admin,
            CreateBook {
                title: "".to_string(),
                author: "Herbert".to_string(),
                year: 1965,
            },
        )
        .await
        .expect_err("empty title must fail validation");
    assert!(matches!(err, AppError::Validation(_)));

    assert!(app.services.books.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn book_registration_is_audited() {
    let app = common::setup().await;
    let admin = common::admin_session();

    app.services
        .books
        .register(
            &admin,
            CreateBook {
                title: "Dune".to_string(),
                author: "Herbert".to_string(),
                year: 1965,
            },
        )
        .await
        .unwrap();

    let log = std::fs::read_to_string(&app.audit_path).unwrap();
    assert!(log.contains("[admin] Book registered: Dune"));
}

#[tokio::test]
async fn registered_reader_is_listed_and_searchable() {
    let app = common::setup().await;
    let admin = common::admin_session();

    let reader = app
        .services
        .readers
        .register(
            &admin,
            CreateReader {
                name: "Paul Atreides".to_string(),
                category: "student".to_string(),
            },
        )
        .await
        .unwrap();
    assert_eq!(reader.name, "Paul Atreides");

    let listed = app.services.readers.list().await.unwrap();
    assert_eq!(listed.len(), 1);

    let found = app.services.readers.search("paul").await.unwrap();
    assert_eq!(found.len(), 1);

    let none = app.services.readers.search("nomatch").await.unwrap();
    assert!(none.is_empty());
}

#[tokio::test]
async fn invalid_reader_touches_no_storage() {
    let app = common::setup().await;
    let admin = common::admin_session();

    let err = app
        .services
        .readers
        .register(
            &admin,
            CreateReader {
                name: "Paul".to_string(),
                category: "".to_string(),
            },
        )
        .await
        .expect_err("empty category must fail validation");
    assert!(matches!(err, AppError::Validation(_)));

    assert!(app.services.readers.list().await.unwrap().is_empty());
}
