use super::{body_string, get};
use crate::crawler::{CrawlParams, Crawler, ScraperType};
use crate::db::{insert_listing, Database};
use crate::responses::INTERNAL_ERROR_MESSAGE;
use crate::router::AppState;
use crate::templates::Templates;
use crate::tests::utils::{make_db, new_listing, results_page, templates_config, AdFixture, FakeBrowser, FakePage};

fn state(db: Database, stylesheet: Option<&str>) -> AppState {
    AppState {
        db,
        templates: Templates::new(&templates_config(stylesheet)),
    }
}

#[test]
fn empty_store_renders_empty_page() {
    let (_dir, db) = make_db();

    let mut resp = get("/", &state(db, None));

    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "text/html; charset=utf-8"
    );
    let body = body_string(&mut resp);
    assert!(body.starts_with("<!DOCTYPE html>"));
    assert!(body.contains("No listings scraped yet."));
}

#[test]
fn renders_every_stored_listing() {
    let (_dir, db) = make_db();
    db.with_conn(|conn| {
        insert_listing(conn, &new_listing("Flat A"))?;
        insert_listing(conn, &new_listing("Flat <B>"))?;
        Ok(())
    })
    .unwrap();

    let mut resp = get("/", &state(db, Some("listings.css")));

    assert_eq!(resp.status(), 200);
    let body = body_string(&mut resp);
    assert!(body.contains("Flat A"));
    assert!(body.contains("Flat &lt;B&gt;"), "titles must be escaped");
    assert!(body.contains("http://x/img.jpg"));
    assert!(body.contains("grid-template-columns"), "stylesheet is inlined");
}

#[test]
fn crawled_listing_is_served_unmodified() {
    let (_dir, db) = make_db();
    let page = results_page(&[AdFixture {
        title: "Flat A",
        address: "Prague 1",
        price: "10000",
        link: "/detail/1",
        image: "http://x/img.jpg",
    }
    .to_html()]);
    let url = "https://www.sreality.cz/byty?page=1";
    let browser = FakeBrowser::default().with_page(url, FakePage::Ready(page));

    let mut crawler = Crawler::new(ScraperType::Sreality.spider(), browser, db.connect().unwrap());
    crawler.run(&CrawlParams {
        base_url: "https://www.sreality.cz".to_string(),
        path: "/byty".to_string(),
        pages: 1,
    });
    drop(crawler);

    let mut resp = get("/", &state(db, None));

    assert_eq!(resp.status(), 200);
    let body = body_string(&mut resp);
    assert!(body.contains("Flat A"));
    assert!(body.contains("Prague 1"));
    assert!(body.contains("10000"));
    assert!(body.contains(r#"src="http://x/img.jpg""#));
    assert!(body.contains("APARTMENT"));
}

#[test]
fn store_failure_is_an_opaque_500() {
    let db = Database::new("/nonexistent-dir/for/sure/listings.sqlite");

    let mut resp = get("/", &state(db, None));

    assert_eq!(resp.status(), 500);
    let body = body_string(&mut resp);
    assert!(body.contains(INTERNAL_ERROR_MESSAGE));
    assert!(!body.contains("nonexistent-dir"));
    assert!(!body.to_lowercase().contains("database"));
}

#[test]
fn unknown_template_is_an_opaque_500() {
    let (_dir, db) = make_db();
    let mut config = templates_config(None);
    config.listings = "missing.html".to_string();
    let state = AppState {
        db,
        templates: Templates::new(&config),
    };

    let mut resp = get("/", &state);

    assert_eq!(resp.status(), 500);
    let body = body_string(&mut resp);
    assert!(body.contains(INTERNAL_ERROR_MESSAGE));
    assert!(!body.contains("missing.html"));
}

#[test]
fn missing_stylesheet_is_an_opaque_500() {
    let (_dir, db) = make_db();

    let resp = get("/", &state(db, Some("does-not-exist.css")));

    assert_eq!(resp.status(), 500);
}

#[test]
fn table_template_lists_rows() {
    let (_dir, db) = make_db();
    db.with_conn(|conn| insert_listing(conn, &new_listing("Flat A")))
        .unwrap();
    let mut config = templates_config(None);
    config.listings = "listings_table.html".to_string();
    let state = AppState {
        db,
        templates: Templates::new(&config),
    };

    let mut resp = get("/", &state);

    assert_eq!(resp.status(), 200);
    let body = body_string(&mut resp);
    assert!(body.contains("<table"));
    assert!(body.contains("Flat A"));
}

#[test]
fn unknown_route_is_404() {
    let (_dir, db) = make_db();

    let mut resp = get("/admin", &state(db, None));

    assert_eq!(resp.status(), 404);
    assert!(body_string(&mut resp).contains("Not Found"));
}

#[test]
fn request_against_missing_store_leaves_no_file_behind() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("listings.sqlite");

    let resp = get("/", &state(Database::new(&path), None));

    assert_eq!(resp.status(), 500);
    assert!(!path.exists());
}
