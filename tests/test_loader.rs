//! Loading catalogs from disk and the view state that follows.

use device_catalog::{CatalogLoader, CatalogView, Config, LoadState, Page, Url, LOAD_ERROR};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

fn bundled_catalog() -> CatalogLoader {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/devices.json");
    CatalogLoader::from_url(Url::from_file_path(path).unwrap())
}

fn catalog_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[tokio::test]
async fn fetches_the_bundled_catalog() {
    let devices = bundled_catalog().fetch().await.unwrap();

    assert_eq!(devices.len(), 3);
    assert_eq!(devices[0].slug(), Some("imac-g3"));
    assert_eq!(devices[2].id.as_ref().unwrap().to_string(), "newton-mp100");
}

#[tokio::test]
async fn missing_file_is_an_error() {
    let loader = CatalogLoader::from_url(Url::parse("file:///nonexistent/devices.json").unwrap());
    let err = loader.fetch().await.unwrap_err();
    assert!(err.to_string().contains("Could not read catalog"));
}

#[tokio::test]
async fn malformed_catalog_is_an_error() {
    let file = catalog_file(r#"{ "devices": [] }"#);
    let loader = CatalogLoader::from_url(Url::from_file_path(file.path()).unwrap());
    let err = loader.fetch().await.unwrap_err();
    assert!(err.to_string().contains("not a list of devices"));
}

#[tokio::test]
async fn unsupported_scheme_is_an_error() {
    let loader = CatalogLoader::from_url(Url::parse("ftp://example.org/devices.json").unwrap());
    assert!(loader.fetch().await.is_err());
}

#[test]
fn loader_resolves_data_path_against_base_url() {
    let config = Config {
        base_url: Url::parse("https://example.org/museum/").unwrap(),
        ..Default::default()
    };
    let loader = CatalogLoader::new(&config).unwrap();
    assert_eq!(
        loader.url().as_str(),
        "https://example.org/museum/data/devices.json"
    );
}

#[tokio::test]
async fn queued_detail_request_is_served_after_load() {
    let mut view = CatalogView::new(Config::default(), Page::detail());
    view.render_detail("ipod-classic");
    view.load(&bundled_catalog()).await;

    assert_eq!(view.state(), LoadState::Ready);
    assert!(view.page().detail_html().contains("<h2>iPod — M8541</h2>"));
}

#[tokio::test]
async fn failed_load_shows_error_and_ignores_details() {
    let loader = CatalogLoader::from_url(Url::parse("file:///nonexistent/devices.json").unwrap());
    let mut view = CatalogView::new(
        Config::default(),
        Page {
            list: Some(Default::default()),
            search_input: true,
            detail: Some(Default::default()),
        },
    );
    view.render_detail("imac-g3");
    view.load(&loader).await;

    assert_eq!(view.state(), LoadState::Failed);
    assert_eq!(view.page().list_html(), LOAD_ERROR);
    assert_eq!(view.page().detail_html(), "");
    assert!(view.devices().is_empty());

    view.render_detail("imac-g3");
    view.search("imac");
    assert_eq!(view.page().detail_html(), "");
    assert_eq!(view.page().list_html(), LOAD_ERROR);
}

#[tokio::test]
async fn load_runs_only_once() {
    let mut view = CatalogView::new(Config::default(), Page::listing(false));
    view.load(&bundled_catalog()).await;

    let other = catalog_file(r#"[{ "name": "Walkman" }]"#);
    view.load(&CatalogLoader::from_url(Url::from_file_path(other.path()).unwrap()))
        .await;

    assert_eq!(view.devices().len(), 3);
}

#[tokio::test]
async fn mistyped_field_does_not_fail_the_catalog() {
    let file = catalog_file(
        r#"[
            { "slug": "a", "name": "Good" },
            { "slug": "b", "name": "Odd", "released": 1998, "specs": { "ram": 512 } }
        ]"#,
    );
    let loader = CatalogLoader::from_url(Url::from_file_path(file.path()).unwrap());
    let mut view = CatalogView::new(
        Config::default(),
        Page {
            list: Some(Default::default()),
            search_input: false,
            detail: Some(Default::default()),
        },
    );
    view.render_detail("b");
    view.load(&loader).await;

    assert_eq!(view.state(), LoadState::Ready);
    assert_eq!(view.devices().len(), 2);
    assert_eq!(view.page().list_html().matches(r#"class="card""#).count(), 2);
    assert!(view.page().detail_html().contains("<dt>RAM</dt><dd>512</dd>"));
    assert!(view.page().detail_html().contains("Released: 1998"));
}
