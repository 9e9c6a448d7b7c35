//! Browse a catalog of devices.
//!
//! `CatalogLoader` fetches the catalog document (a JSON list of devices),
//! `CatalogView` keeps the loaded catalog and renders it into a host `Page`:
//! a searchable card grid on the listing page and a single device on the
//! detail page. Everything taken from the catalog is escaped before it is
//! written as markup.

mod catalog;
mod config;
mod device;
pub mod render;
pub mod search;
use header::{HeaderMap, HeaderValue};
pub use catalog::{CatalogLoader, CatalogView, Container, LoadState, Page, LOAD_ERROR};
pub use config::{load_config, Config};
pub use device::{Device, DeviceId, Specs, Year};
use reqwest::header;
pub use search::DeviceSearch;
pub use url::Url;

/// Builds the default headers for the client.
fn build_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::USER_AGENT,
        HeaderValue::from_static(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        )),
    );
    headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
    headers
}
