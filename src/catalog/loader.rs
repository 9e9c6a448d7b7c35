use crate::{Config, Device};
use eyre::{bail, eyre, Result, WrapErr};
use reqwest::Client;
use url::Url;

#[derive(Debug, Clone)]
/// Retrieves the catalog document.
///
/// `http` and `https` URLs are fetched over the network, `file` URLs are
/// read from disk.
pub struct CatalogLoader {
    url: Url,
}

impl CatalogLoader {
    /// Loader for the catalog document configured in `config`.
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self::from_url(config.data_url()?))
    }

    pub fn from_url(url: Url) -> Self {
        CatalogLoader { url }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Fetches and parses the catalog.
    ///
    /// ```rust,no_run
    /// use device_catalog::{CatalogLoader, Url};
    ///
    /// #[tokio::main]
    /// async fn main() -> eyre::Result<()> {
    ///     let loader = CatalogLoader::from_url(Url::parse("https://example.org/data/devices.json")?);
    ///     let devices = loader.fetch().await?;
    ///     println!("{} devices", devices.len());
    ///     Ok(())
    /// }
    /// ```
    pub async fn fetch(&self) -> Result<Vec<Device>> {
        tracing::debug!(url = %self.url, "fetching catalog");

        let body = match self.url.scheme() {
            "file" => {
                let path = self
                    .url
                    .to_file_path()
                    .map_err(|_| eyre!("Invalid file URL: {}", self.url))?;
                tokio::fs::read_to_string(&path)
                    .await
                    .wrap_err_with(|| format!("Could not read catalog {}", path.display()))?
            }
            "http" | "https" => {
                let client = Client::builder()
                    .default_headers(crate::build_headers())
                    .build()?;
                let response = client
                    .get(self.url.to_owned())
                    .send()
                    .await?
                    .error_for_status()
                    .wrap_err("Catalog request was not successful")?;
                response.text().await?
            }
            scheme => bail!("Unsupported catalog URL scheme `{}`", scheme),
        };

        let devices: Vec<Device> =
            serde_json::from_str(&body).wrap_err("Catalog is not a list of devices")?;
        Ok(devices)
    }
}
