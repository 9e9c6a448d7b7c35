use crate::Device;

#[derive(Debug)]
/// Devices of a catalog matching a free-text query.
///
/// Use `DeviceSearch::search` to filter a catalog.
pub struct DeviceSearch<'a> {
    /// Query as typed, before normalization.
    pub query: String,
    /// Matching devices, in catalog order.
    pub results: Vec<&'a Device>,
}

impl<'a> DeviceSearch<'a> {
    /// Filters `devices` down to the ones matching `query`.
    ///
    /// The query is trimmed and matched case-insensitively against the
    /// name, the year and the model. An empty query matches everything.
    pub fn search(devices: &'a [Device], query: &str) -> Self {
        let needle = normalize_query(query);
        let results = devices
            .iter()
            .filter(|device| matches(device, &needle))
            .collect::<Vec<_>>();

        tracing::debug!(
            query,
            matched = results.len(),
            total = devices.len(),
            "filtered catalog"
        );

        DeviceSearch {
            query: query.into(),
            results,
        }
    }
}

/// Trims and lowercases a raw query.
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Whether `device` matches an already normalized query.
pub fn matches(device: &Device, needle: &str) -> bool {
    device.name.to_lowercase().contains(needle)
        || device
            .year()
            .is_some_and(|year| year.to_string().contains(needle))
        || device
            .model()
            .is_some_and(|model| model.to_lowercase().contains(needle))
}

/// Looks a device up by key.
///
/// A slug match anywhere in the list wins over an id match; within each
/// kind the first match in list order is returned.
pub fn find_device<'a>(devices: &'a [Device], key: &str) -> Option<&'a Device> {
    devices
        .iter()
        .find(|device| device.slug() == Some(key))
        .or_else(|| {
            devices.iter().find(|device| {
                device
                    .id
                    .as_ref()
                    .is_some_and(|id| id.to_string() == key)
            })
        })
}
