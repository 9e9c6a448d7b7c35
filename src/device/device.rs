use crate::device::scalar::{lenient, lenient_list, lenient_text};
use crate::device::{DeviceId, Specs, Year};
use serde::Deserialize;

#[derive(Default, Debug, Clone, PartialEq, Deserialize)]
/// One entry of the device catalog.
///
/// Only `name` is required. Everything else may be missing from the
/// catalog document, in which case the matching part of the page is left out.
pub struct Device {
    /// Opaque identifier, numeric or textual.
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<DeviceId>,
    /// Stable URL-safe key, preferred over `id` for links.
    #[serde(default, deserialize_with = "lenient_text")]
    pub slug: Option<String>,
    /// Display name of the device.
    pub name: String,
    /// Model designation, e.g. `M8541`.
    #[serde(default, deserialize_with = "lenient_text")]
    pub model: Option<String>,
    /// Year the device came out.
    #[serde(default, deserialize_with = "lenient")]
    pub year: Option<Year>,
    /// Human readable release date.
    #[serde(default, deserialize_with = "lenient_text")]
    pub released: Option<String>,
    /// Free-form description.
    #[serde(default, deserialize_with = "lenient_text")]
    pub description: Option<String>,
    /// URL of the device image.
    #[serde(default, deserialize_with = "lenient_text")]
    pub image: Option<String>,
    /// Hardware and software attributes.
    #[serde(default, deserialize_with = "lenient")]
    pub specs: Option<Specs>,
    /// Trivia about the device.
    #[serde(default, deserialize_with = "lenient_list")]
    pub fun_facts: Option<Vec<String>>,
    /// URLs the information was taken from.
    #[serde(default, deserialize_with = "lenient_list")]
    pub sources: Option<Vec<String>>,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|value| !value.is_empty())
}

impl Device {
    pub fn model(&self) -> Option<&str> {
        non_empty(&self.model)
    }

    pub fn year(&self) -> Option<&Year> {
        self.year.as_ref().filter(|year| !year.is_empty())
    }

    pub fn released(&self) -> Option<&str> {
        non_empty(&self.released)
    }

    pub fn description(&self) -> Option<&str> {
        non_empty(&self.description)
    }

    pub fn image(&self) -> Option<&str> {
        non_empty(&self.image)
    }

    pub fn slug(&self) -> Option<&str> {
        non_empty(&self.slug)
    }

    /// Sources worth listing, `None` when there are none.
    pub fn sources(&self) -> Option<&[String]> {
        self.sources
            .as_deref()
            .filter(|sources| !sources.is_empty())
    }

    /// Key used to link to the detail page: the slug, else the id.
    pub fn link_key(&self) -> Option<String> {
        self.slug()
            .map(String::from)
            .or_else(|| self.id.as_ref().map(|id| id.to_string()))
    }
}
