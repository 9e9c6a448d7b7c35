use crate::device::scalar::{lenient_list, lenient_text};
use serde::Deserialize;

#[derive(Default, Debug, Clone, PartialEq, Deserialize)]
/// Hardware and software attributes of a device.
///
/// Every field is optional; only the ones present end up on the detail page.
pub struct Specs {
    /// Storage configurations offered, e.g. `["5 GB", "10 GB"]`.
    #[serde(default, deserialize_with = "lenient_list")]
    pub storage_options: Option<Vec<String>>,
    /// Screen description.
    #[serde(default, deserialize_with = "lenient_text")]
    pub display: Option<String>,
    /// Processor.
    #[serde(default, deserialize_with = "lenient_text")]
    pub cpu: Option<String>,
    /// Memory.
    #[serde(default, deserialize_with = "lenient_text")]
    pub ram: Option<String>,
    /// Battery type or life.
    #[serde(default, deserialize_with = "lenient_text")]
    pub battery: Option<String>,
    /// Operating system the device shipped with.
    #[serde(default, deserialize_with = "lenient_text")]
    pub os_at_launch: Option<String>,
}

impl Specs {
    /// Labelled values of the specs that are present, in display order.
    ///
    /// Storage options are joined with `", "`. Empty values produce no row.
    pub fn rows(&self) -> Vec<(&'static str, String)> {
        let storage = self
            .storage_options
            .as_ref()
            .map(|options| options.join(", "));

        [
            ("Storage", storage),
            ("Display", self.display.clone()),
            ("CPU", self.cpu.clone()),
            ("RAM", self.ram.clone()),
            ("Battery", self.battery.clone()),
            ("OS at launch", self.os_at_launch.clone()),
        ]
        .into_iter()
        .filter_map(|(label, value)| {
            value
                .filter(|value| !value.is_empty())
                .map(|value| (label, value))
        })
        .collect()
    }
}
