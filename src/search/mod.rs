mod search;

pub use search::{find_device, matches, normalize_query, DeviceSearch};
