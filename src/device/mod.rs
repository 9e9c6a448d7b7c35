mod device;
mod scalar;
mod specs;

pub use device::Device;
pub use scalar::{DeviceId, Year};
pub use specs::Specs;
