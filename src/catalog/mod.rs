mod loader;
mod page;
mod view;

pub use loader::CatalogLoader;
pub use page::{Container, Page};
pub use view::{CatalogView, LoadState, LOAD_ERROR};
