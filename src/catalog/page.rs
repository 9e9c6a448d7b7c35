#[derive(Default, Debug, Clone, PartialEq)]
/// An element of the host page whose content gets replaced wholesale.
pub struct Container {
    html: String,
}

impl Container {
    /// Current inner markup.
    pub fn html(&self) -> &str {
        &self.html
    }

    pub(crate) fn replace(&mut self, html: String) {
        self.html = html;
    }
}

#[derive(Default, Debug, Clone)]
/// The parts of a host page the catalog writes into.
///
/// A listing page has a grid container and, optionally, a search input.
/// A detail page has a detail container. Missing parts turn the matching
/// operations into no-ops.
pub struct Page {
    /// Container for the card grid.
    pub list: Option<Container>,
    /// Whether the page has a search input wired to the grid.
    pub search_input: bool,
    /// Container for a single device.
    pub detail: Option<Container>,
}

impl Page {
    /// A listing page, with or without a search input.
    pub fn listing(search_input: bool) -> Self {
        Page {
            list: Some(Container::default()),
            search_input,
            detail: None,
        }
    }

    /// A detail page.
    pub fn detail() -> Self {
        Page {
            detail: Some(Container::default()),
            ..Default::default()
        }
    }

    /// Markup of the listing container, empty when there is none.
    pub fn list_html(&self) -> &str {
        self.list.as_ref().map(Container::html).unwrap_or_default()
    }

    /// Markup of the detail container, empty when there is none.
    pub fn detail_html(&self) -> &str {
        self.detail.as_ref().map(Container::html).unwrap_or_default()
    }
}
