use crate::render::escape_html;
use crate::{Config, Device};
use std::borrow::Cow;
use url::form_urlencoded;

/// Longest description shown on a card, in characters.
pub const SNIPPET_LENGTH: usize = 140;

/// Shown instead of the grid when nothing matches.
pub const NO_RESULTS: &str = "<p>No devices match your search.</p>";

/// Shortens a description to `SNIPPET_LENGTH` characters, marking the cut with `…`.
pub fn snippet(description: &str) -> Cow<'_, str> {
    match description.char_indices().nth(SNIPPET_LENGTH) {
        Some((cut, _)) => Cow::Owned(format!("{}…", &description[..cut])),
        None => Cow::Borrowed(description),
    }
}

/// Link to the detail page of `device`, if it has a key to link with.
pub fn detail_link(device: &Device, config: &Config) -> Option<String> {
    let key = device.link_key()?;
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("id", &key)
        .finish();
    Some(format!("{}?{}", config.detail_page, query))
}

/// Renders one card per device, in order.
///
/// An empty list renders `NO_RESULTS` instead of an empty grid.
pub fn render_list<'a, I>(devices: I, config: &Config) -> String
where
    I: IntoIterator<Item = &'a Device>,
{
    let cards = devices
        .into_iter()
        .map(|device| render_card(device, config))
        .collect::<String>();

    if cards.is_empty() {
        NO_RESULTS.into()
    } else {
        cards
    }
}

/// Renders the card of a single device.
pub fn render_card(device: &Device, config: &Config) -> String {
    let name = escape_html(&device.name);
    let image = device.image().unwrap_or(config.placeholder_image.as_str());

    let mut html = String::from(r#"<section class="card">"#);
    html.push_str(&format!(
        r#"<img src="{}" alt="{} image" loading="lazy" />"#,
        escape_html(image),
        name
    ));
    html.push_str(&format!("<h3>{name}</h3>"));

    let meta = [
        device.model().map(String::from),
        device.year().map(|year| year.to_string()),
    ]
    .into_iter()
    .flatten()
    .map(|part| escape_html(&part))
    .collect::<Vec<_>>();
    if !meta.is_empty() {
        html.push_str(&format!(r#"<p class="meta">{}</p>"#, meta.join(" • ")));
    }

    if let Some(description) = device.description() {
        html.push_str(&format!("<p>{}</p>", escape_html(&snippet(description))));
    }

    if let Some(link) = detail_link(device, config) {
        html.push_str(&format!(r#"<a href="{}">Read more →</a>"#, escape_html(&link)));
    }

    html.push_str("</section>");
    html
}
