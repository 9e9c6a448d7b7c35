use crate::render::escape_html;
use crate::{Config, Device};

/// Shown in the detail container when the key matches no device.
pub const NOT_FOUND: &str = "<p>Device not found.</p>";

/// Shown in place of the fun facts when a device has none.
pub const NO_FUN_FACTS: &str = "<li>No fun facts yet.</li>";

/// Renders the detail view of a single device.
pub fn render_detail(device: &Device, config: &Config) -> String {
    let name = escape_html(&device.name);
    let image = device.image().unwrap_or(config.placeholder_image.as_str());

    let mut html = String::from(r#"<article class="device-detail">"#);
    html.push_str(r#"<header class="device-hero">"#);
    html.push_str(&format!(
        r#"<img src="{}" alt="{} image" />"#,
        escape_html(image),
        name
    ));
    html.push_str(r#"<div class="device-meta">"#);

    match device.model() {
        Some(model) => html.push_str(&format!("<h2>{name} — {}</h2>", escape_html(model))),
        None => html.push_str(&format!("<h2>{name}</h2>")),
    }

    let dates = [
        device.year().map(|year| year.to_string()),
        device.released().map(|released| format!("Released: {released}")),
    ]
    .into_iter()
    .flatten()
    .map(|part| escape_html(&part))
    .collect::<Vec<_>>();
    if !dates.is_empty() {
        html.push_str(&format!(r#"<p class="meta">{}</p>"#, dates.join(" • ")));
    }

    if let Some(description) = device.description() {
        html.push_str(&format!("<p>{}</p>", escape_html(description)));
    }

    let rows = device
        .specs
        .as_ref()
        .map(|specs| specs.rows())
        .unwrap_or_default();
    if !rows.is_empty() {
        html.push_str(r#"<dl class="specs">"#);
        for (label, value) in rows {
            html.push_str(&format!(
                "<dt>{}</dt><dd>{}</dd>",
                escape_html(label),
                escape_html(&value)
            ));
        }
        html.push_str("</dl>");
    }
    html.push_str("</div></header>");

    html.push_str(r#"<section class="fun-facts"><h3>Fun facts</h3><ul>"#);
    match &device.fun_facts {
        Some(facts) => {
            for fact in facts {
                html.push_str(&format!("<li>{}</li>", escape_html(fact)));
            }
        }
        None => html.push_str(NO_FUN_FACTS),
    }
    html.push_str("</ul></section>");

    if let Some(sources) = device.sources() {
        html.push_str(r#"<section class="sources"><h3>Sources</h3><ul>"#);
        for source in sources {
            let source = escape_html(source);
            html.push_str(&format!(
                r#"<li><a href="{source}" target="_blank" rel="noopener noreferrer">{source}</a></li>"#
            ));
        }
        html.push_str("</ul></section>");
    }

    html.push_str("</article>");
    html
}
