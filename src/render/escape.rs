/// Escapes the five reserved markup characters.
///
/// Anything taken from the catalog goes through here before it is
/// interpolated into markup.
pub fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#039;")
}
