mod card;
mod detail;
mod escape;

pub use card::{detail_link, render_card, render_list, snippet, NO_RESULTS, SNIPPET_LENGTH};
pub use detail::{render_detail, NOT_FOUND, NO_FUN_FACTS};
pub use escape::escape_html;
