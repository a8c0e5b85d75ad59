//! Non-breaking display of file and package names.

use crate::config::DEFAULT_WRAP_WIDTH;
use crate::utils::{html_escape, SafeHtml};

const NBSP: &str = "&nbsp;";
const WBR: &str = "<wbr>";

/// Join the words of `text` with `&nbsp;` so the name stays on one line.
///
/// Uses the default wrap width; see [`nbsp_with_width`].
pub fn nbsp(text: &str) -> SafeHtml {
    nbsp_with_width(text, DEFAULT_WRAP_WIDTH)
}

/// Join the words of `text` with `&nbsp;`, allowing breaks in long names.
///
/// Words are HTML-escaped. When the joined markup is at least
/// `wrap_width` characters long it is cut into runs of `wrap_width`
/// characters separated by `<wbr>`. A width of zero never cuts.
pub fn nbsp_with_width(text: &str, wrap_width: usize) -> SafeHtml {
    let joined = text
        .split_whitespace()
        .map(html_escape)
        .collect::<Vec<_>>()
        .join(NBSP);

    let char_count = joined.chars().count();
    if wrap_width == 0 || char_count < wrap_width {
        return SafeHtml::from_trusted(joined);
    }

    let chars: Vec<char> = joined.chars().collect();
    let chunks: Vec<String> = chars
        .chunks(wrap_width)
        .map(|chunk| chunk.iter().collect())
        .collect();
    SafeHtml::from_trusted(chunks.join(WBR))
}
