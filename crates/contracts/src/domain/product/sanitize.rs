use ammonia::Builder;
use std::collections::HashSet;

/// Strip every HTML tag from description text, keeping only the character
/// content. Script and style bodies are dropped wholesale rather than
/// unwrapped.
pub fn strip_markup(input: &str) -> String {
    Builder::default()
        .tags(HashSet::new())
        .clean(input)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(strip_markup("A sturdy ceramic mug"), "A sturdy ceramic mug");
    }

    #[test]
    fn tags_are_removed_entirely() {
        assert_eq!(strip_markup("<p>Hello <b>world</b></p>"), "Hello world");
        assert_eq!(strip_markup("<h1>Title</h1><ul><li>one</li></ul>"), "Titleone");
    }

    #[test]
    fn script_content_is_dropped_not_unwrapped() {
        assert_eq!(strip_markup("<script>alert(1)</script>Visible"), "Visible");
    }
}
