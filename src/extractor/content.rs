use crate::extractor::document::PageDocument;

/// Only paragraph text counts as main content. Headings, list items and bare
/// `div` text are not captured.
pub const MAIN_CONTENT_TAG: &str = "p";

pub fn extract_main_content(doc: &dyn PageDocument) -> String {
    join_paragraphs(doc.element_texts(MAIN_CONTENT_TAG))
}

/// Trims each paragraph, drops the empty ones and joins the rest with `\n`.
pub fn join_paragraphs<I, S>(paragraphs: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    paragraphs
        .into_iter()
        .filter_map(|p| {
            let trimmed = p.as_ref().trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_drops_empty_and_preserves_order() {
        assert_eq!(join_paragraphs(["  Hello  ", "", "World"]), "Hello\nWorld");
    }

    #[test]
    fn test_join_whitespace_only_is_empty() {
        assert_eq!(join_paragraphs(["   ", "\n\t"]), "");
        assert_eq!(join_paragraphs(Vec::<String>::new()), "");
    }
}
