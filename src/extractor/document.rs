use html5ever::{
    ParseOpts, parse_document, tendril::TendrilSink, tree_builder::TreeBuilderOpts,
};
use scraper::{ElementRef, Html, HtmlTreeSink, Node};

/// Elements whose text never renders on the page.
const NON_VISIBLE_TAGS: [&str; 3] = ["script", "style", "template"];

/// The queries the signal extractor needs from a parsed page.
///
/// Kept deliberately narrow so the extraction and rating logic can run
/// against synthetic documents in tests.
pub trait PageDocument {
    /// All rendered text of the document, in document order.
    fn visible_text(&self) -> String;

    /// For every element whose tag is in `tags` and which carries
    /// `attribute`, the attribute's value (possibly empty), in document order.
    fn attribute_values(&self, tags: &[&str], attribute: &str) -> Vec<String>;

    /// Untrimmed descendant text of every `tag` element, in document order.
    fn element_texts(&self, tag: &str) -> Vec<String>;
}

/// A [`PageDocument`] backed by an html5ever parse tree.
pub struct HtmlDocument {
    html: Html,
}

impl HtmlDocument {
    /// Parses with scripting disabled, so `<noscript>` children are real
    /// elements (tracking pixels, fallback paragraphs) rather than raw text.
    pub fn parse(body: &str) -> Self {
        let opts = ParseOpts {
            tree_builder: TreeBuilderOpts {
                scripting_enabled: false,
                ..Default::default()
            },
            ..Default::default()
        };
        let html = parse_document(HtmlTreeSink::new(Html::new_document()), opts).one(body);

        Self { html }
    }

    fn elements(&self) -> impl Iterator<Item = ElementRef<'_>> {
        self.html.tree.root().descendants().filter_map(ElementRef::wrap)
    }
}

impl PageDocument for HtmlDocument {
    fn visible_text(&self) -> String {
        let mut text = String::new();

        for node in self.html.tree.root().descendants() {
            let Node::Text(fragment) = node.value() else {
                continue;
            };

            let hidden = node.ancestors().any(|ancestor| {
                ancestor
                    .value()
                    .as_element()
                    .is_some_and(|el| NON_VISIBLE_TAGS.contains(&el.name()))
            });

            if !hidden {
                text.push_str(fragment);
            }
        }

        text
    }

    fn attribute_values(&self, tags: &[&str], attribute: &str) -> Vec<String> {
        self.elements()
            .filter(|el| tags.contains(&el.value().name()))
            .filter_map(|el| el.value().attr(attribute).map(str::to_string))
            .collect()
    }

    fn element_texts(&self, tag: &str) -> Vec<String> {
        self.elements()
            .filter(|el| el.value().name() == tag)
            .map(|el| el.text().collect::<String>())
            .collect()
    }
}
