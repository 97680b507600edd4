use crate::extractor::{
    ExtractedSignals, HtmlDocument, PageDocument, UNKNOWN_LANGUAGE, WhatlangDetector,
    count_ad_elements, extract_main_content, extract_signals, language::MockLanguageDetector,
};

/// A hand-built document, no parser involved.
#[derive(Default)]
struct StaticDocument {
    visible: String,
    elements: Vec<(&'static str, Option<&'static str>)>,
    paragraphs: Vec<&'static str>,
}

impl PageDocument for StaticDocument {
    fn visible_text(&self) -> String {
        self.visible.clone()
    }

    fn attribute_values(&self, tags: &[&str], attribute: &str) -> Vec<String> {
        assert_eq!(attribute, "src");
        self.elements
            .iter()
            .filter(|(tag, _)| tags.contains(tag))
            .filter_map(|(_, src)| src.map(str::to_string))
            .collect()
    }

    fn element_texts(&self, tag: &str) -> Vec<String> {
        assert_eq!(tag, "p");
        self.paragraphs.iter().map(|p| p.to_string()).collect()
    }
}

#[test]
fn test_main_content_from_synthetic_paragraphs() {
    let doc = StaticDocument {
        paragraphs: vec!["  Hello  ", "", "World"],
        ..Default::default()
    };

    assert_eq!(extract_main_content(&doc), "Hello\nWorld");
}

#[test]
fn test_ad_count_from_synthetic_elements() {
    let doc = StaticDocument {
        elements: vec![
            ("img", Some("a.png")),
            ("img", Some("b.png")),
            ("img", Some("c.png")),
            ("script", Some("ads.js")),
            ("script", Some("tracker.js")),
            ("div", Some("not-an-ad")),
            ("script", None),
            ("iframe", Some("")),
        ],
        ..Default::default()
    };

    assert_eq!(count_ad_elements(&doc), 5);
}

#[test]
fn test_ad_count_from_html() {
    let html = r#"<html><body>
        <img src="/1.png"><img src="/2.png"><img src="/3.png">
        <script src="/a.js"></script><script src="/b.js"></script>
        <div>no source</div>
        <script>inline();</script>
        <ins class="adsbygoogle"></ins>
    </body></html>"#;

    let doc = HtmlDocument::parse(html);
    assert_eq!(count_ad_elements(&doc), 5);
}

#[test]
fn test_noscript_children_are_counted() {
    let html = r#"<html><head>
        <script src="/a.js"></script>
        <noscript><img src="https://tracker.example/tr?id=1"></noscript>
    </head><body>
        <noscript><iframe src="https://tags.example/ns.html"></iframe><p>Enable JavaScript</p></noscript>
        <p>Body</p>
    </body></html>"#;

    let doc = HtmlDocument::parse(html);
    assert_eq!(count_ad_elements(&doc), 3);
    assert_eq!(extract_main_content(&doc), "Enable JavaScript\nBody");
    assert!(doc.visible_text().contains("Enable JavaScript"));
}

#[test]
fn test_main_content_ignores_non_paragraph_text() {
    let html = r#"<html><body>
        <h1>Heading text</h1>
        <p>  First paragraph.  </p>
        <ul><li>List item</li></ul>
        <div>Loose div text</div>
        <p>   </p>
        <p>Second <a href="/x">paragraph</a>.</p>
    </body></html>"#;

    let doc = HtmlDocument::parse(html);
    assert_eq!(
        extract_main_content(&doc),
        "First paragraph.\nSecond paragraph."
    );
}

#[test]
fn test_extract_signals_uses_visible_text_for_language() {
    let doc = StaticDocument {
        visible: "visible words".to_string(),
        elements: vec![("iframe", Some("https://ads.example/frame"))],
        paragraphs: vec!["Body"],
    };

    let mut detector = MockLanguageDetector::new();
    detector
        .expect_detect()
        .withf(|text| text == "visible words")
        .times(1)
        .returning(|_| Some("en".to_string()));

    let signals = extract_signals(&doc, &detector);
    assert_eq!(
        signals,
        ExtractedSignals {
            language: "en".to_string(),
            ad_count: 1,
            text: "Body".to_string(),
        }
    );
}

#[test]
fn test_failed_detection_falls_back_to_unknown() {
    let doc = StaticDocument::default();

    let mut detector = MockLanguageDetector::new();
    detector.expect_detect().returning(|_| None);

    let signals = extract_signals(&doc, &detector);
    assert_eq!(signals.language, UNKNOWN_LANGUAGE);
    assert_eq!(signals.ad_count, 0);
    assert_eq!(signals.text, "");
}

#[test]
fn test_extract_english_article() {
    let html = format!(
        r#"<!DOCTYPE html><html><head><title>Valid Article</title></head><body><article><h1>Valid Article</h1><p>{}</p></article></body></html>"#,
        "This is a valid article with enough content to pass the minimum requirements for extraction. ".repeat(20)
    );

    let doc = HtmlDocument::parse(&html);
    let signals = extract_signals(&doc, &WhatlangDetector);

    assert_eq!(signals.language, "en");
    assert_eq!(signals.ad_count, 0);
    assert!(signals.text.starts_with("This is a valid article"));
    assert!(!signals.text.ends_with(' '));
}

#[test]
fn test_malformed_html() {
    let html = "<html><head><title>Broken</title><body><p>Unclosed tags<div>More content";

    let doc = HtmlDocument::parse(html);
    let signals = extract_signals(&doc, &WhatlangDetector);

    // Should handle malformed HTML gracefully
    assert_eq!(signals.text, "Unclosed tags");
    assert_eq!(signals.language, UNKNOWN_LANGUAGE);
}

#[cfg(feature = "fuzz")]
mod fuzz {
    use super::*;
    use crate::{classifier::QualityBucket, rater::rate_html, rating::Rating};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_rate_html_never_panics(html in ".*") {
            let result = rate_html(&html, &WhatlangDetector);
            prop_assert!(matches!(
                result.label,
                Rating::Lowest | Rating::Low | Rating::Medium | Rating::High
            ));
        }

        #[test]
        fn test_main_content_has_no_blank_lines(
            paragraphs in proptest::collection::vec("[ a-z]{0,12}", 0..8)
        ) {
            let html: String = paragraphs.iter().map(|p| format!("<p>{p}</p>")).collect();
            let text = extract_main_content(&HtmlDocument::parse(&html));
            prop_assert!(text.lines().all(|line| !line.trim().is_empty()));
            prop_assert!(text.lines().all(|line| line == line.trim()));
        }

        #[test]
        fn test_high_quality_implies_long_text(text in ".{0,1200}") {
            let quality = crate::classifier::estimate_quality(&text);
            if quality == QualityBucket::High {
                prop_assert!(text.chars().count() >= 1000);
            }
        }
    }
}
