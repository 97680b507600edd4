pub mod ads;
pub mod content;
pub mod document;
pub mod language;
pub mod model;

#[cfg(test)]
mod tests;

pub use ads::{AD_ELEMENTS, AdElementRule, count_ad_elements};
pub use content::extract_main_content;
pub use document::{HtmlDocument, PageDocument};
pub use language::{LanguageDetector, UNKNOWN_LANGUAGE, WhatlangDetector, detect_language};
pub use model::ExtractedSignals;

pub fn extract_signals(doc: &dyn PageDocument, detector: &dyn LanguageDetector) -> ExtractedSignals {
    // 1. Language of everything a reader would see
    let language = detect_language(detector, &doc.visible_text());

    // 2. Ad-shaped elements
    let ad_count = count_ad_elements(doc);

    // 3. Paragraph text
    let text = extract_main_content(doc);

    ExtractedSignals {
        language,
        ad_count,
        text,
    }
}
