use crate::extractor::document::PageDocument;

/// Shape of an element that counts as a likely advertisement slot.
#[derive(Debug, Clone, Copy)]
pub struct AdElementRule {
    pub tags: &'static [&'static str],
    pub attribute: &'static str,
}

/// Embedded frames, external scripts, ad-network `<ins>` slots and images,
/// each only when they load something from a source.
pub const AD_ELEMENTS: AdElementRule = AdElementRule {
    tags: &["iframe", "script", "ins", "img"],
    attribute: "src",
};

pub fn count_ad_elements(doc: &dyn PageDocument) -> usize {
    count_matching(doc, &AD_ELEMENTS)
}

pub fn count_matching(doc: &dyn PageDocument, rule: &AdElementRule) -> usize {
    doc.attribute_values(rule.tags, rule.attribute)
        .iter()
        .filter(|value| !value.is_empty())
        .count()
}
