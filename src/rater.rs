//! End-to-end rating of a single URL: fetch, extract, classify, rate.

use tracing::{info, instrument, warn};

use crate::{
    extractor::{HtmlDocument, LanguageDetector, PageDocument, WhatlangDetector, extract_signals},
    fetcher::fetch,
    rating::{RatingOutcome, RatingResult, evaluate},
    signals::PageSignals,
};

/// Rates `url` with the default language detector.
pub async fn rate_url(url: &str) -> RatingOutcome {
    rate_url_with(url, &WhatlangDetector).await
}

#[instrument(skip(detector))]
pub async fn rate_url_with(url: &str, detector: &dyn LanguageDetector) -> RatingOutcome {
    let page = match fetch(url).await {
        Ok(page) => page,
        Err(err) => {
            warn!(error = %err, "page unreachable, rating as lowest");
            return RatingOutcome::Unreachable(err);
        }
    };

    let result = rate_html(&page.body_utf8, detector);

    info!(
        url_final = %page.url_final,
        status = page.status.as_u16(),
        label = %result.label,
        rule = result.rule.unwrap_or("fallback"),
        language = %result.metadata.language,
        ad_elements = result.metadata.ad_elements_found,
        quality = %result.metadata.content_quality,
        ymyl = result.metadata.ymyl_topic_detected,
        "page rated"
    );

    RatingOutcome::Rated(result)
}

/// Rates an already fetched HTML body.
pub fn rate_html(body: &str, detector: &dyn LanguageDetector) -> RatingResult {
    let doc = HtmlDocument::parse(body);
    rate_document(&doc, detector)
}

pub fn rate_document(doc: &dyn PageDocument, detector: &dyn LanguageDetector) -> RatingResult {
    let signals = PageSignals::from(extract_signals(doc, detector));
    evaluate(signals)
}
