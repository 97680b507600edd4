use whatlang::{Lang, detect};

pub const UNKNOWN_LANGUAGE: &str = "unknown";

const MIN_CONFIDENCE: f64 = 0.25;
const MIN_TEXT_LENGTH: usize = 50;

/// Natural-language identification over free text.
///
/// Implementations return `None` when the text is too short or too ambiguous
/// for a confident guess; callers map that to [`UNKNOWN_LANGUAGE`].
#[cfg_attr(test, mockall::automock)]
pub trait LanguageDetector: Send + Sync {
    fn detect(&self, text: &str) -> Option<String>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct WhatlangDetector;

impl LanguageDetector for WhatlangDetector {
    fn detect(&self, text: &str) -> Option<String> {
        // Skip detection for very short text
        if text.trim().len() < MIN_TEXT_LENGTH {
            return None;
        }

        if let Some(info) = detect(text)
            && info.confidence() >= MIN_CONFIDENCE
        {
            return Some(lang_to_code(info.lang()));
        }

        None
    }
}

/// Detected language code for `text`, or `"unknown"`. Never fails.
pub fn detect_language(detector: &dyn LanguageDetector, text: &str) -> String {
    detector
        .detect(text)
        .unwrap_or_else(|| UNKNOWN_LANGUAGE.to_string())
}

fn lang_to_code(lang: Lang) -> String {
    match lang {
        Lang::Eng => "en".to_string(),
        Lang::Rus => "ru".to_string(),
        Lang::Cmn => "zh".to_string(),
        Lang::Spa => "es".to_string(),
        Lang::Fra => "fr".to_string(),
        Lang::Deu => "de".to_string(),
        Lang::Jpn => "ja".to_string(),
        Lang::Kor => "ko".to_string(),
        Lang::Por => "pt".to_string(),
        Lang::Ita => "it".to_string(),
        Lang::Nld => "nl".to_string(),
        Lang::Pol => "pl".to_string(),
        Lang::Tur => "tr".to_string(),
        Lang::Swe => "sv".to_string(),
        Lang::Dan => "da".to_string(),
        Lang::Fin => "fi".to_string(),
        Lang::Heb => "he".to_string(),
        Lang::Ara => "ar".to_string(),
        Lang::Hin => "hi".to_string(),
        Lang::Tha => "th".to_string(),
        Lang::Vie => "vi".to_string(),
        Lang::Ukr => "uk".to_string(),
        Lang::Ces => "cs".to_string(),
        Lang::Ron => "ro".to_string(),
        Lang::Hun => "hu".to_string(),
        Lang::Ell => "el".to_string(),
        Lang::Ind => "id".to_string(),
        _ => lang.code().to_string(),
    }
}
