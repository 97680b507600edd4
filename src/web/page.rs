//! Server-rendered form page. Every interpolated value goes through
//! `ammonia::clean_text`.

use ammonia::clean_text;

use crate::{rating::RatingOutcome, web::dtos::RatingResponse};

const TITLE: &str = "Domain Quality Rating Tool";
const INTRO: &str = "This tool evaluates the quality of a domain using the uploaded guideline standards.";

/// Renders the input form, followed by the rating when one was requested.
pub fn render(submission: Option<(&str, &RatingOutcome)>) -> String {
    let url_value = submission.map(|(url, _)| clean_text(url)).unwrap_or_default();
    let result = submission
        .map(|(_, outcome)| render_outcome(outcome))
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{TITLE}</title>
</head>
<body>
<h1>&#128270; {TITLE}</h1>
<p>{INTRO}</p>
<form method="get" action="/rate">
<label for="url">Enter Website URL</label>
<input type="text" id="url" name="url" value="{url_value}">
<button type="submit">Rate Domain</button>
</form>
{result}
</body>
</html>
"#
    )
}

fn render_outcome(outcome: &RatingOutcome) -> String {
    let response = RatingResponse::from(outcome);
    let mut html = String::new();

    if let Some(notice) = &response.notice {
        html.push_str(&format!(
            "<p class=\"error\" role=\"alert\">{}</p>\n",
            clean_text(notice)
        ));
    }

    html.push_str(&format!(
        "<p class=\"rating\">Domain Quality Rating: <strong>{}</strong></p>\n",
        clean_text(&response.label)
    ));

    let metadata = serde_json::to_string_pretty(&response.metadata)
        .unwrap_or_else(|_| "{}".to_string());
    html.push_str(&format!(
        "<h2>Metadata</h2>\n<pre class=\"metadata\">{}</pre>\n",
        clean_text(&metadata)
    ));

    if !response.raw_content.is_empty() {
        html.push_str(&format!(
            "<details>\n<summary>View Extracted Main Content</summary>\n\
             <textarea readonly rows=\"15\" cols=\"100\" aria-label=\"Main Content\">{}</textarea>\n\
             </details>\n",
            clean_text(&response.raw_content)
        ));
    }

    html
}
