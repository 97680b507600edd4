use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::{
    app_state::AppState,
    rater::rate_url_with,
    web::{
        dtos::{ErrorResponse, RateQuery, RateRequest, RatingResponse},
        page,
    },
};

pub async fn index() -> Html<String> {
    Html(page::render(None))
}

/// Form submission target. A blank URL just shows the form again.
pub async fn rate_form(State(state): State<AppState>, Query(query): Query<RateQuery>) -> Html<String> {
    let Some(url) = query.url.filter(|url| !url.trim().is_empty()) else {
        return Html(page::render(None));
    };

    let outcome = rate_url_with(url.trim(), state.detector.as_ref()).await;
    Html(page::render(Some((url.as_str(), &outcome))))
}

#[utoipa::path(
    post,
    path = "/v1/rate",
    tag = "rating",
    request_body = RateRequest,
    responses(
        (status = 200, description = "Page rated; unreachable pages rate as lowest", body = RatingResponse),
        (status = 400, description = "Blank URL", body = ErrorResponse)
    )
)]
pub async fn rate(State(state): State<AppState>, Json(payload): Json<RateRequest>) -> Response {
    if let Err(error) = payload.validate() {
        return (StatusCode::BAD_REQUEST, Json(ErrorResponse { error })).into_response();
    }

    let outcome = rate_url_with(payload.url.trim(), state.detector.as_ref()).await;
    Json(RatingResponse::from(&outcome)).into_response()
}
