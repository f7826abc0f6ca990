use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, Responder};
use common::requests::{AnalyzeRequest, AnalyzeResponse};
use common::session::normalize_snippet;
use common::validate::validate_for_remote;
use log::{info, warn};
use uuid::Uuid;

pub async fn process(payload: web::Json<AnalyzeRequest>) -> impl Responder {
    let request_id = Uuid::new_v4();
    let (status, response) = analyze(&payload);

    match &response {
        AnalyzeResponse::Rejected { reason } => {
            warn!("[{}] analyze request rejected: {}", request_id, reason)
        }
        _ => info!(
            "[{}] analyze request ({} chars, {}) answered {}",
            request_id,
            payload.snippet.chars().count(),
            payload.locale.code(),
            status
        ),
    }

    HttpResponse::build(status).json(response)
}

/// Decides the answer for one request. There is no analysis engine behind
/// this endpoint yet, so anything that passes screening is `Unavailable`.
pub fn analyze(request: &AnalyzeRequest) -> (StatusCode, AnalyzeResponse) {
    let snippet = match normalize_snippet(&request.snippet) {
        Ok(snippet) => snippet,
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                AnalyzeResponse::Rejected {
                    reason: e.to_string(),
                },
            )
        }
    };

    if let Err(e) = validate_for_remote(&snippet) {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            AnalyzeResponse::Rejected {
                reason: e.to_string(),
            },
        );
    }

    (
        StatusCode::SERVICE_UNAVAILABLE,
        AnalyzeResponse::Unavailable {
            reason: "remote analysis is not available".to_string(),
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::analyze::{configure_routes, json_config};
    use actix_web::test::{call_service, init_service, read_body_json, TestRequest};
    use actix_web::App;
    use common::model::locale::Locale;

    fn request(snippet: &str) -> AnalyzeRequest {
        AnalyzeRequest {
            snippet: snippet.to_string(),
            locale: Locale::En,
        }
    }

    #[test]
    fn empty_snippet_is_bad_request() {
        let (status, response) = analyze(&request("  \n "));
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(matches!(response, AnalyzeResponse::Rejected { .. }));
    }

    #[test]
    fn dangerous_snippet_is_rejected() {
        let (status, response) = analyze(&request("eval('2 + 2')"));
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(matches!(response, AnalyzeResponse::Rejected { .. }));
    }

    #[actix_web::test]
    async fn ordinary_snippet_is_unavailable() {
        let app = init_service(App::new().service(configure_routes())).await;
        let req = TestRequest::post()
            .uri("/api/analyze")
            .set_json(request("div { color: red; }"))
            .to_request();

        let resp = call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);

        let body: AnalyzeResponse = read_body_json(resp).await;
        assert!(matches!(body, AnalyzeResponse::Unavailable { .. }));
    }

    #[actix_web::test]
    async fn malformed_body_answers_rejected_json() {
        let app = init_service(
            App::new()
                .app_data(json_config())
                .service(configure_routes()),
        )
        .await;
        let req = TestRequest::post()
            .uri("/api/analyze")
            .insert_header(("content-type", "application/json"))
            .set_payload("{\"snippet\": ")
            .to_request();

        let resp = call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: AnalyzeResponse = read_body_json(resp).await;
        assert!(matches!(body, AnalyzeResponse::Rejected { .. }));
    }
}
