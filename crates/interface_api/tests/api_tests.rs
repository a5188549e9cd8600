//! HTTP API tests
//!
//! Drive the full router, middleware included, with in-memory requests.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use chrono::{Duration, Utc};
use serde_json::{json, Value};
use tower::ServiceExt;

use domain_lead::{CampaignWindow, Campaigns, Catalog};
use interface_api::{config::ApiConfig, create_router};
use test_utils::{CampaignFixtures, DocumentFixtures, LeadFixtures, TestLeadBuilder};

fn app() -> Router {
    app_with(ApiConfig {
        campaigns: CampaignFixtures::live_campaigns(),
        forms: CampaignFixtures::forms_config(),
        ..ApiConfig::default()
    })
}

fn app_with(config: ApiConfig) -> Router {
    create_router(config, Catalog::load().unwrap())
}

async fn send(
    method: Method,
    uri: &str,
    body: Option<Value>,
    language: Option<&str>,
) -> (StatusCode, Value) {
    send_to(app(), method, uri, body, language).await
}

async fn send_to(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
    language: Option<&str>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(language) = language {
        builder = builder.header(header::ACCEPT_LANGUAGE, language);
    }
    let body = body.map_or_else(Body::empty, |v| Body::from(v.to_string()));

    let response = app.oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

async fn post(uri: &str, body: Value) -> (StatusCode, Value) {
    send(Method::POST, uri, Some(body), None).await
}

mod health {
    use super::*;

    #[tokio::test]
    async fn test_health_check() {
        let (status, body) = send(Method::GET, "/health", None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
    }

    #[tokio::test]
    async fn test_ready_with_campaigns() {
        let (status, body) = send(Method::GET, "/health/ready", None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ready");
    }

    #[tokio::test]
    async fn test_not_ready_without_campaigns() {
        let (status, _) =
            send_to(app_with(ApiConfig::default()), Method::GET, "/health/ready", None, None).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    }
}

mod documents {
    use super::*;

    #[tokio::test]
    async fn test_format_partial_cpf() {
        let (status, body) = post("/api/v1/documents/format", json!({ "value": "1234" })).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["formatted"], "123.4");
        assert_eq!(body["digits"], "1234");
        assert_eq!(body["kind"], "cpf");
    }

    #[tokio::test]
    async fn test_format_truncates_cnpj() {
        let (_, body) = post(
            "/api/v1/documents/format",
            json!({ "value": "12345678901234999" }),
        )
        .await;
        assert_eq!(body["formatted"], "12.345.678/9012-34");
        assert_eq!(body["digits"], "12345678901234");
        assert_eq!(body["kind"], "cnpj");
    }

    #[tokio::test]
    async fn test_validate_cnpj() {
        let (status, body) = post(
            "/api/v1/documents/validate",
            json!({ "value": DocumentFixtures::valid_cnpj_formatted() }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["valid"], true);
        assert_eq!(body["kind"], "cnpj");
        assert!(body.get("message").is_none());
    }

    #[tokio::test]
    async fn test_invalid_document_gets_generic_message() {
        let (_, body) = post(
            "/api/v1/documents/validate",
            json!({ "value": DocumentFixtures::invalid_cpf() }),
        )
        .await;
        assert_eq!(body["valid"], false);
        assert_eq!(body["message"], "Documento inválido");
        assert!(body.get("kind").is_none());
    }

    #[tokio::test]
    async fn test_message_follows_accept_language() {
        let (_, body) = send(
            Method::POST,
            "/api/v1/documents/validate",
            Some(json!({ "value": DocumentFixtures::repeated_cpf() })),
            Some("en-GB,en;q=0.8"),
        )
        .await;
        assert_eq!(body["message"], "Invalid document");
    }

    #[tokio::test]
    async fn test_unsupported_language_uses_default() {
        let (_, body) = send(
            Method::POST,
            "/api/v1/documents/validate",
            Some(json!({ "value": "123" })),
            Some("fr-FR"),
        )
        .await;
        assert_eq!(body["message"], "Documento inválido");
    }
}

mod leads {
    use super::*;

    #[tokio::test]
    async fn test_valid_lead() {
        let lead = serde_json::to_value(LeadFixtures::valid()).unwrap();
        let (status, body) = post("/api/v1/leads/validate", lead).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["valid"], true);
        assert_eq!(body["errors"], json!([]));
    }

    #[tokio::test]
    async fn test_rejected_fields_are_listed_in_form_order() {
        let lead = TestLeadBuilder::new()
            .document(DocumentFixtures::invalid_cnpj())
            .email("not-an-email")
            .build();
        let (_, body) = post("/api/v1/leads/validate", serde_json::to_value(lead).unwrap()).await;
        assert_eq!(body["valid"], false);

        let fields: Vec<&str> = body["errors"]
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e["field"].as_str().unwrap())
            .collect();
        assert_eq!(fields, vec!["document", "email"]);
        assert_eq!(body["errors"][0]["message"], "Documento inválido");
    }

    #[tokio::test]
    async fn test_absent_fields_are_listed_as_field_errors() {
        let (status, body) = post(
            "/api/v1/leads/validate",
            json!({ "name": "Maria", "document": "11144477735", "email": "a@b.com" }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["valid"], false);

        let fields: Vec<&str> = body["errors"]
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e["field"].as_str().unwrap())
            .collect();
        assert_eq!(
            fields,
            vec!["phone", "position", "company", "message", "optin1", "optin2"]
        );
        assert_eq!(body["errors"][0]["message"], "Telefone obrigatório");
    }

    #[tokio::test]
    async fn test_mistyped_body_gets_json_error() {
        let (status, body) = post("/api/v1/leads/validate", json!({ "name": 42 })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "bad_request");
        assert!(body["message"].is_string());
    }
}

mod campaigns {
    use super::*;

    fn submissions(campaign: &str) -> String {
        format!("/api/v1/campaigns/{}/submissions", campaign)
    }

    #[tokio::test]
    async fn test_open_campaign_window() {
        let uri = format!("/api/v1/campaigns/{}", CampaignFixtures::OPEN);
        let (status, body) = send(Method::GET, &uri, None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["campaign"], CampaignFixtures::OPEN);
        assert_eq!(body["open"], true);
        assert_eq!(body["status"], "open");
    }

    #[tokio::test]
    async fn test_ended_campaign_window() {
        let uri = format!("/api/v1/campaigns/{}", CampaignFixtures::ENDED);
        let (_, body) = send(Method::GET, &uri, None, None).await;
        assert_eq!(body["open"], false);
        assert_eq!(body["status"], "ended");
    }

    #[tokio::test]
    async fn test_submission_payload() {
        let lead = TestLeadBuilder::new()
            .document(DocumentFixtures::valid_cpf())
            .build();
        let (status, body) = post(
            &submissions(CampaignFixtures::OPEN),
            serde_json::to_value(lead).unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["target_b64"],
            CampaignFixtures::forms_config().forms_url_base64
        );
        assert_eq!(body["answers"].as_array().unwrap().len(), 9);
        assert_eq!(
            body["answers"][1]["answer1"],
            DocumentFixtures::valid_cpf_formatted()
        );
        assert!(body["startDate"].is_string());
    }

    #[tokio::test]
    async fn test_invalid_lead_returns_details() {
        let lead = TestLeadBuilder::new().phone("").build();
        let (status, body) = post(
            &submissions(CampaignFixtures::OPEN),
            serde_json::to_value(lead).unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], "validation_error");
        assert_eq!(body["details"][0]["field"], "phone");
        assert_eq!(body["details"][0]["message"], "Telefone obrigatório");
    }

    #[tokio::test]
    async fn test_inactive_campaign_uses_configured_message() {
        let lead = serde_json::to_value(LeadFixtures::valid()).unwrap();
        let (status, body) = post(&submissions(CampaignFixtures::INACTIVE), lead).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["message"], "Inscrições encerradas para o Voices 2025.");
    }

    #[tokio::test]
    async fn test_ended_campaign_falls_back_to_catalog() {
        let lead = serde_json::to_value(LeadFixtures::valid()).unwrap();
        let (status, body) = post(&submissions(CampaignFixtures::ENDED), lead).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(
            body["message"],
            "As inscrições para rio-gastronomia-2024 estão encerradas."
        );
    }

    #[tokio::test]
    async fn test_unknown_campaign() {
        let lead = serde_json::to_value(LeadFixtures::valid()).unwrap();
        let (status, body) = post(&submissions("nope-2030"), lead).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "not_found");
        assert_eq!(body["message"], "Configuração não encontrada para esta campanha");
    }

    fn inverted_window_app() -> Router {
        let now = Utc::now();
        let mut campaigns = Campaigns::new();
        campaigns.insert(
            "inverted-2025",
            CampaignWindow {
                form_active: true,
                form_start: now + Duration::days(1),
                form_end: now - Duration::days(1),
                closed_message: None,
            },
        );
        app_with(ApiConfig {
            campaigns,
            ..ApiConfig::default()
        })
    }

    #[tokio::test]
    async fn test_inverted_window_is_a_server_error() {
        let (status, body) = send_to(
            inverted_window_app(),
            Method::GET,
            "/api/v1/campaigns/inverted-2025",
            None,
            None,
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "internal_error");

        let lead = serde_json::to_value(LeadFixtures::valid()).unwrap();
        let (status, body) = send_to(
            inverted_window_app(),
            Method::POST,
            &submissions("inverted-2025"),
            Some(lead),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "internal_error");
    }
}
