use serde_json::json;
use wiremock::{
    matchers::{body_json, header, method, path},
    Mock, ResponseTemplate,
};

use crate::helpers::spawn_app;

#[tokio::test]
async fn submit_returns_a_200_when_the_spreadsheet_records_the_submission() {
    // Arrange
    let app = spawn_app().await;
    app.spreadsheet_answers("success", 1).await;

    // Act
    let response = app
        .post_submit(&json!({"name": "Guuzs", "class": "BRUXO", "ip": "150"}))
        .await;

    // Assert
    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, json!({"message": "Inscrição registrada com sucesso!"}));
}

#[tokio::test]
async fn submit_forwards_the_body_unmodified() {
    let app = spawn_app().await;
    let submission = json!({"name": "Guuzs", "class": "NOT A CLASS", "ip": "0099999"});

    Mock::given(path("/exec"))
        .and(method("POST"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(&submission))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "success"})))
        .expect(1)
        .mount(&app.spreadsheet_server)
        .await;

    let response = app.post_submit(&submission).await;

    assert_eq!(response.status().as_u16(), 200);
}

#[tokio::test]
async fn submit_accepts_the_portuguese_field_names() {
    let app = spawn_app().await;

    Mock::given(method("POST"))
        .and(body_json(json!({"name": "Guuzs", "class": "INCUBO", "ip": "7"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "success"})))
        .expect(1)
        .mount(&app.spreadsheet_server)
        .await;

    let response = app
        .post_submit(&json!({"nome": "Guuzs", "classe": "INCUBO", "ip": "7"}))
        .await;

    assert_eq!(response.status().as_u16(), 200);
}

#[tokio::test]
async fn submit_returns_a_500_when_the_spreadsheet_reports_an_error() {
    let app = spawn_app().await;
    app.spreadsheet_answers("error", 1).await;

    let response = app
        .post_submit(&json!({"name": "Guuzs", "class": "BRUXO", "ip": "150"}))
        .await;

    assert_eq!(response.status().as_u16(), 500);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, json!({"message": "Erro na inscrição."}));
}

#[tokio::test]
async fn submit_returns_a_500_without_details_when_the_spreadsheet_is_broken() {
    let app = spawn_app().await;
    let test_cases = [
        (
            ResponseTemplate::new(200).set_body_string("<html>Script error</html>"),
            "an html body",
        ),
        (
            ResponseTemplate::new(500).set_body_json(json!({"error": "quota exceeded"})),
            "a server error without status",
        ),
    ];
    for (template, description) in test_cases {
        app.spreadsheet_server.reset().await;
        Mock::given(method("POST"))
            .respond_with(template)
            .expect(1)
            .mount(&app.spreadsheet_server)
            .await;

        let response = app
            .post_submit(&json!({"name": "Guuzs", "class": "BRUXO", "ip": "150"}))
            .await;

        assert_eq!(
            response.status().as_u16(),
            500,
            "The API did not return 500 when the spreadsheet answered with {description}"
        );
        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body, json!({"message": "Erro na inscrição."}));
    }
}

#[tokio::test]
async fn submit_rejects_other_methods_with_a_405() {
    let app = spawn_app().await;
    app.spreadsheet_is_never_called().await;

    for method in [reqwest::Method::GET, reqwest::Method::PUT, reqwest::Method::DELETE] {
        let response = app
            .api_client
            .request(method.clone(), format!("{}/api/submit", app.address))
            .send()
            .await
            .expect("Failed to execute request.");

        assert_eq!(
            response.status().as_u16(),
            405,
            "The API did not return 405 for {method}"
        );
        assert_eq!(
            response
                .headers()
                .get("Allow")
                .and_then(|v| v.to_str().ok()),
            Some("POST")
        );
        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body, json!({"message": "Método não permitido"}));
    }
}

#[tokio::test]
async fn submit_keeps_null_fields_when_forwarding() {
    let app = spawn_app().await;

    Mock::given(method("POST"))
        .and(body_json(json!({"name": null, "class": "BRUXO", "ip": "1"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "success"})))
        .expect(1)
        .mount(&app.spreadsheet_server)
        .await;

    let response = app
        .post_submit(&json!({"name": null, "class": "BRUXO", "ip": "1"}))
        .await;

    assert_eq!(response.status().as_u16(), 200);
}

#[tokio::test]
async fn submit_prefers_the_english_field_names_when_both_are_sent() {
    let app = spawn_app().await;

    Mock::given(method("POST"))
        .and(body_json(json!({"name": "Guuzs", "class": "BRUXO", "ip": "1"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "success"})))
        .expect(1)
        .mount(&app.spreadsheet_server)
        .await;

    let response = app
        .post_submit(&json!({"name": "Guuzs", "nome": "Other", "class": "BRUXO", "classe": "INCUBO", "ip": "1"}))
        .await;

    assert_eq!(response.status().as_u16(), 200);
}

#[tokio::test]
async fn submit_answers_unreadable_bodies_with_the_generic_500() {
    let app = spawn_app().await;
    app.spreadsheet_is_never_called().await;
    let test_cases = [
        ("application/x-www-form-urlencoded", "name=Guuzs&class=BRUXO&ip=1", "a form body"),
        ("application/json", "{not json", "broken json"),
        ("application/json", r#"["Guuzs", "BRUXO", "1"]"#, "a json array"),
    ];
    for (content_type, body, description) in test_cases {
        let response = app
            .api_client
            .post(format!("{}/api/submit", app.address))
            .header("Content-Type", content_type)
            .body(body)
            .send()
            .await
            .expect("Failed to execute request.");

        assert_eq!(
            response.status().as_u16(),
            500,
            "The API did not return 500 for {description}"
        );
        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body, json!({"message": "Erro na inscrição."}));
    }
}
