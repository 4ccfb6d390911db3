mod common;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::json;

use common::{settings, spawn_app, spawn_app_with};
use recruiting_portal::error::SUBMISSION_FAILED_NOTICE;

fn applicant() -> serde_json::Value {
    json!({
        "fullName": "Ana Ruiz",
        "email": "ana@x.com",
        "phone": "442 123 4567",
        "zona": "Norte",
    })
}

#[tokio::test]
async fn public_flow_end_to_end() {
    let app = spawn_app();
    let vacancy_id = app.create_vacancy("Machine Operator").await;
    let question_id = app
        .create_question(
            &vacancy_id,
            json!({ "text": "Years of experience?", "type": "number", "required": true }),
        )
        .await;

    let (status, form) = app
        .get(&format!("/api/public/vacancies/{}/form", vacancy_id))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(form["mode"], "preselected");
    assert_eq!(form["vacancy"]["title"], "Machine Operator");
    let questions = form["questions"].as_array().unwrap();
    assert_eq!(questions.len(), 1);
    assert_eq!(questions[0]["name"], format!("question_{}", question_id));
    assert_eq!(questions[0]["label"], "1. Years of experience?");
    assert_eq!(questions[0]["control"], "number_input");
    assert_eq!(questions[0]["required"], true);

    // Blank required answer
    let mut body = applicant();
    body["answers"] = json!({ question_id.clone(): "  " });
    let (status, rejected) = app
        .post_json(&format!("/api/public/vacancies/{}/applications", vacancy_id), &body)
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let errors = rejected["errors"].as_object().unwrap();
    assert_eq!(errors.len(), 1);
    assert!(errors.contains_key(&format!("question_{}", question_id)));

    let (_, listed) = app.admin("GET", "/api/admin/candidates", None).await;
    assert_eq!(listed["total"], 0);

    // Answered
    body["answers"] = json!({ question_id.clone(): "5" });
    let (status, created) = app
        .post_json(&format!("/api/public/vacancies/{}/applications", vacancy_id), &body)
        .await;
    assert_eq!(status, StatusCode::CREATED, "{}", created);
    assert_eq!(created["status"], "pending");
    assert_eq!(created["vacancyTitle"], "Machine Operator");
    assert_eq!(
        created["answers"],
        json!([{
            "questionId": question_id,
            "questionText": "Years of experience?",
            "answer": "5",
        }])
    );

    let (_, listed) = app
        .admin(
            "GET",
            &format!("/api/admin/candidates?vacancyId={}", vacancy_id),
            None,
        )
        .await;
    assert_eq!(listed["total"], 1);
    assert_eq!(listed["items"][0]["fullName"], "Ana Ruiz");
}

#[tokio::test]
async fn combined_form_reports_every_invalid_field() {
    let app = spawn_app();
    let (status, body) = app
        .post_json(
            "/api/public/applications",
            &json!({ "fullName": " ", "email": "a@b", "phone": "12345" }),
        )
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let mut keys: Vec<&str> = body["errors"]
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    keys.sort();
    assert_eq!(keys, vec!["email", "fullName", "phone", "vacancyId"]);
}

#[tokio::test]
async fn combined_form_lists_vacancies_and_loads_picked_questions() {
    let app = spawn_app();
    let vacancy_id = app.create_vacancy("Driver").await;
    app.create_question(
        &vacancy_id,
        json!({ "text": "Licence type", "type": "select", "options": ["A", "B"] }),
    )
    .await;
    app.create_vacancy("Cashier").await;

    let (status, form) = app.get("/api/public/form").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(form["mode"], "combined");
    assert_eq!(form["vacancies"].as_array().unwrap().len(), 2);
    assert!(form["questions"].as_array().unwrap().is_empty());

    let (_, form) = app
        .get(&format!("/api/public/form?vacancyId={}", vacancy_id))
        .await;
    let choices = form["questions"][0]["choices"].as_array().unwrap();
    assert_eq!(form["questions"][0]["control"], "dropdown");
    assert_eq!(choices.len(), 3);
    assert_eq!(choices[0]["value"], "");

    let mut body = applicant();
    body["vacancyId"] = json!(vacancy_id);
    let (status, created) = app.post_json("/api/public/applications", &body).await;
    assert_eq!(status, StatusCode::CREATED, "{}", created);
    assert_eq!(created["vacancyTitle"], "Driver");
    assert_eq!(created["answers"][0]["answer"], "");
}

#[tokio::test]
async fn checkbox_answers_accept_lists_of_options() {
    let app = spawn_app();
    let vacancy_id = app.create_vacancy("Warehouse").await;
    let question_id = app
        .create_question(
            &vacancy_id,
            json!({
                "text": "Machines you can operate",
                "type": "checkbox",
                "required": true,
                "options": ["Forklift", "Crane"],
            }),
        )
        .await;

    let mut body = applicant();
    body["answers"] = json!({ format!("question_{}", question_id): ["Forklift", "Truck"] });
    let uri = format!("/api/public/vacancies/{}/applications", vacancy_id);
    let (status, _) = app.post_json(&uri, &body).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    body["answers"] = json!({ format!("question_{}", question_id): ["Forklift", "Crane"] });
    let (status, created) = app.post_json(&uri, &body).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["answers"][0]["answer"], "Forklift, Crane");
}

#[tokio::test]
async fn store_outage_degrades_reads_and_fails_submission_with_notice() {
    let app = spawn_app();
    let vacancy_id = app.create_vacancy("Machine Operator").await;
    app.store.set_offline(true);

    let (status, form) = app
        .get(&format!("/api/public/vacancies/{}/form", vacancy_id))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert!(form["questions"].as_array().unwrap().is_empty());
    assert!(form["vacancy"].is_null());

    let (status, body) = app
        .post_json(
            &format!("/api/public/vacancies/{}/applications", vacancy_id),
            &applicant(),
        )
        .await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["error"], SUBMISSION_FAILED_NOTICE);

    app.store.set_offline(false);
    let (status, _) = app
        .post_json(
            &format!("/api/public/vacancies/{}/applications", vacancy_id),
            &applicant(),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn closed_vacancies_are_hidden_from_applicants() {
    let app = spawn_app();
    let vacancy_id = app.create_vacancy("Night Guard").await;
    let (status, _) = app
        .admin("POST", &format!("/api/admin/vacancies/{}/toggle", vacancy_id), None)
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = app.get(&format!("/api/public/vacancies/{}", vacancy_id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (_, listed) = app.get("/api/public/vacancies").await;
    assert_eq!(listed["total"], 0);

    let (status, _) = app
        .get(&format!("/api/public/vacancies/{}/form", vacancy_id))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = app
        .post_json(
            &format!("/api/public/vacancies/{}/applications", vacancy_id),
            &applicant(),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_vacancy_links_are_not_found() {
    let app = spawn_app();
    let missing = uuid::Uuid::new_v4();

    let (status, _) = app
        .get(&format!("/api/public/vacancies/{}/form", missing))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app
        .post_json(
            &format!("/api/public/vacancies/{}/applications", missing),
            &applicant(),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, listed) = app.admin("GET", "/api/admin/candidates", None).await;
    assert_eq!(listed["total"], 0);
}

#[tokio::test]
async fn public_routes_are_rate_limited_per_client() {
    let app = spawn_app_with(settings(2));
    for _ in 0..2 {
        let (status, _) = app.get("/api/public/vacancies").await;
        assert_eq!(status, StatusCode::OK);
    }
    let (status, _) = app.get("/api/public/vacancies").await;
    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);

    // A spoofed forwarding header does not buy a fresh window.
    let (status, _) = app
        .send(
            Request::get("/api/public/vacancies")
                .header("x-forwarded-for", "198.51.100.23")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);

    let (status, _) = app.get("/health").await;
    assert_eq!(status, StatusCode::OK);
}
