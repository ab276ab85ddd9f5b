use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, app_with, demo_records, Employee};
use serde_json::Value;
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(String::new())
        .unwrap()
}

// --- list ---

#[tokio::test]
async fn list_employees_empty_is_wrapped_in_data() {
    let resp = app()
        .oneshot(empty_request("GET", "/api/v1/employees"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = body_json(resp).await;
    assert_eq!(body["status"], "success");
    assert_eq!(body["data"], Value::Array(Vec::new()));
}

#[tokio::test]
async fn list_employees_seeded() {
    let resp = app_with(demo_records())
        .oneshot(empty_request("GET", "/api/v1/employees"))
        .await
        .unwrap();

    let body: Value = body_json(resp).await;
    let employees: Vec<Employee> = serde_json::from_value(body["data"].clone()).unwrap();
    assert_eq!(employees, demo_records());
}

#[tokio::test]
async fn routes_live_under_base_path() {
    let resp = app()
        .oneshot(empty_request("GET", "/employees"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- get ---

#[tokio::test]
async fn get_employee_returns_bare_record() {
    let resp = app_with(demo_records())
        .oneshot(empty_request("GET", "/api/v1/employee/2"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = body_json(resp).await;
    assert!(body.get("data").is_none());
    assert_eq!(body["employee_name"], "Garrett Winters");
    assert_eq!(body["employee_salary"], 170750);
}

#[tokio::test]
async fn get_employee_not_found() {
    let resp = app()
        .oneshot(empty_request("GET", "/api/v1/employee/42"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn get_employee_bad_id_returns_400() {
    let resp = app()
        .oneshot(empty_request("GET", "/api/v1/employee/not-a-number"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// --- create ---

#[tokio::test]
async fn create_employee_echoes_input_with_id() {
    let resp = app()
        .oneshot(json_request(
            "POST",
            "/api/v1/create",
            r#"{"name":"B","salary":"200","age":"25"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = body_json(resp).await;
    assert_eq!(body["status"], "success");
    assert_eq!(body["data"]["name"], "B");
    assert_eq!(body["data"]["salary"], "200");
    assert_eq!(body["data"]["id"], 1);
}

#[tokio::test]
async fn create_employee_non_numeric_age_returns_422() {
    let resp = app()
        .oneshot(json_request(
            "POST",
            "/api/v1/create",
            r#"{"name":"B","salary":"200","age":"old"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = body_json(resp).await;
    assert_eq!(body["status"], "error");
}

#[tokio::test]
async fn create_employee_missing_field_returns_422() {
    let resp = app()
        .oneshot(json_request("POST", "/api/v1/create", r#"{"name":"B"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// --- update ---

#[tokio::test]
async fn update_employee_not_found() {
    let resp = app()
        .oneshot(json_request(
            "PUT",
            "/api/v1/update/7",
            r#"{"name":"Nope","salary":"1","age":"1"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- delete ---

#[tokio::test]
async fn delete_employee_not_found() {
    let resp = app()
        .oneshot(empty_request("DELETE", "/api/v1/delete/7"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- full CRUD lifecycle ---

#[tokio::test]
async fn crud_lifecycle() {
    use tower::Service;

    let mut app = app().into_service();

    // create
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "POST",
            "/api/v1/create",
            r#"{"name":"Walker","salary":"1000","age":"40"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let created: Value = body_json(resp).await;
    let id = created["data"]["id"].as_u64().unwrap();

    // get
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("GET", &format!("/api/v1/employee/{id}")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let fetched: Employee = body_json(resp).await;
    assert_eq!(fetched.employee_name, "Walker");
    assert_eq!(fetched.employee_salary, 1000);

    // update
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "PUT",
            &format!("/api/v1/update/{id}"),
            r#"{"name":"Walker","salary":"1500","age":"41"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    // list reflects the update
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("GET", "/api/v1/employees"))
        .await
        .unwrap();
    let body: Value = body_json(resp).await;
    let employees: Vec<Employee> = serde_json::from_value(body["data"].clone()).unwrap();
    assert_eq!(employees.len(), 1);
    assert_eq!(employees[0].employee_salary, 1500);
    assert_eq!(employees[0].employee_age, 41);

    // delete
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("DELETE", &format!("/api/v1/delete/{id}")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = body_json(resp).await;
    assert_eq!(body["data"], id.to_string());

    // get after delete: 404
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("GET", &format!("/api/v1/employee/{id}")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert!(!body_bytes(resp).await.is_empty());
}
