use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, Todo, TodoList};
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
async fn list_todos_empty() {
    let app = app();
    let resp = app.oneshot(empty_request("GET", "/todos")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let list: TodoList = body_json(resp).await;
    assert!(list.items.is_empty());
}

#[tokio::test]
async fn list_todos_rejects_non_numeric_limit() {
    let app = app();
    let resp = app
        .oneshot(empty_request("GET", "/todos?limit=lots"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// --- create ---

#[tokio::test]
async fn create_todo_returns_201() {
    let app = app();
    let resp = app
        .oneshot(json_request(
            "POST",
            "/todos",
            r#"{"title":"Buy milk","memo":"2 litres"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let todo: Todo = body_json(resp).await;
    assert_eq!(todo.title, "Buy milk");
    assert_eq!(todo.memo, "2 litres");
    assert!(!todo.completed);
    assert!(!todo.id.is_empty());
}

#[tokio::test]
async fn create_todo_with_empty_title_returns_422() {
    let app = app();
    let resp = app
        .oneshot(json_request("POST", "/todos", r#"{"title":"","memo":"m"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn create_todo_malformed_json_returns_422() {
    let app = app();
    let resp = app
        .oneshot(json_request("POST", "/todos", r#"{"not_title":1}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// --- read / update / delete on missing ids ---

#[tokio::test]
async fn get_todo_not_found() {
    let app = app();
    let resp = app
        .oneshot(empty_request("GET", "/todos/does-not-exist"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_todo_not_found() {
    let app = app();
    let resp = app
        .oneshot(json_request(
            "PATCH",
            "/todos/does-not-exist",
            r#"{"title":"Nope"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_todo_not_found() {
    let app = app();
    let resp = app
        .oneshot(empty_request("DELETE", "/todos/does-not-exist"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- full CRUD lifecycle ---

#[tokio::test]
async fn crud_lifecycle() {
    use tower::Service;

    let mut app = app().into_service();

    // create two, to check order and limit
    let mut ids = Vec::new();
    for title in ["Walk dog", "Feed cat"] {
        let resp = ServiceExt::ready(&mut app)
            .await
            .unwrap()
            .call(json_request(
                "POST",
                "/todos",
                &format!(r#"{{"title":"{title}","memo":"today"}}"#),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);
        let created: Todo = body_json(resp).await;
        ids.push(created.id);
    }
    let id = ids[0].clone();

    // list keeps insertion order
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("GET", "/todos"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let list: TodoList = body_json(resp).await;
    let listed: Vec<String> = list.items.into_iter().map(|t| t.id).collect();
    assert_eq!(listed, ids);

    // list honours limit
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("GET", "/todos?limit=1"))
        .await
        .unwrap();
    let list: TodoList = body_json(resp).await;
    assert_eq!(list.items.len(), 1);
    assert_eq!(list.items[0].id, id);

    // get
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("GET", &format!("/todos/{id}")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let fetched: Todo = body_json(resp).await;
    assert_eq!(fetched.title, "Walk dog");

    // partial update, only memo
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "PATCH",
            &format!("/todos/{id}"),
            r#"{"memo":"tomorrow"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Todo = body_json(resp).await;
    assert_eq!(updated.title, "Walk dog"); // unchanged
    assert_eq!(updated.memo, "tomorrow");
    assert_eq!(updated.created, fetched.created);

    // partial update, only completed
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "PATCH",
            &format!("/todos/{id}"),
            r#"{"completed":true}"#,
        ))
        .await
        .unwrap();
    let updated: Todo = body_json(resp).await;
    assert_eq!(updated.memo, "tomorrow"); // unchanged from previous update
    assert!(updated.completed);

    // delete
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("DELETE", &format!("/todos/{id}")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    let body = body_bytes(resp).await;
    assert!(body.is_empty());

    // get after delete is 404
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("GET", &format!("/todos/{id}")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // list after delete, only the second todo remains
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("GET", "/todos"))
        .await
        .unwrap();
    let list: TodoList = body_json(resp).await;
    assert_eq!(list.items.len(), 1);
    assert_eq!(list.items[0].id, ids[1]);
}
