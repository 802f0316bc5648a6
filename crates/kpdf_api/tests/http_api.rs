// crates/kpdf_api/tests/http_api.rs
//
// Drives the real router over TCP: public catalog, admin gate, request
// triage. Each test gets its own data directory and port.

use std::net::SocketAddr;
use std::time::Duration;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use kpdf_api::routes::app_router;
use kpdf_api::AppState;
use kpdf_service::config::{password_digest, Config};
use kpdf_service::CatalogService;
use serde_json::{json, Value};
use tempfile::TempDir;

const PASSWORD: &str = "test-admin-pw";

struct TestApp {
    base: String,
    dir: TempDir,
}

async fn spawn_app() -> TestApp {
    let dir = tempfile::tempdir().expect("temp dir");
    let config = Config {
        bind: "127.0.0.1:0".to_string(),
        data_dir: dir.path().to_path_buf(),
        admin_user: "admin".to_string(),
        admin_password_sha256: password_digest(PASSWORD),
        session_ttl: Duration::from_secs(7 * 24 * 60 * 60),
    };

    let service = CatalogService::open(&config.data_dir);
    service.ensure_storage().await.expect("seed data files");

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    let app = app_router(AppState::new(config, service));
    tokio::spawn(async move {
        axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>())
            .await
            .expect("server");
    });

    TestApp { base: format!("http://{}", addr), dir }
}

fn agent() -> ureq::Agent {
    ureq::AgentBuilder::new().redirects(0).build()
}

fn basic_auth() -> String {
    format!("Basic {}", BASE64.encode(format!("admin:{}", PASSWORD)))
}

/// Status code plus body (JSON when it parses, otherwise a JSON string).
fn send(result: Result<ureq::Response, ureq::Error>) -> (u16, Value) {
    let response = match result {
        Ok(resp) => resp,
        Err(ureq::Error::Status(_, resp)) => resp,
        Err(e) => panic!("transport error: {}", e),
    };
    let status = response.status();
    let text = response.into_string().expect("body");
    let body = serde_json::from_str(&text).unwrap_or(Value::String(text));
    (status, body)
}

fn sample_document(title: &str) -> Value {
    json!({
        "category_l1": "고등 교육과정",
        "category_l2": "수학",
        "category_l3": "고2",
        "category_l4": "문제집",
        "publisher": "좋은책신사고",
        "main_title": title,
        "subtitle": "개념편",
        "pdf_url": format!("https://files.example/{}.pdf", title)
    })
}

async fn blocking<F: FnOnce() + Send + 'static>(f: F) {
    tokio::task::spawn_blocking(f).await.expect("client thread panicked");
}

#[tokio::test(flavor = "multi_thread")]
async fn enums_are_public() {
    let app = spawn_app().await;
    blocking(move || {
        let (status, body) = send(agent().get(&format!("{}/api/enums", app.base)).call());
        assert_eq!(status, 200);
        assert_eq!(body["l1"], json!(["중등 교육과정", "고등 교육과정", "기타"]));
        assert_eq!(body["l3_high"], json!(["고1", "고2", "고3"]));
    })
    .await;
}

#[tokio::test(flavor = "multi_thread")]
async fn admin_routes_reject_anonymous_callers() {
    let app = spawn_app().await;
    blocking(move || {
        let a = agent();
        let (status, body) = send(
            a.post(&format!("{}/api/pdfs", app.base))
                .send_json(sample_document("무단")),
        );
        assert_eq!(status, 403);
        assert_eq!(body, json!({ "error": "Forbidden" }));

        let (status, _) = send(a.get(&format!("{}/api/requests", app.base)).call());
        assert_eq!(status, 403);

        let (status, _) = send(
            a.get(&format!("{}/api/requests", app.base))
                .set("Authorization", &format!("Basic {}", BASE64.encode("admin:wrong")))
                .call(),
        );
        assert_eq!(status, 403);

        let (status, _) = send(
            a.get(&format!("{}/api/requests", app.base))
                .set("Cookie", "kbspdf_auth=made-up")
                .call(),
        );
        assert_eq!(status, 403);

        let (status, _) = send(a.get(&format!("{}/admin/debug-data", app.base)).call());
        assert_eq!(status, 403);
    })
    .await;
}

#[tokio::test(flavor = "multi_thread")]
async fn document_lifecycle_with_basic_auth() {
    let app = spawn_app().await;
    blocking(move || {
        let a = agent();
        let auth = basic_auth();

        // Create two, newest comes back first
        for title in ["first", "second"] {
            let (status, body) = send(
                a.post(&format!("{}/api/pdfs", app.base))
                    .set("Authorization", &auth)
                    .send_json(sample_document(title)),
            );
            assert_eq!(status, 201);
            assert_eq!(body["main_title"], title);
            assert!(body["id"].as_str().is_some_and(|id| !id.is_empty()));
            assert!(body["upload_date"].as_str().is_some());
        }

        let (status, list) = send(a.get(&format!("{}/api/pdfs", app.base)).call());
        assert_eq!(status, 200);
        let titles: Vec<&str> = list
            .as_array()
            .unwrap()
            .iter()
            .map(|d| d["main_title"].as_str().unwrap())
            .collect();
        assert_eq!(titles, vec!["second", "first"]);

        // Fetch by id
        let id = list[0]["id"].as_str().unwrap().to_string();
        let (status, doc) = send(a.get(&format!("{}/api/pdfs/{}", app.base, id)).call());
        assert_eq!(status, 200);
        assert_eq!(doc, list[0]);

        // Delete, then it is gone
        let (status, body) = send(
            a.delete(&format!("{}/api/pdfs/{}", app.base, id))
                .set("Authorization", &auth)
                .call(),
        );
        assert_eq!(status, 200);
        assert_eq!(body["ok"], true);
        assert_eq!(body["removed"]["id"], id.as_str());

        let (status, body) = send(a.get(&format!("{}/api/pdfs/{}", app.base, id)).call());
        assert_eq!(status, 404);
        assert_eq!(body, json!({ "error": "Not found" }));

        let (status, _) = send(
            a.delete(&format!("{}/api/pdfs/{}", app.base, id))
                .set("Authorization", &auth)
                .call(),
        );
        assert_eq!(status, 404);

        // The file on disk reflects the single survivor
        let raw = std::fs::read_to_string(app.dir.path().join("pdfs.json")).unwrap();
        let on_disk: Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(on_disk.as_array().unwrap().len(), 1);
    })
    .await;
}

#[tokio::test(flavor = "multi_thread")]
async fn invalid_document_returns_every_error() {
    let app = spawn_app().await;
    blocking(move || {
        let (status, body) = send(
            agent()
                .post(&format!("{}/api/pdfs", app.base))
                .set("Authorization", &basic_auth())
                .send_json(json!({
                    "category_l1": "중등 교육과정",
                    "category_l3": "고1",
                    "main_title": " ",
                    "pdf_url": "notes.docx"
                })),
        );
        assert_eq!(status, 400);
        assert_eq!(
            body["errors"],
            json!([
                "Invalid category_l2",
                "Invalid category_l4",
                "main_title required",
                "pdf_url must end with .pdf or .hwp",
                "Invalid category_l3 for selected category_l1"
            ])
        );
    })
    .await;
}

#[tokio::test(flavor = "multi_thread")]
async fn filters_narrow_the_listing() {
    let app = spawn_app().await;
    blocking(move || {
        let a = agent();
        let auth = basic_auth();
        let mut english = sample_document("Reading Power");
        english["category_l2"] = json!("영어");
        english["subtitle"] = json!("Vocabulary Builder");

        for doc in [sample_document("미적분"), english] {
            let (status, _) = send(
                a.post(&format!("{}/api/pdfs", app.base))
                    .set("Authorization", &auth)
                    .send_json(doc),
            );
            assert_eq!(status, 201);
        }

        let (_, math) = send(
            a.get(&format!("{}/api/pdfs", app.base))
                .query("l2", "수학")
                .call(),
        );
        assert_eq!(math.as_array().unwrap().len(), 1);
        assert_eq!(math[0]["main_title"], "미적분");

        let (_, vocab) = send(
            a.get(&format!("{}/api/pdfs", app.base))
                .query("q", "VOCABULARY")
                .call(),
        );
        assert_eq!(vocab.as_array().unwrap().len(), 1);
        assert_eq!(vocab[0]["main_title"], "Reading Power");

        let (_, none) = send(
            a.get(&format!("{}/api/pdfs", app.base))
                .query("l2", "영어")
                .query("q", "미적분")
                .call(),
        );
        assert!(none.as_array().unwrap().is_empty());

        let (_, all) = send(
            a.get(&format!("{}/api/pdfs", app.base))
                .query("l1", "")
                .call(),
        );
        assert_eq!(all.as_array().unwrap().len(), 2);
    })
    .await;
}

#[tokio::test(flavor = "multi_thread")]
async fn login_issues_cookie_that_opens_admin_routes() {
    let app = spawn_app().await;
    blocking(move || {
        let a = agent();

        let (status, body) = send(
            a.post(&format!("{}/admin/login", app.base))
                .send_form(&[("password", "nope")]),
        );
        assert_eq!(status, 403);
        assert_eq!(body, Value::String("Forbidden".to_string()));

        let resp = a
            .post(&format!("{}/admin/login", app.base))
            .send_form(&[("password", PASSWORD)])
            .expect("login");
        assert_eq!(resp.status(), 302);
        assert_eq!(resp.header("location"), Some("/admin/"));
        let cookie = resp.header("set-cookie").expect("cookie").to_string();
        assert!(cookie.starts_with("kbspdf_auth="));
        assert!(cookie.contains("Max-Age=604800"));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("Path=/"));

        let pair = cookie.split(';').next().unwrap().to_string();
        let (status, body) = send(
            a.get(&format!("{}/admin/debug-data", app.base))
                .set("Cookie", &pair)
                .call(),
        );
        assert_eq!(status, 200);
        assert_eq!(body["count"], 0);
        assert_eq!(body["size"], 2);
        assert!(body["path"].as_str().unwrap().ends_with("pdfs.json"));
    })
    .await;
}

#[tokio::test(flavor = "multi_thread")]
async fn request_triage() {
    let app = spawn_app().await;
    blocking(move || {
        let a = agent();
        let auth = basic_auth();

        // Public submit; title is the only requirement
        let (status, body) = send(
            a.post(&format!("{}/api/requests", app.base))
                .send_json(json!({ "comments": "no title" })),
        );
        assert_eq!(status, 400);
        assert_eq!(body, json!({ "error": "requested_title required" }));

        let (status, body) = send(
            a.post(&format!("{}/api/requests", app.base))
                .send_json(json!({
                    "requested_title": "2024 수능특강 영어",
                    "category_l1": "아무거나",
                    "comments": "해설 포함 부탁드립니다"
                })),
        );
        assert_eq!(status, 201);
        assert_eq!(body["ok"], true);
        let id = body["id"].as_str().unwrap().to_string();

        let (_, list) = send(
            a.get(&format!("{}/api/requests", app.base))
                .set("Authorization", &auth)
                .call(),
        );
        let req = &list[0];
        assert_eq!(req["id"], id.as_str());
        assert_eq!(req["status"], "working");
        assert_eq!(req["request_type"], "자료요청");
        assert_eq!(req["category_l1"], "아무거나");
        assert_eq!(req["ip_address"], "127.0.0.1");

        // Unknown status: 400, nothing changes
        let (status, body) = send(
            a.request("PATCH", &format!("{}/api/requests/{}", app.base, id))
                .set("Authorization", &auth)
                .send_json(json!({ "status": "archived" })),
        );
        assert_eq!(status, 400);
        assert_eq!(body, json!({ "error": "Invalid status" }));

        let (status, _) = send(
            a.request("PATCH", &format!("{}/api/requests/missing", app.base))
                .set("Authorization", &auth)
                .send_json(json!({ "status": "uploaded" })),
        );
        assert_eq!(status, 404);

        let (status, body) = send(
            a.request("PATCH", &format!("{}/api/requests/{}", app.base, id))
                .set("Authorization", &auth)
                .send_json(json!({ "status": "uploaded" })),
        );
        assert_eq!(status, 200);
        assert_eq!(body, json!({ "ok": true }));

        let (_, list) = send(
            a.get(&format!("{}/api/requests", app.base))
                .set("Authorization", &auth)
                .call(),
        );
        assert_eq!(list[0]["status"], "uploaded");

        // Delete
        let (status, body) = send(
            a.delete(&format!("{}/api/requests/{}", app.base, id))
                .set("Authorization", &auth)
                .call(),
        );
        assert_eq!(status, 200);
        assert_eq!(body["removed"]["requested_title"], "2024 수능특강 영어");

        let (status, _) = send(
            a.delete(&format!("{}/api/requests/{}", app.base, id))
                .set("Authorization", &auth)
                .call(),
        );
        assert_eq!(status, 404);
    })
    .await;
}

#[tokio::test(flavor = "multi_thread")]
async fn body_without_json_content_type_reads_as_empty_payload() {
    let app = spawn_app().await;
    blocking(move || {
        let a = agent();

        let (status, body) = send(
            a.post(&format!("{}/api/pdfs", app.base))
                .set("Authorization", &basic_auth())
                .send_string("{}"),
        );
        assert_eq!(status, 400);
        assert_eq!(
            body["errors"],
            json!([
                "Invalid category_l1",
                "Invalid category_l2",
                "Invalid category_l4",
                "main_title required",
                "pdf_url required",
                "category_l3 required"
            ])
        );

        let (status, body) = send(
            a.post(&format!("{}/api/requests", app.base))
                .send_string("{}"),
        );
        assert_eq!(status, 400);
        assert_eq!(body, json!({ "error": "requested_title required" }));

        // Declared JSON that does not parse is still a plain 400
        let (status, body) = send(
            a.post(&format!("{}/api/requests", app.base))
                .set("Content-Type", "application/json")
                .send_string("{not json"),
        );
        assert_eq!(status, 400);
        assert!(body["error"].as_str().is_some());
    })
    .await;
}

#[tokio::test(flavor = "multi_thread")]
async fn corrupt_catalog_file_is_a_server_error() {
    let app = spawn_app().await;
    std::fs::write(app.dir.path().join("pdfs.json"), "{broken").unwrap();

    blocking(move || {
        let a = agent();

        let (status, body) = send(
            a.get(&format!("{}/admin/debug-data", app.base))
                .set("Authorization", &basic_auth())
                .call(),
        );
        assert_eq!(status, 500);
        assert_eq!(body["error"], "Cannot read data file");
        assert!(body["detail"].as_str().is_some_and(|d| d.contains("pdfs.json")));

        let (status, body) = send(a.get(&format!("{}/api/pdfs", app.base)).call());
        assert_eq!(status, 500);
        assert_eq!(body, json!({ "error": "Internal server error" }));
    })
    .await;
}
