//! Route-level tests: the BFF runs on Rocket's local client, the PHP backend
//! is a wiremock server.

use career_portal_bff::client::{JobFilters, JobsApi};
use career_portal_bff::{build_rocket, start_web_server, ApiConfig};
use chrono::NaiveDate;
use rocket::http::{ContentType, Cookie, Header, SameSite, Status};
use rocket::local::asynchronous::Client;
use rocket::time::Duration;
use serde_json::{json, Value};
use std::net::{IpAddr, Ipv4Addr, TcpListener};
use wiremock::matchers::{body_string_contains, header, header_regex, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============= Helper Functions =============

async fn client_for(backend_url: &str) -> Client {
    client_with(ApiConfig::new(backend_url)).await
}

async fn client_with(config: ApiConfig) -> Client {
    let rocket = build_rocket(config).expect("rocket should build");
    Client::tracked(rocket).await.expect("valid rocket instance")
}

/// Starts the real server on a free local port and waits for it to answer
async fn launch_server(config: ApiConfig) -> String {
    let port = TcpListener::bind("127.0.0.1:0")
        .and_then(|listener| listener.local_addr())
        .expect("free port")
        .port();
    tokio::spawn(start_web_server(config, IpAddr::V4(Ipv4Addr::LOCALHOST), port));

    let base = format!("http://127.0.0.1:{}", port);
    let http = reqwest::Client::new();
    for _ in 0..100 {
        if http.get(format!("{}/api/health", base)).send().await.is_ok() {
            return base;
        }
        tokio::time::sleep(std::time::Duration::from_millis(50)).await;
    }
    panic!("server did not start on {}", base);
}

async fn json_body(response: rocket::local::asynchronous::LocalResponse<'_>) -> Value {
    response.into_json::<Value>().await.expect("JSON body")
}

// ============= Validation =============

#[tokio::test]
async fn missing_jobseeker_id_is_rejected_without_upstream_call() {
    let backend = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/jobseeker/get_saved_jobs.php"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .expect(0)
        .mount(&backend)
        .await;

    let client = client_for(&backend.uri()).await;
    let response = client.get("/api/seeker/jobs/get_saved_jobs").dispatch().await;

    assert_eq!(response.status(), Status::BadRequest);
    assert_eq!(
        json_body(response).await,
        json!({ "success": false, "message": "Jobseeker ID is required" })
    );
}

#[tokio::test]
async fn blank_token_counts_as_missing() {
    let backend = MockServer::start().await;
    let client = client_for(&backend.uri()).await;

    let response = client
        .post("/api/seeker/auth/reset-password")
        .header(ContentType::JSON)
        .body(r#"{"token":"   ","password":"secret"}"#)
        .dispatch()
        .await;

    assert_eq!(response.status(), Status::BadRequest);
    assert_eq!(json_body(response).await["message"], json!("Token is required"));
}

// ============= Forwarding =============

#[tokio::test]
async fn saved_jobs_are_relayed_with_query() {
    let backend = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/jobseeker/get_saved_jobs.php"))
        .and(query_param("jobseeker_id", "4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": 1,
            "data": [{ "id": 9, "title": "Bus driver" }]
        })))
        .expect(1)
        .mount(&backend)
        .await;

    let client = client_for(&backend.uri()).await;
    let response = client
        .get("/api/seeker/jobs/get_saved_jobs?jobseeker_id=4")
        .dispatch()
        .await;

    assert_eq!(response.status(), Status::Ok);
    let body = json_body(response).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["status"], json!(1));
    assert_eq!(body["data"][0]["title"], json!("Bus driver"));
}

#[tokio::test]
async fn json_body_is_re_encoded_as_form() {
    let backend = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/jobseeker/save_job.php"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string_contains("jobseeker_id=4"))
        .and(body_string_contains("job_id=17"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "success": true, "message": "Saved" })),
        )
        .expect(1)
        .mount(&backend)
        .await;

    let client = client_for(&backend.uri()).await;
    let response = client
        .post("/api/seeker/jobs/save_job")
        .header(ContentType::JSON)
        .body(r#"{"jobseeker_id":"4","job_id":17}"#)
        .dispatch()
        .await;

    assert_eq!(response.status(), Status::Ok);
    assert_eq!(
        json_body(response).await,
        json!({ "success": true, "message": "Saved" })
    );
}

#[tokio::test]
async fn multipart_is_forwarded_verbatim() {
    let backend = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/jobseeker/upload_resume.php"))
        .and(header_regex("content-type", "^multipart/form-data; ?boundary=XBOUNDARY$"))
        .and(body_string_contains("%PDF-1.4 fake"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .expect(1)
        .mount(&backend)
        .await;

    let body = "--XBOUNDARY\r\n\
        Content-Disposition: form-data; name=\"jobseeker_id\"\r\n\r\n4\r\n\
        --XBOUNDARY\r\n\
        Content-Disposition: form-data; name=\"resume\"; filename=\"cv.pdf\"\r\n\
        Content-Type: application/pdf\r\n\r\n%PDF-1.4 fake\r\n\
        --XBOUNDARY--\r\n";

    let client = client_for(&backend.uri()).await;
    let response = client
        .post("/api/seeker/profile/upload_resume")
        .header(Header::new(
            "Content-Type",
            "multipart/form-data; boundary=XBOUNDARY",
        ))
        .body(body)
        .dispatch()
        .await;

    assert_eq!(response.status(), Status::Ok);
    assert_eq!(json_body(response).await["success"], json!(true));
}

#[tokio::test]
async fn multipart_without_jobseeker_id_is_rejected() {
    let backend = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/jobseeker/upload_resume.php"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .expect(0)
        .mount(&backend)
        .await;

    let body = "--XBOUNDARY\r\n\
        Content-Disposition: form-data; name=\"resume\"; filename=\"cv.pdf\"\r\n\
        Content-Type: application/pdf\r\n\r\n%PDF-1.4 fake\r\n\
        --XBOUNDARY--\r\n";

    let client = client_for(&backend.uri()).await;
    let response = client
        .post("/api/seeker/profile/upload_resume")
        .header(Header::new(
            "Content-Type",
            "multipart/form-data; boundary=XBOUNDARY",
        ))
        .body(body)
        .dispatch()
        .await;

    assert_eq!(response.status(), Status::BadRequest);
    assert_eq!(
        json_body(response).await,
        json!({ "success": false, "message": "Jobseeker ID is required" })
    );
}

#[tokio::test]
async fn oversized_upload_is_rejected() {
    let backend = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/jobseeker/upload_resume.php"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .expect(0)
        .mount(&backend)
        .await;

    let body = format!(
        "--XBOUNDARY\r\n\
        Content-Disposition: form-data; name=\"jobseeker_id\"\r\n\r\n4\r\n\
        --XBOUNDARY\r\n\
        Content-Disposition: form-data; name=\"resume\"; filename=\"cv.pdf\"\r\n\r\n{}\r\n\
        --XBOUNDARY--\r\n",
        "x".repeat(1024 * 1024 + 1)
    );

    let client = client_with(ApiConfig::new(backend.uri()).with_max_body_mb(1)).await;
    let response = client
        .post("/api/seeker/profile/upload_resume")
        .header(Header::new(
            "Content-Type",
            "multipart/form-data; boundary=XBOUNDARY",
        ))
        .body(body)
        .dispatch()
        .await;

    assert_eq!(response.status(), Status::PayloadTooLarge);
    assert_eq!(json_body(response).await["success"], json!(false));
}

#[tokio::test]
async fn job_details_use_path_id() {
    let backend = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/jobs/get_job.php"))
        .and(query_param("id", "42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": { "id": "42", "title": "Teacher" }
        })))
        .expect(1)
        .mount(&backend)
        .await;

    let client = client_for(&backend.uri()).await;
    let response = client.get("/api/jobs/42").dispatch().await;
    assert_eq!(response.status(), Status::Ok);
    assert_eq!(json_body(response).await["data"]["title"], json!("Teacher"));
}

// ============= Upstream failures =============

#[tokio::test]
async fn non_json_upstream_is_bad_gateway() {
    let backend = MockServer::start().await;
    let html = format!("<br /><b>Fatal error</b>: {}", "x".repeat(400));
    Mock::given(method("GET"))
        .and(path("/jobs/get_jobs.php"))
        .respond_with(ResponseTemplate::new(200).set_body_string(html))
        .mount(&backend)
        .await;

    let client = client_for(&backend.uri()).await;
    let response = client.get("/api/jobs").dispatch().await;

    assert_eq!(response.status(), Status::BadGateway);
    let body = json_body(response).await;
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["message"], json!("Invalid response from server"));
    assert_eq!(body["raw"].as_str().unwrap().chars().count(), 200);
}

#[tokio::test]
async fn upstream_error_status_is_relayed() {
    let backend = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/jobseeker/login.php"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({ "error": "Invalid credentials" })),
        )
        .mount(&backend)
        .await;

    let client = client_for(&backend.uri()).await;
    let response = client
        .post("/api/seeker/auth/login")
        .header(ContentType::Form)
        .body("email=a%40b.c&password=wrong")
        .dispatch()
        .await;

    assert_eq!(response.status(), Status::Unauthorized);
    let body = json_body(response).await;
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["message"], json!("Invalid credentials"));
}

#[tokio::test]
async fn unreachable_backend_is_internal_error() {
    let client = client_for("http://127.0.0.1:1").await;
    let response = client.get("/api/jobs").dispatch().await;

    assert_eq!(response.status(), Status::InternalServerError);
    assert_eq!(
        json_body(response).await,
        json!({ "success": false, "message": "Internal server error" })
    );
}

// ============= Sessions =============

#[tokio::test]
async fn slow_backend_times_out_as_internal_error() {
    let backend = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/jobs/get_jobs.php"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "success": true, "data": [] }))
                .set_delay(std::time::Duration::from_secs(2)),
        )
        .mount(&backend)
        .await;

    let config = ApiConfig::new(backend.uri())
        .with_timeout(Some(std::time::Duration::from_millis(200)));
    let client = client_with(config).await;
    let response = client.get("/api/jobs").dispatch().await;

    assert_eq!(response.status(), Status::InternalServerError);
    assert_eq!(
        json_body(response).await,
        json!({ "success": false, "message": "Internal server error" })
    );
}

#[tokio::test]
async fn admin_login_sets_session_cookies() {
    let backend = MockServer::start().await;
    let payload = json!({ "success": true, "requires_otp": false, "admin_id": 42 });
    Mock::given(method("POST"))
        .and(path("/admin/login.php"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(payload.clone()))
        .expect(1)
        .mount(&backend)
        .await;

    let client = client_for(&backend.uri()).await;
    let response = client
        .post("/api/admin/auth/login")
        .header(ContentType::JSON)
        .body(r#"{"email":"root@portal.test","password":"secret"}"#)
        .dispatch()
        .await;

    assert_eq!(response.status(), Status::Ok);
    for (name, value) in [("admin_jwt", "1"), ("admin_id", "42")] {
        let cookie = response.cookies().get(name).expect("session cookie set");
        assert_eq!(cookie.value(), value);
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
        assert_eq!(cookie.max_age(), Some(Duration::days(7)));
    }
    assert_eq!(json_body(response).await, payload);
}

#[tokio::test]
async fn pending_otp_sets_no_cookies() {
    let backend = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/admin/login.php"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "requires_otp": true,
            "admin_id": 42
        })))
        .mount(&backend)
        .await;

    let client = client_for(&backend.uri()).await;
    let response = client
        .post("/api/admin/auth/login")
        .header(ContentType::JSON)
        .body(r#"{"email":"root@portal.test","password":"secret"}"#)
        .dispatch()
        .await;

    assert_eq!(response.status(), Status::Ok);
    assert!(response.cookies().get("admin_jwt").is_none());
    assert!(response.cookies().get("admin_id").is_none());
}

#[tokio::test]
async fn admin_session_follows_login_and_logout() {
    let backend = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/admin/verify_otp.php"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": { "admin_id": 7 }
        })))
        .mount(&backend)
        .await;

    let client = client_for(&backend.uri()).await;

    let response = client.get("/api/admin/auth/session").dispatch().await;
    assert_eq!(response.status(), Status::Unauthorized);
    assert_eq!(json_body(response).await["message"], json!("Not authenticated"));

    let response = client
        .post("/api/admin/auth/verify-otp")
        .header(ContentType::JSON)
        .body(r#"{"admin_id":7,"otp":"123456"}"#)
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Ok);

    let response = client.get("/api/admin/auth/session").dispatch().await;
    assert_eq!(response.status(), Status::Ok);
    assert_eq!(
        json_body(response).await,
        json!({ "success": true, "data": { "admin_id": "7" } })
    );

    let response = client.post("/api/admin/auth/logout").dispatch().await;
    assert_eq!(response.status(), Status::Ok);
    assert_eq!(
        json_body(response).await,
        json!({ "success": true, "message": "Logged out" })
    );

    let response = client.get("/api/admin/auth/session").dispatch().await;
    assert_eq!(response.status(), Status::Unauthorized);
}

#[tokio::test]
async fn employer_jobs_fall_back_to_session_cookie() {
    let backend = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/employer/get_jobs.php"))
        .and(query_param("employer_id", "12"))
        .and(header_regex("cookie", "employer_id=12"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true, "data": [] })))
        .expect(1)
        .mount(&backend)
        .await;

    let client = client_for(&backend.uri()).await;
    let response = client
        .get("/api/employer/jobs")
        .cookie(Cookie::new("employer_id", "12"))
        .dispatch()
        .await;

    assert_eq!(response.status(), Status::Ok);
}

#[tokio::test]
async fn employer_login_and_logout_manage_cookie() {
    let backend = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/employer/login.php"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": { "id": 12, "company_name": "Acme Co" }
        })))
        .mount(&backend)
        .await;
    Mock::given(method("POST"))
        .and(path("/employer/logout.php"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&backend)
        .await;

    let client = client_for(&backend.uri()).await;
    let response = client
        .post("/api/employer/auth/login")
        .header(ContentType::JSON)
        .body(r#"{"email":"hr@acme.com","password":"secret"}"#)
        .dispatch()
        .await;
    let cookie = response.cookies().get("employer_id").expect("employer cookie set");
    assert_eq!(cookie.value(), "12");

    let response = client.post("/api/employer/auth/logout").dispatch().await;
    assert_eq!(response.status(), Status::InternalServerError);
    let cleared = response
        .headers()
        .get("Set-Cookie")
        .any(|value| value.starts_with("employer_id=;") && value.contains("Max-Age=0"));
    assert!(cleared, "employer_id should be cleared even when the backend fails");
}

// ============= Admin users =============

#[tokio::test]
async fn employer_rows_are_mapped() {
    let backend = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/get_employers.php"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "draw": 1,
            "data": [
                [3, "Acme Co", "hr@acme.com"],
                [4, "Globex", "jobs@globex.test", "Suspended"]
            ]
        })))
        .mount(&backend)
        .await;

    let client = client_for(&backend.uri()).await;
    let response = client.get("/api/admin/users/employers").dispatch().await;

    assert_eq!(response.status(), Status::Ok);
    assert_eq!(
        json_body(response).await,
        json!({
            "success": true,
            "data": [
                { "type": "employer", "name": "Acme Co", "email": "hr@acme.com", "role": "Employer", "status": "Active" },
                { "type": "employer", "name": "Globex", "email": "jobs@globex.test", "role": "Employer", "status": "Suspended" }
            ]
        })
    );
}

#[tokio::test]
async fn jobseeker_rows_accept_bare_arrays() {
    let backend = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/get_jobseekers.php"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([[1, "Ada Obi", "ada@mail.test"]])),
        )
        .mount(&backend)
        .await;

    let client = client_for(&backend.uri()).await;
    let response = client.get("/api/admin/users/jobseekers").dispatch().await;

    let body = json_body(response).await;
    assert_eq!(body["data"][0]["type"], json!("jobseeker"));
    assert_eq!(body["data"][0]["role"], json!("Job Seeker"));
}

// ============= Local routes =============

#[tokio::test]
async fn layout_route_classifies_paths() {
    let client = client_for("http://127.0.0.1:1").await;

    let response = client.get("/api/layout?path=/admin/users").dispatch().await;
    assert_eq!(response.status(), Status::Ok);
    assert_eq!(
        json_body(response).await,
        json!({
            "success": true,
            "data": {
                "section": "admin_dashboard",
                "chrome": { "navbar": false, "footer": false, "sidebar": true, "topbar": true }
            }
        })
    );

    let response = client.get("/api/layout").dispatch().await;
    assert_eq!(response.status(), Status::BadRequest);
    assert_eq!(json_body(response).await["message"], json!("Path is required"));
}

#[tokio::test]
async fn unknown_route_returns_envelope() {
    let client = client_for("http://127.0.0.1:1").await;
    let response = client.get("/api/nope").dispatch().await;

    assert_eq!(response.status(), Status::NotFound);
    assert_eq!(json_body(response).await["success"], json!(false));
}

#[tokio::test]
async fn request_id_is_echoed_and_forwarded() {
    let backend = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/jobs/get_jobs.php"))
        .and(header("x-request-id", "req-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true, "data": [] })))
        .expect(1)
        .mount(&backend)
        .await;

    let client = client_for(&backend.uri()).await;
    let response = client
        .get("/api/jobs")
        .header(Header::new("X-Request-Id", "req-123"))
        .dispatch()
        .await;

    assert_eq!(response.headers().get_one("X-Request-Id"), Some("req-123"));
}

#[tokio::test]
async fn raw_cookie_header_is_forwarded_verbatim() {
    let raw_cookie = "PHPSESSID=abc; remember=a%2Bb%3Bevil%3D1";
    let backend = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/jobs/get_jobs.php"))
        .and(header("cookie", raw_cookie))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true, "data": [] })))
        .expect(1)
        .mount(&backend)
        .await;

    let base = launch_server(ApiConfig::new(backend.uri())).await;
    let response = reqwest::Client::new()
        .get(format!("{}/api/jobs", base))
        .header("Cookie", raw_cookie)
        .send()
        .await
        .expect("server reachable");

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.expect("JSON body");
    assert_eq!(body["success"], json!(true));
}

#[tokio::test]
async fn preflight_echoes_origin_and_requested_headers() {
    let client = client_for("http://127.0.0.1:9").await;
    let response = client
        .options("/api/seeker/auth/login")
        .header(Header::new("Origin", "https://portal.example.com"))
        .header(Header::new("Access-Control-Request-Method", "POST"))
        .header(Header::new(
            "Access-Control-Request-Headers",
            "content-type, authorization",
        ))
        .dispatch()
        .await;

    assert_eq!(response.status(), Status::Ok);
    let headers = response.headers();
    assert_eq!(
        headers.get_one("Access-Control-Allow-Origin"),
        Some("https://portal.example.com")
    );
    assert_eq!(
        headers.get_one("Access-Control-Allow-Headers"),
        Some("content-type, authorization")
    );
    assert_eq!(headers.get_one("Access-Control-Allow-Credentials"), Some("true"));
    assert_eq!(headers.get_one("Vary"), Some("Origin"));
}

#[tokio::test]
async fn cors_lists_allowed_headers_without_preflight_request() {
    let client = client_for("http://127.0.0.1:9").await;
    let response = client.get("/api/layout?path=/admin/users").dispatch().await;

    assert_eq!(
        response.headers().get_one("Access-Control-Allow-Headers"),
        Some("Content-Type, Authorization, X-Request-Id")
    );
    assert_eq!(response.headers().get_one("Access-Control-Allow-Origin"), Some("*"));
}

// ============= Typed client =============

#[tokio::test]
async fn jobs_api_builds_filters_and_sends_credentials() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/jobs"))
        .and(query_param("search", "driver"))
        .and(query_param("location", "Lagos"))
        .and(query_param("page", "2"))
        .and(header("authorization", "Bearer abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": [{ "id": 5, "title": "Driver", "salary_min": "1000" }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = JobsApi::new(server.uri())
        .unwrap()
        .with_credentials(
            career_portal_bff::core::Credentials::anonymous().with_authorization("Bearer abc"),
        );
    let filters = JobFilters::new().search("driver").location("Lagos").page(2);
    let jobs = api.list_jobs(&filters).await.unwrap();

    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0].id, "5");
    assert_eq!(jobs[0].salary_min, Some(1000.0));
}

#[tokio::test]
async fn jobs_api_surfaces_rejections() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/seeker/jobs/get_saved_jobs"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "success": false,
            "message": "Jobseeker ID is required"
        })))
        .mount(&server)
        .await;

    let api = JobsApi::new(server.uri()).unwrap();
    let err = api.saved_jobs("").await.unwrap_err();
    match err {
        career_portal_bff::client::ClientError::Rejected { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message, "Jobseeker ID is required");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn jobs_api_lists_open_jobs_newest_first() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/jobs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": { "jobs": [
                { "id": 1, "title": "Clerk", "posted_date": "2024-02-01", "expiry_date": "2024-03-01" },
                { "id": 2, "title": "Driver", "posted_date": "2024-03-05 10:00:00" },
                { "id": 3, "title": "Teacher", "posted_date": "2024-03-10", "expiry_date": "2024-05-01" }
            ] }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = JobsApi::new(server.uri()).unwrap();
    let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
    let jobs = api.list_open_jobs(&JobFilters::new(), today).await.unwrap();

    let ids: Vec<&str> = jobs.iter().map(|job| job.id.as_str()).collect();
    assert_eq!(ids, vec!["3", "2"]);
}
