use std::time::Duration;

use actix_web::dev::ServiceResponse;
use actix_web::http::{StatusCode, header};
use actix_web::{App, test, web};
use serde_json::json;
use tera::Tera;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use rental_admin::flash_messages_framework;
use rental_admin::models::config::ServerConfig;
use rental_admin::query::QueryCache;
use rental_admin::repository::HttpRepository;
use rental_admin::routes;

const SECRET: &str = "test-secret-test-secret-test-secret-test-secret-test-secret-test-secret";

fn server_config(api_url: &str) -> ServerConfig {
    ServerConfig {
        domain: "localhost".to_string(),
        address: "127.0.0.1".to_string(),
        port: 8080,
        api_url: api_url.to_string(),
        assets_url: "/assets".to_string(),
        templates_dir: "templates/**/*".to_string(),
        secret: SECRET.to_string(),
        cache_ttl_secs: 30,
        request_timeout_secs: 5,
    }
}

/// Console app wired to `backend` the way `run` wires the real server.
macro_rules! init_app {
    ($backend:expr) => {{
        let config = server_config(&format!("{}/api/v1/", $backend.uri()));
        let repo = HttpRepository::new(&config.api_url, config.request_timeout()).unwrap();
        let tera = Tera::new(&config.templates_dir).unwrap();

        test::init_service(
            App::new()
                .wrap(flash_messages_framework(SECRET).unwrap())
                .configure(routes::configure)
                .app_data(web::Data::new(tera))
                .app_data(web::Data::new(repo))
                .app_data(web::Data::new(QueryCache::new(Duration::from_secs(30))))
                .app_data(web::Data::new(config)),
        )
        .await
    }};
}

fn envelope(result: serde_json::Value) -> serde_json::Value {
    json!({ "status": true, "statusCode": 200, "result": result })
}

fn location<B>(resp: &ServiceResponse<B>) -> String {
    resp.headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

#[actix_web::test]
async fn dashboard_links_every_section() {
    let backend = MockServer::start().await;
    let app = init_app!(backend);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
    assert!(body.contains("Dashboard"));
    assert!(body.contains("href=\"&#x2F;srm-trips\""));
}

#[actix_web::test]
async fn listing_page_renders_backend_rows() {
    let backend = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/blogs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({
            "list": [{
                "_id": "b1",
                "title": "Goa by scooter",
                "category": "travel",
                "content": "<p>Ride</p>",
                "published": true
            }],
            "page": 1,
            "limit": 10,
            "total": 1
        }))))
        .expect(1)
        .mount(&backend)
        .await;
    let app = init_app!(backend);

    let req = test::TestRequest::get().uri("/blogs?category=travel").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
    assert!(body.contains("Goa by scooter"));
    assert!(body.contains("href=\"&#x2F;blogs&#x2F;edit&#x2F;b1\""));
    assert!(!body.contains("No Blogs Found!"));
}

#[actix_web::test]
async fn empty_listing_shows_the_empty_message() {
    let backend = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/states"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({
            "list": [],
            "page": 1,
            "limit": 10,
            "total": 0
        }))))
        .mount(&backend)
        .await;
    let app = init_app!(backend);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/states").to_request()).await;
    let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
    assert!(body.contains("No States Found!"));
}

#[actix_web::test]
async fn backend_failure_renders_an_error_instead_of_rows() {
    let backend = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/categories"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&backend)
        .await;
    let app = init_app!(backend);

    let resp =
        test::call_service(&app, test::TestRequest::get().uri("/categories").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
    assert!(body.contains("Failed to load categories"));
    assert!(!body.contains("No Categories Found!"));
}

#[actix_web::test]
async fn unknown_entity_is_not_found() {
    let backend = MockServer::start().await;
    let app = init_app!(backend);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/spaceships").to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::post().uri("/spaceships/new").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn missing_record_renders_not_found_page() {
    let backend = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/jobs/gone"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&backend)
        .await;
    let app = init_app!(backend);

    let resp =
        test::call_service(&app, test::TestRequest::get().uri("/jobs/edit/gone").to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
    assert!(body.contains("Job Not Found"));
}

#[actix_web::test]
async fn edit_page_offers_reference_options() {
    let backend = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/series/s1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({
            "_id": "s1",
            "name": "Nexon",
            "slug": "nexon",
            "brandId": "br2"
        }))))
        .mount(&backend)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/brands"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({
            "list": [
                { "_id": "br1", "name": "Mahindra", "slug": "mahindra" },
                { "_id": "br2", "name": "Tata", "slug": "tata" }
            ],
            "total": 2
        }))))
        .expect(1)
        .mount(&backend)
        .await;
    let app = init_app!(backend);

    let resp =
        test::call_service(&app, test::TestRequest::get().uri("/series/edit/s1").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
    assert!(body.contains("value=\"nexon\""));
    assert!(body.contains("<option value=\"br2\" selected>Tata</option>"));
    assert!(body.contains("action=\"&#x2F;series&#x2F;edit&#x2F;s1\""));
}

#[actix_web::test]
async fn invalid_form_redirects_back_without_calling_the_backend() {
    let backend = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/brands"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&backend)
        .await;
    let app = init_app!(backend);

    let req = test::TestRequest::post()
        .uri("/brands/new")
        .insert_header((header::CONTENT_TYPE, "application/x-www-form-urlencoded"))
        .set_payload("name=&slug=")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/brands/new");
}

#[actix_web::test]
async fn valid_form_creates_and_returns_to_the_listing() {
    let backend = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/brands"))
        .respond_with(ResponseTemplate::new(201).set_body_json(envelope(json!({
            "_id": "br9",
            "name": "Force Motors",
            "slug": "force-motors"
        }))))
        .expect(1)
        .mount(&backend)
        .await;
    let app = init_app!(backend);

    let req = test::TestRequest::post()
        .uri("/brands/new")
        .insert_header((header::CONTENT_TYPE, "application/x-www-form-urlencoded"))
        .set_payload("name=Force+Motors&slug=")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/brands");
}

#[actix_web::test]
async fn approval_action_patches_and_redirects() {
    let backend = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/api/v1/vehicles/v1/approval"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({
            "_id": "v1",
            "name": "Thar",
            "registrationNumber": "GA07A1234",
            "fuelType": "diesel",
            "transmission": "manual",
            "seats": 4,
            "pricePerDay": 3200.0,
            "approvalStatus": "approved"
        }))))
        .expect(1)
        .mount(&backend)
        .await;
    let app = init_app!(backend);

    let req = test::TestRequest::post()
        .uri("/vehicles/v1/approval")
        .set_form([("status", "approved")])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/vehicles");
}

#[actix_web::test]
async fn record_ids_named_like_actions_reach_the_record_routes() {
    let backend = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/v1/vehicles/approval"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&backend)
        .await;
    Mock::given(method("PATCH"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&backend)
        .await;
    let app = init_app!(backend);

    let req = test::TestRequest::post()
        .uri("/vehicles/delete/approval")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/vehicles");
}
