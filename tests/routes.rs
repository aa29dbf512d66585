use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use salesops_dashboard::repository::DieselRepository;
use salesops_dashboard::routes;
use serde_json::{Value, json};

mod common;

macro_rules! init_app {
    ($test_db:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(DieselRepository::new($test_db.pool())))
                .configure(routes::configure),
        )
        .await
    };
}

#[actix_web::test]
async fn test_health() {
    let test_db = common::TestDb::new("test_routes_health.db");
    let app = init_app!(test_db);

    let req = test::TestRequest::get().uri("/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!({"status": "ok"}));
}

#[actix_web::test]
async fn test_funnel_report_ranges() {
    let test_db = common::TestDb::new("test_routes_funnel.db");
    let app = init_app!(test_db);

    let req = test::TestRequest::post()
        .uri("/api/reports/funnel")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["weeks"].as_array().map(Vec::len), Some(8));

    let req = test::TestRequest::post()
        .uri("/api/reports/funnel")
        .set_json(json!({"start_date": "2026-03-02", "end_date": "2026-03-15"}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["weeks"].as_array().map(Vec::len), Some(2));
    assert_eq!(body["totals"]["leads_generated"], json!(0));

    let req = test::TestRequest::post()
        .uri("/api/reports/funnel")
        .set_json(json!({"start_date": "2026-03-15", "end_date": "2026-03-02"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::post()
        .uri("/api/reports/funnel")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_every_report_answers_on_an_empty_database() {
    let test_db = common::TestDb::new("test_routes_reports.db");
    let app = init_app!(test_db);

    for uri in [
        "/api/reports/sdr-productivity",
        "/api/reports/closer-productivity",
        "/api/reports/show-rates",
        "/api/reports/lead-quality",
        "/api/reports/sales-summary",
    ] {
        let req = test::TestRequest::post().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK, "{uri}");
    }
}

#[actix_web::test]
async fn test_user_mapping_admin_flow() {
    let test_db = common::TestDb::new("test_routes_user_mappings.db");
    let app = init_app!(test_db);

    let mapping = json!({"source_name": "jsmith", "display_name": "John Smith", "role": "sdr"});

    let req = test::TestRequest::post()
        .uri("/api/admin/user-mappings")
        .set_json(&mapping)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = test::read_body_json(resp).await;
    let id = created["id"].as_i64().unwrap();
    assert_eq!(created["active"], json!(true));

    let req = test::TestRequest::post()
        .uri("/api/admin/user-mappings")
        .set_json(&mapping)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let req = test::TestRequest::post()
        .uri("/api/admin/user-mappings")
        .set_json(json!({"source_name": "x", "display_name": "X", "role": "boss"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::get()
        .uri("/api/admin/user-mappings?role=sdr")
        .to_request();
    let listed: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(listed.as_array().map(Vec::len), Some(1));

    let req = test::TestRequest::get()
        .uri("/api/admin/user-mappings?role=closer")
        .to_request();
    let listed: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(listed, json!([]));

    let req = test::TestRequest::put()
        .uri(&format!("/api/admin/user-mappings/{id}"))
        .set_json(json!({"source_name": "jsmith", "display_name": "Johnny", "role": "sdr"}))
        .to_request();
    let updated: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(updated["display_name"], json!("Johnny"));

    let req = test::TestRequest::put()
        .uri("/api/admin/user-mappings/999")
        .set_json(&mapping)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/admin/user-mappings/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/admin/user-mappings/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_form_options_feed_the_meeting_form() {
    let test_db = common::TestDb::new("test_routes_form_options.db");
    let app = init_app!(test_db);

    for (value, label, sort_order, active) in [
        ("webinar", "Webinar", 2, true),
        ("referral", "Referral", 1, true),
        ("cold", "Cold call", 0, false),
    ] {
        let req = test::TestRequest::post()
            .uri("/api/admin/form-options")
            .set_json(json!({
                "field": "lead_source",
                "value": value,
                "label": label,
                "sort_order": sort_order,
                "active": active,
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let req = test::TestRequest::get()
        .uri("/api/meeting-form-options")
        .to_request();
    let options: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(
        options,
        json!({
            "lead_source": [
                {"value": "referral", "label": "Referral"},
                {"value": "webinar", "label": "Webinar"},
            ]
        })
    );

    let req = test::TestRequest::get()
        .uri("/api/admin/form-options?field=lead_source")
        .to_request();
    let listed: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(listed.as_array().map(Vec::len), Some(3));

    let req = test::TestRequest::post()
        .uri("/api/admin/form-options")
        .set_json(json!({"field": "lead_source"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_table_browser() {
    let test_db = common::TestDb::new("test_routes_tables.db");
    let app = init_app!(test_db);

    let req = test::TestRequest::get().uri("/api/admin/tables").to_request();
    let catalog: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(catalog["tables"].as_array().map(Vec::len), Some(6));

    let req = test::TestRequest::post()
        .uri("/api/admin/tables/insert")
        .set_json(json!({
            "table": "product_sales",
            "values": {
                "sale_date": "2026-03-02",
                "closer_name": "carl",
                "product": "Audit",
                "amount": 500,
            }
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let inserted: Value = test::read_body_json(resp).await;
    assert_eq!(inserted["table"], json!("product_sales"));
    assert_eq!(inserted["row"]["quantity"], json!(1));

    let req = test::TestRequest::post()
        .uri("/api/admin/tables/insert")
        .set_json(json!({"table": "sqlite_master", "values": {"name": "x"}}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::post()
        .uri("/api/admin/tables/insert")
        .set_json(json!({"table": "product_sales", "values": {"sale_date": "soon"}}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::post()
        .uri("/api/admin/tables/browse")
        .set_json(json!({"table": "product_sales"}))
        .to_request();
    let page: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(page["total"], json!(1));
    assert_eq!(page["page"], json!(1));
    assert_eq!(page["items"][0]["product"], json!("Audit"));
}

#[actix_web::test]
async fn test_table_insert_keeps_admin_listings_readable() {
    let test_db = common::TestDb::new("test_routes_table_domain_rules.db");
    let app = init_app!(test_db);

    let req = test::TestRequest::post()
        .uri("/api/admin/tables/insert")
        .set_json(json!({
            "table": "user_name_mappings",
            "values": {"source_name": "x", "display_name": "X", "role": "boss"},
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::post()
        .uri("/api/admin/tables/insert")
        .set_json(json!({
            "table": "daily_lead_metrics",
            "values": {"metric_date": "2026-03-02", "leads_generated": 4_294_967_297i64},
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::get()
        .uri("/api/admin/user-mappings")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_browse_rejects_page_beyond_limit() {
    let test_db = common::TestDb::new("test_routes_browse_page_limit.db");
    let app = init_app!(test_db);

    let req = test::TestRequest::post()
        .uri("/api/admin/tables/browse")
        .set_json(json!({
            "table": "meetings",
            "page": 1_000_000_000_000_000_000u64,
            "per_page": 200,
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::post()
        .uri("/api/admin/tables/browse")
        .set_json(json!({"table": "meetings", "page": 1_000_000, "per_page": 200}))
        .to_request();
    let page: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(page["total"], json!(0));
    assert_eq!(page["items"], json!([]));
}

#[actix_web::test]
async fn test_show_rate_filter_agrees_with_leaderboard_names() {
    let test_db = common::TestDb::new("test_routes_show_rate_names.db");
    let app = init_app!(test_db);

    let req = test::TestRequest::post()
        .uri("/api/admin/user-mappings")
        .set_json(json!({"source_name": "asmith", "display_name": "Alice Smith", "role": "sdr"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let req = test::TestRequest::post()
        .uri("/api/admin/tables/insert")
        .set_json(json!({
            "table": "meetings",
            "values": {
                "sdr_name": "ASmith",
                "scheduled_at": "2026-03-03 10:00:00",
                "status": "showed",
            },
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let range = json!({"start_date": "2026-03-02", "end_date": "2026-03-08"});

    let req = test::TestRequest::post()
        .uri("/api/reports/sdr-productivity")
        .set_json(&range)
        .to_request();
    let sdrs: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(sdrs["sdrs"][0]["name"], json!("Alice Smith"));
    assert_eq!(sdrs["sdrs"][0]["showed"], json!(1));

    let req = test::TestRequest::post()
        .uri("/api/reports/show-rates")
        .set_json(json!({
            "start_date": "2026-03-02",
            "end_date": "2026-03-08",
            "sdr_name": "Alice Smith",
        }))
        .to_request();
    let report: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(report["totals"]["showed"], json!(1));
    assert_eq!(report["totals"]["total"], json!(1));
}
