//! HTTP handlers. Each one delegates to a service and maps the outcome to
//! a JSON response.

use actix_web::error::{InternalError, JsonPayloadError, QueryPayloadError};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, web};
use chrono::{Local, NaiveDate};
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::services::ServiceError;

pub mod admin;
pub mod health;
pub mod reports;
pub mod tables;

/// Largest accepted JSON body.
const JSON_LIMIT: usize = 256 * 1024;

pub fn json_error(status: StatusCode, message: impl AsRef<str>) -> HttpResponse {
    HttpResponse::build(status).json(json!({ "error": message.as_ref() }))
}

/// Maps a service failure to its status code. Only server-side failures are
/// logged; their details stay out of the response.
pub fn error_response(context: &str, err: ServiceError) -> HttpResponse {
    match err {
        ServiceError::NotFound => json_error(StatusCode::NOT_FOUND, "not found"),
        ServiceError::Form(message) | ServiceError::TypeConstraint(message) => {
            json_error(StatusCode::BAD_REQUEST, message)
        }
        ServiceError::Conflict(message) => json_error(StatusCode::CONFLICT, message),
        err @ ServiceError::Repository(_) => {
            log::error!("{context}: {err}");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "internal server error")
        }
    }
}

/// Parses an optional JSON body; an empty body yields `T::default()`.
pub fn optional_json<T>(body: &[u8]) -> Result<T, ServiceError>
where
    T: DeserializeOwned + Default,
{
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    serde_json::from_slice(body).map_err(|e| ServiceError::Form(format!("invalid JSON body: {e}")))
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(JSON_LIMIT)
        .error_handler(|err: JsonPayloadError, _req: &HttpRequest| {
            let response = json_error(StatusCode::BAD_REQUEST, err.to_string());
            InternalError::from_response(err, response).into()
        })
}

fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err: QueryPayloadError, _req: &HttpRequest| {
        let response = json_error(StatusCode::BAD_REQUEST, err.to_string());
        InternalError::from_response(err, response).into()
    })
}

/// Registers every endpoint. Handlers expect a
/// `web::Data<DieselRepository>` in the application data.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health::health).service(
        web::scope("/api")
            .app_data(json_config())
            .app_data(query_config())
            .service(reports::funnel)
            .service(reports::sdr_productivity)
            .service(reports::closer_productivity)
            .service(reports::show_rates)
            .service(reports::lead_quality)
            .service(reports::sales_summary)
            .service(admin::meeting_form_options)
            .service(admin::list_user_mappings)
            .service(admin::create_user_mapping)
            .service(admin::update_user_mapping)
            .service(admin::delete_user_mapping)
            .service(admin::list_form_options)
            .service(admin::create_form_option)
            .service(admin::update_form_option)
            .service(admin::delete_form_option)
            .service(tables::list_tables)
            .service(tables::browse_table)
            .service(tables::insert_table_row),
    );
}
