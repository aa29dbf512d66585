use actix_web::{HttpResponse, Responder, post, web};

use crate::forms::reports::{ReportRangeForm, ShowRatesForm};
use crate::repository::DieselRepository;
use crate::routes::{error_response, optional_json, today};
use crate::services::{
    funnel as funnel_service, lead_quality as lead_quality_service,
    productivity as productivity_service, sales as sales_service,
    show_rates as show_rates_service,
};

#[post("/reports/funnel")]
pub async fn funnel(repo: web::Data<DieselRepository>, body: web::Bytes) -> impl Responder {
    let result = optional_json::<ReportRangeForm>(&body)
        .and_then(|form| funnel_service::funnel_report(repo.get_ref(), form, today()));

    match result {
        Ok(report) => HttpResponse::Ok().json(report),
        Err(err) => error_response("Failed to build the funnel report", err),
    }
}

#[post("/reports/sdr-productivity")]
pub async fn sdr_productivity(
    repo: web::Data<DieselRepository>,
    body: web::Bytes,
) -> impl Responder {
    let result = optional_json::<ReportRangeForm>(&body)
        .and_then(|form| productivity_service::sdr_productivity(repo.get_ref(), form, today()));

    match result {
        Ok(report) => HttpResponse::Ok().json(report),
        Err(err) => error_response("Failed to build the SDR productivity report", err),
    }
}

#[post("/reports/closer-productivity")]
pub async fn closer_productivity(
    repo: web::Data<DieselRepository>,
    body: web::Bytes,
) -> impl Responder {
    let result = optional_json::<ReportRangeForm>(&body).and_then(|form| {
        productivity_service::closer_productivity(repo.get_ref(), form, today())
    });

    match result {
        Ok(report) => HttpResponse::Ok().json(report),
        Err(err) => error_response("Failed to build the closer productivity report", err),
    }
}

#[post("/reports/show-rates")]
pub async fn show_rates(repo: web::Data<DieselRepository>, body: web::Bytes) -> impl Responder {
    let result = optional_json::<ShowRatesForm>(&body)
        .and_then(|form| show_rates_service::show_rates(repo.get_ref(), form, today()));

    match result {
        Ok(report) => HttpResponse::Ok().json(report),
        Err(err) => error_response("Failed to build the show-rate report", err),
    }
}

#[post("/reports/lead-quality")]
pub async fn lead_quality(repo: web::Data<DieselRepository>, body: web::Bytes) -> impl Responder {
    let result = optional_json::<ReportRangeForm>(&body)
        .and_then(|form| lead_quality_service::lead_quality(repo.get_ref(), form, today()));

    match result {
        Ok(report) => HttpResponse::Ok().json(report),
        Err(err) => error_response("Failed to build the lead-quality report", err),
    }
}

#[post("/reports/sales-summary")]
pub async fn sales_summary(repo: web::Data<DieselRepository>, body: web::Bytes) -> impl Responder {
    let result = optional_json::<ReportRangeForm>(&body)
        .and_then(|form| sales_service::sales_summary(repo.get_ref(), form, today()));

    match result {
        Ok(report) => HttpResponse::Ok().json(report),
        Err(err) => error_response("Failed to build the sales summary", err),
    }
}
