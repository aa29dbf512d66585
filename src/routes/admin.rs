use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::forms::form_options::{FormOptionForm, FormOptionQuery};
use crate::forms::user_mappings::{UserMappingForm, UserMappingQuery};
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::{form_options as form_options_service, user_mappings as mappings_service};

/// Public listing used to populate the meeting form.
#[get("/meeting-form-options")]
pub async fn meeting_form_options(repo: web::Data<DieselRepository>) -> impl Responder {
    match form_options_service::meeting_form_options(repo.get_ref()) {
        Ok(options) => HttpResponse::Ok().json(options),
        Err(err) => error_response("Failed to load meeting form options", err),
    }
}

#[get("/admin/user-mappings")]
pub async fn list_user_mappings(
    repo: web::Data<DieselRepository>,
    query: web::Query<UserMappingQuery>,
) -> impl Responder {
    match mappings_service::list_user_mappings(repo.get_ref(), query.into_inner()) {
        Ok(mappings) => HttpResponse::Ok().json(mappings),
        Err(err) => error_response("Failed to list user mappings", err),
    }
}

#[post("/admin/user-mappings")]
pub async fn create_user_mapping(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<UserMappingForm>,
) -> impl Responder {
    match mappings_service::create_user_mapping(repo.get_ref(), form) {
        Ok(mapping) => HttpResponse::Created().json(mapping),
        Err(err) => error_response("Failed to create the user mapping", err),
    }
}

#[put("/admin/user-mappings/{mapping_id}")]
pub async fn update_user_mapping(
    mapping_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<UserMappingForm>,
) -> impl Responder {
    match mappings_service::update_user_mapping(repo.get_ref(), mapping_id.into_inner(), form) {
        Ok(mapping) => HttpResponse::Ok().json(mapping),
        Err(err) => error_response("Failed to update the user mapping", err),
    }
}

#[delete("/admin/user-mappings/{mapping_id}")]
pub async fn delete_user_mapping(
    mapping_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match mappings_service::delete_user_mapping(repo.get_ref(), mapping_id.into_inner()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => error_response("Failed to delete the user mapping", err),
    }
}

#[get("/admin/form-options")]
pub async fn list_form_options(
    repo: web::Data<DieselRepository>,
    query: web::Query<FormOptionQuery>,
) -> impl Responder {
    match form_options_service::list_form_options(repo.get_ref(), query.into_inner()) {
        Ok(options) => HttpResponse::Ok().json(options),
        Err(err) => error_response("Failed to list form options", err),
    }
}

#[post("/admin/form-options")]
pub async fn create_form_option(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<FormOptionForm>,
) -> impl Responder {
    match form_options_service::create_form_option(repo.get_ref(), form) {
        Ok(option) => HttpResponse::Created().json(option),
        Err(err) => error_response("Failed to create the form option", err),
    }
}

#[put("/admin/form-options/{option_id}")]
pub async fn update_form_option(
    option_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<FormOptionForm>,
) -> impl Responder {
    match form_options_service::update_form_option(repo.get_ref(), option_id.into_inner(), form) {
        Ok(option) => HttpResponse::Ok().json(option),
        Err(err) => error_response("Failed to update the form option", err),
    }
}

#[delete("/admin/form-options/{option_id}")]
pub async fn delete_form_option(
    option_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match form_options_service::delete_form_option(repo.get_ref(), option_id.into_inner()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => error_response("Failed to delete the form option", err),
    }
}
