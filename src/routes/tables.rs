use actix_web::{HttpResponse, Responder, get, post, web};

use crate::forms::tables::{BrowseTableForm, InsertRowForm};
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::tables as tables_service;

#[get("/admin/tables")]
pub async fn list_tables() -> impl Responder {
    HttpResponse::Ok().json(tables_service::list_tables())
}

#[post("/admin/tables/browse")]
pub async fn browse_table(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<BrowseTableForm>,
) -> impl Responder {
    match tables_service::browse_table(repo.get_ref(), form) {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(err) => error_response("Failed to browse the table", err),
    }
}

#[post("/admin/tables/insert")]
pub async fn insert_table_row(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<InsertRowForm>,
) -> impl Responder {
    match tables_service::insert_table_row(repo.get_ref(), form) {
        Ok(inserted) => HttpResponse::Created().json(inserted),
        Err(err) => error_response("Failed to insert the row", err),
    }
}
