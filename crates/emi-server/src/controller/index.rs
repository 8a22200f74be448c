use actix_web::{get, HttpResponse, Responder};

pub const WELCOME: &str = "Welcome to the EMI Checker backend!";

#[get("/")]
pub async fn index() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(WELCOME)
}
