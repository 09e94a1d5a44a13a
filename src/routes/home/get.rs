use actix_web::{http::StatusCode, HttpResponse};

use super::render;
use crate::form::FormState;

pub async fn home() -> Result<HttpResponse, actix_web::Error> {
    render(&FormState::default(), StatusCode::OK)
}
