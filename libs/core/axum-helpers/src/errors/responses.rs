//! Reusable OpenAPI response types for consistent API documentation.

use super::ErrorResponse;
#[allow(unused_imports)]
use serde_json::json;
use std::collections::BTreeMap;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({
        "status": 500,
        "message": "Erro interno do servidor",
        "timestamp": 1718000000000i64
    })
)]
pub struct InternalServerErrorResponse(pub ErrorResponse);

/// Field name to the first violated rule message
#[derive(ToResponse)]
#[response(
    description = "Bad Request - Validation Error",
    content_type = "application/json",
    example = json!({
        "name": "O nome é obrigatório!",
        "price": "O preço deve ser positivo"
    })
)]
pub struct BadRequestValidationResponse(pub BTreeMap<String, String>);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Malformed body or path parameter",
    content_type = "application/json",
    example = json!({
        "status": 400,
        "message": "Identificador inválido: abc",
        "timestamp": 1718000000000i64
    })
)]
pub struct BadRequestResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Resource not found",
    content_type = "application/json",
    example = json!({
        "status": 404,
        "message": "Produto não encontrado com id: 7",
        "timestamp": 1718000000000i64
    })
)]
pub struct NotFoundResponse(pub ErrorResponse);
