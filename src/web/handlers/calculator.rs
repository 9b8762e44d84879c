use axum::response::Response;
use serde::{Deserialize, Serialize};

use crate::calculator::{Operator, evaluate};
use crate::errors::AppError;
use crate::web::{extractors::ApiJson, responses::handle_result};

#[derive(Debug, Clone, Deserialize)]
pub struct CalculationRequest {
    pub lhs: f64,
    pub op: Operator,
    pub rhs: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationResult {
    pub expression: String,
    pub result: f64,
}

pub async fn calculate(ApiJson(request): ApiJson<CalculationRequest>) -> Response {
    let result = evaluate(request.lhs, request.op, request.rhs)
        .map(|result| CalculationResult {
            expression: format!("{} {} {}", request.lhs, request.op, request.rhs),
            result,
        })
        .map_err(AppError::from);

    handle_result(result)
}
