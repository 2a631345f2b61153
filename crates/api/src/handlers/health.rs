//! 健康检查与连通性测试

use axum::{Json, extract::State};
use chrono::Utc;

use crate::dto::{ApiTestResponse, HealthResponse, ReadinessChecks, ReadinessResponse};
use crate::state::AppState;

/// 存活探针：服务进程正常即返回 OK
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK".to_string(),
        timestamp: Utc::now(),
        service: state.service.name.clone(),
        version: state.service.version.to_string(),
    })
}

/// 就绪探针：配置了数据库时检查连接是否可用
pub async fn readiness_check(State(state): State<AppState>) -> Json<ReadinessResponse> {
    let database = match &state.database {
        None => "disabled",
        Some(db) => match db.health_check().await {
            Ok(()) => "ok",
            Err(e) => {
                tracing::warn!(error = %e, "数据库健康检查失败");
                "fail"
            }
        },
    };

    let status = if database == "fail" { "degraded" } else { "ok" };

    Json(ReadinessResponse {
        status: status.to_string(),
        service: state.service.name.clone(),
        checks: ReadinessChecks {
            database: database.to_string(),
        },
    })
}

/// 前端用于确认 API 可达
pub async fn api_test() -> Json<ApiTestResponse> {
    Json(ApiTestResponse {
        message: "API is working!".to_string(),
        timestamp: Utc::now(),
    })
}
