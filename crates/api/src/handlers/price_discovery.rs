//! 价格发现
//!
//! 在演示目录中按商品名称搜索价格记录

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use mandi_domain::PriceRecord;
use mandi_shared::observability::metrics;
use tracing::info;

use crate::dto::SearchParams;
use crate::error::Result;
use crate::state::AppState;

/// 搜索商品价格
///
/// GET /api/v1/price-discovery/search?q=rice
///
/// 大小写不敏感的子串匹配；缺少 `q` 或为空时返回全部记录
pub async fn search(
    State(state): State<AppState>,
    params: std::result::Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<Vec<PriceRecord>>> {
    let Query(params) = params?;
    let query = params.q.unwrap_or_default();

    let records = state.catalog.search(&query);
    info!(query = %query, results = records.len(), "价格搜索");
    metrics::record_price_search(records.len());

    Ok(Json(records))
}
