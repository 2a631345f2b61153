//! 商户资料

use axum::{Json, extract::Path};
use mandi_domain::{Vendor, demo_vendor_profile};
use tracing::debug;

/// 获取商户资料
///
/// GET /api/v1/vendors/profile/{vendor_id}
///
/// 返回固定的演示资料，`id` 为路径中的值
pub async fn get_profile(Path(vendor_id): Path<String>) -> Json<Vendor> {
    debug!(vendor_id = %vendor_id, "查询商户资料");
    Json(demo_vendor_profile(&vendor_id))
}
