//! 翻译
//!
//! 演示版本不调用翻译引擎，只在原文前加上语言标记

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use mandi_domain::Language;
use mandi_shared::observability::metrics;
use tracing::{debug, info};
use validator::Validate;

use crate::dto::{TranslateRequest, TranslationResponse};
use crate::error::Result;
use crate::state::AppState;

/// 演示翻译的固定置信度
pub const DEMO_CONFIDENCE: f64 = 0.95;

/// 支持的语言列表
pub async fn languages(State(state): State<AppState>) -> Json<Vec<Language>> {
    Json(state.catalog.languages().to_vec())
}

/// 翻译文本
///
/// POST /api/v1/translation/translate
pub async fn translate(
    State(state): State<AppState>,
    payload: std::result::Result<Json<TranslateRequest>, JsonRejection>,
) -> Result<Json<TranslationResponse>> {
    let Json(req) = payload?;
    req.validate()?;

    // 未知语言代码同样放行，仅记录
    for code in [&req.from_lang, &req.to_lang] {
        if state.catalog.language(code).is_none() {
            debug!(code = %code, "未收录的语言代码");
        }
    }

    info!(from = %req.from_lang, to = %req.to_lang, "翻译请求");
    metrics::record_translation(&req.from_lang, &req.to_lang);

    let translated_text = format!(
        "[Translated from {} to {}] {}",
        req.from_lang, req.to_lang, req.text
    );

    Ok(Json(TranslationResponse {
        original_text: req.text,
        translated_text,
        from_lang: req.from_lang,
        to_lang: req.to_lang,
        confidence: DEMO_CONFIDENCE,
    }))
}
