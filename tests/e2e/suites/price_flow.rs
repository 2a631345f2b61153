//! 价格搜索全链路：联网查询 -> 服务停止 -> 客户端离线回退 -> 恢复

use std::time::Duration;

use mandi_client::{ClientConfig, Connectivity, PriceSearchClient, SearchSource};
use serde_json::Value;

use crate::setup::TestEnvironment;

#[tokio::test]
async fn test_search_over_http() {
    let mut env = TestEnvironment::setup().await.unwrap();

    let body: Value = env
        .http
        .get(env.url("/api/v1/price-discovery/search?q=rice"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let records = body.as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["commodity"], "Rice");

    env.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_client_offline_fallback_after_shutdown() {
    let dir = tempfile::tempdir().unwrap();
    let cache_path = dir.path().join("price-cache.json");

    let mut env = TestEnvironment::setup().await.unwrap();
    let config = ClientConfig::new(env.base_url())
        .with_timeout(Duration::from_secs(2))
        .with_cache_path(&cache_path);
    let client = PriceSearchClient::new(config.clone()).await.unwrap();

    // 联网：结果写入缓存文件
    let online = client.search("tomato").await.unwrap();
    assert_eq!(online.source, SearchSource::Network);
    assert_eq!(online.records.len(), 1);
    assert_eq!(client.connectivity(), Connectivity::Online);

    // 服务停止后回退到缓存
    env.shutdown().await.unwrap();
    let offline = client.search("Tomato").await.unwrap();
    assert_eq!(offline.source, SearchSource::Cache);
    assert_eq!(offline.records, online.records);
    assert_eq!(client.connectivity(), Connectivity::Offline);
    assert!(client.offline_banner().is_some());

    // 新进程从文件恢复同一份缓存
    let restarted = PriceSearchClient::new(config).await.unwrap();
    let outcome = restarted.search("tomato").await.unwrap();
    assert_eq!(outcome.records[0].commodity, "Tomato");

    // 服务恢复后重新联网
    let env = TestEnvironment::setup().await.unwrap();
    let recovered = PriceSearchClient::new(
        ClientConfig::new(env.base_url()).with_cache_path(&cache_path),
    )
    .await
    .unwrap();
    let outcome = recovered.search("potato").await.unwrap();
    assert_eq!(outcome.source, SearchSource::Network);
    assert_eq!(recovered.cache().len(), 2);
}
