use marketplace_facets::errors::MarketplaceError;
use marketplace_facets::services::api_fetch::ApiFetch;
use marketplace_facets::structs::config::http_config::HttpConfig;
use marketplace_facets::traits::category_source::CategorySource;
use warp::http::StatusCode;
use crate::common::CategoriesServer;

#[tokio::test]
async fn fetches_category_list() {
    let server = CategoriesServer::start(StatusCode::OK, r#"["Bridges","DeFi"]"#).await;
    let api = ApiFetch::new(&HttpConfig::default()).unwrap();

    let categories = api.fetch_categories(&server.url()).await.unwrap();

    assert_eq!(categories, vec!["Bridges", "DeFi"]);
    assert_eq!(server.hits(), 1);
}

#[tokio::test]
async fn non_success_status_is_a_network_error() {
    let server = CategoriesServer::start(StatusCode::SERVICE_UNAVAILABLE, r#"{"error":"down"}"#).await;
    let api = ApiFetch::new(&HttpConfig::default()).unwrap();

    let error = api.fetch_categories(&server.url()).await.unwrap_err();

    match error {
        MarketplaceError::NetworkError { status_code, url, operation, .. } => {
            assert_eq!(status_code, Some(503));
            assert_eq!(url.as_deref(), Some(server.url().as_str()));
            assert_eq!(operation, "fetch marketplace-categories");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn malformed_body_is_a_parse_error() {
    let server = CategoriesServer::start(StatusCode::OK, r#"{"categories":["A"]}"#).await;
    let api = ApiFetch::new(&HttpConfig::default()).unwrap();

    let error = api.fetch_categories(&server.url()).await.unwrap_err();

    assert!(matches!(error, MarketplaceError::ParseError { .. }));
    assert!(!error.is_recoverable());
}
