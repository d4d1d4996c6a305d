use crate::AppState;
use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

/// Fetch limits the running server was configured with.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FetchLimits {
    timeout_secs: u64,
    max_redirects: usize,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
    fetch: FetchLimits,
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let fetch = &state.config.fetch;
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        fetch: FetchLimits {
            timeout_secs: fetch.timeout_secs,
            max_redirects: fetch.max_redirects,
        },
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/health", get(health))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, FetchConfig};
    use crate::error::ExtractError;
    use crate::services::SignalExtractor;
    use crate::sources::Fetcher;
    use async_trait::async_trait;
    use std::sync::Arc;

    struct NoFetch;

    #[async_trait]
    impl Fetcher for NoFetch {
        async fn fetch(&self, url: &str) -> Result<String, ExtractError> {
            Err(ExtractError::FetchFailure(url.to_string()))
        }
    }

    fn state(fetch: FetchConfig) -> AppState {
        AppState {
            config: Arc::new(Config {
                host: "127.0.0.1".to_string(),
                port: 0,
                fetch,
            }),
            extractor: SignalExtractor::new(Arc::new(NoFetch)),
        }
    }

    #[test]
    fn test_health_response_serialization() {
        let response = HealthResponse {
            status: "ok",
            version: "1.0.0",
            fetch: FetchLimits {
                timeout_secs: 30,
                max_redirects: 5,
            },
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["version"], "1.0.0");
        assert_eq!(json["fetch"]["timeoutSecs"], 30);
        assert_eq!(json["fetch"]["maxRedirects"], 5);
        assert!(json.get("service").is_none());
    }

    #[tokio::test]
    async fn test_health_reports_configured_fetch_limits() {
        let Json(response) = health(State(state(FetchConfig {
            timeout_secs: 12,
            max_redirects: 2,
        })))
        .await;

        assert_eq!(response.status, "ok");
        assert_eq!(response.version, env!("CARGO_PKG_VERSION"));
        assert_eq!(response.fetch.timeout_secs, 12);
        assert_eq!(response.fetch.max_redirects, 2);
    }
}
