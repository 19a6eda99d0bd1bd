//! Router-level tests for the dashboard crate

#[cfg(test)]
mod router_tests {
    use axum::Router;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use chrono::NaiveDate;
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::domain::entities::TeamSample;
    use crate::domain::metric::Team;
    use crate::domain::repository::KpiSource;
    use crate::error::{DashboardError, DashboardResult};
    use crate::infra::mock::MockKpiSource;
    use crate::presentation::router::dashboard_router;

    async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_dashboard_payload_shape() {
        let (status, body) =
            get_json(dashboard_router(MockKpiSource::new()), "/dashboard?asOf=2025-01-31").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["asOf"], "2025-01-31");

        let open = &body["pursuits"]["open"];
        assert_eq!(open["value"], 28);
        assert!((open["trendPct"].as_f64().unwrap() - 55.56).abs() < 0.01);
        assert_eq!(open["direction"], "up");
        assert_eq!(open["tone"], "bad");

        let cycle = &body["pursuits"]["cycle"];
        assert_eq!(cycle["valueMinutes"], 4260);
        assert_eq!(cycle["direction"], "down");
        assert_eq!(cycle["tone"], "good");

        let completions = &body["creative"]["completions"];
        assert_eq!(completions["value"], 22);
        assert_eq!(completions["direction"], "up");
        assert_eq!(completions["tone"], "good");

        assert_eq!(body["creative"]["top3"], serde_json::json!(["", "", ""]));
    }

    #[tokio::test]
    async fn test_dashboard_defaults_to_today() {
        let (status, body) = get_json(dashboard_router(MockKpiSource::new()), "/dashboard").await;

        assert_eq!(status, StatusCode::OK);
        let as_of = body["asOf"].as_str().unwrap();
        assert!(NaiveDate::parse_from_str(as_of, "%Y-%m-%d").is_ok());
    }

    #[tokio::test]
    async fn test_dashboard_echoes_unreadable_date() {
        let (status, body) =
            get_json(dashboard_router(MockKpiSource::new()), "/dashboard?asOf=garbage").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["asOf"], "garbage");
        assert_eq!(body["pursuits"]["open"]["value"], 28);
    }

    #[tokio::test]
    async fn test_dashboard_echoes_unpadded_date_unchanged() {
        let (status, body) =
            get_json(dashboard_router(MockKpiSource::new()), "/dashboard?asOf=2024-1-5").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["asOf"], "2024-1-5");
    }

    #[derive(Clone)]
    struct FailingSource;

    impl KpiSource for FailingSource {
        async fn team_sample(&self, _team: Team, _as_of: NaiveDate) -> DashboardResult<TeamSample> {
            Err(DashboardError::Source("upstream unavailable".to_string()))
        }
    }

    #[tokio::test]
    async fn test_source_failure_is_500() {
        let (status, body) = get_json(dashboard_router(FailingSource), "/dashboard").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["error"].as_str().unwrap().contains("upstream unavailable"));
    }
}

#[cfg(test)]
mod trend_property_tests {
    use crate::domain::trend::*;

    #[test]
    fn test_documented_values() {
        assert_eq!(percent_change(0.0, 0.0), 0.0);
        assert_eq!(percent_change(5.0, 0.0), 100.0);
        assert_eq!(percent_change(50.0, 100.0), -50.0);
        assert_eq!(percent_change(150.0, 100.0), 50.0);
    }

    #[test]
    fn test_sign_matches_direction() {
        for (current, previous) in [(1.0, 2.0), (2.0, 1.0), (7.0, 7.0), (0.0, 3.0), (9.0, 0.0)] {
            let trend = Trend::between(current, previous, Polarity::HigherIsBetter);
            match trend.direction {
                Direction::Up => assert!(trend.pct >= 0.0, "{current} vs {previous}"),
                Direction::Down => assert!(trend.pct < 0.0, "{current} vs {previous}"),
            }
        }
    }
}
