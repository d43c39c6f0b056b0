//! Shield / WAF API tests
//!
//! Live tests need `BUNNY_API_KEY`.
//! Run with: cargo test --test shield_test -- --ignored

mod common;

use std::sync::Arc;

use bunny_sdk::shield::{
    AccessListEntryKey, AddAccessListEntryRequest, DateRangeOptions, EventLogListOptions,
    ShieldClient, UpdateZoneRequest,
};
use common::{MockTransport, mock_config};
use serde_json::json;

fn client(mock: &Arc<MockTransport>) -> ShieldClient {
    ShieldClient::with_config("account-key", &mock_config(mock))
}

// ============ Zones ============

#[tokio::test]
async fn zone_list_decodes_envelope() {
    let mock = MockTransport::new();
    mock.respond_json(
        200,
        &json!({
            "Items": [{"Id": "z-1", "Name": "shop", "HostNames": ["shop.example.com"]}],
            "TotalCount": 1
        }),
    );

    let zones = require_ok!(client(&mock).zones().list().await);
    assert_eq!(zones.total_count, 1);
    assert_eq!(zones.items[0].host_names, vec!["shop.example.com"]);
    assert_eq!(mock.last_request().url, "https://api.bunny.net/shield/zones");
}

#[tokio::test]
async fn zone_update_is_patch() {
    let mock = MockTransport::new();
    mock.respond_json(200, &json!({"Id": "z-1", "Name": "renamed"}));

    let req = UpdateZoneRequest {
        name: Some("renamed".to_string()),
        ..Default::default()
    };
    let zone = require_ok!(client(&mock).zones().update("z-1", &req).await);
    assert_eq!(zone.name, "renamed");

    let sent = mock.last_request();
    assert_eq!(sent.method, "PATCH");
    assert_eq!(sent.url, "https://api.bunny.net/shield/zone/z-1");
    assert_eq!(sent.body_json(), json!({"Name": "renamed"}));
}

// ============ Access lists ============

#[tokio::test]
async fn access_list_add_and_delete_with_body() {
    let mock = MockTransport::new();
    mock.respond_json(200, &json!({"Type": "IP", "Value": "203.0.113.7", "Action": "Block"}));
    mock.respond(204, "");

    let shield = client(&mock);
    let lists = shield.access_lists("z-1");
    let entry = require_ok!(
        lists
            .add(&AddAccessListEntryRequest {
                kind: "IP".to_string(),
                value: "203.0.113.7".to_string(),
                action: "Block".to_string(),
                comment: None,
            })
            .await
    );
    assert_eq!(entry.kind, "IP");

    require_ok!(
        lists
            .delete(&[AccessListEntryKey {
                kind: "IP".to_string(),
                value: "203.0.113.7".to_string(),
            }])
            .await
    );

    let requests = mock.requests();
    assert_eq!(
        requests[0].url,
        "https://api.bunny.net/shield/zone/z-1/access-lists"
    );
    assert_eq!(
        requests[0].body_json(),
        json!({"Type": "IP", "Value": "203.0.113.7", "Action": "Block"})
    );

    let delete = &requests[1];
    assert_eq!(delete.method, "DELETE");
    assert_eq!(delete.header("Content-Type"), Some("application/json"));
    assert_eq!(
        delete.body_json(),
        json!({"Entries": [{"Type": "IP", "Value": "203.0.113.7"}]})
    );
}

// ============ WAF ============

#[tokio::test]
async fn ai_recommendation_filters_by_rule() {
    let mock = MockTransport::new();
    mock.respond_json(
        200,
        &json!({"Recommendations": [{"RuleId": "942100", "Recommendation": "disable", "Confidence": 0.92}]}),
    );
    mock.respond_json(200, &json!({"Recommendations": []}));

    let shield = client(&mock);
    let one = require_ok!(shield.waf().ai_recommendation(Some("942100")).await);
    assert_eq!(one.recommendations.len(), 1);
    assert!(one.recommendations[0].confidence > 0.9);
    require_ok!(shield.waf().ai_recommendation(None).await);

    let requests = mock.requests();
    assert_eq!(
        requests[0].url,
        "https://api.bunny.net/shield/waf/rules/review-triggered/ai-recommendation?ruleId=942100"
    );
    assert_eq!(
        requests[1].url,
        "https://api.bunny.net/shield/waf/rules/review-triggered/ai-recommendation"
    );
}

#[tokio::test]
async fn custom_rule_delete() {
    let mock = MockTransport::new();
    mock.respond(204, "");

    require_ok!(client(&mock).waf().delete_custom_rule("r 1").await);
    let sent = mock.last_request();
    assert_eq!(sent.method, "DELETE");
    assert!(sent.url.ends_with("/r%201"), "unexpected url {}", sent.url);
}

// ============ Metrics and event logs ============

#[tokio::test]
async fn metrics_overview_with_range() {
    let mock = MockTransport::new();
    mock.respond_json(
        200,
        &json!({"TotalRequests": 1000, "BlockedRequests": 40, "AllowedRequests": 960}),
    );

    let range = DateRangeOptions {
        from: Some("2024-07-01".to_string()),
        to: Some("2024-07-31".to_string()),
    };
    let overview = require_ok!(client(&mock).metrics().overview(Some(&range)).await);
    assert_eq!(overview.total_requests, 1000);
    assert_eq!(overview.blocked_requests, 40);
    assert_eq!(
        mock.last_request().url,
        "https://api.bunny.net/shield/metrics/overview?from=2024-07-01&to=2024-07-31"
    );
}

#[tokio::test]
async fn event_logs_offset_query() {
    let mock = MockTransport::new();
    mock.respond_json(
        200,
        &json!({
            "Items": [{"Id": "e-1", "ZoneId": "z-1", "SourceIP": "198.51.100.2", "Method": "GET"}],
            "TotalCount": 51
        }),
    );

    let opts = EventLogListOptions {
        zone_id: Some("z-1".to_string()),
        limit: 50,
        offset: 50,
        ..Default::default()
    };
    let logs = require_ok!(client(&mock).event_logs().list(Some(&opts)).await);
    assert_eq!(logs.items[0].source_ip, "198.51.100.2");
    assert_eq!(logs.total_count, 51);
    assert_eq!(
        mock.last_request().url,
        "https://api.bunny.net/shield/event-logs?zoneId=z-1&limit=50&offset=50"
    );
}

#[tokio::test]
async fn forbidden_is_auth_error() {
    let mock = MockTransport::new();
    mock.respond_json(403, &json!({"Message": "Shield is not enabled for this account"}));

    let err = client(&mock).promo().get().await.unwrap_err();
    assert!(err.is_auth_error());
    assert_eq!(err.area(), bunny_sdk::ApiArea::Shield);
    assert!(err.to_string().contains("Shield is not enabled"));
}

// ============ Live ============

#[tokio::test]
#[ignore]
async fn live_zone_list() {
    skip_if_no_credentials!("BUNNY_API_KEY");
    let Ok(key) = std::env::var("BUNNY_API_KEY") else {
        return;
    };

    let zones = require_ok!(ShieldClient::new(key).zones().list().await);
    println!("{} shield zones", zones.total_count);
}
