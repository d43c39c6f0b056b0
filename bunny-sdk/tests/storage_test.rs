//! Storage zone and edge storage tests
//!
//! The mock tests run offline. The live tests are `#[ignore]`d and need:
//! - `BUNNY_API_KEY`
//! - `BUNNY_STORAGE_ZONE`, `BUNNY_STORAGE_PASSWORD` (edge storage, region `de`)
//!
//! Run live tests with: cargo test --test storage_test -- --ignored

mod common;

use std::sync::atomic::Ordering;

use bunny_sdk::storage::{
    CreateZoneRequest, EdgeStorageClient, Region, StorageClient, UploadOptions, ZoneListOptions,
};
use bunny_sdk::{BunnyClient, BunnyError, RequestBody, TransportError};
use bytes::Bytes;
use common::{MockTransport, mock_config};
use serde_json::json;

fn zones_client(mock: &std::sync::Arc<MockTransport>) -> StorageClient {
    StorageClient::with_config("account-key", &mock_config(mock))
}

fn files_client(mock: &std::sync::Arc<MockTransport>) -> EdgeStorageClient {
    EdgeStorageClient::with_config("assets", "zone-pw", Region::Ny, &mock_config(mock))
}

// ============ Zone management ============

#[tokio::test]
async fn zone_list_sends_auth_and_decodes_page() {
    let mock = MockTransport::new();
    mock.respond_json(
        200,
        &json!({
            "Items": [{"Id": 1, "Name": "assets", "Region": "DE", "StorageUsed": 10}],
            "CurrentPage": 0,
            "TotalItems": 3,
            "PageSize": 1
        }),
    );

    let opts = ZoneListOptions {
        page: 0,
        per_page: 1,
        search: Some("as sets".to_string()),
        ..Default::default()
    };
    let page = require_ok!(zones_client(&mock).zones().list(Some(&opts)).await);

    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].name, "assets");
    assert!(page.has_more(), "page 0 of 3 items with size 1 has more");

    let req = mock.last_request();
    assert_eq!(req.method, "GET");
    assert_eq!(
        req.url,
        "https://api.bunny.net/storagezone?perPage=1&search=as%20sets"
    );
    assert_eq!(req.header("AccessKey"), Some("account-key"));
    assert_eq!(req.header("User-Agent"), Some("bunny-sdk-tests/1.0"));
    assert_eq!(req.header("Accept"), Some("application/json"));
    assert!(req.body.is_none());
}

#[tokio::test]
async fn zone_list_without_options_has_no_query() {
    let mock = MockTransport::new();
    mock.respond_json(200, &json!({"Items": [], "TotalItems": 0}));

    let page = require_ok!(zones_client(&mock).zones().list(None).await);
    assert!(!page.has_more());
    assert_eq!(mock.last_request().url, "https://api.bunny.net/storagezone");
}

#[tokio::test]
async fn zone_get_not_found_uses_envelope_message() {
    let mock = MockTransport::new();
    mock.respond_json(
        404,
        &json!({"Message": "Storage zone not found", "ErrorKey": "storagezone.not_found"}),
    );

    let err = zones_client(&mock).zones().get(99).await.unwrap_err();
    assert!(err.is_not_found());
    assert!(!err.is_retryable());
    let details = require_some!(err.details());
    assert_eq!(details.message, "Storage zone not found");
    assert_eq!(details.error_key.as_deref(), Some("storagezone.not_found"));
    assert_eq!(mock.last_request().url, "https://api.bunny.net/storagezone/99");
}

#[tokio::test]
async fn server_error_falls_back_to_raw_body() {
    let mock = MockTransport::new();
    mock.respond(503, "upstream unavailable");

    let err = zones_client(&mock).zones().get(1).await.unwrap_err();
    assert!(matches!(err, BunnyError::Api(_)));
    assert!(err.is_retryable());
    assert_eq!(err.status(), Some(503));
    assert_eq!(require_some!(err.details()).message, "upstream unavailable");
}

#[tokio::test]
async fn transport_failure_maps_to_network_error() {
    let mock = MockTransport::new();
    mock.fail(TransportError::Timeout("deadline elapsed".to_string()));

    let err = zones_client(&mock).zones().get(1).await.unwrap_err();
    assert!(matches!(err, BunnyError::Timeout { .. }));
    assert!(err.is_transport());
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let mock = MockTransport::new();
    mock.respond(200, "<html>not json</html>");

    let err = zones_client(&mock).zones().get(1).await.unwrap_err();
    assert!(matches!(err, BunnyError::Decode { .. }));
}

#[tokio::test]
async fn zone_create_posts_json_body() {
    let mock = MockTransport::new();
    mock.respond_json(201, &json!({"Id": 5, "Name": "media", "Region": "NY"}));

    let req = CreateZoneRequest {
        name: "media".to_string(),
        region: Some("NY".to_string()),
        ..Default::default()
    };
    let zone = require_ok!(zones_client(&mock).zones().create(&req).await);
    assert_eq!(zone.id, 5);

    let sent = mock.last_request();
    assert_eq!(sent.method, "POST");
    assert_eq!(sent.url, "https://api.bunny.net/storagezone");
    assert_eq!(sent.header("Content-Type"), Some("application/json"));
    assert_eq!(sent.body_json(), json!({"Name": "media", "Region": "NY"}));
}

#[tokio::test]
async fn zone_delete_accepts_no_content() {
    let mock = MockTransport::new();
    let released = mock.respond_tracked(204, Bytes::new());

    require_ok!(zones_client(&mock).zones().delete(7).await);
    assert!(released.load(Ordering::SeqCst));
    let sent = mock.last_request();
    assert_eq!(sent.method, "DELETE");
    assert_eq!(sent.url, "https://api.bunny.net/storagezone/7");
}

#[tokio::test]
async fn response_body_released_on_every_path() {
    let mock = MockTransport::new();
    let unit_ok = mock.respond_tracked(200, "not json");
    let not_found = mock.respond_tracked(404, r#"{"Message": "x"}"#);
    let bad_json = mock.respond_tracked(200, "not json");

    let zones = zones_client(&mock);
    require_ok!(zones.zones().delete(7).await);
    assert!(unit_ok.load(Ordering::SeqCst));

    let err = zones.zones().get(1).await.unwrap_err();
    assert_eq!(err.to_string(), "[storage] x (status: 404)");
    assert!(not_found.load(Ordering::SeqCst));

    let err = zones.zones().get(1).await.unwrap_err();
    assert!(matches!(err, BunnyError::Decode { .. }));
    assert!(bad_json.load(Ordering::SeqCst));
}

#[tokio::test]
async fn availability_check_escapes_name() {
    let mock = MockTransport::new();
    mock.respond_json(200, &json!({"Available": true, "Name": "a/b c"}));

    let res = require_ok!(zones_client(&mock).zones().check_availability("a/b c").await);
    assert!(res.available);
    assert_eq!(
        mock.last_request().url,
        "https://api.bunny.net/storagezone/checkavailability/a%2Fb%20c"
    );
}

#[tokio::test]
async fn password_resets_post_empty_object() {
    let mock = MockTransport::new();
    mock.respond_json(200, &json!({"Id": 3, "Password": "new", "Success": true}));
    mock.respond(204, "");

    let zones = zones_client(&mock);
    let reset = require_ok!(zones.zones().reset_password(3).await);
    assert_eq!(reset.password.as_deref(), Some("new"));

    let read_only = require_ok!(zones.zones().reset_read_only_password(3).await);
    assert!(!read_only.success, "204 yields the default response");

    let requests = mock.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].url, "https://api.bunny.net/storagezone/3/resetPassword");
    assert_eq!(requests[0].body_text(), "{}");
    assert_eq!(
        requests[1].url,
        "https://api.bunny.net/storagezone/3/resetReadOnlyPassword"
    );
}

// ============ Edge storage files ============

#[tokio::test]
async fn upload_sends_checksum_and_content_type() {
    let mock = MockTransport::new();
    mock.respond(201, r#"{"HttpCode":201,"Message":"File uploaded."}"#);

    let data = b"hello".to_vec();
    let opts = UploadOptions::with_checksum_of(&data).content_type("text/plain");
    require_ok!(files_client(&mock).upload("/docs/hello.txt", data, Some(&opts)).await);

    let sent = mock.last_request();
    assert_eq!(sent.method, "PUT");
    assert_eq!(sent.url, "https://ny.storage.bunnycdn.com/assets/docs/hello.txt");
    assert_eq!(sent.header("AccessKey"), Some("zone-pw"));
    assert_eq!(sent.header("Content-Type"), Some("text/plain"));
    assert_eq!(
        sent.header("Checksum"),
        Some("2CF24DBA5FB0A30E26E83B2AC5B9E29E1B161E5C1FA7425E73043362938B9824")
    );
    assert_eq!(sent.body_text(), "hello");
}

#[tokio::test]
async fn upload_streams_body_without_options() {
    let mock = MockTransport::new();
    mock.respond(201, "");

    let chunks = vec![
        Ok(Bytes::from_static(b"part-1,")),
        Ok(Bytes::from_static(b"part-2")),
    ];
    let body = RequestBody::from_stream(futures::stream::iter(chunks));
    require_ok!(files_client(&mock).upload("big.bin", body, None).await);

    let sent = mock.last_request();
    assert!(sent.streamed);
    assert_eq!(sent.body_text(), "part-1,part-2");
    assert_eq!(sent.header("Content-Type"), Some("application/octet-stream"));
    assert_eq!(sent.header("Checksum"), None);
}

#[tokio::test]
async fn download_returns_unread_stream() {
    let mock = MockTransport::new();
    let released = mock.respond_tracked(200, "file-bytes");

    let body = require_ok!(files_client(&mock).download("a.txt").await);
    assert!(!released.load(Ordering::SeqCst));
    drop(body);
    assert!(released.load(Ordering::SeqCst));
}

#[tokio::test]
async fn download_bytes_collects_body() {
    let mock = MockTransport::new();
    mock.respond(200, "file-bytes");

    let bytes = require_ok!(files_client(&mock).download_bytes("a.txt").await);
    assert_eq!(&bytes[..], b"file-bytes");
    assert_eq!(
        mock.last_request().url,
        "https://ny.storage.bunnycdn.com/assets/a.txt"
    );
}

#[tokio::test]
async fn download_missing_file_is_not_found() {
    let mock = MockTransport::new();
    mock.respond_json(404, &json!({"HttpCode": 404, "Message": "Object Not Found"}));

    let err = files_client(&mock).download_bytes("gone.txt").await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.area(), bunny_sdk::ApiArea::EdgeStorage);
}

#[tokio::test]
async fn list_appends_slash_and_asks_for_json() {
    let mock = MockTransport::new();
    mock.respond_json(
        200,
        &json!([
            {"ObjectName": "docs", "IsDirectory": true},
            {"ObjectName": "a.txt", "Length": 12, "LastChanged": "2024-05-01T12:00:00.000"}
        ]),
    );

    let objects = require_ok!(files_client(&mock).list("docs").await);
    assert_eq!(objects.len(), 2);
    assert!(objects[0].is_directory);
    assert_eq!(objects[1].length, 12);

    let sent = mock.last_request();
    assert_eq!(sent.url, "https://ny.storage.bunnycdn.com/assets/docs/");
    assert_eq!(sent.header("Accept"), Some("application/json"));
}

#[tokio::test]
async fn delete_file_and_directory_paths() {
    let mock = MockTransport::new();
    mock.respond(200, "");
    mock.respond(200, "");

    let files = files_client(&mock);
    require_ok!(files.delete("docs/a.txt/").await);
    require_ok!(files.delete_directory("docs").await);

    let requests = mock.requests();
    assert_eq!(requests[0].method, "DELETE");
    assert_eq!(
        requests[0].url,
        "https://ny.storage.bunnycdn.com/assets/docs/a.txt"
    );
    assert_eq!(requests[1].url, "https://ny.storage.bunnycdn.com/assets/docs/");
}

// ============ BunnyClient ============

#[tokio::test]
async fn bunny_client_shares_transport_across_areas() {
    let mock = MockTransport::new();
    mock.respond_json(200, &json!({"Items": []}));
    mock.respond_json(200, &json!([]));

    let bunny = BunnyClient::with_config("account-key", mock_config(&mock));
    require_ok!(bunny.storage().zones().list(None).await);
    require_ok!(
        bunny
            .edge_storage("assets", "zone-pw", Region::De)
            .list("")
            .await
    );

    let requests = mock.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].header("AccessKey"), Some("account-key"));
    assert_eq!(requests[1].url, "https://storage.bunnycdn.com/assets/");
    assert_eq!(requests[1].header("AccessKey"), Some("zone-pw"));
}

#[tokio::test]
async fn base_url_override_skips_edge_storage() {
    let mock = MockTransport::new();
    mock.respond_json(200, &json!({"Items": []}));
    mock.respond_json(200, &json!([]));

    let config = mock_config(&mock).base_url("http://localhost:9000");
    let bunny = BunnyClient::with_config("k", config);
    require_ok!(bunny.storage().zones().list(None).await);
    require_ok!(bunny.edge_storage("z", "p", Region::Uk).list("x").await);

    let requests = mock.requests();
    assert_eq!(requests[0].url, "http://localhost:9000/storagezone");
    assert_eq!(requests[1].url, "https://uk.storage.bunnycdn.com/z/x/");
}

// ============ Live ============

#[tokio::test]
#[ignore]
async fn live_zone_list() {
    skip_if_no_credentials!("BUNNY_API_KEY");
    let Ok(key) = std::env::var("BUNNY_API_KEY") else {
        return;
    };

    let zones = require_ok!(BunnyClient::new(key).storage().zones().list(None).await);
    println!("{} storage zones", zones.total_items);
}

#[tokio::test]
#[ignore]
async fn live_edge_storage_round_trip() {
    skip_if_no_credentials!("BUNNY_STORAGE_ZONE", "BUNNY_STORAGE_PASSWORD");
    let (Ok(zone), Ok(password)) = (
        std::env::var("BUNNY_STORAGE_ZONE"),
        std::env::var("BUNNY_STORAGE_PASSWORD"),
    ) else {
        return;
    };

    let files = EdgeStorageClient::new(zone, password, Region::De);
    let dir = common::unique_name("sdk-test");
    let path = format!("{dir}/hello.txt");
    let data = b"hello from bunny-sdk".to_vec();
    let opts = UploadOptions::with_checksum_of(&data);

    require_ok!(files.upload(&path, data.clone(), Some(&opts)).await);
    let downloaded = require_ok!(files.download_bytes(&path).await);
    assert_eq!(&downloaded[..], &data[..]);

    let listing = require_ok!(files.list(&dir).await);
    assert!(listing.iter().any(|o| o.object_name == "hello.txt"));

    require_ok!(files.delete_directory(&dir).await);
}
