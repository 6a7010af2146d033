//! Mutation engine integration tests
//!
//! End-to-end writes against a wiremock ledger: signed part submission,
//! relationship creation for both edge kinds, and the status-marker policy.

mod common;

use common::{uuid, TestLedger};
use sparts_client::{ClientError, MutationService};
use sparts_core::Part;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, ResponseTemplate};

const PARTS_PATH: &str = "/api/sparts/ledger/parts";

fn confirmed() -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(serde_json::json!({"status": "success"}))
}

#[tokio::test]
async fn submit_part_sends_the_signed_envelope() {
    let ledger = TestLedger::start().await;
    let part = Part::new("zlib", "1.2.11").with_licensing("Zlib");

    Mock::given(method("POST"))
        .and(path(PARTS_PATH))
        .and(header("X-Custom-Header", "AddPart"))
        .and(body_json(serde_json::json!({
            "private_key": "test-private-key",
            "public_key": "test-public-key",
            "part": {
                "name": "zlib",
                "version": "1.2.11",
                "label": "",
                "licensing": "Zlib",
                "description": "",
                "checksum": "",
            },
        })))
        .respond_with(confirmed())
        .expect(1)
        .mount(&ledger.server)
        .await;

    ledger.mutations().submit_part(&part).await.unwrap();
}

#[tokio::test]
async fn supplier_link_is_confirmed_by_the_status_marker() {
    let ledger = TestLedger::start().await;
    Mock::given(method("POST"))
        .and(path(format!("{PARTS_PATH}/to-supplier")))
        .and(header("X-Custom-Header", "PartToSupplier"))
        .and(body_json(serde_json::json!({
            "private_key": "test-private-key",
            "public_key": "test-public-key",
            "relation": {
                "part_uuid": uuid(1).to_string(),
                "supplier_uuid": uuid(2).to_string(),
            },
        })))
        .respond_with(confirmed())
        .expect(1)
        .mount(&ledger.server)
        .await;

    let created = ledger
        .mutations()
        .link_part_supplier(uuid(1), uuid(2))
        .await
        .unwrap();
    assert!(created);
}

#[tokio::test]
async fn artifact_link_sends_the_bare_pair_with_dispatch_header() {
    let ledger = TestLedger::start().await;
    Mock::given(method("POST"))
        .and(path(format!("{PARTS_PATH}/AddEnvelope")))
        .and(header("X-Custom-Header", "PartToArtifact"))
        .and(body_json(serde_json::json!({
            "part_uuid": uuid(1).to_string(),
            "envelope_uuid": uuid(3).to_string(),
        })))
        .respond_with(confirmed())
        .expect(1)
        .mount(&ledger.server)
        .await;

    let created = ledger
        .mutations()
        .link_part_artifact(uuid(1), uuid(3))
        .await
        .unwrap();
    assert!(created);
}

#[tokio::test]
async fn http_success_without_the_marker_is_not_created() {
    let ledger = TestLedger::start().await;
    Mock::given(method("POST"))
        .and(path(format!("{PARTS_PATH}/AddEnvelope")))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"status": "failure"})),
        )
        .mount(&ledger.server)
        .await;

    let created = ledger
        .mutations()
        .link_part_artifact(uuid(1), uuid(3))
        .await
        .unwrap();
    assert!(!created);
}

#[tokio::test]
async fn success_word_elsewhere_in_the_body_does_not_confirm() {
    // The status field is compared exactly; the word appearing in another
    // field must not count as confirmation.
    let ledger = TestLedger::start().await;
    Mock::given(method("POST"))
        .and(path(format!("{PARTS_PATH}/AddEnvelope")))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "pending",
            "detail": "success expected shortly",
        })))
        .mount(&ledger.server)
        .await;

    let created = ledger
        .mutations()
        .link_part_artifact(uuid(1), uuid(3))
        .await
        .unwrap();
    assert!(!created);
}

#[tokio::test]
async fn unconfirmed_part_submission_is_an_error() {
    let ledger = TestLedger::start().await;
    Mock::given(method("POST"))
        .and(path(PARTS_PATH))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"status": "duplicate"})),
        )
        .mount(&ledger.server)
        .await;

    let err = ledger
        .mutations()
        .submit_part(&Part::new("zlib", "1.2.11"))
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::NotConfirmed { .. }));
}

#[tokio::test]
async fn malformed_mutation_reply_is_distinguished_from_transport_failure() {
    let ledger = TestLedger::start().await;
    Mock::given(method("POST"))
        .and(path(format!("{PARTS_PATH}/AddEnvelope")))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
        .mount(&ledger.server)
        .await;

    let err = ledger
        .mutations()
        .link_part_artifact(uuid(1), uuid(3))
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::MalformedResponse(_)));
}
