mod common;

use common::{dispatcher, invoke, query_record};
use trade_finance::domain::record::Status;
use trade_finance::error::ErrorKind;

#[tokio::test]
async fn test_full_lifecycle_scenario() {
    let d = dispatcher();

    let inspected = invoke(&d, &["inspect", "REF1", "ExpCo", "ShipCo"]).await.unwrap();
    assert!(inspected.body().is_empty());
    let record = query_record(&d, "REF1").await;
    assert_eq!(record.status, Status::Inspection);
    assert_eq!(record.exporter, "ExpCo");
    assert_eq!(record.shipping_corporation, "ShipCo");
    assert_eq!(record.negotiation_bank, "");
    assert_eq!(record.import_bank, "");

    invoke(&d, &["ship", "REF1"]).await.unwrap();
    let record = query_record(&d, "REF1").await;
    assert_eq!(record.status, Status::BillOfLading);
    assert_eq!(record.exporter, "ExpCo");
    assert_eq!(record.shipping_corporation, "ShipCo");

    invoke(&d, &["present", "REF1", "BankN"]).await.unwrap();
    let record = query_record(&d, "REF1").await;
    assert_eq!(record.status, Status::DocumentsPresented);
    assert_eq!(record.negotiation_bank, "BankN");
    assert_eq!(record.import_bank, "");

    invoke(&d, &["arrival", "REF1", "BankI"]).await.unwrap();
    let record = query_record(&d, "REF1").await;
    assert_eq!(record.status, Status::DocumentsArrived);
    assert_eq!(record.negotiation_bank, "BankN");
    assert_eq!(record.import_bank, "BankI");

    invoke(&d, &["payment", "REF1"]).await.unwrap();
    let record = query_record(&d, "REF1").await;
    assert_eq!(record.status, Status::Paid);
    assert_eq!(record.reference, "REF1");
    assert_eq!(record.exporter, "ExpCo");
    assert_eq!(record.shipping_corporation, "ShipCo");
    assert_eq!(record.negotiation_bank, "BankN");
    assert_eq!(record.import_bank, "BankI");
}

#[tokio::test]
async fn test_query_returns_bytes_of_last_transition() {
    let d = dispatcher();
    invoke(&d, &["inspect", "REF1", "ExpCo", "ShipCo"]).await.unwrap();

    let steps: [&[&str]; 4] = [
        &["ship", "REF1"],
        &["present", "REF1", "BankN"],
        &["arrival", "REF1", "BankI"],
        &["payment", "REF1"],
    ];
    for step in steps {
        let written = invoke(&d, step).await.unwrap();
        let queried = invoke(&d, &["query", "REF1"]).await.unwrap();
        assert_eq!(written.body(), queried.body(), "after {}", step[0]);
    }
}

#[tokio::test]
async fn test_ship_without_inspect_is_not_found() {
    let d = dispatcher();
    let err = invoke(&d, &["ship", "REF2"]).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[tokio::test]
async fn test_every_transition_on_missing_reference_is_not_found() {
    let d = dispatcher();
    let calls: [&[&str]; 5] = [
        &["ship", "NOPE"],
        &["present", "NOPE", "BankN"],
        &["arrival", "NOPE", "BankI"],
        &["payment", "NOPE"],
        &["query", "NOPE"],
    ];
    for call in calls {
        let err = invoke(&d, call).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound, "{}", call[0]);
    }
}

#[tokio::test]
async fn test_present_twice_is_rejected() {
    let d = dispatcher();
    invoke(&d, &["inspect", "REF1", "ExpCo", "ShipCo"]).await.unwrap();
    invoke(&d, &["ship", "REF1"]).await.unwrap();
    invoke(&d, &["present", "REF1", "BankN"]).await.unwrap();

    let err = invoke(&d, &["present", "REF1", "BankN"]).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidStateTransition);
    assert!(err.to_string().contains("Present Documents"));

    let record = query_record(&d, "REF1").await;
    assert_eq!(record.status, Status::DocumentsPresented);
}

#[tokio::test]
async fn test_every_reachable_mismatch_is_rejected() {
    let path: [&[&str]; 4] = [
        &["ship", "R"],
        &["present", "R", "BankN"],
        &["arrival", "R", "BankI"],
        &["payment", "R"],
    ];

    // Reach each status in turn, then try every transition except the valid one.
    for reached in 0..=path.len() {
        let d = dispatcher();
        invoke(&d, &["inspect", "R", "ExpCo", "ShipCo"]).await.unwrap();
        for step in &path[..reached] {
            invoke(&d, step).await.unwrap();
        }
        let before = invoke(&d, &["query", "R"]).await.unwrap();

        for (i, call) in path.iter().enumerate() {
            if i == reached {
                continue;
            }
            let err = invoke(&d, call).await.unwrap_err();
            assert_eq!(
                err.kind(),
                ErrorKind::InvalidStateTransition,
                "{} after {} steps",
                call[0],
                reached
            );
        }
        assert_eq!(invoke(&d, &["query", "R"]).await.unwrap(), before);
    }
}

#[tokio::test]
async fn test_delete_then_query() {
    let d = dispatcher();
    invoke(&d, &["inspect", "REF1", "ExpCo", "ShipCo"]).await.unwrap();

    let deleted = invoke(&d, &["delete", "REF1"]).await.unwrap();
    assert!(deleted.body().is_empty());

    let err = invoke(&d, &["query", "REF1"]).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);

    invoke(&d, &["delete", "REF1"]).await.unwrap();
    invoke(&d, &["delete", "NEVER"]).await.unwrap();
}

#[tokio::test]
async fn test_inspect_overwrites_in_progress_record() {
    // Re-inspecting silently resets a workflow that has already advanced.
    // This is current behaviour, kept until product rules say otherwise.
    let d = dispatcher();
    invoke(&d, &["inspect", "REF1", "ExpCo", "ShipCo"]).await.unwrap();
    invoke(&d, &["ship", "REF1"]).await.unwrap();
    invoke(&d, &["present", "REF1", "BankN"]).await.unwrap();

    invoke(&d, &["inspect", "REF1", "OtherExp", "OtherShip"]).await.unwrap();

    let record = query_record(&d, "REF1").await;
    assert_eq!(record.status, Status::Inspection);
    assert_eq!(record.exporter, "OtherExp");
    assert_eq!(record.negotiation_bank, "");
}

#[tokio::test]
async fn test_references_are_independent() {
    let d = dispatcher();
    invoke(&d, &["inspect", "A", "ExpA", "ShipA"]).await.unwrap();
    invoke(&d, &["inspect", "B", "ExpB", "ShipB"]).await.unwrap();
    invoke(&d, &["ship", "A"]).await.unwrap();

    assert_eq!(query_record(&d, "A").await.status, Status::BillOfLading);
    assert_eq!(query_record(&d, "B").await.status, Status::Inspection);
}
