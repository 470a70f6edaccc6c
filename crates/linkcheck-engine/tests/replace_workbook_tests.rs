mod common;

use common::{admin_session, links_xlsx, setup, ReadOnlyStore};
use linkcheck_core::errors::ExErrorKind;
use linkcheck_core::logging_facility::test_capture::init_test_capture;
use linkcheck_core::schema::{EVENT_END, EVENT_END_ERROR};
use linkcheck_engine::{
    apply_engine_command, check_link, replace_workbook, EngineCommand, EngineCommandResult,
    LinkCheckOutcome, WorkbookUpload,
};
use linkcheck_store::SnapshotStore;

#[test]
fn test_first_upload_installs_workbook() {
    let env = setup();
    let session = admin_session(&env);
    let bytes = links_xlsx(&["https://a.com", "https://b.com"]);

    let outcome = replace_workbook(
        &session,
        &env.snapshots,
        &WorkbookUpload::new("monday.xlsx", bytes.clone()),
    )
    .unwrap();

    assert_eq!(outcome.replaced_filename, None);
    assert_eq!(outcome.workbook.filename, "monday.xlsx");
    assert_eq!(outcome.workbook.byte_size, bytes.len() as u64);
    assert_eq!(outcome.workbook.total_rows, 2);
    assert_eq!(outcome.workbook.sheets[0].name, "Links");
    assert_eq!(outcome.workbook.sheets[0].column_count, 2);
}

#[test]
fn test_second_upload_supersedes_first() {
    let env = setup();
    let session = admin_session(&env);

    replace_workbook(
        &session,
        &env.snapshots,
        &WorkbookUpload::new("monday.xlsx", links_xlsx(&["https://only-monday.com"])),
    )
    .unwrap();
    let outcome = replace_workbook(
        &session,
        &env.snapshots,
        &WorkbookUpload::new("tuesday.xlsx", links_xlsx(&["https://tuesday.com"])),
    )
    .unwrap();

    assert_eq!(outcome.replaced_filename.as_deref(), Some("monday.xlsx"));
    assert!(!check_link(&env.snapshots, "only-monday").found());
    assert!(check_link(&env.snapshots, "tuesday.com").found());
}

#[test]
fn test_corrupt_upload_keeps_existing_workbook() {
    let env = setup();
    let session = admin_session(&env);
    replace_workbook(
        &session,
        &env.snapshots,
        &WorkbookUpload::new("good.xlsx", links_xlsx(&["https://a.com"])),
    )
    .unwrap();

    let err = replace_workbook(
        &session,
        &env.snapshots,
        &WorkbookUpload::new("bad.xlsx", b"not a workbook".to_vec()),
    )
    .unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::Ingestion);
    assert_eq!(err.request_id(), Some(session.request_id()));
    assert_eq!(env.snapshots.load().unwrap().filename(), "good.xlsx");
    assert!(check_link(&env.snapshots, "https://a.com").found());
}

#[test]
fn test_failed_save_reports_error_and_keeps_existing_workbook() {
    let env = setup();
    let session = admin_session(&env);
    replace_workbook(
        &session,
        &env.snapshots,
        &WorkbookUpload::new("good.xlsx", links_xlsx(&["https://a.com"])),
    )
    .unwrap();

    let read_only = ReadOnlyStore {
        inner: &env.snapshots,
    };
    let err = replace_workbook(
        &session,
        &read_only,
        &WorkbookUpload::new("next.xlsx", links_xlsx(&["https://next.com"])),
    )
    .unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::StorageWrite);
    match check_link(&env.snapshots, "a.com") {
        LinkCheckOutcome::Checked { workbook, matches } => {
            assert_eq!(workbook.filename, "good.xlsx");
            assert_eq!(matches.len(), 1);
        }
        LinkCheckOutcome::NoWorkbook => panic!("existing workbook was lost"),
    }
}

#[test]
fn test_engine_command_dispatch() {
    let env = setup();
    let session = admin_session(&env);

    let result = apply_engine_command(
        EngineCommand::ReplaceWorkbook {
            upload: WorkbookUpload::new("cmd.xlsx", links_xlsx(&["https://cmd.com"])),
        },
        &session,
        &env.snapshots,
    )
    .unwrap();

    let EngineCommandResult::WorkbookReplaced(outcome) = result;
    assert_eq!(outcome.workbook.filename, "cmd.xlsx");
}

#[test]
fn test_replace_logs_boundaries() {
    let capture = init_test_capture();
    let env = setup();
    let session = admin_session(&env);
    let request_id = session.request_id().to_string();

    replace_workbook(
        &session,
        &env.snapshots,
        &WorkbookUpload::new("logged.xlsx", links_xlsx(&["https://a.com"])),
    )
    .unwrap();
    let _ = replace_workbook(
        &session,
        &env.snapshots,
        &WorkbookUpload::new("logged-bad.xlsx", b"junk".to_vec()),
    );

    let for_request = |event: &str| {
        capture.count(|e| {
            e.is("replace_workbook", event) && e.field("request_id") == Some(request_id.as_str())
        })
    };
    assert_eq!(for_request(EVENT_END), 1);
    assert_eq!(for_request(EVENT_END_ERROR), 1);
}
