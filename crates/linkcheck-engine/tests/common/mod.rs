#![allow(dead_code)]

use linkcheck_core::errors::{ExError, ExErrorKind};
use linkcheck_core::Snapshot;
use linkcheck_core_types::{RequestContext, Sensitive};
use linkcheck_store::{AdminSession, CredentialStore, FsSnapshotStore, SnapshotStore, StoreLayout};
use rust_xlsxwriter::Workbook;
use tempfile::TempDir;

pub const ADMIN_PASSWORD: &str = "engine-test-pass";

pub struct TestEnv {
    pub dir: TempDir,
    pub layout: StoreLayout,
    pub snapshots: FsSnapshotStore,
    pub credentials: CredentialStore,
}

pub fn setup() -> TestEnv {
    let dir = TempDir::new().unwrap();
    let layout = StoreLayout::new(dir.path());
    let snapshots = FsSnapshotStore::from_layout(&layout);
    let credentials = CredentialStore::from_layout(&layout);
    credentials
        .initialize(&Sensitive::new(ADMIN_PASSWORD.to_string()))
        .unwrap();
    TestEnv {
        dir,
        layout,
        snapshots,
        credentials,
    }
}

pub fn admin_session(env: &TestEnv) -> AdminSession {
    env.credentials
        .authenticate(
            &Sensitive::new(ADMIN_PASSWORD.to_string()),
            RequestContext::new(),
        )
        .unwrap()
}

/// One-sheet workbook: header `ID, URL`, one row per url
pub fn links_xlsx(urls: &[&str]) -> Vec<u8> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name("Links").unwrap();
    sheet.write_string(0, 0, "ID").unwrap();
    sheet.write_string(0, 1, "URL").unwrap();
    for (i, url) in urls.iter().enumerate() {
        let row = (i + 1) as u32;
        sheet.write_number(row, 0, (i + 1) as f64).unwrap();
        sheet.write_string(row, 1, *url).unwrap();
    }
    workbook.save_to_buffer().unwrap()
}

/// Snapshot store whose saves always fail, wrapping a working store for loads
pub struct ReadOnlyStore<'a> {
    pub inner: &'a dyn SnapshotStore,
}

impl SnapshotStore for ReadOnlyStore<'_> {
    fn save(&self, _snapshot: &Snapshot) -> Result<(), ExError> {
        Err(ExError::new(ExErrorKind::StorageWrite)
            .with_op("save_snapshot")
            .with_message("disk is read-only"))
    }

    fn load(&self) -> Option<Snapshot> {
        self.inner.load()
    }
}
