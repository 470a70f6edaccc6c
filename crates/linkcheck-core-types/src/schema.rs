//! Canonical schema constants for structured logging
//!
//! Every operation boundary event carries `component`, `op` and `event`.

pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";
pub const FIELD_REQUEST_ID: &str = "request_id";

// Workbook identifiers
pub const FIELD_FILENAME: &str = "filename";
pub const FIELD_SHEET: &str = "sheet";
pub const FIELD_BYTE_SIZE: &str = "byte_size";

// Collection sizes
pub const FIELD_SHEET_COUNT: &str = "sheet_count";
pub const FIELD_TOTAL_ROWS: &str = "total_rows";
pub const FIELD_MATCH_COUNT: &str = "match_count";

// Error fields
pub const FIELD_ERR_KIND: &str = "err_kind";
pub const FIELD_ERR_CODE: &str = "err_code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
