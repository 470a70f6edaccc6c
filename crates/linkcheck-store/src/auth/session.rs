use chrono::{DateTime, Utc};
use linkcheck_core_types::{RequestContext, RequestId};

/// Proof that the current request authenticated as admin
///
/// Only `CredentialStore::authenticate` creates one, so holding a session is
/// what authorizes a workbook replacement. It lives for one request and is
/// never stored.
#[derive(Debug, Clone)]
pub struct AdminSession {
    context: RequestContext,
    authenticated_at: DateTime<Utc>,
}

impl AdminSession {
    pub(crate) fn new(context: RequestContext) -> Self {
        Self {
            context,
            authenticated_at: Utc::now(),
        }
    }

    pub fn context(&self) -> &RequestContext {
        &self.context
    }

    pub fn request_id(&self) -> &RequestId {
        &self.context.request_id
    }

    pub fn authenticated_at(&self) -> DateTime<Utc> {
        self.authenticated_at
    }
}
