//! Shared types for machine-readable output.
//!
//! Every JSON document pendata prints is wrapped in the same envelope, so a
//! consumer can branch on `status` before looking at the payload:
//!
//! ```text
//! {"status": "success", "data": { ... }}
//! {"status": "error", "msg": "Failed to get notebook list: ..."}
//! ```

use serde::Serialize;

/// Response envelope around a payload or an error message.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Response<T> {
    Success { data: T },
    Error { msg: String },
}

impl<T> Response<T> {
    pub fn success(data: T) -> Self {
        Response::Success { data }
    }

    pub fn error(msg: impl Into<String>) -> Self {
        Response::Error { msg: msg.into() }
    }
}
