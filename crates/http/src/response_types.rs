//! Response types (Serialize)

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct DeleteBoxResponse {
    pub success: bool,
}

#[derive(Debug, Serialize)]
#[non_exhaustive]
pub struct VersionResponse {
    pub version: &'static str,
}
