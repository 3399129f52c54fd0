/*
[INPUT]:  Identity documents to verify against government registries
[OUTPUT]: Verification references and their status
[POS]:    HTTP layer - identity verification endpoints
[UPDATE]: When supported document types or the verification flow change
*/

use crate::http::client::MapleradClient;
use crate::http::error::Result;
use crate::types::{ApiResponse, IdentityVerification, VerifyIdentityRequest};
use reqwest::Method;

/// Identity verification endpoints
pub struct IdentityService<'c> {
    client: &'c MapleradClient,
}

impl MapleradClient {
    pub fn identity(&self) -> IdentityService<'_> {
        IdentityService { client: self }
    }
}

impl IdentityService<'_> {
    /// Submit an identity document for verification
    ///
    /// POST /v1/identity/verification
    pub async fn verify_identity(
        &self,
        request: &VerifyIdentityRequest,
    ) -> Result<ApiResponse<IdentityVerification>> {
        self.client
            .call(Method::POST, "/identity/verification", &[], Some(request))
            .await
    }
}
