/*
[INPUT]:  Account numbers and bank routing codes
[OUTPUT]: Supported institutions and resolved account names
[POS]:    HTTP layer - institution lookup endpoints
[UPDATE]: When the institution catalog or resolution contract changes
*/

use crate::http::client::MapleradClient;
use crate::http::error::Result;
use crate::types::{ApiResponse, Institution, ResolveInstitutionRequest, ResolvedInstitution};
use reqwest::Method;

/// Institution lookup endpoints
pub struct InstitutionService<'c> {
    client: &'c MapleradClient,
}

impl MapleradClient {
    pub fn institutions(&self) -> InstitutionService<'_> {
        InstitutionService { client: self }
    }
}

impl InstitutionService<'_> {
    /// List supported institutions
    ///
    /// POST /v1/institutions
    pub async fn get_institutions(&self) -> Result<ApiResponse<Vec<Institution>>> {
        self.client
            .call(Method::POST, "/institutions", &[], None::<&()>)
            .await
    }

    /// Resolve an account number against a bank code
    ///
    /// POST /v1/institutions/resolve
    pub async fn resolve_institution(
        &self,
        account_number: &str,
        bank_code: &str,
    ) -> Result<ApiResponse<ResolvedInstitution>> {
        let body = ResolveInstitutionRequest {
            account_number: account_number.to_string(),
            bank_code: bank_code.to_string(),
        };
        self.client
            .call(Method::POST, "/institutions/resolve", &[], Some(&body))
            .await
    }
}

#[cfg(test)]
mod tests {
    use crate::http::client::{ClientConfig, MapleradClient};
    use crate::types::{ApiResponse, Institution, ResolvedInstitution};
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(server: &MockServer) -> MapleradClient {
        MapleradClient::with_config_and_base_url(
            "sk_test_123",
            ClientConfig::default(),
            &server.uri(),
        )
        .expect("client init")
    }

    #[tokio::test]
    async fn test_get_institutions() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/institutions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "status": true,
                "message": "Institutions retrieved successfully",
                "data": [
                    { "name": "Guaranty Trust Bank", "code": "058" },
                    { "name": "Access Bank", "code": "044" },
                ],
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let response = client
            .institutions()
            .get_institutions()
            .await
            .expect("get_institutions failed");

        let expected = ApiResponse {
            status: true,
            message: "Institutions retrieved successfully".to_string(),
            data: vec![
                Institution {
                    name: "Guaranty Trust Bank".to_string(),
                    code: "058".to_string(),
                },
                Institution {
                    name: "Access Bank".to_string(),
                    code: "044".to_string(),
                },
            ],
        };
        assert_eq!(response, expected);
    }

    #[tokio::test]
    async fn test_resolve_institution_sends_expected_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/institutions/resolve"))
            .and(body_json(serde_json::json!({
                "account_number": "0123456789",
                "bank_code": "058",
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "status": true,
                "message": "Account resolved successfully",
                "data": {
                    "account_number": "0123456789",
                    "account_name": "ADA EZE",
                },
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let response = client
            .institutions()
            .resolve_institution("0123456789", "058")
            .await
            .expect("resolve_institution failed");

        assert_eq!(
            response.data,
            ResolvedInstitution {
                account_number: "0123456789".to_string(),
                account_name: "ADA EZE".to_string(),
            }
        );
    }
}
