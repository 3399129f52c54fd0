/*
[INPUT]:  Transfer instructions (destination account, amount, currency)
[OUTPUT]: Transfer records and their settlement status
[POS]:    HTTP layer - payout endpoints
[UPDATE]: When adding new transfer endpoints or changing the payout contract
*/

use crate::http::client::MapleradClient;
use crate::http::error::Result;
use crate::types::{ApiResponse, CreateTransferRequest, ListQuery, Transfer};
use reqwest::Method;

/// Payout endpoints
pub struct TransferService<'c> {
    client: &'c MapleradClient,
}

impl MapleradClient {
    pub fn transfers(&self) -> TransferService<'_> {
        TransferService { client: self }
    }
}

impl TransferService<'_> {
    /// Initiate a transfer to a bank account
    ///
    /// POST /v1/transfers
    pub async fn create_transfer(
        &self,
        request: &CreateTransferRequest,
    ) -> Result<ApiResponse<Transfer>> {
        self.client
            .call(Method::POST, "/transfers", &[], Some(request))
            .await
    }

    /// Fetch a single transfer
    ///
    /// GET /v1/transfers/{id}
    pub async fn get_transfer(&self, transfer_id: &str) -> Result<ApiResponse<Transfer>> {
        let path = format!("/transfers/{transfer_id}");
        self.client
            .call(Method::GET, &path, &[], None::<&()>)
            .await
    }

    /// List transfers
    ///
    /// GET /v1/transfers
    pub async fn get_transfers(&self, query: &ListQuery) -> Result<ApiResponse<Vec<Transfer>>> {
        self.client
            .call(Method::GET, "/transfers", &query.to_query(), None::<&()>)
            .await
    }
}

#[cfg(test)]
mod tests {
    use crate::http::client::{ClientConfig, MapleradClient};
    use crate::types::{CreateTransferRequest, TransactionStatus};
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_create_transfer_omits_unset_optionals() {
        let server = MockServer::start().await;

        // `reason` and `reference` must not appear in the body when unset
        Mock::given(method("POST"))
            .and(path("/v1/transfers"))
            .and(body_json(serde_json::json!({
                "account_number": "0123456789",
                "bank_code": "058",
                "amount": 100_000,
                "currency": "NGN",
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "status": true,
                "message": "Transfer initiated successfully",
                "data": {
                    "id": "trf_123",
                    "amount": 100_000,
                    "currency": "NGN",
                    "status": "PENDING",
                    "reference": "ref_123",
                },
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = MapleradClient::with_config_and_base_url(
            "sk_test_123",
            ClientConfig::default(),
            &server.uri(),
        )
        .expect("client init");

        let response = client
            .transfers()
            .create_transfer(&CreateTransferRequest {
                account_number: "0123456789".to_string(),
                bank_code: "058".to_string(),
                amount: 100_000,
                currency: "NGN".to_string(),
                reason: None,
                reference: None,
            })
            .await
            .expect("create_transfer failed");

        assert_eq!(response.data.id, "trf_123");
        assert_eq!(response.data.status, TransactionStatus::Pending);
    }
}
