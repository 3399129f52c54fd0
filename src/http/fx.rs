/*
[INPUT]:  Currency pairs and amounts in minor units
[OUTPUT]: Exchange quotes and executed conversions
[POS]:    HTTP layer - foreign exchange endpoints
[UPDATE]: When quote fields or the exchange flow change
*/

use crate::http::client::MapleradClient;
use crate::http::error::Result;
use crate::types::{
    ApiResponse, ExchangeCurrencyRequest, FxExchange, FxQuote, GenerateQuoteRequest,
};
use reqwest::Method;

/// Foreign exchange endpoints
pub struct FxService<'c> {
    client: &'c MapleradClient,
}

impl MapleradClient {
    pub fn fx(&self) -> FxService<'_> {
        FxService { client: self }
    }
}

impl FxService<'_> {
    /// Generate an exchange quote for a currency pair
    ///
    /// POST /v1/fx/quote
    pub async fn generate_quote(
        &self,
        source_currency: &str,
        target_currency: &str,
        amount: u64,
    ) -> Result<ApiResponse<FxQuote>> {
        let body = GenerateQuoteRequest {
            source_currency: source_currency.to_string(),
            target_currency: target_currency.to_string(),
            amount,
        };
        self.client
            .call(Method::POST, "/fx/quote", &[], Some(&body))
            .await
    }

    /// Execute a previously generated quote
    ///
    /// POST /v1/fx
    pub async fn exchange_currency(
        &self,
        quote_reference: &str,
    ) -> Result<ApiResponse<FxExchange>> {
        let body = ExchangeCurrencyRequest {
            quote_reference: quote_reference.to_string(),
        };
        self.client.call(Method::POST, "/fx", &[], Some(&body)).await
    }
}

#[cfg(test)]
mod tests {
    use crate::http::client::{ClientConfig, MapleradClient};
    use rust_decimal::Decimal;
    use std::str::FromStr;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_generate_quote_decodes_string_rate() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/fx/quote"))
            .and(body_json(serde_json::json!({
                "source_currency": "USD",
                "target_currency": "NGN",
                "amount": 5_000,
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "status": true,
                "message": "Quote generated successfully",
                "data": {
                    "reference": "qte_123",
                    "source_currency": "USD",
                    "target_currency": "NGN",
                    "rate": "1578.25",
                    "source_amount": 5_000,
                    "target_amount": 7_891_250,
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
            .fx()
            .generate_quote("USD", "NGN", 5_000)
            .await
            .expect("generate_quote failed");

        assert_eq!(response.data.reference, "qte_123");
        assert_eq!(response.data.rate, Decimal::from_str("1578.25").unwrap());
        assert_eq!(response.data.target_amount, 7_891_250);
    }
}
