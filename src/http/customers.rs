/*
[INPUT]:  Customer KYC fields, identifiers, and list filters
[OUTPUT]: Customer records, their cards, accounts, and transactions
[POS]:    HTTP layer - customer management endpoints
[UPDATE]: When adding new customer endpoints or changing the enrollment flow
*/

use crate::http::client::MapleradClient;
use crate::http::error::Result;
use crate::types::{
    ApiResponse, Card, CreateCustomerRequest, CreateFullCustomerRequest, CreatedCustomer,
    Customer, ListQuery, Transaction, UpgradeTier1Request, UpgradeTier2Request, VirtualAccount,
};
use reqwest::Method;

/// Customer management endpoints
pub struct CustomerService<'c> {
    client: &'c MapleradClient,
}

impl MapleradClient {
    pub fn customers(&self) -> CustomerService<'_> {
        CustomerService { client: self }
    }
}

impl CustomerService<'_> {
    /// Create a customer with the minimum KYC fields
    ///
    /// POST /v1/customers
    pub async fn create_customer(
        &self,
        request: &CreateCustomerRequest,
    ) -> Result<ApiResponse<CreatedCustomer>> {
        self.client
            .call(Method::POST, "/customers", &[], Some(request))
            .await
    }

    /// Enroll a customer with full KYC in one step
    ///
    /// POST /v1/customers/enroll
    pub async fn create_full_customer(
        &self,
        request: &CreateFullCustomerRequest,
    ) -> Result<ApiResponse<CreatedCustomer>> {
        self.client
            .call(Method::POST, "/customers/enroll", &[], Some(request))
            .await
    }

    /// Fetch a single customer
    ///
    /// GET /v1/customers/{id}
    pub async fn get_customer(&self, customer_id: &str) -> Result<ApiResponse<Customer>> {
        let path = format!("/customers/{customer_id}");
        self.client
            .call(Method::GET, &path, &[], None::<&()>)
            .await
    }

    /// List customers
    ///
    /// GET /v1/customers
    pub async fn get_customers(&self, query: &ListQuery) -> Result<ApiResponse<Vec<Customer>>> {
        self.client
            .call(Method::GET, "/customers", &query.to_query(), None::<&()>)
            .await
    }

    /// Upgrade a customer to tier 1 (phone, date of birth, address)
    ///
    /// PATCH /v1/customers/upgrade/tier1
    pub async fn upgrade_customer_tier1(
        &self,
        request: &UpgradeTier1Request,
    ) -> Result<ApiResponse<Customer>> {
        self.client
            .call(Method::PATCH, "/customers/upgrade/tier1", &[], Some(request))
            .await
    }

    /// Upgrade a customer to tier 2 (government identity document)
    ///
    /// PATCH /v1/customers/upgrade/tier2
    pub async fn upgrade_customer_tier2(
        &self,
        request: &UpgradeTier2Request,
    ) -> Result<ApiResponse<Customer>> {
        self.client
            .call(Method::PATCH, "/customers/upgrade/tier2", &[], Some(request))
            .await
    }

    /// List one customer's transactions
    ///
    /// GET /v1/customers/{id}/transactions
    pub async fn get_customer_transactions(
        &self,
        customer_id: &str,
    ) -> Result<ApiResponse<Vec<Transaction>>> {
        let path = format!("/customers/{customer_id}/transactions");
        self.client
            .call(Method::GET, &path, &[], None::<&()>)
            .await
    }

    /// List one customer's issued cards
    ///
    /// GET /v1/customers/{id}/cards
    pub async fn get_customer_cards(&self, customer_id: &str) -> Result<ApiResponse<Vec<Card>>> {
        let path = format!("/customers/{customer_id}/cards");
        self.client
            .call(Method::GET, &path, &[], None::<&()>)
            .await
    }

    /// List one customer's virtual accounts
    ///
    /// GET /v1/customers/{id}/virtual-accounts
    pub async fn get_customer_virtual_accounts(
        &self,
        customer_id: &str,
    ) -> Result<ApiResponse<Vec<VirtualAccount>>> {
        let path = format!("/customers/{customer_id}/virtual-accounts");
        self.client
            .call(Method::GET, &path, &[], None::<&()>)
            .await
    }
}

#[cfg(test)]
mod tests {
    use crate::http::client::{ClientConfig, MapleradClient};
    use crate::types::{ApiResponse, CreateCustomerRequest, CreatedCustomer, ListQuery};
    use wiremock::matchers::{body_json, header, method, path, query_param};
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
    async fn test_create_customer() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/customers"))
            .and(header("authorization", "Bearer sk_test_123"))
            .and(header("content-type", "application/json"))
            .and(body_json(serde_json::json!({
                "first_name": "Ada",
                "last_name": "Eze",
                "email": "ada@example.com",
                "country": "NG",
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "status": true,
                "message": "Customer created successfully",
                "data": { "id": "cus_123", "status": "active" },
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let response = client
            .customers()
            .create_customer(&CreateCustomerRequest {
                first_name: "Ada".to_string(),
                last_name: "Eze".to_string(),
                email: "ada@example.com".to_string(),
                country: "NG".to_string(),
            })
            .await
            .expect("create_customer failed");

        let expected = ApiResponse {
            status: true,
            message: "Customer created successfully".to_string(),
            data: CreatedCustomer {
                id: "cus_123".to_string(),
                status: "active".to_string(),
            },
        };
        assert_eq!(response, expected);
    }

    #[tokio::test]
    async fn test_get_customers_passes_list_query() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/customers"))
            .and(query_param("page", "1"))
            .and(query_param("page_size", "25"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "status": true,
                "message": "Customers retrieved successfully",
                "data": [],
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let response = client
            .customers()
            .get_customers(&ListQuery {
                page: Some(1),
                page_size: Some(25),
                ..ListQuery::default()
            })
            .await
            .expect("get_customers failed");

        assert!(response.status);
        assert!(response.data.is_empty());
    }
}
