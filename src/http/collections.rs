/*
[INPUT]:  Virtual account requests (customer, currency)
[OUTPUT]: Virtual accounts for collecting inbound payments
[POS]:    HTTP layer - collection endpoints
[UPDATE]: When adding new collection endpoints
*/

use crate::http::client::MapleradClient;
use crate::http::error::Result;
use crate::types::{ApiResponse, CreateVirtualAccountRequest, VirtualAccount};
use reqwest::Method;

/// Collection endpoints
pub struct CollectionService<'c> {
    client: &'c MapleradClient,
}

impl MapleradClient {
    pub fn collections(&self) -> CollectionService<'_> {
        CollectionService { client: self }
    }
}

impl CollectionService<'_> {
    /// Create a virtual account for a customer
    ///
    /// POST /v1/collections/virtual-account
    pub async fn create_virtual_account(
        &self,
        request: &CreateVirtualAccountRequest,
    ) -> Result<ApiResponse<VirtualAccount>> {
        self.client
            .call(Method::POST, "/collections/virtual-account", &[], Some(request))
            .await
    }

    /// Fetch a single virtual account
    ///
    /// GET /v1/collections/virtual-account/{id}
    pub async fn get_virtual_account(
        &self,
        account_id: &str,
    ) -> Result<ApiResponse<VirtualAccount>> {
        let path = format!("/collections/virtual-account/{account_id}");
        self.client
            .call(Method::GET, &path, &[], None::<&()>)
            .await
    }

    /// List virtual accounts
    ///
    /// GET /v1/collections/virtual-account
    pub async fn get_virtual_accounts(&self) -> Result<ApiResponse<Vec<VirtualAccount>>> {
        self.client
            .call(Method::GET, "/collections/virtual-account", &[], None::<&()>)
            .await
    }
}
