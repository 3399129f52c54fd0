/*
[INPUT]:  Counterparty identifiers and list filters
[OUTPUT]: Saved beneficiary records
[POS]:    HTTP layer - counterparty endpoints
[UPDATE]: When adding new counterparty endpoints
*/

use crate::http::client::MapleradClient;
use crate::http::error::Result;
use crate::types::{ApiResponse, Counterparty, ListQuery};
use reqwest::Method;

/// Counterparty endpoints
pub struct CounterpartyService<'c> {
    client: &'c MapleradClient,
}

impl MapleradClient {
    pub fn counterparty(&self) -> CounterpartyService<'_> {
        CounterpartyService { client: self }
    }
}

impl CounterpartyService<'_> {
    /// Fetch a single counterparty
    ///
    /// GET /v1/counterparties/{id}
    pub async fn get_counterparty(
        &self,
        counterparty_id: &str,
    ) -> Result<ApiResponse<Counterparty>> {
        let path = format!("/counterparties/{counterparty_id}");
        self.client
            .call(Method::GET, &path, &[], None::<&()>)
            .await
    }

    /// List counterparties
    ///
    /// GET /v1/counterparties
    pub async fn get_counterparties(
        &self,
        query: &ListQuery,
    ) -> Result<ApiResponse<Vec<Counterparty>>> {
        self.client
            .call(Method::GET, "/counterparties", &query.to_query(), None::<&()>)
            .await
    }
}
