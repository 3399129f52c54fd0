/*
[INPUT]:  Transaction identifiers and list filters
[OUTPUT]: Ledger transactions across all products
[POS]:    HTTP layer - transaction query endpoints
[UPDATE]: When adding new transaction endpoints or filters
*/

use crate::http::client::MapleradClient;
use crate::http::error::Result;
use crate::types::{ApiResponse, ListQuery, Transaction};
use reqwest::Method;

/// Transaction query endpoints
pub struct TransactionService<'c> {
    client: &'c MapleradClient,
}

impl MapleradClient {
    pub fn transactions(&self) -> TransactionService<'_> {
        TransactionService { client: self }
    }
}

impl TransactionService<'_> {
    /// List transactions
    ///
    /// GET /v1/transactions
    pub async fn get_transactions(
        &self,
        query: &ListQuery,
    ) -> Result<ApiResponse<Vec<Transaction>>> {
        self.client
            .call(Method::GET, "/transactions", &query.to_query(), None::<&()>)
            .await
    }

    /// Fetch a single transaction
    ///
    /// GET /v1/transactions/{id}
    pub async fn get_transaction(&self, transaction_id: &str) -> Result<ApiResponse<Transaction>> {
        let path = format!("/transactions/{transaction_id}");
        self.client
            .call(Method::GET, &path, &[], None::<&()>)
            .await
    }

    /// Verify a collection transaction by reference
    ///
    /// GET /v1/transactions/verify/{id}
    pub async fn verify_transaction(&self, reference: &str) -> Result<ApiResponse<Transaction>> {
        let path = format!("/transactions/verify/{reference}");
        self.client
            .call(Method::GET, &path, &[], None::<&()>)
            .await
    }
}
