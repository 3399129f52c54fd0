/*
[INPUT]:  List filters for wallet history
[OUTPUT]: Wallet balances and movement history
[POS]:    HTTP layer - wallet endpoints
[UPDATE]: When adding new wallet endpoints
*/

use crate::http::client::MapleradClient;
use crate::http::error::Result;
use crate::types::{ApiResponse, ListQuery, Transaction, Wallet};
use reqwest::Method;

/// Wallet endpoints
pub struct WalletService<'c> {
    client: &'c MapleradClient,
}

impl MapleradClient {
    pub fn wallets(&self) -> WalletService<'_> {
        WalletService { client: self }
    }
}

impl WalletService<'_> {
    /// List wallet balances per currency
    ///
    /// GET /v1/wallets
    pub async fn get_wallets(&self) -> Result<ApiResponse<Vec<Wallet>>> {
        self.client
            .call(Method::GET, "/wallets", &[], None::<&()>)
            .await
    }

    /// List wallet movements
    ///
    /// GET /v1/wallets/history
    pub async fn get_wallet_history(
        &self,
        query: &ListQuery,
    ) -> Result<ApiResponse<Vec<Transaction>>> {
        self.client
            .call(Method::GET, "/wallets/history", &query.to_query(), None::<&()>)
            .await
    }
}
