/*
[INPUT]:  Card issuance requests, card identifiers, funding amounts
[OUTPUT]: Issued cards, funding confirmations, card transactions
[POS]:    HTTP layer - card issuing endpoints
[UPDATE]: When adding new issuing endpoints or changing the card lifecycle
*/

use crate::http::client::MapleradClient;
use crate::http::error::Result;
use crate::types::{
    ApiResponse, Card, CardReference, CreateCardRequest, FundCardRequest, Generic, ListQuery,
    Transaction, WithdrawFromCardRequest,
};
use reqwest::Method;

/// Card issuing endpoints
pub struct IssuingService<'c> {
    client: &'c MapleradClient,
}

impl MapleradClient {
    pub fn issuing(&self) -> IssuingService<'_> {
        IssuingService { client: self }
    }
}

impl IssuingService<'_> {
    /// Issue a new card; returns a reference to poll for the created card
    ///
    /// POST /v1/issuing
    pub async fn create_card(
        &self,
        request: &CreateCardRequest,
    ) -> Result<ApiResponse<CardReference>> {
        self.client
            .call(Method::POST, "/issuing", &[], Some(request))
            .await
    }

    /// Fetch a single card
    ///
    /// GET /v1/issuing/{id}
    pub async fn get_card(&self, card_id: &str) -> Result<ApiResponse<Card>> {
        let path = format!("/issuing/{card_id}");
        self.client
            .call(Method::GET, &path, &[], None::<&()>)
            .await
    }

    /// List issued cards
    ///
    /// GET /v1/issuing
    pub async fn get_cards(&self, query: &ListQuery) -> Result<ApiResponse<Vec<Card>>> {
        self.client
            .call(Method::GET, "/issuing", &query.to_query(), None::<&()>)
            .await
    }

    /// Fund a card from the issuing wallet
    ///
    /// POST /v1/issuing/{id}/fund
    pub async fn fund_card(&self, card_id: &str, amount: u64) -> Result<Generic> {
        let path = format!("/issuing/{card_id}/fund");
        let body = FundCardRequest { amount };
        self.client
            .call(Method::POST, &path, &[], Some(&body))
            .await
    }

    /// Move funds from a card back to the issuing wallet
    ///
    /// POST /v1/issuing/{id}/withdraw
    pub async fn withdraw_from_card(&self, card_id: &str, amount: u64) -> Result<Generic> {
        let path = format!("/issuing/{card_id}/withdraw");
        let body = WithdrawFromCardRequest { amount };
        self.client
            .call(Method::POST, &path, &[], Some(&body))
            .await
    }

    /// Freeze a card; declined authorizations until unfrozen
    ///
    /// PATCH /v1/issuing/{id}/freeze
    pub async fn freeze_card(&self, card_id: &str) -> Result<Generic> {
        let path = format!("/issuing/{card_id}/freeze");
        self.client
            .call(Method::PATCH, &path, &[], None::<&()>)
            .await
    }

    /// Unfreeze a previously frozen card
    ///
    /// PATCH /v1/issuing/{id}/unfreeze
    pub async fn unfreeze_card(&self, card_id: &str) -> Result<Generic> {
        let path = format!("/issuing/{card_id}/unfreeze");
        self.client
            .call(Method::PATCH, &path, &[], None::<&()>)
            .await
    }

    /// List one card's transactions
    ///
    /// GET /v1/issuing/{id}/transactions
    pub async fn get_card_transactions(
        &self,
        card_id: &str,
        query: &ListQuery,
    ) -> Result<ApiResponse<Vec<Transaction>>> {
        let path = format!("/issuing/{card_id}/transactions");
        self.client
            .call(Method::GET, &path, &query.to_query(), None::<&()>)
            .await
    }
}
