/*
[INPUT]:  Bill payment requests (airtime top-ups)
[OUTPUT]: Purchase records and their status
[POS]:    HTTP layer - bill payment endpoints
[UPDATE]: When new biller categories come online
*/

use crate::http::client::MapleradClient;
use crate::http::error::Result;
use crate::types::{AirtimePurchase, ApiResponse, BuyAirtimeRequest, ListQuery};
use reqwest::Method;

/// Bill payment endpoints
pub struct BillService<'c> {
    client: &'c MapleradClient,
}

impl MapleradClient {
    pub fn bills(&self) -> BillService<'_> {
        BillService { client: self }
    }
}

impl BillService<'_> {
    /// Buy airtime for a phone number
    ///
    /// POST /v1/bills/airtime
    pub async fn buy_airtime(
        &self,
        request: &BuyAirtimeRequest,
    ) -> Result<ApiResponse<AirtimePurchase>> {
        self.client
            .call(Method::POST, "/bills/airtime", &[], Some(request))
            .await
    }

    /// List past airtime purchases
    ///
    /// GET /v1/bills/airtime
    pub async fn get_airtime_history(
        &self,
        query: &ListQuery,
    ) -> Result<ApiResponse<Vec<AirtimePurchase>>> {
        self.client
            .call(Method::GET, "/bills/airtime", &query.to_query(), None::<&()>)
            .await
    }
}
