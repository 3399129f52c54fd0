/*
[INPUT]:  None (static catalog lookups)
[OUTPUT]: Supported currencies and countries
[POS]:    HTTP layer - reference data endpoints
[UPDATE]: Rarely; when upstream adds catalog endpoints
*/

use crate::http::client::MapleradClient;
use crate::http::error::Result;
use crate::types::{ApiResponse, Country, Currency};
use reqwest::Method;

/// Reference data endpoints
pub struct MiscService<'c> {
    client: &'c MapleradClient,
}

impl MapleradClient {
    pub fn misc(&self) -> MiscService<'_> {
        MiscService { client: self }
    }
}

impl MiscService<'_> {
    /// List supported currencies
    ///
    /// GET /v1/currencies
    pub async fn get_currencies(&self) -> Result<ApiResponse<Vec<Currency>>> {
        self.client
            .call(Method::GET, "/currencies", &[], None::<&()>)
            .await
    }

    /// List supported countries
    ///
    /// GET /v1/countries
    pub async fn get_countries(&self) -> Result<ApiResponse<Vec<Country>>> {
        self.client
            .call(Method::GET, "/countries", &[], None::<&()>)
            .await
    }
}
