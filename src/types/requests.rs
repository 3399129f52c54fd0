/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust request structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

use super::enums::{CardBrand, CardType, IdentityType};
use super::models::{Address, CustomerIdentity};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateCustomerRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub country: String,
}

/// Full enrollment: everything tier upgrades would otherwise add later
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateFullCustomerRequest {
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    pub email: String,
    pub country: String,
    pub phone_number: String,
    /// `YYYY-MM-DD`
    pub dob: String,
    pub address: Address,
    pub identity: CustomerIdentity,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpgradeTier1Request {
    pub customer_id: String,
    pub phone_number: String,
    pub dob: String,
    pub address: Address,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpgradeTier2Request {
    pub customer_id: String,
    pub identity: CustomerIdentity,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateVirtualAccountRequest {
    pub customer_id: String,
    pub currency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_bank: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateTransferRequest {
    pub account_number: String,
    pub bank_code: String,
    /// Minor units of `currency`
    pub amount: u64,
    pub currency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateCardRequest {
    pub customer_id: String,
    pub currency: String,
    #[serde(rename = "type")]
    pub card_type: CardType,
    pub brand: CardBrand,
    pub amount: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_approve: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundCardRequest {
    pub amount: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WithdrawFromCardRequest {
    pub amount: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuyAirtimeRequest {
    pub phone_number: String,
    pub amount: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operator: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerifyIdentityRequest {
    pub customer_id: String,
    #[serde(rename = "type")]
    pub identity_type: IdentityType,
    pub number: String,
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolveInstitutionRequest {
    pub account_number: String,
    pub bank_code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateQuoteRequest {
    pub source_currency: String,
    pub target_currency: String,
    pub amount: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeCurrencyRequest {
    pub quote_reference: String,
}

/// Common list-endpoint filters, rendered as query parameters
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListQuery {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    /// `YYYY-MM-DD`
    pub start_date: Option<String>,
    /// `YYYY-MM-DD`
    pub end_date: Option<String>,
}

impl ListQuery {
    /// Render to ordered query pairs; unset fields are omitted entirely.
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(page_size) = self.page_size {
            pairs.push(("page_size", page_size.to_string()));
        }
        if let Some(start_date) = &self.start_date {
            pairs.push(("start_date", start_date.clone()));
        }
        if let Some(end_date) = &self.end_date {
            pairs.push(("end_date", end_date.clone()));
        }
        pairs
    }
}
