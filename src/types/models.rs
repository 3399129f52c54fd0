/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust domain models mirroring the upstream JSON schema
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::{CardBrand, CardType, IdentityType, TransactionStatus};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street2: Option<String>,
    pub city: String,
    pub state: String,
    pub country: String,
    pub postal_code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerIdentity {
    #[serde(rename = "type")]
    pub identity_type: IdentityType,
    pub number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub middle_name: Option<String>,
    pub email: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    /// Date of birth, `YYYY-MM-DD`
    #[serde(default)]
    pub dob: Option<String>,
    pub active: bool,
    pub disabled: bool,
    #[serde(default)]
    pub identity: Option<CustomerIdentity>,
    #[serde(default)]
    pub address: Option<Address>,
}

/// Deposit account attached to a customer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VirtualAccount {
    pub id: String,
    pub bank_name: String,
    pub account_number: String,
    pub account_name: String,
    pub currency: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transfer {
    pub id: String,
    /// Minor units of `currency`
    pub amount: u64,
    #[serde(default)]
    pub fee: Option<u64>,
    pub currency: String,
    pub status: TransactionStatus,
    #[serde(default)]
    pub reason: Option<String>,
    pub reference: String,
    #[serde(default)]
    pub account_number: Option<String>,
    #[serde(default)]
    pub bank_code: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub amount: u64,
    #[serde(default)]
    pub fee: Option<u64>,
    pub currency: String,
    pub status: TransactionStatus,
    #[serde(rename = "type")]
    pub transaction_type: String,
    pub reference: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    pub masked_pan: String,
    /// `MM/YY`
    pub expiry: String,
    pub currency: String,
    pub status: String,
    #[serde(rename = "type")]
    pub card_type: CardType,
    pub issuer: CardBrand,
    #[serde(default)]
    pub balance: Option<u64>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Institution {
    pub name: String,
    /// Bank routing/sort code used for institution resolution
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Currency {
    pub name: String,
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    pub name: String,
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wallet {
    pub currency: String,
    pub available_balance: Decimal,
    pub ledger_balance: Decimal,
    #[serde(default)]
    pub disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Counterparty {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    pub account_number: String,
    pub bank_code: String,
    #[serde(default)]
    pub bank_name: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FxQuote {
    pub reference: String,
    pub source_currency: String,
    pub target_currency: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub rate: Decimal,
    pub source_amount: u64,
    pub target_amount: u64,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirtimePurchase {
    pub id: String,
    pub phone_number: String,
    pub amount: u64,
    pub status: TransactionStatus,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}
