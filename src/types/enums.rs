/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust enums with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionStatus {
    #[serde(rename = "PENDING", alias = "pending")]
    Pending,
    #[serde(rename = "SUCCESSFUL", alias = "successful", alias = "success")]
    Successful,
    #[serde(rename = "FAILED", alias = "failed")]
    Failed,
    #[serde(rename = "REVERSED", alias = "reversed")]
    Reversed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum IdentityType {
    Nin,
    Bvn,
    Passport,
    #[serde(rename = "VOTERS_CARD")]
    VotersCard,
    #[serde(rename = "DRIVERS_LICENSE")]
    DriversLicense,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CardType {
    Virtual,
    Physical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CardBrand {
    Visa,
    Mastercard,
}
