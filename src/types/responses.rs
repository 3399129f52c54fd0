/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust response structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

/// Standard Maplerad envelope: `{"status": bool, "message": str, "data": …}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub status: bool,
    pub message: String,
    pub data: T,
}

/// Envelope for endpoints that return no `data` payload (freeze, unfreeze)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Generic {
    pub status: bool,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatedCustomer {
    pub id: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedInstitution {
    pub account_number: String,
    pub account_name: String,
}

/// Card issuance is asynchronous; creation returns only a tracking reference
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardReference {
    pub reference: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FxExchange {
    pub reference: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdentityVerification {
    pub reference: String,
    pub status: String,
}
