/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod bills;
pub mod client;
pub mod collections;
pub mod counterparty;
pub mod customers;
pub mod error;
pub mod fx;
pub mod identity;
pub mod institutions;
pub mod issuing;
pub mod misc;
pub mod transactions;
pub mod transfers;
pub mod wallets;

pub use client::{ClientConfig, Environment, MapleradClient};
pub use error::{MapleradError, Result};

pub use bills::BillService;
pub use collections::CollectionService;
pub use counterparty::CounterpartyService;
pub use customers::CustomerService;
pub use fx::FxService;
pub use identity::IdentityService;
pub use institutions::InstitutionService;
pub use issuing::IssuingService;
pub use misc::MiscService;
pub use transactions::TransactionService;
pub use transfers::TransferService;
pub use wallets::WalletService;
