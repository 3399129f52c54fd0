/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Maplerad client crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

//! Rust client for the Maplerad payment infrastructure API.
//!
//! One [`MapleradClient`] per session; resource services are cheap facades
//! minted from accessors on the client and share its connection pool:
//!
//! ```no_run
//! use maplerad::{Environment, MapleradClient};
//!
//! # async fn run() -> maplerad::Result<()> {
//! let client = MapleradClient::new("sk_test_...", Environment::Sandbox)?;
//! let resolved = client
//!     .institutions()
//!     .resolve_institution("0123456789", "058")
//!     .await?;
//! println!("{}", resolved.data.account_name);
//! # Ok(())
//! # }
//! ```

pub mod http;
pub mod types;

// Re-export commonly used types from http
pub use http::{
    ClientConfig,
    Environment,
    MapleradClient,
    MapleradError,
    Result,
};

// Re-export all types
pub use types::*;
