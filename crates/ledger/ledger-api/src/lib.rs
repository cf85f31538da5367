//! Transaction Ledger Consumer API
//!
//! Request and response bodies of the transaction endpoints, plus
//! re-exports of the SPI types.

mod wire;

pub use wire::*;

// Re-export all SPI types
pub use ledger_spi::*;
