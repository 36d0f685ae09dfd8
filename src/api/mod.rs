//! Request handlers.
//!
//! Two operations: record a purchase and render the catalog page. Everything
//! else the router does is delegation; faults become responses through
//! [`AppError`](crate::errors::AppError).

mod catalog;
mod purchase;

pub use catalog::*;
pub use purchase::*;

use serde::Serialize;

/// Body of the purchase acknowledgment.
#[derive(Debug, Serialize)]
pub struct PurchaseAck {
    pub message: &'static str,
}

impl PurchaseAck {
    pub fn ok() -> Self {
        Self { message: "ok!" }
    }
}
