//! Transfer endpoint abstraction
//!
//! The measurement engine is written once against this trait; execution
//! environments supply thin adapters. The shipped adapter speaks HTTP to
//! a Cloudflare-style byte-shovel endpoint, and tests substitute mock
//! servers or in-memory fakes.

pub mod http;

pub use http::HttpTransport;

use crate::error::Result;
use async_trait::async_trait;
use bytes::Bytes;

/// Remote endpoint capable of serving and sinking raw bytes.
///
/// All three operations fully consume any response body before returning,
/// so a completed call bounds the transfer's wall-clock time. Every call
/// carries the adapter's own safety timeout; a hung connection surfaces as
/// an `Err`, never a stall.
#[async_trait]
pub trait TransferEndpoint: Send + Sync {
    /// Request a minimal payload; success is any completed response.
    async fn ping(&self) -> Result<()>;

    /// Request `bytes` from the endpoint and read the body to completion.
    /// Returns the byte count actually received.
    async fn download(&self, bytes: u64) -> Result<u64>;

    /// Send the payload to the endpoint and drain any response body.
    async fn upload(&self, payload: Bytes) -> Result<()>;
}
