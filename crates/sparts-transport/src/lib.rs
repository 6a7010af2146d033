//! HTTP transport for the sparts ledger API
//!
//! One request/response cycle per call, stateless, no retries: a transport
//! failure is surfaced once and the caller decides whether to re-invoke.
//! Three failure classes stay distinguishable all the way up — connection
//! failures (verbatim), bodies that do not decode as the expected JSON
//! (malformed-response), and replies whose application-level status marker
//! is absent or not `"success"` (checked by the caller via [`StatusReply`]).

pub mod error;
pub mod http;
pub mod reply;

pub use error::{TransportError, TransportResult};
pub use http::{HttpLedgerTransport, LedgerTransport};
pub use reply::StatusReply;
