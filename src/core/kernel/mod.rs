/// Transport kernel - request encoding and execution.
///
/// The kernel contains only transport logic and generic interfaces; it knows
/// nothing about individual endpoints or payload schemas.
///
/// # Architecture
///
/// - `query`: the ordered parameter bag and the pure URL encoder. No I/O.
/// - `rest`: the `RestClient` seam and the reqwest-backed executor owning
///   credentials and the generic decode path.
///
/// Endpoint modules validate their own arguments, build a [`QueryParams`]
/// bag, and delegate to [`RestClient::get_json`]; the kernel turns that into
/// exactly one HTTP round trip per call.
pub mod query;
pub mod rest;

// Re-export key types for convenience
pub use query::{encode_url, QueryParams};
pub use rest::{ReqwestRest, RestClient, RestClientBuilder, RestClientConfig, API_KEY_HEADER};
