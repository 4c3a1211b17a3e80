//! Shared decoding of seed payloads.

use crate::task::{
    domain::{RemoteTodoList, RemoteTodoRecord},
    ports::{NetworkError, NetworkResult},
};

/// Decodes a `{ "todos": [...] }` body.
///
/// An empty (or whitespace-only) body is [`NetworkError::NoData`]; anything
/// that is not the expected shape is [`NetworkError::DecodeFailure`].
pub(crate) fn decode_seed_payload(body: &[u8]) -> NetworkResult<Vec<RemoteTodoRecord>> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(NetworkError::NoData);
    }
    let list: RemoteTodoList = serde_json::from_slice(body).map_err(NetworkError::decode)?;
    Ok(list.todos)
}
