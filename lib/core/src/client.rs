use crate::Result;
use serde_json::Value;
use std::future::Future;

/// Issues GET requests against graph store resources.
///
/// Implementations resolve with the parsed JSON body, or with
/// [`Error::FetchFailure`](crate::Error::FetchFailure) for transport errors and
/// non-2xx statuses. No retries.
pub trait ResourceClient: Send + Sync {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<Value>> + Send;
}
