mod http_client;
mod retrying_client;

pub use http_client::HttpDispatchClient;
pub use retrying_client::{RetryPolicy, RetryingDispatchClient};
