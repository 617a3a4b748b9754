//! Provider implementations

pub mod http;
#[cfg(test)]
pub mod mock;
pub mod sdk;

pub use http::BedrockHttpProvider;
pub use sdk::BedrockSdkProvider;
