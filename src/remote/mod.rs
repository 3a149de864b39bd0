mod client;
mod errors;
mod traits;

pub use client::ResourceClient;
pub use errors::RemoteError;
pub use traits::Resource;
