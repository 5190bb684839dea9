pub mod client;
pub mod extract;
pub mod pacer;
pub mod signer;

pub use client::PaapiClient;
pub use extract::{extract_facts, search_fallback_url};
pub use pacer::Pacer;
pub use signer::SigV4Signer;
