//! Template asset stores.

mod embedded;
mod memory;

pub use embedded::EmbeddedAssets;
pub use memory::MemoryAssets;
