//! Locating Go tools and reading their build info.

mod buildinfo;
mod which_locator;

pub use buildinfo::parse_build_info;
pub use which_locator::PathToolLocator;
