use std::collections::BTreeMap;

use godev_core::{
    application::{ApplicationError, ports::AssetStore},
    error::GodevResult,
};

/// Asset store built in code, for tests and custom manifests.
#[derive(Debug, Clone, Default)]
pub struct MemoryAssets {
    assets: BTreeMap<String, Vec<u8>>,
}

impl MemoryAssets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        self.assets.insert(key.into(), content.into());
        self
    }
}

impl AssetStore for MemoryAssets {
    fn read_asset(&self, key: &str) -> GodevResult<Vec<u8>> {
        self.assets.get(key).cloned().ok_or_else(|| {
            ApplicationError::TemplateNotFound {
                key: key.to_owned(),
            }
            .into()
        })
    }
}
