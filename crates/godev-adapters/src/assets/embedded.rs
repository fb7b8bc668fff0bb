//! Templates compiled into the binary.

use godev_core::{
    application::{ApplicationError, ports::AssetStore},
    error::GodevResult,
};

/// Keys match `godev_core::domain::GO_PROJECT_MANIFEST`.
static ASSETS: &[(&str, &[u8])] = &[
    (
        "template/.vscode/extensions.json.tpl",
        include_bytes!("../../template/.vscode/extensions.json.tpl"),
    ),
    (
        "template/.vscode/launch.json.tpl",
        include_bytes!("../../template/.vscode/launch.json.tpl"),
    ),
    (
        "template/.vscode/settings.json.tpl",
        include_bytes!("../../template/.vscode/settings.json.tpl"),
    ),
    ("template/go.mod.tpl", include_bytes!("../../template/go.mod.tpl")),
    ("template/main.go.tpl", include_bytes!("../../template/main.go.tpl")),
    ("template/gitignore.tpl", include_bytes!("../../template/gitignore.tpl")),
    ("template/golangci.yml.tpl", include_bytes!("../../template/golangci.yml.tpl")),
    ("template/README.md.tpl", include_bytes!("../../template/README.md.tpl")),
];

/// Asset store backed by `include_bytes!`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedAssets;

impl EmbeddedAssets {
    pub fn new() -> Self {
        Self
    }
}

impl AssetStore for EmbeddedAssets {
    fn read_asset(&self, key: &str) -> GodevResult<Vec<u8>> {
        ASSETS
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, bytes)| bytes.to_vec())
            .ok_or_else(|| {
                ApplicationError::TemplateNotFound {
                    key: key.to_owned(),
                }
                .into()
            })
    }
}
