//! Writes a manifest's templates into a project root.

use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{AssetStore, Event, EventSink, Filesystem},
    },
    domain::{DomainValidator as validator, PlaceholderMap, TemplateManifest},
    error::GodevResult,
};

/// Reads each template, substitutes placeholders, and writes the result.
///
/// There is no rollback: when entry N fails, entries before it stay on disk
/// and the error names the template key that failed.
pub struct TemplateMaterializer<'a> {
    filesystem: &'a dyn Filesystem,
    assets: &'a dyn AssetStore,
    events: &'a dyn EventSink,
}

impl<'a> TemplateMaterializer<'a> {
    pub fn new(
        filesystem: &'a dyn Filesystem,
        assets: &'a dyn AssetStore,
        events: &'a dyn EventSink,
    ) -> Self {
        Self {
            filesystem,
            assets,
            events,
        }
    }

    /// Materialize every entry in key order. Returns the written paths.
    #[instrument(skip_all, fields(root = %root.display(), entries = manifest.len()))]
    pub fn materialize(
        &self,
        manifest: &TemplateManifest,
        root: &Path,
        placeholders: &PlaceholderMap,
    ) -> GodevResult<Vec<PathBuf>> {
        validator::validate_manifest(manifest)?;
        validator::validate_placeholders(placeholders)?;

        let mut written = Vec::with_capacity(manifest.len());
        for (key, destination) in manifest.iter() {
            let path = root.join(destination);
            self.write_one(key, &path, placeholders)
                .map_err(|cause| ApplicationError::Materialize {
                    key: key.to_owned(),
                    cause: Box::new(cause),
                })?;

            debug!(key, path = %path.display(), "Wrote template");
            self.events.emit(&Event::FileWritten { path: path.clone() });
            written.push(path);
        }
        Ok(written)
    }

    fn write_one(&self, key: &str, path: &Path, placeholders: &PlaceholderMap) -> GodevResult<()> {
        let source = self.assets.read_asset(key)?;
        let rendered = placeholders.apply(&source);

        if let Some(parent) = path.parent() {
            self.filesystem.create_dir_all(parent)?;
        }
        self.filesystem.write_file(path, &rendered)
    }
}
