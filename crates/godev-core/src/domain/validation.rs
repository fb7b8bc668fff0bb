use crate::domain::{
    error::DomainError, manifest::TemplateManifest, placeholders::PlaceholderMap,
};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across services.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_manifest(manifest: &TemplateManifest) -> Result<(), DomainError> {
        manifest.validate()
    }

    pub fn validate_placeholders(placeholders: &PlaceholderMap) -> Result<(), DomainError> {
        placeholders.validate()
    }
}
