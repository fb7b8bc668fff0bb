//! Init Service - project initialization orchestrator.
//!
//! This service drives the `init` workflow:
//! 1. Probe the target directory and decide how to proceed
//! 2. Ask for confirmation when the directory has content
//! 3. Gather the repository identifier
//! 4. Resolve the latest Go version
//! 5. Materialize the template manifest
//!
//! Any failure short-circuits. Declining the confirmation is not a failure.

use std::path::PathBuf;

use tracing::{info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{AssetStore, Event, EventSink, Filesystem, NoopEvents, Prompter},
        services::{materializer::TemplateMaterializer, version_resolver::VersionResolver},
    },
    domain::{
        ExistingDirPolicy, InitOutcome, PlaceholderMap, ProjectTarget, ResolvedVersion,
        TemplateManifest, is_affirmative, normalize_repository,
    },
    error::GodevResult,
};

/// Input for one `init` run.
#[derive(Debug, Clone)]
pub struct InitRequest {
    pub target: ProjectTarget,
    pub policy: ExistingDirPolicy,
    /// Skips the repository prompt when set.
    pub repository: Option<String>,
    /// Answer the overwrite confirmation with yes without asking.
    pub assume_yes: bool,
}

impl InitRequest {
    pub fn new(target: ProjectTarget, policy: ExistingDirPolicy) -> Self {
        Self {
            target,
            policy,
            repository: None,
            assume_yes: false,
        }
    }

    pub fn with_repository(mut self, repository: impl Into<String>) -> Self {
        self.repository = Some(repository.into());
        self
    }

    pub fn assume_yes(mut self, yes: bool) -> Self {
        self.assume_yes = yes;
        self
    }
}

/// What an `init` run did.
#[derive(Debug, Clone)]
pub struct InitReport {
    pub outcome: InitOutcome,
    pub root: PathBuf,
    /// Files written, in manifest order. Empty when cancelled.
    pub files: Vec<PathBuf>,
    pub go_version: Option<ResolvedVersion>,
    pub repository: Option<String>,
}

impl InitReport {
    pub fn cancelled(&self) -> bool {
        self.outcome == InitOutcome::Cancelled
    }
}

pub struct InitService {
    filesystem: Box<dyn Filesystem>,
    assets: Box<dyn AssetStore>,
    resolver: VersionResolver,
    prompter: Box<dyn Prompter>,
    events: Box<dyn EventSink>,
    manifest: Option<TemplateManifest>,
}

impl InitService {
    /// Create a new init service with the given adapters.
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        assets: Box<dyn AssetStore>,
        resolver: VersionResolver,
        prompter: Box<dyn Prompter>,
    ) -> Self {
        Self {
            filesystem,
            assets,
            resolver,
            prompter,
            events: Box::new(NoopEvents),
            manifest: None,
        }
    }

    pub fn with_events(mut self, events: Box<dyn EventSink>) -> Self {
        self.events = events;
        self
    }

    /// Replace the built-in Go project manifest.
    pub fn with_manifest(mut self, manifest: TemplateManifest) -> Self {
        self.manifest = Some(manifest);
        self
    }

    /// Run the whole workflow.
    #[instrument(
        skip_all,
        fields(
            project = %request.target.name(),
            root = %request.target.root().display(),
            policy = %request.policy
        )
    )]
    pub fn init(&self, request: &InitRequest) -> GodevResult<InitReport> {
        let root = request.target.root().to_path_buf();
        let manifest = match &self.manifest {
            Some(m) => m.clone(),
            None => TemplateManifest::go_project()?,
        };

        let outcome = self.decide(request)?;
        info!(%outcome, "Target decided");

        if !outcome.proceeds() {
            if let InitOutcome::Failed(_) = outcome {
                return Err(ApplicationError::NotADirectory { path: root }.into());
            }
            return Ok(InitReport {
                outcome,
                root,
                files: Vec::new(),
                go_version: None,
                repository: None,
            });
        }

        self.prepare_directory(&outcome, request.policy, &root)?;

        let repository = self.gather_repository(request)?;

        self.events.emit(&Event::ResolvingVersion);
        let go_version = self.resolver.resolve_latest();
        self.events.emit(&Event::VersionResolved {
            version: go_version.clone(),
        });

        let placeholders =
            PlaceholderMap::for_project(request.target.name(), &go_version.version, &repository);
        let files = TemplateMaterializer::new(
            self.filesystem.as_ref(),
            self.assets.as_ref(),
            self.events.as_ref(),
        )
        .materialize(&manifest, &root, &placeholders)?;

        info!(files = files.len(), "Project initialized");
        Ok(InitReport {
            outcome,
            root,
            files,
            go_version: Some(go_version),
            repository: Some(repository),
        })
    }

    /// Probe the target and, when it has content, ask once.
    ///
    /// Only reads the filesystem; nothing is created or removed here.
    pub fn decide(&self, request: &InitRequest) -> GodevResult<InitOutcome> {
        let root = request.target.root();

        if !self.filesystem.exists(root)? {
            return Ok(InitOutcome::ProceedAsNewDirectory);
        }
        if !self.filesystem.is_dir(root)? {
            warn!(path = %root.display(), "Target exists and is not a directory");
            return Ok(InitOutcome::Failed(format!(
                "{} exists and is not a directory",
                root.display()
            )));
        }
        if self.filesystem.is_empty(root)? {
            return Ok(InitOutcome::ProceedInEmptyDirectory);
        }

        if request.assume_yes {
            info!("Directory not empty, continuing because --yes was given");
            return Ok(InitOutcome::ProceedAfterConfirmation);
        }

        let question = match request.policy {
            ExistingDirPolicy::Overwrite => format!(
                "Directory {} is not empty. Files from the template will be overwritten. Continue? (y/N) ",
                root.display()
            ),
            ExistingDirPolicy::Reset => format!(
                "Directory {} is not empty. ALL of its contents will be deleted. Continue? (y/N) ",
                root.display()
            ),
        };
        let answer = self.prompter.ask(&question)?;

        if is_affirmative(&answer) {
            Ok(InitOutcome::ProceedAfterConfirmation)
        } else {
            info!(answer = %answer, "Initialization cancelled by user");
            Ok(InitOutcome::Cancelled)
        }
    }

    fn prepare_directory(
        &self,
        outcome: &InitOutcome,
        policy: ExistingDirPolicy,
        root: &std::path::Path,
    ) -> GodevResult<()> {
        match (outcome, policy) {
            (InitOutcome::ProceedAsNewDirectory, _) => {
                self.filesystem.create_dir_all(root)?;
                self.events.emit(&Event::DirectoryCreated {
                    path: root.to_path_buf(),
                });
            }
            (InitOutcome::ProceedAfterConfirmation, ExistingDirPolicy::Reset) => {
                self.filesystem.remove_tree_if_exists(root)?;
                self.filesystem.create_dir_all(root)?;
                self.events.emit(&Event::DirectoryReset {
                    path: root.to_path_buf(),
                });
            }
            _ => {}
        }
        Ok(())
    }

    fn gather_repository(&self, request: &InitRequest) -> GodevResult<String> {
        let name = request.target.name();
        let raw = match &request.repository {
            Some(repo) => repo.clone(),
            None => self.prompter.ask(&format!(
                "Repository (e.g. github.com/you/{name}, empty for '{name}'): "
            ))?,
        };
        Ok(normalize_repository(&raw, name))
    }
}
