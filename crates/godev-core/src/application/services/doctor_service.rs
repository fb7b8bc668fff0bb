//! Environment diagnostics.
//!
//! Every check runs regardless of earlier results, and none of them is an
//! error: a failed check carries advice instead.

use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use crate::{
    application::ports::{Filesystem, ToolLocator, Toolchain},
    domain::{
        DiagnosticCheck, DoctorReport, GoVersion, ModuleFile, RECOMMENDED_TOOLS, RecommendedTool,
        diagnostics::{GO_VERSION_CHECK, MODULE_FILE_CHECK, tool_check_name},
    },
};

const DOWNLOAD_URL: &str = "https://golang.org/dl/";

pub struct DoctorService {
    filesystem: Box<dyn Filesystem>,
    toolchain: Box<dyn Toolchain>,
    locator: Box<dyn ToolLocator>,
    module_file: PathBuf,
}

impl DoctorService {
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        toolchain: Box<dyn Toolchain>,
        locator: Box<dyn ToolLocator>,
    ) -> Self {
        Self {
            filesystem,
            toolchain,
            locator,
            module_file: PathBuf::from("go.mod"),
        }
    }

    /// Path of the module descriptor, relative to the working directory.
    pub fn with_module_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.module_file = path.into();
        self
    }

    #[instrument(skip_all, fields(module_file = %self.module_file.display()))]
    pub fn run(&self) -> DoctorReport {
        let mut checks = vec![self.check_module_file(), self.check_go_version()];
        checks.extend(RECOMMENDED_TOOLS.iter().map(|tool| self.check_tool(tool)));

        for check in &checks {
            debug!(name = %check.name, passed = check.passed, message = %check.message);
        }
        DoctorReport { checks }
    }

    fn check_module_file(&self) -> DiagnosticCheck {
        let path = self.module_file.display();
        let file = &self.module_file;
        let probed = self
            .filesystem
            .exists(file)
            .and_then(|exists| Ok((exists, exists && self.filesystem.is_dir(file)?)));
        match probed {
            Ok((true, false)) => DiagnosticCheck::pass(MODULE_FILE_CHECK, format!("{path} found")),
            Ok((true, true)) => DiagnosticCheck::fail(
                MODULE_FILE_CHECK,
                format!("{path} is a directory"),
                "Remove the directory and create the go.mod file using 'go mod init'",
            ),
            Ok((false, _)) => DiagnosticCheck::fail(
                MODULE_FILE_CHECK,
                format!("{path} not found"),
                "Create the go.mod file using 'go mod init'",
            ),
            Err(e) => DiagnosticCheck::fail(
                MODULE_FILE_CHECK,
                format!("Cannot access {path}: {e}"),
                "Check the permissions of the project directory",
            ),
        }
    }

    fn check_go_version(&self) -> DiagnosticCheck {
        match self.compare_go_version() {
            Ok(message) => DiagnosticCheck::pass(GO_VERSION_CHECK, message),
            Err((message, advice)) => DiagnosticCheck::fail(GO_VERSION_CHECK, message, advice),
        }
    }

    fn compare_go_version(&self) -> Result<String, (String, String)> {
        let path = &self.module_file;
        let source = self.filesystem.read_to_string(path).map_err(|e| {
            (
                format!("Cannot read {}: {e}", path.display()),
                "Create the go.mod file using 'go mod init'".to_owned(),
            )
        })?;

        let module = ModuleFile::parse(&source).map_err(|e| {
            (
                e.to_string(),
                "Check if the go.mod file is a valid Go module file".to_owned(),
            )
        })?;

        let required = module.go.ok_or_else(|| {
            (
                format!("{} has no go directive", path.display()),
                "Add one with 'go mod edit -go=<version>'".to_owned(),
            )
        })?;

        let installed = self
            .toolchain
            .installed_version()
            .and_then(|raw| GoVersion::from_toolchain(&raw).map_err(Into::into))
            .map_err(|e| {
                (
                    format!("Cannot determine the installed Go version: {e}"),
                    format!("Install Go from {DOWNLOAD_URL}"),
                )
            })?;

        compare(&installed, &required)
    }

    fn check_tool(&self, tool: &RecommendedTool) -> DiagnosticCheck {
        let name = tool_check_name(tool.name);
        match self.locator.locate(tool.name) {
            Some(path) => {
                let version = self
                    .locator
                    .build_info(&path)
                    .map(|info| info.to_string())
                    .unwrap_or_else(|| "unknown".to_owned());
                DiagnosticCheck::pass(name, describe_tool(&path, &version))
            }
            None => DiagnosticCheck::fail(
                name,
                format!("{} not found in PATH", tool.name),
                "Run 'godev tools install' to install the recommended tools",
            ),
        }
    }
}

fn compare(installed: &GoVersion, required: &GoVersion) -> Result<String, (String, String)> {
    if installed >= required {
        Ok(format!("go{installed} satisfies go {required}"))
    } else {
        Err((
            format!("Installed go{installed} is older than the required go {required}"),
            format!("Upgrade Go to version {required} or higher, download from {DOWNLOAD_URL}"),
        ))
    }
}

fn describe_tool(path: &Path, version: &str) -> String {
    format!("{} ({version})", path.display())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ApplicationError;
    use crate::application::ports::output::{MockToolLocator, MockToolchain};
    use crate::application::test_support::FakeFs;
    use crate::domain::BuildInfo;

    fn toolchain(version: &'static str) -> MockToolchain {
        let mut t = MockToolchain::new();
        t.expect_installed_version()
            .returning(move || Ok(version.to_owned()));
        t
    }

    fn no_tools() -> MockToolLocator {
        let mut l = MockToolLocator::new();
        l.expect_locate().returning(|_| None);
        l
    }

    fn service(fs: FakeFs, toolchain: MockToolchain, locator: MockToolLocator) -> DoctorService {
        DoctorService::new(Box::new(fs), Box::new(toolchain), Box::new(locator))
    }

    #[test]
    fn checks_run_in_fixed_order() {
        let report = service(FakeFs::new(), toolchain("go1.25.5"), no_tools()).run();
        let names: Vec<_> = report.checks.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Go module file",
                "Go version",
                "Go tools gofumpt",
                "Go tools goimports",
                "Go tools golangci-lint"
            ]
        );
    }

    #[test]
    fn missing_go_mod_fails_both_module_checks_but_still_checks_tools() {
        let report = service(FakeFs::new(), toolchain("go1.25.5"), no_tools()).run();

        let module = report.get(MODULE_FILE_CHECK).unwrap();
        assert!(!module.passed);
        assert_eq!(
            module.advice.as_deref(),
            Some("Create the go.mod file using 'go mod init'")
        );
        assert!(!report.get(GO_VERSION_CHECK).unwrap().passed);
        assert_eq!(report.checks.len(), 5);
    }

    #[test]
    fn directory_named_like_the_module_file_fails() {
        let fs = FakeFs::new().with_dir("go.mod");
        let report = service(fs, toolchain("go1.25.5"), no_tools()).run();

        let module = report.get(MODULE_FILE_CHECK).unwrap();
        assert!(!module.passed);
        assert_eq!(module.message, "go.mod is a directory");
        assert!(!report.get(GO_VERSION_CHECK).unwrap().passed);
    }

    #[test]
    fn satisfied_go_version_passes() {
        let fs = FakeFs::new().with_file("go.mod", "module demo\n\ngo 1.22\n");
        let report = service(fs, toolchain("go1.25.5"), no_tools()).run();

        assert!(report.get(MODULE_FILE_CHECK).unwrap().passed);
        let version = report.get(GO_VERSION_CHECK).unwrap();
        assert!(version.passed, "{}", version.message);
    }

    #[test]
    fn old_toolchain_gets_upgrade_advice() {
        let fs = FakeFs::new().with_file("go.mod", "module demo\n\ngo 1.24.0\n");
        let report = service(fs, toolchain("go1.23.4"), no_tools()).run();

        let check = report.get(GO_VERSION_CHECK).unwrap();
        assert!(!check.passed);
        assert_eq!(
            check.advice.as_deref(),
            Some("Upgrade Go to version 1.24.0 or higher, download from https://golang.org/dl/")
        );
    }

    #[test]
    fn prerelease_toolchain_does_not_satisfy_release() {
        let fs = FakeFs::new().with_file("go.mod", "module demo\ngo 1.24.0\n");
        let report = service(fs, toolchain("go1.24rc2"), no_tools()).run();
        assert!(!report.get(GO_VERSION_CHECK).unwrap().passed);
    }

    #[test]
    fn unparseable_go_mod_fails_version_check_only() {
        let fs = FakeFs::new().with_file("go.mod", "module demo\nnonsense here\n");
        let report = service(fs, toolchain("go1.25.5"), no_tools()).run();

        assert!(report.get(MODULE_FILE_CHECK).unwrap().passed);
        let check = report.get(GO_VERSION_CHECK).unwrap();
        assert!(!check.passed);
        assert!(check.message.contains("go.mod:2"));
        assert_eq!(
            check.advice.as_deref(),
            Some("Check if the go.mod file is a valid Go module file")
        );
    }

    #[test]
    fn missing_toolchain_fails_version_check() {
        let fs = FakeFs::new().with_file("go.mod", "module demo\ngo 1.22\n");
        let mut t = MockToolchain::new();
        t.expect_installed_version().returning(|| {
            Err(ApplicationError::Toolchain {
                reason: "go: not found".into(),
            }
            .into())
        });
        let report = service(fs, t, no_tools()).run();

        let check = report.get(GO_VERSION_CHECK).unwrap();
        assert!(!check.passed);
        assert!(check.advice.as_ref().unwrap().contains("golang.org/dl"));
    }

    #[test]
    fn custom_module_file_path() {
        let fs = FakeFs::new().with_file("sub/go.mod", "module demo\ngo 1.22\n");
        let report = service(fs, toolchain("go1.22.0"), no_tools())
            .with_module_file("sub/go.mod")
            .run();
        assert!(report.get(MODULE_FILE_CHECK).unwrap().passed);
        assert!(report.get(GO_VERSION_CHECK).unwrap().passed);
    }

    #[test]
    fn located_tools_report_build_info_or_unknown() {
        let mut locator = MockToolLocator::new();
        locator
            .expect_locate()
            .returning(|name| Some(PathBuf::from(format!("/go/bin/{name}"))));
        locator.expect_build_info().returning(|path| {
            if path.ends_with("gofumpt") {
                Some(BuildInfo {
                    go_version: "go1.25.0".into(),
                    main_version: "v0.9.2".into(),
                })
            } else {
                None
            }
        });

        let report = service(FakeFs::new(), toolchain("go1.25.5"), locator).run();

        let gofumpt = report.get("Go tools gofumpt").unwrap();
        assert!(gofumpt.passed);
        assert_eq!(gofumpt.message, "/go/bin/gofumpt (v0.9.2 built with go1.25.0)");
        let goimports = report.get("Go tools goimports").unwrap();
        assert!(goimports.message.ends_with("(unknown)"));
    }

    #[test]
    fn missing_tool_suggests_install() {
        let report = service(FakeFs::new(), toolchain("go1.25.5"), no_tools()).run();
        let check = report.get("Go tools golangci-lint").unwrap();
        assert!(!check.passed);
        assert!(check.advice.as_deref().unwrap().contains("godev tools install"));
    }
}
