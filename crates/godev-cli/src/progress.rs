//! Renders service events on the terminal.

use std::io;
use std::sync::{Mutex, PoisonError};

use indicatif::ProgressBar;
use tracing::debug;

use godev_core::application::ports::{Event, EventSink};

use crate::output::OutputManager;

pub struct ConsoleEvents {
    output: OutputManager,
    spinner: Mutex<Option<ProgressBar>>,
}

impl ConsoleEvents {
    pub fn new(output: OutputManager) -> Self {
        Self {
            output,
            spinner: Mutex::new(None),
        }
    }

    fn render(&self, event: &Event) -> io::Result<()> {
        let out = &self.output;
        match event {
            Event::DirectoryCreated { path } => {
                out.info(&format!("Created directory {}", path.display()))
            }
            Event::DirectoryReset { path } => {
                out.warning(&format!("Removed and recreated {}", path.display()))
            }
            Event::ResolvingVersion => {
                *self.spinner() = Some(out.spinner("Resolving the latest Go version..."));
                Ok(())
            }
            Event::VersionResolved { version } => {
                if let Some(bar) = self.spinner().take() {
                    bar.finish_and_clear();
                }
                if version.is_fallback() {
                    out.warning(&format!(
                        "Could not resolve the latest Go version, using go {}",
                        version.version
                    ))
                } else {
                    out.success(&format!("Latest Go version is {}", version.version))
                }
            }
            Event::FileWritten { path } => out.success(&format!("Created {}", path.display())),
            Event::CommandStarted { command } => out.step(&command.to_string()),
            Event::CommandFinished { command, output } => {
                let text = output.output.trim_end();
                if output.success {
                    if !text.is_empty() {
                        out.print(text)?;
                    }
                    out.success(&command.to_string())
                } else {
                    // Failure output is shown even with --quiet.
                    if !text.is_empty() {
                        out.value(text)?;
                    }
                    out.error(&command.to_string())
                }
            }
        }
    }

    fn spinner(&self) -> std::sync::MutexGuard<'_, Option<ProgressBar>> {
        self.spinner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl EventSink for ConsoleEvents {
    fn emit(&self, event: &Event) {
        if let Err(e) = self.render(event) {
            debug!(error = %e, "Could not render progress");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{GlobalArgs, OutputFormat};
    use crate::config::AppConfig;
    use godev_core::domain::{ResolvedVersion, VersionOrigin};

    fn events() -> ConsoleEvents {
        let args = GlobalArgs {
            debug: 0,
            quiet: true,
            no_color: true,
            config: None,
            output_format: OutputFormat::Plain,
        };
        ConsoleEvents::new(OutputManager::new(&args, &AppConfig::default()))
    }

    #[test]
    fn spinner_lives_until_the_version_is_known() {
        let sink = events();
        sink.emit(&Event::ResolvingVersion);
        assert!(sink.spinner().is_some());

        sink.emit(&Event::VersionResolved {
            version: ResolvedVersion {
                version: "1.25.5".into(),
                origin: VersionOrigin::Fallback,
                failures: vec![],
            },
        });
        assert!(sink.spinner().is_none());
    }

    #[test]
    fn resolved_without_spinner_is_fine() {
        let sink = events();
        sink.emit(&Event::VersionResolved {
            version: ResolvedVersion {
                version: "1.26.0".into(),
                origin: VersionOrigin::Endpoint("https://go.dev/VERSION?m=text".into()),
                failures: vec![],
            },
        });
        assert!(sink.spinner().is_none());
    }
}
