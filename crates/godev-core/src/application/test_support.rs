//! In-crate fakes for service tests.
//!
//! Stateful ports (filesystem, assets, prompter, events) get small fakes;
//! the stateless ones are mocked with `mockall` in each test module.

use std::collections::{BTreeMap, BTreeSet, VecDeque};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::application::{
    ApplicationError,
    ports::{AssetStore, Event, EventSink, Filesystem, Prompter},
};
use crate::error::GodevResult;

#[derive(Default)]
struct FsState {
    dirs: BTreeSet<PathBuf>,
    files: BTreeMap<PathBuf, Vec<u8>>,
    fail_writes: BTreeSet<PathBuf>,
}

/// A path-keyed in-memory tree.
#[derive(Default)]
pub struct FakeFs {
    state: Mutex<FsState>,
}

impl FakeFs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dir(self, path: impl AsRef<Path>) -> Self {
        {
            let mut state = self.state.lock().unwrap();
            for ancestor in path.as_ref().ancestors() {
                state.dirs.insert(ancestor.to_path_buf());
            }
        }
        self
    }

    pub fn with_file(self, path: impl AsRef<Path>, content: &str) -> Self {
        let path = path.as_ref().to_path_buf();
        let this = match path.parent() {
            Some(parent) => self.with_dir(parent),
            None => self,
        };
        this.state
            .lock()
            .unwrap()
            .files
            .insert(path, content.as_bytes().to_vec());
        this
    }

    pub fn failing_write(self, path: impl AsRef<Path>) -> Self {
        self.state
            .lock()
            .unwrap()
            .fail_writes
            .insert(path.as_ref().to_path_buf());
        self
    }

    pub fn read(&self, path: impl AsRef<Path>) -> Option<String> {
        self.state
            .lock()
            .unwrap()
            .files
            .get(path.as_ref())
            .map(|b| String::from_utf8_lossy(b).into_owned())
    }

    pub fn has_dir(&self, path: impl AsRef<Path>) -> bool {
        self.state.lock().unwrap().dirs.contains(path.as_ref())
    }

    pub fn file_count(&self) -> usize {
        self.state.lock().unwrap().files.len()
    }
}

impl Filesystem for FakeFs {
    fn exists(&self, path: &Path) -> GodevResult<bool> {
        let state = self.state.lock().unwrap();
        Ok(state.dirs.contains(path) || state.files.contains_key(path))
    }

    fn is_dir(&self, path: &Path) -> GodevResult<bool> {
        Ok(self.state.lock().unwrap().dirs.contains(path))
    }

    fn is_empty(&self, path: &Path) -> GodevResult<bool> {
        let state = self.state.lock().unwrap();
        if !state.dirs.contains(path) {
            return Err(ApplicationError::Filesystem {
                path: path.to_path_buf(),
                reason: "not a directory".into(),
            }
            .into());
        }
        let has_child = state.dirs.iter().any(|d| d.parent() == Some(path))
            || state.files.keys().any(|f| f.parent() == Some(path));
        Ok(!has_child)
    }

    fn remove_tree_if_exists(&self, path: &Path) -> GodevResult<()> {
        let mut state = self.state.lock().unwrap();
        state.dirs.retain(|d| !d.starts_with(path));
        state.files.retain(|f, _| !f.starts_with(path));
        Ok(())
    }

    fn create_dir_all(&self, path: &Path) -> GodevResult<()> {
        let mut state = self.state.lock().unwrap();
        for ancestor in path.ancestors() {
            state.dirs.insert(ancestor.to_path_buf());
        }
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &[u8]) -> GodevResult<()> {
        let mut state = self.state.lock().unwrap();
        if state.fail_writes.contains(path) {
            return Err(ApplicationError::Filesystem {
                path: path.to_path_buf(),
                reason: "permission denied".into(),
            }
            .into());
        }
        state.files.insert(path.to_path_buf(), content.to_vec());
        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> GodevResult<String> {
        self.read(path).ok_or_else(|| {
            ApplicationError::Filesystem {
                path: path.to_path_buf(),
                reason: "No such file or directory".into(),
            }
            .into()
        })
    }
}

/// Assets served from a map.
#[derive(Default)]
pub struct MapAssets(BTreeMap<String, Vec<u8>>);

impl MapAssets {
    pub fn with(mut self, key: &str, content: &str) -> Self {
        self.0.insert(key.to_owned(), content.as_bytes().to_vec());
        self
    }
}

impl AssetStore for MapAssets {
    fn read_asset(&self, key: &str) -> GodevResult<Vec<u8>> {
        self.0.get(key).cloned().ok_or_else(|| {
            ApplicationError::TemplateNotFound {
                key: key.to_owned(),
            }
            .into()
        })
    }
}

/// Answers questions from a queue; an empty queue behaves like closed stdin.
#[derive(Default)]
pub struct ScriptedPrompter {
    answers: Mutex<VecDeque<String>>,
    asked: Mutex<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn answering(answers: &[&str]) -> Self {
        Self {
            answers: Mutex::new(answers.iter().map(|s| s.to_string()).collect()),
            asked: Mutex::default(),
        }
    }

    pub fn questions(&self) -> Vec<String> {
        self.asked.lock().unwrap().clone()
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&self, question: &str) -> GodevResult<String> {
        self.asked.lock().unwrap().push(question.to_owned());
        self.answers
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| ApplicationError::EndOfInput.into())
    }
}

/// Collects every emitted event.
#[derive(Default)]
pub struct RecordingEvents(Mutex<Vec<Event>>);

impl RecordingEvents {
    pub fn events(&self) -> Vec<Event> {
        self.0.lock().unwrap().clone()
    }
}

impl EventSink for RecordingEvents {
    fn emit(&self, event: &Event) {
        self.0.lock().unwrap().push(event.clone());
    }
}

/// Forwarding impls so a test can keep a handle on a fake it gave away.
impl<T: Filesystem> Filesystem for std::sync::Arc<T> {
    fn exists(&self, path: &Path) -> GodevResult<bool> {
        (**self).exists(path)
    }
    fn is_dir(&self, path: &Path) -> GodevResult<bool> {
        (**self).is_dir(path)
    }
    fn is_empty(&self, path: &Path) -> GodevResult<bool> {
        (**self).is_empty(path)
    }
    fn remove_tree_if_exists(&self, path: &Path) -> GodevResult<()> {
        (**self).remove_tree_if_exists(path)
    }
    fn create_dir_all(&self, path: &Path) -> GodevResult<()> {
        (**self).create_dir_all(path)
    }
    fn write_file(&self, path: &Path, content: &[u8]) -> GodevResult<()> {
        (**self).write_file(path, content)
    }
    fn read_to_string(&self, path: &Path) -> GodevResult<String> {
        (**self).read_to_string(path)
    }
}

impl<T: Prompter> Prompter for std::sync::Arc<T> {
    fn ask(&self, question: &str) -> GodevResult<String> {
        (**self).ask(question)
    }
}

impl<T: EventSink> EventSink for std::sync::Arc<T> {
    fn emit(&self, event: &Event) {
        (**self).emit(event)
    }
}
