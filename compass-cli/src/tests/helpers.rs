//! Test helpers for writing CLI input files into a scratch workspace.

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

/// Two questions touching categories 1, 3, 7, 9 and 13.
pub(super) const QUESTIONS_JSON: &str = r#"{
    "version": "1.0",
    "locales": ["ja", "en"],
    "questions": [
        {
            "id": "q1",
            "title": {"ja": "通勤手段", "en": "Commute"},
            "options": [
                {"id": "a", "categoryTags": [13, 7]},
                {"id": "b", "categoryTags": [9]}
            ]
        },
        {
            "id": "q2",
            "options": [
                {"id": "a", "categoryTags": [3]},
                {"id": "b", "categoryTags": [1]}
            ]
        }
    ]
}"#;

/// Answers `q1/a` at 3 and `q2/b` at 1.
pub(super) const SUBMISSION_JSON: &str = r#"{
    "submissions": [
        {"questionId": "q1", "optionId": "a", "intensity": 3},
        {"questionId": "q2", "optionId": "b", "intensity": 1}
    ],
    "sessionId": "session-1"
}"#;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents).expect("write test input");
}

/// Scratch directory removed when dropped.
#[derive(Debug)]
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    pub(super) fn write(&self, name: &str, contents: &str) -> Utf8PathBuf {
        let path = self.path(name);
        write_utf8(&path, contents.as_bytes());
        path
    }

    /// Write the standard question set and submission, returning their paths.
    pub(super) fn standard_inputs(&self) -> (Utf8PathBuf, Utf8PathBuf) {
        (
            self.write("questions.json", QUESTIONS_JSON),
            self.write("submission.json", SUBMISSION_JSON),
        )
    }
}
