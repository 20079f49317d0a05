//! Question-bank file tools
//!
//! Backs the three helper binaries:
//! - `count-questions`: length of a JSON question array
//! - `count-question-ids`: identifiers like `L1-2-Market-001` in a text bank
//! - `validate-question-banks`: well-formedness of several JSON files
//!
//! Counting fails fast on unreadable input. Validation never fails as a whole;
//! each file gets its own report.

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::consts::ID_SAMPLE_SIZE;
use crate::error::QuestionBankError;

/// `L<digits>-<digits>-<word>-<3 digits>`, ASCII only
static QUESTION_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"L[0-9]+-[0-9]+-[A-Za-z0-9_]+-[0-9]{3}").expect("valid question id pattern")
});

fn read(path: &Path) -> Result<String, QuestionBankError> {
    fs::read_to_string(path).map_err(|source| QuestionBankError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Count entries in a JSON question array
pub fn count_questions(file: &str, text: &str) -> Result<usize, QuestionBankError> {
    let value: serde_json::Value =
        serde_json::from_str(text).map_err(|e| QuestionBankError::Parse {
            file: file.to_string(),
            message: e.to_string(),
        })?;
    value
        .as_array()
        .map(Vec::len)
        .ok_or_else(|| QuestionBankError::NotAnArray {
            file: file.to_string(),
        })
}

pub fn count_questions_file(path: &Path) -> Result<usize, QuestionBankError> {
    let text = read(path)?;
    count_questions(&file_name(path), &text)
}

/// Question ids found in a text bank
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdScan {
    pub count: usize,
    /// Up to the first [`ID_SAMPLE_SIZE`] ids, in file order
    pub first: Vec<String>,
    /// Up to the last [`ID_SAMPLE_SIZE`] ids, in file order
    pub last: Vec<String>,
}

/// Find every question id in `text`
pub fn scan_question_ids(text: &str) -> IdScan {
    let ids: Vec<&str> = QUESTION_ID.find_iter(text).map(|m| m.as_str()).collect();
    let tail_start = ids.len().saturating_sub(ID_SAMPLE_SIZE);

    IdScan {
        count: ids.len(),
        first: ids.iter().take(ID_SAMPLE_SIZE).map(|s| s.to_string()).collect(),
        last: ids[tail_start..].iter().map(|s| s.to_string()).collect(),
    }
}

pub fn scan_question_ids_file(path: &Path) -> Result<IdScan, QuestionBankError> {
    Ok(scan_question_ids(&read(path)?))
}

/// Outcome of checking one file
#[derive(Debug)]
pub struct FileReport {
    pub file: String,
    /// Entry count for a top-level array, `None` for other valid JSON
    pub result: Result<Option<usize>, QuestionBankError>,
}

impl FileReport {
    pub fn is_valid(&self) -> bool {
        self.result.is_ok()
    }

    /// One summary line
    pub fn summary(&self) -> String {
        match &self.result {
            Ok(Some(n)) => format!("✓ {}: valid JSON ({} entries)", self.file, n),
            Ok(None) => format!("✓ {}: valid JSON", self.file),
            Err(e) => format!("✗ {}: {}", self.file, e),
        }
    }
}

/// Check that `text` is well-formed JSON
pub fn validate_json(file: &str, text: &str) -> FileReport {
    let result = match serde_json::from_str::<serde_json::Value>(text) {
        Ok(value) => Ok(value.as_array().map(Vec::len)),
        Err(e) => {
            log::error!("Failed to parse {}: {}", file, e);
            Err(QuestionBankError::Parse {
                file: file.to_string(),
                message: e.to_string(),
            })
        }
    };
    FileReport {
        file: file.to_string(),
        result,
    }
}

/// Check each file independently; a failure in one does not stop the rest
pub fn validate_files<P: AsRef<Path>>(paths: &[P]) -> Vec<FileReport> {
    paths
        .iter()
        .map(|path| {
            let path = path.as_ref();
            let file = file_name(path);
            match read(path) {
                Ok(text) => validate_json(&file, &text),
                Err(e) => {
                    log::error!("{}", e);
                    FileReport { file, result: Err(e) }
                }
            }
        })
        .collect()
}
