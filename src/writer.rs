/*!
 * Content-file generation for skukozh
 *
 * Reads the file list produced by `find` and emits one delimited block per
 * file. The block format is the interchange contract with `analyze`:
 *
 * ````text
 * #FILE <relative path>
 * #TYPE <extension without dot>
 * #START
 * ```<extension without dot>
 * <body>
 * ```
 * #END
 * ````
 */

use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use indicatif::ProgressBar;

use crate::error::{Result, SkukozhError};
use crate::utils::{extension_of, FILE_LIST_NAME};

/// Writer for the concatenated result artifact
pub struct ContentWriter {
    /// Directory the file-list paths are relative to
    base_dir: PathBuf,
    /// Path of the file-list artifact to read
    file_list: PathBuf,
    /// Progress bar
    pub progress: Arc<ProgressBar>,
}

impl ContentWriter {
    /// Create a new content writer reading the file list from the working
    /// directory
    pub fn new(base_dir: PathBuf, progress: Arc<ProgressBar>) -> Self {
        Self {
            base_dir,
            file_list: PathBuf::from(FILE_LIST_NAME),
            progress,
        }
    }

    /// Read the file list from a specific path instead of the working
    /// directory
    pub fn with_file_list(mut self, path: PathBuf) -> Self {
        self.file_list = path;
        self
    }

    /// Read the file list and build the result artifact text.
    ///
    /// Files that cannot be read are reported to stderr and skipped so one
    /// bad entry does not lose the rest of the snapshot.
    pub fn generate(&self) -> Result<String> {
        let list = fs::read_to_string(&self.file_list).map_err(|source| {
            SkukozhError::FileListRead {
                path: self.file_list.clone(),
                source,
            }
        })?;

        let entries: Vec<&str> = list.lines().filter(|line| !line.is_empty()).collect();
        self.progress.set_length(entries.len() as u64);

        let mut output = String::new();

        for file in entries {
            self.progress.inc(1);
            self.progress.set_message(file.to_string());

            let full_path = self.base_dir.join(file);
            let content = match fs::read_to_string(&full_path) {
                Ok(content) => content,
                Err(e) => {
                    eprintln!("Error reading file {}: {}", full_path.display(), e);
                    continue;
                }
            };

            // Blank lines carry no signal for an LLM context; drop them
            let body = content
                .lines()
                .filter(|line| !line.trim().is_empty())
                .collect::<Vec<_>>()
                .join("\n");

            let lang = extension_of(file);
            let lang = lang.trim_start_matches('.');

            let _ = writeln!(output, "#FILE {file}");
            let _ = writeln!(output, "#TYPE {lang}");
            let _ = writeln!(output, "#START");
            let _ = writeln!(output, "```{lang}");
            output.push_str(&body);
            if !body.ends_with('\n') {
                output.push('\n');
            }
            let _ = writeln!(output, "```");
            let _ = writeln!(output, "#END");
            output.push('\n');
        }

        Ok(output)
    }
}
