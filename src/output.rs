//! Wordlist export
//!
//! Serializes term sets as sorted, newline-joined text and writes each list
//! to its own file. Every file is written to a temporary sibling first and
//! renamed into place, so a reader never sees a half-written list.

use std::fmt;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::classify::Classified;
use crate::error::{Result, WordlistError};
use crate::tokenize::TermSet;

/// Buffer size for wordlist writes
const BUFFER_SIZE: usize = 64 * 1024;

/// Exported wordlist kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Artifact {
    /// Every retained term
    Terms,
    /// Terms containing lowercase letters
    Vars,
    /// Terms without lowercase letters
    Const,
}

impl Artifact {
    /// Export order
    pub const ALL: [Artifact; 3] = [Artifact::Terms, Artifact::Vars, Artifact::Const];

    pub fn default_file_name(self) -> &'static str {
        match self {
            Artifact::Terms => "terms.txt",
            Artifact::Vars => "vars.txt",
            Artifact::Const => "const.txt",
        }
    }
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Artifact::Terms => write!(f, "terms"),
            Artifact::Vars => write!(f, "vars"),
            Artifact::Const => write!(f, "const"),
        }
    }
}

/// File names for the three wordlists
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputNames {
    pub terms: String,
    pub vars: String,
    pub consts: String,
}

impl Default for OutputNames {
    fn default() -> Self {
        Self {
            terms: Artifact::Terms.default_file_name().to_string(),
            vars: Artifact::Vars.default_file_name().to_string(),
            consts: Artifact::Const.default_file_name().to_string(),
        }
    }
}

impl OutputNames {
    pub fn get(&self, artifact: Artifact) -> &str {
        match artifact {
            Artifact::Terms => &self.terms,
            Artifact::Vars => &self.vars,
            Artifact::Const => &self.consts,
        }
    }
}

/// The three term collections to export
#[derive(Debug, Clone, Copy)]
pub struct Wordlists<'a> {
    pub terms: &'a TermSet,
    pub classified: &'a Classified,
}

impl<'a> Wordlists<'a> {
    pub fn new(terms: &'a TermSet, classified: &'a Classified) -> Self {
        Self { terms, classified }
    }

    pub fn get(&self, artifact: Artifact) -> &'a TermSet {
        match artifact {
            Artifact::Terms => self.terms,
            Artifact::Vars => &self.classified.variable,
            Artifact::Const => &self.classified.constant,
        }
    }
}

/// Sort and dedup terms in ascending code-point order
pub fn sorted_unique<'a, I>(terms: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut terms: Vec<&str> = terms.into_iter().collect();
    terms.sort_unstable();
    terms.dedup();
    terms
}

/// Render terms as a newline-joined list with no trailing newline
pub fn render<'a, I>(terms: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    sorted_unique(terms).join("\n")
}

/// Wordlist file writer.
///
/// Terms go to a temporary file next to the target; [`OutputWriter::commit`]
/// renames it into place. Dropping the writer without committing discards
/// the temporary file and leaves the target untouched.
pub struct OutputWriter {
    writer: BufWriter<NamedTempFile>,
    path: PathBuf,
    lines_written: u64,
    bytes_written: u64,
}

impl OutputWriter {
    /// Create a new output writer targeting `path`
    pub fn new(path: PathBuf) -> Result<Self> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        let file =
            NamedTempFile::new_in(&dir).map_err(|e| WordlistError::write_failure(&path, e))?;

        Ok(Self {
            writer: BufWriter::with_capacity(BUFFER_SIZE, file),
            path,
            lines_written: 0,
            bytes_written: 0,
        })
    }

    /// Append a term, separated from the previous one by a newline
    pub fn write_term(&mut self, term: &str) -> Result<()> {
        let result = if self.lines_written > 0 {
            self.writer
                .write_all(b"\n")
                .and_then(|_| self.writer.write_all(term.as_bytes()))
        } else {
            self.writer.write_all(term.as_bytes())
        };
        result.map_err(|e| WordlistError::write_failure(&self.path, e))?;

        if self.lines_written > 0 {
            self.bytes_written += 1;
        }
        self.lines_written += 1;
        self.bytes_written += term.len() as u64;
        Ok(())
    }

    /// Flush, sync and rename the file into place
    pub fn commit(self) -> Result<Exported> {
        let Self {
            writer,
            path,
            lines_written,
            bytes_written,
        } = self;

        let file = writer
            .into_inner()
            .map_err(|e| WordlistError::write_failure(&path, e.into_error()))?;

        file.as_file()
            .sync_all()
            .map_err(|e| WordlistError::write_failure(&path, e))?;

        // Temporary files are created owner-only
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            file.as_file()
                .set_permissions(fs::Permissions::from_mode(0o644))
                .map_err(|e| WordlistError::write_failure(&path, e))?;
        }

        file.persist(&path)
            .map_err(|e| WordlistError::write_failure(&path, e.error))?;

        Ok(Exported {
            path,
            terms: lines_written,
            bytes: bytes_written,
        })
    }
}

/// A wordlist that has been written to disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exported {
    pub path: PathBuf,
    pub terms: u64,
    pub bytes: u64,
}

/// Write one sorted wordlist to `path`
pub fn write_wordlist(path: &Path, terms: &TermSet) -> Result<Exported> {
    let mut writer = OutputWriter::new(path.to_path_buf())?;

    for term in sorted_unique(terms.iter()) {
        writer.write_term(term)?;
    }

    writer.commit()
}

/// Write all three wordlists into `output_dir`.
///
/// Stops at the first failure; lists already written stay on disk.
pub fn export(
    output_dir: &Path,
    names: &OutputNames,
    lists: &Wordlists<'_>,
) -> Result<Vec<(Artifact, Exported)>> {
    ensure_output_dir(output_dir)?;

    let mut exported = Vec::with_capacity(Artifact::ALL.len());
    for artifact in Artifact::ALL {
        let path = output_dir.join(names.get(artifact));
        let written = write_wordlist(&path, lists.get(artifact))?;
        log::debug!("Wrote {} {} terms to {:?}", written.terms, artifact, written.path);
        exported.push((artifact, written));
    }

    Ok(exported)
}

/// Ensure output directory exists
pub fn ensure_output_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path).map_err(|e| WordlistError::write_failure(path, e))?;
    }
    Ok(())
}
