//! pattern file loading.
//!
//! ```text
//! # comment
//! R C                 one live cell
//! R1 C1; R2 C2        several cells on one line
//! [other.txt]         include another file at the current offset
//! R C [other.txt]     include another file shifted by (R, C)
//! ```
//!
//! a bad file or segment is logged and skipped. inclusion cycles are not
//! detected and recurse forever.

use std::{
    collections::HashMap,
    fs,
    num::ParseIntError,
    path::{Path, PathBuf},
};

use thiserror::Error;
use tracing::{debug, warn};

use crate::{pos, Cell, Pos, World};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("could not read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid coordinate segment in {}: {segment}", path.display())]
    MalformedSegment { path: PathBuf, segment: String },

    #[error("invalid coordinates in {}: {segment}", path.display())]
    InvalidInteger {
        path: PathBuf,
        segment: String,
        #[source]
        source: ParseIntError,
    },

    #[error("coordinates out of range in {}: {segment}", path.display())]
    OutOfRange { path: PathBuf, segment: String },
}

/// reads the full text of a pattern file by path.
pub trait Source {
    fn read(&self, path: &Path) -> Result<String, LoadError>;
}

/// reads pattern files from disk, paths are taken as written.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsSource;

impl Source for FsSource {
    fn read(&self, path: &Path) -> Result<String, LoadError> {
        if !path.is_file() {
            return Err(LoadError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl<S> Source for HashMap<PathBuf, String, S>
where
    S: std::hash::BuildHasher,
{
    fn read(&self, path: &Path) -> Result<String, LoadError> {
        self.get(path).cloned().ok_or_else(|| LoadError::FileNotFound {
            path: path.to_path_buf(),
        })
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Segment {
    Cell(Pos),
    Include { offset: Pos, path: PathBuf },
}

/// strips surrounding brackets, `[a.txt]` gives `a.txt`.
fn bracketed(token: &str) -> Option<&str> {
    token.strip_prefix('[')?.strip_suffix(']')
}

fn parse_segment(path: &Path, segment: &str) -> Result<Segment, LoadError> {
    let tokens: Vec<&str> = segment.split_whitespace().collect();
    let malformed = || LoadError::MalformedSegment {
        path: path.to_path_buf(),
        segment: segment.to_string(),
    };
    if tokens.len() < 2 {
        return Err(malformed());
    }

    let parse = |token: &str| {
        token
            .parse::<i64>()
            .map_err(|source| LoadError::InvalidInteger {
                path: path.to_path_buf(),
                segment: segment.to_string(),
                source,
            })
    };
    let pos = pos!(parse(tokens[0])?, parse(tokens[1])?);

    match &tokens[2..] {
        [] => Ok(Segment::Cell(pos)),
        [include] => match bracketed(include) {
            Some(sub_path) => Ok(Segment::Include {
                offset: pos,
                path: PathBuf::from(sub_path),
            }),
            None => Err(malformed()),
        },
        _ => Err(malformed()),
    }
}

/// builds worlds out of pattern files provided by a [`Source`].
#[derive(Debug, Clone, Default)]
pub struct Loader<S>
where
    S: Source,
{
    source: S,
}

impl<S> Loader<S>
where
    S: Source,
{
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// loads `path` and its inclusions, every cell shifted by `offset`.
    pub fn load<W>(&self, path: impl AsRef<Path>, offset: Pos) -> W
    where
        W: World,
    {
        let mut world = W::default();
        self.load_into(path.as_ref(), offset, &mut world);
        world
    }

    /// loads every path at the origin and merges the results.
    pub fn load_all<W, P>(&self, paths: impl IntoIterator<Item = P>) -> W
    where
        W: World,
        P: AsRef<Path>,
    {
        let mut world = W::default();
        for path in paths {
            self.load_into(path.as_ref(), Pos::ORIGIN, &mut world);
        }
        world
    }

    fn load_into<W>(&self, path: &Path, offset: Pos, world: &mut W)
    where
        W: World,
    {
        let content = match self.source.read(path) {
            Ok(content) => content,
            Err(err) => {
                warn!(path = %path.display(), "{err}");
                return;
            }
        };

        let before = world.len();
        for line in content.lines().map(str::trim) {
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some(sub_path) = bracketed(line) {
                self.load_into(Path::new(sub_path), offset, world);
                continue;
            }

            for segment in line.split(';').map(str::trim) {
                if segment.is_empty() {
                    continue;
                }
                let out_of_range = || LoadError::OutOfRange {
                    path: path.to_path_buf(),
                    segment: segment.to_string(),
                };
                let applied = parse_segment(path, segment).and_then(|parsed| match parsed {
                    Segment::Cell(pos) => {
                        let pos = pos.checked_add(offset).ok_or_else(out_of_range)?;
                        world.set(pos, Cell::Alive);
                        Ok(())
                    }
                    Segment::Include {
                        offset: inner,
                        path: sub_path,
                    } => {
                        let offset = offset.checked_add(inner).ok_or_else(out_of_range)?;
                        self.load_into(&sub_path, offset, world);
                        Ok(())
                    }
                });
                if let Err(err) = applied {
                    warn!(path = %path.display(), segment, "{err}");
                }
            }
        }
        debug!(
            path = %path.display(),
            cells = world.len() - before,
            "pattern loaded"
        );
    }
}
