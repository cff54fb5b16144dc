//! Materialization of classified entries as `.strm` files.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, warn};
use walkdir::WalkDir;

use super::MediaKind;

/// Writes `.strm` files into the library directories and tracks which
/// paths belong to the current playlist, so everything else can be pruned.
pub struct LibraryWriter {
    movies_dir: PathBuf,
    tv_shows_dir: PathBuf,
    expected: HashSet<PathBuf>,
}

impl LibraryWriter {
    /// Create the library directories if needed.
    pub fn new(movies_dir: &Path, tv_shows_dir: &Path) -> Result<Self> {
        fs::create_dir_all(movies_dir)
            .with_context(|| format!("Failed to create movies directory: {:?}", movies_dir))?;
        fs::create_dir_all(tv_shows_dir)
            .with_context(|| format!("Failed to create TV shows directory: {:?}", tv_shows_dir))?;

        Ok(Self {
            movies_dir: movies_dir.to_path_buf(),
            tv_shows_dir: tv_shows_dir.to_path_buf(),
            expected: HashSet::new(),
        })
    }

    /// Write the `.strm` file for one entry unless it already exists.
    ///
    /// Returns `true` when a new file was created. The path is remembered
    /// as expected either way, which shields it from [`LibraryWriter::prune`].
    pub fn write(&mut self, kind: &MediaKind, stream_url: &str) -> Result<bool> {
        let dir = if kind.is_episode() {
            &self.tv_shows_dir
        } else {
            &self.movies_dir
        };
        let path = dir.join(kind.strm_file_name());
        self.expected.insert(path.clone());

        if path.exists() {
            return Ok(false);
        }

        fs::write(&path, stream_url)
            .with_context(|| format!("Failed to create .strm file: {:?}", path))?;
        debug!("Created {:?}", path);
        Ok(true)
    }

    /// Delete `.strm` files that no longer correspond to a playlist entry.
    ///
    /// Other file types are left alone. Returns the number of files removed.
    pub fn prune(&self) -> usize {
        let mut pruned = 0;

        for dir in [&self.movies_dir, &self.tv_shows_dir] {
            for entry in WalkDir::new(dir).into_iter().filter_map(|e| e.ok()) {
                let path = entry.path();
                if !entry.file_type().is_file() {
                    continue;
                }
                if path.extension().map_or(true, |ext| ext != "strm") {
                    continue;
                }
                if self.expected.contains(path) {
                    continue;
                }

                match fs::remove_file(path) {
                    Ok(()) => {
                        warn!("Pruned stale .strm file: {:?}", path);
                        pruned += 1;
                    }
                    Err(e) => warn!("Failed to prune {:?}: {}", path, e),
                }
            }
        }

        pruned
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::classify;

    fn dirs() -> (tempfile::TempDir, PathBuf, PathBuf) {
        let root = tempfile::tempdir().unwrap();
        let movies = root.path().join("movies");
        let tv = root.path().join("tv");
        (root, movies, tv)
    }

    #[test]
    fn creates_library_directories() {
        let (_root, movies, tv) = dirs();
        LibraryWriter::new(&movies, &tv).unwrap();
        assert!(movies.is_dir());
        assert!(tv.is_dir());
    }

    #[test]
    fn routes_entries_to_the_right_directory() {
        let (_root, movies, tv) = dirs();
        let mut writer = LibraryWriter::new(&movies, &tv).unwrap();

        let movie = classify("Inception (2010)");
        let episode = classify("Breaking Bad (2008) S01 E01");
        assert!(writer.write(&movie, "http://host/1001.mkv").unwrap());
        assert!(writer.write(&episode, "http://host/2001.mp4").unwrap());

        let movie_file = movies.join("Inception 2010.strm");
        let episode_file = tv.join("Breaking Bad 2008 S01E01.strm");
        assert_eq!(
            fs::read_to_string(movie_file).unwrap(),
            "http://host/1001.mkv"
        );
        assert_eq!(
            fs::read_to_string(episode_file).unwrap(),
            "http://host/2001.mp4"
        );
    }

    #[test]
    fn existing_files_are_not_rewritten() {
        let (_root, movies, tv) = dirs();
        let mut writer = LibraryWriter::new(&movies, &tv).unwrap();
        let movie = classify("Inception (2010)");

        assert!(writer.write(&movie, "http://host/old.mkv").unwrap());
        assert!(!writer.write(&movie, "http://host/new.mkv").unwrap());

        // The original URL stays, a changed stream does not dirty the file.
        let content = fs::read_to_string(movies.join("Inception 2010.strm")).unwrap();
        assert_eq!(content, "http://host/old.mkv");
    }

    #[test]
    fn prune_removes_only_stale_strm_files() {
        let (_root, movies, tv) = dirs();
        let mut writer = LibraryWriter::new(&movies, &tv).unwrap();

        writer
            .write(&classify("Inception (2010)"), "http://host/1.mkv")
            .unwrap();

        fs::write(movies.join("Gone Movie 1999.strm"), "http://host/2.mkv").unwrap();
        fs::write(movies.join("notes.txt"), "keep me").unwrap();
        fs::create_dir_all(tv.join("Old Show")).unwrap();
        fs::write(
            tv.join("Old Show/Old Show 2001 S01E01.strm"),
            "http://host/3.mp4",
        )
        .unwrap();

        assert_eq!(writer.prune(), 2);
        assert!(movies.join("Inception 2010.strm").exists());
        assert!(movies.join("notes.txt").exists());
        assert!(!movies.join("Gone Movie 1999.strm").exists());
        assert!(!tv.join("Old Show/Old Show 2001 S01E01.strm").exists());
    }

    #[test]
    fn files_written_this_run_survive_prune() {
        let (_root, movies, tv) = dirs();
        let mut writer = LibraryWriter::new(&movies, &tv).unwrap();

        for name in ["A (2001)", "B (2002)", "C S01 E01"] {
            writer.write(&classify(name), "http://host/x.mkv").unwrap();
        }

        assert_eq!(writer.prune(), 0);
        assert!(movies.join("A 2001.strm").exists());
        assert!(movies.join("B 2002.strm").exists());
        assert!(tv.join("C Unknown S01E01.strm").exists());
    }
}
