use std::path::{Path, PathBuf};
use std::{env, fs, io};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Result;

/// Reads a JSON file and deserializes it.
///
/// - Reads the entire file into memory
/// - Fails on I/O errors and on malformed JSON
pub(crate) fn read_json<T: DeserializeOwned, P: AsRef<Path>>(filename: P) -> Result<T> {
	let contents = fs::read_to_string(filename)?;
	Ok(serde_json::from_str(&contents)?)
}

/// Serializes `value` as pretty JSON and writes it to `filename`.
///
/// The data is first written next to the target then renamed over it,
/// so a crash never leaves a truncated file behind.
pub(crate) fn write_json<T: Serialize, P: AsRef<Path>>(filename: P, value: &T) -> Result<()> {
	let filename = filename.as_ref();
	let mut temporary = filename.as_os_str().to_owned();
	temporary.push(".tmp");
	let temporary = PathBuf::from(temporary);

	fs::write(&temporary, serde_json::to_vec_pretty(value)?)?;
	fs::rename(&temporary, filename)?;
	Ok(())
}

/// Extracts the base filename without extension.
///
/// Examples:
/// - `"./data/fr/latin.json"` → `"latin"`
/// - `"latin.json"` → `"latin"`
pub(crate) fn get_filename<P: AsRef<Path>>(input_path: P) -> io::Result<String> {
	let stem = input_path
		.as_ref()
		.file_stem()
		.ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "Path has no filename"))?;

	Ok(stem.to_string_lossy().to_string())
}

/// Normalize a folder path.
///
/// - `"."` or `"./"` resolves to the current working directory
/// - Other paths are returned as-is (not canonicalized)
pub(crate) fn normalize_folder(input: &Path) -> PathBuf {
	if input == Path::new(".") || input == Path::new("./") {
		env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
	} else {
		input.to_path_buf()
	}
}

/// Lists all files with a given extension in a directory.
///
/// Returns full paths, sorted so loading order does not depend on the
/// file system.
pub(crate) fn list_files<P: AsRef<Path>>(dir: P, extension: &str) -> io::Result<Vec<PathBuf>> {
	let mut files = Vec::new();

	for entry in fs::read_dir(dir)? {
		let path = entry?.path();
		if path.is_file() && path.extension() == Some(std::ffi::OsStr::new(extension)) {
			files.push(path);
		}
	}

	files.sort();
	Ok(files)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn filename_without_extension() {
		assert_eq!(get_filename("./data/fr/latin.json").unwrap(), "latin");
		assert_eq!(get_filename("latin.json").unwrap(), "latin");
	}

	#[test]
	fn lists_only_matching_files() {
		let dir = tempfile::tempdir().unwrap();
		fs::write(dir.path().join("b.json"), "[]").unwrap();
		fs::write(dir.path().join("a.json"), "[]").unwrap();
		fs::write(dir.path().join("notes.txt"), "").unwrap();
		fs::create_dir(dir.path().join("sub.json")).unwrap();

		let files = list_files(dir.path(), "json").unwrap();
		let names: Vec<String> = files.iter().map(|f| get_filename(f).unwrap()).collect();
		assert_eq!(names, vec!["a", "b"]);
	}

	#[test]
	fn json_round_trip_through_disk() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("store.json");
		write_json(&path, &vec!["lorem", "ipsum"]).unwrap();
		let words: Vec<String> = read_json(&path).unwrap();
		assert_eq!(words, vec!["lorem", "ipsum"]);
		assert!(!dir.path().join("store.json.tmp").exists());
	}
}
