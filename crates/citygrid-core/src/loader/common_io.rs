// crates/citygrid-core/src/loader/common_io.rs
use crate::error::{CityError, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

/// Opens a dataset file, buffers it, and wraps `.gz` files in a Gzip decoder.
#[cfg_attr(not(feature = "json"), allow(dead_code))]
pub fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        CityError::NotFound(format!("Dataset not found at {}: {}", path.display(), e))
    })?;

    let reader = BufReader::new(file);
    let gzipped = path.extension().is_some_and(|ext| ext == "gz");

    #[cfg(feature = "compact")]
    if gzipped {
        return Ok(Box::new(flate2::read::GzDecoder::new(reader)));
    }

    #[cfg(not(feature = "compact"))]
    if gzipped {
        return Err(CityError::NotFound(format!(
            "{} is gzip-compressed; enable the `compact` feature",
            path.display()
        )));
    }

    Ok(Box::new(reader))
}

/// `cities.json` -> `cities.json.<suffix>`, next to the source file.
pub fn get_cache_path(path: &Path, suffix: &str) -> PathBuf {
    let filename = path
        .file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!("{filename}.{suffix}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cache_path_sits_next_to_source() {
        let p = get_cache_path(Path::new("/data/worldcities.json.gz"), "bin");
        assert_eq!(p, PathBuf::from("/data/worldcities.json.gz.bin"));
    }

    #[cfg(feature = "compact")]
    #[test]
    fn reads_gzipped_files() {
        use flate2::{write::GzEncoder, Compression};
        use std::io::Write;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rows.json.gz");
        let mut enc = GzEncoder::new(File::create(&path).unwrap(), Compression::default());
        enc.write_all(b"[]").unwrap();
        enc.finish().unwrap();

        let mut out = String::new();
        open_stream(&path).unwrap().read_to_string(&mut out).unwrap();
        assert_eq!(out, "[]");
    }
}
