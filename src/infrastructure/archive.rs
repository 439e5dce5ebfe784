//! Zip archiving of generated artifacts
//!
//! Entries carry a fixed timestamp and mode, so the same artifacts always
//! produce the same archive bytes.

use std::io::{Cursor, Write};

use zip::{
    CompressionMethod, DateTime, ZipWriter, result::ZipError, write::SimpleFileOptions,
};

use crate::generation::{Archiver, Artifact, GenerationError};

/// Packs a single named entry into a zip archive
pub fn archive(source: &[u8], entry_name: &str) -> Result<Vec<u8>, GenerationError> {
    write_entries([(entry_name, source)])
}

fn write_entries<'a, I>(entries: I) -> Result<Vec<u8>, GenerationError>
where
    I: IntoIterator<Item = (&'a str, &'a [u8])>,
{
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(DateTime::default())
        .unix_permissions(0o644);

    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    for (name, content) in entries {
        writer.start_file(name, options)?;
        writer.write_all(content).map_err(ZipError::from)?;
    }

    Ok(writer.finish()?.into_inner())
}

/// [`Archiver`] producing zip containers
pub struct ZipArchiver;

impl ZipArchiver {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ZipArchiver {
    fn default() -> Self {
        Self::new()
    }
}

impl Archiver for ZipArchiver {
    fn archive(&self, artifacts: &[Artifact]) -> Result<Vec<u8>, GenerationError> {
        let names: Vec<String> = artifacts
            .iter()
            .map(|a| a.path.to_string_lossy().replace('\\', "/"))
            .collect();

        let bytes = write_entries(
            names
                .iter()
                .zip(artifacts)
                .map(|(name, artifact)| (name.as_str(), artifact.content.as_bytes())),
        )?;

        tracing::debug!(
            "Archived {} entries into {} bytes",
            artifacts.len(),
            bytes.len()
        );
        Ok(bytes)
    }
}
