use anyhow::Result;
use sha1::{Digest, Sha1};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Computes the hex-encoded SHA-1 digest of raw bytes.
#[must_use]
pub fn hash_bytes(data: &[u8]) -> String {
    format!("{:x}", Sha1::digest(data))
}

/// Computes the hex-encoded SHA-1 digest of a file's contents.
///
/// Content is streamed through the hasher in 64 KiB chunks, so memory use is
/// bounded independent of file size.
///
/// # Errors
/// Returns an error if the file cannot be opened or read.
pub fn hash_file(path: &Path) -> Result<String> {
    let mut file = File::open(path)?;
    let mut hasher = Sha1::new();
    let mut buffer = vec![0u8; 65536];

    loop {
        let bytes_read = file.read(&mut buffer)?;
        if bytes_read == 0 {
            break;
        }
        hasher.update(&buffer[..bytes_read]);
    }

    Ok(format!("{:x}", hasher.finalize()))
}
