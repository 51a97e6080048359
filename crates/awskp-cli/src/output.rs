use std::{
    fs::File,
    io::{self, Write},
    path::Path,
};

use awskp_core::PrivateKey;
use color_eyre::{eyre::WrapErr, Result};
use tempfile::NamedTempFile;
use tracing::{debug, instrument};

/// Print the key followed by a newline.
pub fn write_stdout<W: Write>(out: &mut W, key: &PrivateKey) -> io::Result<()> {
    writeln!(out, "{}", key.expose())?;
    out.flush()
}

/// Write exactly the key (no trailing newline) to `path`, readable only by the owner.
///
/// The key lands in a temp file beside `path` and is renamed over it, so an
/// existing file is replaced along with its permissions.
#[instrument(skip(key))]
pub fn write_file(path: &Path, key: &PrivateKey) -> Result<()> {
    write_owner_only(path, key.expose().as_bytes())
        .wrap_err_with(|| format!("failed to write private key to {}", path.display()))?;
    debug!("private key written");
    Ok(())
}

fn write_owner_only(path: &Path, contents: &[u8]) -> io::Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(parent)?;
    restrict_to_owner(tmp.as_file())?;
    tmp.write_all(contents)?;
    tmp.flush()?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(unix)]
fn restrict_to_owner(file: &File) -> io::Result<()> {
    use std::{fs::Permissions, os::unix::fs::PermissionsExt};
    file.set_permissions(Permissions::from_mode(0o600))
}

#[cfg(not(unix))]
fn restrict_to_owner(_file: &File) -> io::Result<()> {
    Ok(())
}
