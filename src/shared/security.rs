use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Validates that a path exists and is a regular file (not a directory or symlink)
///
/// # Security
/// Uses `symlink_metadata()` so the link itself is inspected, not its target.
///
/// # Arguments
/// * `path` - The path to validate
/// * `file_description` - Description of the file (e.g., "OVA file", "config file")
///
/// # Errors
/// Returns an error if:
/// - The path doesn't exist
/// - The path is a symbolic link
/// - The path is not a regular file
pub fn validate_regular_file(path: &Path, file_description: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| {
        anyhow::anyhow!(
            "Failed to read {} metadata for {}: {}",
            file_description,
            path.display(),
            e
        )
    })?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, symbolic links are not allowed.",
            path.display()
        );
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    Ok(())
}

/// Rejects values that would change the shape of a URL path when interpolated
///
/// Slugs and object names end up as path segments, so separators, `..` and
/// query/fragment markers are refused.
pub fn validate_path_segment(value: &str, description: &str) -> Result<()> {
    if value.is_empty() {
        anyhow::bail!("{} must not be empty", description);
    }

    if value.contains('/') || value.contains('\\') {
        anyhow::bail!(
            "Security: {} contains path separators which are not allowed",
            description
        );
    }

    if value.contains("..") {
        anyhow::bail!("Security: {} contains '..' which is not allowed", description);
    }

    if value.contains('#') || value.contains('?') {
        anyhow::bail!("Security: {} contains URL-unsafe characters", description);
    }

    Ok(())
}
