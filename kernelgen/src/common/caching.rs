use std::{fs, path::Path};

/// Hash of everything that shapes one generated artifact.
pub fn artifact_hash<'a>(
    parts: impl IntoIterator<Item = &'a [u8]>
) -> blake3::Hash {
    let mut hasher = blake3::Hasher::new();
    hasher.update(env!("CARGO_PKG_VERSION").as_bytes());
    for part in parts {
        hasher.update(&(part.len() as u64).to_le_bytes());
        hasher.update(part);
    }
    hasher.finalize()
}

pub fn hash_path(artifact: &Path) -> std::path::PathBuf {
    let mut name = artifact.as_os_str().to_os_string();
    name.push(".hash");
    name.into()
}

pub fn is_fresh(
    artifact: &Path,
    hash: &blake3::Hash,
) -> bool {
    artifact.exists()
        && fs::read_to_string(hash_path(artifact))
            .is_ok_and(|cached| cached == hash.to_string())
}
