use std::fs;
use std::io::{BufReader, BufWriter, ErrorKind};
use std::path::Path;

use cookie_store::CookieStore;

use crate::app::error::{HeraldError, Result};

/// Load the cookie jar from disk.
///
/// A missing or unreadable file yields an empty jar; the run then simply
/// starts unauthenticated and logs in again.
pub fn load(path: &Path) -> CookieStore {
    let file = match fs::File::open(path) {
        Ok(file) => file,
        Err(e) => {
            if e.kind() == ErrorKind::NotFound {
                tracing::debug!("no cookie jar at {}", path.display());
            } else {
                tracing::warn!("could not open cookie jar at {}: {}", path.display(), e);
            }
            return CookieStore::default();
        }
    };

    match CookieStore::load_json(BufReader::new(file)) {
        Ok(store) => {
            tracing::debug!("cookie jar loaded from {}", path.display());
            store
        }
        Err(e) => {
            tracing::warn!(
                "cookie jar at {} is unreadable, starting fresh: {}",
                path.display(),
                e
            );
            CookieStore::default()
        }
    }
}

/// Persist the cookie jar, creating the parent directory if needed.
pub fn save(store: &CookieStore, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let file = fs::File::create(path)?;
    let mut writer = BufWriter::new(file);
    store
        .save_json(&mut writer)
        .map_err(|e| HeraldError::Cookie(format!("could not write {}: {}", path.display(), e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cookie_store::RawCookie;
    use url::Url;

    #[test]
    fn test_missing_file_gives_empty_jar() {
        let dir = tempfile::tempdir().unwrap();
        let store = load(&dir.path().join("nope.json"));
        assert_eq!(store.iter_any().count(), 0);
    }

    #[test]
    fn test_garbage_file_gives_empty_jar() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cookies.json");
        fs::write(&path, b"\x00\xffnot json at all").unwrap();

        let store = load(&path);
        assert_eq!(store.iter_any().count(), 0);
    }

    #[test]
    fn test_round_trip_persistent_cookie() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data").join("cookies.json");

        let mut store = CookieStore::default();
        let url = Url::parse("https://www.mangaupdates.com/").unwrap();
        let cookie =
            RawCookie::parse("sid=abc123; Domain=www.mangaupdates.com; Path=/; Max-Age=3600")
                .unwrap();
        store.insert_raw(&cookie, &url).unwrap();

        save(&store, &path).unwrap();

        let loaded = load(&path);
        let sid = loaded.get("www.mangaupdates.com", "/", "sid").unwrap();
        assert_eq!(sid.value(), "abc123");
    }

    #[test]
    fn test_save_overwrites_previous_jar() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cookies.json");
        fs::write(&path, "stale contents").unwrap();

        save(&CookieStore::default(), &path).unwrap();

        let loaded = load(&path);
        assert_eq!(loaded.iter_any().count(), 0);
    }
}
