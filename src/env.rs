use std::path::PathBuf;

/// Loads `.env` from the current directory or its parents.
///
/// A missing file is fine; any other failure (a malformed line, an unreadable
/// file) is handed back so the caller can report it.
pub fn load_dotenv() -> Option<dotenvy::Error> {
    skip_missing(dotenvy::dotenv())
}

fn skip_missing(result: Result<PathBuf, dotenvy::Error>) -> Option<dotenvy::Error> {
    match result {
        Err(e) if !e.not_found() => Some(e),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    #[test]
    fn missing_file_is_skipped() {
        let missing = dotenvy::Error::Io(io::Error::from(io::ErrorKind::NotFound));
        assert!(skip_missing(Err(missing)).is_none());

        assert!(skip_missing(Ok(PathBuf::from(".env"))).is_none());
    }

    #[test]
    fn malformed_file_is_reported() {
        let malformed = dotenvy::Error::LineParse("KEY VALUE".into(), 4);
        assert!(matches!(skip_missing(Err(malformed)), Some(dotenvy::Error::LineParse(_, 4))));

        let denied = dotenvy::Error::Io(io::Error::from(io::ErrorKind::PermissionDenied));
        assert!(skip_missing(Err(denied)).is_some());
    }
}
