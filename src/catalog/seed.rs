use crate::catalog::Book;
use std::fmt::{Display, Formatter};
use std::fs;
use std::path::Path;
use tracing::info;

/// 초기 도서 데이터 로딩 중 발생한 에러 열거
#[derive(Debug)]
pub enum Error {
    /// 파일을 읽을 수 없음
    ReadFailed(String),

    /// 파일 내용을 도서 목록으로 변환할 수 없음
    ParseFailed(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::ReadFailed(s) => write!(f, "Failed to read seed file: {}", s),
            Error::ParseFailed(s) => write!(f, "Failed to parse seed file: {}", s),
        }
    }
}

impl std::error::Error for Error {}

/// 데모 실행 시 사용하는 기본 서가
pub fn demo_books() -> Vec<Book> {
    vec![
        Book::new("The Maze Runner", "James Dashner", "Classic"),
        Book::new("Pride and Prejudice", "Jane Auston", "Classic"),
        Book::new("The God of small things", "Arundati Roy", "Indian fiction"),
        Book::new("Data Science 101", "Jane Doe", "Education"),
    ]
}

/// JSON 배열 형태의 파일에서 도서 목록을 읽는다.
///
/// 각 요소는 `title`, `author`, `genre`를 필수로 가지며 `available`이 없을 경우 대출 가능한 상태로 읽힌다.
pub fn load_books<P: AsRef<Path>>(path: P) -> Result<Vec<Book>, Error> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .map_err(|e| Error::ReadFailed(format!("{} ({})", path.display(), e)))?;

    let books = parse_books(&content)
        .map_err(|e| Error::ParseFailed(format!("{} ({})", path.display(), e)))?;

    info!("{}권의 도서를 읽었습니다. (FILE: {})", books.len(), path.display());
    Ok(books)
}

fn parse_books(content: &str) -> Result<Vec<Book>, serde_json::Error> {
    serde_json::from_str(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn demo_books_has_two_classics() {
        let books = demo_books();

        assert_eq!(books.len(), 4);
        assert_eq!(books.iter().filter(|b| b.genre() == "Classic").count(), 2);
        assert!(books.iter().all(|b| b.is_available()));
    }

    #[test]
    fn available_defaults_to_true() {
        let books = parse_books(r#"[
            {"title": "Dune", "author": "Frank Herbert", "genre": "Science Fiction"},
            {"title": "Emma", "author": "Jane Austen", "genre": "Classic", "available": false}
        ]"#).unwrap();

        assert!(books[0].is_available());
        assert!(!books[1].is_available());
    }

    #[test]
    fn load_books_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"title": "Sapiens", "author": "Yuval Noah Harari", "genre": "History"}}]"#).unwrap();

        let books = load_books(file.path()).unwrap();
        assert_eq!(books, vec![Book::new("Sapiens", "Yuval Noah Harari", "History")]);
    }

    #[test]
    fn malformed_file_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"title": "Sapiens"}}]"#).unwrap();

        assert!(matches!(load_books(file.path()), Err(Error::ParseFailed(_))));
    }

    #[test]
    fn missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();

        assert!(matches!(load_books(dir.path().join("none.json")), Err(Error::ReadFailed(_))));
    }
}
