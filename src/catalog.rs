pub mod seed;

use serde::Deserialize;
use std::fmt;
use std::fmt::{Display, Formatter};
use tracing::{debug, warn};

/// Catalog 모듈에서 사용할 에러 열거
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// 요청한 제목의 도서가 카탈로그에 없음
    NotFound(String),

    /// 이미 대출 중인 도서에 대출을 요청함
    AlreadyBorrowed(String),

    /// 같은 제목의 도서가 이미 등록 되어 있음 ([`Catalog::add_unique`] 에서만 발생)
    DuplicateTitle(String),

    /// 알 수 없는 검색 필드
    UnknownField(String),

    /// 필수 데이터가 입력 되지 않음
    RequireArgumentMissing(String),
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::NotFound(title) => write!(f, "Book titled '{}' not found.", title),
            CatalogError::AlreadyBorrowed(title) => write!(f, "'{}' is already borrowed.", title),
            CatalogError::DuplicateTitle(title) => write!(f, "'{}' is already in the catalog.", title),
            CatalogError::UnknownField(field) => write!(f, "Unknown search field: {}", field),
            CatalogError::RequireArgumentMissing(name) => write!(f, "Missing required argument: {}", name),
        }
    }
}

impl std::error::Error for CatalogError {}

/// 도서 검색 대상 필드
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum SearchField {
    Title,
    Author,
    Genre,
}

impl TryFrom<&str> for SearchField {
    type Error = CatalogError;

    /// 필드 이름(`title`, `author`, `genre`) 혹은 메뉴 번호(`1`, `2`, `3`)를 검색 필드로 변환한다.
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_lowercase().as_str() {
            "1" | "title" => Ok(SearchField::Title),
            "2" | "author" => Ok(SearchField::Author),
            "3" | "genre" => Ok(SearchField::Genre),
            _ => Err(CatalogError::UnknownField(value.to_owned())),
        }
    }
}

impl Display for SearchField {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SearchField::Title => write!(f, "title"),
            SearchField::Author => write!(f, "author"),
            SearchField::Genre => write!(f, "genre"),
        }
    }
}

fn default_available() -> bool {
    true
}

/// 도서
///
/// 제목은 카탈로그의 검색 키로 사용되며 대소문자를 구분하지 않는다.
/// `available`은 도서가 대출 중이 아닐 때만 `true`이다.
#[derive(Debug, Clone, Eq, PartialEq, Deserialize)]
pub struct Book {
    title: String,
    author: String,
    genre: String,

    #[serde(default = "default_available")]
    available: bool,
}

impl Book {
    /// 대출 가능한 상태의 새 도서를 생성한다.
    pub fn new(title: &str, author: &str, genre: &str) -> Self {
        Self {
            title: title.to_owned(),
            author: author.to_owned(),
            genre: genre.to_owned(),
            available: true,
        }
    }

    pub fn builder() -> BookBuilder {
        BookBuilder::new()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn genre(&self) -> &str {
        &self.genre
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    /// 검색 필드에 해당하는 값을 반환한다.
    pub fn field(&self, field: SearchField) -> &str {
        match field {
            SearchField::Title => &self.title,
            SearchField::Author => &self.author,
            SearchField::Genre => &self.genre,
        }
    }

    fn has_title(&self, title: &str) -> bool {
        self.title.to_lowercase() == title.to_lowercase()
    }
}

impl Display for Book {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let status = if self.available { "Available" } else { "Borrowed" };
        write!(f, "{} by {} | {} | {}", self.title, self.author, self.genre, status)
    }
}

/// Book 빌더
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct BookBuilder {
    title: Option<String>,
    author: Option<String>,
    genre: Option<String>,
    available: Option<bool>,
}

impl BookBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: String) -> Self {
        self.title = Some(title);
        self
    }

    pub fn author(mut self, author: String) -> Self {
        self.author = Some(author);
        self
    }

    pub fn genre(mut self, genre: String) -> Self {
        self.genre = Some(genre);
        self
    }

    pub fn available(mut self, available: bool) -> Self {
        self.available = Some(available);
        self
    }

    pub fn build(self) -> Result<Book, CatalogError> {
        let title = self.title.ok_or(CatalogError::RequireArgumentMissing("title".to_owned()))?;
        let author = self.author.ok_or(CatalogError::RequireArgumentMissing("author".to_owned()))?;
        let genre = self.genre.ok_or(CatalogError::RequireArgumentMissing("genre".to_owned()))?;

        Ok(Book {
            title,
            author,
            genre,
            available: self.available.unwrap_or(true),
        })
    }
}

/// 대출/반납 요청의 처리 결과
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Outcome {
    /// 대출 완료
    Borrowed(String),

    /// 반납 완료
    Returned(String),

    /// 대출 중이 아닌 도서에 반납을 요청함. 에러가 아닌 안내용 결과이다.
    NotBorrowed(String),
}

impl Display for Outcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Borrowed(title) => write!(f, "You've successfully borrowed '{}'", title),
            Outcome::Returned(title) => write!(f, "'{}' has been returned.", title),
            Outcome::NotBorrowed(title) => write!(f, "'{}' was not borrowed.", title),
        }
    }
}

/// 도서 카탈로그
///
/// 등록 순서대로 도서를 보관하며 목록 출력 순서 또한 등록 순서를 따른다.
/// 제목의 중복은 허용 되며 제목으로 도서를 찾을 때는 가장 먼저 등록된 도서가 선택된다.
///
/// # Example
/// ```
/// use library_catalog::catalog::{Book, Catalog, CatalogError, Outcome};
///
/// let mut catalog = Catalog::new();
/// catalog.add(Book::new("Dune", "Frank Herbert", "Science Fiction"));
///
/// assert_eq!(catalog.borrow("dune"), Ok(Outcome::Borrowed("dune".to_owned())));
/// assert_eq!(catalog.borrow("Dune"), Err(CatalogError::AlreadyBorrowed("Dune".to_owned())));
/// ```
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Catalog {
    books: Vec<Book>,
}

impl Catalog {
    pub fn new() -> Self {
        Self { books: Vec::new() }
    }

    pub fn with_books(books: Vec<Book>) -> Self {
        Self { books }
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// 대출 가능한 도서 목록
    pub fn available(&self) -> Vec<&Book> {
        self.books.iter().filter(|book| book.available).collect()
    }

    /// 대출 중인 도서 목록
    pub fn borrowed(&self) -> Vec<&Book> {
        self.books.iter().filter(|book| !book.available).collect()
    }

    /// 도서를 카탈로그 마지막에 추가한다. 제목 중복 여부는 검사하지 않는다.
    pub fn add(&mut self, book: Book) {
        debug!("도서가 추가 되었습니다. (TITLE: {})", book.title);
        self.books.push(book);
    }

    /// 같은 제목(대소문자 무시)의 도서가 없을 때만 도서를 추가한다.
    pub fn add_unique(&mut self, book: Book) -> Result<(), CatalogError> {
        if self.find_by_title(&book.title).is_ok() {
            warn!("이미 등록된 제목입니다. (TITLE: {})", book.title);
            return Err(CatalogError::DuplicateTitle(book.title));
        }
        self.add(book);
        Ok(())
    }

    /// 지정한 필드에 키워드가 포함된 도서를 카탈로그 순서대로 찾는다. (대소문자 무시)
    pub fn search(&self, field: SearchField, keyword: &str) -> Vec<&Book> {
        let keyword = keyword.to_lowercase();
        self.books.iter()
            .filter(|book| book.field(field).to_lowercase().contains(&keyword))
            .collect()
    }

    /// 제목, 저자, 장르 중 하나라도 키워드를 포함하는 도서를 카탈로그 순서대로 찾는다.
    pub fn search_any(&self, keyword: &str) -> Vec<&Book> {
        let keyword = keyword.to_lowercase();
        self.books.iter()
            .filter(|book| {
                [SearchField::Title, SearchField::Author, SearchField::Genre].iter()
                    .any(|field| book.field(*field).to_lowercase().contains(&keyword))
            })
            .collect()
    }

    /// 제목이 일치하는(대소문자 무시) 첫 번째 도서를 찾는다.
    pub fn find_by_title(&self, title: &str) -> Result<&Book, CatalogError> {
        self.books.iter()
            .find(|book| book.has_title(title))
            .ok_or_else(|| CatalogError::NotFound(title.to_owned()))
    }

    fn find_by_title_mut(&mut self, title: &str) -> Result<&mut Book, CatalogError> {
        self.books.iter_mut()
            .find(|book| book.has_title(title))
            .ok_or_else(|| CatalogError::NotFound(title.to_owned()))
    }

    /// 도서를 대출한다.
    ///
    /// # Errors
    /// - [`CatalogError::NotFound`]: 제목이 일치하는 도서가 없을 경우
    /// - [`CatalogError::AlreadyBorrowed`]: 도서가 이미 대출 중일 경우
    pub fn borrow(&mut self, title: &str) -> Result<Outcome, CatalogError> {
        let book = self.find_by_title_mut(title)
            .inspect_err(|e| warn!("{}", e))?;

        if !book.available {
            warn!("이미 대출 중인 도서입니다. (TITLE: {})", book.title);
            return Err(CatalogError::AlreadyBorrowed(title.to_owned()));
        }

        book.available = false;
        debug!("도서가 대출 되었습니다. (TITLE: {})", book.title);
        Ok(Outcome::Borrowed(title.to_owned()))
    }

    /// 도서를 반납한다.
    /// 대출 중이 아닌 도서를 반납할 경우 에러 없이 [`Outcome::NotBorrowed`]를 반환하고 상태는 바뀌지 않는다.
    ///
    /// # Errors
    /// - [`CatalogError::NotFound`]: 제목이 일치하는 도서가 없을 경우
    pub fn return_book(&mut self, title: &str) -> Result<Outcome, CatalogError> {
        let book = self.find_by_title_mut(title)
            .inspect_err(|e| warn!("{}", e))?;

        if book.available {
            debug!("대출 중이 아닌 도서에 반납이 요청 되었습니다. (TITLE: {})", book.title);
            return Ok(Outcome::NotBorrowed(title.to_owned()));
        }

        book.available = true;
        debug!("도서가 반납 되었습니다. (TITLE: {})", book.title);
        Ok(Outcome::Returned(title.to_owned()))
    }
}

impl FromIterator<Book> for Catalog {
    fn from_iter<T: IntoIterator<Item = Book>>(iter: T) -> Self {
        Self::with_books(iter.into_iter().collect())
    }
}
