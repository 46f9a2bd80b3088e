pub mod demo;

use crate::catalog::{Book, Catalog, SearchField};
use std::io;
use std::io::{BufRead, Write};
use tracing::{debug, info};

const MENU: &str = "\n---- Library Menu ----\n\
1. List books\n\
2. Search\n\
3. Borrow\n\
4. Return\n\
5. Add book\n\
6. Exit";

/// 메뉴에서 선택 가능한 작업
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Action {
    List,
    Search,
    Borrow,
    Return,
    Add,
    Exit,
}

impl Action {
    fn from_choice(s: &str) -> Option<Self> {
        match s {
            "1" => Some(Action::List),
            "2" => Some(Action::Search),
            "3" => Some(Action::Borrow),
            "4" => Some(Action::Return),
            "5" => Some(Action::Add),
            "6" => Some(Action::Exit),
            _ => None,
        }
    }
}

/// 입력을 한 줄씩 읽어 카탈로그 작업을 수행하는 대화형 메뉴
///
/// 입력과 출력은 [`BufRead`], [`Write`]로 추상화 되어 있어 표준 입출력 외에도 메모리 버퍼 등으로 구동 할 수 있다.
/// 카탈로그 에러는 출력 후 계속 진행하며 입출력 에러만 호출자에게 전파한다.
pub struct Menu<'a, R, W>
where
    R: BufRead,
    W: Write,
{
    catalog: &'a mut Catalog,
    input: R,
    output: W,
}

impl<'a, R, W> Menu<'a, R, W>
where
    R: BufRead,
    W: Write,
{
    pub fn new(catalog: &'a mut Catalog, input: R, output: W) -> Self {
        Self { catalog, input, output }
    }

    /// Exit을 선택하거나 입력이 끝날 때까지 메뉴를 반복한다.
    pub fn run(&mut self) -> io::Result<()> {
        info!("메뉴를 시작합니다. (BOOKS: {})", self.catalog.len());

        loop {
            writeln!(self.output, "{}", MENU)?;
            let Some(choice) = self.prompt("Pick (1-6): ")? else {
                break;
            };

            match Action::from_choice(&choice) {
                Some(Action::List) => self.list()?,
                Some(Action::Search) => self.search()?,
                Some(Action::Borrow) => self.borrow()?,
                Some(Action::Return) => self.return_book()?,
                Some(Action::Add) => self.add()?,
                Some(Action::Exit) => break,
                None => writeln!(self.output, "That doesn't look like a valid choice. Try 1 through 6.")?,
            }
        }

        writeln!(self.output, "Goodbye.")?;
        info!("메뉴를 종료합니다.");
        Ok(())
    }

    /// 프롬프트를 출력하고 한 줄을 읽는다. 입력이 끝났을 경우 [`None`]을 반환한다.
    fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            debug!("입력이 종료 되었습니다.");
            return Ok(None);
        }
        Ok(Some(line.trim().to_owned()))
    }

    fn list(&mut self) -> io::Result<()> {
        if self.catalog.is_empty() {
            return writeln!(self.output, "The catalog is empty.");
        }
        for book in self.catalog.books() {
            writeln!(self.output, "{}", book)?;
        }
        writeln!(
            self.output,
            "{} available, {} borrowed",
            self.catalog.available().len(),
            self.catalog.borrowed().len()
        )
    }

    fn search(&mut self) -> io::Result<()> {
        writeln!(self.output, "Search by: 1. Title  2. Author  3. Genre")?;
        let Some(choice) = self.prompt("Field (1-3): ")? else {
            return Ok(());
        };
        let field = match SearchField::try_from(choice.as_str()) {
            Ok(field) => field,
            Err(_) => return writeln!(self.output, "Invalid field choice."),
        };

        let Some(keyword) = self.prompt(&format!("Keyword for {}: ", field))? else {
            return Ok(());
        };

        let found = self.catalog.search(field, &keyword);
        if found.is_empty() {
            return writeln!(self.output, "No matching books.");
        }
        for book in found {
            writeln!(self.output, "{}", book)?;
        }
        Ok(())
    }

    fn borrow(&mut self) -> io::Result<()> {
        let Some(title) = self.prompt("Title to borrow: ")? else {
            return Ok(());
        };
        match self.catalog.borrow(&title) {
            Ok(outcome) => writeln!(self.output, "{}", outcome),
            Err(e) => writeln!(self.output, "Error: {}", e),
        }
    }

    fn return_book(&mut self) -> io::Result<()> {
        let Some(title) = self.prompt("Title to return: ")? else {
            return Ok(());
        };
        match self.catalog.return_book(&title) {
            Ok(outcome) => writeln!(self.output, "{}", outcome),
            Err(e) => writeln!(self.output, "Error: {}", e),
        }
    }

    /// 빈 값으로 입력된 항목은 빌더에 설정하지 않아 필수 값 누락 에러로 처리된다.
    fn add(&mut self) -> io::Result<()> {
        let mut builder = Book::builder();
        for label in ["Title: ", "Author: ", "Genre: "] {
            let Some(value) = self.prompt(label)? else {
                return Ok(());
            };
            if value.is_empty() {
                continue;
            }
            builder = match label {
                "Title: " => builder.title(value),
                "Author: " => builder.author(value),
                _ => builder.genre(value),
            };
        }

        let book = match builder.build() {
            Ok(book) => book,
            Err(e) => return writeln!(self.output, "Error: {}", e),
        };
        writeln!(self.output, "Added: {}", book)?;
        self.catalog.add(book);
        Ok(())
    }
}
