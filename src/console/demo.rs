use crate::catalog::Catalog;
use std::io;
use std::io::Write;

/// 카탈로그 기본 기능을 차례대로 시연한다.
///
/// 키워드 검색, 같은 도서의 연속 대출, 반납, 없는 도서의 대출을 순서대로 실행하고 결과를 출력한다.
/// 대출/반납 에러는 `Error: ` 접두어와 함께 출력 된다.
pub fn run_demo<W: Write>(catalog: &mut Catalog, out: &mut W) -> io::Result<()> {
    writeln!(out, "\nSearch for 'classic':")?;
    for book in catalog.search_any("classic") {
        writeln!(out, "{}", book)?;
    }

    let title = "Pride and Prejudice";

    writeln!(out, "\nBorrowing '{}':", title)?;
    print_result(out, catalog.borrow(title))?;

    writeln!(out, "\nBorrowing '{}' again:", title)?;
    print_result(out, catalog.borrow(title))?;

    writeln!(out, "\nReturning '{}':", title)?;
    print_result(out, catalog.return_book(title))?;

    let missing = "Nonexistent Book";
    writeln!(out, "\nBorrowing '{}':", missing)?;
    print_result(out, catalog.borrow(missing))
}

fn print_result<W, T, E>(out: &mut W, result: Result<T, E>) -> io::Result<()>
where
    W: Write,
    T: std::fmt::Display,
    E: std::fmt::Display,
{
    match result {
        Ok(message) => writeln!(out, "{}", message),
        Err(e) => writeln!(out, "Error: {}", e),
    }
}
