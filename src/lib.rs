use crate::catalog::{seed, Catalog};
use tracing::info;

pub mod catalog;
pub mod configs;
pub mod console;

/// 실행할 카탈로그 작업
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default, clap::ValueEnum)]
pub enum Mode {
    /// 표준 입력을 읽는 대화형 메뉴
    #[default]
    Menu,

    /// 검색, 대출, 반납을 차례대로 시연
    Demo,
}

/// 초기 도서 목록으로 카탈로그를 생성한다.
/// 파일 경로가 주어지지 않으면 데모 서가를 사용한다.
pub fn build_catalog(seed_file: Option<&str>) -> Result<Catalog, seed::Error> {
    let books = match seed_file {
        Some(path) => seed::load_books(path)?,
        None => {
            info!("초기 도서 파일이 설정 되지 않아 데모 서가를 사용합니다.");
            seed::demo_books()
        }
    };

    Ok(Catalog::with_books(books))
}
