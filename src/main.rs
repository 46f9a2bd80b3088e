use clap::Parser;
use library_catalog::console::demo::run_demo;
use library_catalog::console::Menu;
use library_catalog::{build_catalog, configs, Mode};
use std::io;
use tracing::error;

#[derive(Parser, Debug)]
#[command(version, about = "In-memory library catalog")]
struct Args {
    /// 실행 모드
    #[arg(value_enum, default_value_t = Mode::Menu)]
    mode: Mode,

    /// 초기 도서 목록 JSON 파일 (설정 파일의 catalog.seed_file 보다 우선한다)
    #[arg(short, long)]
    seed: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    configs::load_dotenv();
    let settings = configs::load_settings()?;
    let _guard = configs::set_global_logging_config(&settings)?;

    let seed_file = args.seed.as_deref().or(settings.catalog().seed_file());
    let mut catalog = build_catalog(seed_file)
        .inspect_err(|e| error!("{}", e))?;

    match args.mode {
        Mode::Menu => {
            let stdin = io::stdin();
            Menu::new(&mut catalog, stdin.lock(), io::stdout()).run()?;
        }
        Mode::Demo => run_demo(&mut catalog, &mut io::stdout())?,
    }

    Ok(())
}
