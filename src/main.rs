//! witsshell: минимальный командный шелл.
//!
//! Без аргументов читает команды из stdin с приглашением, с одним аргументом
//! исполняет скрипт из файла.

mod logging;
mod shell;

use std::fs::File;
use std::io::{BufReader, Write};
use std::path::PathBuf;

use clap::Parser;
use clap::error::ErrorKind;
use log::LevelFilter;

/// Минимальный шелл с параллельным запуском (`&`) и перенаправлением вывода (`>`).
#[derive(Debug, Parser)]
#[command(name = "witsshell", version)]
struct Cli {
    /// Файл со скриптом; без него команды читаются из stdin.
    script: Option<PathBuf>,

    /// Файл диагностического журнала.
    #[arg(long, value_name = "FILE", env = "WITSSHELL_LOG")]
    log_file: Option<PathBuf>,

    /// Уровень журнала: off, error, warn, info, debug, trace.
    #[arg(long, value_name = "LEVEL", default_value = "info")]
    log_level: LevelFilter,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(_) => fail(),
    };

    if let Some(path) = &cli.log_file {
        logging::init(path, cli.log_level);
    }

    let code = match &cli.script {
        Some(path) => {
            let Ok(file) = File::open(path) else {
                log::warn!("cannot open script {}", path.display());
                fail();
            };
            log::info!("running script {}", path.display());
            shell::run_repl(BufReader::new(file), std::io::stdout(), std::io::stderr(), None)
        }
        None => shell::run_repl(
            std::io::stdin().lock(),
            std::io::stdout(),
            std::io::stderr(),
            Some(shell::PROMPT),
        ),
    };

    std::process::exit(code);
}

/// Ошибка запуска: фиксированное сообщение и код 1.
fn fail() -> ! {
    let mut stderr = std::io::stderr();
    let _ = stderr.write_all(shell::ERROR_MESSAGE.as_bytes());
    let _ = stderr.flush();
    std::process::exit(1);
}
