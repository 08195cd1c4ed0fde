//! Исполнение команд и цикл REPL.

mod builtins;
mod executor;
mod parser;
mod path;
mod resolver;
mod types;

#[cfg(test)]
mod tests;

use std::io::BufRead;

use builtins::Builtin;
use executor::{Batch, StdProcessExecutor};
use parser::{parse_command, split_segments, tokenize};
use path::PathRegistry;
use types::{CommandSpec, IoStreams, ShellControl, ShellError, ShellResult};

pub(crate) use types::ERROR_MESSAGE;

/// Приглашение интерактивного режима.
pub(crate) const PROMPT: &str = "witsshell> ";

/// Состояние интерпретатора.
///
/// Список каталогов поиска меняется только builtin-командой `path`.
struct ShellState {
    paths: PathRegistry,
}

impl ShellState {
    fn new() -> Self {
        Self {
            paths: PathRegistry::new(),
        }
    }
}

/// Запускает REPL поверх заданных потоков ввода/вывода.
///
/// Если `prompt` задан, он печатается в `output` перед каждым чтением строки.
/// Возвращает код завершения процесса.
pub(crate) fn run_repl<R: BufRead, W1: std::io::Write, W2: std::io::Write>(
    mut input: R,
    mut output: W1,
    mut error: W2,
    prompt: Option<&str>,
) -> i32 {
    let mut state = ShellState::new();
    let executor = StdProcessExecutor::new();
    let mut io = IoStreams {
        stdout: &mut output,
        stderr: &mut error,
    };

    let mut buf = Vec::new();
    loop {
        if let Some(prompt) = prompt {
            let _ = write!(io.stdout, "{prompt}");
            let _ = io.stdout.flush();
        }

        buf.clear();
        match input.read_until(b'\n', &mut buf) {
            Ok(0) => return 0,
            Ok(_) => {}
            Err(e) => {
                types::report_error(io.stderr, &ShellError::Io(e));
                return 1;
            }
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
        }
        let line = String::from_utf8_lossy(&buf);

        if let ShellControl::Exit(code) = run_single_line(&executor, &mut state, &line, &mut io) {
            return code;
        }
    }
}

/// Обрабатывает одну строку ввода: tokenize → split → parse → execute → wait.
///
/// Ошибки отдельных сегментов печатаются сразу и не прерывают остальные сегменты.
/// Все запущенные процессы дожидаются до возврата, кроме случая `exit`.
fn run_single_line(
    executor: &StdProcessExecutor,
    state: &mut ShellState,
    line: &str,
    io: &mut IoStreams<'_>,
) -> ShellControl {
    let tokens = tokenize(line);
    if tokens.is_empty() {
        return ShellControl::Continue;
    }
    log::debug!("tokens: {tokens:?}");

    let mut batch = Batch::default();
    for segment in split_segments(tokens) {
        let command = match parse_command(segment) {
            Ok(command) => command,
            Err(e) => {
                types::report_error(io.stderr, &ShellError::Parse(e));
                continue;
            }
        };

        match run_command(executor, state, command, &mut batch) {
            Ok(ShellControl::Continue) => {}
            Ok(ShellControl::Exit(code)) => return ShellControl::Exit(code),
            Err(e) => types::report_error(io.stderr, &e),
        }
    }

    log::debug!("waiting for {} child process(es)", batch.len());
    batch.wait_all();
    ShellControl::Continue
}

/// Выполняет распарсенную команду.
///
/// Builtin исполняется сразу. Внешняя команда запускается и добавляется в `batch`.
fn run_command(
    executor: &StdProcessExecutor,
    state: &mut ShellState,
    command: CommandSpec,
    batch: &mut Batch,
) -> ShellResult<ShellControl> {
    if let Some(builtin) = Builtin::from_name(&command.name) {
        return builtins::run_builtin(builtin, &command.args, &mut state.paths);
    }

    let child = executor.spawn(&command, &state.paths)?;
    batch.push(child);
    Ok(ShellControl::Continue)
}
