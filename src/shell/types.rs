//! Общие типы для исполнения команд.

use std::fmt;

use super::parser::ParseError;

/// Единственное сообщение об ошибке, которое видит пользователь.
pub(crate) const ERROR_MESSAGE: &str = "An error has occurred\n";

/// Спецификация команды после разбора сегмента.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CommandSpec {
    /// Имя команды (builtin или внешняя).
    pub(crate) name: String,
    /// Аргументы команды (без имени).
    pub(crate) args: Vec<String>,
    /// Файл, в который перенаправляются stdout и stderr.
    pub(crate) redirect: Option<String>,
}

/// Потоки вывода интерпретатора.
pub(crate) struct IoStreams<'a> {
    /// Поток stdout интерпретатора.
    pub(crate) stdout: &'a mut dyn std::io::Write,
    /// Поток stderr интерпретатора.
    pub(crate) stderr: &'a mut dyn std::io::Write,
}

/// Управляющий результат исполнения команды.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ShellControl {
    /// Продолжить работу REPL.
    Continue,
    /// Завершить процесс шелла с указанным кодом.
    Exit(i32),
}

/// Ошибки интерпретатора.
///
/// Причина попадает только в журнал: пользователь всегда видит [`ERROR_MESSAGE`].
#[derive(Debug)]
pub(crate) enum ShellError {
    /// Ошибка разбора сегмента.
    Parse(ParseError),
    /// Неверное число аргументов builtin-команды.
    Usage(&'static str),
    /// Команда не найдена ни по указанному пути, ни в списке каталогов.
    NotFound(String),
    /// Ошибка ввода/вывода.
    Io(std::io::Error),
    /// Ошибка запуска внешнего процесса.
    Process(String),
    /// Ошибка уже записана в файл перенаправления команды.
    Redirected(Box<ShellError>),
}

impl fmt::Display for ShellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShellError::Parse(e) => write!(f, "Parse error: {e}"),
            ShellError::Usage(usage) => write!(f, "Usage: {usage}"),
            ShellError::NotFound(name) => write!(f, "command not found: {name}"),
            ShellError::Io(e) => write!(f, "I/O error: {e}"),
            ShellError::Process(msg) => write!(f, "Process error: {msg}"),
            ShellError::Redirected(e) => write!(f, "{e} (reported into redirect target)"),
        }
    }
}

impl std::error::Error for ShellError {}

/// Удобный alias для результатов функций шелла.
pub(crate) type ShellResult<T> = Result<T, ShellError>;

/// Сообщает об ошибке: причина уходит в журнал, в stderr пишется фиксированный текст.
///
/// Для [`ShellError::Redirected`] текст уже записан в файл команды, stderr не трогается.
pub(crate) fn report_error(stderr: &mut dyn std::io::Write, err: &ShellError) {
    log::warn!("{err}");
    if matches!(err, ShellError::Redirected(_)) {
        return;
    }
    let _ = stderr.write_all(ERROR_MESSAGE.as_bytes());
    let _ = stderr.flush();
}
