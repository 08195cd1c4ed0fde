//! Разбор командной строки (без кавычек, подстановок и пайпов).
//!
//! Строка проходит три шага:
//! - [`tokenize`]: слова, маркер параллельного запуска `&` и маркер перенаправления `>`
//! - [`split_segments`]: разбиение на сегменты по `&`, пустые сегменты отбрасываются
//! - [`parse_command`]: выделение цели перенаправления из сегмента

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use super::types::CommandSpec;

/// Маркеры всегда отдельные токены, слово это максимальная серия прочих непробельных символов.
static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[&>]|[^ \t&>]+").expect("token regex is valid"));

/// Токен командной строки.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Token {
    /// Обычное слово.
    Word(String),
    /// `&`: разделитель команд, запускаемых параллельно.
    Parallel,
    /// `>`: перенаправление вывода.
    Redirect,
}

impl Token {
    /// Текст токена в том виде, в каком он встретился в строке.
    pub(crate) fn as_str(&self) -> &str {
        match self {
            Token::Word(w) => w,
            Token::Parallel => "&",
            Token::Redirect => ">",
        }
    }
}

/// Ошибка разбора сегмента.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ParseError {
    /// После `>` нет имени файла.
    MissingRedirectTarget,
    /// После `>` больше одного токена.
    AmbiguousRedirectTarget,
    /// Перед `>` нет команды.
    EmptyCommand,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::MissingRedirectTarget => write!(f, "missing redirection target"),
            ParseError::AmbiguousRedirectTarget => write!(f, "ambiguous redirection target"),
            ParseError::EmptyCommand => write!(f, "empty command"),
        }
    }
}

impl std::error::Error for ParseError {}

/// Превращает входную строку в список токенов.
///
/// Разделители: пробел и таб. Символы `&` и `>` всегда становятся отдельными
/// токенами, даже вплотную к словам (`cmd>file` -> `cmd`, `>`, `file`).
pub(crate) fn tokenize(line: &str) -> Vec<Token> {
    TOKEN_RE
        .find_iter(line)
        .map(|m| match m.as_str() {
            "&" => Token::Parallel,
            ">" => Token::Redirect,
            word => Token::Word(word.to_string()),
        })
        .collect()
}

/// Разбивает токены на сегменты по маркеру `&`.
///
/// Пустые промежутки (`& &`, ведущий или завершающий `&`) не дают сегментов.
pub(crate) fn split_segments(tokens: Vec<Token>) -> Vec<Vec<Token>> {
    let mut segments = Vec::new();
    let mut current = Vec::new();
    for token in tokens {
        if token == Token::Parallel {
            if !current.is_empty() {
                segments.push(std::mem::take(&mut current));
            }
        } else {
            current.push(token);
        }
    }
    if !current.is_empty() {
        segments.push(current);
    }
    segments
}

/// Разбирает один сегмент в [`CommandSpec`].
///
/// Учитывается только первый `>`: после него должен стоять ровно один токен,
/// он и есть имя файла (даже если это `>`).
pub(crate) fn parse_command(segment: Vec<Token>) -> Result<CommandSpec, ParseError> {
    let mut words = segment;
    let mut redirect = None;

    if let Some(idx) = words.iter().position(|t| *t == Token::Redirect) {
        let tail = words.split_off(idx);
        match tail.as_slice() {
            [_marker] => return Err(ParseError::MissingRedirectTarget),
            [_marker, target] => redirect = Some(target.as_str().to_string()),
            _ => return Err(ParseError::AmbiguousRedirectTarget),
        }
    }

    let mut words = words.into_iter().map(|t| match t {
        Token::Word(w) => w,
        other => other.as_str().to_string(),
    });
    let name = words.next().ok_or(ParseError::EmptyCommand)?;
    Ok(CommandSpec {
        name,
        args: words.collect(),
        redirect,
    })
}
