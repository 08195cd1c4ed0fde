//! Реализация встроенных команд.

use super::path::PathRegistry;
use super::types::{ShellControl, ShellError, ShellResult};

/// Перечисление встроенных команд.
///
/// Builtin-команды исполняются в самом процессе шелла и не порождают дочерних процессов.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Builtin {
    Exit,
    Cd,
    Path,
}

impl Builtin {
    pub(crate) fn from_name(name: &str) -> Option<Self> {
        match name {
            "exit" => Some(Builtin::Exit),
            "cd" => Some(Builtin::Cd),
            "path" => Some(Builtin::Path),
            _ => None,
        }
    }
}

/// Выполняет builtin-команду.
pub(crate) fn run_builtin(
    builtin: Builtin,
    args: &[String],
    paths: &mut PathRegistry,
) -> ShellResult<ShellControl> {
    match builtin {
        Builtin::Exit => run_exit(args),
        Builtin::Cd => run_cd(args),
        Builtin::Path => run_path(args, paths),
    }
}

fn run_exit(args: &[String]) -> ShellResult<ShellControl> {
    if !args.is_empty() {
        return Err(ShellError::Usage("exit"));
    }
    Ok(ShellControl::Exit(0))
}

fn run_cd(args: &[String]) -> ShellResult<ShellControl> {
    let [dir] = args else {
        return Err(ShellError::Usage("cd <dir>"));
    };
    std::env::set_current_dir(dir).map_err(ShellError::Io)?;
    log::info!("changed directory to {dir}");
    Ok(ShellControl::Continue)
}

fn run_path(args: &[String], paths: &mut PathRegistry) -> ShellResult<ShellControl> {
    paths.replace(args);
    log::info!("search path set to {:?}", paths.search_order());
    Ok(ShellControl::Continue)
}
