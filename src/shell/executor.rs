//! Запуск внешних команд.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::os::unix::process::CommandExt;
use std::process::{Child, Command, Stdio};

use super::path::PathRegistry;
use super::resolver;
use super::types::{CommandSpec, ERROR_MESSAGE, ShellError, ShellResult};

/// Исполнитель внешних процессов через `std::process::Command`.
pub(crate) struct StdProcessExecutor;

impl StdProcessExecutor {
    /// Создает новый исполнитель внешних команд.
    pub(crate) fn new() -> Self {
        Self
    }

    /// Запускает внешнюю команду, не дожидаясь ее завершения.
    ///
    /// Файл перенаправления открывается до поиска команды: если команда не найдена,
    /// файл остается созданным и обрезанным. Ошибки поиска и запуска после успешного
    /// перенаправления пишутся в сам файл и возвращаются как [`ShellError::Redirected`].
    pub(crate) fn spawn(&self, command: &CommandSpec, paths: &PathRegistry) -> ShellResult<Child> {
        let mut redirect = match &command.redirect {
            Some(target) => Some(open_redirect_target(target)?),
            None => None,
        };

        match self.launch(command, paths, redirect.as_ref()) {
            Ok(child) => Ok(child),
            Err(e) => match redirect.as_mut() {
                Some(file) => {
                    let _ = file.write_all(ERROR_MESSAGE.as_bytes());
                    Err(ShellError::Redirected(Box::new(e)))
                }
                None => Err(e),
            },
        }
    }

    fn launch(
        &self,
        command: &CommandSpec,
        paths: &PathRegistry,
        redirect: Option<&File>,
    ) -> ShellResult<Child> {
        let program = resolver::resolve(&command.name, paths)
            .ok_or_else(|| ShellError::NotFound(command.name.clone()))?;

        let mut cmd = Command::new(&program);
        // argv[0] остается таким, как его набрал пользователь.
        cmd.arg0(&command.name);
        cmd.args(&command.args);
        cmd.stdin(Stdio::inherit());
        if let Some(file) = redirect {
            cmd.stdout(file.try_clone().map_err(ShellError::Io)?);
            cmd.stderr(file.try_clone().map_err(ShellError::Io)?);
        }

        let child = cmd.spawn().map_err(|e| {
            ShellError::Process(format!("failed to spawn {}: {e}", program.display()))
        })?;

        log::info!("spawned {} (pid {})", program.display(), child.id());
        Ok(child)
    }
}

/// Открывает (создает или обрезает) файл перенаправления.
fn open_redirect_target(target: &str) -> ShellResult<File> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(target)
        .map_err(ShellError::Io)
}

/// Дочерние процессы, запущенные из одной строки.
#[derive(Default)]
pub(crate) struct Batch {
    children: Vec<Child>,
}

impl Batch {
    pub(crate) fn push(&mut self, child: Child) {
        self.children.push(child);
    }

    pub(crate) fn len(&self) -> usize {
        self.children.len()
    }

    /// Дожидается всех процессов в порядке запуска.
    pub(crate) fn wait_all(self) {
        for mut child in self.children {
            let pid = child.id();
            match child.wait() {
                Ok(status) => log::debug!("pid {pid} exited: {status}"),
                Err(e) => log::warn!("failed to wait for pid {pid}: {e}"),
            }
        }
    }
}
