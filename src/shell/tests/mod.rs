//! Тесты модуля `shell`.
//!
//! Здесь лежат unit-тесты отдельных компонентов и тесты REPL.


use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Тесты, меняющие рабочий каталог процесса, выполняются по одному.
pub(super) static CWD_LOCK: Mutex<()> = Mutex::new(());

/// Пишет shell-скрипт, который тесты запускают как `/bin/sh <script>`.
pub(super) fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
    path
}

/// Создает исполняемый файл (права 0755).
pub(super) fn write_executable(dir: &Path, name: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = write_script(dir, name, "exit 0");
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
}
