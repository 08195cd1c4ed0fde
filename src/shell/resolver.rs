//! Поиск исполняемого файла по имени команды.

use std::path::{Path, PathBuf};

use nix::unistd::{AccessFlags, access};

use super::path::PathRegistry;

/// Возвращает путь к исполняемому файлу для команды `name`.
///
/// Поведение:
/// - имя с `/` (абсолютное или относительное): используется как есть, без поиска по списку
/// - иначе: первый каталог из `paths`, в котором `dir/name` исполняем
/// - пустое имя: `None`
pub(crate) fn resolve(name: &str, paths: &PathRegistry) -> Option<PathBuf> {
    if name.is_empty() {
        return None;
    }

    if name.contains('/') {
        let path = Path::new(name);
        return is_executable(path).then(|| path.to_path_buf());
    }

    paths
        .search_order()
        .iter()
        .map(|dir| dir.join(name))
        .find(|candidate| is_executable(candidate))
}

/// Обычный файл, который текущий пользователь может исполнить.
fn is_executable(path: &Path) -> bool {
    path.is_file() && access(path, AccessFlags::X_OK).is_ok()
}
