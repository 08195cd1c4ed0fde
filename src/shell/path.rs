//! Список каталогов для поиска исполняемых файлов.

use std::path::PathBuf;

/// Каталог поиска по умолчанию.
pub(crate) const DEFAULT_SEARCH_DIR: &str = "/bin";

/// Упорядоченный список каталогов поиска.
///
/// Порядок вставки совпадает с порядком поиска. Переменная окружения `PATH`
/// не используется.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PathRegistry {
    dirs: Vec<PathBuf>,
}

impl PathRegistry {
    /// Создает список из одного каталога по умолчанию.
    pub(crate) fn new() -> Self {
        Self {
            dirs: vec![PathBuf::from(DEFAULT_SEARCH_DIR)],
        }
    }

    /// Полностью заменяет список. Пустой список допустим, каталоги не проверяются.
    pub(crate) fn replace<I, P>(&mut self, dirs: I)
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.dirs = dirs.into_iter().map(Into::into).collect();
    }

    pub(crate) fn search_order(&self) -> &[PathBuf] {
        &self.dirs
    }
}

impl Default for PathRegistry {
    fn default() -> Self {
        Self::new()
    }
}
