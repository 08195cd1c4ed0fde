//! Диагностический журнал шелла.
//!
//! Журнал пишется только в файл: stdout и stderr шелла принадлежат пользователю.

use std::fs::OpenOptions;
use std::path::Path;

use log::LevelFilter;
use simplelog::{ConfigBuilder, WriteLogger};

/// Включает запись журнала в `path` (дописывание в конец файла).
///
/// Если файл не открывается или логгер уже установлен, журнал просто остается выключенным.
pub(crate) fn init(path: &Path, level: LevelFilter) {
    let Ok(file) = OpenOptions::new().create(true).append(true).open(path) else {
        return;
    };

    let config = ConfigBuilder::new()
        .set_thread_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .build();
    let _ = WriteLogger::init(level, config, file);
}
