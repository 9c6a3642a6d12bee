// 日志工具模块
//
// 宿主程序用配置中的 `[log]` 段启动 flexi_logger 文件日志，库内部只经过 `log` 门面输出

use crate::config::Config;
use flexi_logger::{
    Cleanup, Criterion, FileSpec, FlexiLoggerError, Logger, LoggerHandle, Naming, WriteMode,
};
use parking_lot::Mutex;

/// 全局日志句柄，用于调整级别和退出时 flush
static LOGGER_HANDLE: Mutex<Option<LoggerHandle>> = Mutex::new(None);

/// 初始化日志系统
///
/// 可以重复调用：已初始化时不会再次安装 logger，只把级别切换为 `config.log.level`。
/// flexi_logger 是进程级全局 logger，`shutdown` 之后再调用会返回错误
///
/// # Examples
/// ```no_run
/// use querycost::config::Config;
/// use querycost::utils::logging;
///
/// let config = Config::default();
/// logging::init(&config).expect("日志初始化失败");
/// ```
pub fn init(config: &Config) -> Result<(), FlexiLoggerError> {
    let mut guard = LOGGER_HANDLE.lock();
    if let Some(handle) = guard.as_ref() {
        handle.parse_new_spec(&config.log.level)?;
        log::debug!("日志系统已初始化，级别切换为 {}", config.log.level);
        return Ok(());
    }

    let handle = Logger::try_with_str(&config.log.level)?
        .log_to_file(
            FileSpec::default()
                .basename(&config.log.file)
                .directory(&config.log.dir),
        )
        .rotate(
            Criterion::Size(config.log.max_file_size),
            Naming::Numbers,
            Cleanup::KeepLogFiles(config.log.max_files),
        )
        .write_mode(WriteMode::Async)
        .append()
        .start()?;
    *guard = Some(handle);

    log::info!("日志系统初始化完成: {}/{}", config.log.dir, config.log.file);
    Ok(())
}

/// 刷新并关闭日志系统，异步缓冲中的估算日志会先写入文件
pub fn shutdown() {
    if let Some(handle) = LOGGER_HANDLE.lock().take() {
        handle.flush();
    }
}

pub fn is_initialized() -> bool {
    LOGGER_HANDLE.lock().is_some()
}
