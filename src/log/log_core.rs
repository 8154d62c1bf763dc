//! 日志核心
//!
//! 全部日志状态集中在 [`LogCore`] 中：`pr_*` 宏使用一个全局实例，
//! 测试可以各自创建独立实例。

use core::fmt;
use core::sync::atomic::{AtomicU8, Ordering};

use super::buffer::LogBuffer;
use super::config::{DEFAULT_CONSOLE_LEVEL, DEFAULT_LOG_LEVEL};
use super::entry::LogEntry;
use super::level::LogLevel;
use crate::sync::SpinLock;

/// 接收通过控制台级别过滤的条目
pub type ConsoleSink = fn(&LogEntry);

/// 日志核心：环形缓冲区、两级阈值和控制台输出
pub struct LogCore {
    buffer: LogBuffer,
    /// 记录阈值
    global_level: AtomicU8,
    /// 立即输出阈值
    console_level: AtomicU8,
    console: SpinLock<Option<ConsoleSink>>,
}

impl LogCore {
    /// 使用 `log::config` 中的默认级别
    pub const fn default() -> Self {
        Self::new(DEFAULT_LOG_LEVEL, DEFAULT_CONSOLE_LEVEL)
    }

    /// 指定两个阈值创建实例
    ///
    /// ```rust
    /// use mmcsd_procfs::log::{LogCore, LogLevel};
    ///
    /// let log = LogCore::new(LogLevel::Debug, LogLevel::Warning);
    /// log._log(LogLevel::Info, format_args!("card {} inserted", 0));
    /// assert_eq!(log._log_len(), 1);
    /// ```
    pub const fn new(global_level: LogLevel, console_level: LogLevel) -> Self {
        Self {
            buffer: LogBuffer::new(),
            global_level: AtomicU8::new(global_level as u8),
            console_level: AtomicU8::new(console_level as u8),
            console: SpinLock::new(None),
        }
    }

    /// 记录一条日志
    ///
    /// 未通过全局阈值的直接丢弃；通过控制台阈值且装有 sink 时先输出，再写入缓冲区。
    pub fn _log(&self, level: LogLevel, args: fmt::Arguments) {
        if !self.is_level_enabled(level) {
            return;
        }

        let entry = LogEntry::from_args(level, self.buffer.next_seq(), args);
        if level <= self._get_console_level() {
            // 调用 sink 时不持有锁
            let sink = *self.console.lock();
            if let Some(sink) = sink {
                sink(&entry);
            }
        }
        self.buffer.write(entry);
    }

    /// 取出最早的一条缓冲日志
    pub fn _read_log(&self) -> Option<LogEntry> {
        self.buffer.read()
    }

    /// 缓冲区中的日志条数
    pub fn _log_len(&self) -> usize {
        self.buffer.len()
    }

    /// 因缓冲区满被丢弃的条数
    pub fn _log_dropped_count(&self) -> usize {
        self.buffer.dropped_count()
    }

    /// 设置进入缓冲区的最低优先级
    pub fn _set_global_level(&self, level: LogLevel) {
        store_level(&self.global_level, level);
    }

    /// 当前的全局级别
    pub fn _get_global_level(&self) -> LogLevel {
        load_level(&self.global_level)
    }

    /// 设置输出到控制台的最低优先级
    pub fn _set_console_level(&self, level: LogLevel) {
        store_level(&self.console_level, level);
    }

    /// 当前的控制台级别
    pub fn _get_console_level(&self) -> LogLevel {
        load_level(&self.console_level)
    }

    /// 安装或移除（`None`）控制台输出
    pub fn _set_console_sink(&self, sink: Option<ConsoleSink>) {
        *self.console.lock() = sink;
    }

    /// 该级别是否会被记录
    #[inline(always)]
    pub fn is_level_enabled(&self, level: LogLevel) -> bool {
        level <= self._get_global_level()
    }
}

#[inline(always)]
fn load_level(slot: &AtomicU8) -> LogLevel {
    LogLevel::from_u8(slot.load(Ordering::Acquire))
}

#[inline(always)]
fn store_level(slot: &AtomicU8, level: LogLevel) {
    slot.store(level as u8, Ordering::Release);
}
