//! 日志系统测试
//!
//! 每个测试使用独立的 `LogCore`，不经过全局实例。

use super::level::LogLevel;
use super::log_core::LogCore;
use crate::{kassert, test_case};
use alloc::string::{String, ToString};
use alloc::vec::Vec;

/// 向指定实例写日志，参数形式与 `pr_*` 相同
macro_rules! test_log {
    ($logger:expr, $level:expr, $($arg:tt)*) => {
        $logger._log($level, format_args!($($arg)*))
    };
}

/// 读出全部未读条目的消息文本
fn drain_messages(log: &LogCore) -> Vec<String> {
    core::iter::from_fn(|| log._read_log())
        .map(|entry| entry.message().to_string())
        .collect()
}
