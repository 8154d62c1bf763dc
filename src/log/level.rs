//! 日志级别

use core::fmt;

/// 日志优先级，数值越小越紧急（与内核的 `KERN_*` 相同）
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// 系统不可用
    Emergency = 0,
    /// 必须立即处理
    Alert = 1,
    /// 严重错误
    Critical = 2,
    /// 错误
    Error = 3,
    /// 警告
    Warning = 4,
    /// 正常但值得注意
    Notice = 5,
    /// 信息
    Info = 6,
    /// 调试
    Debug = 7,
}

impl LogLevel {
    /// 按数值排列的全部级别
    pub const ALL: [LogLevel; 8] = [
        LogLevel::Emergency,
        LogLevel::Alert,
        LogLevel::Critical,
        LogLevel::Error,
        LogLevel::Warning,
        LogLevel::Notice,
        LogLevel::Info,
        LogLevel::Debug,
    ];

    /// 从原子变量中的数值恢复，超出范围的按 Debug 处理
    pub const fn from_u8(level: u8) -> Self {
        let idx = if level > LogLevel::Debug as u8 {
            LogLevel::Debug as usize
        } else {
            level as usize
        };
        Self::ALL[idx]
    }

    /// 输出时使用的标签
    pub const fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Emergency => "[EMERG]",
            LogLevel::Alert => "[ALERT]",
            LogLevel::Critical => "[CRIT]",
            LogLevel::Error => "[ERR]",
            LogLevel::Warning => "[WARNING]",
            LogLevel::Notice => "[NOTICE]",
            LogLevel::Info => "[INFO]",
            LogLevel::Debug => "[DEBUG]",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
