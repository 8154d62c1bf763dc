//! `pr_*` 日志宏
//!
//! 每个宏对应一个优先级，先检查全局级别再格式化，
//! 被过滤掉的级别不会对参数求值。
//!
//! ```rust
//! use mmcsd_procfs::{pr_debug, pr_err};
//!
//! let index = 0;
//! pr_debug!("mmcsd: open cid{}", index);
//! pr_err!("mmcsd: unknown card type {:#04x}", 0x08);
//! ```

/// 所有 `pr_*` 宏的后端
#[doc(hidden)]
#[macro_export]
macro_rules! __log_impl_filtered {
    ($level:expr, $($arg:tt)*) => {
        if $crate::log::is_level_enabled($level) {
            $crate::log::log_impl($level, format_args!($($arg)*));
        }
    };
}

/// EMERG：系统不可用
#[macro_export]
macro_rules! pr_emerg {
    ($($arg:tt)*) => { $crate::__log_impl_filtered!($crate::log::LogLevel::Emergency, $($arg)*) };
}

/// ALERT：必须立即处理
#[macro_export]
macro_rules! pr_alert {
    ($($arg:tt)*) => { $crate::__log_impl_filtered!($crate::log::LogLevel::Alert, $($arg)*) };
}

/// CRIT
#[macro_export]
macro_rules! pr_crit {
    ($($arg:tt)*) => { $crate::__log_impl_filtered!($crate::log::LogLevel::Critical, $($arg)*) };
}

/// ERR：操作失败，例如无法识别的卡类型
#[macro_export]
macro_rules! pr_err {
    ($($arg:tt)*) => { $crate::__log_impl_filtered!($crate::log::LogLevel::Error, $($arg)*) };
}

/// WARNING
#[macro_export]
macro_rules! pr_warn {
    ($($arg:tt)*) => { $crate::__log_impl_filtered!($crate::log::LogLevel::Warning, $($arg)*) };
}

/// NOTICE
#[macro_export]
macro_rules! pr_notice {
    ($($arg:tt)*) => { $crate::__log_impl_filtered!($crate::log::LogLevel::Notice, $($arg)*) };
}

/// INFO：注册等一次性事件
#[macro_export]
macro_rules! pr_info {
    ($($arg:tt)*) => { $crate::__log_impl_filtered!($crate::log::LogLevel::Info, $($arg)*) };
}

/// DEBUG：逐次打开/读取，默认级别下不记录
#[macro_export]
macro_rules! pr_debug {
    ($($arg:tt)*) => { $crate::__log_impl_filtered!($crate::log::LogLevel::Debug, $($arg)*) };
}
