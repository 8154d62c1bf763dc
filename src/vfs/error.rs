//! VFS 错误类型
//!
//! 定义了与 POSIX 兼容的文件系统错误码，可通过 [`FsError::to_errno()`] 转换为系统调用错误码。

/// VFS 错误类型
///
/// 各错误码对应标准 POSIX errno 值。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsError {
    // 文件/目录相关
    /// -ENOENT(2): 文件不存在，也用于目录遍历结束
    NotFound,
    /// -EEXIST(17): 重复注册
    AlreadyExists,
    /// -ENOTDIR(20): 不是目录
    NotDirectory,

    // 权限相关
    /// -EACCES(13): 权限被拒绝
    PermissionDenied,

    // 文件描述符相关
    /// -EBADF(9): 句柄的打开模式不允许该操作
    BadFileDescriptor,

    // 参数相关
    /// -EINVAL(22): 无效参数
    InvalidArgument,
    /// -ENAMETOOLONG(36): 文件名过长
    NameTooLong,

    // 内存相关
    /// -ENOMEM(12): 内存不足
    OutOfMemory,

    // 设备相关
    /// -ENODEV(19): 设备不存在或卡未插入
    NoDevice,
    /// -ENOTBLK(15): 不是块设备
    NotBlockDevice,
    /// -EINVAL(22): 卡类型无法识别
    InvalidMediaType,

    // 其他
    /// -ENOTSUP(95): 操作不支持
    NotSupported,
}

impl FsError {
    /// 转换为系统调用错误码（负数）
    pub fn to_errno(&self) -> isize {
        match self {
            FsError::NotFound => -2,
            FsError::BadFileDescriptor => -9,
            FsError::OutOfMemory => -12,
            FsError::PermissionDenied => -13,
            FsError::NotBlockDevice => -15,
            FsError::AlreadyExists => -17,
            FsError::NoDevice => -19,
            FsError::NotDirectory => -20,
            FsError::InvalidArgument | FsError::InvalidMediaType => -22,
            FsError::NameTooLong => -36,
            FsError::NotSupported => -95,
        }
    }
}
