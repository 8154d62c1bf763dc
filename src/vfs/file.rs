//! 打开文件相关的基础类型
//!
//! procfs 的文件句柄（[`ProcfsFileHandle`](crate::fs::procfs::ProcfsFileHandle)）
//! 维护读写位置和打开标志，这里定义它们用到的 [`OpenFlags`] 与 [`SeekWhence`]。

/// 文件偏移量设置模式
///
/// 对应 POSIX 的 `SEEK_SET`、`SEEK_CUR`、`SEEK_END`。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(usize)]
pub enum SeekWhence {
    /// 从文件开头计算
    Set = 0,
    /// 从当前位置计算
    Cur = 1,
    /// 从文件末尾计算
    End = 2,
}

bitflags::bitflags! {
    /// 文件打开标志（与 POSIX 兼容）
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct OpenFlags: u32 {
        /// 只读
        const O_RDONLY    = 0o0;
        /// 只写
        const O_WRONLY    = 0o1;
        /// 读写
        const O_RDWR      = 0o2;
        /// 访问模式掩码
        const O_ACCMODE   = 0o3;
        /// 不存在则创建
        const O_CREAT     = 0o100;
        /// 与 O_CREAT 配合，必须不存在
        const O_EXCL      = 0o200;
        /// 截断到 0
        const O_TRUNC     = 0o1000;
        /// 追加模式
        const O_APPEND    = 0o2000;
        /// 非阻塞 I/O
        const O_NONBLOCK  = 0o4000;
        /// 必须是目录
        const O_DIRECTORY = 0o200000;
        /// exec 时关闭
        const O_CLOEXEC   = 0o2000000;
    }
}

impl OpenFlags {
    /// 访问模式位（`flags & O_ACCMODE`）
    fn access_mode(&self) -> u32 {
        self.bits() & OpenFlags::O_ACCMODE.bits()
    }

    /// 检查是否可读（O_RDONLY 或 O_RDWR）
    pub fn readable(&self) -> bool {
        let mode = self.access_mode();
        mode == OpenFlags::O_RDONLY.bits() || mode == OpenFlags::O_RDWR.bits()
    }

    /// 检查是否可写（O_WRONLY 或 O_RDWR）
    pub fn writable(&self) -> bool {
        let mode = self.access_mode();
        mode == OpenFlags::O_WRONLY.bits() || mode == OpenFlags::O_RDWR.bits()
    }

    /// 是否带有任何写意图
    ///
    /// 访问模式不是纯 O_RDONLY（包括非法的 `O_WRONLY | O_RDWR`），
    /// 或带有会修改文件的标志。
    pub fn has_write_intent(&self) -> bool {
        self.access_mode() != OpenFlags::O_RDONLY.bits()
            || self.intersects(OpenFlags::O_CREAT | OpenFlags::O_TRUNC | OpenFlags::O_APPEND)
    }
}
