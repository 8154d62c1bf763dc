//! 文件类型、权限与 stat 结果

use alloc::string::String;

/// Inode类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InodeType {
    /// 普通文件
    File,
    /// 目录
    Directory,
}

impl InodeType {
    /// 对应的 `S_IFMT` 类型位
    pub fn file_mode_type(&self) -> FileMode {
        match self {
            InodeType::File => FileMode::S_IFREG,
            InodeType::Directory => FileMode::S_IFDIR,
        }
    }
}

bitflags::bitflags! {
    /// 文件权限和类型（与 POSIX 兼容）
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct FileMode: u32 {
        /// 文件类型掩码
        const S_IFMT   = 0o170000;
        /// 普通文件
        const S_IFREG  = 0o100000;
        /// 目录
        const S_IFDIR  = 0o040000;

        /// 用户读
        const S_IRUSR  = 0o400;
        /// 用户写
        const S_IWUSR  = 0o200;
        /// 用户执行
        const S_IXUSR  = 0o100;

        /// 组读
        const S_IRGRP  = 0o040;
        /// 组写
        const S_IWGRP  = 0o020;
        /// 组执行
        const S_IXGRP  = 0o010;

        /// 其他读
        const S_IROTH  = 0o004;
        /// 其他写
        const S_IWOTH  = 0o002;
        /// 其他执行
        const S_IXOTH  = 0o001;
    }
}

impl FileMode {
    /// 所有者、组、其他用户均只读（r--r--r--）
    pub const READ_ONLY: FileMode = FileMode::S_IRUSR
        .union(FileMode::S_IRGRP)
        .union(FileMode::S_IROTH);

    /// 取出类型位
    pub fn file_type(&self) -> FileMode {
        FileMode::from_bits_truncate(self.bits() & FileMode::S_IFMT.bits())
    }
}

/// 轻量级目录项（readdir 返回）
///
/// 用于数据传输，无引用关系，读取后即可丢弃
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    /// 文件名
    pub name: String,
    /// 文件类型
    pub inode_type: InodeType,
}

/// stat 返回的文件属性
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    /// 类型位与权限位
    pub mode: FileMode,
    /// 文件大小（字节），procfs 文件总是 0
    pub size: usize,
}

impl Stat {
    /// 按类型和权限构造，其余字段为 0
    pub fn new(inode_type: InodeType, perm: FileMode) -> Self {
        Self {
            mode: inode_type.file_mode_type() | perm,
            size: 0,
        }
    }

    /// 是否为目录
    pub fn is_dir(&self) -> bool {
        self.mode.file_type() == FileMode::S_IFDIR
    }

    /// 是否为普通文件
    pub fn is_file(&self) -> bool {
        self.mode.file_type() == FileMode::S_IFREG
    }
}
