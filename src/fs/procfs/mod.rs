//! 通用 procfs 分发层
//!
//! 驱动以路径模式注册一个 [`ProcfsEntry`]，分发层把规范化后的相对路径交给
//! 第一个匹配的条目的 [`ProcfsOperations`]。
//!
//! # 路径模式
//!
//! - `"name"` - 只匹配 `name` 本身（`name/` 规范化后相同）
//! - `"name/**"` - 匹配 `name/` 之下的任意路径
//!
//! # 会话状态
//!
//! 驱动返回的 [`ProcfsFile`] / [`ProcfsDir`] 只保存驱动自身的状态，
//! 读写位置和打开标志由 [`ProcfsFileHandle`] 维护。

mod handle;

pub use handle::{ProcfsDirHandle, ProcfsFileHandle};

use alloc::boxed::Box;
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

use lazy_static::lazy_static;

use crate::config::NAME_MAX;
use crate::sync::RwLock;
use crate::vfs::{DirEntry, FileMode, FsError, OpenFlags, Stat, normalize_relpath};
use crate::{pr_debug, pr_info};

/// 条目类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcfsEntryType {
    /// 目录节点
    Directory,
    /// 普通文件
    File,
    /// 由驱动自行判断（通配模式）
    Unknown,
}

/// procfs 驱动的操作表
pub trait ProcfsOperations: Send + Sync {
    /// 打开文件
    fn open(
        &self,
        relpath: &str,
        flags: OpenFlags,
        mode: FileMode,
    ) -> Result<Box<dyn ProcfsFile>, FsError>;

    /// 打开目录
    fn opendir(&self, relpath: &str) -> Result<Box<dyn ProcfsDir>, FsError>;

    /// 获取文件或目录属性
    fn stat(&self, relpath: &str) -> Result<Stat, FsError>;
}

/// 驱动的单个打开文件状态
pub trait ProcfsFile: Send {
    /// 从 `offset` 开始读取，返回实际复制的字节数
    ///
    /// 失败时不得改变任何状态，调用者的读写位置也保持不变。
    fn read(&mut self, offset: usize, buf: &mut [u8]) -> Result<usize, FsError>;

    /// 写入（可选方法）
    fn write(&mut self, _offset: usize, _buf: &[u8]) -> Result<usize, FsError> {
        Err(FsError::NotSupported)
    }

    /// 复制一份独立的状态
    fn dup(&self) -> Result<Box<dyn ProcfsFile>, FsError>;
}

/// 驱动的目录遍历状态
pub trait ProcfsDir: Send {
    /// 通用遍历状态
    fn dir_priv(&self) -> &ProcfsDirPriv;

    /// 读取下一个目录项，遍历结束时返回 `FsError::NotFound`
    fn readdir(&mut self) -> Result<DirEntry, FsError>;

    /// 回到第一个目录项
    fn rewinddir(&mut self) -> Result<(), FsError>;
}

/// 目录遍历的通用状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcfsDirPriv {
    /// 目录深度（相对 procfs 根）
    pub level: u8,
    /// 目录项总数
    pub nentries: usize,
    /// 下一个要读取的目录项
    pub index: usize,
}

impl ProcfsDirPriv {
    /// 游标位于第一个目录项
    pub fn new(level: u8, nentries: usize) -> Self {
        Self {
            level,
            nentries,
            index: 0,
        }
    }

    /// 是否已遍历完所有目录项
    pub fn is_exhausted(&self) -> bool {
        self.index >= self.nentries
    }
}

/// 注册到 procfs 的条目
#[derive(Clone)]
pub struct ProcfsEntry {
    /// 路径模式，`name` 或 `name/**`
    pub pathpattern: &'static str,
    /// 驱动操作表
    pub ops: Arc<dyn ProcfsOperations>,
    /// 条目类型
    pub entry_type: ProcfsEntryType,
}

impl ProcfsEntry {
    /// 创建条目
    pub fn new(
        pathpattern: &'static str,
        ops: Arc<dyn ProcfsOperations>,
        entry_type: ProcfsEntryType,
    ) -> Self {
        Self {
            pathpattern,
            ops,
            entry_type,
        }
    }

    /// 规范化后的相对路径是否匹配本条目的模式
    pub fn matches(&self, relpath: &str) -> bool {
        match self.pathpattern.strip_suffix("/**") {
            Some(prefix) => relpath
                .strip_prefix(prefix)
                .and_then(|rest| rest.strip_prefix('/'))
                .is_some_and(|rest| !rest.is_empty()),
            None => relpath == self.pathpattern,
        }
    }
}

/// procfs 实例：条目表加分发逻辑
pub struct Procfs {
    entries: RwLock<Vec<ProcfsEntry>>,
}

impl Default for Procfs {
    fn default() -> Self {
        Self::new()
    }
}

impl Procfs {
    /// 创建没有任何条目的实例
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
        }
    }

    /// 注册条目，同一模式只能注册一次
    pub fn register(&self, entry: ProcfsEntry) -> Result<(), FsError> {
        let mut entries = self.entries.write();
        if entries.iter().any(|e| e.pathpattern == entry.pathpattern) {
            return Err(FsError::AlreadyExists);
        }
        pr_info!("procfs: registered {}", entry.pathpattern);
        entries.push(entry);
        Ok(())
    }

    /// 已注册的模式，按注册顺序
    pub fn patterns(&self) -> Vec<&'static str> {
        self.entries.read().iter().map(|e| e.pathpattern).collect()
    }

    /// 查找第一个匹配的条目，返回规范化后的相对路径
    fn lookup(&self, path: &str) -> Result<(String, ProcfsEntry), FsError> {
        let relpath = normalize_relpath(path);
        let entry = self
            .entries
            .read()
            .iter()
            .find(|e| e.matches(&relpath))
            .cloned()
            .ok_or(FsError::NotFound)?;
        Ok((relpath, entry))
    }

    /// 打开 procfs 文件
    ///
    /// 驱动对打开标志的检查优先于名字长度：驱动返回 `NotFound` 以外的错误时
    /// 原样返回，否则过长的名字报告为 `NameTooLong`。
    pub fn open(
        &self,
        path: &str,
        flags: OpenFlags,
        mode: FileMode,
    ) -> Result<ProcfsFileHandle, FsError> {
        let result = self.lookup(path).and_then(|(relpath, entry)| {
            pr_debug!("procfs: open {} via {}", relpath, entry.pathpattern);
            entry.ops.open(&relpath, flags, mode)
        });
        match result {
            Err(e) if e != FsError::NotFound => Err(e),
            _ if has_long_name(path) => Err(FsError::NameTooLong),
            Ok(file) => Ok(ProcfsFileHandle::new(file, flags)),
            Err(e) => Err(e),
        }
    }

    /// 打开 procfs 目录
    pub fn opendir(&self, path: &str) -> Result<ProcfsDirHandle, FsError> {
        if has_long_name(path) {
            return Err(FsError::NameTooLong);
        }
        let (relpath, entry) = self.lookup(path)?;
        let dir = entry.ops.opendir(&relpath)?;
        Ok(ProcfsDirHandle::new(dir))
    }

    /// 获取属性
    pub fn stat(&self, path: &str) -> Result<Stat, FsError> {
        if has_long_name(path) {
            return Err(FsError::NameTooLong);
        }
        let (relpath, entry) = self.lookup(path)?;
        entry.ops.stat(&relpath)
    }
}

/// 路径中是否有超过 [`NAME_MAX`] 的组成部分
fn has_long_name(path: &str) -> bool {
    path.split('/').any(|name| name.len() > NAME_MAX)
}

/// 把 `src` 中从 `offset` 开始的内容复制到 `dest`
///
/// 返回复制的字节数；`offset` 超出 `src` 时返回 0。
pub fn procfs_memcpy(src: &[u8], dest: &mut [u8], offset: usize) -> usize {
    if offset >= src.len() {
        return 0;
    }
    let to_copy = (src.len() - offset).min(dest.len());
    dest[..to_copy].copy_from_slice(&src[offset..offset + to_copy]);
    to_copy
}

lazy_static! {
    /// 全局 procfs 实例
    pub static ref PROCFS: Procfs = Procfs::new();
}
