//! procfs 打开句柄
//!
//! [`ProcfsFileHandle`] 保存读写位置和打开标志，只有驱动调用成功时才推进位置。

use alloc::boxed::Box;

use super::{ProcfsDir, ProcfsDirPriv, ProcfsFile};
use crate::vfs::{DirEntry, FsError, OpenFlags, SeekWhence};

/// 打开的 procfs 文件
pub struct ProcfsFileHandle {
    inner: Box<dyn ProcfsFile>,
    flags: OpenFlags,
    pos: usize,
}

impl ProcfsFileHandle {
    /// 包装驱动返回的文件状态，位置从 0 开始
    pub fn new(inner: Box<dyn ProcfsFile>, flags: OpenFlags) -> Self {
        Self {
            inner,
            flags,
            pos: 0,
        }
    }

    /// 打开标志
    pub fn flags(&self) -> OpenFlags {
        self.flags
    }

    /// 当前读写位置
    pub fn position(&self) -> usize {
        self.pos
    }

    /// 从当前位置读取
    pub fn read(&mut self, buf: &mut [u8]) -> Result<usize, FsError> {
        if !self.flags.readable() {
            return Err(FsError::BadFileDescriptor);
        }
        let n = self.inner.read(self.pos, buf)?;
        self.pos += n;
        Ok(n)
    }

    /// 从当前位置写入
    pub fn write(&mut self, buf: &[u8]) -> Result<usize, FsError> {
        if !self.flags.writable() {
            return Err(FsError::BadFileDescriptor);
        }
        let n = self.inner.write(self.pos, buf)?;
        self.pos += n;
        Ok(n)
    }

    /// 移动读写位置
    ///
    /// procfs 文件没有固定长度，不支持 `SeekWhence::End`。
    pub fn lseek(&mut self, offset: isize, whence: SeekWhence) -> Result<usize, FsError> {
        let new_pos = match whence {
            SeekWhence::Set => offset,
            SeekWhence::Cur => (self.pos as isize)
                .checked_add(offset)
                .ok_or(FsError::InvalidArgument)?,
            SeekWhence::End => return Err(FsError::NotSupported),
        };
        if new_pos < 0 {
            return Err(FsError::InvalidArgument);
        }
        self.pos = new_pos as usize;
        Ok(self.pos)
    }

    /// 复制句柄：驱动状态独立，位置和标志沿用当前值
    pub fn dup(&self) -> Result<Self, FsError> {
        Ok(Self {
            inner: self.inner.dup()?,
            flags: self.flags,
            pos: self.pos,
        })
    }

    /// 关闭句柄，驱动状态随之释放
    pub fn close(self) -> Result<(), FsError> {
        drop(self);
        Ok(())
    }
}

/// 打开的 procfs 目录
pub struct ProcfsDirHandle {
    inner: Box<dyn ProcfsDir>,
}

impl ProcfsDirHandle {
    /// 包装驱动返回的目录状态
    pub fn new(inner: Box<dyn ProcfsDir>) -> Self {
        Self { inner }
    }

    /// 通用遍历状态
    pub fn dir_priv(&self) -> &ProcfsDirPriv {
        self.inner.dir_priv()
    }

    /// 读取下一个目录项，结束时返回 `FsError::NotFound`
    pub fn readdir(&mut self) -> Result<DirEntry, FsError> {
        self.inner.readdir()
    }

    /// 回到第一个目录项
    pub fn rewinddir(&mut self) -> Result<(), FsError> {
        self.inner.rewinddir()
    }

    /// 依次产出剩余目录项，直到 readdir 失败
    pub fn entries(&mut self) -> impl Iterator<Item = DirEntry> + '_ {
        core::iter::from_fn(move || self.inner.readdir().ok())
    }

    /// 关闭目录
    pub fn closedir(self) -> Result<(), FsError> {
        drop(self);
        Ok(())
    }
}
