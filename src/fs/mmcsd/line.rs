//! 每个打开文件独占的格式化行缓冲区

use alloc::vec::Vec;
use core::fmt;

use crate::config::MMCSD_LINELEN;
use crate::vfs::FsError;

/// 固定容量的行缓冲区
///
/// 分配时清零；写入超过容量的部分被截断（与 `snprintf` 相同）。
pub struct LineBuffer {
    buf: Vec<u8>,
    len: usize,
}

impl LineBuffer {
    /// 分配一块 [`MMCSD_LINELEN`] 字节的清零缓冲区
    pub fn try_new() -> Result<Self, FsError> {
        let mut buf = Vec::new();
        buf.try_reserve_exact(MMCSD_LINELEN)
            .map_err(|_| FsError::OutOfMemory)?;
        buf.resize(MMCSD_LINELEN, 0);
        Ok(Self { buf, len: 0 })
    }

    /// 逐字节复制，包括当前内容之后的残留字节
    pub fn try_clone(&self) -> Result<Self, FsError> {
        let mut buf = Vec::new();
        buf.try_reserve_exact(self.buf.len())
            .map_err(|_| FsError::OutOfMemory)?;
        buf.extend_from_slice(&self.buf);
        Ok(Self { buf, len: self.len })
    }

    /// 清空当前行，缓冲区字节保留
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// 缓冲区容量
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// 当前行长度
    pub fn len(&self) -> usize {
        self.len
    }

    /// 当前行是否为空
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// 当前行内容
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// 整个缓冲区，包括未使用的部分
    pub fn raw(&self) -> &[u8] {
        &self.buf
    }
}

impl fmt::Write for LineBuffer {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let to_copy = s.len().min(self.buf.len() - self.len);
        self.buf[self.len..self.len + to_copy].copy_from_slice(&s.as_bytes()[..to_copy]);
        self.len += to_copy;
        Ok(())
    }
}
