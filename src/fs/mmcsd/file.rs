use alloc::boxed::Box;
use alloc::format;
use alloc::string::String;
use alloc::sync::Arc;

use super::catalog::MmcsdFileKind;
use super::line::LineBuffer;
use crate::config::MMCSD_DEVICE_PREFIX;
use crate::device::{BlockDriverRegistry, MountFlags};
use crate::fs::procfs::{ProcfsFile, procfs_memcpy};
use crate::vfs::FsError;

/// 打开的 `cid<N>` / `csd<N>` / `type<N>` 文件
///
/// 内容在每次读取时重新生成：打开 `/dev/mmcsd<N>`，取寄存器快照，
/// 格式化到行缓冲区，再按偏移复制，最后关闭设备。
pub struct MmcsdFile {
    kind: MmcsdFileKind,
    index: u32,
    line: LineBuffer,
    registry: Arc<BlockDriverRegistry>,
}

impl MmcsdFile {
    pub(super) fn new(
        kind: MmcsdFileKind,
        index: u32,
        registry: Arc<BlockDriverRegistry>,
    ) -> Result<Self, FsError> {
        Ok(Self {
            kind,
            index,
            line: LineBuffer::try_new()?,
            registry,
        })
    }

    /// 底层块设备路径
    pub fn device_path(&self) -> String {
        format!("{}{}", MMCSD_DEVICE_PREFIX, self.index)
    }

    /// 打开设备并重新生成行内容，设备在返回前关闭
    fn refresh(&mut self) -> Result<(), FsError> {
        let device = self
            .registry
            .open_blockdriver(&self.device_path(), MountFlags::RDONLY)?;
        let card = device.as_mmcsd().ok_or(FsError::NoDevice)?;
        self.kind.format(&card.state(), &mut self.line)
    }
}

impl ProcfsFile for MmcsdFile {
    fn read(&mut self, offset: usize, buf: &mut [u8]) -> Result<usize, FsError> {
        self.refresh()?;
        Ok(procfs_memcpy(self.line.as_bytes(), buf, offset))
    }

    fn dup(&self) -> Result<Box<dyn ProcfsFile>, FsError> {
        Ok(Box::new(Self {
            kind: self.kind,
            index: self.index,
            line: self.line.try_clone()?,
            registry: self.registry.clone(),
        }))
    }
}
