use alloc::format;
use alloc::vec::Vec;

use super::catalog::{MMCSD_FILES, parse_index};
use crate::config::MMCSD_DEVICE_PREFIX;
use crate::device::BlockDriverRegistry;
use crate::fs::procfs::{ProcfsDir, ProcfsDirPriv};
use crate::vfs::{DirEntry, FsError, InodeType};

/// `mmcsd/` 目录的遍历状态
///
/// 打开时记录已注册的 mmcsd 设备序号（升序），每个设备依次产出
/// `cid<N>`、`csd<N>`、`type<N>`。
pub struct MmcsdDir {
    dir: ProcfsDirPriv,
    devices: Vec<u32>,
}

impl MmcsdDir {
    pub(super) fn new(registry: &BlockDriverRegistry) -> Self {
        let mut devices: Vec<u32> = registry
            .paths()
            .iter()
            .filter_map(|path| path.strip_prefix(MMCSD_DEVICE_PREFIX))
            .filter_map(parse_index)
            .collect();
        devices.sort_unstable();
        devices.dedup();

        Self {
            dir: ProcfsDirPriv::new(1, devices.len() * MMCSD_FILES.len()),
            devices,
        }
    }

    /// 打开时看到的设备序号
    pub fn devices(&self) -> &[u32] {
        &self.devices
    }
}

impl ProcfsDir for MmcsdDir {
    fn dir_priv(&self) -> &ProcfsDirPriv {
        &self.dir
    }

    fn readdir(&mut self) -> Result<DirEntry, FsError> {
        if self.dir.is_exhausted() {
            return Err(FsError::NotFound);
        }

        let cursor = self.dir.index;
        let kind = MMCSD_FILES[cursor % MMCSD_FILES.len()];
        let device = self
            .devices
            .get(cursor / MMCSD_FILES.len())
            .ok_or(FsError::NotFound)?;

        self.dir.index += 1;
        Ok(DirEntry {
            name: format!("{}{}", kind.name(), device),
            inode_type: InodeType::File,
        })
    }

    fn rewinddir(&mut self) -> Result<(), FsError> {
        self.dir.index = 0;
        Ok(())
    }
}
