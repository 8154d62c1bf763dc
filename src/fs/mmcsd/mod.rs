//! MMC/SD 卡元数据 procfs 驱动
//!
//! 在 procfs 中提供只读的 `mmcsd/` 目录：
//!
//! ```text
//! mmcsd/
//! ├── cid0    CID 寄存器，32 个小写十六进制字符
//! ├── csd0    CSD 寄存器，32 个小写十六进制字符
//! ├── type0   SD 或 MMC
//! ├── cid1
//! └── ...
//! ```
//!
//! 文件内容没有缓存，每次 read 都会打开 `/dev/mmcsd<N>` 重新生成。
//! 任何带写意图的打开都会被拒绝。

mod catalog;
mod dir;
mod file;
mod line;

pub use catalog::{MMCSD_FILES, MmcsdFileKind, card_type_name, parse_file_path, parse_name};
pub use dir::MmcsdDir;
pub use file::MmcsdFile;
pub use line::LineBuffer;

use alloc::boxed::Box;
use alloc::sync::Arc;

use crate::config::{MMCSD_PROCFS_NAME, MMCSD_PROCFS_PATTERN};
use crate::device::{BLK_DRIVERS, BlockDriverRegistry};
use crate::fs::procfs::{
    PROCFS, Procfs, ProcfsDir, ProcfsEntry, ProcfsEntryType, ProcfsFile, ProcfsOperations,
};
use crate::vfs::{FileMode, FsError, InodeType, OpenFlags, Stat};
use crate::{pr_debug, pr_err};

use catalog::is_mmcsd_dir;

/// mmcsd procfs 驱动
///
/// 通过持有的块设备注册表找到 `/dev/mmcsd<N>`。
pub struct MmcsdProcfs {
    registry: Arc<BlockDriverRegistry>,
}

impl MmcsdProcfs {
    /// 使用给定的块设备注册表创建驱动
    pub fn new(registry: Arc<BlockDriverRegistry>) -> Self {
        Self { registry }
    }
}

impl ProcfsOperations for MmcsdProcfs {
    fn open(
        &self,
        relpath: &str,
        flags: OpenFlags,
        _mode: FileMode,
    ) -> Result<Box<dyn ProcfsFile>, FsError> {
        if flags.has_write_intent() {
            pr_err!("mmcsd: only O_RDONLY supported ({:#o})", flags.bits());
            return Err(FsError::PermissionDenied);
        }

        let (kind, index) = parse_file_path(relpath).ok_or(FsError::NotFound)?;
        let file = MmcsdFile::new(kind, index, self.registry.clone())?;
        pr_debug!("mmcsd: open {}{}", kind.name(), index);
        Ok(Box::new(file))
    }

    fn opendir(&self, relpath: &str) -> Result<Box<dyn ProcfsDir>, FsError> {
        if is_mmcsd_dir(relpath) {
            let dir = MmcsdDir::new(&self.registry);
            pr_debug!("mmcsd: opendir, {} devices", dir.devices().len());
            return Ok(Box::new(dir));
        }

        match parse_file_path(relpath) {
            Some(_) => Err(FsError::NotDirectory),
            None => Err(FsError::NotFound),
        }
    }

    fn stat(&self, relpath: &str) -> Result<Stat, FsError> {
        if is_mmcsd_dir(relpath) {
            return Ok(Stat::new(InodeType::Directory, FileMode::READ_ONLY));
        }

        parse_file_path(relpath)
            .map(|_| Stat::new(InodeType::File, FileMode::READ_ONLY))
            .ok_or(FsError::NotFound)
    }
}

/// 在 `procfs` 中注册 `mmcsd` 目录和 `mmcsd/**` 通配条目
pub fn register_procfs(
    procfs: &Procfs,
    registry: Arc<BlockDriverRegistry>,
) -> Result<(), FsError> {
    let ops: Arc<dyn ProcfsOperations> = Arc::new(MmcsdProcfs::new(registry));

    procfs.register(ProcfsEntry::new(
        MMCSD_PROCFS_NAME,
        ops.clone(),
        ProcfsEntryType::Directory,
    ))?;
    procfs.register(ProcfsEntry::new(
        MMCSD_PROCFS_PATTERN,
        ops,
        ProcfsEntryType::Unknown,
    ))
}

/// 启动时调用：注册到全局 procfs，使用全局块设备注册表
pub fn initialize_procfs() {
    let result = register_procfs(&PROCFS, BLK_DRIVERS.clone());
    if let Err(e) = result {
        pr_err!("mmcsd: procfs registration failed: {:?}", e);
    }
    debug_assert!(result.is_ok(), "mmcsd procfs registration failed");
}
