use super::*;
use crate::fs::procfs::{
    ProcfsDir, ProcfsDirPriv, ProcfsEntry, ProcfsEntryType, ProcfsFile, ProcfsOperations,
};
use crate::vfs::{DirEntry, FileMode, FsError, InodeType, OpenFlags, Stat};
use alloc::boxed::Box;
use alloc::format;
use alloc::string::{String, ToString};

/// 返回固定内容的测试驱动，并记录最后一次收到的相对路径
pub struct StaticOps {
    pub content: &'static [u8],
    pub last_path: crate::sync::SpinLock<String>,
}

impl StaticOps {
    pub fn new(content: &'static [u8]) -> Arc<Self> {
        Arc::new(Self {
            content,
            last_path: crate::sync::SpinLock::new(String::new()),
        })
    }

    pub fn last_path(&self) -> String {
        self.last_path.lock().clone()
    }
}

struct StaticFile {
    content: &'static [u8],
    written: Vec<u8>,
}

impl ProcfsFile for StaticFile {
    fn read(&mut self, offset: usize, buf: &mut [u8]) -> Result<usize, FsError> {
        Ok(crate::fs::procfs::procfs_memcpy(self.content, buf, offset))
    }

    fn write(&mut self, _offset: usize, buf: &[u8]) -> Result<usize, FsError> {
        self.written.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn dup(&self) -> Result<Box<dyn ProcfsFile>, FsError> {
        Ok(Box::new(StaticFile {
            content: self.content,
            written: self.written.clone(),
        }))
    }
}

struct StaticDir {
    dir: ProcfsDirPriv,
}

impl ProcfsDir for StaticDir {
    fn dir_priv(&self) -> &ProcfsDirPriv {
        &self.dir
    }

    fn readdir(&mut self) -> Result<DirEntry, FsError> {
        if self.dir.is_exhausted() {
            return Err(FsError::NotFound);
        }
        self.dir.index += 1;
        Ok(DirEntry {
            name: format!("entry{}", self.dir.index - 1),
            inode_type: InodeType::File,
        })
    }

    fn rewinddir(&mut self) -> Result<(), FsError> {
        self.dir.index = 0;
        Ok(())
    }
}

impl ProcfsOperations for StaticOps {
    fn open(
        &self,
        relpath: &str,
        _flags: OpenFlags,
        _mode: FileMode,
    ) -> Result<Box<dyn ProcfsFile>, FsError> {
        *self.last_path.lock() = relpath.to_string();
        Ok(Box::new(StaticFile {
            content: self.content,
            written: Vec::new(),
        }))
    }

    fn opendir(&self, relpath: &str) -> Result<Box<dyn ProcfsDir>, FsError> {
        *self.last_path.lock() = relpath.to_string();
        Ok(Box::new(StaticDir {
            dir: ProcfsDirPriv::new(1, 2),
        }))
    }

    fn stat(&self, relpath: &str) -> Result<Stat, FsError> {
        *self.last_path.lock() = relpath.to_string();
        Ok(Stat::new(InodeType::File, FileMode::READ_ONLY))
    }
}

/// 用 `StaticOps` 注册一个条目
pub fn register_static(
    procfs: &Procfs,
    pattern: &'static str,
    content: &'static [u8],
) -> Arc<StaticOps> {
    let ops = StaticOps::new(content);
    procfs
        .register(ProcfsEntry::new(pattern, ops.clone(), ProcfsEntryType::File))
        .unwrap();
    ops
}
