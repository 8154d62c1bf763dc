//! 块设备模块
//!
//! 块设备驱动按设备节点路径（如 `/dev/mmcsd0`）注册到 [`BlockDriverRegistry`]，
//! 使用者通过 [`BlockDriverRegistry::open_blockdriver`] 打开，得到的
//! [`BlockDriverRef`] 离开作用域时自动关闭设备。

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

use hashbrown::HashMap;
use lazy_static::lazy_static;

use super::Driver;
use super::mmcsd::MmcsdDevice;
use crate::pr_debug;
use crate::sync::RwLock;
use crate::vfs::FsError;

bitflags::bitflags! {
    /// 打开块设备时的挂载标志
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct MountFlags: u32 {
        /// 只读访问
        const RDONLY = 1 << 0;
    }
}

/// 块设备驱动程序接口
pub trait BlockDriver: Driver {
    /// 打开设备
    /// # 参数：
    /// * `flags` - 挂载标志，`RDONLY` 表示只读访问
    /// # 返回值：
    /// 设备不可用时返回错误，例如卡未插入
    fn open(&self, _flags: MountFlags) -> Result<(), FsError> {
        Ok(())
    }

    /// 关闭设备，与每次成功的 `open` 一一对应
    fn close(&self) {}

    /// 如果是 MMC/SD 设备，返回其私有状态接口
    fn as_mmcsd(&self) -> Option<&dyn MmcsdDevice> {
        None
    }
}

/// 块设备注册表
///
/// # 并发安全
///
/// 内部使用 `RwLock` 保护，支持多线程访问。
pub struct BlockDriverRegistry {
    drivers: RwLock<HashMap<String, Arc<dyn Driver>>>,
}

impl fmt::Debug for BlockDriverRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BlockDriverRegistry")
            .field("drivers", &self.drivers.read().len())
            .finish()
    }
}

impl Default for BlockDriverRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockDriverRegistry {
    /// 创建空的注册表
    pub fn new() -> Self {
        Self {
            drivers: RwLock::new(HashMap::new()),
        }
    }

    /// 在 `path` 上注册驱动，路径已被占用时返回 `AlreadyExists`
    pub fn register(&self, path: &str, driver: Arc<dyn Driver>) -> Result<(), FsError> {
        let mut drivers = self.drivers.write();
        if drivers.contains_key(path) {
            return Err(FsError::AlreadyExists);
        }
        pr_debug!("blkdev: register {} ({})", path, driver.get_id());
        drivers.insert(String::from(path), driver);
        Ok(())
    }

    /// 注销 `path` 上的驱动
    ///
    /// 已打开的 [`BlockDriverRef`] 仍持有驱动的引用，直到被释放。
    pub fn unregister(&self, path: &str) -> Result<Arc<dyn Driver>, FsError> {
        let removed = self.drivers.write().remove(path).ok_or(FsError::NotFound)?;
        pr_debug!("blkdev: unregister {}", path);
        Ok(removed)
    }

    /// 已注册的所有设备路径（无序）
    pub fn paths(&self) -> Vec<String> {
        self.drivers.read().keys().cloned().collect()
    }

    /// 打开块设备
    ///
    /// # 错误
    /// - `NoDevice`: 路径上没有注册驱动
    /// - `NotBlockDevice`: 驱动不是块设备
    /// - 驱动 `open` 返回的错误
    pub fn open_blockdriver(&self, path: &str, flags: MountFlags) -> Result<BlockDriverRef, FsError> {
        // 在锁外调用驱动，open 可能阻塞
        let driver = self
            .drivers
            .read()
            .get(path)
            .cloned()
            .ok_or(FsError::NoDevice)?;

        let block = driver.as_block().ok_or(FsError::NotBlockDevice)?;
        block.open(flags)?;

        Ok(BlockDriverRef { driver })
    }
}

/// 已打开的块设备，Drop 时调用驱动的 `close`
pub struct BlockDriverRef {
    driver: Arc<dyn Driver>,
}

impl BlockDriverRef {
    /// 底层驱动的标识
    pub fn get_id(&self) -> String {
        self.driver.get_id()
    }

    /// 设备的 MMC/SD 私有状态接口
    pub fn as_mmcsd(&self) -> Option<&dyn MmcsdDevice> {
        self.driver.as_block().and_then(|block| block.as_mmcsd())
    }
}

impl Drop for BlockDriverRef {
    fn drop(&mut self) {
        if let Some(block) = self.driver.as_block() {
            block.close();
        }
    }
}

lazy_static! {
    /// 全局块设备注册表
    pub static ref BLK_DRIVERS: Arc<BlockDriverRegistry> = Arc::new(BlockDriverRegistry::new());
}
