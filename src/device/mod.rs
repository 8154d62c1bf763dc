//! 设备抽象层，提供块设备注册表和 MMC/SD 卡接口

pub mod block;
pub mod mmcsd;

pub use block::{BLK_DRIVERS, BlockDriver, BlockDriverRef, BlockDriverRegistry, MountFlags};
pub use mmcsd::{CardType, MmcsdCard, MmcsdDevice, MmcsdState};

use alloc::string::String;

/// 所有设备驱动的公共接口
pub trait Driver: Send + Sync {
    /// 设备的唯一标识，每个实例不同
    fn get_id(&self) -> String;

    /// 如果是块设备，返回块设备接口
    fn as_block(&self) -> Option<&dyn BlockDriver> {
        None
    }
}
