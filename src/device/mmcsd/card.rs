use alloc::format;
use alloc::string::String;
use alloc::sync::Arc;
use core::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use super::{MmcsdDevice, MmcsdState};
use crate::device::Driver;
use crate::device::block::{BlockDriver, MountFlags};
use crate::sync::SpinLock;
use crate::vfs::FsError;

/// 内存中的 MMC/SD 卡
///
/// 用于测试和开发。可以模拟插拔与写保护，并统计未关闭的打开次数。
pub struct MmcsdCard {
    /// 寄存器快照
    state: SpinLock<MmcsdState>,

    /// 设备序号，对应 `/dev/mmcsd<N>`
    device_id: usize,

    /// 卡是否插入
    inserted: AtomicBool,

    /// 写保护开关
    write_protected: AtomicBool,

    /// 当前打开计数
    open_count: AtomicUsize,
}

impl MmcsdCard {
    /// 创建一张已插入的卡
    pub fn new(state: MmcsdState, device_id: usize) -> Arc<Self> {
        Arc::new(Self {
            state: SpinLock::new(state),
            device_id,
            inserted: AtomicBool::new(true),
            write_protected: AtomicBool::new(false),
            open_count: AtomicUsize::new(0),
        })
    }

    /// 插入卡（重新初始化后的寄存器）
    pub fn insert(&self, state: MmcsdState) {
        *self.state.lock() = state;
        self.inserted.store(true, Ordering::Release);
    }

    /// 拔出卡，之后的 `open` 返回 `NoDevice`
    pub fn eject(&self) {
        self.inserted.store(false, Ordering::Release);
    }

    /// 卡是否插入
    pub fn is_inserted(&self) -> bool {
        self.inserted.load(Ordering::Acquire)
    }

    /// 替换寄存器快照
    pub fn set_state(&self, state: MmcsdState) {
        *self.state.lock() = state;
    }

    /// 打开写保护开关，非只读的 `open` 被拒绝
    pub fn set_write_protected(&self, protected: bool) {
        self.write_protected.store(protected, Ordering::Release);
    }

    /// 尚未关闭的打开次数
    pub fn open_count(&self) -> usize {
        self.open_count.load(Ordering::Acquire)
    }

    /// 设备序号
    pub fn device_id(&self) -> usize {
        self.device_id
    }
}

impl MmcsdDevice for MmcsdCard {
    fn state(&self) -> MmcsdState {
        *self.state.lock()
    }
}

impl BlockDriver for MmcsdCard {
    fn open(&self, flags: MountFlags) -> Result<(), FsError> {
        if !self.is_inserted() {
            return Err(FsError::NoDevice);
        }
        if !flags.contains(MountFlags::RDONLY) && self.write_protected.load(Ordering::Acquire) {
            return Err(FsError::PermissionDenied);
        }

        self.open_count.fetch_add(1, Ordering::AcqRel);
        Ok(())
    }

    fn close(&self) {
        // 与 open 配对，不会下溢
        let _ = self
            .open_count
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |n| n.checked_sub(1));
    }

    fn as_mmcsd(&self) -> Option<&dyn MmcsdDevice> {
        Some(self)
    }
}

impl Driver for MmcsdCard {
    fn get_id(&self) -> String {
        format!("mmcsd_{}", self.device_id)
    }

    fn as_block(&self) -> Option<&dyn BlockDriver> {
        Some(self)
    }
}
