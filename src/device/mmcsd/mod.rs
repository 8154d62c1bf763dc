//! MMC/SD 卡驱动接口
//!
//! procfs 驱动只依赖 [`MmcsdDevice`] 提供的寄存器快照；[`MmcsdCard`]
//! 是一个保存在内存中的卡实现。

mod card;

pub use card::MmcsdCard;

bitflags::bitflags! {
    /// 卡类型位域
    ///
    /// 全 0 表示未知类型；`BLOCK` 与 SDv2 或 MMC 组合表示块寻址。
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct CardType: u8 {
        /// 未知卡类型
        const UNKNOWN = 0;
        /// MMC 卡
        const MMC     = 1 << 0;
        /// SD 1.x
        const SDV1    = 1 << 1;
        /// SD 2.x，字节寻址
        const SDV2    = 1 << 2;
        /// 块寻址（SDHC/SDXC 或高容量 MMC）
        const BLOCK   = 1 << 3;
    }
}

/// 卡的寄存器快照
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MmcsdState {
    /// CID 寄存器（卡标识），4 个 32 位字
    pub cid: [u32; 4],
    /// CSD 寄存器（卡特定数据），4 个 32 位字
    pub csd: [u32; 4],
    /// 卡类型
    pub card_type: CardType,
}

impl MmcsdState {
    /// 未识别出任何信息的空状态
    pub const fn unknown() -> Self {
        Self {
            cid: [0; 4],
            csd: [0; 4],
            card_type: CardType::UNKNOWN,
        }
    }
}

/// MMC/SD 设备私有状态接口
pub trait MmcsdDevice: Send + Sync {
    /// 获取当前寄存器快照
    fn state(&self) -> MmcsdState;
}
