//! MMC/SD 卡元数据 procfs 驱动
//!
//! 在 procfs 的 `mmcsd/` 目录下以只读虚拟文件的形式导出 MMC/SD 卡的
//! 标识寄存器：
//!
//! - `mmcsd/cid<N>` - CID 寄存器，32 个小写十六进制字符
//! - `mmcsd/csd<N>` - CSD 寄存器，32 个小写十六进制字符
//! - `mmcsd/type<N>` - 卡类型，`SD` 或 `MMC`
//!
//! 内容每次读取时都从 `/dev/mmcsd<N>` 块设备实时生成。
//!
//! # 模块
//!
//! - [`fs::mmcsd`] - 驱动本体
//! - [`fs::procfs`] - 通用 procfs 注册与分发
//! - [`device`] - 块设备注册表与 MMC/SD 卡私有状态
//! - [`vfs`] - 错误码、打开标志、文件模式等基础类型
//! - [`log`] - `pr_*` 日志宏

#![cfg_attr(not(test), no_std)]

extern crate alloc;

#[macro_use]
pub mod log;

pub mod config;
pub mod device;
pub mod fs;
pub mod sync;
pub mod vfs;

#[cfg(test)]
#[macro_use]
pub mod test;

pub use fs::mmcsd::{MmcsdProcfs, initialize_procfs, register_procfs};
pub use fs::procfs::{PROCFS, Procfs};
