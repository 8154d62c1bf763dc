//! 文件系统模块
//!
//! - [`procfs`] - 通用 procfs 注册与分发
//! - [`mmcsd`] - MMC/SD 卡元数据驱动

pub mod mmcsd;
pub mod procfs;

#[cfg(test)]
mod tests;
