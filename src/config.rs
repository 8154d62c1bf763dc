//! 编译期配置常量

/// 格式化行缓冲区大小，需能容纳最长的一行输出（再留几个字节余量）
pub const MMCSD_LINELEN: usize = 512;

/// procfs 中的挂载名
pub const MMCSD_PROCFS_NAME: &str = "mmcsd";

/// 递归匹配 `mmcsd/` 下所有路径的 procfs 模式
pub const MMCSD_PROCFS_PATTERN: &str = "mmcsd/**";

/// 底层块设备节点前缀，后接设备序号
pub const MMCSD_DEVICE_PREFIX: &str = "/dev/mmcsd";

/// 目录项名称最大长度
pub const NAME_MAX: usize = 255;
