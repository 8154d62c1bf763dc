//! 虚拟文件系统基础类型
//!
//! procfs 与块设备层共用的错误码、打开标志、文件模式和路径工具。

pub mod error;
pub mod file;
pub mod inode;
pub mod path;

pub use error::FsError;
pub use file::{OpenFlags, SeekWhence};
pub use inode::{DirEntry, FileMode, InodeType, Stat};
pub use path::{normalize_relpath, parse_path, split_first};
