//! 路径解析与规范化

use alloc::string::String;
use alloc::vec::Vec;

/// 路径的一个组成部分
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathComponent {
    /// "/"
    Root,
    /// "."
    Current,
    /// ".."
    Parent,
    /// 正常的文件名
    Normal(String),
}

/// 将路径字符串解析为组件列表
pub fn parse_path(path: &str) -> Vec<PathComponent> {
    let mut components = Vec::new();

    // 绝对路径以 Root 开始
    if path.starts_with('/') {
        components.push(PathComponent::Root);
    }

    for part in path.split('/').filter(|s| !s.is_empty()) {
        let component = match part {
            "." => PathComponent::Current,
            ".." => PathComponent::Parent,
            name => PathComponent::Normal(String::from(name)),
        };
        components.push(component);
    }

    components
}

/// 将 procfs 内的路径规范化为不带前导 `/` 的相对路径
///
/// 处理 `.`、`..` 和重复的分隔符；`..` 不能越过 procfs 根目录。
/// 尾部的 `/` 会被去掉，根目录本身规范化为空串。
///
/// ```rust
/// use mmcsd_procfs::vfs::normalize_relpath;
///
/// assert_eq!(normalize_relpath("/mmcsd//./cid0"), "mmcsd/cid0");
/// assert_eq!(normalize_relpath("mmcsd/"), "mmcsd");
/// ```
pub fn normalize_relpath(path: &str) -> String {
    let mut stack: Vec<String> = Vec::new();

    for component in parse_path(path) {
        match component {
            PathComponent::Root | PathComponent::Current => {}
            PathComponent::Parent => {
                stack.pop();
            }
            PathComponent::Normal(name) => stack.push(name),
        }
    }

    stack.join("/")
}

/// 拆分出第一级目录名和剩余部分
///
/// `"mmcsd/cid0"` -> `("mmcsd", Some("cid0"))`，`"mmcsd"` -> `("mmcsd", None)`。
pub fn split_first(relpath: &str) -> (&str, Option<&str>) {
    match relpath.find('/') {
        Some(pos) => (&relpath[..pos], Some(&relpath[pos + 1..])),
        None => (relpath, None),
    }
}
