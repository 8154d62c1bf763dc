//! mmcsd 目录下的文件目录表与格式化
//!
//! 每张卡导出三类文件，顺序固定：`cid`、`csd`、`type`。
//! 该顺序同时决定文件名前缀匹配的优先级和 readdir 的输出顺序。

use core::fmt::Write;

use super::line::LineBuffer;
use crate::config::MMCSD_PROCFS_NAME;
use crate::device::{CardType, MmcsdState};
use crate::pr_err;
use crate::vfs::{FsError, split_first};

/// 文件类别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MmcsdFileKind {
    /// CID 寄存器
    Cid,
    /// CSD 寄存器
    Csd,
    /// 卡类型
    Type,
}

/// 目录表
pub const MMCSD_FILES: [MmcsdFileKind; 3] =
    [MmcsdFileKind::Cid, MmcsdFileKind::Csd, MmcsdFileKind::Type];

impl MmcsdFileKind {
    /// 文件名前缀
    pub const fn name(self) -> &'static str {
        match self {
            MmcsdFileKind::Cid => "cid",
            MmcsdFileKind::Csd => "csd",
            MmcsdFileKind::Type => "type",
        }
    }

    /// 把寄存器快照格式化到 `line`
    ///
    /// 失败时 `line` 保持原样。
    pub fn format(self, state: &MmcsdState, line: &mut LineBuffer) -> Result<(), FsError> {
        match self {
            MmcsdFileKind::Cid => write_words(line, &state.cid),
            MmcsdFileKind::Csd => write_words(line, &state.csd),
            MmcsdFileKind::Type => {
                let name = card_type_name(state.card_type)?;
                line.clear();
                line.write_str(name).map_err(|_| FsError::InvalidArgument)
            }
        }
    }
}

fn write_words(line: &mut LineBuffer, words: &[u32; 4]) -> Result<(), FsError> {
    line.clear();
    write!(
        line,
        "{:08x}{:08x}{:08x}{:08x}",
        words[0], words[1], words[2], words[3]
    )
    .map_err(|_| FsError::InvalidArgument)
}

/// 卡类型对应的显示名
pub fn card_type_name(card_type: CardType) -> Result<&'static str, FsError> {
    const SD_TYPES: [CardType; 3] = [
        CardType::SDV1,
        CardType::SDV2,
        CardType::SDV2.union(CardType::BLOCK),
    ];
    const MMC_TYPES: [CardType; 2] = [CardType::MMC, CardType::MMC.union(CardType::BLOCK)];

    if SD_TYPES.contains(&card_type) {
        Ok("SD")
    } else if MMC_TYPES.contains(&card_type) {
        Ok("MMC")
    } else {
        pr_err!("mmcsd: unknown card type {:#04x}", card_type.bits());
        Err(FsError::InvalidMediaType)
    }
}

/// 解析目录内文件名 `<kind><index>`
///
/// 按目录表顺序匹配前缀，第一个匹配的类别决定结果；
/// 序号必须是非空的十进制数字串且不超出 `u32`。
pub fn parse_name(name: &str) -> Option<(MmcsdFileKind, u32)> {
    let kind = MMCSD_FILES
        .iter()
        .copied()
        .find(|kind| name.starts_with(kind.name()))?;
    let index = parse_index(&name[kind.name().len()..])?;
    Some((kind, index))
}

/// 解析十进制设备序号
pub fn parse_index(digits: &str) -> Option<u32> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// 解析 `mmcsd/<kind><index>` 形式的相对路径
pub fn parse_file_path(relpath: &str) -> Option<(MmcsdFileKind, u32)> {
    match split_first(relpath) {
        (MMCSD_PROCFS_NAME, Some(name)) if !name.contains('/') => parse_name(name),
        _ => None,
    }
}

/// 相对路径是否指向 mmcsd 目录本身
pub fn is_mmcsd_dir(relpath: &str) -> bool {
    relpath.strip_suffix('/').unwrap_or(relpath) == MMCSD_PROCFS_NAME
}
