use crate::device::{BlockDriverRegistry, CardType, MmcsdCard, MmcsdState};
use crate::fs::mmcsd::register_procfs;
use crate::fs::procfs::{ProcfsFileHandle, Procfs};
use alloc::format;
use alloc::sync::Arc;
use alloc::vec::Vec;

// 测试辅助函数 (fixtures)

/// 创建一个空的块设备注册表
pub fn create_test_registry() -> Arc<BlockDriverRegistry> {
    Arc::new(BlockDriverRegistry::new())
}

/// 根据种子生成一组可区分的寄存器值
pub fn sample_state(seed: u32, card_type: CardType) -> MmcsdState {
    MmcsdState {
        cid: [seed, seed + 1, seed + 2, seed + 3],
        csd: [!seed, 0x0032_5b59, 0x0000_3a9f, 0x0a40_0000 | seed],
        card_type,
    }
}

/// 在 `/dev/mmcsd<index>` 上注册一张卡
pub fn add_test_card(
    registry: &Arc<BlockDriverRegistry>,
    index: u32,
    state: MmcsdState,
) -> Arc<MmcsdCard> {
    let card = MmcsdCard::new(state, index as usize);
    registry
        .register(&format!("/dev/mmcsd{}", index), card.clone())
        .unwrap();
    card
}

/// 创建已注册 mmcsd 驱动的 procfs 实例
pub fn create_test_procfs(registry: &Arc<BlockDriverRegistry>) -> Procfs {
    let procfs = Procfs::new();
    register_procfs(&procfs, registry.clone()).unwrap();
    procfs
}

/// 用 `chunk` 字节大小的缓冲区循环读取，直到读到 0 字节
pub fn read_to_end(handle: &mut ProcfsFileHandle, chunk: usize) -> Vec<u8> {
    let mut out = Vec::new();
    let mut buf = alloc::vec![0u8; chunk];
    loop {
        let n = handle.read(&mut buf).unwrap();
        if n == 0 {
            break;
        }
        out.extend_from_slice(&buf[..n]);
    }
    out
}

pub mod procfs;
