//! mmcsd 目录遍历测试

use super::*;
use alloc::string::String;
use crate::vfs::{FsError, InodeType};
use crate::{kassert, test_case};

fn names(entries: impl Iterator<Item = crate::vfs::DirEntry>) -> Vec<String> {
    entries.map(|e| e.name).collect()
}

test_case!(test_mmcsd_opendir, {
    let registry = create_test_registry();
    add_test_card(&registry, 0, sample_state(0, CardType::SDV1));
    let procfs = create_test_procfs(&registry);

    for path in ["mmcsd", "mmcsd/", "/mmcsd"] {
        let dir = procfs.opendir(path).unwrap();
        kassert!(dir.dir_priv().level == 1);
        kassert!(dir.dir_priv().nentries == 3);
        kassert!(dir.dir_priv().index == 0);
    }
});

test_case!(test_mmcsd_opendir_on_file, {
    let registry = create_test_registry();
    let procfs = create_test_procfs(&registry);
    kassert!(procfs.opendir("mmcsd/cid0").err() == Some(FsError::NotDirectory));
    kassert!(procfs.opendir("mmcsd/bogus").err() == Some(FsError::NotFound));
    kassert!(procfs.opendir("mmcsd/cid0/x").err() == Some(FsError::NotFound));
});

test_case!(test_mmcsd_readdir_round_robin, {
    let registry = create_test_registry();
    add_test_card(&registry, 0, sample_state(0, CardType::SDV1));
    add_test_card(&registry, 1, sample_state(1, CardType::MMC));
    let procfs = create_test_procfs(&registry);

    let mut dir = procfs.opendir("mmcsd").unwrap();
    kassert!(dir.dir_priv().nentries == 6);

    let mut seen = Vec::new();
    for _ in 0..6 {
        let entry = dir.readdir().unwrap();
        kassert!(entry.inode_type == InodeType::File);
        seen.push(entry.name);
    }
    kassert!(seen == ["cid0", "csd0", "type0", "cid1", "csd1", "type1"]);
    kassert!(dir.readdir().err() == Some(FsError::NotFound));
    // 结束后继续读取仍然是 NotFound
    kassert!(dir.readdir().err() == Some(FsError::NotFound));
});

test_case!(test_mmcsd_rewinddir, {
    let registry = create_test_registry();
    add_test_card(&registry, 0, sample_state(0, CardType::SDV1));
    let procfs = create_test_procfs(&registry);

    let mut dir = procfs.opendir("mmcsd/").unwrap();
    let first = names(dir.entries());
    kassert!(first.len() == 3);

    kassert!(dir.rewinddir().is_ok());
    kassert!(dir.dir_priv().index == 0);
    kassert!(names(dir.entries()) == first);
    kassert!(dir.closedir().is_ok());
});

test_case!(test_mmcsd_readdir_sparse_indices, {
    let registry = create_test_registry();
    add_test_card(&registry, 10, sample_state(0, CardType::SDV1));
    add_test_card(&registry, 2, sample_state(0, CardType::SDV1));
    let procfs = create_test_procfs(&registry);

    let mut dir = procfs.opendir("mmcsd").unwrap();
    kassert!(names(dir.entries()) == ["cid2", "csd2", "type2", "cid10", "csd10", "type10"]);
});

test_case!(test_mmcsd_readdir_ignores_other_devices, {
    let registry = create_test_registry();
    add_test_card(&registry, 0, sample_state(0, CardType::SDV1));
    let other = MmcsdCard::new(sample_state(0, CardType::SDV1), 1);
    registry.register("/dev/mmcsd0p1", other.clone()).unwrap();
    registry.register("/dev/ram0", other).unwrap();
    let procfs = create_test_procfs(&registry);

    let mut dir = procfs.opendir("mmcsd").unwrap();
    kassert!(names(dir.entries()) == ["cid0", "csd0", "type0"]);
});

test_case!(test_mmcsd_readdir_empty, {
    let registry = create_test_registry();
    let procfs = create_test_procfs(&registry);

    let mut dir = procfs.opendir("mmcsd").unwrap();
    kassert!(dir.dir_priv().nentries == 0);
    kassert!(dir.readdir().err() == Some(FsError::NotFound));
});

test_case!(test_mmcsd_readdir_snapshot, {
    // 目录打开后注册的设备不会出现在本次遍历中
    let registry = create_test_registry();
    add_test_card(&registry, 0, sample_state(0, CardType::SDV1));
    let procfs = create_test_procfs(&registry);

    let mut dir = procfs.opendir("mmcsd").unwrap();
    add_test_card(&registry, 1, sample_state(0, CardType::SDV1));
    kassert!(names(dir.entries()).len() == 3);

    let mut fresh = procfs.opendir("mmcsd").unwrap();
    kassert!(names(fresh.entries()).len() == 6);
});
