//! mmcsd 与全局 procfs / 块设备注册表的集成测试

use super::*;
use crate::device::BLK_DRIVERS;
use crate::fs::mmcsd::initialize_procfs;
use crate::fs::procfs::PROCFS;
use crate::vfs::{FileMode, FsError, OpenFlags};
use crate::{kassert, test_case};

test_case!(test_mmcsd_global_registration, {
    // 全局实例在整个测试进程中共享，只在这里初始化一次；
    // 使用其他测试不会用到的设备序号
    initialize_procfs();
    kassert!(PROCFS.patterns().contains(&"mmcsd"));
    kassert!(PROCFS.patterns().contains(&"mmcsd/**"));

    let card = MmcsdCard::new(sample_state(0x77, CardType::MMC | CardType::BLOCK), 77);
    BLK_DRIVERS.register("/dev/mmcsd77", card.clone()).unwrap();

    let mut handle = PROCFS
        .open("/mmcsd/type77", OpenFlags::O_RDONLY, FileMode::empty())
        .unwrap();
    kassert!(read_to_end(&mut handle, 8) == b"MMC".to_vec());

    let mut cid = PROCFS
        .open("mmcsd/cid77", OpenFlags::O_RDONLY, FileMode::empty())
        .unwrap();
    kassert!(read_to_end(&mut cid, 8) == b"0000007700000078000000790000007a".to_vec());
    kassert!(card.open_count() == 0);

    // 重复注册被拒绝
    let again = crate::fs::mmcsd::register_procfs(&PROCFS, BLK_DRIVERS.clone());
    kassert!(again.err() == Some(FsError::AlreadyExists));

    BLK_DRIVERS.unregister("/dev/mmcsd77").unwrap();
    let mut buf = [0u8; 4];
    kassert!(handle.read(&mut buf).err() == Some(FsError::NoDevice));
});

test_case!(test_mmcsd_full_walk, {
    // 遍历目录并读取每个文件
    let registry = create_test_registry();
    add_test_card(&registry, 0, sample_state(0x10, CardType::SDV2 | CardType::BLOCK));
    add_test_card(&registry, 1, sample_state(0x20, CardType::MMC));
    let procfs = create_test_procfs(&registry);

    let mut dir = procfs.opendir("mmcsd").unwrap();
    let mut total = 0;
    for entry in dir.entries() {
        let path = alloc::format!("mmcsd/{}", entry.name);
        kassert!(procfs.stat(&path).unwrap().is_file());

        let mut handle = procfs.open(&path, OpenFlags::O_RDONLY, FileMode::empty()).unwrap();
        let content = read_to_end(&mut handle, 13);
        if entry.name.starts_with("type") {
            kassert!(content == b"SD".to_vec() || content == b"MMC".to_vec());
        } else {
            kassert!(content.len() == 32);
            kassert!(content.iter().all(|b| b.is_ascii_hexdigit() && !b.is_ascii_uppercase()));
        }
        total += 1;
    }
    kassert!(total == 6);
});

test_case!(test_mmcsd_handles_do_not_share_buffers, {
    let registry = create_test_registry();
    add_test_card(&registry, 0, sample_state(0, CardType::SDV1));
    add_test_card(&registry, 1, sample_state(0, CardType::MMC));
    let procfs = create_test_procfs(&registry);

    let mut a = procfs.open("mmcsd/type0", OpenFlags::O_RDONLY, FileMode::empty()).unwrap();
    let mut b = procfs.open("mmcsd/type1", OpenFlags::O_RDONLY, FileMode::empty()).unwrap();
    let mut buf_a = [0u8; 1];
    let mut buf_b = [0u8; 8];

    kassert!(a.read(&mut buf_a).unwrap() == 1);
    kassert!(b.read(&mut buf_b).unwrap() == 3);
    kassert!(a.read(&mut buf_a).unwrap() == 1);
    kassert!(buf_a == *b"D");
    kassert!(&buf_b[..3] == b"MMC");
});
