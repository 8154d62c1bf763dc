//! mmcsd stat 测试

use super::*;
use crate::vfs::{FileMode, FsError};
use crate::{kassert, test_case};

test_case!(test_mmcsd_stat_directory, {
    let registry = create_test_registry();
    let procfs = create_test_procfs(&registry);

    for path in ["mmcsd", "mmcsd/"] {
        let st = procfs.stat(path).unwrap();
        kassert!(st.is_dir());
        kassert!(st.mode == FileMode::S_IFDIR | FileMode::READ_ONLY);
    }
});

test_case!(test_mmcsd_stat_file, {
    let registry = create_test_registry();
    let procfs = create_test_procfs(&registry);

    // stat 不访问设备
    for path in ["mmcsd/cid0", "mmcsd/csd1", "mmcsd/type42"] {
        let st = procfs.stat(path).unwrap();
        kassert!(st.is_file());
        kassert!(st.mode.bits() == 0o100444);
        kassert!(st.size == 0);
    }
});

test_case!(test_mmcsd_stat_not_found, {
    let registry = create_test_registry();
    let procfs = create_test_procfs(&registry);

    for path in ["mmcsd/foo", "mmcsd/cid", "mmcsd/cid0/x", "mmcsd/typeA"] {
        kassert!(procfs.stat(path).err() == Some(FsError::NotFound));
    }
});
