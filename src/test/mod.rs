//! 测试支持
//!
//! 提供 `test_case!` 与 `kassert!` 两个宏。测试运行在宿主机的标准测试框架上，
//! 因此 `test_case!` 直接展开为 `#[test]` 函数。


#[cfg(test)]
mod tests {
    use crate::{kassert, test_case};

    test_case!(trivial_assertion, {
        kassert!(0 != 1);
    });

    #[test]
    #[should_panic(expected = "Failed assertion: 1 == 2")]
    fn failed_assertion_panics() {
        kassert!(1 == 2);
    }
}
