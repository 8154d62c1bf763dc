//! 同步原语
//!
//! 向其它模块提供基本的锁。内核中的中断保护自旋锁在这里没有对应物，
//! 直接使用 `spin` crate 的实现。

/// 互斥自旋锁，`lock()` 返回 RAII 守卫
pub type SpinLock<T> = spin::Mutex<T>;

/// 读写自旋锁
pub type RwLock<T> = spin::RwLock<T>;
