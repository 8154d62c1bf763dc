//! 日志环形缓冲区
//!
//! 容量固定为 [`LOG_BUFFER_ENTRIES`] 条；写满后覆盖最旧的条目并记录丢弃数。

use alloc::collections::VecDeque;

use super::config::LOG_BUFFER_ENTRIES;
use super::entry::LogEntry;
use crate::sync::SpinLock;

pub(super) struct LogBuffer {
    inner: SpinLock<RingState>,
}

struct RingState {
    entries: VecDeque<LogEntry>,
    /// 下一个条目的序列号
    next_seq: usize,
    /// 由于缓冲区溢出而丢弃的日志计数
    dropped: usize,
}

impl LogBuffer {
    pub(super) const fn new() -> Self {
        Self {
            inner: SpinLock::new(RingState {
                entries: VecDeque::new(),
                next_seq: 1,
                dropped: 0,
            }),
        }
    }

    /// 分配下一个序列号
    pub(super) fn next_seq(&self) -> usize {
        let mut state = self.inner.lock();
        let seq = state.next_seq;
        state.next_seq += 1;
        seq
    }

    /// 写入一条日志，缓冲区满时丢弃最旧的一条
    pub(super) fn write(&self, entry: LogEntry) {
        let mut state = self.inner.lock();
        if state.entries.len() >= LOG_BUFFER_ENTRIES {
            state.entries.pop_front();
            state.dropped += 1;
        }
        state.entries.push_back(entry);
    }

    pub(super) fn read(&self) -> Option<LogEntry> {
        self.inner.lock().entries.pop_front()
    }

    pub(super) fn len(&self) -> usize {
        self.inner.lock().entries.len()
    }

    pub(super) fn dropped_count(&self) -> usize {
        self.inner.lock().dropped
    }
}
