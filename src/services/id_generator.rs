//! ID 生成能力
//!
//! 生成器由调用方注入，测试中可以使用确定性的顺序ID。

use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// 为内容树中的每个实体生成唯一ID
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

/// 随机 UUID v4
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// 顺序ID：`{prefix}-0001`、`{prefix}-0002` ...
#[derive(Debug)]
pub struct SequentialIdGenerator {
    prefix: String,
    counter: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: AtomicU64::new(0),
        }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        format!("{}-{:04}", self.prefix, n)
    }
}
