//! Product id generators.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;
use katalog_core::{application::ports::IdGenerator, domain::ProductId};
use uuid::Uuid;

/// `product-<uuid v4>`. The default strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl UuidIdGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl IdGenerator for UuidIdGenerator {
    fn generate(&self) -> ProductId {
        // A hyphenated uuid never contains whitespace or commas.
        ProductId::with_suffix(Uuid::new_v4())
            .unwrap_or_else(|_| unreachable!("uuid suffix is always a valid product id"))
    }
}

/// `product-<unix millis>`, strictly increasing within one generator even
/// when called twice in the same millisecond.
#[derive(Debug, Default)]
pub struct TimestampIdGenerator {
    last: AtomicI64,
}

impl TimestampIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_millis(&self) -> i64 {
        let now = Utc::now().timestamp_millis();
        let mut prev = self.last.load(Ordering::Relaxed);
        loop {
            let next = now.max(prev + 1);
            match self
                .last
                .compare_exchange_weak(prev, next, Ordering::SeqCst, Ordering::Relaxed)
            {
                Ok(_) => return next,
                Err(actual) => prev = actual,
            }
        }
    }
}

impl IdGenerator for TimestampIdGenerator {
    fn generate(&self) -> ProductId {
        ProductId::with_suffix(self.next_millis())
            .unwrap_or_else(|_| unreachable!("numeric suffix is always a valid product id"))
    }
}
