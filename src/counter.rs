use std::sync::atomic::{AtomicU64, Ordering};

/// Pool of request tickets shared by all workers. Claims are atomic, so the
/// stored count never exceeds the total and equals the number of requests
/// actually handed out.
pub struct TicketCounter {
    issued: AtomicU64,
    total: u64,
}

impl TicketCounter {
    pub fn new(total: u64) -> Self {
        Self {
            issued: AtomicU64::new(0),
            total,
        }
    }

    /// Claims the next ticket, or `None` once all tickets are taken.
    pub fn claim(&self) -> Option<u64> {
        let mut current = self.issued.load(Ordering::Relaxed);
        loop {
            if current >= self.total {
                return None;
            }
            match self.issued.compare_exchange_weak(
                current,
                current + 1,
                Ordering::AcqRel,
                Ordering::Relaxed,
            ) {
                Ok(_) => return Some(current),
                Err(observed) => current = observed,
            }
        }
    }

    pub fn issued(&self) -> u64 {
        self.issued.load(Ordering::Acquire)
    }
}
