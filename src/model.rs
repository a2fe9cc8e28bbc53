/// Point-in-time view of pool activity.
///
/// Counter reads are relaxed; a snapshot taken while tasks are in flight is
/// approximate, one taken after all handles resolved is exact.
#[derive(Debug, Clone)]
pub struct PoolMetrics {
    pub submitted: usize,
    pub completed: usize,
    pub failed: usize,
    pub queued: usize,
}

impl PoolMetrics {
    /// Tasks submitted but not yet finished (queued or running).
    pub fn pending(&self) -> usize {
        self.submitted
            .saturating_sub(self.completed)
            .saturating_sub(self.failed)
    }

    pub fn success_rate(&self) -> f64 {
        let finished = self.completed + self.failed;
        if finished == 0 {
            return 1.0;
        }
        self.completed as f64 / finished as f64
    }
}
