/// Observer for the phases of a pruning pass.
///
/// The CLI prints these for the operator; background runs rely on the
/// tracing events emitted by the use case instead.
pub trait PruneProgress: Send + Sync {
    fn selecting(&self, _limit: u32) {}

    fn candidates_found(&self, _count: usize) {}

    fn excluding_replies(&self) {}

    fn eligible(&self, _count: usize) {}

    fn deleted(&self, _count: u64) {}
}

pub struct SilentProgress;

impl PruneProgress for SilentProgress {}
