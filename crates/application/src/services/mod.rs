mod result_cache;
mod retention_evaluator;

pub use result_cache::ResultCache;
pub use retention_evaluator::RetentionPolicyEvaluator;
