//! Per-run configuration passed to `CompiledStateGraph::invoke`.

/// Default step ceiling when none is configured.
pub const DEFAULT_STEP_LIMIT: usize = 25;

/// Config for a single invoke.
///
/// `step_limit` is the maximum number of node executions; reaching it while the graph
/// is still running aborts with `RunError::StepLimitExceeded`. A limit of 0 aborts
/// before the entry node runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub step_limit: usize,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            step_limit: DEFAULT_STEP_LIMIT,
        }
    }
}

impl RunConfig {
    pub fn with_step_limit(step_limit: usize) -> Self {
        Self { step_limit }
    }
}

impl From<&env_config::GraphSettings> for RunConfig {
    fn from(settings: &env_config::GraphSettings) -> Self {
        Self {
            step_limit: settings.step_limit,
        }
    }
}
