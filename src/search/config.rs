//! Contains [`GraspConfig`], the grouped set of tunable constants for a GRASP+ILS run.

/// The reference number of GRASP iterations.
pub const DEFAULT_GRASP_ITERATIONS: u32 = 10;

/// Tunable constants for a GRASP+ILS run, grouped into one builder-style struct
/// (`with_*` setters returning `Self`) rather than free-floating compile-time constants,
/// since a batch driver over many instances wants to vary them per run.
pub struct GraspConfig {
    grasp_iterations: u32,
    alpha: f64,
    reinsertion_max_block_len: usize,
    two_opt_max_segment_len: usize,
    on_iteration: Option<Box<dyn Fn(u32, f64)>>,
}

impl GraspConfig {
    /// Creates a [`GraspConfig`] with the reference defaults: 10 GRASP iterations, `alpha = 0.6`,
    /// reinsertion block cap 10, 2-opt segment cap 10, no iteration callback.
    pub fn new() -> GraspConfig {
        GraspConfig {
            grasp_iterations: DEFAULT_GRASP_ITERATIONS,
            alpha: crate::construction::DEFAULT_ALPHA,
            reinsertion_max_block_len: crate::neighborhoods::reinsertion::DEFAULT_MAX_BLOCK_LEN,
            two_opt_max_segment_len: crate::neighborhoods::two_opt::DEFAULT_MAX_SEGMENT_LEN,
            on_iteration: None,
        }
    }

    /// Overrides the number of GRASP iterations.
    pub fn with_grasp_iterations(mut self, grasp_iterations: u32) -> Self {
        self.grasp_iterations = grasp_iterations;
        self
    }

    /// Overrides the RCL greediness parameter `alpha`.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Overrides the reinsertion block-length cap.
    pub fn with_reinsertion_max_block_len(mut self, max_block_len: usize) -> Self {
        self.reinsertion_max_block_len = max_block_len;
        self
    }

    /// Overrides the 2-opt segment-length cap.
    pub fn with_two_opt_max_segment_len(mut self, max_segment_len: usize) -> Self {
        self.two_opt_max_segment_len = max_segment_len;
        self
    }

    /// Sets a callback invoked once per GRASP iteration with the iteration index (1-based) and
    /// the best penalty seen so far. `None` (the default) runs silently.
    pub fn with_on_iteration(mut self, on_iteration: Box<dyn Fn(u32, f64)>) -> Self {
        self.on_iteration = Some(on_iteration);
        self
    }

    pub(crate) fn grasp_iterations(&self) -> u32 {
        self.grasp_iterations
    }

    pub(crate) fn alpha(&self) -> f64 {
        self.alpha
    }

    pub(crate) fn reinsertion_max_block_len(&self) -> usize {
        self.reinsertion_max_block_len
    }

    pub(crate) fn two_opt_max_segment_len(&self) -> usize {
        self.two_opt_max_segment_len
    }

    pub(crate) fn notify_iteration(&self, iteration: u32, best_penalty: f64) {
        if let Some(callback) = &self.on_iteration {
            callback(iteration, best_penalty);
        }
    }
}

impl Default for GraspConfig {
    fn default() -> Self {
        GraspConfig::new()
    }
}
