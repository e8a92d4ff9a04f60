// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use crate::stats::SearchStatistics;
use viaduct_model::{Board, TraceState};

/// Observer hooks for a running search.
///
/// All hooks default to no-ops so implementations override only what they
/// care about. Monitors observe; they cannot influence the search.
pub trait TraceMonitor {
    /// A short name for diagnostics.
    fn name(&self) -> &str;

    /// Called once before the frontier is seeded.
    fn on_enter_search(&mut self, board: &Board) {
        let _ = board;
    }

    /// Called for every state retrieved from the frontier, before it is
    /// pruned, accepted, or expanded.
    fn on_state(&mut self, state: &TraceState, stats: &SearchStatistics) {
        let _ = (state, stats);
    }

    /// Called for every complete trace accepted into the best set.
    fn on_solution(&mut self, state: &TraceState, stats: &SearchStatistics) {
        let _ = (state, stats);
    }

    /// Called once after the frontier is exhausted.
    fn on_exit_search(&mut self, stats: &SearchStatistics) {
        let _ = stats;
    }
}

impl std::fmt::Debug for dyn TraceMonitor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TraceMonitor({})", self.name())
    }
}

/// A monitor that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpMonitor;

impl TraceMonitor for NoOpMonitor {
    fn name(&self) -> &str {
        "NoOpMonitor"
    }
}
