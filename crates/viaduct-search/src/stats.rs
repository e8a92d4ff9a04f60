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

/// Statistics collected while a search runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchStatistics {
    /// Number of states pushed onto the frontier.
    pub states_stored: u64,
    /// Number of states expanded into children.
    pub states_expanded: u64,
    /// Number of states discarded for exceeding the best known length.
    pub states_pruned: u64,
    /// Number of complete traces accepted into the best set (including
    /// ones later displaced by a strictly shorter trace).
    pub solutions_found: u64,
    /// Best trace length known so far, if any.
    pub best_length: Option<usize>,
    /// Largest number of states the frontier held at once.
    pub max_frontier_len: usize,
    /// Total duration of the search.
    pub solve_duration: std::time::Duration,
}

impl SearchStatistics {
    /// Creates zeroed statistics.
    #[inline]
    pub fn new() -> Self {
        Self {
            states_stored: 0,
            states_expanded: 0,
            states_pruned: 0,
            solutions_found: 0,
            best_length: None,
            max_frontier_len: 0,
            solve_duration: std::time::Duration::ZERO,
        }
    }
}

impl Default for SearchStatistics {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SearchStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Search Statistics:")?;
        writeln!(f, "  States Stored: {}", self.states_stored)?;
        writeln!(f, "  States Expanded: {}", self.states_expanded)?;
        writeln!(f, "  States Pruned: {}", self.states_pruned)?;
        writeln!(f, "  Solutions Found: {}", self.solutions_found)?;
        match self.best_length {
            Some(length) => writeln!(f, "  Best Length: {}", length)?,
            None => writeln!(f, "  Best Length: none")?,
        }
        writeln!(f, "  Max Frontier Length: {}", self.max_frontier_len)?;
        writeln!(
            f,
            "  Solve Duration (secs): {:.3}",
            self.solve_duration.as_secs_f64()
        )
    }
}

/// Builder for [`SearchStatistics`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchStatisticsBuilder {
    stats: SearchStatistics,
}

impl Default for SearchStatisticsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchStatisticsBuilder {
    /// Creates a builder with zeroed values.
    #[inline]
    pub fn new() -> Self {
        Self {
            stats: SearchStatistics::new(),
        }
    }

    /// Sets the number of states stored.
    #[inline]
    pub fn states_stored(mut self, states_stored: u64) -> Self {
        self.stats.states_stored = states_stored;
        self
    }

    /// Sets the number of states expanded.
    #[inline]
    pub fn states_expanded(mut self, states_expanded: u64) -> Self {
        self.stats.states_expanded = states_expanded;
        self
    }

    /// Sets the number of states pruned.
    #[inline]
    pub fn states_pruned(mut self, states_pruned: u64) -> Self {
        self.stats.states_pruned = states_pruned;
        self
    }

    /// Sets the number of solutions found.
    #[inline]
    pub fn solutions_found(mut self, solutions_found: u64) -> Self {
        self.stats.solutions_found = solutions_found;
        self
    }

    /// Sets the best known trace length.
    #[inline]
    pub fn best_length(mut self, best_length: Option<usize>) -> Self {
        self.stats.best_length = best_length;
        self
    }

    /// Sets the maximum frontier length.
    #[inline]
    pub fn max_frontier_len(mut self, max_frontier_len: usize) -> Self {
        self.stats.max_frontier_len = max_frontier_len;
        self
    }

    /// Sets the total solve duration.
    #[inline]
    pub fn solve_duration(mut self, solve_duration: std::time::Duration) -> Self {
        self.stats.solve_duration = solve_duration;
        self
    }

    /// Builds the statistics.
    #[inline]
    pub fn build(self) -> SearchStatistics {
        self.stats
    }
}
