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
use viaduct_model::TraceState;

/// All minimum-length traces discovered by a search, in discovery order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceSet {
    length: usize,
    traces: Vec<TraceState>,
}

impl TraceSet {
    /// Creates a trace set. Every trace must have the given length.
    pub fn new(length: usize, traces: Vec<TraceState>) -> Self {
        debug_assert!(
            traces.iter().all(|t| t.length() == length),
            "called TraceSet::new with traces of mixed length"
        );
        Self { length, traces }
    }

    /// Returns the common length of the traces.
    #[inline]
    pub fn length(&self) -> usize {
        self.length
    }

    /// Returns the traces in discovery order.
    #[inline]
    pub fn traces(&self) -> &[TraceState] {
        &self.traces
    }

    /// Returns the number of traces in the set.
    #[inline]
    pub fn len(&self) -> usize {
        self.traces.len()
    }

    /// Returns `true` if the set holds no traces.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.traces.is_empty()
    }

    /// Returns an iterator over the traces in discovery order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, TraceState> {
        self.traces.iter()
    }
}

impl<'a> IntoIterator for &'a TraceSet {
    type Item = &'a TraceState;
    type IntoIter = std::slice::Iter<'a, TraceState>;

    fn into_iter(self) -> Self::IntoIter {
        self.traces.iter()
    }
}

/// What the search concluded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceResult {
    /// At least one trace connects the components; all minimum-length
    /// traces are enclosed.
    Complete(TraceSet),
    /// No trace connects the components.
    NoConnection,
}

impl std::fmt::Display for TraceResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TraceResult::Complete(set) => {
                write!(f, "Complete(length={}, traces={})", set.length(), set.len())
            }
            TraceResult::NoConnection => write!(f, "NoConnection"),
        }
    }
}

/// Why the search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    /// The frontier was exhausted after exploration.
    FrontierExhausted,
    /// The start component had no routable neighbor; the frontier was
    /// empty from the outset and nothing was explored.
    StartIsolated,
}

impl std::fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TerminationReason::FrontierExhausted => write!(f, "Frontier Exhausted"),
            TerminationReason::StartIsolated => write!(f, "Start Isolated"),
        }
    }
}

/// The complete outcome of one search run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceOutcome {
    /// What the search concluded.
    pub result: TraceResult,
    /// Why the search stopped.
    pub reason: TerminationReason,
    /// Statistics collected during the run.
    pub statistics: SearchStatistics,
}

impl TraceOutcome {
    #[inline]
    pub fn new(
        result: TraceResult,
        reason: TerminationReason,
        statistics: SearchStatistics,
    ) -> Self {
        Self {
            result,
            reason,
            statistics,
        }
    }

    /// Returns `true` if at least one connecting trace was found.
    #[inline]
    pub fn has_connection(&self) -> bool {
        matches!(self.result, TraceResult::Complete(_))
    }

    /// Returns the minimum trace length, if a connection exists.
    #[inline]
    pub fn best_length(&self) -> Option<usize> {
        match &self.result {
            TraceResult::Complete(set) => Some(set.length()),
            TraceResult::NoConnection => None,
        }
    }

    /// Returns the set of minimum-length traces, if a connection exists.
    #[inline]
    pub fn traces(&self) -> Option<&TraceSet> {
        match &self.result {
            TraceResult::Complete(set) => Some(set),
            TraceResult::NoConnection => None,
        }
    }
}

impl std::fmt::Display for TraceOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.result, self.reason)
    }
}
