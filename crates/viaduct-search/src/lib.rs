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

//! # Viaduct Search
//!
//! The shortest-trace search engine for the Viaduct tracing ecosystem. The
//! engine explores a validated board by expanding immutable trace states
//! drawn from a [`StateStore`] frontier whose discipline, LIFO (stack,
//! depth-first) or FIFO (queue, breadth-first), is fixed at construction.
//! Both disciplines find the true minimum trace length because the engine
//! compares lengths explicitly; they differ only in how much work is wasted
//! on longer traces before the optimum is known and in the discovery order
//! of equal-length solutions.
//!
//! The engine is single-threaded and synchronous, raises no errors of its
//! own, and reports a structured [`TraceOutcome`] with statistics. Progress
//! is observable through the [`TraceMonitor`] trait; monitors observe only
//! and cannot abort a search.

pub mod frontier;
pub mod monitor;
pub mod result;
pub mod solver;
pub mod stats;

pub use frontier::{Discipline, StateStore};
pub use monitor::composite::CompositeMonitor;
pub use monitor::log::LogMonitor;
pub use monitor::trace_monitor::{NoOpMonitor, TraceMonitor};
pub use result::{TerminationReason, TraceOutcome, TraceResult, TraceSet};
pub use solver::TraceSolver;
pub use stats::{SearchStatistics, SearchStatisticsBuilder};
