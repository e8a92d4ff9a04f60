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

//! # Trace Solver
//!
//! The search engine: a state machine over one mutable frontier and two
//! accumulators, the best known length and the set of minimum-length
//! traces.
//!
//! Seeding stores a length-1 trace for every routable neighbor of the
//! start component, in the fixed up/down/left/right order. The main loop
//! retrieves one state at a time: states longer than the best known length
//! are discarded without expansion (a per-state prune; descendants are
//! simply never generated, so the frontier discipline still shapes total
//! work); complete traces update the accumulators (a strictly shorter
//! trace clears the set, an equal one joins it); everything else is
//! expanded one child per routable neighbor.
//!
//! The engine assumes a previously validated [`Board`] and raises no
//! errors of its own.

use crate::frontier::StateStore;
use crate::monitor::trace_monitor::TraceMonitor;
use crate::result::{TerminationReason, TraceOutcome, TraceResult, TraceSet};
use crate::stats::SearchStatistics;
use log::debug;
use std::time::Instant;
use viaduct_collections::IndexedList;
use viaduct_model::{Board, Direction, TraceState};

/// The shortest-trace search engine over a fixed-discipline frontier.
#[derive(Debug, Clone)]
pub struct TraceSolver<L>
where
    L: IndexedList<TraceState>,
{
    frontier: StateStore<TraceState, L>,
}

impl<L> TraceSolver<L>
where
    L: IndexedList<TraceState>,
{
    /// Creates a solver that draws its exploration order from `frontier`.
    #[inline]
    pub fn new(frontier: StateStore<TraceState, L>) -> Self {
        Self { frontier }
    }

    /// Runs the search to completion and returns the outcome. The frontier
    /// is empty afterwards, so the solver can be reused.
    pub fn solve<M>(&mut self, board: &Board, monitor: &mut M) -> TraceOutcome
    where
        M: TraceMonitor + ?Sized,
    {
        let start_time = Instant::now();
        monitor.on_enter_search(board);

        let mut stats = SearchStatistics::new();
        let mut best: Option<usize> = None;
        let mut traces: Vec<TraceState> = Vec::new();

        let origin = board.start();
        for direction in Direction::ALL {
            if let Some(neighbor) = origin.step(direction) {
                if board.can_enter(neighbor) {
                    self.frontier.store(TraceState::first_step(board, neighbor));
                    stats.states_stored += 1;
                }
            }
        }
        let seeded = !self.frontier.is_empty();
        stats.max_frontier_len = self.frontier.len();
        debug!(
            "seeded {} initial state(s) under {} discipline",
            stats.states_stored,
            self.frontier.discipline()
        );

        while let Some(current) = self.frontier.retrieve() {
            monitor.on_state(&current, &stats);

            if best.is_some_and(|length| current.length() > length) {
                stats.states_pruned += 1;
                continue;
            }

            if current.is_complete() {
                if best.map_or(true, |length| current.length() < length) {
                    traces.clear();
                    best = Some(current.length());
                    stats.best_length = best;
                    debug!("new best length {}", current.length());
                }
                stats.solutions_found += 1;
                monitor.on_solution(&current, &stats);
                traces.push(current);
            } else {
                stats.states_expanded += 1;
                for neighbor in current.next_steps() {
                    self.frontier.store(current.extend(neighbor));
                    stats.states_stored += 1;
                }
                stats.max_frontier_len = stats.max_frontier_len.max(self.frontier.len());
            }
        }

        stats.solve_duration = start_time.elapsed();
        monitor.on_exit_search(&stats);

        let reason = if seeded {
            TerminationReason::FrontierExhausted
        } else {
            TerminationReason::StartIsolated
        };
        let result = match best {
            Some(length) => TraceResult::Complete(TraceSet::new(length, traces)),
            None => TraceResult::NoConnection,
        };
        TraceOutcome::new(result, reason, stats)
    }
}
