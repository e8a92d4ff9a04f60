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

use crate::monitor::trace_monitor::TraceMonitor;
use crate::stats::SearchStatistics;
use std::time::{Duration, Instant};
use viaduct_model::{Board, TraceState};

/// A monitor that prints an interval-throttled progress table to stdout.
///
/// Checking the wall clock on every retrieved state would dominate small
/// searches, so the clock is consulted only when the retrieval count
/// matches `clock_check_mask`.
#[derive(Debug, Clone)]
pub struct LogMonitor {
    start_time: Instant,
    last_log_time: Instant,
    log_interval: Duration,
    clock_check_mask: u64,
    states_seen: u64,
}

impl LogMonitor {
    /// Creates a monitor that prints at most once per `log_interval` and
    /// checks the clock every `clock_check_mask + 1` states
    /// (`clock_check_mask` should be a power of two minus one).
    pub fn new(log_interval: Duration, clock_check_mask: u64) -> Self {
        let now = Instant::now();
        Self {
            start_time: now,
            last_log_time: now,
            log_interval,
            clock_check_mask,
            states_seen: 0,
        }
    }

    fn print_header(&self) {
        println!(
            "{:<9} | {:<12} | {:<12} | {:<10} | {:<10} | {:<11}",
            "Elapsed", "Stored", "Expanded", "Pruned", "Frontier", "Best Length"
        );
        println!("{}", "-".repeat(78));
    }

    fn log_line(&mut self, stats: &SearchStatistics) {
        let elapsed = self.start_time.elapsed().as_secs_f32();
        let frontier = stats
            .states_stored
            .saturating_sub(stats.states_expanded + stats.states_pruned + stats.solutions_found);
        let best = match stats.best_length {
            Some(length) => length.to_string(),
            None => "-".to_string(),
        };
        println!(
            "{:<9.2} | {:<12} | {:<12} | {:<10} | {:<10} | {:<11}",
            elapsed, stats.states_stored, stats.states_expanded, stats.states_pruned, frontier, best
        );
    }
}

impl Default for LogMonitor {
    fn default() -> Self {
        Self::new(Duration::from_millis(500), 0xFF)
    }
}

impl TraceMonitor for LogMonitor {
    fn name(&self) -> &str {
        "LogMonitor"
    }

    fn on_enter_search(&mut self, board: &Board) {
        println!(
            "searching {}x{} board, start {}, end {}",
            board.rows(),
            board.cols(),
            board.start(),
            board.end()
        );
        self.print_header();
    }

    fn on_state(&mut self, _state: &TraceState, stats: &SearchStatistics) {
        self.states_seen += 1;
        if self.states_seen & self.clock_check_mask != 0 {
            return;
        }
        let now = Instant::now();
        if now.duration_since(self.last_log_time) >= self.log_interval {
            self.last_log_time = now;
            self.log_line(stats);
        }
    }

    fn on_solution(&mut self, state: &TraceState, _stats: &SearchStatistics) {
        println!(
            "complete trace found: length {} at {}",
            state.length(),
            state.position()
        );
    }

    fn on_exit_search(&mut self, stats: &SearchStatistics) {
        self.log_line(stats);
        print!("{}", stats);
    }
}
