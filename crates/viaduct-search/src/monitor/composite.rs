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
use viaduct_model::{Board, TraceState};

/// Fans every hook out to a collection of monitors, in insertion order.
#[derive(Default)]
pub struct CompositeMonitor {
    monitors: Vec<Box<dyn TraceMonitor>>,
}

impl CompositeMonitor {
    /// Creates an empty composite.
    #[inline]
    pub fn new() -> Self {
        Self {
            monitors: Vec::new(),
        }
    }

    /// Adds a monitor to the composite.
    #[inline]
    pub fn push(&mut self, monitor: Box<dyn TraceMonitor>) {
        self.monitors.push(monitor);
    }

    /// Builder-style variant of [`push`](CompositeMonitor::push).
    #[inline]
    pub fn with(mut self, monitor: Box<dyn TraceMonitor>) -> Self {
        self.monitors.push(monitor);
        self
    }

    /// Returns the number of registered monitors.
    #[inline]
    pub fn len(&self) -> usize {
        self.monitors.len()
    }

    /// Returns `true` if no monitors are registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.monitors.is_empty()
    }
}

impl TraceMonitor for CompositeMonitor {
    fn name(&self) -> &str {
        "CompositeMonitor"
    }

    fn on_enter_search(&mut self, board: &Board) {
        for monitor in &mut self.monitors {
            monitor.on_enter_search(board);
        }
    }

    fn on_state(&mut self, state: &TraceState, stats: &SearchStatistics) {
        for monitor in &mut self.monitors {
            monitor.on_state(state, stats);
        }
    }

    fn on_solution(&mut self, state: &TraceState, stats: &SearchStatistics) {
        for monitor in &mut self.monitors {
            monitor.on_solution(state, stats);
        }
    }

    fn on_exit_search(&mut self, stats: &SearchStatistics) {
        for monitor in &mut self.monitors {
            monitor.on_exit_search(stats);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::CompositeMonitor;
    use crate::monitor::trace_monitor::TraceMonitor;
    use crate::stats::SearchStatistics;
    use std::cell::Cell;
    use std::rc::Rc;
    use viaduct_model::{Board, Position, TraceState};

    struct CountingMonitor {
        calls: Rc<Cell<u32>>,
    }

    impl TraceMonitor for CountingMonitor {
        fn name(&self) -> &str {
            "CountingMonitor"
        }

        fn on_state(&mut self, _state: &TraceState, _stats: &SearchStatistics) {
            self.calls.set(self.calls.get() + 1);
        }
    }

    #[test]
    fn test_fans_out_to_all_monitors() {
        let calls = Rc::new(Cell::new(0));
        let mut composite = CompositeMonitor::new()
            .with(Box::new(CountingMonitor {
                calls: Rc::clone(&calls),
            }))
            .with(Box::new(CountingMonitor {
                calls: Rc::clone(&calls),
            }));
        assert_eq!(composite.len(), 2);
        assert!(!composite.is_empty());

        let board: Board = "1 2\n12".parse().expect("valid board");
        let state = TraceState::first_step(&board, Position::new(0, 1));
        let stats = SearchStatistics::new();
        composite.on_enter_search(&board);
        composite.on_state(&state, &stats);
        composite.on_exit_search(&stats);
        assert_eq!(calls.get(), 2);
    }
}
