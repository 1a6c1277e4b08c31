use crate::diagram::Program;

/// Enumerates every interleaving of the threads' abstract operations.
///
/// Thread `i` contributes one operation per block currently in its diagram —
/// an upper bound independent of which branch actually executes at runtime. A
/// schedule is a total order of thread indices in which every thread appears
/// exactly as often as its bound. Enumeration is an explicit-stack DFS that
/// yields schedules in deterministic, lexicographically ascending order.
///
/// The total count is `(ΣNᵢ)! / Π(Nᵢ!)` and grows exponentially; there is no
/// internal cap, so callers bound the iteration themselves (the test harness
/// does so with its cancellation token).
pub struct ScheduleGenerator {
    bounds: Vec<usize>,
    stack: Vec<SearchNode>,
}

#[derive(Clone)]
struct SearchNode {
    executed: Vec<usize>,
    path: Vec<usize>,
}

impl ScheduleGenerator {
    /// Bounds taken from the program: one operation per block per diagram.
    pub fn new(program: &Program) -> Self {
        Self::with_bounds(program.diagrams.iter().map(|d| d.blocks.len()).collect())
    }

    /// Raw per-thread operation bounds. All-zero bounds yield exactly one
    /// empty schedule.
    pub fn with_bounds(bounds: Vec<usize>) -> Self {
        let root = SearchNode {
            executed: vec![0; bounds.len()],
            path: Vec::new(),
        };
        Self {
            bounds,
            stack: vec![root],
        }
    }

    fn is_complete(&self, node: &SearchNode) -> bool {
        node.executed
            .iter()
            .zip(&self.bounds)
            .all(|(done, bound)| done >= bound)
    }
}

impl Iterator for ScheduleGenerator {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.stack.pop() {
            if self.is_complete(&node) {
                return Some(node.path);
            }
            // Children pushed in descending thread order, so the lowest
            // runnable thread index pops first.
            for thread in (0..self.bounds.len()).rev() {
                if node.executed[thread] < self.bounds[thread] {
                    let mut child = node.clone();
                    child.executed[thread] += 1;
                    child.path.push(thread);
                    self.stack.push(child);
                }
            }
        }
        None
    }
}
