use ahash::AHashMap;

use super::console::Console;
use crate::diagram::{
    Block, BlockKind, Comparator, ConnectionKind, Diagram, Program, collect_shared_variables,
};

/// Replays schedules against a program.
///
/// A `Simulator` is built once per program and precomputes per-thread lookup
/// tables; every [`replay`](Simulator::replay) then runs against its own
/// private copy of the shared state and its own console, so runs never
/// influence each other.
pub struct Simulator<'a> {
    threads: Vec<ThreadContext<'a>>,
    variables: Vec<String>,
}

impl<'a> Simulator<'a> {
    pub fn new(program: &'a Program) -> Self {
        Self {
            threads: program.diagrams.iter().map(ThreadContext::new).collect(),
            variables: collect_shared_variables(program).into_iter().collect(),
        }
    }

    /// Replays one schedule under an operation budget and returns the output
    /// trace.
    ///
    /// A schedule entry for an already-completed thread is a free no-op: the
    /// budget counts useful executions, not schedule symbols. Execution halts
    /// once `limit` useful steps have run, even if entries remain.
    pub fn replay(&self, schedule: &[usize], limit: usize, inputs: &[i32]) -> Vec<i32> {
        let mut state: AHashMap<String, i32> =
            self.variables.iter().map(|v| (v.clone(), 0)).collect();
        let mut console = Console::new(inputs);
        let mut cursors: Vec<ThreadCursor> =
            self.threads.iter().map(ThreadContext::cursor).collect();

        let mut executed = 0;
        for &thread in schedule {
            if executed >= limit {
                break;
            }
            let Some(cursor) = cursors.get_mut(thread) else {
                continue;
            };
            if cursor.completed {
                continue;
            }
            self.threads[thread].step(cursor, &mut state, &mut console);
            executed += 1;
        }
        console.into_outputs()
    }
}

/// Precomputed lookup tables for one diagram: blocks by id and the first
/// outgoing connection per kind.
struct ThreadContext<'a> {
    entry: String,
    blocks: AHashMap<&'a str, &'a Block>,
    normal: AHashMap<&'a str, &'a str>,
    on_true: AHashMap<&'a str, &'a str>,
    on_false: AHashMap<&'a str, &'a str>,
}

/// Per-run mutable thread state: the program counter and a completed flag.
struct ThreadCursor {
    current: String,
    completed: bool,
}

impl<'a> ThreadContext<'a> {
    fn new(diagram: &'a Diagram) -> Self {
        let mut blocks = AHashMap::new();
        for block in &diagram.blocks {
            blocks.entry(block.id.as_str()).or_insert(block);
        }

        let mut normal = AHashMap::new();
        let mut on_true = AHashMap::new();
        let mut on_false = AHashMap::new();
        for connection in &diagram.connections {
            let edges = match connection.kind {
                ConnectionKind::Normal => &mut normal,
                ConnectionKind::True => &mut on_true,
                ConnectionKind::False => &mut on_false,
            };
            // First matching connection wins, as in the emitted code.
            edges
                .entry(connection.source_id.as_str())
                .or_insert(connection.target_id.as_str());
        }

        Self {
            entry: diagram.entry_block_id(),
            blocks,
            normal,
            on_true,
            on_false,
        }
    }

    fn cursor(&self) -> ThreadCursor {
        ThreadCursor {
            current: self.entry.clone(),
            completed: false,
        }
    }

    /// Executes exactly one block at the cursor's position and advances it.
    fn step(
        &self,
        cursor: &mut ThreadCursor,
        state: &mut AHashMap<String, i32>,
        console: &mut Console,
    ) {
        if cursor.completed {
            return;
        }
        let Some(&block) = self.blocks.get(cursor.current.as_str()) else {
            cursor.completed = true;
            return;
        };

        match block.kind {
            BlockKind::Assignment => {
                if let (Some(left), Some(right)) =
                    (block.get("leftVariable"), block.get("rightVariable"))
                {
                    if let Some(&value) = state.get(right) {
                        state.insert(left.to_string(), value);
                    }
                }
            }
            BlockKind::ConstantAssignment => {
                if let (Some(variable), Some(constant)) =
                    (block.get("variable"), block.get_int("constant"))
                {
                    state.insert(variable.to_string(), constant);
                }
            }
            BlockKind::Read => {
                if let Some(variable) = block.get("variable") {
                    let value = console.read_input();
                    state.insert(variable.to_string(), value);
                }
            }
            BlockKind::Write => {
                if let Some(variable) = block.get("variable") {
                    if let Some(&value) = state.get(variable) {
                        console.write_output(value);
                    }
                }
            }
            BlockKind::Condition => {
                self.step_condition(block, cursor, state);
                return;
            }
            BlockKind::End => {
                cursor.completed = true;
                return;
            }
            // No effect on state or output; control passes through.
            BlockKind::Start | BlockKind::Operation => {}
        }

        match self.normal.get(cursor.current.as_str()) {
            Some(next) => cursor.current = next.to_string(),
            None => cursor.completed = true,
        }
    }

    /// Chooses the True or False edge; the branch decision itself does not
    /// cost an extra step.
    fn step_condition(
        &self,
        block: &Block,
        cursor: &mut ThreadCursor,
        state: &AHashMap<String, i32>,
    ) {
        if let (Some(variable), Some(op), Some(constant)) = (
            block.get("variable"),
            block.get("operator"),
            block.get_int("constant"),
        ) {
            if let Some(&value) = state.get(variable) {
                let taken = Comparator::parse_or_default(op).eval(value, constant);
                let edges = if taken { &self.on_true } else { &self.on_false };
                match edges.get(cursor.current.as_str()) {
                    Some(next) => cursor.current = next.to_string(),
                    None => cursor.completed = true,
                }
                return;
            }
        }
        // Unreadable condition data ends the thread.
        cursor.completed = true;
    }
}
