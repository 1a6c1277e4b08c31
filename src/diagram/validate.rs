use ahash::AHashSet;

use super::definition::{Diagram, Program};
use super::variables::collect_shared_variables;
use crate::error::ValidationError;

/// Configurable size limits enforced before generation or testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum number of thread diagrams per program.
    pub max_threads: usize,
    /// Maximum number of blocks per diagram.
    pub max_blocks_per_thread: usize,
    /// Maximum number of distinct shared variables per program.
    pub max_shared_variables: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_threads: 100,
            max_blocks_per_thread: 100,
            max_shared_variables: 100,
        }
    }
}

/// Runs every fatal pre-run check: program size, per-diagram size, per-diagram
/// acyclicity and the shared-variable count.
pub fn validate_program(program: &Program, limits: &Limits) -> Result<(), ValidationError> {
    if program.diagrams.is_empty() {
        return Err(ValidationError::EmptyProgram);
    }
    if program.diagrams.len() > limits.max_threads {
        return Err(ValidationError::TooManyThreads {
            max: limits.max_threads,
        });
    }

    for (index, diagram) in program.diagrams.iter().enumerate() {
        if diagram.blocks.len() > limits.max_blocks_per_thread {
            return Err(ValidationError::TooManyBlocks {
                diagram: diagram.label(index),
                max: limits.max_blocks_per_thread,
            });
        }
        ensure_acyclic(diagram, index)?;
    }

    let variables = collect_shared_variables(program);
    if variables.len() > limits.max_shared_variables {
        return Err(ValidationError::TooManySharedVariables {
            count: variables.len(),
            max: limits.max_shared_variables,
        });
    }

    Ok(())
}

/// Rejects any directed cycle over the diagram's connections, self-loops
/// included. DFS from every block with a visited set and an on-stack set.
pub fn ensure_acyclic(diagram: &Diagram, index: usize) -> Result<(), ValidationError> {
    let mut visited: AHashSet<&str> = AHashSet::new();
    let mut on_stack: AHashSet<&str> = AHashSet::new();

    for block in &diagram.blocks {
        if visited.contains(block.id.as_str()) {
            continue;
        }
        if dfs_finds_cycle(diagram, &block.id, &mut visited, &mut on_stack) {
            return Err(ValidationError::CyclicDiagram {
                diagram: diagram.label(index),
            });
        }
    }
    Ok(())
}

/// Iterative DFS so deep chains cannot exhaust the call stack.
fn dfs_finds_cycle<'a>(
    diagram: &'a Diagram,
    start: &'a str,
    visited: &mut AHashSet<&'a str>,
    on_stack: &mut AHashSet<&'a str>,
) -> bool {
    enum Frame<'a> {
        Enter(&'a str),
        Leave(&'a str),
    }

    let mut stack = vec![Frame::Enter(start)];
    while let Some(frame) = stack.pop() {
        match frame {
            Frame::Enter(id) => {
                if on_stack.contains(id) {
                    return true;
                }
                if !visited.insert(id) {
                    continue;
                }
                on_stack.insert(id);
                stack.push(Frame::Leave(id));
                for connection in diagram.connections.iter().rev() {
                    if connection.source_id == id {
                        stack.push(Frame::Enter(&connection.target_id));
                    }
                }
            }
            Frame::Leave(id) => {
                on_stack.remove(id);
            }
        }
    }
    false
}
