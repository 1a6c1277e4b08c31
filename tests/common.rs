//! Common test utilities for building diagrams and programs.
use kousa::prelude::*;

/// Builds a block with the given data properties.
#[allow(dead_code)]
pub fn block(id: &str, kind: BlockKind, data: &[(&str, &str)]) -> Block {
    let mut block = Block::new(id, kind);
    for (key, value) in data {
        block.data.insert((*key).to_string(), (*value).to_string());
    }
    block
}

#[allow(dead_code)]
pub fn connection(id: &str, source: &str, target: &str, kind: ConnectionKind) -> Connection {
    Connection::new(id, source, target, kind)
}

#[allow(dead_code)]
pub fn diagram(blocks: Vec<Block>, connections: Vec<Connection>) -> Diagram {
    Diagram {
        name: None,
        blocks,
        connections,
    }
}

/// One thread: `x = 5` then `print x`.
#[allow(dead_code)]
pub fn constant_write_program() -> Program {
    Program::new(vec![diagram(
        vec![
            block(
                "b1",
                BlockKind::ConstantAssignment,
                &[("variable", "x"), ("constant", "5")],
            ),
            block("b2", BlockKind::Write, &[("variable", "x")]),
        ],
        vec![connection("c1", "b1", "b2", ConnectionKind::Normal)],
    )])
}

/// Two threads, each `read v` then `print v`, over one shared `v`.
#[allow(dead_code)]
pub fn read_write_pair_program() -> Program {
    let thread = |prefix: &str| {
        diagram(
            vec![
                block(
                    &format!("{prefix}-read"),
                    BlockKind::Read,
                    &[("variable", "v")],
                ),
                block(
                    &format!("{prefix}-write"),
                    BlockKind::Write,
                    &[("variable", "v")],
                ),
            ],
            vec![connection(
                &format!("{prefix}-c"),
                &format!("{prefix}-read"),
                &format!("{prefix}-write"),
                ConnectionKind::Normal,
            )],
        )
    };
    Program::new(vec![thread("t1"), thread("t2")])
}

/// One thread: `x = 5`, branch on `x <op> constant`, True edge to `print x`.
/// The False side is left unconnected.
#[allow(dead_code)]
pub fn conditional_write_program(operator: &str, constant: &str) -> Program {
    Program::new(vec![diagram(
        vec![
            block(
                "set",
                BlockKind::ConstantAssignment,
                &[("variable", "x"), ("constant", "5")],
            ),
            block(
                "branch",
                BlockKind::Condition,
                &[("variable", "x"), ("operator", operator), ("constant", constant)],
            ),
            block("out", BlockKind::Write, &[("variable", "x")]),
        ],
        vec![
            connection("c1", "set", "branch", ConnectionKind::Normal),
            connection("c2", "branch", "out", ConnectionKind::True),
        ],
    )])
}
