use ahash::AHashSet;

use super::definition::{BlockKind, Program};

/// Collects every shared variable referenced anywhere in the program.
///
/// Scans the kind-specific property keys of every block; blocks with missing
/// keys contribute nothing. The result is a set, so block and diagram order
/// never affect it.
pub fn collect_shared_variables(program: &Program) -> AHashSet<String> {
    let mut variables = AHashSet::new();

    for diagram in &program.diagrams {
        for block in &diagram.blocks {
            match block.kind {
                BlockKind::Assignment => {
                    if let Some(left) = block.get("leftVariable") {
                        variables.insert(left.to_string());
                    }
                    if let Some(right) = block.get("rightVariable") {
                        variables.insert(right.to_string());
                    }
                }
                BlockKind::ConstantAssignment
                | BlockKind::Read
                | BlockKind::Write
                | BlockKind::Condition => {
                    if let Some(variable) = block.get("variable") {
                        variables.insert(variable.to_string());
                    }
                }
                BlockKind::Start | BlockKind::End | BlockKind::Operation => {}
            }
        }
    }

    variables
}
