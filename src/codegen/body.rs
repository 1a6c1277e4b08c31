use ahash::AHashSet;

use super::emitter::CodeWriter;
use crate::diagram::{BlockKind, Comparator, ConnectionKind, Diagram};

/// Emits the sequential body of one thread function by walking its diagram
/// from the entry block.
///
/// The walk carries a path-local visited set. Condition branches each receive
/// their own clone: branches may reconverge on the same tail, and one branch
/// emitting the tail must not suppress the other's emission.
pub(super) struct BodyBuilder<'a> {
    diagram: &'a Diagram,
}

impl<'a> BodyBuilder<'a> {
    pub(super) fn new(diagram: &'a Diagram) -> Self {
        Self { diagram }
    }

    pub(super) fn emit(&self, writer: &mut CodeWriter) {
        let mut visited = AHashSet::new();
        self.emit_from(&self.diagram.entry_block_id(), &mut visited, writer);
    }

    fn emit_from(&self, block_id: &str, visited: &mut AHashSet<String>, w: &mut CodeWriter) {
        if !visited.insert(block_id.to_string()) {
            return;
        }
        let Some(block) = self.diagram.block(block_id) else {
            return;
        };

        match block.kind {
            BlockKind::Assignment => {
                if let (Some(left), Some(right)) =
                    (block.get("leftVariable"), block.get("rightVariable"))
                {
                    w.line(&format!(
                        "{left}.store({right}.load(Ordering::SeqCst), Ordering::SeqCst);"
                    ));
                }
            }
            BlockKind::ConstantAssignment => {
                if let (Some(variable), Some(constant)) =
                    (block.get("variable"), block.get_int("constant"))
                {
                    w.line(&format!("{variable}.store({constant}, Ordering::SeqCst);"));
                }
            }
            BlockKind::Read => {
                if let Some(variable) = block.get("variable") {
                    w.line(&format!("println!(\"Enter value for {variable}:\");"));
                    w.line("let mut input = String::new();");
                    w.line("io::stdin().lock().read_line(&mut input).unwrap();");
                    w.line(&format!(
                        "{variable}.store(input.trim().parse().unwrap(), Ordering::SeqCst);"
                    ));
                }
            }
            BlockKind::Write => {
                if let Some(variable) = block.get("variable") {
                    w.line(&format!(
                        "println!(\"{{}}\", {variable}.load(Ordering::SeqCst));"
                    ));
                }
            }
            BlockKind::Condition => {
                // A condition with unreadable data ends this emission path.
                if let (Some(variable), Some(op), Some(constant)) = (
                    block.get("variable"),
                    block.get("operator"),
                    block.get_int("constant"),
                ) {
                    let comparator = Comparator::parse_or_default(op);
                    self.emit_branches(block_id, variable, comparator, constant, visited, w);
                }
                return;
            }
            BlockKind::End => return,
            // No statement of their own; control flow passes straight through.
            BlockKind::Start | BlockKind::Operation => {}
        }

        if let Some(next) = self.diagram.outgoing(block_id, ConnectionKind::Normal) {
            self.emit_from(&next.target_id, visited, w);
        }
    }

    fn emit_branches(
        &self,
        block_id: &str,
        variable: &str,
        comparator: Comparator,
        constant: i32,
        visited: &AHashSet<String>,
        w: &mut CodeWriter,
    ) {
        let true_target = self.branch_target(block_id, ConnectionKind::True);
        let false_target = self.branch_target(block_id, ConnectionKind::False);

        w.open(&format!(
            "if {variable}.load(Ordering::SeqCst) {} {constant}",
            comparator.symbol()
        ));
        let mut true_visited = visited.clone();
        self.emit_from(&true_target, &mut true_visited, w);
        w.else_open();
        let mut false_visited = visited.clone();
        self.emit_from(&false_target, &mut false_visited, w);
        w.close();
    }

    fn branch_target(&self, block_id: &str, kind: ConnectionKind) -> String {
        self.diagram
            .outgoing(block_id, kind)
            .map(|c| c.target_id.clone())
            .unwrap_or_else(|| "end".to_string())
    }
}
