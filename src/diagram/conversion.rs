use super::definition::Program;
use crate::error::ProgramConversionError;

/// A trait for custom diagram models that can be converted into a kousa
/// [`Program`].
///
/// This is the extension point for making kousa format-agnostic. A hosting
/// service that receives diagrams in its own wire format (a visual editor's
/// JSON, for instance) implements this trait on its request types to hand the
/// engine a canonical program.
///
/// # Example
///
/// ```rust,no_run
/// use kousa::diagram::{Block, BlockKind, Diagram, IntoProgram, Program};
/// use kousa::error::ProgramConversionError;
///
/// struct EditorNode { id: String, kind: String }
/// struct EditorRequest { threads: Vec<Vec<EditorNode>> }
///
/// impl IntoProgram for EditorRequest {
///     fn into_program(self) -> Result<Program, ProgramConversionError> {
///         let mut diagrams = Vec::new();
///         for nodes in self.threads {
///             let blocks = nodes
///                 .into_iter()
///                 .map(|n| {
///                     // Your logic to map editor kinds onto `BlockKind`.
///                     Block::new(n.id, BlockKind::Operation)
///                 })
///                 .collect();
///             diagrams.push(Diagram {
///                 name: None,
///                 blocks,
///                 connections: vec![], // Convert your edges here as well.
///             });
///         }
///         Ok(Program::new(diagrams))
///     }
/// }
/// ```
pub trait IntoProgram {
    /// Consumes the object and converts it into a kousa-compatible program.
    fn into_program(self) -> Result<Program, ProgramConversionError>;
}
