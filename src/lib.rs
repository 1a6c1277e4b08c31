//! # Kousa - Thread Diagram Code Generation and Interleaving Testing
//!
//! **Kousa** turns node-based flowchart diagrams — one diagram per thread, all
//! threads sharing a set of integer variables — into two things: the sequential
//! source code each diagram corresponds to, and a verdict on whether the
//! concurrent program behaves as expected under *every* possible interleaving
//! of its instructions.
//!
//! ## Core Workflow
//!
//! The engine is format-agnostic. It operates on a canonical model of a
//! "program": an ordered list of [`Diagram`](diagram::Diagram)s over one shared
//! variable namespace. The primary workflow is:
//!
//! 1.  **Load Your Data**: Parse your diagram format (e.g. the JSON your visual
//!     editor produces) into your own Rust structs.
//! 2.  **Convert to Kousa's Model**: Implement the
//!     [`IntoProgram`](diagram::IntoProgram) trait for your structs, or build
//!     [`Program`](diagram::Program) values directly.
//! 3.  **Generate**: Use [`CodeGenerator`](codegen::CodeGenerator) to translate
//!     every diagram into a sequential thread function plus a launcher.
//! 4.  **Test**: Use [`TestHarness`](harness::TestHarness) to replay every
//!     interleaving of the threads' operations against a
//!     [`TestCase`](harness::TestCase) and aggregate pass rates per operation
//!     budget.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use kousa::prelude::*;
//!
//! fn main() -> Result<()> {
//!     // One thread: x = 5, then print x.
//!     let mut assign = Block::new("b1", BlockKind::ConstantAssignment);
//!     assign.data.insert("variable".to_string(), "x".to_string());
//!     assign.data.insert("constant".to_string(), "5".to_string());
//!     let mut write = Block::new("b2", BlockKind::Write);
//!     write.data.insert("variable".to_string(), "x".to_string());
//!
//!     let diagram = Diagram {
//!         name: None,
//!         blocks: vec![assign, write],
//!         connections: vec![Connection::new("c1", "b1", "b2", ConnectionKind::Normal)],
//!     };
//!     let program = Program::new(vec![diagram]);
//!
//!     // Translate the diagrams into a runnable Rust program.
//!     let generator = CodeGenerator::builder(program.clone()).build();
//!     let source = generator.generate()?;
//!     println!("{source}");
//!
//!     // Exhaustively test every interleaving against the expected trace.
//!     let test = TestCase {
//!         inputs: vec![],
//!         expected_outputs: vec![5],
//!     };
//!     let harness = TestHarness::builder().build();
//!     let report = harness.run(&program, &test, &CancelToken::new())?;
//!
//!     println!(
//!         "{}/{} interleavings matched",
//!         report.successful_paths, report.total_paths_tested
//!     );
//!     Ok(())
//! }
//! ```

pub mod codegen;
pub mod diagram;
pub mod error;
pub mod harness;
pub mod prelude;
pub mod sim;
