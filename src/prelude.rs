//! Prelude module for convenient imports
//!
//! Re-exports the most commonly used types from the kousa crate. Import this
//! module to get access to the core functionality without having to import
//! each type individually.
//!
//! # Example
//!
//! ```rust,no_run
//! use kousa::prelude::*;
//!
//! # fn run_example(program: Program) -> Result<()> {
//! let generator = CodeGenerator::builder(program.clone()).build();
//! let source = generator.generate()?;
//!
//! let harness = TestHarness::builder().build();
//! let report = harness.run(&program, &TestCase::default(), &CancelToken::new())?;
//! println!("{source}\n{report:?}");
//! # Ok(())
//! # }
//! ```

// Code generation
pub use crate::codegen::{CodeGenerator, CodeGeneratorBuilder};

// Diagram model and validation
pub use crate::diagram::{
    Block, BlockKind, Comparator, Connection, ConnectionKind, Diagram, IntoProgram, Limits,
    Program, collect_shared_variables, validate_program,
};

// Simulation
pub use crate::sim::{Console, ScheduleGenerator, Simulator};

// Interleaving test harness
pub use crate::harness::{
    CancelToken, MAX_OPERATION_LIMIT, TestCase, TestHarness, TestHarnessBuilder, TestReport,
};

// Error types
pub use crate::error::{ProgramConversionError, ValidationError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
