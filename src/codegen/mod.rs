use itertools::Itertools;
use log::debug;

use crate::diagram::{Limits, Program, collect_shared_variables, validate_program};
use crate::error::ValidationError;

mod body;
mod emitter;

use body::BodyBuilder;
use emitter::CodeWriter;

/// Translates every diagram of a program into a sequential thread function
/// and assembles a runnable Rust source file around them.
///
/// The generated file declares one shared `AtomicI32` per collected variable,
/// one `fn thread_N()` per diagram, and a `main` that spawns every thread and
/// joins them all.
pub struct CodeGenerator {
    program: Program,
    limits: Limits,
}

pub struct CodeGeneratorBuilder {
    program: Program,
    limits: Limits,
}

impl CodeGeneratorBuilder {
    pub fn new(program: Program) -> Self {
        Self {
            program,
            limits: Limits::default(),
        }
    }

    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    pub fn build(self) -> CodeGenerator {
        CodeGenerator {
            program: self.program,
            limits: self.limits,
        }
    }
}

impl CodeGenerator {
    pub fn builder(program: Program) -> CodeGeneratorBuilder {
        CodeGeneratorBuilder::new(program)
    }

    /// Generates the full source text, or fails on the fatal validation
    /// errors: empty/oversized program, cyclic diagram, too many variables.
    pub fn generate(&self) -> Result<String, ValidationError> {
        validate_program(&self.program, &self.limits)?;

        // Sorted so the emitted declarations are stable across runs.
        let variables: Vec<String> = collect_shared_variables(&self.program)
            .into_iter()
            .sorted()
            .collect();
        debug!(
            "generating program: {} diagrams, {} shared variables",
            self.program.diagrams.len(),
            variables.len()
        );

        let mut w = CodeWriter::new();
        w.line("#![allow(non_upper_case_globals)]");
        w.blank();
        w.line("use std::io::{self, BufRead};");
        w.line("use std::sync::atomic::{AtomicI32, Ordering};");
        w.line("use std::thread;");
        w.blank();

        for variable in &variables {
            w.line(&format!("static {variable}: AtomicI32 = AtomicI32::new(0);"));
        }
        if !variables.is_empty() {
            w.blank();
        }

        for (index, diagram) in self.program.diagrams.iter().enumerate() {
            w.open(&format!("fn thread_{}()", index + 1));
            BodyBuilder::new(diagram).emit(&mut w);
            w.close();
            w.blank();
        }

        w.open("fn main()");
        w.line("println!(\"Starting multi-threaded program...\");");
        w.line("let mut handles = Vec::new();");
        for index in 0..self.program.diagrams.len() {
            w.line(&format!("handles.push(thread::spawn(thread_{}));", index + 1));
        }
        w.open("for handle in handles");
        w.line("handle.join().unwrap();");
        w.close();
        w.line("println!(\"All threads completed.\");");
        w.close();

        Ok(w.finish())
    }
}
