use std::collections::VecDeque;

/// Simulated console: a queue of pending input values and the collected
/// output trace of one run.
#[derive(Debug, Clone)]
pub struct Console {
    inputs: VecDeque<i32>,
    outputs: Vec<i32>,
}

impl Console {
    pub fn new(inputs: &[i32]) -> Self {
        Self {
            inputs: inputs.iter().copied().collect(),
            outputs: Vec::new(),
        }
    }

    /// Takes the next input value; exhausted input reads as 0.
    pub fn read_input(&mut self) -> i32 {
        self.inputs.pop_front().unwrap_or(0)
    }

    pub fn write_output(&mut self, value: i32) {
        self.outputs.push(value);
    }

    pub fn outputs(&self) -> &[i32] {
        &self.outputs
    }

    pub fn into_outputs(self) -> Vec<i32> {
        self.outputs
    }

    /// Exact-sequence comparison: length and order both count.
    pub fn matches(&self, expected: &[i32]) -> bool {
        self.outputs == expected
    }
}
