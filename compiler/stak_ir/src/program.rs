//! Compiled programs.

use std::fmt;
use std::ops::Index;

use crate::{Instruction, Span};

/// An ordered, 0-indexed instruction sequence.
///
/// Each instruction keeps the span of the statement it was compiled from,
/// so runtime errors can point back at source text. Spans do not take part
/// in equality; two programs are equal when their instructions are.
#[derive(Clone, Debug, Default)]
pub struct Program {
    instructions: Vec<Instruction>,
    spans: Vec<Span>,
}

impl Program {
    pub fn new() -> Self {
        Program::default()
    }

    /// Append an instruction compiled from `span`.
    pub fn push(&mut self, instruction: Instruction, span: Span) {
        self.instructions.push(instruction);
        self.spans.push(span);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Instruction> {
        self.instructions.get(index)
    }

    /// Source span of the instruction at `index`.
    #[inline]
    pub fn span(&self, index: usize) -> Option<Span> {
        self.spans.get(index).copied()
    }

    #[inline]
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Instruction> {
        self.instructions.iter()
    }
}

impl PartialEq for Program {
    fn eq(&self, other: &Self) -> bool {
        self.instructions == other.instructions
    }
}

impl Index<usize> for Program {
    type Output = Instruction;

    fn index(&self, index: usize) -> &Instruction {
        &self.instructions[index]
    }
}

impl FromIterator<Instruction> for Program {
    /// Collect instructions that have no source location.
    fn from_iter<I: IntoIterator<Item = Instruction>>(iter: I) -> Self {
        let instructions: Vec<Instruction> = iter.into_iter().collect();
        let spans = vec![Span::DUMMY; instructions.len()];
        Program {
            instructions,
            spans,
        }
    }
}

impl FromIterator<(Instruction, Span)> for Program {
    fn from_iter<I: IntoIterator<Item = (Instruction, Span)>>(iter: I) -> Self {
        let (instructions, spans) = iter.into_iter().unzip();
        Program {
            instructions,
            spans,
        }
    }
}

impl<'a> IntoIterator for &'a Program {
    type Item = &'a Instruction;
    type IntoIter = std::slice::Iter<'a, Instruction>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Program {
    /// One canonical instruction per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for instruction in &self.instructions {
            writeln!(f, "{instruction}")?;
        }
        Ok(())
    }
}
