use crate::puzzle::Symbol;

/// Append-only buffer of selected symbols with a capacity fixed at session start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionBuffer {
    symbols: Vec<Symbol>,
    capacity: usize,
}

impl SelectionBuffer {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            symbols: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Returns `false` without touching the buffer once it is full.
    pub fn append(&mut self, symbol: Symbol) -> bool {
        if self.is_full() {
            return false;
        }
        self.symbols.push(symbol);
        true
    }

    pub fn is_full(&self) -> bool {
        self.symbols.len() >= self.capacity
    }

    pub fn contents(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn remaining(&self) -> usize {
        self.capacity - self.symbols.len()
    }
}
