/// Width of one stack slot in bytes. Every local variable occupies exactly
/// one slot.
pub const WORD_SIZE: i64 = 8;

/// One local variable and its assigned stack slot.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalVariable {
    pub name: String,
    /// Byte displacement of the slot relative to the frame base. The k-th
    /// distinct name gets `k * WORD_SIZE`, counting from one.
    pub offset: i64,
}

/// Append-only registry mapping variable names to stack offsets.
///
/// Entries are kept in first-seen order. An offset, once assigned, is never
/// reused for another name and never reassigned. The final contents describe
/// the stack-frame layout a code generator needs to emit frame-relative
/// memory accesses.
#[derive(Debug, Default)]
pub struct LocalVariables {
    entries: Vec<LocalVariable>,
}

impl LocalVariables {
    pub fn new() -> LocalVariables {
        LocalVariables { entries: vec![] }
    }

    /// Returns the offset already assigned to `name`, or assigns the next
    /// free slot and returns that. Never fails: an unknown name is not an
    /// error, it is the allocation case.
    pub fn lookup_or_allocate(&mut self, name: &str) -> i64 {
        if let Some(entry) = self.entries.iter().find(|entry| entry.name == name) {
            return entry.offset;
        }

        let offset = match self.entries.last() {
            Some(tail) => tail.offset + WORD_SIZE,
            None => WORD_SIZE,
        };

        self.entries.push(LocalVariable {
            name: String::from(name),
            offset,
        });

        offset
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total frame bytes needed to hold every variable seen so far.
    pub fn frame_size(&self) -> i64 {
        self.entries.last().map_or(0, |tail| tail.offset)
    }

    /// Entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &LocalVariable> {
        self.entries.iter()
    }
}
