/// The repeatable wedding timeline sub-form, tracked as an ordered sequence
/// of row numbers.
///
/// A new row is numbered `current row count + 1`, and numbers are not
/// renumbered on removal, so gaps can appear; row identity is positional, not
/// a dense sequence. At least one row exists at all times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timeline {
    rows: Vec<u32>,
}

impl Timeline {
    pub fn new() -> Self {
        Self { rows: vec![1] }
    }

    /// Appends a row and returns its number.
    pub fn add_row(&mut self) -> u32 {
        let number = self.rows.len() as u32 + 1;
        self.rows.push(number);
        number
    }

    /// Removes the row with the given number, unless it is the last one
    /// remaining. Returns whether a row was removed.
    pub fn remove_row(&mut self, number: u32) -> bool {
        if self.rows.len() <= 1 {
            return false;
        }
        match self.rows.iter().position(|&row| row == number) {
            Some(index) => {
                self.rows.remove(index);
                true
            }
            None => false,
        }
    }

    /// Removes the row at the given position. Numbering can repeat after a
    /// gap-creating removal, so menus that list rows remove by position
    /// rather than by number. Same minimum-one-row rule as `remove_row`.
    pub fn remove_at(&mut self, position: usize) -> bool {
        if self.rows.len() <= 1 || position >= self.rows.len() {
            return false;
        }
        self.rows.remove(position);
        true
    }

    pub fn rows(&self) -> &[u32] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn reset(&mut self) {
        self.rows.clear();
        self.rows.push(1);
    }
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new()
    }
}
