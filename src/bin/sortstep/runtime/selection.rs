/// Highlighted row of the log view.
///
/// `None` follows the newest revealed row; an explicit row stays put while
/// more rows are revealed, and is clamped when rows go away.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub struct LogSelection {
    row: Option<usize>,
}

impl LogSelection {
    pub fn resolve(&self, rows: usize) -> Option<usize> {
        let last = rows.checked_sub(1)?;
        Some(self.row.map_or(last, |row| row.min(last)))
    }

    pub fn is_following(&self) -> bool {
        self.row.is_none()
    }

    pub fn follow(&mut self) {
        self.row = None;
    }

    pub fn select_prev(&mut self, rows: usize) -> bool {
        let Some(current) = self.resolve(rows) else {
            return false;
        };
        self.row = Some(current.saturating_sub(1));
        true
    }

    pub fn select_next(&mut self, rows: usize) -> bool {
        let Some(current) = self.resolve(rows) else {
            return false;
        };
        // Landing on the newest row resumes following it.
        if current + 2 >= rows {
            self.follow();
        } else {
            self.row = Some(current + 1);
        }
        true
    }

    pub fn select_first(&mut self, rows: usize) -> bool {
        if rows == 0 {
            return false;
        }
        self.row = Some(0);
        true
    }
}
