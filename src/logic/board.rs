use serde::{Deserialize, Serialize};

/// Cells on the 3x3 grid, indexed 0-8 in row-major order.
pub const CELL_COUNT: usize = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Marker {
    X,
    O,
}

impl Marker {
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::X => Self::O,
            Self::O => Self::X,
        }
    }

    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::X => 'X',
            Self::O => 'O',
        }
    }
}

impl std::fmt::Display for Marker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// An empty cell holds `None`; a cell never holds both markers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [Option<Marker>; CELL_COUNT],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [None; CELL_COUNT],
        }
    }

    #[must_use]
    pub const fn index_to_coord(position: usize) -> (usize, usize) {
        (position / 3, position % 3)
    }

    #[must_use]
    pub fn get(&self, position: usize) -> Option<Marker> {
        self.cells.get(position).copied().flatten()
    }

    /// Places `marker` at `position`. Returns false without mutating when
    /// the position is out of range or the cell is occupied.
    pub fn place(&mut self, position: usize, marker: Marker) -> bool {
        match self.cells.get_mut(position) {
            Some(cell) if cell.is_none() => {
                *cell = Some(marker);
                true
            }
            _ => false,
        }
    }

    /// Reverts a hypothetical move made during search.
    pub fn clear_cell(&mut self, position: usize) {
        if let Some(cell) = self.cells.get_mut(position) {
            *cell = None;
        }
    }

    pub fn clear(&mut self) {
        self.cells = [None; CELL_COUNT];
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Indices of empty cells in ascending order.
    #[must_use]
    pub fn available_moves(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(position, _)| position)
            .collect()
    }

    #[must_use]
    pub fn cells(&self) -> &[Option<Marker>; CELL_COUNT] {
        &self.cells
    }

    /// Parses the compact 9-character notation: `X`, `O`, and `.` (or a
    /// space) per cell, row-major. Returns `None` on bad length or an
    /// unknown character.
    #[must_use]
    pub fn from_layout(layout: &str) -> Option<Self> {
        let mut cells = [None; CELL_COUNT];
        let mut position = 0;
        for ch in layout.chars() {
            let cell = match ch {
                'X' => Some(Marker::X),
                'O' => Some(Marker::O),
                '.' | ' ' => None,
                _ => return None,
            };
            *cells.get_mut(position)? = cell;
            position += 1;
        }
        if position != CELL_COUNT {
            return None;
        }
        Some(Self { cells })
    }

    #[must_use]
    pub fn layout_string(&self) -> String {
        self.cells
            .iter()
            .map(|cell| cell.map_or('.', Marker::as_char))
            .collect()
    }
}
