use crate::geometry::Line;

/// Reusable line list owned by one spiral.
///
/// The logical length is reset every frame while the storage is kept, so a
/// spiral allocates only until it reaches its steady-state segment count.
/// Growth doubles the capacity, starting at one entry; the buffer never
/// shrinks.
#[derive(Debug, Default, Clone)]
pub struct SegmentBuffer {
    lines: Vec<Line>,
}

impl SegmentBuffer {
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    pub fn push(&mut self, line: Line) {
        if self.lines.len() == self.lines.capacity() {
            let grown = (self.lines.capacity() * 2).max(1);
            self.lines.reserve_exact(grown - self.lines.len());
            log::trace!("segment buffer grown to {}", self.lines.capacity());
        }
        self.lines.push(line);
    }

    pub fn reset(&mut self) {
        self.lines.clear();
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.lines.capacity()
    }

    pub fn as_slice(&self) -> &[Line] {
        &self.lines
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Line> {
        self.lines.iter()
    }
}

impl<'a> IntoIterator for &'a SegmentBuffer {
    type Item = &'a Line;
    type IntoIter = std::slice::Iter<'a, Line>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
