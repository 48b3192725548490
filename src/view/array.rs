use ratatui::style::Color;

use crate::step::Value;
use crate::view::{theme, Element, StructureView};

/// Bar view of the sort array.
///
/// Handles never move: swap and shift steps rewrite payloads between slots,
/// so a logical index always addresses the same handle for the lifetime of a
/// render.
#[derive(Debug, Default)]
pub struct ArrayView {
    cells: Vec<Element>,
}

impl ArrayView {
    pub fn new(values: &[Value]) -> Self {
        let mut view = Self::default();
        view.render(values);
        view
    }

    pub fn cells(&self) -> &[Element] {
        &self.cells
    }

    pub fn element_at_mut(&mut self, logical: usize) -> Option<&mut Element> {
        self.cells.get_mut(logical)
    }

    /// Exchange payloads between two slots. Out-of-range or same-slot pairs
    /// are silent no-ops.
    pub fn swap_payload(&mut self, i: usize, j: usize) {
        if i == j || i >= self.cells.len() || j >= self.cells.len() {
            return;
        }
        let (lo, hi) = if i < j { (i, j) } else { (j, i) };
        let (left, right) = self.cells.split_at_mut(hi);
        left[lo].exchange_payload(&mut right[0]);
    }

    pub fn set_fill(&mut self, logical: usize, fill: Color) {
        if let Some(cell) = self.cells.get_mut(logical) {
            cell.fill = fill;
        }
    }

    /// Color a half-open range; indices past the end are ignored.
    pub fn fill_range(&mut self, start: usize, end: usize, fill: Color) {
        for cell in self
            .cells
            .iter_mut()
            .skip(start)
            .take(end.saturating_sub(start))
        {
            cell.fill = fill;
        }
    }

    pub fn fill_all(&mut self, fill: Color) {
        for cell in &mut self.cells {
            cell.fill = fill;
        }
    }

    pub fn max_height(&self) -> u16 {
        self.cells.iter().map(|c| c.height).max().unwrap_or(0)
    }
}

impl StructureView for ArrayView {
    fn render(&mut self, values: &[Value]) {
        self.cells = values.iter().cloned().map(Element::new).collect();
    }

    fn element_at(&self, logical: usize) -> Option<&Element> {
        self.cells.get(logical)
    }

    fn values(&self) -> Vec<Value> {
        self.cells.iter().map(|c| c.value.clone()).collect()
    }

    fn len(&self) -> usize {
        self.cells.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ints(values: &[i64]) -> Vec<Value> {
        values.iter().copied().map(Value::Int).collect()
    }

    #[test]
    fn swap_exchanges_payload_without_renumbering() {
        let mut view = ArrayView::new(&ints(&[5, 9, 1]));
        view.swap_payload(0, 2);
        assert_eq!(view.values(), ints(&[1, 9, 5]));
        // three handles, same slots
        assert_eq!(view.len(), 3);
    }

    #[test]
    fn out_of_range_swap_is_ignored() {
        let mut view = ArrayView::new(&ints(&[5, 9]));
        view.swap_payload(0, 7);
        view.swap_payload(1, 1);
        assert_eq!(view.values(), ints(&[5, 9]));
    }

    #[test]
    fn range_fill_clips_at_the_end() {
        let mut view = ArrayView::new(&ints(&[1, 2, 3]));
        view.fill_range(2, 10, theme::MERGE_RIGHT);
        assert_eq!(view.cells()[2].fill, theme::MERGE_RIGHT);
        assert_eq!(view.cells()[1].fill, theme::NORMAL);
    }

    #[test]
    fn render_rebuilds_wholesale() {
        let mut view = ArrayView::new(&ints(&[1, 2, 3]));
        view.fill_all(theme::FINAL);
        view.render(&ints(&[4, 5]));
        assert_eq!(view.len(), 2);
        assert_eq!(view.cells()[0].fill, theme::NORMAL);
    }
}
