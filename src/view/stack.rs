use crate::step::Value;
use crate::view::{Element, StructureView};

/// Column view of the stack.
///
/// The logical top is the *last* element of the sequence; the panel draws the
/// column bottom-up so the top lands at the visual top, but nothing in here
/// depends on that.
#[derive(Debug, Default)]
pub struct StackView {
    items: Vec<Element>,
}

impl StackView {
    pub fn new(values: &[Value]) -> Self {
        let mut view = Self::default();
        view.render(values);
        view
    }

    pub fn items(&self) -> &[Element] {
        &self.items
    }

    pub fn element_at_mut(&mut self, logical: usize) -> Option<&mut Element> {
        self.items.get_mut(logical)
    }

    pub fn top_mut(&mut self) -> Option<&mut Element> {
        self.items.last_mut()
    }

    /// Grow the stack by one entering element and hand it back for styling.
    pub fn push_cell(&mut self, value: Value) -> &mut Element {
        self.items.push(Element::new(value));
        self.items.last_mut().expect("push_cell just appended")
    }

    pub fn remove_top(&mut self) -> Option<Element> {
        self.items.pop()
    }
}

impl StructureView for StackView {
    fn render(&mut self, values: &[Value]) {
        self.items = values.iter().cloned().map(Element::new).collect();
    }

    fn element_at(&self, logical: usize) -> Option<&Element> {
        self.items.get(logical)
    }

    fn values(&self) -> Vec<Value> {
        self.items.iter().map(|c| c.value.clone()).collect()
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}
