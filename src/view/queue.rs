use crate::step::Value;
use crate::view::{Element, StructureView};

/// Row view of the queue: front at logical position 0 (drawn leftmost),
/// elements join at the rear.
#[derive(Debug, Default)]
pub struct QueueView {
    items: Vec<Element>,
}

impl QueueView {
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

    pub fn front_mut(&mut self) -> Option<&mut Element> {
        self.items.first_mut()
    }

    /// Grow the queue by one entering element and hand it back for styling.
    pub fn push_rear(&mut self, value: Value) -> &mut Element {
        self.items.push(Element::new(value));
        self.items.last_mut().expect("push_rear just appended")
    }

    pub fn remove_front(&mut self) -> Option<Element> {
        if self.items.is_empty() {
            None
        } else {
            Some(self.items.remove(0))
        }
    }
}

impl StructureView for QueueView {
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
