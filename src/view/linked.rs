use crate::step::Value;
use crate::view::{theme, Element, StructureView};

/// A node handle plus its head marking. The marking is rewritten by
/// [`LinkedView::restyle_head`] after every structural change; it is never
/// authoritative on its own.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeCell {
    pub cell: Element,
    pub head: bool,
}

impl NodeCell {
    fn new(value: Value) -> Self {
        Self {
            cell: Element::new(value),
            head: false,
        }
    }
}

/// One visual child of the list row: node handles at even positions, link
/// arrows at odd positions.
#[derive(Debug, Clone, PartialEq)]
pub enum Slot {
    Node(NodeCell),
    Link(Element),
}

impl Slot {
    pub fn is_link(&self) -> bool {
        matches!(self, Slot::Link(_))
    }
}

/// Chain view of the singly linked list.
///
/// The visual tree alternates node and link handles, so a logical node index
/// never addresses its slot directly: the node at logical index `i` sits at
/// visual position `2 * i`. All of that arithmetic lives here; callers deal
/// in logical indices only.
#[derive(Debug, Default)]
pub struct LinkedView {
    slots: Vec<Slot>,
}

impl LinkedView {
    pub fn new(values: &[Value]) -> Self {
        let mut view = Self::default();
        view.render(values);
        view
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn node_count(&self) -> usize {
        (self.slots.len() + 1) / 2
    }

    /// Where the node with logical index `i` sits in the visual tree.
    pub fn visual_position_of(&self, logical: usize) -> usize {
        logical * 2
    }

    pub fn node_at(&self, logical: usize) -> Option<&NodeCell> {
        match self.slots.get(self.visual_position_of(logical)) {
            Some(Slot::Node(node)) => Some(node),
            _ => None,
        }
    }

    pub fn node_at_mut(&mut self, logical: usize) -> Option<&mut NodeCell> {
        let visual = self.visual_position_of(logical);
        match self.slots.get_mut(visual) {
            Some(Slot::Node(node)) => Some(node),
            _ => None,
        }
    }

    /// Splice a node in at `logical` (clamped to the current length) and
    /// return the clamped index.
    ///
    /// Interior inserts place the node at visual position `2*i` followed by
    /// a fresh link joining it to the shifted successor. Inserting at the
    /// new tail instead appends a link *before* the node, connecting it to
    /// the previous tail, with nothing after it.
    pub fn insert_node(&mut self, logical: usize, value: Value) -> usize {
        let logical = logical.min(self.node_count());
        let visual = self.visual_position_of(logical);
        let node = Slot::Node(NodeCell::new(value));

        if visual < self.slots.len() {
            self.slots.insert(visual, node);
            self.slots.insert(visual + 1, Slot::Link(Element::link()));
        } else {
            if !self.slots.is_empty() {
                self.slots.push(Slot::Link(Element::link()));
            }
            self.slots.push(node);
        }

        self.restyle_head();
        logical
    }

    /// Remove the node at `logical` (clamped) together with exactly one
    /// adjacent link: the one to its right when present, otherwise the one
    /// to its left. Returns the removed value, or `None` on an empty list.
    pub fn remove_node(&mut self, logical: usize) -> Option<Value> {
        if self.slots.is_empty() {
            return None;
        }
        let logical = logical.min(self.node_count() - 1);
        let visual = self.visual_position_of(logical);

        debug_assert!(!self.slots[visual].is_link(), "even slots hold nodes");
        let removed = match self.slots.remove(visual) {
            Slot::Node(node) => node.cell.value,
            Slot::Link(_) => return None,
        };

        // the right link now occupies the node's old position
        if visual < self.slots.len() {
            self.slots.remove(visual);
        } else if visual > 0 {
            self.slots.remove(visual - 1);
        }

        self.restyle_head();
        Some(removed)
    }

    /// Recolor whichever node now sits at logical index 0 as the head and
    /// un-mark every other node. Head identity is purely positional.
    pub fn restyle_head(&mut self) {
        let mut logical = 0;
        for slot in &mut self.slots {
            if let Slot::Node(node) = slot {
                node.head = logical == 0;
                node.cell.fill = if node.head { theme::KEY } else { theme::NORMAL };
                logical += 1;
            }
        }
    }
}

impl StructureView for LinkedView {
    fn render(&mut self, values: &[Value]) {
        self.slots = Vec::with_capacity(values.len().saturating_mul(2));
        for (i, value) in values.iter().enumerate() {
            if i > 0 {
                self.slots.push(Slot::Link(Element::link()));
            }
            self.slots.push(Slot::Node(NodeCell::new(value.clone())));
        }
        self.restyle_head();
    }

    fn element_at(&self, logical: usize) -> Option<&Element> {
        self.node_at(logical).map(|node| &node.cell)
    }

    fn values(&self) -> Vec<Value> {
        self.slots
            .iter()
            .filter_map(|slot| match slot {
                Slot::Node(node) => Some(node.cell.value.clone()),
                Slot::Link(_) => None,
            })
            .collect()
    }

    fn len(&self) -> usize {
        self.node_count()
    }
}
