use ratatui::style::Color;

use crate::step::Value;
use crate::view::theme;

/// One independently stylable handle in a structure view.
///
/// A handle's identity is the slot it occupies; restyles and payload
/// exchanges never move it. `height` is the array panel's size encoding
/// (twice the numeric value, matching the page bars), `lift` and `opacity`
/// carry entrance/exit transitions, `outlined` is the inset pulse used for
/// the top/front/rear markers.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub value: Value,
    pub label: String,
    pub height: u16,
    pub fill: Color,
    pub lift: i16,
    pub opacity: f32,
    pub outlined: bool,
}

impl Element {
    pub fn new(value: Value) -> Self {
        let label = value.to_string();
        let height = Self::bar_height(&value);
        Self {
            value,
            label,
            height,
            fill: theme::NORMAL,
            lift: 0,
            opacity: 1.0,
            outlined: false,
        }
    }

    /// An arrow connecting two linked-list nodes.
    pub fn link() -> Self {
        let mut link = Self::new(Value::Text("→".to_string()));
        link.opacity = 0.7;
        link.height = 0;
        link
    }

    /// Exchange displayed payload with `other`; both handles stay put.
    pub fn exchange_payload(&mut self, other: &mut Element) {
        std::mem::swap(&mut self.value, &mut other.value);
        std::mem::swap(&mut self.label, &mut other.label);
        std::mem::swap(&mut self.height, &mut other.height);
    }

    /// Overwrite the payload in place.
    pub fn set_value(&mut self, value: Value) {
        self.label = value.to_string();
        self.height = Self::bar_height(&value);
        self.value = value;
    }

    /// Leave a visible hole behind a shifted-out payload.
    pub fn clear_payload(&mut self) {
        self.label.clear();
        self.height = 0;
    }

    fn bar_height(value: &Value) -> u16 {
        let scaled = (value.magnitude().max(0.0) * 2.0).round();
        scaled.min(u16::MAX as f64) as u16
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_exchange_leaves_style_in_place() {
        let mut a = Element::new(Value::Int(10));
        let mut b = Element::new(Value::Int(40));
        a.fill = theme::HIGHLIGHT;

        a.exchange_payload(&mut b);

        assert_eq!(a.value, Value::Int(40));
        assert_eq!(a.label, "40");
        assert_eq!(a.height, 80);
        assert_eq!(b.value, Value::Int(10));
        // style stays with the slot, not the payload
        assert_eq!(a.fill, theme::HIGHLIGHT);
        assert_eq!(b.fill, theme::NORMAL);
    }

    #[test]
    fn bar_height_doubles_the_value() {
        assert_eq!(Element::new(Value::Int(37)).height, 74);
        assert_eq!(Element::new(Value::Float(2.5)).height, 5);
    }
}
