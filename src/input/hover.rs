use crate::{core::geo::Point, layers::marker::Marker};

/// Last known pointer position over the viewer, `None` when it left the window
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerState {
    pub position: Option<Point>,
}

impl PointerState {
    pub fn new(position: Option<Point>) -> Self {
        Self { position }
    }

    pub fn at(x: f64, y: f64) -> Self {
        Self::new(Some(Point::new(x, y)))
    }
}

/// Record under the pointer, recomputed every frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HoverState {
    #[default]
    None,
    Record(usize),
}

impl HoverState {
    pub fn index(&self) -> Option<usize> {
        match self {
            Self::None => None,
            Self::Record(index) => Some(*index),
        }
    }

    pub fn is_hovered(&self, index: usize) -> bool {
        self.index() == Some(index)
    }
}

/// Finds the hovered marker among `markers` (in draw order).
///
/// Every marker within `radius + slop` of the pointer matches, and the last
/// match wins because it is drawn on top. The pick is not nearest-distance:
/// a later marker beats an earlier one even when the pointer is closer to
/// the earlier center.
///
/// Only the returned marker is highlighted; other matches under the pointer
/// draw with their normal halo.
pub fn find_hovered(markers: &[Marker], pointer: &PointerState, slop: f64) -> HoverState {
    let Some(pointer) = pointer.position else {
        return HoverState::None;
    };

    markers
        .iter()
        .rev()
        .find(|marker| marker.hit(pointer, slop))
        .map_or(HoverState::None, |marker| HoverState::Record(marker.index))
}
