//! Managed elements and their resolved cell geometry.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use cellgrid_core::geometry::{Rect, Size};

/// The capabilities the layout needs from a managed element.
///
/// The host view system implements this for its concrete views. The layout
/// only ever measures through `&self` and writes through
/// [`set_frame`](Self::set_frame), so measuring cannot change an element.
pub trait GridView {
    /// Preferred size when laid out at the given width.
    fn preferred_size(&self, width: f32) -> Size;

    /// Receive the final frame computed by [`GridLayout::layout`](crate::GridLayout::layout).
    fn set_frame(&mut self, frame: Rect);
}

impl<T: GridView + ?Sized> GridView for Box<T> {
    fn preferred_size(&self, width: f32) -> Size {
        (**self).preferred_size(width)
    }

    fn set_frame(&mut self, frame: Rect) {
        (**self).set_frame(frame);
    }
}

impl<T: GridView + ?Sized> GridView for &mut T {
    fn preferred_size(&self, width: f32) -> Size {
        (**self).preferred_size(width)
    }

    fn set_frame(&mut self, frame: Rect) {
        (**self).set_frame(frame);
    }
}

/// Handle to an element owned by a [`GridLayout`](crate::GridLayout).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct ViewId(usize);

impl ViewId {
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Position of the element in insertion order.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Binding between one element and the cell it occupies.
#[derive(Debug)]
pub struct ViewState<V> {
    view: V,
    row: usize,
    column: usize,
    /// Arena index of the row's column set.
    set_index: usize,
    preferred_height: Option<f32>,
    frame: Option<Rect>,
}

impl<V> ViewState<V> {
    pub(crate) fn new(view: V, row: usize, column: usize, set_index: usize) -> Self {
        Self {
            view,
            row,
            column,
            set_index,
            preferred_height: None,
            frame: None,
        }
    }

    #[must_use]
    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn into_view(self) -> V {
        self.view
    }

    /// Row index this element was placed in.
    #[must_use]
    pub fn row(&self) -> usize {
        self.row
    }

    /// Column index within the row's column set.
    #[must_use]
    pub fn column(&self) -> usize {
        self.column
    }

    /// Height the element asked for at its column width during the last
    /// sizing pass. `None` if the row's height is fixed (the element is not
    /// measured) or no pass has run.
    #[must_use]
    pub fn preferred_height(&self) -> Option<f32> {
        self.preferred_height
    }

    /// Frame written by the last [`GridLayout::layout`](crate::GridLayout::layout).
    #[must_use]
    pub fn frame(&self) -> Option<Rect> {
        self.frame
    }

    /// Arena index of the row's column set.
    pub(crate) fn set_index(&self) -> usize {
        self.set_index
    }

    pub(crate) fn set_preferred_height(&mut self, height: Option<f32>) {
        self.preferred_height = height;
    }
}

impl<V: GridView> ViewState<V> {
    pub(crate) fn measure(&self, width: f32) -> f32 {
        self.view.preferred_size(width).non_negative().height
    }

    pub(crate) fn apply_frame(&mut self, frame: Rect) {
        self.frame = Some(frame);
        self.view.set_frame(frame);
    }
}
