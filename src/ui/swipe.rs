//! Swipe-to-reveal state machine for one journal card.
//!
//! Each displayed card owns an independent machine; a leftward horizontal
//! drag reveals its delete affordance. Distances are abstract drag units,
//! mapped to terminal cells by the home screen.

/// The affordance becomes visible once the drag passes this distance.
pub const AFFORDANCE_THRESHOLD: f32 = 30.0;
/// Releasing past this distance pins the card open.
pub const REVEAL_THRESHOLD: f32 = 100.0;
/// Offset a revealed card snaps to.
pub const REVEAL_OFFSET: f32 = -90.0;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Swipe {
	/// Offset 0, affordance hidden.
	#[default]
	Resting,
	/// Offset tracks the drag delta, never above 0.
	Dragging { offset: f32 },
	/// Pinned at [`REVEAL_OFFSET`], awaiting a delete tap or a rightward
	/// drag to re-close.
	Revealed,
}

impl Swipe {
	/// Feed an in-progress drag delta. Rightward drags from rest are
	/// ignored; a rightward drag on a revealed card closes it.
	pub fn drag_update(&mut self, dx: f32) {
		match *self {
			Swipe::Resting => {
				if dx < 0.0 {
					*self = Swipe::Dragging { offset: dx };
				}
			}
			Swipe::Dragging { .. } => {
				*self = Swipe::Dragging { offset: dx.min(0.0) };
			}
			Swipe::Revealed => {
				if dx > 0.0 {
					*self = Swipe::Resting;
				}
			}
		}
	}

	/// Feed the final drag delta: past [`REVEAL_THRESHOLD`] leftward pins
	/// the card open, anything else snaps back to rest.
	pub fn drag_end(&mut self, dx: f32) {
		if let Swipe::Dragging { .. } = self {
			*self = if dx < 0.0 && dx.abs() > REVEAL_THRESHOLD {
				Swipe::Revealed
			} else {
				Swipe::Resting
			};
		}
	}

	pub fn settle(&mut self) {
		*self = Swipe::Resting;
	}

	pub fn offset(&self) -> f32 {
		match *self {
			Swipe::Resting => 0.0,
			Swipe::Dragging { offset } => offset,
			Swipe::Revealed => REVEAL_OFFSET,
		}
	}

	pub fn affordance_visible(&self) -> bool {
		match *self {
			Swipe::Resting => false,
			Swipe::Dragging { offset } => offset.abs() > AFFORDANCE_THRESHOLD,
			Swipe::Revealed => true,
		}
	}

	pub fn is_revealed(&self) -> bool {
		matches!(self, Swipe::Revealed)
	}

	pub fn is_resting(&self) -> bool {
		matches!(self, Swipe::Resting)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_short_drag_settles_back() {
		let mut swipe = Swipe::default();
		swipe.drag_update(-50.0);
		assert!(matches!(swipe, Swipe::Dragging { .. }));
		swipe.drag_end(-50.0);
		assert_eq!(swipe, Swipe::Resting);
		assert_eq!(swipe.offset(), 0.0);
	}

	#[test]
	fn test_long_drag_reveals_at_pinned_offset() {
		let mut swipe = Swipe::default();
		swipe.drag_update(-150.0);
		swipe.drag_end(-150.0);
		assert!(swipe.is_revealed());
		assert_eq!(swipe.offset(), -90.0);
		assert!(swipe.affordance_visible());
	}

	#[test]
	fn test_reveal_threshold_is_exclusive() {
		let mut swipe = Swipe::default();
		swipe.drag_update(-100.0);
		swipe.drag_end(-100.0);
		assert_eq!(swipe, Swipe::Resting);
	}

	#[test]
	fn test_rightward_drag_never_moves_the_card() {
		let mut swipe = Swipe::default();
		swipe.drag_update(40.0);
		assert_eq!(swipe.offset(), 0.0);
		swipe.drag_update(500.0);
		assert_eq!(swipe.offset(), 0.0);
		swipe.drag_end(500.0);
		assert_eq!(swipe, Swipe::Resting);
	}

	#[test]
	fn test_affordance_follows_threshold_while_dragging() {
		let mut swipe = Swipe::default();
		swipe.drag_update(-31.0);
		assert!(swipe.affordance_visible());
		// Back at or below the threshold it hides again mid-drag.
		swipe.drag_update(-30.0);
		assert!(!swipe.affordance_visible());
		swipe.drag_update(-10.0);
		assert!(!swipe.affordance_visible());
	}

	#[test]
	fn test_offset_tracks_drag_and_clamps_rightward() {
		let mut swipe = Swipe::default();
		swipe.drag_update(-42.0);
		assert_eq!(swipe.offset(), -42.0);
		// Crossing back past the origin clamps to 0 instead of going
		// positive.
		swipe.drag_update(12.0);
		assert_eq!(swipe.offset(), 0.0);
	}

	#[test]
	fn test_rightward_drag_recloses_a_revealed_card() {
		let mut swipe = Swipe::default();
		swipe.drag_update(-150.0);
		swipe.drag_end(-150.0);
		assert!(swipe.is_revealed());
		swipe.drag_update(20.0);
		assert!(swipe.is_resting());
	}
}
