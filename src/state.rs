//! Page interaction state and the events that change it.
//!
//! Node clicks and dialog dismissals arrive as [`ViewerEvent`] messages. The
//! `App` component owns the one [`UiState`] signal and applies each event
//! against the detail store, so the views only read state.

use log::debug;

use crate::data::DetailStore;

/// Whether the detail dialog is showing and the headline it shows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
	/// Dialog visibility.
	pub dialog_open: bool,
	/// Headline for the most recently clicked node. Kept after the dialog
	/// closes until the next click replaces it.
	pub selected_detail_text: String,
}

/// Inputs to the controller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewerEvent {
	/// A node with this canonical label was clicked.
	NodeClicked(String),
	/// The dialog was closed by any of its dismiss controls.
	DialogDismissed,
}

impl UiState {
	/// Apply one event.
	pub fn apply(&mut self, event: ViewerEvent, store: &DetailStore) {
		match event {
			ViewerEvent::NodeClicked(label) => {
				if store.lookup(&label).is_none() {
					debug!("rag-arch-viewer: no details for {label:?}");
				}
				self.selected_detail_text = store.describe(&label).to_string();
				self.dialog_open = true;
			}
			ViewerEvent::DialogDismissed => self.dialog_open = false,
		}
	}
}
