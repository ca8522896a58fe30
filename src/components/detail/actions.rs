//! Edit and Copy actions on a step card.
//!
//! The browser side effects sit behind [`Clipboard`] and [`Notifier`] so the
//! action logic runs natively in tests.

use js_sys::Reflect;
use log::{debug, warn};
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{JsFuture, spawn_local};

use crate::data::StepRecord;

/// Notice shown by the Edit action.
pub const EDIT_NOT_IMPLEMENTED: &str = "Edit functionality not implemented yet";

/// Clipboard failures. The copy action logs and drops them.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ClipboardError {
	/// No clipboard API in this context, e.g. an insecure origin.
	#[error("clipboard is not available")]
	NotAvailable,
	/// The write was refused.
	#[error("clipboard write rejected: {0}")]
	Rejected(String),
}

/// Destination for copied text.
pub trait Clipboard {
	/// Start writing `text`. Failures that only surface later are handled by
	/// the implementation.
	fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Short user-facing notices.
pub trait Notifier {
	fn notify(&self, message: &str);
}

/// `navigator.clipboard.writeText`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserClipboard;

impl Clipboard for BrowserClipboard {
	fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
		let window = web_sys::window().ok_or(ClipboardError::NotAvailable)?;
		let navigator = window.navigator();
		let clipboard = Reflect::get(&navigator, &JsValue::from_str("clipboard"))
			.map_err(|err| ClipboardError::Rejected(format!("{err:?}")))?;
		if clipboard.is_undefined() || clipboard.is_null() {
			return Err(ClipboardError::NotAvailable);
		}
		let promise = clipboard.unchecked_into::<web_sys::Clipboard>().write_text(text);
		spawn_local(async move {
			if let Err(err) = JsFuture::from(promise).await {
				warn!("rag-arch-viewer: clipboard write rejected: {err:?}");
			}
		});
		Ok(())
	}
}

/// `window.alert`.
#[derive(Clone, Copy, Debug, Default)]
pub struct AlertNotifier;

impl Notifier for AlertNotifier {
	fn notify(&self, message: &str) {
		if let Some(window) = web_sys::window() {
			let _ = window.alert_with_message(message);
		}
	}
}

/// The two per-step actions.
#[derive(Clone, Copy, Debug, Default)]
pub struct StepActions<C = BrowserClipboard, N = AlertNotifier> {
	clipboard: C,
	notifier: N,
}

impl<C: Clipboard, N: Notifier> StepActions<C, N> {
	pub fn new(clipboard: C, notifier: N) -> Self {
		Self {
			clipboard,
			notifier,
		}
	}

	/// Copy a sample to the clipboard. Best effort: failures are logged only.
	pub fn copy(&self, sample: &str) {
		match self.clipboard.write_text(sample) {
			Ok(()) => debug!("rag-arch-viewer: copied {} bytes", sample.len()),
			Err(err) => warn!("rag-arch-viewer: copy failed: {err}"),
		}
	}

	/// Editing is not supported; tell the user once and leave `step` alone.
	pub fn edit(&self, step: &StepRecord) {
		debug!("rag-arch-viewer: edit requested for {:?}", step.title);
		self.notifier.notify(EDIT_NOT_IMPLEMENTED);
	}
}

#[cfg(test)]
mod tests {
	use std::cell::RefCell;

	use super::*;
	use crate::data::DetailStore;

	#[derive(Default)]
	struct RecordingClipboard(RefCell<Vec<String>>);

	impl Clipboard for &RecordingClipboard {
		fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
			self.0.borrow_mut().push(text.to_string());
			Ok(())
		}
	}

	struct DeniedClipboard;

	impl Clipboard for DeniedClipboard {
		fn write_text(&self, _: &str) -> Result<(), ClipboardError> {
			Err(ClipboardError::Rejected("NotAllowedError".into()))
		}
	}

	#[derive(Default)]
	struct RecordingNotifier(RefCell<Vec<String>>);

	impl Notifier for &RecordingNotifier {
		fn notify(&self, message: &str) {
			self.0.borrow_mut().push(message.to_string());
		}
	}

	#[test]
	fn copy_writes_sample_verbatim() {
		let (clipboard, notifier) = (RecordingClipboard::default(), RecordingNotifier::default());
		let actions = StepActions::new(&clipboard, &notifier);
		actions.copy("const x = 1;");
		assert_eq!(*clipboard.0.borrow(), vec!["const x = 1;".to_string()]);
		assert!(notifier.0.borrow().is_empty());
	}

	#[test]
	fn copy_failure_is_swallowed() {
		let notifier = RecordingNotifier::default();
		let actions = StepActions::new(DeniedClipboard, &notifier);
		actions.copy("const x = 1;");
		assert!(notifier.0.borrow().is_empty());
	}

	#[test]
	fn empty_sample_still_copies() {
		let (clipboard, notifier) = (RecordingClipboard::default(), RecordingNotifier::default());
		StepActions::new(&clipboard, &notifier).copy("");
		assert_eq!(*clipboard.0.borrow(), vec![String::new()]);
	}

	#[test]
	fn edit_notifies_once_and_changes_nothing() {
		let store = DetailStore::builtin();
		let before = store.clone();
		let (clipboard, notifier) = (RecordingClipboard::default(), RecordingNotifier::default());
		let actions = StepActions::new(&clipboard, &notifier);
		actions.edit(&store.steps[0]);
		assert_eq!(*notifier.0.borrow(), vec![EDIT_NOT_IMPLEMENTED.to_string()]);
		assert!(clipboard.0.borrow().is_empty());
		assert_eq!(store, before);
	}

	#[test]
	fn error_messages() {
		assert_eq!(ClipboardError::NotAvailable.to_string(), "clipboard is not available");
		assert_eq!(
			ClipboardError::Rejected("denied".into()).to_string(),
			"clipboard write rejected: denied"
		);
	}
}
