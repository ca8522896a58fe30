//! Detail view: the dialog opened by a node click and the step catalog in it.

pub mod actions;
mod dialog;
pub mod highlight;
mod steps;

pub use actions::{AlertNotifier, BrowserClipboard, Clipboard, ClipboardError, Notifier, StepActions};
pub use dialog::{DIALOG_TITLE, DetailDialog};
pub use highlight::CodeSample;
pub use steps::{CATALOG_HEADING, StepCard, StepCatalog};
