//! Click handlers for the node groups of a rendered diagram.
//!
//! [`NodeBindings`] only does the bookkeeping: it remembers what it attached
//! so a rebind can detach first. Finding node groups and installing handlers
//! sits behind [`NodeSurface`], which the DOM implements for [`Element`].

use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::prelude::*;
use web_sys::{Element, Event};

use super::render::NODE_SELECTOR;

/// Something whose node groups can take click handlers.
pub trait NodeSurface {
	type Listener: NodeListener;

	/// Install `on_click` on every node group and return one listener per
	/// group that took it.
	fn attach(&self, on_click: Rc<dyn Fn(String)>) -> Vec<Self::Listener>;
}

/// One installed handler.
pub trait NodeListener {
	fn detach(self);
}

/// A DOM click listener kept alive next to its element.
pub struct DomListener {
	element: Element,
	handler: Closure<dyn FnMut(Event)>,
}

impl NodeListener for DomListener {
	fn detach(self) {
		let _ = self
			.element
			.remove_event_listener_with_callback("click", self.handler.as_ref().unchecked_ref());
	}
}

impl NodeSurface for Element {
	type Listener = DomListener;

	/// The handler reads the group's `<title>` text when the click happens and
	/// passes it on as the canonical label.
	fn attach(&self, on_click: Rc<dyn Fn(String)>) -> Vec<DomListener> {
		let nodes = match self.query_selector_all(NODE_SELECTOR) {
			Ok(nodes) => nodes,
			Err(err) => {
				warn!("rag-arch-viewer: node query failed: {err:?}");
				return Vec::new();
			}
		};
		let mut listeners = Vec::new();
		for i in 0..nodes.length() {
			let Some(group) = nodes.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
				continue;
			};
			let (target, on_click) = (group.clone(), on_click.clone());
			let handler = Closure::<dyn FnMut(Event)>::new(move |_: Event| {
				let title = target
					.query_selector("title")
					.ok()
					.flatten()
					.and_then(|t| t.text_content());
				match node_label(title) {
					Some(label) => on_click(label),
					None => debug!("rag-arch-viewer: clicked node has no title"),
				}
			});
			if group
				.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())
				.is_ok()
			{
				listeners.push(DomListener {
					element: group,
					handler,
				});
			}
		}
		listeners
	}
}

/// Listeners attached to one diagram region.
///
/// Rebinding a region must go through [`NodeBindings::clear`] first so that
/// a node never carries two handlers. Dropping the bindings removes them too.
pub struct NodeBindings<L: NodeListener = DomListener> {
	listeners: Vec<L>,
}

impl<L: NodeListener> Default for NodeBindings<L> {
	fn default() -> Self {
		Self {
			listeners: Vec::new(),
		}
	}
}

impl<L: NodeListener> NodeBindings<L> {
	pub fn new() -> Self {
		Self::default()
	}

	/// Number of node groups currently bound.
	pub fn len(&self) -> usize {
		self.listeners.len()
	}

	pub fn is_empty(&self) -> bool {
		self.listeners.is_empty()
	}

	/// Attach `on_click` to every node group of `surface`. Returns how many
	/// groups were bound by this call.
	pub fn bind<S>(&mut self, surface: &S, on_click: impl Fn(String) + 'static) -> usize
	where
		S: NodeSurface<Listener = L> + ?Sized,
	{
		let attached = surface.attach(Rc::new(on_click));
		let bound = attached.len();
		self.listeners.extend(attached);
		bound
	}

	/// Detach every handler added by [`NodeBindings::bind`].
	pub fn clear(&mut self) {
		for listener in self.listeners.drain(..) {
			listener.detach();
		}
	}
}

impl<L: NodeListener> Drop for NodeBindings<L> {
	fn drop(&mut self) {
		self.clear();
	}
}

/// Canonical label from a node's title text. Empty titles carry no label.
fn node_label(title: Option<String>) -> Option<String> {
	title.filter(|t| !t.is_empty())
}

#[cfg(test)]
mod tests {
	use std::cell::{Cell, RefCell};

	use super::*;

	type Handlers = Rc<RefCell<Vec<(usize, u64, Rc<dyn Fn(String)>)>>>;

	/// In-memory region: one entry per installed handler, keyed by node.
	struct FakeRegion {
		titles: Vec<&'static str>,
		handlers: Handlers,
		next_id: Cell<u64>,
	}

	struct FakeListener {
		handlers: Handlers,
		id: u64,
	}

	impl NodeListener for FakeListener {
		fn detach(self) {
			self.handlers.borrow_mut().retain(|(_, id, _)| *id != self.id);
		}
	}

	impl NodeSurface for FakeRegion {
		type Listener = FakeListener;

		fn attach(&self, on_click: Rc<dyn Fn(String)>) -> Vec<FakeListener> {
			(0..self.titles.len())
				.map(|node| {
					let id = self.next_id.get();
					self.next_id.set(id + 1);
					self.handlers.borrow_mut().push((node, id, on_click.clone()));
					FakeListener {
						handlers: self.handlers.clone(),
						id,
					}
				})
				.collect()
		}
	}

	impl FakeRegion {
		fn new(titles: &[&'static str]) -> Self {
			Self {
				titles: titles.to_vec(),
				handlers: Rc::default(),
				next_id: Cell::new(0),
			}
		}

		fn handlers_on(&self, node: usize) -> usize {
			self.handlers.borrow().iter().filter(|(n, ..)| *n == node).count()
		}

		fn installed(&self) -> usize {
			self.handlers.borrow().len()
		}

		fn click(&self, node: usize) {
			let handlers: Vec<_> = self
				.handlers
				.borrow()
				.iter()
				.filter(|(n, ..)| *n == node)
				.map(|(_, _, h)| h.clone())
				.collect();
			for handler in handlers {
				handler(self.titles[node].to_string());
			}
		}
	}

	fn recorder() -> (Rc<RefCell<Vec<String>>>, impl Fn(String) + 'static) {
		let clicks = Rc::new(RefCell::new(Vec::new()));
		let sink = clicks.clone();
		(clicks, move |label: String| sink.borrow_mut().push(label))
	}

	#[test]
	fn title_text_is_the_label() {
		assert_eq!(
			node_label(Some("User Inputs Query".into())).as_deref(),
			Some("User Inputs Query")
		);
	}

	#[test]
	fn missing_or_empty_title_has_no_label() {
		assert_eq!(node_label(None), None);
		assert_eq!(node_label(Some(String::new())), None);
	}

	#[test]
	fn new_bindings_are_empty() {
		let bindings = NodeBindings::<DomListener>::new();
		assert!(bindings.is_empty());
		assert_eq!(bindings.len(), 0);
	}

	#[test]
	fn bind_attaches_one_handler_per_node() {
		let region = FakeRegion::new(&["User Inputs Query", "Cache Check"]);
		let mut bindings = NodeBindings::new();
		let (clicks, on_click) = recorder();
		assert_eq!(bindings.bind(&region, on_click), 2);
		assert_eq!(bindings.len(), 2);

		region.click(1);
		assert_eq!(*clicks.borrow(), vec!["Cache Check".to_string()]);
	}

	#[test]
	fn rebinding_after_clear_keeps_one_handler_per_node() {
		let region = FakeRegion::new(&["a", "b", "c"]);
		let mut bindings = NodeBindings::new();
		let (clicks, on_click) = recorder();
		bindings.bind(&region, on_click);

		bindings.clear();
		assert!(bindings.is_empty());
		assert_eq!(region.installed(), 0);

		let (_, on_click) = recorder();
		bindings.bind(&region, on_click);
		let (_, on_click) = recorder();
		bindings.clear();
		bindings.bind(&region, on_click);
		for node in 0..3 {
			assert_eq!(region.handlers_on(node), 1);
		}
		assert_eq!(bindings.len(), 3);

		region.click(0);
		assert!(clicks.borrow().is_empty());
	}

	#[test]
	fn one_click_reports_one_label() {
		let region = FakeRegion::new(&["a", "b"]);
		let mut bindings = NodeBindings::new();
		let (clicks, on_click) = recorder();
		bindings.clear();
		bindings.bind(&region, on_click);
		region.click(0);
		region.click(0);
		assert_eq!(*clicks.borrow(), vec!["a".to_string(), "a".to_string()]);
	}

	#[test]
	fn dropping_bindings_detaches_everything() {
		let region = FakeRegion::new(&["a", "b", "c", "d"]);
		{
			let mut bindings = NodeBindings::new();
			let (_, on_click) = recorder();
			bindings.bind(&region, on_click);
			assert_eq!(region.installed(), 4);
		}
		assert_eq!(region.installed(), 0);
	}

	#[test]
	fn empty_region_binds_nothing() {
		let region = FakeRegion::new(&[]);
		let mut bindings = NodeBindings::new();
		let (_, on_click) = recorder();
		assert_eq!(bindings.bind(&region, on_click), 0);
		assert!(bindings.is_empty());
	}
}
