//! Graph-description rendering and node interaction.
//!
//! The pipeline turns DOT text into a clickable SVG region:
//! - `dot` parses the description into a [`GraphModel`]
//! - `layout` assigns ranks and positions (layered, top to bottom)
//! - `render` applies the [`Theme`] and serializes a [`VisualTree`] to SVG
//! - `binder` attaches one click handler per node group
//!
//! # Example
//!
//! ```ignore
//! use rag_arch_viewer::components::diagram::{LayeredRenderer, Renderer};
//!
//! let tree = LayeredRenderer::default().render("digraph { a -> b }")?;
//! assert_eq!(tree.nodes.len(), 2);
//! let svg = tree.to_svg();
//! ```

pub mod binder;
mod component;
pub mod dot;
mod error;
pub mod layout;
pub mod render;
pub mod theme;
mod types;

pub use binder::{NodeBindings, NodeListener, NodeSurface};
pub use component::DiagramView;
pub use error::RenderError;
pub use layout::LayoutConfig;
pub use render::{LayeredRenderer, Renderer, VisualTree};
pub use theme::{Color, Theme};
pub use types::{Cluster, GraphEdge, GraphModel, GraphNode};
