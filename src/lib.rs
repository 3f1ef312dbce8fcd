//! # panekit
//!
//! A composable container/element layer for building dockable interfaces:
//! nestable containers (bin, paned, notebook) hold interchangeable leaf
//! elements whose content comes from pluggable providers, and the whole
//! arrangement round-trips through a symbolic snapshot that can be persisted
//! and rebuilt against externally supplied factories.
//!
//! ## Core Systems
//!
//! - **[`tree`]** — Slotmap-backed arena of nodes: the element state machine
//!   and the bin/paned/notebook container family
//! - **[`provider`]** — The plugin contract for leaf content, plus the
//!   registry used to resolve provider names at load time
//! - **[`content`]** — Object-safe boundary for provider-supplied content
//! - **[`props`]** — The typed snapshot tree and its serde encoding
//! - **[`ops`]** — Structural helpers: reparent, split, collapse, swap
//! - **[`interface`]** — Whole-tree serialization and reconstruction driver
//! - **[`event`]** — Synchronous tree events and mouse-button forwarding
//! - **[`error`]** — The error taxonomy shared by every fallible operation
//! - **[`testing`]** — Content types and a provider for use in tests

// Foundation
pub mod content;
pub mod error;
pub mod event;
pub mod props;

// Providers
pub mod provider;

// The live tree and operations over it
pub mod ops;
pub mod tree;

// Serialization driver
pub mod interface;

// Test doubles
pub mod testing;
