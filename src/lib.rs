//! Interactive piece board: circular pieces on a 2D surface that the user can
//! select and drag with a pointer.
//!
//! The crate compiles to WebAssembly and runs in the browser, but everything
//! except [`engine::Engine`] and the `CanvasRenderingContext2d` surface is plain
//! Rust and is exercised natively by the test suite. The host layer wires DOM
//! pointer events into the engine and forwards [`engine::MoveCompleted`]
//! notifications to whatever sync transport it uses.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and the testable [`engine::EngineCore`] state machine |
//! | [`store`] | Piece type and the ordered in-memory store |
//! | [`geometry`] | Points, distance checks and z-ordered hit-testing |
//! | [`input`] | Pointer events, drag state and selection |
//! | [`render`] | Drawing contract and the scene renderer |
//! | [`surface`] | Device-to-logical coordinate mapping |
//! | [`config`] | Board configuration and defaults |
//! | [`consts`] | Shared numeric constants (piece radius, stroke, canvas size) |

pub mod config;
pub mod consts;
pub mod engine;
pub mod geometry;
pub mod input;
pub mod render;
pub mod store;
pub mod surface;
