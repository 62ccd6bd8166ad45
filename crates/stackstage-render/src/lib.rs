//! # stackstage-render
//!
//! **Tier 2 (Section Rendering)**
//!
//! Turns an `AnalysisResult` into a [`ReportDocument`]: an ordered list of
//! sections, each owning a reserved vertical region and the primitive drawing
//! operations inside it. Nothing here knows about PDF.
//!
//! ## What belongs here
//! * Drawing primitives ([`DrawOp`]) and the bounds-checked [`SectionCanvas`]
//! * The six section renderers and the [`SectionRenderer`] seam
//! * [`ReportBuilder`] / [`compose`], which run the renderers in fixed order
//!
//! ## What does NOT belong here
//! * Byte encoding of the document (use stackstage-pdf)
//! * Transport encodings, filenames, store access (use stackstage-core)

#![forbid(unsafe_code)]

pub mod builder;
pub mod canvas;
pub mod document;
pub mod ops;
pub mod sections;

pub use builder::{
    DEFAULT_FRAME, DEFAULT_MAX_ISSUES, DEFAULT_MAX_RECOMMENDATIONS, RenderError, RenderOptions,
    ReportBuilder, analysis_date, compose, generated_label,
};
pub use canvas::{SectionCanvas, TextStyle};
pub use document::{ReportDocument, Section, SectionKind};
pub use ops::{Align, DrawOp, Font, TextRun};
pub use sections::{SectionRenderer, display_score, render_section};
