//! utilidoc core: the utility-family content schema, the content registry,
//! and the interaction state (variant selection, playgrounds, copy feedback)
//! that reference pages are built from.

/// Click-to-copy service with a transient copied indicator.
pub mod clipboard;
/// Auto-advancing demo frames.
pub mod cycle;
/// Error and diagnostic types.
pub mod error;
/// Class-name playgrounds.
pub mod playground;
/// Slug → family registry and built-in content.
pub mod registry;
/// Declarative content schema for one utility family.
pub mod schema;
/// Variant selection state for a family page.
pub mod selector;
/// Slug and anchor-id helpers.
pub mod slug;
/// Host timer seam and scoped timer handles.
pub mod timer;
/// Construction-time content checks.
pub mod validate;

pub use clipboard::{
    ChangeListener, ClipboardHost, ClipboardOptions, ClipboardService, CopyCallback,
    CopyOutcome, RecordingClipboard,
};
pub use cycle::{AutoCycle, CycleOptions};
pub use error::{ContentError, IssueKind, IssueSeverity, SchemaDiagnostics, SchemaIssue};
pub use playground::{
    ControlDimension, MarkupBuilder, MarkupTemplate, Playground, PlaygroundSpec, Selection,
};
pub use registry::defaults::default_registry;
pub use registry::{
    ContentModule, ContentRegistry, RegistryBuilder, RegistryOptions, ValidationMode,
};
pub use schema::{
    AdditionalSection, CodeExample, ComparisonRow, ComparisonTable, Diagram, Mistake,
    MistakeLevel, UtilityContent, VariantMap, VariantView,
};
pub use selector::{VariantOption, VariantSelector};
pub use slug::{Slugger, is_valid_slug, slugify};
pub use timer::{ManualScheduler, Scheduler, TimerGuard, TimerId};
pub use validate::validate_content;
