//! Presentation components.
//!
//! Every component is a pure projection of a slice of the content schema (plus
//! the selector/playground/copied state handed to it) into the [`Context`]
//! buffer. Components for optional schema fields are only called when the
//! field is present; list components write nothing for empty input.
//!
//! [`Context`]: crate::renderer::Context

mod comparison;
mod diagram;
mod examples;
mod mental_model;
mod mistakes;
pub mod playground;
mod switcher;
mod tips;
mod utility_grid;

pub use comparison::comparison_table;
pub use diagram::diagram;
pub use examples::{example_cards, example_identity};
pub use mental_model::mental_model;
pub use mistakes::mistake_callouts;
pub use playground::{PlaygroundOutput, playground, playground_identity};
pub use switcher::variant_switcher;
pub use tips::tips_list;
pub use utility_grid::{chip_identity, utility_grid};
