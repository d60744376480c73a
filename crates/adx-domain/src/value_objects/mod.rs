//! Value Objects
//!
//! Immutable views of the externally owned admin entities the explain report
//! reads, plus the styled line type the report is written in.
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`Route`], [`RouteCollection`] | Admin routes keyed by route code |
//! | [`FieldDescription`], [`FieldDescriptionCollection`] | List, filter and form fields |
//! | [`Constraint`], [`MemberMetadata`], [`ClassMetadata`] | Validation metadata |
//! | [`Line`], [`Span`], [`Tag`] | Report output lines with console markup |

/// Field descriptions of list, filter and form views
pub mod field_description;
/// Report output lines
pub mod report;
/// Admin routes
pub mod route;
/// Validation metadata
pub mod validation;

pub use field_description::{FieldDescription, FieldDescriptionCollection};
pub use report::{Line, Span, Tag};
pub use route::{Route, RouteCollection};
pub use validation::{ClassMetadata, Constraint, MemberMap, MemberMetadata};
