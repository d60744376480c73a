//! Domain layer constants

// ============================================================================
// ROUTE CONSTANTS
// ============================================================================

/// Route default holding the admin-scoped route name
pub const SONATA_NAME_DEFAULT: &str = "_sonata_name";

// ============================================================================
// VALIDATION CONSTANTS
// ============================================================================

/// Group applied to constraints declared without explicit groups
pub const DEFAULT_VALIDATION_GROUP: &str = "Default";

/// Separator used when printing a constraint's groups
pub const VALIDATION_GROUP_SEPARATOR: &str = "|";

// ============================================================================
// REPORT LAYOUT CONSTANTS
// ============================================================================

/// Label width of the identity block
pub const IDENTITY_LABEL_WIDTH: usize = 20;

/// Label width of the parent line
pub const PARENT_LABEL_WIDTH: usize = 15;

/// Width of route names and field names in listing sections
pub const NAME_COLUMN_WIDTH: usize = 25;

/// Width of the type and template columns of field listings
pub const FIELD_COLUMN_WIDTH: usize = 15;

/// Width of the constraint kind column
pub const CONSTRAINT_KIND_WIDTH: usize = 70;
