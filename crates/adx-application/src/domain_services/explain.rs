//! Admin Explain Service Interface

use adx_domain::error::Result;
use adx_domain::ports::ReportOutput;

/// Explains a configured admin service
///
/// # Example
///
/// ```ignore
/// let mut lines = Vec::new();
/// service.explain("news.admin.post", &mut lines)?;
/// ```
pub trait ExplainAdminServiceInterface: Send + Sync {
    /// Write the explain report of the admin registered under `code`
    ///
    /// Fails with `AdminNotFound` before writing anything when the code is
    /// unknown, and with `MetadataResolution` after the form sections when
    /// the model class has no validation metadata.
    fn explain(&self, code: &str, output: &mut dyn ReportOutput) -> Result<()>;
}
