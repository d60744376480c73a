//! Report Output Port

use crate::error::Result;
use crate::value_objects::Line;

/// Line-oriented sink for report output
///
/// Lines are written as they are produced, so a failure part way through a
/// report leaves the earlier lines in the sink.
pub trait ReportOutput {
    /// Write one line
    fn write_line(&mut self, line: &Line) -> Result<()>;

    /// Write an empty line
    fn write_blank(&mut self) -> Result<()> {
        self.write_line(&Line::blank())
    }
}

impl<T: ReportOutput + ?Sized> ReportOutput for &mut T {
    fn write_line(&mut self, line: &Line) -> Result<()> {
        (**self).write_line(line)
    }
}

impl ReportOutput for Vec<Line> {
    fn write_line(&mut self, line: &Line) -> Result<()> {
        self.push(line.clone());
        Ok(())
    }
}
