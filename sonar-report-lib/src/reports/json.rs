use super::ReportContext;
use crate::Result;
use core::fmt::Write;

pub fn generate<W: Write>(context: &ReportContext, writer: &mut W) -> Result<()> {
    writeln!(writer, "{}", serde_json::to_string_pretty(context)?)?;
    Ok(())
}
