use crate::domain::model::Country;
use crate::utils::error::Result;
use std::io::Write;

/// Prints countries as a numbered list, one `<idx>. <name>: <population> (<area>)` line each.
pub struct ConsoleWriter<W: Write> {
    out: W,
}

impl<W: Write> ConsoleWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn write_countries(&mut self, countries: &[Country]) -> Result<()> {
        writeln!(self.out, "Result:")?;
        for (i, c) in countries.iter().enumerate() {
            writeln!(self.out, "{}. {}: {} ({})", i + 1, c.name, c.population, c.area)?;
        }
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
