use std::fmt;

/// A program plus ordered arguments that assigns a hardware address when run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl SetCommand {
    pub fn new<P, I, S>(program: P, args: I) -> Self
    where
        P: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for SetCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}
