use std::fmt;

/// The file a scan looks for inside commit trees.
///
/// A bare name matches an entry of that name at any depth. A slash-separated
/// path matches only that exact path from the root of the tree, the way
/// `git log -- <path>` filters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetFile {
    Name(String),
    Path(Vec<String>),
}

impl TargetFile {
    pub fn parse(value: &str) -> anyhow::Result<Self> {
        let mut components = value
            .split('/')
            .filter(|component| !component.is_empty() && *component != ".")
            .map(str::to_string)
            .collect::<Vec<_>>();

        if components.iter().any(|component| component == "..") {
            return Err(anyhow::anyhow!(
                "Invalid target file {value:?}: '..' is not allowed"
            ));
        }

        match components.len() {
            0 => Err(anyhow::anyhow!("Invalid target file {value:?}: empty name")),
            1 => Ok(TargetFile::Name(components.swap_remove(0))),
            _ => Ok(TargetFile::Path(components)),
        }
    }

    /// Path components still to be matched at the given position.
    pub(crate) fn component(&self, position: usize) -> &str {
        match self {
            TargetFile::Name(name) => name,
            TargetFile::Path(components) => &components[position],
        }
    }

    pub(crate) fn is_last(&self, position: usize) -> bool {
        match self {
            TargetFile::Name(_) => true,
            TargetFile::Path(components) => position + 1 == components.len(),
        }
    }
}

impl fmt::Display for TargetFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetFile::Name(name) => write!(f, "{name}"),
            TargetFile::Path(components) => write!(f, "{}", components.join("/")),
        }
    }
}
