#[derive(Debug, Clone, Copy, Eq, Ord, Default, PartialEq, PartialOrd, Hash)]
pub enum FileMode {
    #[default]
    Regular,
    Executable,
}

/// Mode token of a tree entry, stored as octal digits in the tree payload.
#[derive(Debug, Clone, Eq, Ord, Default, PartialEq, PartialOrd, Hash)]
pub enum EntryMode {
    File(FileMode),
    Symlink,
    Gitlink,
    #[default]
    Directory,
    /// Any other digit-only token, kept verbatim (e.g. `100640` from old git)
    Other(String),
}

impl EntryMode {
    pub fn as_str(&self) -> &str {
        match self {
            EntryMode::File(FileMode::Regular) => "100644",
            EntryMode::File(FileMode::Executable) => "100755",
            EntryMode::Symlink => "120000",
            EntryMode::Gitlink => "160000",
            EntryMode::Directory => "40000",
            EntryMode::Other(token) => token.as_str(),
        }
    }

    /// Only subtree entries are descended into; gitlinks point at commits
    /// of another repository.
    pub fn is_tree(&self) -> bool {
        matches!(self, EntryMode::Directory)
    }

    /// Kind of object the entry's id refers to, as printed by `ls-tree`.
    pub fn object_kind(&self) -> &str {
        match self {
            EntryMode::Directory => "tree",
            EntryMode::Gitlink => "commit",
            EntryMode::File(_) | EntryMode::Symlink | EntryMode::Other(_) => "blob",
        }
    }

    /// Parse the octal digits of a tree entry mode.
    ///
    /// Older git versions wrote regular files as `100664`; they are read as
    /// regular files, matching what git itself does. Unrecognised digit-only
    /// tokens become [`EntryMode::Other`] leaves.
    pub fn from_octal_str(value: &str) -> anyhow::Result<Self> {
        match value {
            "100644" | "100664" => Ok(EntryMode::File(FileMode::Regular)),
            "100755" => Ok(EntryMode::File(FileMode::Executable)),
            "120000" => Ok(EntryMode::Symlink),
            "160000" => Ok(EntryMode::Gitlink),
            "40000" | "040000" => Ok(EntryMode::Directory),
            _ if !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit()) => {
                Ok(EntryMode::Other(value.to_string()))
            }
            _ => Err(anyhow::anyhow!("Invalid entry mode {value:?}")),
        }
    }
}

impl std::fmt::Display for EntryMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
