use std::ffi::OsString;
use std::path::PathBuf;

/// Working copy depth for `svn update --set-depth`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Depth {
    Empty,
    Files,
    Immediates,
    Infinity,
}

impl Depth {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Files => "files",
            Self::Immediates => "immediates",
            Self::Infinity => "infinity",
        }
    }
}

/// Conflict resolution policy for `svn update --accept`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accept {
    Postpone,
    MineFull,
    TheirsFull,
}

impl Accept {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Postpone => "postpone",
            Self::MineFull => "mine-full",
            Self::TheirsFull => "theirs-full",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateFlag {
    SetDepth(Depth),
    Accept(Accept),
}

impl UpdateFlag {
    pub(crate) fn to_args(self) -> [OsString; 2] {
        match self {
            Self::SetDepth(depth) => ["--set-depth".into(), depth.as_str().into()],
            Self::Accept(accept) => ["--accept".into(), accept.as_str().into()],
        }
    }
}

/// First column of `svn status` output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    Normal,
    Added,
    Conflicted,
    Deleted,
    Ignored,
    Modified,
    Replaced,
    External,
    Unversioned,
    Missing,
    Obstructed,
}

impl StatusCode {
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        let code = match c {
            ' ' => Self::Normal,
            'A' => Self::Added,
            'C' => Self::Conflicted,
            'D' => Self::Deleted,
            'I' => Self::Ignored,
            'M' => Self::Modified,
            'R' => Self::Replaced,
            'X' => Self::External,
            '?' => Self::Unversioned,
            '!' => Self::Missing,
            '~' => Self::Obstructed,
            _ => return None,
        };
        Some(code)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusEntry {
    pub code: StatusCode,
    pub path: PathBuf,
}
