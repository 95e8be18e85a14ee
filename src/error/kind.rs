//! Failure classification kinds and their ancestry.

use strum::{Display, EnumIter, EnumString};

/// Classification of a failure.
///
/// Kinds form a tree rooted at [`Generic`](Self::Generic); every other kind
/// has exactly one parent. Matching is ancestry-aware: a handler interested
/// in a broad kind accepts every kind beneath it, see
/// [`is_within`](Self::is_within).
///
/// ```text
/// generic
/// ├── api
/// │   ├── request
/// │   └── authentication
/// ├── orchestration
/// │   └── invalid_template
/// └── immutable
/// ```
///
/// ## Examples
///
/// ```rust
/// use gripe::ErrorKind;
///
/// assert!(ErrorKind::Request.is_within(ErrorKind::Api));
/// assert!(ErrorKind::Request.is_within(ErrorKind::Generic));
/// assert!(!ErrorKind::InvalidTemplate.is_within(ErrorKind::Api));
///
/// // Parse from string
/// let parsed: ErrorKind = "invalid_template".parse().unwrap();
/// assert_eq!(parsed, ErrorKind::InvalidTemplate);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum ErrorKind {
    /// Any failure; the root of the hierarchy.
    Generic,
    /// Failure raised from a remote API call.
    Api,
    /// The API rejected or could not complete the request itself.
    Request,
    /// The API rejected the caller's credentials.
    Authentication,
    /// Failure while orchestrating a remote workflow.
    Orchestration,
    /// An orchestration template failed validation.
    InvalidTemplate,
    /// A sealed value was asked to change.
    Immutable,
}

impl ErrorKind {
    /// Returns the immediate parent kind, or `None` for
    /// [`Generic`](Self::Generic).
    pub const fn parent(self) -> Option<Self> {
        match self {
            Self::Generic => None,
            Self::Api | Self::Orchestration | Self::Immutable => Some(Self::Generic),
            Self::Request | Self::Authentication => Some(Self::Api),
            Self::InvalidTemplate => Some(Self::Orchestration),
        }
    }

    /// Returns `true` if this kind is `ancestor` or sits anywhere beneath
    /// it in the tree.
    pub fn is_within(self, ancestor: Self) -> bool {
        self.lineage().any(|kind| kind == ancestor)
    }

    /// Iterates the classification chain from this kind up to
    /// [`Generic`](Self::Generic), both ends included.
    pub fn lineage(self) -> Lineage {
        Lineage { next: Some(self) }
    }
}

/// Iterator over an [`ErrorKind`]'s ancestry, most specific kind first.
#[derive(Debug, Clone)]
pub struct Lineage {
    next: Option<ErrorKind>,
}

impl Iterator for Lineage {
    type Item = ErrorKind;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.parent();
        Some(current)
    }
}
