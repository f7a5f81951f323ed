/// Who is looking at a comment listing.
///
/// Visitors are unauthenticated readers: every like state they observe is `false`
/// and the like oracle is never consulted on their behalf.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Viewer {
    Visitor,
    User(i32),
}

impl Viewer {
    /// Returns the viewer's user id, or `None` for visitors.
    pub fn user_id(&self) -> Option<i32> {
        match self {
            Self::Visitor => None,
            Self::User(id) => Some(*id),
        }
    }
}
