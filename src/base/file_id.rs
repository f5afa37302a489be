/// Identifier of a source unit within a workspace.
///
/// Cheap to copy and compare; allocated by [`crate::project::Workspace`]
/// or chosen by callers that manage units themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FileId(u32);

impl FileId {
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    pub const fn index(self) -> u32 {
        self.0
    }
}

impl From<u32> for FileId {
    fn from(index: u32) -> Self {
        Self(index)
    }
}
