use kernel::id::Id;

pub struct CommentMarker;
pub type CommentId = Id<CommentMarker>;

impl CommentMarker {}
