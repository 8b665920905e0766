/// A record owned by a user whose identity is its persisted id.
pub trait ChildRecord: Clone + PartialEq {
    /// `None` means the record has not been persisted yet.
    fn id(&self) -> Option<i64>;

    fn set_id(&mut self, id: Option<i64>);
}
