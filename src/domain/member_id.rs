/// Primary key assigned by the database sequence at insert time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MemberId(i64);

impl MemberId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }
}

impl AsRef<i64> for MemberId {
    fn as_ref(&self) -> &i64 {
        &self.0
    }
}

#[test]
fn test_id_round_trip() {
    let id = MemberId::new(42);
    assert_eq!(*id.as_ref(), 42, "ID does not match expected value");
}
