use derive_more::Display;

/// Tag attached to every issued fetch so late responses can be recognised.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display("#{_0}")]
pub struct RequestId(u64);

impl RequestId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Monotonic source of [`RequestId`]s. Only the most recently issued id is
/// considered current.
#[derive(Debug, Clone, Default)]
pub struct RequestSequence {
    latest: Option<RequestId>,
}

impl RequestSequence {
    pub fn issue(&mut self) -> RequestId {
        let next = self.latest.map_or(1, |id| id.value() + 1);
        let id = RequestId::new(next);
        self.latest = Some(id);
        id
    }

    pub fn latest(&self) -> Option<RequestId> {
        self.latest
    }

    pub fn is_current(&self, id: RequestId) -> bool {
        self.latest == Some(id)
    }
}
