use heapless::Vec;

pub const RESPONSE_CAPACITY: usize = 64;

/// Visible part of a module reply, up to its first line feed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Response {
    bytes: Vec<u8, RESPONSE_CAPACITY>,
}

impl Response {
    pub fn new() -> Self {
        Self::default()
    }

    /// True iff the reply holds at least two bytes and they read `OK`.
    pub fn is_ok(&self) -> bool {
        self.bytes.starts_with(b"OK")
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn clear(&mut self) {
        self.bytes.clear();
    }

    pub(crate) fn buffer_mut(&mut self) -> &mut Vec<u8, RESPONSE_CAPACITY> {
        &mut self.bytes
    }
}

impl From<&[u8]> for Response {
    fn from(bytes: &[u8]) -> Self {
        let mut response = Response::new();
        let len = bytes.len().min(RESPONSE_CAPACITY);
        let _ = response.bytes.extend_from_slice(&bytes[..len]);
        response
    }
}
