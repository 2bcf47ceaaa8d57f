/// The raw payloads collected from one mutation block.
///
/// Payloads are stored exactly as they appeared between an operation's
/// braces (trimmed of surrounding whitespace) and are never interpreted.
/// When an operation kind appears more than once, the last one wins.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Mutation {
    /// Payload of the last `set` / `add` operation.
    pub set_nquads: Option<Vec<u8>>,
    /// Payload of the last `delete` / `remove` operation.
    pub del_nquads: Option<Vec<u8>>,
}

impl Mutation {
    /// Returns `true` if neither payload is present.
    pub fn is_empty(&self) -> bool {
        self.set_nquads.is_none() && self.del_nquads.is_none()
    }
}
