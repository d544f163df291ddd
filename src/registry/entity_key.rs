use slotmap::Key;

new_key_type! {
    /// Identity the registry gives an entity when it is added. A removed entity's key is never
    /// handed out again.
    pub struct EntityKey;
}

impl std::fmt::Display for EntityKey {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if self.is_null() {
            write!(f, "#null")
        } else {
            // Low half of the ffi value is the slot index, high half is the slot version
            let raw = self.data().as_ffi();
            write!(f, "#{}:{}", raw & 0xffff_ffff, raw >> 32)
        }
    }
}
