/// Remembers the last value pushed to an output (DOM text, style) so the
/// writer can skip frames where nothing changed.
#[derive(Clone, Debug, PartialEq)]
pub struct LastWritten<T> {
    value: Option<T>,
}

impl<T> Default for LastWritten<T> {
    fn default() -> Self {
        Self { value: None }
    }
}

impl<T: PartialEq> LastWritten<T> {
    /// Record `value`. Returns true when it differs from the previous one,
    /// and always on the first call.
    pub fn set(&mut self, value: T) -> bool {
        if self.value.as_ref() == Some(&value) {
            return false;
        }
        self.value = Some(value);
        true
    }
}
