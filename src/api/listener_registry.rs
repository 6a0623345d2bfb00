use crate::error::{ChartError, ChartResult};
use crate::extensions::ChartListener;

use super::ChartView;

impl ChartView {
    /// Registers a listener with a unique identifier.
    pub fn register_listener(&mut self, listener: Box<dyn ChartListener>) -> ChartResult<()> {
        let listener_id = listener.id().to_owned();
        if listener_id.is_empty() {
            return Err(ChartError::InvalidData(
                "listener id must not be empty".to_owned(),
            ));
        }
        if self.listeners.contains_key(&listener_id) {
            return Err(ChartError::InvalidData(format!(
                "listener with id `{listener_id}` is already registered"
            )));
        }
        self.listeners.insert(listener_id, listener);
        Ok(())
    }

    /// Unregisters a listener by id. Returns `true` when removed.
    pub fn unregister_listener(&mut self, listener_id: &str) -> bool {
        self.listeners.shift_remove(listener_id).is_some()
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    #[must_use]
    pub fn has_listener(&self, listener_id: &str) -> bool {
        self.listeners.contains_key(listener_id)
    }
}
