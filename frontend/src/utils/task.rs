use futures::future::{abortable, AbortHandle};
use leptos::*;
use std::{cell::RefCell, future::Future, rc::Rc};

/// Holds at most one pending task. Spawning aborts the previous task and
/// disposal of the owning component aborts the current one, so a completed
/// future never writes into signals that outlived their view.
#[derive(Clone, Default)]
pub struct TaskSlot {
    handle: Rc<RefCell<Option<AbortHandle>>>,
}

impl TaskSlot {
    /// Creates a slot that is cancelled when the current reactive owner is disposed.
    pub fn new() -> Self {
        let slot = Self::default();
        let on_dispose = slot.clone();
        on_cleanup(move || on_dispose.cancel());
        slot
    }

    pub fn spawn<F>(&self, fut: F)
    where
        F: Future<Output = ()> + 'static,
    {
        self.cancel();
        let (task, handle) = abortable(fut);
        *self.handle.borrow_mut() = Some(handle);
        let slot = self.handle.clone();
        spawn_local(async move {
            if task.await.is_err() {
                log::debug!("Pending task aborted");
                return;
            }
            slot.borrow_mut().take();
        });
    }

    pub fn cancel(&self) {
        if let Some(handle) = self.handle.borrow_mut().take() {
            handle.abort();
        }
    }

    #[cfg(test)]
    pub fn is_pending(&self) -> bool {
        self.handle
            .borrow()
            .as_ref()
            .map(|h| !h.is_aborted())
            .unwrap_or(false)
    }
}
