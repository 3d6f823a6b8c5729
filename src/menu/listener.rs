/// Something that can attach and detach a single global event listener.
///
/// Browser implementations live in `components::navigation::outside_click` and
/// `components::layout::scroll_watch`; tests use a counting fake.
pub trait ListenerHost: Clone {
    type Handle;

    fn attach(&self) -> Self::Handle;

    fn detach(&self, handle: Self::Handle);
}

/// Holds an attached listener and detaches it when dropped.
pub struct ListenerGuard<H: ListenerHost> {
    host: H,
    handle: Option<H::Handle>,
}

impl<H: ListenerHost> ListenerGuard<H> {
    pub fn attach(host: &H) -> Self {
        let handle = host.attach();
        Self {
            host: host.clone(),
            handle: Some(handle),
        }
    }
}

impl<H: ListenerHost> Drop for ListenerGuard<H> {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.host.detach(handle);
        }
    }
}

#[cfg(test)]
pub(crate) mod fake {
    use super::ListenerHost;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub enum Call {
        Attach(usize),
        Detach(usize),
    }

    /// Records every attach/detach; handles are sequence numbers.
    #[derive(Clone, Default)]
    pub struct RecordingHost {
        calls: Rc<RefCell<Vec<Call>>>,
        next: Rc<RefCell<usize>>,
    }

    impl RecordingHost {
        pub fn calls(&self) -> Vec<Call> {
            self.calls.borrow().clone()
        }

        /// Listeners attached and not yet detached.
        pub fn live(&self) -> usize {
            let calls = self.calls.borrow();
            let attached = calls.iter().filter(|c| matches!(c, Call::Attach(_))).count();
            attached - (calls.len() - attached)
        }
    }

    impl ListenerHost for RecordingHost {
        type Handle = usize;

        fn attach(&self) -> usize {
            let mut next = self.next.borrow_mut();
            *next += 1;
            self.calls.borrow_mut().push(Call::Attach(*next));
            *next
        }

        fn detach(&self, handle: usize) {
            self.calls.borrow_mut().push(Call::Detach(handle));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fake::{Call, RecordingHost};
    use super::*;

    #[test]
    fn test_guard_detaches_on_drop() {
        let host = RecordingHost::default();
        let guard = ListenerGuard::attach(&host);
        assert_eq!(host.live(), 1);
        drop(guard);
        assert_eq!(host.calls(), vec![Call::Attach(1), Call::Detach(1)]);
        assert_eq!(host.live(), 0);
    }
}
