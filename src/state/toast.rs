#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub message: String,
    pub kind: ToastKind,
}

/// Holds at most one toast. Showing a new one replaces the current one;
/// a dismiss only lands if its id still matches, so the auto-dismiss
/// timer of a replaced or manually-closed toast is a no-op.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Notifier {
    next_id: u32,
    current: Option<Toast>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    pub fn show(&mut self, message: impl Into<String>, kind: ToastKind) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.current = Some(Toast {
            id,
            message: message.into(),
            kind,
        });
        id
    }

    pub fn dismiss(&mut self, id: u32) {
        if self.current.as_ref().map(|toast| toast.id) == Some(id) {
            self.current = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_most_one_toast_regardless_of_call_frequency() {
        let mut notifier = Notifier::new();
        for i in 0..10 {
            notifier.show(format!("toast {}", i), ToastKind::Success);
            assert_eq!(notifier.current().map(|t| t.message.as_str()), Some(format!("toast {}", i)).as_deref());
        }
    }

    #[test]
    fn stale_timer_dismiss_is_a_no_op() {
        let mut notifier = Notifier::new();
        let first = notifier.show("first", ToastKind::Error);
        let second = notifier.show("second", ToastKind::Success);
        notifier.dismiss(first);
        assert_eq!(notifier.current().map(|t| t.id), Some(second));
        notifier.dismiss(second);
        assert!(notifier.current().is_none());
    }

    #[test]
    fn dismiss_after_manual_close_is_a_no_op() {
        let mut notifier = Notifier::new();
        let id = notifier.show("only", ToastKind::Success);
        notifier.dismiss(id);
        notifier.dismiss(id);
        assert!(notifier.current().is_none());
    }
}
