/// Page-turn lifecycle notifications, one per completed gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TurnEvent {
    /// Turned back to the previous page.
    PagePrevious,
    /// Turned to the next page.
    PageNext,
    /// A backward turn completed on the first page; the index is unchanged.
    FirstPage,
    /// A forward turn completed on the last page; the index is unchanged.
    LastPage,
    /// The gesture snapped back without turning.
    PageCancel,
}

impl TurnEvent {
    /// Forwards the event to the matching listener method.
    pub fn dispatch<L: PageTurnListener + ?Sized>(self, listener: &mut L) {
        match self {
            Self::PagePrevious => listener.on_page_pre(),
            Self::PageNext => listener.on_page_next(),
            Self::FirstPage => listener.on_first_page(),
            Self::LastPage => listener.on_last_page(),
            Self::PageCancel => listener.on_page_cancel(),
        }
    }
}

/// Receiver for page-turn lifecycle events. Every method defaults to a
/// no-op.
pub trait PageTurnListener {
    fn on_page_pre(&mut self) {}

    fn on_page_next(&mut self) {}

    fn on_first_page(&mut self) {}

    fn on_last_page(&mut self) {}

    fn on_page_cancel(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder(Vec<&'static str>);

    impl PageTurnListener for Recorder {
        fn on_page_pre(&mut self) {
            self.0.push("pre");
        }

        fn on_page_next(&mut self) {
            self.0.push("next");
        }

        fn on_first_page(&mut self) {
            self.0.push("first");
        }

        fn on_last_page(&mut self) {
            self.0.push("last");
        }

        fn on_page_cancel(&mut self) {
            self.0.push("cancel");
        }
    }

    struct Silent;

    impl PageTurnListener for Silent {}

    #[test]
    fn dispatch_routes_each_event() {
        let mut recorder = Recorder::default();
        for event in [
            TurnEvent::PagePrevious,
            TurnEvent::PageNext,
            TurnEvent::FirstPage,
            TurnEvent::LastPage,
            TurnEvent::PageCancel,
        ] {
            event.dispatch(&mut recorder);
        }
        assert_eq!(recorder.0, vec!["pre", "next", "first", "last", "cancel"]);
    }

    #[test]
    fn default_methods_are_no_ops() {
        let mut silent = Silent;
        TurnEvent::PageNext.dispatch(&mut silent);
        let listener: &mut dyn PageTurnListener = &mut silent;
        TurnEvent::PageCancel.dispatch(listener);
    }
}
