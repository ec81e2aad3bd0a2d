use log::debug;

use crate::PageError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageState<T> {
    Loading,
    Error(PageError),
    Content(T),
}

impl<T> Default for PageState<T> {
    fn default() -> Self {
        PageState::Loading
    }
}

impl<T> From<Result<T, PageError>> for PageState<T> {
    fn from(value: Result<T, PageError>) -> Self {
        match value {
            Ok(content) => PageState::Content(content),
            Err(err) => PageState::Error(err),
        }
    }
}

/// Handle of one fetch cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct FetchTicket {
    generation: u64,
}

/// Tracks the state of a page that is loaded from a route identifier.
///
/// Every change of the identifier starts a new fetch cycle. Results of earlier cycles are
/// discarded when they arrive late.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageController<T> {
    state: PageState<T>,
    identifier: Option<String>,
    generation: u64,
}

impl<T> Default for PageController<T> {
    fn default() -> Self {
        Self {
            state: PageState::Loading,
            identifier: None,
            generation: 0,
        }
    }
}

impl<T> PageController<T> {
    #[must_use]
    pub fn state(&self) -> &PageState<T> {
        &self.state
    }

    /// Begins a fetch cycle for `identifier`.
    ///
    /// Returns `None` if the identifier is absent or did not change. An absent identifier leaves
    /// the page loading.
    pub fn start(&mut self, identifier: Option<&str>) -> Option<FetchTicket> {
        let identifier = identifier.filter(|i| !i.is_empty());

        if identifier.is_some() && identifier == self.identifier.as_deref() {
            return None;
        }

        self.generation += 1;
        self.identifier = identifier.map(ToString::to_string);
        self.state = PageState::Loading;

        if self.identifier.is_none() {
            debug!("no identifier, not fetching");
            return None;
        }

        Some(FetchTicket {
            generation: self.generation,
        })
    }

    /// Applies the outcome of a fetch cycle.
    ///
    /// Returns `false` and leaves the state untouched if a newer cycle has started since.
    pub fn finish(&mut self, ticket: FetchTicket, result: Result<T, PageError>) -> bool {
        if ticket.generation != self.generation {
            debug!(
                "discarding stale result of generation {} (current: {})",
                ticket.generation, self.generation
            );
            return false;
        }
        self.state = PageState::from(result);
        true
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_page_controller_initial_state() {
        let controller = PageController::<u32>::default();
        assert_eq!(*controller.state(), PageState::Loading);
    }

    #[test]
    fn test_page_controller_content() {
        let mut controller = PageController::default();

        let ticket = controller.start(Some("1")).unwrap();
        assert_eq!(*controller.state(), PageState::Loading);

        assert!(controller.finish(ticket, Ok(42)));
        assert_eq!(*controller.state(), PageState::Content(42));
    }

    #[test]
    fn test_page_controller_error() {
        let mut controller = PageController::<u32>::default();

        let ticket = controller.start(Some("1")).unwrap();

        assert!(controller.finish(ticket, Err(PageError::ExerciseNotFound)));
        assert_eq!(
            *controller.state(),
            PageState::Error(PageError::ExerciseNotFound)
        );
    }

    #[test]
    fn test_page_controller_missing_identifier() {
        let mut controller = PageController::<u32>::default();

        assert_eq!(controller.start(None), None);
        assert_eq!(controller.start(Some("")), None);
        assert_eq!(*controller.state(), PageState::Loading);
    }

    #[test]
    fn test_page_controller_unchanged_identifier() {
        let mut controller = PageController::default();

        let ticket = controller.start(Some("1")).unwrap();
        assert!(controller.finish(ticket, Ok(1)));

        assert_eq!(controller.start(Some("1")), None);
        assert_eq!(*controller.state(), PageState::Content(1));
    }

    #[test]
    fn test_page_controller_changed_identifier_reenters_loading() {
        let mut controller = PageController::default();

        let ticket = controller.start(Some("1")).unwrap();
        assert!(controller.finish(ticket, Ok(1)));

        let ticket = controller.start(Some("2")).unwrap();
        assert_eq!(*controller.state(), PageState::Loading);

        assert!(controller.finish(ticket, Ok(2)));
        assert_eq!(*controller.state(), PageState::Content(2));
    }

    #[test]
    fn test_page_controller_discards_stale_result() {
        let mut controller = PageController::default();

        let stale = controller.start(Some("1")).unwrap();
        let current = controller.start(Some("2")).unwrap();

        assert!(controller.finish(current, Ok(2)));
        assert!(!controller.finish(stale, Ok(1)));
        assert_eq!(*controller.state(), PageState::Content(2));
    }

    #[test]
    fn test_page_controller_discards_result_after_identifier_removed() {
        let mut controller = PageController::default();

        let stale = controller.start(Some("1")).unwrap();
        assert_eq!(controller.start(None), None);

        assert!(!controller.finish(stale, Ok(1)));
        assert_eq!(*controller.state(), PageState::Loading);
    }

    #[test]
    fn test_page_state_from_result() {
        assert_eq!(PageState::from(Ok::<_, PageError>(1)), PageState::Content(1));
        assert_eq!(
            PageState::<u32>::from(Err(PageError::MemberNotFound)),
            PageState::Error(PageError::MemberNotFound)
        );
    }
}
