use crate::error::ForecastError;
use crate::models::ForecastPoint;

/// What one background fetch produced, tagged with the request generation
/// that started it.
pub(crate) struct FetchOutcome {
    pub generation: u64,
    pub result: Result<Vec<ForecastPoint>, ForecastError>,
}

/// Tracks the single outstanding request. The generation makes the
/// last-trigger-wins rule explicit: a settled outcome only counts if it
/// belongs to the most recently started request.
#[derive(Debug, Default)]
pub(crate) struct RequestState {
    in_flight: bool,
    generation: u64,
}

impl RequestState {
    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Start a new request, returning the generation to tag it with.
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.in_flight = true;
        self.generation
    }

    /// Settle an outcome. Returns false when the outcome belongs to a
    /// superseded request and must be discarded.
    pub fn try_settle(&mut self, generation: u64) -> bool {
        if generation != self.generation {
            return false;
        }
        self.in_flight = false;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_flight_strictly_brackets_a_request() {
        let mut state = RequestState::default();
        assert!(!state.is_in_flight());

        let generation = state.begin();
        assert!(state.is_in_flight());

        assert!(state.try_settle(generation));
        assert!(!state.is_in_flight());
    }

    #[test]
    fn settles_on_failure_path_too() {
        let mut state = RequestState::default();
        let generation = state.begin();
        // The caller settles regardless of Ok/Err; the state cannot tell.
        assert!(state.try_settle(generation));
        assert!(!state.is_in_flight());
    }

    #[test]
    fn superseded_generation_is_discarded() {
        let mut state = RequestState::default();
        let first = state.begin();
        let second = state.begin();
        assert_ne!(first, second);

        // The slower, earlier request resolves after the newer one started.
        assert!(!state.try_settle(first));
        assert!(state.is_in_flight());

        assert!(state.try_settle(second));
        assert!(!state.is_in_flight());
    }
}
