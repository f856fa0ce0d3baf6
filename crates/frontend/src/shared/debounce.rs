//! Debounce gate for search-as-you-type lookups.
//!
//! The timing itself lives in the component layer (a `gloo_timers` timeout per
//! keystroke); this module holds the decision rules so they can be tested
//! natively. A keystroke invalidates every earlier pending timer, queries
//! under the minimum length clear results without a network call, and result
//! application is last-request-wins like the list controller.

pub const MIN_QUERY_LEN: usize = 2;
/// Quiet interval a query must be stable for before a search is issued.
pub const QUIET_MS: u32 = 350;

#[derive(Debug, Clone, PartialEq)]
pub enum GateAction {
    /// Query too short: drop current results, do not search.
    Clear,
    /// Arm a timer; when it elapses, fire only if `token` is still current.
    Schedule { token: u64, query: String },
}

#[derive(Debug, Clone, Default)]
pub struct LookupGate {
    keystroke: u64,
    request: u64,
}

impl LookupGate {
    pub fn on_input(&mut self, raw: &str) -> GateAction {
        // Every keystroke invalidates pending timers, including for queries
        // that end up too short.
        self.keystroke += 1;
        let query = raw.trim();
        if query.chars().count() < MIN_QUERY_LEN {
            return GateAction::Clear;
        }
        GateAction::Schedule {
            token: self.keystroke,
            query: query.to_string(),
        }
    }

    /// Called by an elapsed timer with its token; only the timer armed by the
    /// latest keystroke may fire.
    pub fn may_fire(&self, token: u64) -> bool {
        token == self.keystroke
    }

    pub fn begin_request(&mut self) -> u64 {
        self.request += 1;
        self.request
    }

    pub fn accept_response(&self, request: u64) -> bool {
        request == self.request
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_of(action: GateAction) -> u64 {
        match action {
            GateAction::Schedule { token, .. } => token,
            GateAction::Clear => panic!("expected Schedule"),
        }
    }

    #[test]
    fn test_burst_fires_exactly_once() {
        let mut gate = LookupGate::default();
        let t1 = token_of(gate.on_input("al"));
        let t2 = token_of(gate.on_input("ali"));
        let t3 = token_of(gate.on_input("alic"));

        let fired: Vec<u64> = [t1, t2, t3]
            .into_iter()
            .filter(|t| gate.may_fire(*t))
            .collect();
        assert_eq!(fired, vec![t3]);
    }

    #[test]
    fn test_short_query_clears_without_search() {
        let mut gate = LookupGate::default();
        let t1 = token_of(gate.on_input("al"));
        assert_eq!(gate.on_input("a"), GateAction::Clear);
        // the pending timer for the longer query must not fire either
        assert!(!gate.may_fire(t1));
        assert_eq!(gate.on_input("  a  "), GateAction::Clear);
        assert_eq!(gate.on_input(""), GateAction::Clear);
    }

    #[test]
    fn test_query_is_trimmed() {
        let mut gate = LookupGate::default();
        match gate.on_input("  alice  ") {
            GateAction::Schedule { query, .. } => assert_eq!(query, "alice"),
            GateAction::Clear => panic!("expected Schedule"),
        }
    }

    #[test]
    fn test_overlapping_responses_last_request_wins() {
        let mut gate = LookupGate::default();
        let r1 = gate.begin_request();
        let r2 = gate.begin_request();

        // in-order arrival: r1 discarded, r2 applied
        assert!(!gate.accept_response(r1));
        assert!(gate.accept_response(r2));

        // reversed arrival: r2 applied, r1 still discarded
        let mut gate = LookupGate::default();
        let r1 = gate.begin_request();
        let r2 = gate.begin_request();
        assert!(gate.accept_response(r2));
        assert!(!gate.accept_response(r1));
    }
}
