//! Per-fetcher resource state
//!
//! Each read resource (customer list, detail, interaction log,
//! recommendations, analytics) owns one of these. Loading flags are never
//! shared between resources, so a slow analytics query cannot freeze the
//! customer list.

/// State of one fetched resource
///
/// `T` is the empty-able container (`Vec<_>` or `Option<_>`); its `Default`
/// is the empty state shown after a failure or a reset.
#[derive(Debug, Clone, PartialEq)]
pub struct Resource<T> {
    value: T,
    loading: bool,
    error: Option<String>,
    fetched: bool,
    in_flight: Option<u64>,
}

impl<T: Default> Default for Resource<T> {
    fn default() -> Self {
        Self {
            value: T::default(),
            loading: false,
            error: None,
            fetched: false,
            in_flight: None,
        }
    }
}

impl<T: Default> Resource<T> {
    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// True once a request has resolved successfully since the last reset
    pub fn is_fetched(&self) -> bool {
        self.fetched
    }

    /// Mark request `seq` as the one whose answer will be accepted
    ///
    /// Any earlier in-flight request is superseded. The current value stays
    /// visible until the new answer lands.
    pub fn begin(&mut self, seq: u64) {
        self.in_flight = Some(seq);
        self.loading = true;
        self.error = None;
    }

    /// Whether a completion for `seq` is the latest issued request
    pub fn accepts(&self, seq: u64) -> bool {
        self.in_flight == Some(seq)
    }

    /// Commit a successful answer. Returns false (and changes nothing) if
    /// `seq` is not the latest request.
    pub fn commit(&mut self, seq: u64, value: T) -> bool {
        if !self.accepts(seq) {
            return false;
        }
        self.value = value;
        self.loading = false;
        self.error = None;
        self.fetched = true;
        self.in_flight = None;
        true
    }

    /// Record a failed answer: the value resets to empty. Returns false if
    /// `seq` is not the latest request.
    pub fn fail(&mut self, seq: u64, message: impl Into<String>) -> bool {
        if !self.accepts(seq) {
            return false;
        }
        self.value = T::default();
        self.loading = false;
        self.error = Some(message.into());
        self.fetched = false;
        self.in_flight = None;
        true
    }

    /// Drop everything, orphaning any in-flight request
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_sets_loading_and_keeps_value() {
        let mut res: Resource<Vec<u32>> = Resource::default();
        assert!(res.begin_and_commit(1, vec![1, 2]));
        res.begin(2);
        assert!(res.is_loading());
        assert_eq!(res.value(), &vec![1, 2]);
    }

    #[test]
    fn superseded_answer_is_rejected() {
        let mut res: Resource<Vec<u32>> = Resource::default();
        res.begin(1);
        res.begin(2);
        assert!(!res.commit(1, vec![9]));
        assert!(res.value().is_empty());
        assert!(res.is_loading());
        assert!(res.commit(2, vec![7]));
        assert_eq!(res.value(), &vec![7]);
        assert!(!res.is_loading());
    }

    #[test]
    fn failure_resets_to_empty_and_records_error() {
        let mut res: Resource<Vec<u32>> = Resource::default();
        assert!(res.begin_and_commit(1, vec![1]));
        res.begin(2);
        assert!(res.fail(2, "boom"));
        assert!(res.value().is_empty());
        assert_eq!(res.error(), Some("boom"));
        assert!(!res.is_fetched());
    }

    #[test]
    fn clear_orphans_in_flight_request() {
        let mut res: Resource<Option<String>> = Resource::default();
        res.begin(5);
        res.clear();
        assert!(!res.is_loading());
        assert!(!res.commit(5, Some("late".into())));
        assert_eq!(res.value(), &None);
    }

    #[test]
    fn answer_without_request_is_rejected() {
        let mut res: Resource<Vec<u32>> = Resource::default();
        assert!(!res.fail(1, "nobody asked"));
        assert_eq!(res.error(), None);
    }

    impl<T: Default> Resource<T> {
        fn begin_and_commit(&mut self, seq: u64, value: T) -> bool {
            self.begin(seq);
            self.commit(seq, value)
        }
    }
}
