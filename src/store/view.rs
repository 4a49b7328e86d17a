//! View state: search filter and analytics panel visibility
//!
//! Nothing here triggers a request; it only shapes what is presented.

use crate::api::Customer;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub search: String,
    pub analytics_visible: bool,
}

/// Case-insensitive substring match on the customer name
pub fn matches(name: &str, term: &str) -> bool {
    term.is_empty() || name.to_lowercase().contains(&term.to_lowercase())
}

/// Customers whose name matches `term`, in list order
pub fn filter_customers<'a>(customers: &'a [Customer], term: &str) -> Vec<&'a Customer> {
    customers.iter().filter(|c| matches(&c.name, term)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer(id: i64, name: &str) -> Customer {
        Customer {
            id,
            name: name.to_string(),
            email: None,
            purchase_history: None,
        }
    }

    #[test]
    fn filter_is_case_insensitive() {
        let customers = vec![customer(1, "Alice"), customer(2, "bob")];
        let names: Vec<_> = filter_customers(&customers, "AL")
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, vec!["Alice"]);
    }

    #[test]
    fn empty_term_keeps_everything_in_order() {
        let customers = vec![customer(1, "Alice"), customer(2, "bob")];
        let ids: Vec<_> = filter_customers(&customers, "").iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn substring_anywhere_matches() {
        assert!(matches("Roberto", "bert"));
        assert!(!matches("Roberto", "alice"));
    }
}
