use std::cell::Cell;

/// Generation a request was issued under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Monotonic view-generation counter. Every view switch advances it; a
/// response is applied only if its ticket is still the current one.
#[derive(Debug, Default)]
pub struct Generation {
    current: Cell<u64>,
}

impl Generation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self) -> Ticket {
        let next = self.current.get() + 1;
        self.current.set(next);
        Ticket(next)
    }

    pub fn current(&self) -> Ticket {
        Ticket(self.current.get())
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.current.get() == ticket.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_invalidates_older_tickets() {
        let generation = Generation::new();
        let first = generation.advance();
        assert!(generation.is_current(first));

        let second = generation.advance();
        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));
        assert_eq!(generation.current(), second);
    }

    #[test]
    fn test_current_does_not_advance() {
        let generation = Generation::new();
        let ticket = generation.current();
        assert_eq!(generation.current(), ticket);
        assert!(generation.is_current(ticket));
    }
}
