use crate::types::{Poll, PollId, PollInput};

/// In-memory poll collection. Records keep insertion order; lookups are linear.
#[derive(Debug)]
pub struct PollStore {
    polls: Vec<Poll>,
    next_id: PollId,
}

impl Default for PollStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PollStore {
    pub fn new() -> Self {
        Self {
            polls: Vec::new(),
            next_id: 1,
        }
    }

    pub fn list(&self) -> Vec<Poll> {
        self.polls.clone()
    }

    pub fn find(&self, id: PollId) -> Option<Poll> {
        self.polls.iter().find(|p| p.id == id).cloned()
    }

    /// Store a new poll under a fresh id. Ids are never handed out twice,
    /// even after the poll holding one is deleted.
    pub fn add(&mut self, input: PollInput) -> Poll {
        let id = self.next_id;
        // A u64 counter is not exhausted within a process lifetime.
        self.next_id += 1;
        let poll = input.into_poll(id);
        self.polls.push(poll.clone());
        poll
    }

    /// Overwrite title and description. Returns `false` if no poll has `id`.
    pub fn update(&mut self, id: PollId, input: PollInput) -> bool {
        let Some(poll) = self.polls.iter_mut().find(|p| p.id == id) else {
            return false;
        };
        poll.title = input.title;
        poll.description = input.description;
        true
    }

    pub fn delete(&mut self, id: PollId) -> bool {
        match self.polls.iter().position(|p| p.id == id) {
            Some(idx) => {
                self.polls.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.polls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.polls.is_empty()
    }
}
