use std::collections::HashSet;

use crate::models::event::TimelineEventId;

/// Events the user has liked during this session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LikedEvents {
    ids: HashSet<TimelineEventId>,
}

impl LikedEvents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the liked state of `id` and return the new state
    pub fn toggle(&mut self, id: TimelineEventId) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    pub fn is_liked(&self, id: TimelineEventId) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = TimelineEventId> + '_ {
        self.ids.iter().copied()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_reports_new_state() {
        let mut liked = LikedEvents::new();
        let id = TimelineEventId(7);

        assert!(liked.toggle(id));
        assert!(liked.is_liked(id));
        assert!(!liked.toggle(id));
        assert!(!liked.is_liked(id));
    }

    #[test]
    fn test_double_toggle_restores_set() {
        let mut liked = LikedEvents::new();
        liked.toggle(TimelineEventId(1));
        liked.toggle(TimelineEventId(2));
        let before = liked.clone();

        liked.toggle(TimelineEventId(3));
        liked.toggle(TimelineEventId(3));
        assert_eq!(liked, before);

        liked.toggle(TimelineEventId(1));
        liked.toggle(TimelineEventId(1));
        assert_eq!(liked, before);
    }

    #[test]
    fn test_clear() {
        let mut liked = LikedEvents::new();
        liked.toggle(TimelineEventId(1));
        assert_eq!(liked.len(), 1);
        liked.clear();
        assert!(liked.is_empty());
        assert_eq!(liked.iter().count(), 0);
    }
}
