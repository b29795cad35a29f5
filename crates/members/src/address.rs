//! Dormitory address book.

use dormnet_core::DormitoryId;

/// Dormitory names in id order. Dormitory id `n` is `STANDARD_DORMITORIES[n - 1]`.
pub const STANDARD_DORMITORIES: &[&str] = &[
    "Wundstraße 5",
    "Wundstraße 7",
    "Wundstraße 9",
    "Wundstraße 11",
    "Wundstraße 1",
    "Wundstraße 3",
    "Zellescher Weg 41",
    "Zellescher Weg 41A",
    "Zellescher Weg 41B",
    "Zellescher Weg 41C",
    "Zellescher Weg 41D",
    "Borsbergstraße 34",
    "Zeunerstraße 1f",
];

/// Fixed, ordered table translating dormitory ids into postal names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressBook {
    dormitories: Vec<String>,
}

impl AddressBook {
    pub fn new<I, S>(dormitories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            dormitories: dormitories.into_iter().map(Into::into).collect(),
        }
    }

    /// The production dormitory table.
    pub fn standard() -> Self {
        Self::new(STANDARD_DORMITORIES.iter().copied())
    }

    pub fn len(&self) -> usize {
        self.dormitories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dormitories.is_empty()
    }

    pub fn dormitory(&self, id: DormitoryId) -> Option<&str> {
        let index = (id.get() as usize).checked_sub(1)?;
        self.dormitories.get(index).map(String::as_str)
    }

    /// Render `"<dormitory> / <floor> <room>"`.
    ///
    /// Unknown ids (including `0`) degrade to an empty string and a warning;
    /// the surrounding operation carries on.
    pub fn resolve(&self, id: DormitoryId, floor: i32, room: &str) -> String {
        match self.dormitory(id) {
            Some(name) => format!("{name} / {floor} {room}"),
            None => {
                tracing::warn!(dormitory_id = %id, "no dormitory mapping for id");
                String::new()
            }
        }
    }
}

impl Default for AddressBook {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::sync::{Arc, Mutex};
    use tracing::field::{Field, Visit};
    use tracing_subscriber::layer::SubscriberExt;

    /// Records `(level, dormitory_id)` for every event.
    #[derive(Clone, Default)]
    struct CapturingLayer {
        events: Arc<Mutex<Vec<(tracing::Level, Option<String>)>>>,
    }

    struct DormitoryField(Option<String>);

    impl Visit for DormitoryField {
        fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
            if field.name() == "dormitory_id" {
                self.0 = Some(format!("{value:?}"));
            }
        }
    }

    impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for CapturingLayer {
        fn on_event(&self, event: &tracing::Event<'_>, _ctx: tracing_subscriber::layer::Context<'_, S>) {
            let mut field = DormitoryField(None);
            event.record(&mut field);
            self.events.lock().unwrap().push((*event.metadata().level(), field.0));
        }
    }

    fn captured<R>(f: impl FnOnce() -> R) -> (R, Vec<(tracing::Level, Option<String>)>) {
        let layer = CapturingLayer::default();
        let events = layer.events.clone();
        let subscriber = tracing_subscriber::registry().with(layer);
        let result = tracing::subscriber::with_default(subscriber, f);
        let events = events.lock().unwrap().clone();
        (result, events)
    }

    #[test]
    fn first_and_last_dormitories_resolve() {
        let book = AddressBook::standard();
        assert_eq!(book.resolve(DormitoryId::new(1), 3, "12"), "Wundstraße 5 / 3 12");
        assert_eq!(
            book.resolve(DormitoryId::new(13), 0, "2b"),
            "Zeunerstraße 1f / 0 2b"
        );
    }

    #[test]
    fn zero_and_past_the_end_degrade_to_empty() {
        let book = AddressBook::standard();
        assert_eq!(book.resolve(DormitoryId::new(0), 1, "1"), "");
        assert_eq!(book.resolve(DormitoryId::new(14), 1, "1"), "");
        assert_eq!(book.resolve(DormitoryId::new(u32::MAX), 1, "1"), "");
    }

    #[test]
    fn unknown_ids_log_one_warning_with_the_id() {
        let book = AddressBook::standard();
        for id in [0, 14] {
            let (address, events) = captured(|| book.resolve(DormitoryId::new(id), 1, "1"));
            assert_eq!(address, "");
            assert_eq!(events, vec![(tracing::Level::WARN, Some(id.to_string()))]);
        }
    }

    #[test]
    fn known_ids_log_nothing() {
        let book = AddressBook::standard();
        let (address, events) = captured(|| book.resolve(DormitoryId::new(8), 2, "204"));
        assert_eq!(address, "Zellescher Weg 41A / 2 204");
        assert!(events.is_empty());
    }

    proptest! {
        #[test]
        fn valid_ids_always_render_the_table_entry(id in 1u32..=13, floor in -2i32..30, room in "[0-9]{1,3}[a-d]?") {
            let book = AddressBook::standard();
            let expected = format!("{} / {} {}", STANDARD_DORMITORIES[(id - 1) as usize], floor, room);
            prop_assert_eq!(book.resolve(DormitoryId::new(id), floor, &room), expected);
        }

        #[test]
        fn ids_beyond_the_table_are_empty(id in 14u32..10_000) {
            prop_assert_eq!(AddressBook::standard().resolve(DormitoryId::new(id), 1, "1"), "");
        }
    }
}
