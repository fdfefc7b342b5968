/// A record addressable by its string identifier within its owning
/// collection.
pub trait HasId {
    fn id(&self) -> &str;
}

/// Replace-by-identifier, the single mutation primitive used by the queue,
/// appointment, and roster collections.
///
/// Returns a new collection in which the record whose id matches has been
/// replaced with `update(record)` and every other record is untouched, in
/// the original order. An id that matches nothing yields an element-wise
/// copy of the input.
pub fn replace_by_id<T, F>(records: &[T], id: &str, update: F) -> Vec<T>
where
    T: Clone + HasId,
    F: Fn(&T) -> T,
{
    records
        .iter()
        .map(|record| {
            if record.id() == id {
                update(record)
            } else {
                record.clone()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Note {
        id: String,
        body: String,
    }

    impl HasId for Note {
        fn id(&self) -> &str {
            &self.id
        }
    }

    fn notes() -> Vec<Note> {
        vec![
            Note { id: "1".into(), body: "first".into() },
            Note { id: "2".into(), body: "second".into() },
        ]
    }

    #[test]
    fn replaces_only_the_matching_record() {
        let updated = replace_by_id(&notes(), "2", |n| Note {
            body: "edited".into(),
            ..n.clone()
        });
        assert_eq!(updated[0].body, "first");
        assert_eq!(updated[1].body, "edited");
    }

    #[test]
    fn unknown_id_is_an_identity_no_op() {
        let original = notes();
        let updated = replace_by_id(&original, "99", |n| Note {
            body: "edited".into(),
            ..n.clone()
        });
        assert_eq!(updated, original);
    }
}
