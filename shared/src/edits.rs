use crate::models::certification::{
    CertificationCategory, CertificationRecord, Completed, CompletedInput,
};

/// A single in-place change to the certification list, keyed by record id
#[derive(Debug, Clone, PartialEq)]
pub enum CertificationEdit {
    SetCategory {
        id: u32,
        category: CertificationCategory,
    },
    SetCompleted {
        id: u32,
        input: CompletedInput,
    },
}

impl CertificationEdit {
    pub fn id(&self) -> u32 {
        match self {
            CertificationEdit::SetCategory { id, .. } => *id,
            CertificationEdit::SetCompleted { id, .. } => *id,
        }
    }
}

/// Applies `edit` and returns the updated record. Unknown ids leave the list
/// untouched and yield `None`.
pub fn apply_edit<'a>(
    records: &'a mut [CertificationRecord],
    edit: &CertificationEdit,
) -> Option<&'a CertificationRecord> {
    match edit {
        CertificationEdit::SetCategory { id, category } => set_category(records, *id, *category),
        CertificationEdit::SetCompleted { id, input } => set_completed(records, *id, input),
    }
}

pub fn set_category(
    records: &mut [CertificationRecord],
    id: u32,
    category: CertificationCategory,
) -> Option<&CertificationRecord> {
    let record = records.iter_mut().find(|record| record.id == id)?;
    record.category = category;
    Some(record)
}

pub fn set_completed<'a>(
    records: &'a mut [CertificationRecord],
    id: u32,
    input: &CompletedInput,
) -> Option<&'a CertificationRecord> {
    let record = records.iter_mut().find(|record| record.id == id)?;
    record.completed = Completed::from_input(input);
    Some(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::{DirectoryRepository, MockDirectory};
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn seed() -> Vec<CertificationRecord> {
        MockDirectory::seeded().certifications()
    }

    #[test]
    fn test_set_category_only_touches_target() {
        let original = seed();
        let mut records = original.clone();

        let updated = set_category(&mut records, 2, CertificationCategory::Sa).cloned();

        assert_eq!(updated.map(|r| r.category), Some(CertificationCategory::Sa));
        assert_eq!(records[0], original[0]);
        assert_eq!(records[2], original[2]);
        assert_eq!(records[1].name, "PatMen");
        assert_eq!(records[1].category, CertificationCategory::Sa);
    }

    #[test]
    fn test_set_completed_clamps_negative() {
        let mut records = seed();
        set_completed(&mut records, 1, &CompletedInput::from("-5"));
        assert_eq!(records[0].completed, Completed::Count(0));
    }

    #[test]
    fn test_set_completed_empty_clears() {
        let mut records = seed();
        set_completed(&mut records, 1, &CompletedInput::from(""));
        assert_eq!(records[0].completed, Completed::Cleared);

        set_completed(&mut records, 1, &CompletedInput::from("4"));
        assert_eq!(records[0].completed, Completed::Count(4));
    }

    #[test]
    fn test_unknown_id_is_a_no_op() {
        let original = seed();
        let mut records = original.clone();

        assert!(set_category(&mut records, 42, CertificationCategory::Qa).is_none());
        assert!(set_completed(&mut records, 42, &CompletedInput::from("9")).is_none());
        assert_eq!(records, original);
    }

    #[test]
    fn test_apply_edit_dispatches() {
        let mut records = seed();
        let edit = CertificationEdit::SetCompleted {
            id: 3,
            input: CompletedInput::from(6.0),
        };
        assert_eq!(edit.id(), 3);

        let updated = apply_edit(&mut records, &edit).cloned();
        assert_eq!(updated.map(|r| r.completed), Some(Completed::Count(6)));
    }

    fn category_strategy() -> impl Strategy<Value = CertificationCategory> {
        prop_oneof![
            Just(CertificationCategory::WebDev),
            Just(CertificationCategory::Qa),
            Just(CertificationCategory::Sa),
        ]
    }

    proptest! {
        #[test]
        fn prop_absent_id_leaves_list_unchanged(
            id in 4u32..10_000,
            category in category_strategy(),
            raw in ".{0,6}",
        ) {
            let original = seed();
            let mut records = original.clone();
            let category_edit = CertificationEdit::SetCategory { id, category };
            let completed_edit = CertificationEdit::SetCompleted {
                id,
                input: CompletedInput::Text(raw),
            };
            prop_assert!(apply_edit(&mut records, &category_edit).is_none());
            prop_assert!(apply_edit(&mut records, &completed_edit).is_none());
            prop_assert_eq!(records, original);
        }

        #[test]
        fn prop_negative_completed_clamps_to_zero(n in -1_000_000i64..0) {
            let mut records = seed();
            set_completed(&mut records, 1, &CompletedInput::Text(n.to_string()));
            prop_assert_eq!(records[0].completed, Completed::Count(0));
            set_completed(&mut records, 2, &CompletedInput::Number(n as f64));
            prop_assert_eq!(records[1].completed, Completed::Count(0));
        }
    }
}
