//! crates/resume_core/src/editor.rs
//!
//! Pure, copy-on-write transformations over a section's current value.
//!
//! Every operation takes the current value by reference and returns a new
//! one; the input is never mutated and never shared mutably with the
//! output. Out-of-range indices are silent no-ops rather than errors: the
//! UI double-fires remove clicks, and those must be harmless. Persistence,
//! rendering and the AI-enhance call are the host's concern.

use crate::domain::{FieldRole, PersonalField, PersonalInfo, Resume, SectionEntry, SectionValue};

/// Returns a new personal-info record with one field replaced.
///
/// No validation is applied; an email field accepts any string.
pub fn update_personal_field(
    info: &PersonalInfo,
    field: PersonalField,
    value: &str,
) -> PersonalInfo {
    let mut next = info.clone();
    match field {
        PersonalField::Name => next.name = value.to_string(),
        PersonalField::Email => next.email = value.to_string(),
        PersonalField::Phone => next.phone = value.to_string(),
    }
    next
}

/// The summary section is its own whole value; replacing it is verbatim.
pub fn replace_summary(text: &str) -> String {
    text.to_string()
}

/// Returns a new sequence where only the entry at `index` has the field for
/// `role` replaced. Every other entry is cloned untouched. An out-of-range
/// index returns the input unchanged.
pub fn update_entry_field<E: SectionEntry>(
    items: &[E],
    index: usize,
    role: FieldRole,
    value: &str,
) -> Vec<E> {
    let mut next = items.to_vec();
    if let Some(entry) = next.get_mut(index) {
        entry.set_field(role, value);
    }
    next
}

/// Appends a fresh entry (new unique id, empty fields) at the end, so
/// display order follows creation order.
pub fn add_entry<E: SectionEntry>(items: &[E]) -> Vec<E> {
    let mut next = items.to_vec();
    next.push(E::new());
    next
}

/// Removes the entry at `index`, shifting later entries left. An
/// out-of-range index is a no-op; removed ids are never reused.
pub fn remove_entry<E: SectionEntry>(items: &[E], index: usize) -> Vec<E> {
    let mut next = items.to_vec();
    if index < next.len() {
        next.remove(index);
    }
    next
}

/// Appends a skill after trimming it. Empty input and exact duplicates
/// (case-sensitive) are idempotent no-ops; this is the only place
/// duplicate suppression is enforced.
pub fn add_skill(skills: &[String], text: &str) -> Vec<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() || skills.iter().any(|s| s == trimmed) {
        return skills.to_vec();
    }
    let mut next = skills.to_vec();
    next.push(trimmed.to_string());
    next
}

/// Removes the skill at `index`; out-of-range is a no-op.
pub fn remove_skill(skills: &[String], index: usize) -> Vec<String> {
    let mut next = skills.to_vec();
    if index < next.len() {
        next.remove(index);
    }
    next
}

/// Substitutes an externally computed value as the entire section, exactly
/// as a manual edit would. No field-level diffing and no re-validation is
/// performed against the old value: a shape-valid but semantically poor
/// enhancer result overwrites the section as-is. Shape checking happens
/// where untyped input is parsed into a [`SectionValue`], not here.
pub fn merge_enhanced(resume: &Resume, enhanced: SectionValue) -> Resume {
    resume.with_section(enhanced)
}

//=========================================================================================
// Tests
//=========================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{EducationEntry, ExperienceEntry, SectionKind};

    fn two_jobs() -> Vec<ExperienceEntry> {
        let items = add_entry(&add_entry::<ExperienceEntry>(&[]));
        let items = update_entry_field(&items, 0, FieldRole::Primary, "Acme");
        update_entry_field(&items, 1, FieldRole::Primary, "Globex")
    }

    #[test]
    fn update_entry_field_touches_only_the_target() {
        let items = two_jobs();
        let updated = update_entry_field(&items, 1, FieldRole::Secondary, "Engineer");
        assert_eq!(updated[1].position, "Engineer");
        assert_eq!(updated[1].id, items[1].id);
        // Sibling is deep-equal to the original.
        assert_eq!(updated[0], items[0]);
        // The input sequence was not mutated.
        assert_eq!(items[1].position, "");
    }

    #[test]
    fn update_entry_field_out_of_bounds_is_a_noop() {
        let items = two_jobs();
        assert_eq!(update_entry_field(&items, 2, FieldRole::Primary, "x"), items);
        assert_eq!(update_entry_field(&items, usize::MAX, FieldRole::Primary, "x"), items);
    }

    #[test]
    fn add_entry_appends_blank_entry_with_unique_id() {
        let items = add_entry::<ExperienceEntry>(&[]);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].company, "");
        assert_eq!(items[0].position, "");
        assert_eq!(items[0].duration, "");
        assert_eq!(items[0].description, "");

        let items = update_entry_field(&items, 0, FieldRole::Primary, "Acme");
        assert_eq!(items[0].company, "Acme");

        let more = add_entry(&items);
        assert_ne!(more[0].id, more[1].id);
        // The earlier entry kept its id across both operations.
        assert_eq!(more[0].id, items[0].id);
    }

    #[test]
    fn removed_ids_are_never_restored_by_a_later_add() {
        let items = add_entry::<EducationEntry>(&[]);
        let original_id = items[0].id;
        let emptied = remove_entry(&items, 0);
        assert!(emptied.is_empty());
        let readded = add_entry(&emptied);
        assert_ne!(readded[0].id, original_id);
    }

    #[test]
    fn remove_entry_shifts_and_ignores_bad_indices() {
        let items = two_jobs();
        let removed = remove_entry(&items, 0);
        assert_eq!(removed.len(), 1);
        assert_eq!(removed[0].company, "Globex");
        // Rapid double-clicks land here; both must be harmless.
        assert_eq!(remove_entry(&items, items.len()), items);
        assert_eq!(remove_entry(&items, usize::MAX), items);
    }

    #[test]
    fn add_skill_suppresses_duplicates() {
        let skills = vec!["Go".to_string(), "Rust".to_string()];
        assert_eq!(add_skill(&skills, "Go"), skills);
        // Case-sensitive: "go" is a different skill.
        assert_eq!(add_skill(&skills, "go"), vec!["Go", "Rust", "go"]);
    }

    #[test]
    fn add_skill_trims_before_appending_and_matching() {
        let skills = vec!["Go".to_string()];
        assert_eq!(add_skill(&skills, "  Rust  "), vec!["Go", "Rust"]);
        assert_eq!(add_skill(&skills, "  Go "), skills);
        assert_eq!(add_skill(&skills, "   "), skills);
        assert_eq!(add_skill(&skills, ""), skills);
    }

    #[test]
    fn remove_skill_bounds_noop() {
        let skills = vec!["Go".to_string(), "Rust".to_string()];
        assert_eq!(remove_skill(&skills, 0), vec!["Rust"]);
        assert_eq!(remove_skill(&skills, 2), skills);
    }

    #[test]
    fn update_personal_field_is_copy_on_write() {
        let info = PersonalInfo {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            phone: "".to_string(),
        };
        let updated = update_personal_field(&info, PersonalField::Phone, "555-0100");
        assert_eq!(updated.phone, "555-0100");
        assert_eq!(updated.name, info.name);
        assert_eq!(updated.email, info.email);
        assert_eq!(info.phone, "");
    }

    #[test]
    fn replace_summary_is_verbatim() {
        assert_eq!(replace_summary("  spaced  "), "  spaced  ");
    }

    #[test]
    fn merge_enhanced_accepts_duplicates_verbatim() {
        // The merge contract is a blind overwrite: dedup is not re-applied,
        // so an enhancer may legally produce ["Go", "Go"].
        let resume = Resume::sample();
        let merged = merge_enhanced(
            &resume,
            SectionValue::Skills(vec!["Go".to_string(), "Go".to_string()]),
        );
        assert_eq!(merged.skills, vec!["Go", "Go"]);
        assert_eq!(merged.summary, resume.summary);
    }

    #[test]
    fn enhance_failure_leaves_document_at_pre_call_value() {
        // When the external call errors, merge simply never runs.
        let resume = Resume::sample();
        let result: Result<SectionValue, ()> = Err(());
        let after = match result {
            Ok(value) => merge_enhanced(&resume, value),
            Err(()) => resume.clone(),
        };
        assert_eq!(after, resume);
    }

    #[test]
    fn empty_experience_add_then_edit_scenario() {
        let items = add_entry::<ExperienceEntry>(&[]);
        assert_eq!(items.len(), 1);
        let id = items[0].id;
        let edited = update_entry_field(&items, 0, FieldRole::Primary, "Acme");
        assert_eq!(edited[0].company, "Acme");
        assert_eq!(edited[0].id, id);

        let resume = Resume::new().with_section(SectionValue::Experience(edited));
        assert_eq!(resume.section(SectionKind::Experience).kind(), SectionKind::Experience);
        assert_eq!(resume.experience[0].company, "Acme");
    }
}
