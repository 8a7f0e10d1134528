//! crates/resume_core/src/domain.rs
//!
//! Defines the pure, core data structures for a resume document.
//! These structs are independent of any storage backend or presentation
//! layer; the wire field names here are the canonical document format.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

//=========================================================================================
// Section and Field Vocabulary
//=========================================================================================

/// The closed set of top-level sections a resume document is composed of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SectionKind {
    #[serde(rename = "personalInfo")]
    PersonalInfo,
    #[serde(rename = "summary")]
    Summary,
    #[serde(rename = "experience")]
    Experience,
    #[serde(rename = "education")]
    Education,
    #[serde(rename = "skills")]
    Skills,
}

impl SectionKind {
    /// The wire name of the section, exactly as it appears in the document format.
    pub fn as_str(self) -> &'static str {
        match self {
            SectionKind::PersonalInfo => "personalInfo",
            SectionKind::Summary => "summary",
            SectionKind::Experience => "experience",
            SectionKind::Education => "education",
            SectionKind::Skills => "skills",
        }
    }
}

impl std::fmt::Display for SectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SectionKind {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "personalInfo" => Ok(SectionKind::PersonalInfo),
            "summary" => Ok(SectionKind::Summary),
            "experience" => Ok(SectionKind::Experience),
            "education" => Ok(SectionKind::Education),
            "skills" => Ok(SectionKind::Skills),
            other => Err(UnknownSection(other.to_string())),
        }
    }
}

/// Error returned when a string is not one of the five section names.
#[derive(Debug, thiserror::Error)]
#[error("Unknown section name: '{0}'")]
pub struct UnknownSection(pub String);

/// Which of the two list-entry sections an entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Experience,
    Education,
}

/// The role a field plays within an entry, independent of its wire name.
///
/// The two entry kinds alias the same roles onto different field names
/// (`company` vs `institution` and so on); editing code addresses fields
/// by role so the aliasing lives in exactly one lookup table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRole {
    Primary,
    Secondary,
    Period,
    Description,
}

impl EntryKind {
    /// The headline label field: `company` for experience, `institution` for education.
    pub fn primary_field(self) -> &'static str {
        self.field_name(FieldRole::Primary)
    }

    /// `position` for experience, `degree` for education.
    pub fn secondary_field(self) -> &'static str {
        self.field_name(FieldRole::Secondary)
    }

    /// `duration` for experience, `year` for education.
    pub fn period_field(self) -> &'static str {
        self.field_name(FieldRole::Period)
    }

    /// The wire field name for a role. This is a fixed table, never inferred
    /// from the data itself.
    pub fn field_name(self, role: FieldRole) -> &'static str {
        match (self, role) {
            (EntryKind::Experience, FieldRole::Primary) => "company",
            (EntryKind::Experience, FieldRole::Secondary) => "position",
            (EntryKind::Experience, FieldRole::Period) => "duration",
            (EntryKind::Education, FieldRole::Primary) => "institution",
            (EntryKind::Education, FieldRole::Secondary) => "degree",
            (EntryKind::Education, FieldRole::Period) => "year",
            (_, FieldRole::Description) => "description",
        }
    }
}

/// The three scalar fields of the personal-info section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonalField {
    Name,
    Email,
    Phone,
}

//=========================================================================================
// Document Structs
//=========================================================================================

/// The singleton personal-info section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PersonalInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// One entry in the experience section. The `id` is assigned once at
/// creation and is never regenerated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExperienceEntry {
    pub id: Uuid,
    pub company: String,
    pub position: String,
    pub duration: String,
    pub description: String,
}

/// One entry in the education section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EducationEntry {
    pub id: Uuid,
    pub institution: String,
    pub degree: String,
    pub year: String,
    pub description: String,
}

/// Common surface of the two entry kinds, so editing code can be written
/// once against field roles instead of twice against field names.
pub trait SectionEntry: Clone {
    const KIND: EntryKind;

    /// Creates a fresh entry with a new unique id and empty fields.
    fn new() -> Self;

    fn id(&self) -> Uuid;

    fn field(&self, role: FieldRole) -> &str;

    fn set_field(&mut self, role: FieldRole, value: &str);
}

impl SectionEntry for ExperienceEntry {
    const KIND: EntryKind = EntryKind::Experience;

    fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            company: String::new(),
            position: String::new(),
            duration: String::new(),
            description: String::new(),
        }
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn field(&self, role: FieldRole) -> &str {
        match role {
            FieldRole::Primary => &self.company,
            FieldRole::Secondary => &self.position,
            FieldRole::Period => &self.duration,
            FieldRole::Description => &self.description,
        }
    }

    fn set_field(&mut self, role: FieldRole, value: &str) {
        match role {
            FieldRole::Primary => self.company = value.to_string(),
            FieldRole::Secondary => self.position = value.to_string(),
            FieldRole::Period => self.duration = value.to_string(),
            FieldRole::Description => self.description = value.to_string(),
        }
    }
}

impl SectionEntry for EducationEntry {
    const KIND: EntryKind = EntryKind::Education;

    fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            institution: String::new(),
            degree: String::new(),
            year: String::new(),
            description: String::new(),
        }
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn field(&self, role: FieldRole) -> &str {
        match role {
            FieldRole::Primary => &self.institution,
            FieldRole::Secondary => &self.degree,
            FieldRole::Period => &self.year,
            FieldRole::Description => &self.description,
        }
    }

    fn set_field(&mut self, role: FieldRole, value: &str) {
        match role {
            FieldRole::Primary => self.institution = value.to_string(),
            FieldRole::Secondary => self.degree = value.to_string(),
            FieldRole::Period => self.year = value.to_string(),
            FieldRole::Description => self.description = value.to_string(),
        }
    }
}

/// A complete resume document, composed of the five sections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Resume {
    pub personal_info: PersonalInfo,
    pub summary: String,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub skills: Vec<String>,
}

impl Resume {
    /// Creates an empty document: blank personal info and summary, no entries.
    pub fn new() -> Self {
        Self::default()
    }

    /// The canned example document returned when a non-JSON file is imported.
    /// Real PDF/DOCX parsing is out of scope; the stub keeps the import flow
    /// exercisable end to end.
    pub fn sample() -> Self {
        Self {
            personal_info: PersonalInfo {
                name: "John Doe".to_string(),
                email: "john.doe@example.com".to_string(),
                phone: "+1 (555) 123-4567".to_string(),
            },
            summary: "Experienced software developer with 5+ years of experience in \
                      full-stack development, specializing in React, Node.js, and cloud \
                      technologies."
                .to_string(),
            experience: vec![ExperienceEntry {
                id: Uuid::new_v4(),
                company: "Tech Corp".to_string(),
                position: "Senior Developer".to_string(),
                duration: "2021 - Present".to_string(),
                description: "Led development of scalable web applications serving 100k+ \
                              users daily."
                    .to_string(),
            }],
            education: vec![EducationEntry {
                id: Uuid::new_v4(),
                institution: "University of Technology".to_string(),
                degree: "Bachelor of Computer Science".to_string(),
                year: "2019".to_string(),
                description: "Graduated with honors, specialized in software engineering."
                    .to_string(),
            }],
            skills: vec![
                "React".to_string(),
                "TypeScript".to_string(),
                "Node.js".to_string(),
                "Python".to_string(),
                "AWS".to_string(),
            ],
        }
    }

    /// The key a document is stored under: the lowercased, underscore-joined
    /// personal name, or `"latest"` when no name has been entered yet.
    pub fn storage_key(&self) -> String {
        let name = self.personal_info.name.trim();
        if name.is_empty() {
            "latest".to_string()
        } else {
            name.replace(' ', "_").to_lowercase()
        }
    }

    /// Extracts one section's value as an owned slice of the document.
    pub fn section(&self, kind: SectionKind) -> SectionValue {
        match kind {
            SectionKind::PersonalInfo => SectionValue::PersonalInfo(self.personal_info.clone()),
            SectionKind::Summary => SectionValue::Summary(self.summary.clone()),
            SectionKind::Experience => SectionValue::Experience(self.experience.clone()),
            SectionKind::Education => SectionValue::Education(self.education.clone()),
            SectionKind::Skills => SectionValue::Skills(self.skills.clone()),
        }
    }

    /// Returns a new document equal to this one except that the section
    /// carried by `value` has been replaced wholesale. The receiver is
    /// never mutated; unrelated sections are cloned untouched.
    pub fn with_section(&self, value: SectionValue) -> Self {
        let mut next = self.clone();
        match value {
            SectionValue::PersonalInfo(info) => next.personal_info = info,
            SectionValue::Summary(text) => next.summary = text,
            SectionValue::Experience(items) => next.experience = items,
            SectionValue::Education(items) => next.education = items,
            SectionValue::Skills(skills) => next.skills = skills,
        }
        next
    }
}

//=========================================================================================
// SectionValue (Tagged Union Over the Five Section Shapes)
//=========================================================================================

/// The value of exactly one section, tagged by shape.
///
/// Serialization is transparent: each variant writes the section's plain
/// JSON value with no wrapper. Deserialization is deliberately *not*
/// derived — an untyped `[]` is ambiguous between the three list sections,
/// so parsing always goes through [`SectionValue::from_json`] with the
/// section kind in hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SectionValue {
    PersonalInfo(PersonalInfo),
    Summary(String),
    Experience(Vec<ExperienceEntry>),
    Education(Vec<EducationEntry>),
    Skills(Vec<String>),
}

impl SectionValue {
    /// Parses an untyped JSON value as the given section's shape.
    pub fn from_json(
        kind: SectionKind,
        value: serde_json::Value,
    ) -> Result<Self, serde_json::Error> {
        Ok(match kind {
            SectionKind::PersonalInfo => {
                SectionValue::PersonalInfo(serde_json::from_value(value)?)
            }
            SectionKind::Summary => SectionValue::Summary(serde_json::from_value(value)?),
            SectionKind::Experience => SectionValue::Experience(serde_json::from_value(value)?),
            SectionKind::Education => SectionValue::Education(serde_json::from_value(value)?),
            SectionKind::Skills => SectionValue::Skills(serde_json::from_value(value)?),
        })
    }

    /// The section this value belongs to.
    pub fn kind(&self) -> SectionKind {
        match self {
            SectionValue::PersonalInfo(_) => SectionKind::PersonalInfo,
            SectionValue::Summary(_) => SectionKind::Summary,
            SectionValue::Experience(_) => SectionKind::Experience,
            SectionValue::Education(_) => SectionKind::Education,
            SectionValue::Skills(_) => SectionKind::Skills,
        }
    }
}

//=========================================================================================
// Tests
//=========================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn field_role_table_maps_aliased_names() {
        assert_eq!(EntryKind::Experience.primary_field(), "company");
        assert_eq!(EntryKind::Education.primary_field(), "institution");
        assert_eq!(EntryKind::Experience.secondary_field(), "position");
        assert_eq!(EntryKind::Education.secondary_field(), "degree");
        assert_eq!(EntryKind::Experience.period_field(), "duration");
        assert_eq!(EntryKind::Education.period_field(), "year");
        assert_eq!(
            EntryKind::Experience.field_name(FieldRole::Description),
            "description"
        );
        assert_eq!(
            EntryKind::Education.field_name(FieldRole::Description),
            "description"
        );
    }

    #[test]
    fn new_entries_get_distinct_ids_and_empty_fields() {
        let a = ExperienceEntry::new();
        let b = ExperienceEntry::new();
        assert_ne!(a.id, b.id);
        assert_eq!(a.company, "");
        assert_eq!(a.position, "");
        assert_eq!(a.duration, "");
        assert_eq!(a.description, "");
    }

    #[test]
    fn section_then_with_section_is_identity() {
        let resume = Resume::sample();
        for kind in [
            SectionKind::PersonalInfo,
            SectionKind::Summary,
            SectionKind::Experience,
            SectionKind::Education,
            SectionKind::Skills,
        ] {
            let slice = resume.section(kind);
            assert_eq!(slice.kind(), kind);
            assert_eq!(resume.with_section(slice), resume);
        }
    }

    #[test]
    fn with_section_leaves_other_sections_untouched() {
        let resume = Resume::sample();
        let updated = resume.with_section(SectionValue::Summary("New summary".to_string()));
        assert_eq!(updated.summary, "New summary");
        assert_eq!(updated.personal_info, resume.personal_info);
        assert_eq!(updated.experience, resume.experience);
        assert_eq!(updated.education, resume.education);
        assert_eq!(updated.skills, resume.skills);
        // And the original is untouched.
        assert_ne!(resume.summary, updated.summary);
    }

    #[test]
    fn storage_key_slugs_the_name() {
        let mut resume = Resume::new();
        assert_eq!(resume.storage_key(), "latest");
        resume.personal_info.name = "John Doe".to_string();
        assert_eq!(resume.storage_key(), "john_doe");
        resume.personal_info.name = "   ".to_string();
        assert_eq!(resume.storage_key(), "latest");
    }

    #[test]
    fn section_kind_round_trips_through_wire_names() {
        for kind in [
            SectionKind::PersonalInfo,
            SectionKind::Summary,
            SectionKind::Experience,
            SectionKind::Education,
            SectionKind::Skills,
        ] {
            assert_eq!(kind.as_str().parse::<SectionKind>().unwrap(), kind);
        }
        assert!("hobbies".parse::<SectionKind>().is_err());
    }

    #[test]
    fn empty_array_parses_per_kind() {
        // An untyped [] must land in the section it was asked for, which is
        // why SectionValue has no derived Deserialize.
        let skills = SectionValue::from_json(SectionKind::Skills, json!([])).unwrap();
        assert_eq!(skills, SectionValue::Skills(vec![]));
        let experience = SectionValue::from_json(SectionKind::Experience, json!([])).unwrap();
        assert_eq!(experience, SectionValue::Experience(vec![]));
    }

    #[test]
    fn from_json_rejects_shape_mismatch() {
        assert!(SectionValue::from_json(SectionKind::Summary, json!(["a", "b"])).is_err());
        assert!(SectionValue::from_json(
            SectionKind::Experience,
            json!([{"id": "not-a-uuid", "company": "Acme"}])
        )
        .is_err());
    }

    #[test]
    fn section_value_serializes_transparently() {
        let value = SectionValue::Skills(vec!["Go".to_string(), "Rust".to_string()]);
        assert_eq!(serde_json::to_value(&value).unwrap(), json!(["Go", "Rust"]));
        let value = SectionValue::Summary("text".to_string());
        assert_eq!(serde_json::to_value(&value).unwrap(), json!("text"));
    }
}
