pub mod domain;
pub mod editor;
pub mod export;
pub mod ports;

pub use domain::{
    EducationEntry, EntryKind, ExperienceEntry, FieldRole, PersonalField, PersonalInfo, Resume,
    SectionEntry, SectionKind, SectionValue, UnknownSection,
};
pub use export::ExportError;
pub use ports::{EnhanceService, PortError, PortResult, ResumeStore};
