//! services/api/src/adapters/enhance_mock.rs
//!
//! A deterministic implementation of the `EnhanceService` port. Used when no
//! OpenAI API key is configured, so the whole enhance flow stays exercisable
//! offline and in tests.

use async_trait::async_trait;
use resume_core::domain::{SectionKind, SectionValue};
use resume_core::ports::{EnhanceService, PortResult};

/// An enhancer that rewrites each section with fixed boilerplate.
#[derive(Clone, Default)]
pub struct MockEnhanceAdapter;

impl MockEnhanceAdapter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl EnhanceService for MockEnhanceAdapter {
    async fn enhance_section(
        &self,
        _kind: SectionKind,
        content: SectionValue,
    ) -> PortResult<SectionValue> {
        Ok(match content {
            SectionValue::Summary(text) => SectionValue::Summary(format!(
                "Enhanced: {} - With proven expertise in delivering high-impact solutions \
                 and driving business growth through innovative technology implementations.",
                text
            )),
            SectionValue::Experience(items) => SectionValue::Experience(
                items
                    .into_iter()
                    .map(|mut item| {
                        item.description = format!(
                            "Enhanced: {} - Demonstrated exceptional leadership and technical \
                             skills while consistently exceeding performance targets.",
                            item.description
                        );
                        item
                    })
                    .collect(),
            ),
            SectionValue::Education(items) => SectionValue::Education(
                items
                    .into_iter()
                    .map(|mut item| {
                        item.description = format!(
                            "Enhanced: {} - Achieved academic excellence with strong foundation \
                             in core principles and practical applications.",
                            item.description
                        );
                        item
                    })
                    .collect(),
            ),
            SectionValue::Skills(mut skills) => {
                skills.extend(
                    [
                        "Leadership",
                        "Problem Solving",
                        "Communication",
                        "Strategic Planning",
                    ]
                    .map(String::from),
                );
                SectionValue::Skills(skills)
            }
            SectionValue::PersonalInfo(mut info) => {
                info.name = format!("{} (Professional)", info.name);
                SectionValue::PersonalInfo(info)
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use resume_core::domain::Resume;
    use resume_core::editor::merge_enhanced;

    #[tokio::test]
    async fn enhanced_sections_keep_their_shape() {
        let enhancer = MockEnhanceAdapter::new();
        let resume = Resume::sample();

        for kind in [
            SectionKind::PersonalInfo,
            SectionKind::Summary,
            SectionKind::Experience,
            SectionKind::Education,
            SectionKind::Skills,
        ] {
            let enhanced = enhancer
                .enhance_section(kind, resume.section(kind))
                .await
                .unwrap();
            assert_eq!(enhanced.kind(), kind);
        }
    }

    #[tokio::test]
    async fn experience_enhancement_rewrites_descriptions_only() {
        let enhancer = MockEnhanceAdapter::new();
        let resume = Resume::sample();

        let enhanced = enhancer
            .enhance_section(
                SectionKind::Experience,
                resume.section(SectionKind::Experience),
            )
            .await
            .unwrap();
        let merged = merge_enhanced(&resume, enhanced);

        assert!(merged.experience[0].description.starts_with("Enhanced: "));
        assert_eq!(merged.experience[0].id, resume.experience[0].id);
        assert_eq!(merged.experience[0].company, resume.experience[0].company);
    }

    #[tokio::test]
    async fn skills_enhancement_appends_the_fixed_four() {
        let enhancer = MockEnhanceAdapter::new();
        let enhanced = enhancer
            .enhance_section(
                SectionKind::Skills,
                SectionValue::Skills(vec!["Rust".to_string()]),
            )
            .await
            .unwrap();
        assert_eq!(
            enhanced,
            SectionValue::Skills(
                ["Rust", "Leadership", "Problem Solving", "Communication", "Strategic Planning"]
                    .map(String::from)
                    .to_vec()
            )
        );
    }
}
