//! 预览渲染：从 Document 到预览内容的纯投影，不修改模型

use std::fmt::Write as _;

use crate::model::{
    document::{Document, DynamicRecord, PersonalInfo},
    sections::{MetaPart, SectionConfig, SectionKind},
};
use crate::utils::format::{build_meta_line, format_bullets, format_dates, format_link};

pub const NAME_PLACEHOLDER: &str = "Your Name";
pub const HEADLINE_PLACEHOLDER: &str = "Target Role / Headline";
pub const CONTACT_PLACEHOLDER: &str = "email@example.com | +00 00000 00000 | City, Country";
pub const LINKS_PLACEHOLDER: &str = "LinkedIn | Portfolio";
pub const SUMMARY_PLACEHOLDER: &str = "Concise overview of your skills, achievements, and tools.";
pub const SKILLS_PLACEHOLDER: &str = "Add role-specific keywords";
/// 联系方式与链接行的分隔符
pub const CONTACT_SEPARATOR: &str = " | ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderPreview {
    pub name: String,
    pub headline: String,
    pub contact: String,
    pub links: String,
}

/// 一条有意义记录的预览块
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryPreview {
    pub title: String,
    /// 所有部分都为空时省略
    pub meta: Option<String>,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionPreview {
    /// 没有有意义的记录，显示区块的占位文本
    Empty(&'static str),
    Entries(Vec<EntryPreview>),
}

/// 完整预览（按初始化顺序）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    pub header: HeaderPreview,
    pub summary: String,
    pub skills: Vec<String>,
    pub sections: Vec<(SectionKind, SectionPreview)>,
}

fn or_placeholder(value: &str, placeholder: &str) -> String {
    if value.is_empty() {
        placeholder.to_string()
    } else {
        value.to_string()
    }
}

pub fn render_header(personal: &PersonalInfo) -> HeaderPreview {
    let contacts: Vec<&str> = [&personal.email, &personal.phone, &personal.location]
        .into_iter()
        .map(String::as_str)
        .filter(|s| !s.is_empty())
        .collect();
    let contact = if contacts.is_empty() {
        CONTACT_PLACEHOLDER.to_string()
    } else {
        contacts.join(CONTACT_SEPARATOR)
    };

    let mut links = Vec::new();
    if !personal.linkedin.is_empty() {
        links.push(format!("LinkedIn: {}", format_link(&personal.linkedin)));
    }
    if !personal.portfolio.is_empty() {
        links.push(format!("Portfolio: {}", format_link(&personal.portfolio)));
    }
    let links = if links.is_empty() {
        LINKS_PLACEHOLDER.to_string()
    } else {
        links.join(CONTACT_SEPARATOR)
    };

    HeaderPreview {
        name: or_placeholder(&personal.full_name, NAME_PLACEHOLDER),
        headline: or_placeholder(&personal.headline, HEADLINE_PLACEHOLDER),
        contact,
        links,
    }
}

pub fn render_summary(summary: &str) -> String {
    or_placeholder(summary, SUMMARY_PLACEHOLDER)
}

pub fn render_skills(skills: &[String]) -> Vec<String> {
    if skills.is_empty() {
        vec![SKILLS_PLACEHOLDER.to_string()]
    } else {
        skills.to_vec()
    }
}

fn render_entry(record: &DynamicRecord, config: &SectionConfig) -> EntryPreview {
    let meta = build_meta_line(config.meta.iter().map(|part| match *part {
        MetaPart::Field(key) => record.field(key).to_string(),
        MetaPart::DateRange { start, end } => format_dates(record.field(start), record.field(end)),
    }));

    EntryPreview {
        title: or_placeholder(record.field(config.title_field), config.title_placeholder),
        meta: (!meta.trim().is_empty()).then_some(meta),
        bullets: format_bullets(record.field(config.details_field)),
    }
}

/// 渲染一个动态区块：只显示有意义的记录，保持模型顺序
pub fn render_section(records: &[DynamicRecord], config: &SectionConfig) -> SectionPreview {
    let entries: Vec<EntryPreview> = records
        .iter()
        .filter(|record| record.is_meaningful(config))
        .map(|record| render_entry(record, config))
        .collect();

    if entries.is_empty() {
        SectionPreview::Empty(config.empty_text)
    } else {
        SectionPreview::Entries(entries)
    }
}

pub fn render_document_section(doc: &Document, kind: SectionKind) -> SectionPreview {
    render_section(doc.records(kind), kind.config())
}

pub fn render_all(doc: &Document) -> Preview {
    Preview {
        header: render_header(doc.personal()),
        summary: render_summary(doc.summary()),
        skills: render_skills(doc.skills()),
        sections: SectionKind::ALL
            .into_iter()
            .map(|kind| (kind, render_document_section(doc, kind)))
            .collect(),
    }
}

impl Preview {
    /// 展平为可打印的纯文本
    pub fn to_plain_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", self.header.name);
        let _ = writeln!(out, "{}", self.header.headline);
        let _ = writeln!(out, "{}", self.header.contact);
        let _ = writeln!(out, "{}", self.header.links);

        let _ = writeln!(out, "\nSUMMARY\n{}", self.summary);

        let _ = writeln!(out, "\nSKILLS");
        for skill in &self.skills {
            let _ = writeln!(out, "• {skill}");
        }

        for (kind, section) in &self.sections {
            let _ = writeln!(out, "\n{}", kind.config().heading.to_uppercase());
            match section {
                SectionPreview::Empty(text) => {
                    let _ = writeln!(out, "{text}");
                }
                SectionPreview::Entries(entries) => {
                    for entry in entries {
                        let _ = writeln!(out, "{}", entry.title);
                        if let Some(meta) = &entry.meta {
                            let _ = writeln!(out, "{meta}");
                        }
                        for bullet in &entry.bullets {
                            let _ = writeln!(out, "  • {bullet}");
                        }
                    }
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::document::PersonalField;

    fn doc_with_experience(fields: &[(&str, &str)]) -> Document {
        let mut doc = Document::new();
        let id = doc.records(SectionKind::Experience)[0].id();
        for (field, value) in fields {
            doc.update_record_field(SectionKind::Experience, id, field, value);
        }
        doc
    }

    #[test]
    fn test_empty_header_uses_placeholders() {
        let header = render_header(&PersonalInfo::default());
        assert_eq!(header.name, NAME_PLACEHOLDER);
        assert_eq!(header.headline, HEADLINE_PLACEHOLDER);
        assert_eq!(header.contact, CONTACT_PLACEHOLDER);
        assert_eq!(header.links, LINKS_PLACEHOLDER);
    }

    #[test]
    fn test_header_contact_and_links() {
        let mut doc = Document::new();
        doc.set_personal_field(PersonalField::FullName, "Ada Lovelace");
        doc.set_personal_field(PersonalField::Email, "ada@example.com");
        doc.set_personal_field(PersonalField::Location, "London");
        doc.set_personal_field(PersonalField::Portfolio, "https://www.ada.dev/work/");

        let header = render_header(doc.personal());
        assert_eq!(header.name, "Ada Lovelace");
        assert_eq!(header.headline, HEADLINE_PLACEHOLDER);
        assert_eq!(header.contact, "ada@example.com | London", "空的电话不应出现");
        assert_eq!(header.links, "Portfolio: ada.dev/work");

        doc.set_personal_field(PersonalField::Linkedin, "linkedin.com/in/ada");
        let header = render_header(doc.personal());
        assert_eq!(header.links, "LinkedIn: linkedin.com/in/ada | Portfolio: ada.dev/work");
    }

    #[test]
    fn test_summary_and_skills_placeholders() {
        assert_eq!(render_summary(""), SUMMARY_PLACEHOLDER);
        assert_eq!(render_summary("Builds compilers"), "Builds compilers");
        assert_eq!(render_skills(&[]), [SKILLS_PLACEHOLDER]);
        assert_eq!(render_skills(&["Rust".into(), "Go".into()]), ["Rust", "Go"]);
    }

    #[test]
    fn test_blank_section_renders_empty_text() {
        let doc = Document::new();
        for kind in SectionKind::ALL {
            assert_eq!(
                render_document_section(&doc, kind),
                SectionPreview::Empty(kind.config().empty_text)
            );
        }
    }

    #[test]
    fn test_experience_entry() {
        let doc = doc_with_experience(&[
            ("role", "Engineer"),
            ("company", "Acme"),
            ("start", "2021"),
            ("details", "- Shipped X\n• Improved Y"),
        ]);
        let SectionPreview::Entries(entries) = render_document_section(&doc, SectionKind::Experience)
        else {
            panic!("有内容的记录应该被渲染");
        };
        assert_eq!(
            entries,
            [EntryPreview {
                title: "Engineer".into(),
                meta: Some("Acme • 2021 – Present".into()),
                bullets: vec!["Shipped X".into(), "Improved Y".into()],
            }]
        );
    }

    #[test]
    fn test_title_placeholder_and_missing_meta() {
        let doc = doc_with_experience(&[("details", "Only details")]);
        let SectionPreview::Entries(entries) = render_document_section(&doc, SectionKind::Experience)
        else {
            panic!("只有详情的记录也有意义");
        };
        assert_eq!(entries[0].title, "Role / Title");
        assert_eq!(entries[0].meta, None, "元信息全空时应该省略");
        assert_eq!(entries[0].bullets, ["Only details"]);
    }

    #[test]
    fn test_only_meaningful_records_render_in_order() {
        let mut doc = Document::new();
        let first = doc.records(SectionKind::Projects)[0].id();
        let _blank = doc.add_record(SectionKind::Projects);
        let third = doc.add_record(SectionKind::Projects);
        doc.update_record_field(SectionKind::Projects, third, "title", "Second");
        doc.update_record_field(SectionKind::Projects, first, "tech", "Rust");

        let SectionPreview::Entries(entries) = render_document_section(&doc, SectionKind::Projects)
        else {
            panic!("应该有两条记录");
        };
        let titles: Vec<_> = entries.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, ["Project Title", "Second"]);
        assert_eq!(entries[0].meta.as_deref(), Some("Rust"));
        assert!(entries[1].bullets.is_empty());
    }

    #[test]
    fn test_education_meta_with_end_only() {
        let mut doc = Document::new();
        let id = doc.records(SectionKind::Education)[0].id();
        doc.update_record_field(SectionKind::Education, id, "institution", "MIT");
        doc.update_record_field(SectionKind::Education, id, "end", "2020");

        let SectionPreview::Entries(entries) = render_document_section(&doc, SectionKind::Education)
        else {
            panic!("应该渲染教育记录");
        };
        assert_eq!(entries[0].title, "Degree");
        assert_eq!(entries[0].meta.as_deref(), Some("MIT •  – 2020"));
    }

    #[test]
    fn test_render_all_order_and_plain_text() {
        let mut doc = doc_with_experience(&[("role", "Engineer")]);
        doc.set_personal_field(PersonalField::FullName, "Ada");
        doc.set_skills(["Rust"]);

        let preview = render_all(&doc);
        let kinds: Vec<_> = preview.sections.iter().map(|(k, _)| *k).collect();
        assert_eq!(kinds, SectionKind::ALL);

        let text = preview.to_plain_text();
        assert!(text.starts_with("Ada\nTarget Role / Headline\n"));
        assert!(text.contains("\nSKILLS\n• Rust\n"));
        assert!(text.contains("\nEXPERIENCE\nEngineer\n"));
        assert!(text.contains("\nPROJECTS\nHighlight engineering builds, hackathons, or research.\n"));
    }
}
