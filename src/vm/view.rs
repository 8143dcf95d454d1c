//! 视图边界：绑定层通过 `ResumeView` 写入预览区域和条目列表
//!
//! Slint 窗口在 main.rs 中实现该 trait；测试使用 `RecordingView`。

use crate::model::{
    document::{Document, DynamicRecord, RecordId},
    sections::{SectionConfig, SectionKind},
};
use crate::vm::{
    bridge::Region,
    render::{self, HeaderPreview, SectionPreview},
};

/// 编辑区中一个条目的输入字段
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryFieldRow {
    pub key: &'static str,
    pub label: &'static str,
    pub value: String,
    pub multiline: bool,
}

/// 编辑区中的一个可重复条目，与模型记录按ID一一对应
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryRow {
    pub id: RecordId,
    pub fields: Vec<EntryFieldRow>,
}

impl EntryRow {
    pub fn from_record(record: &DynamicRecord, config: &SectionConfig) -> Self {
        Self {
            id: record.id(),
            fields: config
                .fields
                .iter()
                .map(|spec| EntryFieldRow {
                    key: spec.key,
                    label: spec.label,
                    value: record.field(spec.key).to_string(),
                    multiline: spec.multiline,
                })
                .collect(),
        }
    }
}

pub trait ResumeView {
    fn show_header(&mut self, header: &HeaderPreview);
    fn show_summary(&mut self, summary: &str);
    fn show_skills(&mut self, skills: &[String]);
    fn show_section(&mut self, kind: SectionKind, preview: &SectionPreview);

    fn append_entry(&mut self, kind: SectionKind, row: EntryRow);
    fn remove_entry(&mut self, kind: SectionKind, id: RecordId);
    fn clear_entries(&mut self, kind: SectionKind);

    /// 清空个人信息、摘要、技能输入框
    fn clear_inputs(&mut self);

    fn flash_preview(&mut self) {}

    fn set_status(&mut self, _message: &str) {}
}

/// 重新渲染单个预览区域并写入视图
pub fn present_region<V: ResumeView + ?Sized>(doc: &Document, view: &mut V, region: Region) {
    tracing::trace!("重绘预览区域 {}", region);
    match region {
        Region::Header => view.show_header(&render::render_header(doc.personal())),
        Region::Summary => view.show_summary(&render::render_summary(doc.summary())),
        Region::Skills => view.show_skills(&render::render_skills(doc.skills())),
        Region::Section(kind) => {
            view.show_section(kind, &render::render_document_section(doc, kind))
        }
    }
}

/// 按初始化顺序渲染全部区域
pub fn present_all<V: ResumeView + ?Sized>(doc: &Document, view: &mut V) {
    for region in Region::ALL {
        present_region(doc, view, region);
    }
}

#[cfg(test)]
pub use recording::RecordingView;

#[cfg(test)]
mod recording {
    use std::collections::HashMap;

    use super::*;

    /// 记录所有视图写入，用于断言绑定层行为
    #[derive(Debug, Default)]
    pub struct RecordingView {
        pub header: Option<HeaderPreview>,
        pub summary: Option<String>,
        pub skills: Option<Vec<String>>,
        pub sections: HashMap<SectionKind, SectionPreview>,
        pub entries: HashMap<SectionKind, Vec<EntryRow>>,
        /// 每次区域写入的名称，按发生顺序
        pub renders: Vec<&'static str>,
        pub inputs_cleared: usize,
        pub flashes: usize,
        pub status: Option<String>,
    }

    impl RecordingView {
        pub fn entry_ids(&self, kind: SectionKind) -> Vec<RecordId> {
            self.entries
                .get(&kind)
                .map(|rows| rows.iter().map(|r| r.id).collect())
                .unwrap_or_default()
        }
    }

    impl ResumeView for RecordingView {
        fn show_header(&mut self, header: &HeaderPreview) {
            self.header = Some(header.clone());
            self.renders.push("header");
        }

        fn show_summary(&mut self, summary: &str) {
            self.summary = Some(summary.to_string());
            self.renders.push("summary");
        }

        fn show_skills(&mut self, skills: &[String]) {
            self.skills = Some(skills.to_vec());
            self.renders.push("skills");
        }

        fn show_section(&mut self, kind: SectionKind, preview: &SectionPreview) {
            self.sections.insert(kind, preview.clone());
            self.renders.push(kind.name());
        }

        fn append_entry(&mut self, kind: SectionKind, row: EntryRow) {
            self.entries.entry(kind).or_default().push(row);
        }

        fn remove_entry(&mut self, kind: SectionKind, id: RecordId) {
            if let Some(rows) = self.entries.get_mut(&kind) {
                rows.retain(|r| r.id != id);
            }
        }

        fn clear_entries(&mut self, kind: SectionKind) {
            self.entries.remove(&kind);
        }

        fn clear_inputs(&mut self) {
            self.inputs_cleared += 1;
        }

        fn flash_preview(&mut self) {
            self.flashes += 1;
        }

        fn set_status(&mut self, message: &str) {
            self.status = Some(message.to_string());
        }
    }
}
