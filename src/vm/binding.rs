//! 绑定层：把输入事件转成模型修改，并只重绘受影响的预览区域
//!
//! 所有入口都接受视图传来的名称字符串；未知名称记录警告后忽略。

use crate::model::{
    document::{Document, PersonalField, RecordId},
    sections::SectionKind,
};
use crate::utils::{format::parse_skills, print::PrintFacility};
use crate::vm::{
    bridge::{Region, STATUS_PREVIEW_REFRESHED, STATUS_READY, STATUS_RESET, STATUS_SENT_TO_PRINT},
    list_manager,
    render::render_all,
    view::{present_all, present_region, ResumeView},
};

/// 拥有文档模型与视图的绑定器（单线程，随会话存在）
pub struct ResumeBinder<V: ResumeView> {
    document: Document,
    view: V,
}

fn resolve_section(name: &str) -> Option<SectionKind> {
    name.parse::<SectionKind>()
        .map_err(|e| tracing::warn!("忽略区块操作: {}", e))
        .ok()
}

fn resolve_record(id: &str) -> Option<RecordId> {
    id.parse::<RecordId>()
        .map_err(|e| tracing::warn!("忽略条目操作: {}", e))
        .ok()
}

impl<V: ResumeView> ResumeBinder<V> {
    /// 创建初始文档，为每个区块挂载一条空白条目并完整渲染
    pub fn new(mut view: V) -> Self {
        let document = Document::new();
        list_manager::sync_entries(&document, &mut view);
        present_all(&document, &mut view);
        view.set_status(STATUS_READY);
        tracing::info!("简历编辑器已初始化");
        Self { document, view }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn render_region(&mut self, region: Region) {
        present_region(&self.document, &mut self.view, region);
    }

    pub fn render_all(&mut self) {
        present_all(&self.document, &mut self.view);
    }

    /// 个人信息输入（名称为输入控件的稳定名称，如 `full-name`）
    pub fn input_personal(&mut self, name: &str, value: &str) {
        let field = match name.parse::<PersonalField>() {
            Ok(field) => field,
            Err(e) => {
                tracing::warn!("忽略输入: {}", e);
                return;
            }
        };
        self.document.set_personal_field(field, value);
        tracing::debug!("个人信息 {} 已更新", name);
        self.render_region(Region::Header);
    }

    pub fn input_summary(&mut self, value: &str) {
        self.document.set_summary(value);
        self.render_region(Region::Summary);
    }

    /// 技能输入为原始文本，解析后整体替换
    pub fn input_skills(&mut self, raw: &str) {
        let skills = parse_skills(raw);
        tracing::debug!("技能列表更新为 {} 项", skills.len());
        self.document.set_skills(skills);
        self.render_region(Region::Skills);
    }

    pub fn add_entry(&mut self, section: &str) -> Option<RecordId> {
        let kind = resolve_section(section)?;
        Some(list_manager::add_entry(&mut self.document, &mut self.view, kind))
    }

    pub fn remove_entry(&mut self, section: &str, id: &str) {
        let (Some(kind), Some(id)) = (resolve_section(section), resolve_record(id)) else {
            return;
        };
        list_manager::remove_entry(&mut self.document, &mut self.view, kind, id);
    }

    pub fn edit_entry(&mut self, section: &str, id: &str, field: &str, value: &str) {
        let (Some(kind), Some(id)) = (resolve_section(section), resolve_record(id)) else {
            return;
        };
        list_manager::edit_entry(&mut self.document, &mut self.view, kind, id, field, value);
    }

    /// 表单提交：完整重绘并闪烁预览边框
    pub fn refresh(&mut self) {
        self.render_all();
        self.view.flash_preview();
        self.view.set_status(STATUS_PREVIEW_REFRESHED);
    }

    /// 恢复初始状态：清空输入、每个区块一条空白条目、完整重绘
    pub fn reset(&mut self) {
        self.view.clear_inputs();
        list_manager::reset_entries(&mut self.document, &mut self.view);
        self.render_all();
        self.view.set_status(STATUS_RESET);
        tracing::info!("表单已重置");
    }

    /// 渲染纯文本简历并交给打印设施
    pub fn print(&mut self, printer: &mut dyn PrintFacility) {
        let text = render_all(&self.document).to_plain_text();
        printer.print(&text);
        self.view.set_status(STATUS_SENT_TO_PRINT);
    }

    /// 文档快照（格式化JSON）
    pub fn document_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.document)
    }
}
