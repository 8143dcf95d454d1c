//! 程序入口：初始化日志、加载 Slint UI，并完成 VM 绑定

use std::{cell::RefCell, rc::Rc, time::Duration};

use chrono::Datelike;
use slint::{ComponentHandle, Model, ModelRc, SharedString, VecModel};
use tracing_subscriber::fmt::SubscriberBuilder;

use resume_builder::{
    config::{AppConfig, PrintTarget},
    model::{document::RecordId, sections::SectionKind},
    utils::{
        clipboard::copy_to_clipboard,
        print::{ClipboardPrinter, LogPrinter, PrintFacility},
    },
    vm::{
        bridge::{STATUS_ERROR_PREFIX, STATUS_JSON_COPIED},
        render::{EntryPreview, HeaderPreview, SectionPreview},
        view::{EntryRow, ResumeView},
    },
    ResumeBinder,
};

slint::include_modules!();

/// 预览闪烁持续时间
const PULSE_DURATION: Duration = Duration::from_millis(700);

// EntryData转换实现
impl From<&EntryRow> for EntryData {
    /// 将条目行转换为Slint可用的数据结构
    fn from(row: &EntryRow) -> Self {
        let fields: Vec<EntryFieldData> = row
            .fields
            .iter()
            .map(|f| EntryFieldData {
                key: f.key.into(),
                label: f.label.into(),
                value: f.value.as_str().into(),
                multiline: f.multiline,
            })
            .collect();
        Self {
            id: row.id.to_string().into(),
            fields: ModelRc::new(VecModel::from(fields)),
        }
    }
}

impl From<&EntryPreview> for PreviewBlock {
    fn from(entry: &EntryPreview) -> Self {
        let bullets: Vec<SharedString> = entry.bullets.iter().map(|b| b.as_str().into()).collect();
        Self {
            title: entry.title.as_str().into(),
            meta: entry.meta.as_deref().unwrap_or_default().into(),
            bullets: ModelRc::new(VecModel::from(bullets)),
            empty: false,
        }
    }
}

fn preview_blocks(preview: &SectionPreview) -> ModelRc<PreviewBlock> {
    let blocks: Vec<PreviewBlock> = match preview {
        SectionPreview::Empty(text) => vec![PreviewBlock {
            title: (*text).into(),
            meta: SharedString::default(),
            bullets: ModelRc::default(),
            empty: true,
        }],
        SectionPreview::Entries(entries) => entries.iter().map(PreviewBlock::from).collect(),
    };
    ModelRc::new(VecModel::from(blocks))
}

/// Slint 窗口对 `ResumeView` 的实现
struct SlintView {
    window: slint::Weak<AppWindow>,
    experience_rows: Rc<VecModel<EntryData>>,
    projects_rows: Rc<VecModel<EntryData>>,
    education_rows: Rc<VecModel<EntryData>>,
}

impl SlintView {
    fn new(app_window: &AppWindow) -> Self {
        let view = Self {
            window: app_window.as_weak(),
            experience_rows: Rc::new(VecModel::default()),
            projects_rows: Rc::new(VecModel::default()),
            education_rows: Rc::new(VecModel::default()),
        };
        app_window.set_experience_entries(ModelRc::from(view.experience_rows.clone()));
        app_window.set_projects_entries(ModelRc::from(view.projects_rows.clone()));
        app_window.set_education_entries(ModelRc::from(view.education_rows.clone()));
        view
    }

    fn rows(&self, kind: SectionKind) -> &Rc<VecModel<EntryData>> {
        match kind {
            SectionKind::Experience => &self.experience_rows,
            SectionKind::Projects => &self.projects_rows,
            SectionKind::Education => &self.education_rows,
        }
    }
}

impl ResumeView for SlintView {
    fn show_header(&mut self, header: &HeaderPreview) {
        if let Some(app_window) = self.window.upgrade() {
            app_window.set_preview_name(header.name.as_str().into());
            app_window.set_preview_headline(header.headline.as_str().into());
            app_window.set_preview_contact(header.contact.as_str().into());
            app_window.set_preview_links(header.links.as_str().into());
        }
    }

    fn show_summary(&mut self, summary: &str) {
        if let Some(app_window) = self.window.upgrade() {
            app_window.set_preview_summary(summary.into());
        }
    }

    fn show_skills(&mut self, skills: &[String]) {
        if let Some(app_window) = self.window.upgrade() {
            let items: Vec<SharedString> = skills.iter().map(|s| s.as_str().into()).collect();
            app_window.set_preview_skills(ModelRc::new(VecModel::from(items)));
        }
    }

    fn show_section(&mut self, kind: SectionKind, preview: &SectionPreview) {
        let Some(app_window) = self.window.upgrade() else {
            return;
        };
        let blocks = preview_blocks(preview);
        match kind {
            SectionKind::Experience => app_window.set_preview_experience(blocks),
            SectionKind::Projects => app_window.set_preview_projects(blocks),
            SectionKind::Education => app_window.set_preview_education(blocks),
        }
    }

    fn append_entry(&mut self, kind: SectionKind, row: EntryRow) {
        self.rows(kind).push(EntryData::from(&row));
    }

    fn remove_entry(&mut self, kind: SectionKind, id: RecordId) {
        let rows = self.rows(kind);
        let id = id.to_string();
        let index = (0..rows.row_count())
            .find(|&i| rows.row_data(i).is_some_and(|row| row.id.as_str() == id));
        match index {
            Some(index) => {
                rows.remove(index);
            }
            None => tracing::warn!("视图中找不到条目 {} / {}", kind, id),
        }
    }

    fn clear_entries(&mut self, kind: SectionKind) {
        self.rows(kind).set_vec(Vec::new());
    }

    fn clear_inputs(&mut self) {
        if let Some(app_window) = self.window.upgrade() {
            app_window.set_full_name("".into());
            app_window.set_headline("".into());
            app_window.set_email("".into());
            app_window.set_phone("".into());
            app_window.set_location("".into());
            app_window.set_linkedin("".into());
            app_window.set_portfolio("".into());
            app_window.set_summary("".into());
            app_window.set_skills("".into());
        }
    }

    fn flash_preview(&mut self) {
        if let Some(app_window) = self.window.upgrade() {
            app_window.set_pulse(true);
            let app_window_weak = self.window.clone();
            slint::Timer::single_shot(PULSE_DURATION, move || {
                if let Some(app_window) = app_window_weak.upgrade() {
                    app_window.set_pulse(false);
                }
            });
        }
    }

    fn set_status(&mut self, message: &str) {
        if let Some(app_window) = self.window.upgrade() {
            app_window.set_status_message(message.into());
        }
    }
}

/// VM桥接器：管理UI与数据层的交互
struct ViewModelBridge {
    binder: Rc<RefCell<ResumeBinder<SlintView>>>,
    printer: Rc<RefCell<Box<dyn PrintFacility>>>,
}

impl ViewModelBridge {
    /// 创建新的VM桥接器并绑定所有回调
    fn new(app_window: &AppWindow, printer: Box<dyn PrintFacility>) -> Self {
        let binder = ResumeBinder::new(SlintView::new(app_window));
        let bridge = Self {
            binder: Rc::new(RefCell::new(binder)),
            printer: Rc::new(RefCell::new(printer)),
        };

        // 绑定所有UI回调
        bridge.setup_callbacks(app_window);
        bridge
    }

    /// 设置所有UI回调函数
    fn setup_callbacks(&self, app_window: &AppWindow) {
        // === 个人信息输入 ===
        {
            let binder = self.binder.clone();
            app_window.on_personal_edited(move |name, value| {
                binder.borrow_mut().input_personal(&name, &value);
            });
        }

        // === 摘要与技能输入 ===
        {
            let binder = self.binder.clone();
            app_window.on_summary_edited(move |value| {
                binder.borrow_mut().input_summary(&value);
            });
        }
        {
            let binder = self.binder.clone();
            app_window.on_skills_edited(move |value| {
                binder.borrow_mut().input_skills(&value);
            });
        }

        // === 动态条目 ===
        {
            let binder = self.binder.clone();
            app_window.on_add_entry(move |section| {
                binder.borrow_mut().add_entry(&section);
            });
        }
        {
            let binder = self.binder.clone();
            app_window.on_remove_entry(move |section, id| {
                binder.borrow_mut().remove_entry(&section, &id);
            });
        }
        {
            let binder = self.binder.clone();
            app_window.on_entry_field_edited(move |section, id, field, value| {
                binder.borrow_mut().edit_entry(&section, &id, &field, &value);
            });
        }

        // === 表单动作 ===
        {
            let binder = self.binder.clone();
            app_window.on_refresh_preview(move || {
                binder.borrow_mut().refresh();
            });
        }
        {
            // 延迟到当前事件处理完成之后再重置
            let binder = self.binder.clone();
            app_window.on_reset_form(move || {
                let binder = binder.clone();
                slint::Timer::single_shot(Duration::ZERO, move || {
                    binder.borrow_mut().reset();
                });
            });
        }
        {
            let binder = self.binder.clone();
            let printer = self.printer.clone();
            app_window.on_print_preview(move || {
                let mut printer = printer.borrow_mut();
                binder.borrow_mut().print(&mut **printer);
            });
        }
        {
            let binder = self.binder.clone();
            app_window.on_copy_json(move || {
                Self::handle_copy_json(&binder);
            });
        }
    }

    /// 将文档快照复制到剪贴板
    fn handle_copy_json(binder: &Rc<RefCell<ResumeBinder<SlintView>>>) {
        let json = binder.borrow().document_json();
        let status = match json {
            Ok(json) => match copy_to_clipboard(&json) {
                Ok(()) => {
                    tracing::info!("文档JSON已复制 ({} 字节)", json.len());
                    STATUS_JSON_COPIED.to_string()
                }
                Err(e) => {
                    tracing::error!("复制JSON失败: {}", e);
                    format!("{STATUS_ERROR_PREFIX}{e}")
                }
            },
            Err(e) => {
                tracing::error!("序列化文档失败: {}", e);
                format!("{STATUS_ERROR_PREFIX}{e}")
            }
        };
        binder.borrow_mut().view_mut().set_status(&status);
    }
}

fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env();

    // 初始化日志输出
    let _ = SubscriberBuilder::default()
        .with_max_level(config.log_level)
        .try_init();
    tracing::info!("运行配置: {:?}", config);

    let app = AppWindow::new().map_err(|e| anyhow::anyhow!("UI 初始化失败: {e}"))?;
    app.set_copyright_year(chrono::Local::now().year().to_string().into());
    for kind in SectionKind::ALL {
        let section = kind.config();
        let texts = SectionTexts {
            heading: section.heading.into(),
            add_label: section.add_label.into(),
        };
        match kind {
            SectionKind::Experience => app.set_experience_texts(texts),
            SectionKind::Projects => app.set_projects_texts(texts),
            SectionKind::Education => app.set_education_texts(texts),
        }
    }

    let printer: Box<dyn PrintFacility> = match config.print_target {
        PrintTarget::Clipboard => Box::new(ClipboardPrinter),
        PrintTarget::Log => Box::new(LogPrinter),
    };

    // 创建VM桥接器并绑定UI回调
    let _bridge = ViewModelBridge::new(&app, printer);

    tracing::info!("应用启动成功，UI已初始化");
    app.run().map_err(|e| anyhow::anyhow!("事件循环异常退出: {e}"))?;
    Ok(())
}
