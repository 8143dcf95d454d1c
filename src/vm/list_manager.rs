//! 动态列表管理：保持编辑区条目与模型记录按ID一一对应

use crate::model::{
    document::{Document, RecordId, Removal},
    sections::SectionKind,
};
use crate::vm::{
    bridge::Region,
    view::{present_region, EntryRow, ResumeView},
};

fn mount_row<V: ResumeView + ?Sized>(doc: &Document, view: &mut V, kind: SectionKind, id: RecordId) {
    if let Some(record) = doc.record(kind, id) {
        view.append_entry(kind, EntryRow::from_record(record, kind.config()));
    }
}

/// 新建空白记录并在编辑区追加对应条目
pub fn add_entry<V: ResumeView + ?Sized>(doc: &mut Document, view: &mut V, kind: SectionKind) -> RecordId {
    let id = doc.add_record(kind);
    mount_row(doc, view, kind, id);
    tracing::info!("新增条目 {} / {}", kind, id);
    id
}

/// 删除条目与记录；集合被删空时补一条空白条目，然后重绘该区块
pub fn remove_entry<V: ResumeView + ?Sized>(
    doc: &mut Document,
    view: &mut V,
    kind: SectionKind,
    id: RecordId,
) -> Removal {
    let removal = doc.remove_record(kind, id);
    match removal {
        Removal::NotFound => {
            tracing::warn!("删除条目失败，记录不存在: {} / {}", kind, id);
            return removal;
        }
        Removal::Removed => view.remove_entry(kind, id),
        Removal::Replenished(fresh) => {
            view.remove_entry(kind, id);
            mount_row(doc, view, kind, fresh);
            tracing::info!("{} 已删空，补充空白条目 {}", kind, fresh);
        }
    }
    tracing::info!("删除条目 {} / {}", kind, id);
    present_region(doc, view, Region::Section(kind));
    removal
}

/// 条目字段编辑：更新记录后只重绘该区块
pub fn edit_entry<V: ResumeView + ?Sized>(
    doc: &mut Document,
    view: &mut V,
    kind: SectionKind,
    id: RecordId,
    field: &str,
    value: &str,
) -> bool {
    if !doc.update_record_field(kind, id, field, value) {
        tracing::warn!("忽略条目编辑: {} / {} 字段 {}", kind, id, field);
        return false;
    }
    tracing::debug!("条目编辑 {} / {} {} = {:?}", kind, id, field, value);
    present_region(doc, view, Region::Section(kind));
    true
}

/// 用模型中的记录重建所有区块的编辑条目
pub fn sync_entries<V: ResumeView + ?Sized>(doc: &Document, view: &mut V) {
    for kind in SectionKind::ALL {
        view.clear_entries(kind);
        for record in doc.records(kind) {
            view.append_entry(kind, EntryRow::from_record(record, kind.config()));
        }
    }
}

/// 重置为初始状态：每个区块一条空白条目
pub fn reset_entries<V: ResumeView + ?Sized>(doc: &mut Document, view: &mut V) {
    doc.reset();
    sync_entries(doc, view);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vm::{render::SectionPreview, view::RecordingView};

    fn mounted() -> (Document, RecordingView) {
        let doc = Document::new();
        let mut view = RecordingView::default();
        sync_entries(&doc, &mut view);
        (doc, view)
    }

    fn model_ids(doc: &Document, kind: SectionKind) -> Vec<RecordId> {
        doc.records(kind).iter().map(|r| r.id()).collect()
    }

    #[test]
    fn test_sync_mirrors_model() {
        let (doc, view) = mounted();
        for kind in SectionKind::ALL {
            assert_eq!(view.entry_ids(kind), model_ids(&doc, kind));
        }
    }

    #[test]
    fn test_add_entry_appends_row_with_default_fields() {
        let (mut doc, mut view) = mounted();
        let id = add_entry(&mut doc, &mut view, SectionKind::Projects);

        assert_eq!(view.entry_ids(SectionKind::Projects), model_ids(&doc, SectionKind::Projects));
        let row = view.entries[&SectionKind::Projects].last().expect("应该有新条目");
        assert_eq!(row.id, id);
        let keys: Vec<_> = row.fields.iter().map(|f| f.key).collect();
        assert_eq!(keys, ["title", "context", "tech", "details"]);
        assert!(row.fields.iter().all(|f| f.value.is_empty()));
        assert!(row.fields.iter().find(|f| f.key == "details").is_some_and(|f| f.multiline));
    }

    #[test]
    fn test_remove_entry_keeps_rows_in_sync() {
        let (mut doc, mut view) = mounted();
        let first = doc.records(SectionKind::Experience)[0].id();
        let second = add_entry(&mut doc, &mut view, SectionKind::Experience);

        let removal = remove_entry(&mut doc, &mut view, SectionKind::Experience, first);
        assert_eq!(removal, Removal::Removed);
        assert_eq!(view.entry_ids(SectionKind::Experience), [second]);
        assert_eq!(model_ids(&doc, SectionKind::Experience), [second]);
        assert_eq!(view.renders, ["experience"], "只重绘被修改的区块");
    }

    #[test]
    fn test_remove_last_entry_creates_blank_one() {
        let (mut doc, mut view) = mounted();
        let only = doc.records(SectionKind::Education)[0].id();
        edit_entry(&mut doc, &mut view, SectionKind::Education, only, "degree", "BSc");

        let removal = remove_entry(&mut doc, &mut view, SectionKind::Education, only);
        let Removal::Replenished(fresh) = removal else {
            panic!("应该补充空白条目，实际: {removal:?}");
        };
        assert_eq!(view.entry_ids(SectionKind::Education), [fresh]);
        assert_eq!(model_ids(&doc, SectionKind::Education), [fresh]);
        assert_eq!(
            view.sections[&SectionKind::Education],
            SectionPreview::Empty(SectionKind::Education.config().empty_text)
        );
    }

    #[test]
    fn test_remove_unknown_entry_is_noop() {
        let (mut doc, mut view) = mounted();
        let before = view.entry_ids(SectionKind::Projects);
        let removal = remove_entry(&mut doc, &mut view, SectionKind::Projects, RecordId::new());
        assert_eq!(removal, Removal::NotFound);
        assert_eq!(view.entry_ids(SectionKind::Projects), before);
        assert!(view.renders.is_empty(), "无效删除不应触发重绘");
    }

    #[test]
    fn test_edit_entry_rerenders_only_its_section() {
        let (mut doc, mut view) = mounted();
        let id = doc.records(SectionKind::Projects)[0].id();

        assert!(edit_entry(&mut doc, &mut view, SectionKind::Projects, id, "title", "Compiler"));
        assert_eq!(view.renders, ["projects"]);
        let SectionPreview::Entries(entries) = &view.sections[&SectionKind::Projects] else {
            panic!("编辑后区块应该有内容");
        };
        assert_eq!(entries[0].title, "Compiler");

        assert!(!edit_entry(&mut doc, &mut view, SectionKind::Projects, id, "nope", "x"));
        assert_eq!(view.renders.len(), 1, "未知字段不应触发重绘");
    }

    #[test]
    fn test_reset_entries_rebuilds_one_blank_row_each() {
        let (mut doc, mut view) = mounted();
        add_entry(&mut doc, &mut view, SectionKind::Experience);
        add_entry(&mut doc, &mut view, SectionKind::Experience);

        reset_entries(&mut doc, &mut view);
        for kind in SectionKind::ALL {
            assert_eq!(view.entry_ids(kind).len(), 1);
            assert_eq!(view.entry_ids(kind), model_ids(&doc, kind));
        }
    }
}
