use crate::algo::SortAlgorithm;
use crate::session::StructureKind;

/// Events flowing into the main loop from replay tasks.
#[derive(Debug, Clone)]
pub enum AppEvent {
    ReplayFinished {
        kind: StructureKind,
        message: String,
    },
    ReplayFailed {
        kind: StructureKind,
        message: String,
    },
}

/// What the input line is currently collecting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt {
    /// Comma-separated values replacing the active structure's contents.
    Values,
    /// Path to a CSV/TXT file of values.
    FilePath,
    PushValue,
    EnqueueValue,
    /// `<index> <value>` for a linked-list insert.
    InsertNode,
    /// `<index>` for a linked-list delete.
    DeleteNode,
}

impl Prompt {
    pub fn label(&self) -> &'static str {
        match self {
            Prompt::Values => "Values (comma-separated)",
            Prompt::FilePath => "File path",
            Prompt::PushValue => "Push value",
            Prompt::EnqueueValue => "Enqueue value",
            Prompt::InsertNode => "Insert (index value)",
            Prompt::DeleteNode => "Delete at index",
        }
    }
}

/// One toolbar entry: a sort algorithm over the array, or one of the
/// session structures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarItem {
    Sort(SortAlgorithm),
    Structure(StructureKind),
}

impl ToolbarItem {
    pub const ALL: [ToolbarItem; 7] = [
        ToolbarItem::Sort(SortAlgorithm::Bubble),
        ToolbarItem::Sort(SortAlgorithm::Insertion),
        ToolbarItem::Sort(SortAlgorithm::Merge),
        ToolbarItem::Sort(SortAlgorithm::Quick),
        ToolbarItem::Structure(StructureKind::Stack),
        ToolbarItem::Structure(StructureKind::Queue),
        ToolbarItem::Structure(StructureKind::LinkedList),
    ];

    pub fn title(&self) -> &'static str {
        match self {
            ToolbarItem::Sort(algorithm) => algorithm.display_name(),
            ToolbarItem::Structure(kind) => kind.display_name(),
        }
    }

    /// The structure kind this entry operates on.
    pub fn kind(&self) -> StructureKind {
        match self {
            ToolbarItem::Sort(_) => StructureKind::Array,
            ToolbarItem::Structure(kind) => *kind,
        }
    }
}
