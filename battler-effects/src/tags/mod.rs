mod battler_tag;
mod behavior;
mod behaviors;
pub mod interceptors;
mod lapse_category;
mod lifecycle;
mod source_index;
mod tag_type;

pub use battler_tag::{
    BattlerTag,
    TagData,
    TagDuration,
};
pub use behavior::{
    TagBehavior,
    TagContext,
};
pub use lapse_category::LapseCategory;
pub use lifecycle::{
    AddTagOptions,
    LapseOutcome,
    add_tag,
    find_and_remove_tags,
    find_tags,
    get_tag,
    has_tag,
    lapse_tag,
    lapse_tags,
    lapse_tags_with_move,
    remove_all_tags,
    remove_tag,
    remove_tags_by_source_id,
    transfer_tags_by_source_id,
};
pub use source_index::SourceLinkIndex;
pub use tag_type::TagType;
